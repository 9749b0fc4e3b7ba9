//! Change notifications.
//!
//! Listeners receive an [`Event`] after every state transition of a
//! [`Game`](crate::Game). Each event carries an owned [`Snapshot`] of the
//! table, so listeners never need to borrow the game while it is being
//! mutated.

use alloc::boxed::Box;
use alloc::vec::Vec;

use log::trace;

use crate::card::Card;
use crate::game::GameState;
use crate::result::{Outcome, RoundResult};

/// What the player can see of their own hand and balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    /// Cards in deal order.
    pub cards: Vec<Card>,
    /// Hand value.
    pub value: u8,
    /// Whether the hand is a natural blackjack.
    pub blackjack: bool,
    /// Chip balance, not counting the current wager.
    pub chips: usize,
    /// Chips staked on the running round.
    pub wager: usize,
    /// Wager of the last settled round.
    pub last_wager: usize,
}

/// What the player can see of the dealer's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerView {
    /// Face-up cards in deal order.
    pub cards: Vec<Card>,
    /// Number of face-down cards.
    pub hidden: usize,
    /// Value of the face-up cards.
    pub value: u8,
}

/// Read-only copy of the table at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Current game state.
    pub state: GameState,
    /// The human player's side.
    pub player: PlayerView,
    /// The dealer's side.
    pub dealer: DealerView,
    /// Settlement of the last round, present once it has finished.
    pub result: Option<RoundResult>,
}

impl Snapshot {
    /// Outcome of the last finished round.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.result.map(|result| result.outcome)
    }
}

/// Notification published after a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    snapshot: Snapshot,
}

impl Event {
    pub(crate) const fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// The state the game moved into.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.snapshot.state
    }

    /// The table after the transition.
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

/// Handle returned by [`Game::subscribe`](crate::Game::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&Event) + Send>;

/// Ordered set of listeners, notified synchronously in subscription order.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    pub(crate) fn subscribe(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn publish(&mut self, event: &Event) {
        trace!(
            "publishing {:?} to {} listener(s)",
            event.state(),
            self.entries.len()
        );
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }
}

impl core::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listeners")
            .field("next_id", &self.next_id)
            .field("count", &self.entries.len())
            .finish()
    }
}
