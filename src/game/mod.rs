//! Game engine and state management.

use alloc::boxed::Box;

use log::info;

use crate::card::Card;
use crate::deck::Deck;
use crate::event::{DealerView, Event, ListenerId, Listeners, PlayerView, Snapshot};
use crate::hand::{DealerHand, PlayerHand};
use crate::options::GameOptions;
use crate::result::{Outcome, RoundResult};

mod actions;
mod dealer;
pub mod state;
mod wager;

pub use state::{GameState, Turn};

/// A single-player blackjack game.
///
/// The game owns the deck, the player's hand and chips, and the dealer's
/// hand, and is the only thing that mutates them. Commands take `&mut self`
/// and publish an [`Event`] to every listener once a transition is complete.
/// Listeners only see the event, so they cannot call back into the game
/// while it is notifying them.
///
/// The game does no locking of its own. It is `Send`, so a multi-threaded
/// host can put it behind its own mutex.
#[derive(Debug)]
pub struct Game {
    options: GameOptions,
    deck: Deck,
    state: GameState,
    player: PlayerHand,
    dealer: DealerHand,
    last_result: Option<RoundResult>,
    listeners: Listeners,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::NotStarted);
    /// assert_eq!(game.player().chips(), 100);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_deck(options, Deck::new(seed))
    }

    /// Creates a new game that draws from a prepared deck.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck) -> Self {
        Self {
            player: PlayerHand::new(options.starting_chips),
            options,
            deck,
            state: GameState::NotStarted,
            dealer: DealerHand::new(),
            last_result: None,
            listeners: Listeners::default(),
        }
    }

    /// Registers a listener for change notifications.
    ///
    /// Listeners are called synchronously, in subscription order, after
    /// every state transition.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Event) + Send + 'static,
    {
        self.listeners.subscribe(Box::new(listener))
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Starts over: chips back to the starting stake, hands emptied, deck
    /// reshuffled, state `NotStarted`.
    ///
    /// Allowed in any state. A wager on a running round is forfeited.
    pub fn full_reset(&mut self) {
        self.player.reset(self.options.starting_chips);
        self.dealer.clear();
        self.deck.shuffle();
        self.last_result = None;
        self.state = GameState::NotStarted;
        info!("game reset, chips {}", self.player.chips());
        self.emit();
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's hand and chips.
    #[must_use]
    pub const fn player(&self) -> &PlayerHand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the outcome of the current round, once it is finished.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::Finished => self.last_result.map(|result| result.outcome),
            GameState::NotStarted | GameState::Running => None,
        }
    }

    /// Returns the settlement of the most recent round.
    ///
    /// Kept while the next round is running; cleared by a full reset.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns a read-only copy of the table as the player sees it.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let dealer_cards = self.dealer.visible_cards().to_vec();
        Snapshot {
            state: self.state,
            player: PlayerView {
                cards: self.player.cards().to_vec(),
                value: self.player.value(),
                blackjack: self.player.has_blackjack(),
                chips: self.player.chips(),
                wager: self.player.wager(),
                last_wager: self.player.last_wager(),
            },
            dealer: DealerView {
                hidden: self.dealer.cards().len() - dealer_cards.len(),
                value: self.dealer.visible_value(),
                cards: dealer_cards,
            },
            result: self.outcome().and(self.last_result),
        }
    }

    /// Draws a card, reshuffling when the deck runs out.
    fn draw(&mut self) -> Card {
        self.deck.draw_or_reshuffle()
    }

    /// Publishes the current state to all listeners.
    fn emit(&mut self) {
        let event = Event::new(self.snapshot());
        self.listeners.publish(&event);
    }
}
