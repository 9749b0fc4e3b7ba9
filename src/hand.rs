//! Player and dealer hand representations.

use alloc::vec::Vec;

use crate::card::Card;
use crate::evaluator::{self, BLACKJACK};

/// Who a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Participant {
    /// The human player.
    Human,
    /// The dealer.
    Dealer,
}

/// An ordered collection of cards owned by one participant.
///
/// Cards are kept in deal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    owner: Participant,
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new(owner: Participant) -> Self {
        Self {
            owner,
            cards: Vec::new(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns who holds this hand.
    #[must_use]
    pub const fn participant(&self) -> Participant {
        self.owner
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluator::evaluate(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluator::evaluate(&self.cards).1
    }

    /// Returns whether the hand is exactly two cards totalling 21.
    #[must_use]
    pub fn has_blackjack(&self) -> bool {
        evaluator::is_blackjack(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The human player's hand together with their chip balance.
///
/// Chips already exclude the current wager: it is taken out of the balance
/// when placed and paid back (or not) when the round is settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerHand {
    hand: Hand,
    chips: usize,
    wager: usize,
    last_wager: usize,
}

impl PlayerHand {
    /// Creates an empty hand holding `chips`.
    #[must_use]
    pub const fn new(chips: usize) -> Self {
        Self {
            hand: Hand::new(Participant::Human),
            chips,
            wager: 0,
            last_wager: 0,
        }
    }

    /// Returns the underlying hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether the hand is a natural blackjack.
    #[must_use]
    pub fn has_blackjack(&self) -> bool {
        self.hand.has_blackjack()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Returns the chip balance, not counting the current wager.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Returns the chips staked on the running round (0 between rounds).
    #[must_use]
    pub const fn wager(&self) -> usize {
        self.wager
    }

    /// Returns the wager of the most recently settled round.
    #[must_use]
    pub const fn last_wager(&self) -> usize {
        self.last_wager
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    pub(crate) fn clear(&mut self) {
        self.hand.clear();
    }

    /// Moves `amount` from the balance into the wager.
    ///
    /// Callers check the balance first.
    pub(crate) const fn stake(&mut self, amount: usize) {
        self.chips -= amount;
        self.wager += amount;
    }

    /// Ends the round: credits `payout`, records the wager and clears it.
    pub(crate) const fn settle(&mut self, payout: usize) {
        self.chips = self.chips.saturating_add(payout);
        self.last_wager = self.wager;
        self.wager = 0;
    }

    /// Restores the starting state with a fresh balance.
    pub(crate) fn reset(&mut self, chips: usize) {
        self.hand.clear();
        self.chips = chips;
        self.wager = 0;
        self.last_wager = 0;
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerHand {
    hand: Hand,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(Participant::Dealer),
            hole_revealed: false,
        }
    }

    /// Returns the underlying hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns the cards a player may see: everything once the hole card is
    /// revealed, otherwise just the up card.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        let cards = self.hand.cards();
        if self.hole_revealed {
            cards
        } else {
            &cards[..cards.len().min(1)]
        }
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Calculates the visible value (only up card if hole not revealed).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        evaluator::evaluate(self.visible_cards()).0
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.hand.is_soft()
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn has_blackjack(&self) -> bool {
        self.hand.has_blackjack()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    pub(crate) const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Clears the hand for a new round.
    pub(crate) fn clear(&mut self) {
        self.hand.clear();
        self.hole_revealed = false;
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
