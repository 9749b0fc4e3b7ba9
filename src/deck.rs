//! A single shuffled 52-card deck.

use alloc::vec::Vec;

use log::debug;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A depleting deck of cards with its own seeded random number generator.
///
/// The top of the deck is the end of the internal vector, so drawing is a
/// `pop`.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a freshly shuffled deck from the given seed.
    ///
    /// ```
    /// use blackjack_engine::deck::Deck;
    ///
    /// let deck = Deck::new(7);
    /// assert_eq!(deck.len(), 52);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.shuffle();
        deck
    }

    /// Creates a deck that yields `draws` in the given order.
    ///
    /// Once the prepared cards are used up the deck behaves like any other
    /// deck: it is empty until shuffled, and shuffling uses `seed`.
    #[must_use]
    pub fn stacked(seed: u64, draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Refills the deck with all 52 cards in a new random order.
    pub fn shuffle(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(rank, suit));
            }
        }
        self.cards.shuffle(&mut self.rng);
        debug!("deck shuffled");
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted)
    }

    /// Draws the top card, reshuffling a full deck first if this one is empty.
    pub(crate) fn draw_or_reshuffle(&mut self) -> Card {
        loop {
            match self.draw() {
                Ok(card) => return card,
                Err(DeckError::Exhausted) => {
                    debug!("deck exhausted, reshuffling");
                    self.shuffle();
                }
            }
        }
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
