//! A single-player blackjack game model with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the deck, the player's chips
//! and both hands, and runs a round from wager to settlement. Front ends call
//! its commands and subscribe to the [`Event`]s it publishes after every
//! state change.
//!
//! # Example
//!
//! ```
//! use blackjack_engine::{Game, GameOptions, GameState, Turn};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.subscribe(|event| println!("now {:?}", event.state()));
//!
//! if game.place_wager_and_deal(10)? == GameState::Running {
//!     game.turn(Turn::Stay)?;
//! }
//! assert_eq!(game.state(), GameState::Finished);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod evaluator;
pub mod event;
pub mod game;
pub mod hand;
pub mod message;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DeckError, WagerError};
pub use event::{DealerView, Event, ListenerId, PlayerView, Snapshot};
pub use game::{Game, GameState, Turn};
pub use hand::{DealerHand, Hand, Participant, PlayerHand};
pub use options::{DefaultWager, GameOptions, ReshufflePolicy};
pub use result::{Outcome, RoundResult};
