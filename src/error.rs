//! Error types for game operations.
//!
//! Messages are written for the player: a front end can show them as-is.

use thiserror::Error;

/// Errors that can occur when placing a wager and dealing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WagerError {
    /// Wager amount is zero.
    #[error("the wager must be at least one chip")]
    ZeroWager,
    /// The player has no chips, or fewer than the requested wager.
    #[error("you do not have enough chips for this wager")]
    OutOfMoney,
    /// A round is already running.
    #[error("a round is already in progress")]
    InvalidState,
}

/// Errors that can occur during player turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No round is running.
    #[error("there is no round in progress")]
    InvalidState,
    /// Double down is only allowed as the first action of a round.
    #[error("you can only double down on your first two cards")]
    CannotDouble,
    /// Not enough chips left to double the wager.
    #[error("you do not have enough chips to double down")]
    OutOfMoney,
}

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left to draw.
    #[error("no cards left in the deck")]
    Exhausted,
}
