//! Game state types.

/// Game state.
///
/// The lifecycle is linear: `NotStarted` -> `Running` -> `Finished`, then
/// either a new deal back to `Running` or a full reset to `NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// No round has been dealt since the game was created or reset.
    NotStarted,
    /// Waiting for the player's turn.
    Running,
    /// The round has been settled.
    Finished,
}

/// A player action while a round is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Draw one card.
    Hit,
    /// Keep the current hand and let the dealer play.
    Stay,
    /// Double the wager, draw exactly one card, then stay.
    DoubleDown,
}
