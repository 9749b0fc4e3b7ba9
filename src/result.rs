//! Round result types.

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has higher value).
    PlayerWins,
    /// Dealer wins (player busts or dealer has higher value).
    DealerWins,
    /// Equal values.
    Draw,
}

/// Settlement details for a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The wager at settlement, including any double down.
    pub wager: usize,
    /// Chips credited back to the player (stake plus winnings).
    pub payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the player had a natural blackjack.
    pub player_blackjack: bool,
    /// Whether the dealer had a natural blackjack.
    pub dealer_blackjack: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl RoundResult {
    /// Chips won on top of the returned stake (0 unless the player won).
    #[must_use]
    pub const fn winnings(&self) -> usize {
        self.payout.saturating_sub(self.wager)
    }
}
