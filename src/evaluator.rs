//! Hand valuation and round resolution rules.

use crate::card::Card;
use crate::result::Outcome;

/// Highest total a hand can have without busting.
pub const BLACKJACK: u8 = 21;

/// Evaluates a set of cards, returning `(value, is_soft)`.
///
/// Every ace starts at 11 and is lowered to 1, one at a time, only while the
/// total is over 21. The hand is soft when an ace is still counted as 11.
///
/// ```
/// use blackjack_engine::{Card, Rank, Suit};
/// use blackjack_engine::evaluator::evaluate;
///
/// let cards = [
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Six, Suit::Hearts),
///     Card::new(Rank::Five, Suit::Clubs),
/// ];
/// assert_eq!(evaluate(&cards), (12, false));
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.base_value());
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Returns whether the cards form a natural: two cards totalling 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && evaluate(cards).0 == BLACKJACK
}

/// Decides a finished round from the final hand values.
///
/// A player bust loses even if the dealer also busts. Blackjack gets no
/// precedence here; it only affects the payout.
#[must_use]
pub const fn decide(player_value: u8, dealer_value: u8) -> Outcome {
    if player_value > BLACKJACK {
        Outcome::DealerWins
    } else if dealer_value > BLACKJACK || player_value > dealer_value {
        Outcome::PlayerWins
    } else if player_value < dealer_value {
        Outcome::DealerWins
    } else {
        Outcome::Draw
    }
}

/// Chips credited back to the player when a round ends.
///
/// The stake has already left the player's balance, so a loss returns
/// nothing, a draw returns the stake and a win returns the stake plus the
/// winnings. Winnings are the wager times `blackjack_pays` for a natural and
/// the wager itself otherwise.
#[must_use]
pub const fn payout(outcome: Outcome, wager: usize, blackjack: bool, blackjack_pays: usize) -> usize {
    match outcome {
        Outcome::DealerWins => 0,
        Outcome::Draw => wager,
        Outcome::PlayerWins => {
            let multiplier = if blackjack { blackjack_pays } else { 1 };
            wager.saturating_add(wager.saturating_mul(multiplier))
        }
    }
}
