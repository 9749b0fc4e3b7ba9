//! Status lines for a front end to show under the table.

use alloc::format;
use alloc::string::String;

use crate::event::Snapshot;
use crate::game::GameState;
use crate::result::Outcome;

const fn chips_word(amount: usize) -> &'static str {
    if amount == 1 { "chip" } else { "chips" }
}

/// Builds the status line for a table snapshot.
///
/// ```
/// use blackjack_engine::{Game, GameOptions};
/// use blackjack_engine::message::status_message;
///
/// let game = Game::new(GameOptions::default(), 1);
/// assert_eq!(status_message(&game.snapshot()), "Press Play to start the game.");
/// ```
#[must_use]
pub fn status_message(snapshot: &Snapshot) -> String {
    match snapshot.state {
        GameState::NotStarted => String::from("Press Play to start the game."),
        GameState::Running => format!(
            "Chips: {}    Current wager: {}",
            snapshot.player.chips, snapshot.player.wager
        ),
        GameState::Finished => {
            let last = snapshot.player.last_wager;
            let verdict = match snapshot.outcome() {
                Some(Outcome::DealerWins) => {
                    format!("You just lost {last} {}.", chips_word(last))
                }
                Some(Outcome::PlayerWins) => match snapshot.result {
                    Some(result) if result.player_blackjack => {
                        let won = result.winnings();
                        format!("You made a Blackjack and won {won} {}.", chips_word(won))
                    }
                    _ => format!("You just won {last} {}.", chips_word(last)),
                },
                Some(Outcome::Draw) => String::from("This one was a draw."),
                None => String::new(),
            };
            format!("{verdict} Deal again to play another round!")
        }
    }
}
