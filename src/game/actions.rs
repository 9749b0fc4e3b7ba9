use log::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::result::RoundResult;

use super::{Game, GameState, Turn};

impl Game {
    fn ensure_running(&self) -> Result<(), ActionError> {
        match self.state {
            GameState::Running => Ok(()),
            GameState::NotStarted | GameState::Finished => Err(ActionError::InvalidState),
        }
    }

    /// Takes a player turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is running, or for a double down that is
    /// not the first action or that the player cannot afford.
    pub fn turn(&mut self, turn: Turn) -> Result<(), ActionError> {
        match (self.state, turn) {
            (GameState::Running, Turn::Hit) => self.hit().map(|_| ()),
            (GameState::Running, Turn::Stay) => self.stay().map(|_| ()),
            (GameState::Running, Turn::DoubleDown) => self.double_down().map(|_| ()),
            (GameState::NotStarted | GameState::Finished, _) => Err(ActionError::InvalidState),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust settles the round at once as a dealer win; the dealer draws
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is running.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_running()?;

        let card = self.draw();
        self.player.add_card(card);
        debug!("player hits {card}, value {}", self.player.value());

        if self.player.is_bust() {
            self.finish_round();
        } else {
            self.emit();
        }

        Ok(card)
    }

    /// Player action: Stay (keep current hand).
    ///
    /// The dealer plays out their hand and the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is running.
    pub fn stay(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_running()?;

        let drawn = self.dealer_play();
        debug!("player stays, dealer draws {} card(s)", drawn.len());

        Ok(self.finish_round())
    }

    /// Player action: Double down (double wager, receive one card, then stay).
    ///
    /// The dealer plays out their hand even if the extra card busts the
    /// player.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is running, the player already has more
    /// than two cards, or the player lacks the chips to match the wager.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        self.ensure_running()?;

        if self.player.cards().len() != 2 {
            return Err(ActionError::CannotDouble);
        }

        let wager = self.player.wager();
        if self.player.chips() < wager {
            return Err(ActionError::OutOfMoney);
        }

        self.player.stake(wager);

        let card = self.draw();
        self.player.add_card(card);
        debug!(
            "player doubles to {}, draws {card}, value {}",
            self.player.wager(),
            self.player.value()
        );

        self.dealer_play();
        self.finish_round();

        Ok(card)
    }
}
