use log::debug;

use crate::error::WagerError;
use crate::options::{DefaultWager, ReshufflePolicy};

use super::{Game, GameState};

impl Game {
    /// Stakes `amount` chips and deals a new round.
    ///
    /// Both hands are cleared and dealt two cards each, alternating player
    /// and dealer. If the player is dealt a natural blackjack the round is
    /// settled straight away against the dealer's two cards, so the returned
    /// state is `Finished`; otherwise it is `Running`.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already running, the amount is zero,
    /// or the player has fewer chips than the amount. Nothing changes on
    /// error.
    pub fn place_wager_and_deal(&mut self, amount: usize) -> Result<GameState, WagerError> {
        if self.state == GameState::Running {
            return Err(WagerError::InvalidState);
        }

        let chips = self.player.chips();
        if chips == 0 {
            return Err(WagerError::OutOfMoney);
        }
        if amount == 0 {
            return Err(WagerError::ZeroWager);
        }
        if amount > chips {
            return Err(WagerError::OutOfMoney);
        }

        if self.options.reshuffle == ReshufflePolicy::EveryRound {
            self.deck.shuffle();
        }

        self.player.stake(amount);
        self.player.clear();
        self.dealer.clear();

        for _ in 0..2 {
            let card = self.draw();
            self.player.add_card(card);
            let card = self.draw();
            self.dealer.add_card(card);
        }

        debug!(
            "dealt round with wager {amount}: player {}, dealer shows {}",
            self.player.value(),
            self.dealer.visible_value()
        );

        self.state = GameState::Running;
        self.emit();

        if self.player.has_blackjack() {
            self.finish_round();
        }

        Ok(self.state)
    }

    /// Deals a new round using the configured default wager.
    ///
    /// # Errors
    ///
    /// Same as [`place_wager_and_deal`](Self::place_wager_and_deal).
    pub fn deal(&mut self) -> Result<GameState, WagerError> {
        self.place_wager_and_deal(self.default_wager())
    }

    /// The wager [`deal`](Self::deal) would place right now.
    #[must_use]
    pub fn default_wager(&self) -> usize {
        match self.options.default_wager {
            DefaultWager::Fixed(amount) => amount,
            DefaultWager::RepeatLast => match self.player.last_wager() {
                0 => 1,
                last => last,
            },
        }
    }
}
