use alloc::vec::Vec;

use log::info;

use crate::card::Card;
use crate::evaluator;
use crate::result::RoundResult;

use super::{Game, GameState};

impl Game {
    /// Whether the dealer has to take another card.
    fn dealer_must_draw(&self) -> bool {
        let value = self.dealer.value();
        let stands_on = self.options.dealer_stands_on;

        value < stands_on
            || (value == stands_on && self.dealer.is_soft() && !self.options.stand_on_soft_17)
    }

    /// Dealer plays out their hand and returns the cards drawn.
    ///
    /// The hole card is revealed and the dealer draws until reaching
    /// `dealer_stands_on` (17 by default). With `stand_on_soft_17` disabled
    /// the dealer also hits a soft 17.
    pub(super) fn dealer_play(&mut self) -> Vec<Card> {
        self.dealer.reveal_hole();

        let mut drawn = Vec::new();
        while self.dealer_must_draw() {
            let card = self.draw();
            self.dealer.add_card(card);
            drawn.push(card);
        }
        drawn
    }

    /// Settles the round and moves to `Finished`.
    ///
    /// Compares the hands, credits the payout, records the wager as the last
    /// wager, then publishes the `Finished` event.
    pub(super) fn finish_round(&mut self) -> RoundResult {
        self.dealer.reveal_hole();

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();
        let player_blackjack = self.player.has_blackjack();
        let wager = self.player.wager();

        let outcome = evaluator::decide(player_value, dealer_value);
        let payout = evaluator::payout(
            outcome,
            wager,
            player_blackjack,
            self.options.blackjack_pays,
        );

        self.player.settle(payout);

        #[expect(clippy::cast_possible_wrap, reason = "chip amounts fit in isize")]
        let net = payout as isize - wager as isize;

        let result = RoundResult {
            outcome,
            wager,
            payout,
            net,
            player_value,
            dealer_value,
            player_blackjack,
            dealer_blackjack: self.dealer.has_blackjack(),
            dealer_bust: self.dealer.is_bust(),
        };

        info!(
            "round finished: {outcome:?} (player {player_value}, dealer {dealer_value}), net {net}, chips {}",
            self.player.chips()
        );

        self.last_result = Some(result);
        self.state = GameState::Finished;
        self.emit();

        result
    }
}
