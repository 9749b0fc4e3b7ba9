//! Game integration tests.

extern crate alloc;

use alloc::sync::Arc;
use std::sync::Mutex;

use blackjack_engine::{
    ActionError, Card, DECK_SIZE, Deck, DefaultWager, Event, Game, GameOptions, GameState,
    Outcome, Rank, ReshufflePolicy, Suit, Turn, WagerError,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Cards are listed in draw order: player, dealer, player, dealer, then any
/// hits and dealer draws.
fn stacked_game(options: GameOptions, draws: &[Card]) -> Game {
    Game::with_deck(options, Deck::stacked(1, draws))
}

fn record_events(game: &mut Game) -> Arc<Mutex<Vec<Event>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    game.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
    events
}

fn states(events: &Arc<Mutex<Vec<Event>>>) -> Vec<GameState> {
    events.lock().unwrap().iter().map(Event::state).collect()
}

#[test]
fn stay_lets_dealer_draw_to_seventeen_and_pays_even_money() {
    let mut game = stacked_game(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Clubs),    // player
            card(Rank::Seven, Suit::Spades), // dealer up
            card(Rank::Nine, Suit::Diamonds), // player
            card(Rank::Five, Suit::Hearts),  // dealer hole
            card(Rank::Six, Suit::Clubs),    // dealer draw
        ],
    );

    assert_eq!(game.place_wager_and_deal(10), Ok(GameState::Running));
    assert_eq!(game.player().chips(), 90);
    assert_eq!(game.player().wager(), 10);
    assert_eq!(game.player().value(), 19);

    let result = game.stay().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert_eq!(result.dealer_value, 18);
    assert_eq!(game.dealer().cards().len(), 3);
    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(game.outcome(), Some(Outcome::PlayerWins));
    assert_eq!(game.player().chips(), 110);
    assert_eq!(game.player().wager(), 0);
    assert_eq!(game.player().last_wager(), 10);
}

#[test]
fn natural_blackjack_settles_on_the_deal() {
    let mut game = stacked_game(
        GameOptions::default(),
        &[
            card(Rank::Ace, Suit::Spades),
            card(Rank::Nine, Suit::Hearts),
            card(Rank::King, Suit::Diamonds),
            card(Rank::Seven, Suit::Clubs),
        ],
    );
    let events = record_events(&mut game);

    assert_eq!(game.place_wager_and_deal(10), Ok(GameState::Finished));
    assert!(game.player().has_blackjack());
    assert_eq!(game.outcome(), Some(Outcome::PlayerWins));
    assert_eq!(game.dealer().cards().len(), 2);
    assert_eq!(game.player().chips(), 120);
    assert_eq!(game.last_result().unwrap().winnings(), 20);
    assert_eq!(states(&events), [GameState::Running, GameState::Finished]);
}

#[test]
fn blackjack_against_dealer_blackjack_is_a_draw() {
    let mut game = stacked_game(
        GameOptions::default(),
        &[
            card(Rank::Ace, Suit::Spades),
            card(Rank::Ace, Suit::Hearts),
            card(Rank::King, Suit::Diamonds),
            card(Rank::Queen, Suit::Clubs),
        ],
    );

    assert_eq!(game.place_wager_and_deal(10), Ok(GameState::Finished));
    let result = *game.last_result().unwrap();
    assert_eq!(result.outcome, Outcome::Draw);
    assert!(result.dealer_blackjack);
    assert_eq!(result.net, 0);
    assert_eq!(game.player().chips(), 100);
}

#[test]
fn hit_to_twenty_one_is_not_paid_as_blackjack() {
    let mut game = stacked_game(
        GameOptions::default(),
        &[
            card(Rank::Five, Suit::Spades),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Six, Suit::Diamonds),
            card(Rank::Eight, Suit::Clubs),
            card(Rank::Queen, Suit::Clubs), // player hit -> 21
        ],
    );

    game.place_wager_and_deal(10).unwrap();
    game.hit().unwrap();
    assert_eq!(game.player().value(), 21);
    assert_eq!(game.state(), GameState::Running);

    let result = game.stay().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert!(!result.player_blackjack);
    assert_eq!(game.player().chips(), 110);
}

#[test]
fn wager_larger_than_chips_is_rejected_without_changes() {
    let mut game = Game::new(GameOptions::default().with_starting_chips(5), 3);
    let events = record_events(&mut game);

    assert_eq!(game.place_wager_and_deal(10), Err(WagerError::OutOfMoney));
    assert_eq!(game.player().chips(), 5);
    assert_eq!(game.state(), GameState::NotStarted);
    assert!(game.player().cards().is_empty());
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn wager_errors() {
    let mut game = Game::new(GameOptions::default(), 3);
    assert_eq!(game.place_wager_and_deal(0), Err(WagerError::ZeroWager));

    game.place_wager_and_deal(1).unwrap();
    if game.state() == GameState::Running {
        assert_eq!(game.place_wager_and_deal(1), Err(WagerError::InvalidState));
    }

    let mut broke = Game::new(GameOptions::default().with_starting_chips(0), 3);
    assert_eq!(broke.place_wager_and_deal(0), Err(WagerError::OutOfMoney));
    assert_eq!(broke.deal(), Err(WagerError::OutOfMoney));
}

#[test]
fn double_down_doubles_wager_and_draws_one_card() {
    let mut game = stacked_game(
        GameOptions::default().with_starting_chips(50),
        &[
            card(Rank::Five, Suit::Hearts),  // player
            card(Rank::Ten, Suit::Clubs),    // dealer up
            card(Rank::Six, Suit::Diamonds), // player
            card(Rank::Eight, Suit::Spades), // dealer hole
            card(Rank::Two, Suit::Hearts),   // double draw
        ],
    );
    let events = record_events(&mut game);

    game.place_wager_and_deal(10).unwrap();
    assert_eq!(game.player().chips(), 40);
    assert_eq!(game.player().value(), 11);

    let drawn = game.double_down().unwrap();
    assert_eq!(drawn, card(Rank::Two, Suit::Hearts));
    assert_eq!(game.player().cards().len(), 3);
    assert_eq!(game.dealer().cards().len(), 2);
    assert_eq!(game.state(), GameState::Finished);

    let result = *game.last_result().unwrap();
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(result.wager, 20);
    assert_eq!(result.net, -20);
    assert_eq!(game.player().chips(), 30);
    assert_eq!(game.player().last_wager(), 20);
    assert_eq!(states(&events), [GameState::Running, GameState::Finished]);
}

#[test]
fn double_down_win_pays_on_doubled_wager() {
    let mut game = stacked_game(
        GameOptions::default().with_starting_chips(50),
        &[
            card(Rank::Five, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Six, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades),
            card(Rank::Nine, Suit::Hearts), // double draw -> 20
        ],
    );

    game.turn(Turn::DoubleDown).unwrap_err();
    game.place_wager_and_deal(10).unwrap();
    game.turn(Turn::DoubleDown).unwrap();

    assert_eq!(game.outcome(), Some(Outcome::PlayerWins));
    assert_eq!(game.player().chips(), 70);
}

#[test]
fn double_down_after_bust_still_lets_dealer_play() {
    let mut game = stacked_game(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Six, Suit::Diamonds),
            card(Rank::Two, Suit::Spades),
            card(Rank::King, Suit::Hearts), // double draw -> bust
            card(Rank::Five, Suit::Clubs),  // dealer draw -> 17
        ],
    );

    game.place_wager_and_deal(10).unwrap();
    game.double_down().unwrap();

    assert!(game.player().is_bust());
    assert_eq!(game.dealer().cards().len(), 3);
    assert_eq!(game.outcome(), Some(Outcome::DealerWins));
    assert_eq!(game.player().chips(), 80);
}

#[test]
fn double_down_rejected_after_first_action() {
    let mut game = stacked_game(
        GameOptions::default(),
        &[
            card(Rank::Two, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Three, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades),
            card(Rank::Four, Suit::Hearts), // player hit
        ],
    );

    game.place_wager_and_deal(10).unwrap();
    game.turn(Turn::Hit).unwrap();

    assert_eq!(game.double_down(), Err(ActionError::CannotDouble));
    assert_eq!(game.player().wager(), 10);
    assert_eq!(game.player().cards().len(), 3);
    assert_eq!(game.state(), GameState::Running);
}

#[test]
fn double_down_requires_matching_chips() {
    let mut game = stacked_game(
        GameOptions::default().with_starting_chips(10),
        &[
            card(Rank::Five, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Six, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades),
        ],
    );

    game.place_wager_and_deal(6).unwrap();
    assert_eq!(game.double_down(), Err(ActionError::OutOfMoney));
    assert_eq!(game.player().chips(), 4);
    assert_eq!(game.player().wager(), 6);
    assert_eq!(game.player().cards().len(), 2);
    assert_eq!(game.state(), GameState::Running);
}

#[test]
fn bust_finishes_without_dealer_draws() {
    let mut game = stacked_game(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Six, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades),
            card(Rank::King, Suit::Hearts), // player hit -> 26
        ],
    );
    let events = record_events(&mut game);

    game.place_wager_and_deal(10).unwrap();
    game.turn(Turn::Hit).unwrap();

    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(game.outcome(), Some(Outcome::DealerWins));
    assert_eq!(game.dealer().cards().len(), 2);
    assert!(game.dealer().is_hole_revealed());
    assert_eq!(game.player().chips(), 90);
    assert_eq!(states(&events), [GameState::Running, GameState::Finished]);
}

#[test]
fn turns_outside_a_round_are_invalid() {
    let mut game = Game::new(GameOptions::default(), 9);
    for turn in [Turn::Hit, Turn::Stay, Turn::DoubleDown] {
        assert_eq!(game.turn(turn), Err(ActionError::InvalidState));
    }

    let mut game = stacked_game(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Nine, Suit::Diamonds),
            card(Rank::Eight, Suit::Spades),
        ],
    );
    game.place_wager_and_deal(10).unwrap();
    game.stay().unwrap();

    let chips = game.player().chips();
    for turn in [Turn::Hit, Turn::Stay, Turn::DoubleDown] {
        assert_eq!(game.turn(turn), Err(ActionError::InvalidState));
    }
    assert_eq!(game.player().chips(), chips);
}

#[test]
fn dealer_stands_on_soft_seventeen_by_default() {
    let draws = [
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Eight, Suit::Diamonds),
        card(Rank::Six, Suit::Spades),
        card(Rank::Two, Suit::Hearts), // only drawn when hitting soft 17
    ];

    let mut stands = stacked_game(GameOptions::default(), &draws);
    stands.place_wager_and_deal(10).unwrap();
    let result = stands.stay().unwrap();
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.outcome, Outcome::PlayerWins);

    let mut hits = stacked_game(GameOptions::default().with_stand_on_soft_17(false), &draws);
    hits.place_wager_and_deal(10).unwrap();
    let result = hits.stay().unwrap();
    assert_eq!(result.dealer_value, 19);
    assert_eq!(result.outcome, Outcome::DealerWins);
}

#[test]
fn dealer_bust_pays_player() {
    let mut game = stacked_game(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Two, Suit::Diamonds),
            card(Rank::Six, Suit::Spades),
            card(Rank::Queen, Suit::Hearts), // dealer draw -> 26
        ],
    );

    game.place_wager_and_deal(4).unwrap();
    let result = game.stay().unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert_eq!(game.player().chips(), 104);
}

#[test]
fn equal_values_push() {
    let mut game = stacked_game(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Eight, Suit::Diamonds),
            card(Rank::Eight, Suit::Spades),
        ],
    );

    game.place_wager_and_deal(10).unwrap();
    assert_eq!(game.stay().unwrap().outcome, Outcome::Draw);
    assert_eq!(game.player().chips(), 100);
}

#[test]
fn full_reset_restores_starting_stake() {
    let mut game = stacked_game(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Six, Suit::Diamonds),
            card(Rank::Nine, Suit::Spades),
        ],
    );
    game.place_wager_and_deal(25).unwrap();
    game.stay().unwrap();
    assert_eq!(game.player().chips(), 75);

    let events = record_events(&mut game);
    game.full_reset();
    let once = game.snapshot();
    game.full_reset();

    assert_eq!(game.snapshot(), once);
    assert_eq!(game.state(), GameState::NotStarted);
    assert_eq!(game.player().chips(), 100);
    assert_eq!(game.player().last_wager(), 0);
    assert!(game.player().cards().is_empty());
    assert!(game.dealer().cards().is_empty());
    assert_eq!(game.last_result(), None);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert_eq!(states(&events), [GameState::NotStarted, GameState::NotStarted]);
}

#[test]
fn full_reset_during_a_round_forfeits_the_wager() {
    let mut game = Game::new(GameOptions::default(), 12);
    game.place_wager_and_deal(30).unwrap();
    game.full_reset();

    assert_eq!(game.state(), GameState::NotStarted);
    assert_eq!(game.player().chips(), 100);
    assert_eq!(game.player().wager(), 0);
}

#[test]
fn new_round_clears_hands_but_keeps_chips() {
    let mut game = stacked_game(
        GameOptions::default(),
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Nine, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades),
            card(Rank::Two, Suit::Hearts),
            card(Rank::Three, Suit::Clubs),
            card(Rank::Four, Suit::Diamonds),
            card(Rank::Five, Suit::Spades),
        ],
    );
    game.place_wager_and_deal(10).unwrap();
    game.stay().unwrap();
    assert_eq!(game.player().chips(), 110);

    game.place_wager_and_deal(5).unwrap();
    assert_eq!(
        game.player().cards(),
        [card(Rank::Two, Suit::Hearts), card(Rank::Four, Suit::Diamonds)]
    );
    assert_eq!(game.dealer().cards().len(), 2);
    assert_eq!(game.player().chips(), 105);
    assert_eq!(game.player().last_wager(), 10);
    assert_eq!(game.outcome(), None);
    assert_eq!(game.last_result().unwrap().wager, 10);
}

#[test]
fn deal_uses_the_default_wager_policy() {
    let draws = [
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Eight, Suit::Diamonds),
        card(Rank::Eight, Suit::Spades),
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Five, Suit::Spades),
    ];

    let mut fixed = stacked_game(GameOptions::default(), &draws);
    assert_eq!(fixed.default_wager(), 1);
    assert_eq!(fixed.deal(), Ok(GameState::Running));
    assert_eq!(fixed.player().chips(), 99);
    assert_eq!(fixed.player().wager(), 1);

    let mut repeat = stacked_game(
        GameOptions::default().with_default_wager(DefaultWager::RepeatLast),
        &draws,
    );
    assert_eq!(repeat.default_wager(), 1);
    repeat.place_wager_and_deal(15).unwrap();
    assert_eq!(repeat.stay().unwrap().outcome, Outcome::Draw);
    assert_eq!(repeat.default_wager(), 15);
    assert_eq!(repeat.deal(), Ok(GameState::Running));
    assert_eq!(repeat.player().wager(), 15);
    assert_eq!(repeat.player().chips(), 85);
}

#[test]
fn empty_deck_is_reshuffled_mid_round() {
    let mut game = stacked_game(
        GameOptions::default(),
        &[
            card(Rank::Two, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Three, Suit::Diamonds),
            card(Rank::Eight, Suit::Spades),
        ],
    );

    game.place_wager_and_deal(10).unwrap();
    assert_eq!(game.cards_remaining(), 0);

    game.hit().unwrap();
    assert_eq!(game.player().cards().len(), 3);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 1);
}

#[test]
fn every_round_policy_deals_from_a_fresh_deck() {
    let mut game = Game::new(
        GameOptions::default().with_reshuffle(ReshufflePolicy::EveryRound),
        21,
    );

    for _ in 0..3 {
        game.place_wager_and_deal(1).unwrap();
        assert_eq!(game.cards_remaining(), DECK_SIZE - 4);
        if game.state() == GameState::Running {
            game.stay().unwrap();
        }
    }
}

#[test]
fn events_follow_every_transition() {
    let mut game = stacked_game(
        GameOptions::default(),
        &[
            card(Rank::Two, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Three, Suit::Diamonds),
            card(Rank::Eight, Suit::Spades),
            card(Rank::Four, Suit::Hearts), // player hit -> 9
        ],
    );
    let events = record_events(&mut game);

    game.place_wager_and_deal(10).unwrap();
    game.hit().unwrap();
    game.stay().unwrap();
    game.full_reset();

    assert_eq!(
        states(&events),
        [
            GameState::Running,
            GameState::Running,
            GameState::Finished,
            GameState::NotStarted,
        ]
    );

    let events = events.lock().unwrap();
    let dealt = events[0].snapshot();
    assert_eq!(dealt.player.chips, 90);
    assert_eq!(dealt.player.wager, 10);
    assert_eq!(dealt.dealer.cards, [card(Rank::Ten, Suit::Clubs)]);
    assert_eq!(dealt.dealer.hidden, 1);
    assert_eq!(dealt.dealer.value, 10);
    assert_eq!(dealt.result, None);

    let hit = events[1].snapshot();
    assert_eq!(hit.player.cards.len(), 3);
    assert_eq!(hit.player.value, 9);

    let finished = events[2].snapshot();
    assert_eq!(finished.outcome(), Some(Outcome::DealerWins));
    assert_eq!(finished.dealer.hidden, 0);
    assert_eq!(finished.dealer.value, 18);
    assert_eq!(finished.player.chips, 90);
    assert_eq!(finished.player.wager, 0);
    assert_eq!(finished.player.last_wager, 10);
}

#[test]
fn rejected_commands_publish_nothing() {
    let mut game = Game::new(GameOptions::default(), 2);
    let events = record_events(&mut game);

    game.turn(Turn::Stay).unwrap_err();
    game.place_wager_and_deal(0).unwrap_err();
    game.place_wager_and_deal(1_000).unwrap_err();

    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn listeners_run_in_order_and_can_unsubscribe() {
    let mut game = Game::new(GameOptions::default(), 5);
    let log = Arc::new(Mutex::new(Vec::new()));

    let first = Arc::clone(&log);
    let id = game.subscribe(move |_| first.lock().unwrap().push("first"));
    let second = Arc::clone(&log);
    game.subscribe(move |_| second.lock().unwrap().push("second"));
    assert_eq!(game.listener_count(), 2);

    game.full_reset();
    assert!(game.unsubscribe(id));
    assert!(!game.unsubscribe(id));
    game.full_reset();

    assert_eq!(*log.lock().unwrap(), ["first", "second", "second"]);
    assert_eq!(game.listener_count(), 1);
}

#[test]
fn game_can_move_between_threads() {
    let mut game = Game::new(GameOptions::default(), 8);
    let handle = std::thread::spawn(move || {
        game.deal().unwrap();
        game
    });
    let game = handle.join().unwrap();
    assert_ne!(game.state(), GameState::NotStarted);
}
