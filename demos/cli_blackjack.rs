//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_engine::message::status_message;
use blackjack_engine::{Card, Game, GameOptions, GameState, Snapshot, Suit, Turn};

fn main() {
    env_logger::init();
    println!("Blackjack CLI example (type 'q' to quit, 'r' to reset)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    game.subscribe(|event| println!("{}", status_message(event.snapshot())));

    loop {
        let chips = game.player().chips();
        if chips == 0 {
            println!("You are out of chips. Type 'r' to start over or 'q' to quit.");
            match prompt_line("> ").as_str() {
                "r" | "reset" => {
                    game.full_reset();
                    continue;
                }
                _ => break,
            }
        }

        let default = game.default_wager();
        let Some(input) = prompt_wager(&format!("Wager (1-{chips}, enter for {default}): "))
        else {
            println!("Goodbye.");
            break;
        };

        let dealt = match input {
            Wager::Default => game.deal(),
            Wager::Amount(amount) => game.place_wager_and_deal(amount),
            Wager::Reset => {
                game.full_reset();
                continue;
            }
        };

        if let Err(err) = dealt {
            println!("{err}");
            continue;
        }

        while game.state() == GameState::Running {
            print_table(&game.snapshot());

            let turn = match prompt_line("[h]it [s]tay [d]ouble: ").as_str() {
                "h" | "hit" => Turn::Hit,
                "s" | "stay" => Turn::Stay,
                "d" | "double" => Turn::DoubleDown,
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = game.turn(turn) {
                println!("Invalid: {err}");
            }
        }

        print_table(&game.snapshot());
    }
}

enum Wager {
    Default,
    Amount(usize),
    Reset,
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn prompt_wager(prompt: &str) -> Option<Wager> {
    loop {
        let input = prompt_line(prompt);
        match input.as_str() {
            "q" | "quit" => return None,
            "r" | "reset" => return Some(Wager::Reset),
            "" => return Some(Wager::Default),
            _ => {}
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(Wager::Amount(value)),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(snapshot: &Snapshot) {
    let mut dealer = format_cards(&snapshot.dealer.cards);
    for _ in 0..snapshot.dealer.hidden {
        dealer.push_str(" ??");
    }
    println!("\nDealer: {dealer} (value {})", snapshot.dealer.value);
    println!(
        "Player: {} (value {}) | chips {} | wager {}\n",
        format_cards(&snapshot.player.cards),
        snapshot.player.value,
        snapshot.player.chips,
        snapshot.player.wager
    );
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
