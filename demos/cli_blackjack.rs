//! CLI blackjack demo.
//!
//! Run with `RUST_LOG=debug` to see every draw and rescore.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjrules::policy::{draw_prompt, from_fn};
use bjrules::{Card, Game, GameOptions, Participant, RoundPhase, Score, Suit};

fn main() {
    env_logger::init();

    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        if prompt_line("Deal a round? (y/n): ").as_str() != "y" {
            println!("Goodbye.");
            break;
        }

        game.clear_round();
        if game.check_and_reshuffle() {
            println!("Deck reshuffled.");
        }

        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            continue;
        }

        let mut ask = from_fn(|score: Score, up: Card| {
            println!("{}", colorize(&format!("Your count is {score}"), "1"));
            let answer = prompt_line(&format!("{} (y/n): ", draw_prompt(score, up)));
            matches!(answer.as_str(), "y" | "yes")
        });

        match game.player_turn(&mut ask) {
            Ok(drawn) => {
                for card in drawn {
                    println!("You draw {}", format_card(&card));
                }
            }
            Err(err) => {
                println!("Player error: {err}");
                continue;
            }
        }

        if game.phase() == RoundPhase::DealerTurn {
            match game.dealer_turn() {
                Ok(drawn) => {
                    if !drawn.is_empty() {
                        println!("Dealer draws {} card(s).", drawn.len());
                    }
                }
                Err(err) => println!("Dealer error: {err}"),
            }
        }

        match game.showdown() {
            Ok(result) => {
                print_participant(game.player());
                print_participant(game.dealer());
                println!("{}", result.resolution);
            }
            Err(err) => println!("Showdown error: {err}"),
        }
    }
}

fn print_participant(participant: &Participant) {
    let cards = participant
        .hand()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    println!("{participant}  [{cards}]");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank.label() {
        "Ace" => "A",
        "Jack" => "J",
        "Queen" => "Q",
        "King" => "K",
        number => number,
    };

    format!("{}{}", rank, colorize(suit, color_code))
}
