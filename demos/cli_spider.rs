//! CLI spider solitaire example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use spiders::{Card, Difficulty, Game, GameEvent, GameOptions, GameState, Suit};

fn main() {
    println!("Spider solitaire CLI example (type 'h' for help, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let Some(difficulty) = prompt_difficulty() else {
        return;
    };
    let options = GameOptions::default().with_difficulty(difficulty);
    let mut game = Game::new(options, seed);

    loop {
        report_events(&mut game);
        print_table(&game);

        if game.state() == GameState::Won {
            println!("All runs completed. You win!");
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    game.new_game();
                    continue;
                }
                _ => break,
            }
        }

        let line = prompt_line("Action: ");
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            ["q" | "quit"] => break,
            ["h" | "help"] => print_help(),
            ["d" | "deal"] => match game.deal_row() {
                Ok(dealt) => println!("Dealt {dealt} cards."),
                Err(err) => println!("Deal error: {err}"),
            },
            ["f" | "flip", pile] => {
                let Some(pile) = parse_index(pile) else {
                    continue;
                };
                let top = game
                    .table()
                    .pile(pile)
                    .map_or(0, |p| p.len().saturating_sub(1));
                if let Err(err) = game.flip(pile, top) {
                    println!("Flip error: {err}");
                }
            }
            ["m" | "move", from, start, to] => {
                let (Some(from), Some(start), Some(to)) =
                    (parse_index(from), parse_index(start), parse_index(to))
                else {
                    continue;
                };
                match game.move_run(from, start, to) {
                    Ok(outcome) => println!("Moved {} cards.", outcome.moved),
                    Err(err) => println!("Move rejected: {err}"),
                }
            }
            ["n" | "new"] => game.new_game(),
            ["n" | "new", level] => match level.parse::<u8>().map(Difficulty::try_from) {
                Ok(Ok(difficulty)) => game.new_game_with(difficulty),
                _ => println!("Difficulty must be 1, 2 or 3."),
            },
            _ => println!("Unknown command. Type 'h' for help."),
        }
    }

    println!("Goodbye.");
}

fn print_help() {
    println!("  d                 deal a row from the stock");
    println!("  f <pile>          flip the top card of a pile");
    println!("  m <from> <i> <to> move cards from index i of a pile onto another");
    println!("  n [1|2|3]         new game (optionally with 1, 2 or 4 suits)");
    println!("  q                 quit");
}

fn prompt_difficulty() -> Option<Difficulty> {
    loop {
        let input = prompt_line("Difficulty (1 = one suit, 2 = two suits, 3 = four suits): ");
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u8>().map(Difficulty::try_from) {
            Ok(Ok(difficulty)) => return Some(difficulty),
            _ => println!("Please enter 1, 2 or 3."),
        }
    }
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

fn parse_index(text: &str) -> Option<usize> {
    let parsed = text.parse::<usize>().ok();
    if parsed.is_none() {
        println!("'{text}' is not a number.");
    }
    parsed
}

fn report_events(game: &mut Game) {
    for event in game.drain_events() {
        match event {
            GameEvent::RunCompleted { pile, suit } => {
                println!("* Completed a run of {} on pile {pile}!", format_suit(suit));
            }
            GameEvent::CardFlipped { pile } => println!("* Flipped pile {pile}."),
            _ => {}
        }
    }
}

fn print_table(game: &Game) {
    let table = game.table();
    println!(
        "\nStock: {} cards ({} rows) | Runs completed: {}",
        table.stock_len(),
        table.stock_len().div_ceil(10),
        table.retired_runs()
    );

    for (index, pile) in table.piles.iter().enumerate() {
        let cards = if pile.is_empty() {
            "(empty)".to_string()
        } else {
            pile.cards()
                .iter()
                .map(format_card)
                .collect::<Vec<_>>()
                .join(" ")
        };
        println!("  {index}: {cards}");
    }
}

fn format_card(card: &Card) -> String {
    if !card.face_up {
        return "##".to_string();
    }

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };
    format!("{rank}{}", format_suit(card.suit))
}

fn format_suit(suit: Suit) -> String {
    let color_code = match suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&suit.symbol().to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
