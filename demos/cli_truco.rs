//! CLI truco example: two players sharing one terminal.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use truco::{Card, Game, GameOptions, Player, RandomIds, Seat, Suit};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Truco CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut ids = RandomIds::new();
    let options = GameOptions::default().with_seed(seed, seed.rotate_left(32) | 1);
    let Ok(mut game) = Game::new(options, &mut ids) else {
        println!("Could not create a game.");
        return;
    };

    for seat in Seat::ALL {
        loop {
            let name = prompt_line(&format!("Name for {seat:?} player: "));
            if name == "q" {
                return;
            }
            match Player::new(name, &mut ids) {
                Ok(player) => {
                    if let Err(err) = game.add_player(player) {
                        println!("Roster error: {err}");
                    }
                    break;
                }
                Err(err) => println!("Invalid name: {err}"),
            }
        }
    }

    if let Err(err) = game.start() {
        println!("Start error: {err}");
        return;
    }

    let mut hands_seen = game.hands().len();
    while game.is_running() {
        print_table(&game);

        let Some(current) = game.current_player() else {
            break;
        };
        let id = current.id().clone();
        let held = current.cards().to_vec();

        let Some(choice) = prompt_usize(&format!("{}, pick a card (1-{}): ", current.name(), held.len()))
        else {
            println!("Goodbye.");
            return;
        };
        let Some(&card) = choice.checked_sub(1).and_then(|index| held.get(index)) else {
            println!("No such card.");
            continue;
        };

        match game.play(&id, card) {
            Ok(Some(_)) => match game.last_round_winner() {
                Some(winner) => println!("Round: {}", winner.name()),
                None => println!("Round: draw"),
            },
            Ok(None) => {}
            Err(err) => println!("Play error: {err}"),
        }

        if game.hands().len() != hands_seen {
            hands_seen = game.hands().len();
            match game.hand_winner() {
                Some(winner) => println!("Hand won by {}.", winner.name()),
                None => println!("Hand drawn."),
            }
            let [first, second] = game.hand_wins();
            println!("Score: {first} x {second}");
        }
    }

    match game.match_winner() {
        Some(winner) => println!("{} wins the match!", winner.name()),
        None => println!("Match over."),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game) {
    let Some(hand) = game.current_hand() else {
        return;
    };
    println!(
        "\nHand {} | round {} | manilha {} (trump {:?})",
        game.hands().len(),
        hand.round() + 1,
        format_card(hand.manilha()),
        hand.trump_rank()
    );

    if let [.., played] = hand.pile() {
        if hand.pile().len() % 2 == 1 {
            println!("On the table: {}", format_card(*played));
        }
    }

    if let Some(current) = game.current_player() {
        println!("{}: {}", current.name(), format_cards(current.cards()));
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| format!("[{}]{}", index + 1, format_card(*card)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.unicode().to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
