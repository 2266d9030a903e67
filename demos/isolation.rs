//! Plays a game of Isolation between an iterative-deepening player and a
//! fixed-depth minimax player.
//!
//! RUST_LOG=debug cargo run --example isolation

use adversarial_search::heuristics::{DiagonalDistance, Improved};
use adversarial_search::isolation::Board;
use adversarial_search::util::battle_royale;
use adversarial_search::*;
use std::time::Duration;

fn main() {
    env_logger::init();

    let mut deepening = IterativeDeepening::new(DiagonalDistance, Options::new());
    let mut minimax = Minimax::new(Improved, Options::new().with_search_depth(3));

    let outcome =
        battle_royale(Board::default(), &mut deepening, &mut minimax, Duration::from_millis(150));

    let mut board = Board::default();
    for &m in &outcome.history {
        if let Err(e) = board.apply_move(m) {
            eprintln!("replay failed: {}", e);
            return;
        }
    }
    print!("{}", board);
    let names = ["iterative deepening", "minimax"];
    println!(
        "{} wins after {} moves ({:?})",
        names[outcome.winner],
        outcome.history.len(),
        outcome.ending
    );
    println!("{}", deepening.stats());
}
