//! Evaluators.
//!
//! `MoveCount` and `Improved` work for any `Position`. The distance-based
//! heuristics need to know where the pieces stand and are specific to
//! Isolation.

use super::interface::*;
use super::isolation::{self, Board};

// Lost and won positions score as the sentinels regardless of heuristic.
fn terminal<P: Position>(pos: &P, player: P::Player) -> Option<Evaluation> {
    if pos.is_loser(player) {
        Some(WORST_EVAL)
    } else if pos.is_winner(player) {
        Some(BEST_EVAL)
    } else {
        None
    }
}

/// Number of moves available to the player.
#[derive(Copy, Clone, Debug, Default)]
pub struct MoveCount;

impl<P: Position> Evaluator<P> for MoveCount {
    fn evaluate(&self, pos: &P, player: P::Player) -> Evaluation {
        terminal(pos, player).unwrap_or_else(|| pos.legal_moves(player).len() as Evaluation)
    }
}

/// The player's move count minus the opponent's.
#[derive(Copy, Clone, Debug, Default)]
pub struct Improved;

impl<P: Position> Evaluator<P> for Improved {
    fn evaluate(&self, pos: &P, player: P::Player) -> Evaluation {
        terminal(pos, player).unwrap_or_else(|| {
            let own = pos.legal_moves(player).len() as Evaluation;
            let opp = pos.legal_moves(pos.opponent(player)).len() as Evaluation;
            own - opp
        })
    }
}

fn distance(a: Move, b: Move) -> f64 {
    let dr = (a.row - b.row) as f64;
    let dc = (a.col - b.col) as f64;
    (dr * dr + dc * dc).sqrt()
}

fn total_distance(moves: &[Move], to: Option<Move>) -> f64 {
    match to {
        Some(to) => moves.iter().map(|&m| distance(m, to)).sum(),
        None => 0.0,
    }
}

fn mean_distance(moves: &[Move], to: Option<Move>) -> f64 {
    if moves.is_empty() {
        0.0
    } else {
        total_distance(moves, to) / moves.len() as f64
    }
}

/// Mean distance from the player's moves to the opponent, minus the mean
/// distance from the opponent's moves to the player.
#[derive(Copy, Clone, Debug, Default)]
pub struct DiagonalDistance;

impl Evaluator<Board> for DiagonalDistance {
    fn evaluate(&self, pos: &Board, player: isolation::Player) -> Evaluation {
        terminal(pos, player).unwrap_or_else(|| {
            let opponent = player.other();
            let own = mean_distance(&pos.legal_moves(player), pos.location(opponent));
            let opp = mean_distance(&pos.legal_moves(opponent), pos.location(player));
            own - opp
        })
    }
}

/// Number of the player's moves within three rows and three columns of the
/// opponent.
#[derive(Copy, Clone, Debug, Default)]
pub struct CloseMoves;

impl Evaluator<Board> for CloseMoves {
    fn evaluate(&self, pos: &Board, player: isolation::Player) -> Evaluation {
        terminal(pos, player).unwrap_or_else(|| match pos.location(player.other()) {
            Some(opp) => pos
                .legal_moves(player)
                .iter()
                .filter(|m| (m.row - opp.row).abs() <= 3 && (m.col - opp.col).abs() <= 3)
                .count() as Evaluation,
            None => 0.0,
        })
    }
}

/// Like `DiagonalDistance`, but with total rather than mean distances.
#[derive(Copy, Clone, Debug, Default)]
pub struct WeightedDistance;

impl Evaluator<Board> for WeightedDistance {
    fn evaluate(&self, pos: &Board, player: isolation::Player) -> Evaluation {
        terminal(pos, player).unwrap_or_else(|| {
            let opponent = player.other();
            let own = total_distance(&pos.legal_moves(player), pos.location(opponent));
            let opp = total_distance(&pos.legal_moves(opponent), pos.location(player));
            own - opp
        })
    }
}
