use super::super::interface::*;

use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

/// The value of a subtree and the move at its root that achieves it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub value: Evaluation,
    pub best_move: Option<Move>,
}

impl SearchResult {
    pub(super) fn leaf(value: Evaluation) -> Self {
        SearchResult { value, best_move: None }
    }

    // Keep the first move seen on ties.
    pub(super) fn max(&mut self, value: Evaluation, m: Move) {
        if value > self.value {
            self.value = value;
            self.best_move = Some(m);
        }
    }

    pub(super) fn min(&mut self, value: Evaluation, m: Move) {
        if value < self.value {
            self.value = value;
            self.best_move = Some(m);
        }
    }
}

// On an untouched board every cell is legal; play near the middle without
// searching. The shortcut is skipped if that cell isn't actually available.
pub(super) fn opening_move<P: Position>(pos: &P, legal: &[Move]) -> Option<Move> {
    if legal.is_empty() || legal.len() != pos.width() * pos.height() {
        return None;
    }
    let center = Move::new(half_up(pos.width()), half_up(pos.height()));
    if legal.contains(&center) {
        trace!("opening shortcut to {}", center);
        Some(center)
    } else {
        None
    }
}

fn half_up(n: usize) -> i32 {
    ((n + 1) / 2) as i32
}

pub(super) fn random_move<R: Rng>(legal: &[Move], rng: &mut R) -> Option<Move> {
    legal.choose(rng).copied()
}

// Call only where the random move is actually played.
pub(super) fn trace_fallback(m: Option<Move>) -> Option<Move> {
    if let Some(m) = m {
        trace!("falling back to random move {}", m);
    }
    m
}
