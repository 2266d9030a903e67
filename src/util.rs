//! Utility functions for testing, and tests.

use super::clock::Deadline;
use super::interface::{Clock, Move, Position, Strategy};

use log::debug;
use std::time::Duration;

/// Why a game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ending {
    /// The loser had no legal moves.
    NoMoves,
    /// The loser returned an illegal move (or none at all).
    IllegalMove,
    /// The loser returned after its time was up.
    Timeout,
}

#[derive(Clone, Debug)]
pub struct Outcome {
    /// Index of the winning strategy: 0 for the one that moved first.
    pub winner: usize,
    pub ending: Ending,
    /// Every move played, in order.
    pub history: Vec<Move>,
}

/// Play a complete game from `start` with the two provided strategies, giving
/// each `time_limit` per turn. `s1` moves first.
pub fn battle_royale<P: Position>(
    start: P, s1: &mut dyn Strategy<P>, s2: &mut dyn Strategy<P>, time_limit: Duration,
) -> Outcome {
    let mut strategies: [&mut dyn Strategy<P>; 2] = [s1, s2];
    let mut pos = start;
    let mut history = Vec::new();
    let mut s = 0;
    loop {
        let legal = pos.legal_moves(pos.active_player());
        if legal.is_empty() {
            return finish(1 - s, Ending::NoMoves, history);
        }
        let deadline = Deadline::after(time_limit);
        let choice = strategies[s].choose_move(&pos, &deadline);
        if deadline.time_left() == Duration::ZERO {
            return finish(1 - s, Ending::Timeout, history);
        }
        match choice {
            Some(m) if legal.contains(&m) => {
                history.push(m);
                pos = pos.forecast(m);
            }
            _ => return finish(1 - s, Ending::IllegalMove, history),
        }
        s = 1 - s;
    }
}

fn finish(winner: usize, ending: Ending, history: Vec<Move>) -> Outcome {
    debug!("strategy {} wins after {} moves ({:?})", winner, history.len(), ending);
    Outcome { winner, ending, history }
}
