//! An implementation of iterative deepening.
//!
//! Search at depth 1, then start over at depth 2, then depth 3, etc., until
//! the clock says there is no longer enough time for another iteration (or a
//! configured maximum depth is reached). When the clock trips in the middle
//! of an iteration, that iteration's work is thrown away and the move from
//! the last completed depth is played.

use super::super::clock::ClockGuard;
use super::super::interface::*;
use super::super::options::Options;
use super::alphabeta::AlphaBeta;
use super::util::*;

use log::debug;
use rand::rngs::StdRng;
use rand::Rng;
use std::time::{Duration, Instant};

pub struct IterativeDeepening<E, R = StdRng> {
    search: AlphaBeta<E, R>,

    // Runtime stats for the last move generated.

    // Deepest fully completed iteration.
    actual_depth: usize,
    // Nodes explored by completed iterations.
    nodes_explored: usize,
    wall_time: Duration,
}

impl<E> IterativeDeepening<E, StdRng> {
    pub fn new(eval: E, opts: Options) -> Self {
        Self::from_search(AlphaBeta::new(eval, opts))
    }

    pub fn with_seed(eval: E, opts: Options, seed: u64) -> Self {
        Self::from_search(AlphaBeta::with_seed(eval, opts, seed))
    }
}

impl<E, R: Rng> IterativeDeepening<E, R> {
    pub fn with_rng(eval: E, opts: Options, rng: R) -> Self {
        Self::from_search(AlphaBeta::with_rng(eval, opts, rng))
    }

    fn from_search(search: AlphaBeta<E, R>) -> Self {
        IterativeDeepening {
            search,
            actual_depth: 0,
            nodes_explored: 0,
            wall_time: Duration::default(),
        }
    }

    /// Deepest iteration completed while choosing the last move. Zero if no
    /// iteration finished.
    pub fn depth_reached(&self) -> usize {
        self.actual_depth
    }

    #[doc(hidden)]
    pub fn root_value(&self) -> Evaluation {
        self.search.root_value()
    }

    /// Return a human-readable summary of the last move generation.
    pub fn stats(&self) -> String {
        format!(
            "Explored {} nodes to depth {} in {:?}.",
            self.nodes_explored, self.actual_depth, self.wall_time
        )
    }
}

impl<P, E, R> Strategy<P> for IterativeDeepening<E, R>
where
    P: Position,
    E: Evaluator<P>,
    R: Rng,
{
    fn choose_move(&mut self, pos: &P, clock: &dyn Clock) -> Option<Move> {
        let start_time = Instant::now();
        self.actual_depth = 0;
        self.nodes_explored = 0;

        let legal = pos.legal_moves(pos.active_player());
        if legal.is_empty() {
            self.wall_time = start_time.elapsed();
            return None;
        }
        // Deeper searches can't improve on the opening shortcut.
        if let Some(m) = opening_move(pos, &legal) {
            self.wall_time = start_time.elapsed();
            return Some(m);
        }
        let mut best_move = random_move(&legal, &mut self.search.rng);

        let guard = ClockGuard::new(clock, self.search.opts.timer_threshold);
        let max_depth = self.search.opts.max_depth.unwrap_or(usize::MAX);
        let mut depth = 0;
        while guard.has_time() && depth < max_depth {
            depth += 1;
            match self.search.alphabeta(pos, depth, &guard) {
                Ok(m) => {
                    best_move = m;
                    self.actual_depth = depth;
                    self.nodes_explored += self.search.nodes();
                    debug!(
                        "depth {} complete: value {} move {:?}",
                        depth,
                        self.search.root_value(),
                        best_move
                    );
                }
                Err(timeout) => {
                    // Return the best move from the previous depth.
                    debug!("depth {} abandoned: {}", depth, timeout);
                    break;
                }
            }
        }
        self.wall_time = start_time.elapsed();
        if self.actual_depth == 0 {
            return trace_fallback(best_move);
        }
        best_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::MoveCount;
    use crate::isolation::Board;
    use std::cell::Cell;

    fn midgame() -> Board {
        let mut board = Board::new(5, 5);
        for &(r, c) in &[(2, 2), (1, 1), (0, 1), (3, 2)] {
            board.apply_move(Move::new(r, c)).unwrap();
        }
        board
    }

    #[test]
    fn stops_at_max_depth() {
        let board = midgame();
        let opts = Options::new().with_max_depth(3);
        let mut player = IterativeDeepening::with_seed(MoveCount, opts, 2);
        let clock = || Duration::from_secs(3600);
        let m = player.choose_move(&board, &clock).unwrap();
        assert_eq!(player.depth_reached(), 3);
        assert!(board.legal_moves(board.active_player()).contains(&m));

        let mut fixed = AlphaBeta::with_seed(MoveCount, Options::new(), 2);
        let guard = ClockGuard::new(&clock, Duration::from_millis(10));
        let expected = fixed.alphabeta(&board, 3, &guard).unwrap();
        assert_eq!(player.root_value(), fixed.root_value());
        if fixed.root_value() > WORST_EVAL {
            assert_eq!(expected, Some(m));
        }
    }

    #[test]
    fn zero_budget_returns_fallback() {
        let board = midgame();
        let mut player = IterativeDeepening::with_seed(MoveCount, Options::new(), 9);
        let clock = || Duration::ZERO;
        let m = player.choose_move(&board, &clock).unwrap();
        assert_eq!(player.depth_reached(), 0);
        assert!(board.legal_moves(board.active_player()).contains(&m));
    }

    #[test]
    fn clock_trips_on_second_query() {
        let board = midgame();
        let queries = Cell::new(0);
        let clock = || {
            queries.set(queries.get() + 1);
            if queries.get() >= 2 {
                Duration::ZERO
            } else {
                Duration::from_secs(1)
            }
        };
        let mut player = IterativeDeepening::with_seed(MoveCount, Options::new(), 4);
        let m = player.choose_move(&board, &clock).unwrap();
        assert_eq!(player.depth_reached(), 0);
        assert_eq!(queries.get(), 2);
        assert!(board.legal_moves(board.active_player()).contains(&m));
    }

    #[test]
    fn opening_returns_center_without_searching() {
        let board = Board::new(7, 7);
        let mut player = IterativeDeepening::with_seed(MoveCount, Options::new(), 0);
        let clock = || Duration::from_secs(3600);
        assert_eq!(player.choose_move(&board, &clock), Some(Move::new(4, 4)));
        assert_eq!(player.depth_reached(), 0);
    }

    #[test]
    fn shortcuts_reset_wall_time() {
        let board = midgame();
        let slow = || {
            std::thread::sleep(Duration::from_millis(20));
            Duration::from_secs(3600)
        };
        let mut player =
            IterativeDeepening::with_seed(MoveCount, Options::new().with_max_depth(1), 0);
        player.choose_move(&board, &slow).unwrap();
        assert!(player.wall_time >= Duration::from_millis(20));

        let clock = || Duration::from_secs(3600);
        player.choose_move(&Board::new(7, 7), &clock).unwrap();
        assert!(player.wall_time < Duration::from_millis(20));
        assert!(player.stats().starts_with("Explored 0 nodes to depth 0 in"));
    }
}
