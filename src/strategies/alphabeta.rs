//! Depth-limited minimax with alpha-beta pruning.
//!
//! Produces the same value as `Minimax` at the same depth, but stops
//! exploring a node's remaining moves once they provably can't change the
//! decision above it. Moves are explored in the order the position lists
//! them, so that order decides what gets pruned and which of several equal
//! moves is kept.

use super::super::clock::{ClockGuard, SearchTimeout};
use super::super::interface::*;
use super::super::options::Options;
use super::util::*;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct AlphaBeta<E, R = StdRng> {
    eval: E,
    pub(super) opts: Options,
    pub(super) rng: R,
    prev_value: Evaluation,
    nodes: usize,
}

impl<E> AlphaBeta<E, StdRng> {
    pub fn new(eval: E, opts: Options) -> Self {
        Self::with_rng(eval, opts, StdRng::from_entropy())
    }

    pub fn with_seed(eval: E, opts: Options, seed: u64) -> Self {
        Self::with_rng(eval, opts, StdRng::seed_from_u64(seed))
    }
}

impl<E, R: Rng> AlphaBeta<E, R> {
    pub fn with_rng(eval: E, opts: Options, rng: R) -> Self {
        AlphaBeta { eval, opts, rng, prev_value: 0.0, nodes: 0 }
    }

    #[doc(hidden)]
    pub fn root_value(&self) -> Evaluation {
        self.prev_value
    }

    /// Recursive calls made by the last search.
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Decide a move for the player to move, searching `depth` plies with a
    /// full window.
    pub fn alphabeta<P>(
        &mut self, pos: &P, depth: usize, guard: &ClockGuard,
    ) -> Result<Option<Move>, SearchTimeout>
    where
        P: Position,
        E: Evaluator<P>,
    {
        self.alphabeta_window(pos, depth, WORST_EVAL, BEST_EVAL, guard)
    }

    /// As `alphabeta`, but starting from the bounds `alpha` and `beta`.
    ///
    /// A window narrower than the true value range can leave the root value
    /// as a bound rather than exact.
    pub fn alphabeta_window<P>(
        &mut self, pos: &P, depth: usize, alpha: Evaluation, beta: Evaluation,
        guard: &ClockGuard,
    ) -> Result<Option<Move>, SearchTimeout>
    where
        P: Position,
        E: Evaluator<P>,
    {
        guard.check()?;
        self.nodes = 0;
        let player = pos.active_player();
        let legal = pos.legal_moves(player);
        if legal.is_empty() {
            return Ok(None);
        }
        if let Some(m) = opening_move(pos, &legal) {
            return Ok(Some(m));
        }
        let best = self.max_value(pos, player, depth, alpha, beta, guard)?;
        self.prev_value = best.value;
        Ok(best.best_move.or_else(|| trace_fallback(random_move(&legal, &mut self.rng))))
    }

    fn max_value<P>(
        &mut self, pos: &P, player: P::Player, depth: usize, mut alpha: Evaluation,
        beta: Evaluation, guard: &ClockGuard,
    ) -> Result<SearchResult, SearchTimeout>
    where
        P: Position,
        E: Evaluator<P>,
    {
        guard.check()?;
        self.nodes += 1;
        let moves = pos.legal_moves(pos.active_player());
        if moves.is_empty() || depth == 0 {
            return Ok(SearchResult::leaf(self.eval.evaluate(pos, player)));
        }
        let mut best = SearchResult::leaf(WORST_EVAL);
        for m in moves {
            let value =
                self.min_value(&pos.forecast(m), player, depth - 1, alpha, beta, guard)?.value;
            best.max(value, m);
            if best.value >= beta {
                break;
            }
            alpha = alpha.max(best.value);
        }
        Ok(best)
    }

    fn min_value<P>(
        &mut self, pos: &P, player: P::Player, depth: usize, alpha: Evaluation,
        mut beta: Evaluation, guard: &ClockGuard,
    ) -> Result<SearchResult, SearchTimeout>
    where
        P: Position,
        E: Evaluator<P>,
    {
        guard.check()?;
        self.nodes += 1;
        let moves = pos.legal_moves(pos.active_player());
        if moves.is_empty() || depth == 0 {
            return Ok(SearchResult::leaf(self.eval.evaluate(pos, player)));
        }
        let mut best = SearchResult::leaf(BEST_EVAL);
        for m in moves {
            let value =
                self.max_value(&pos.forecast(m), player, depth - 1, alpha, beta, guard)?.value;
            best.min(value, m);
            if best.value <= alpha {
                break;
            }
            beta = beta.min(best.value);
        }
        Ok(best)
    }
}

/// Fixed-depth play with pruning. See `IterativeDeepening` for the
/// time-bounded player.
impl<P, E, R> Strategy<P> for AlphaBeta<E, R>
where
    P: Position,
    E: Evaluator<P>,
    R: Rng,
{
    fn choose_move(&mut self, pos: &P, clock: &dyn Clock) -> Option<Move> {
        let legal = pos.legal_moves(pos.active_player());
        let fallback = random_move(&legal, &mut self.rng);
        let guard = ClockGuard::new(clock, self.opts.timer_threshold);
        match self.alphabeta(pos, self.opts.search_depth, &guard) {
            Ok(m) => m,
            Err(timeout) => {
                debug!("alpha-beta abandoned after {} nodes: {}", self.nodes, timeout);
                trace_fallback(fallback)
            }
        }
    }
}
