//! Depth-limited minimax without pruning.
//!
//! This is the baseline the other engines are measured against: every legal
//! move is explored down to the depth budget, scores are taken from the
//! perspective of the player at the root, and ties go to the earliest
//! enumerated move.

use super::super::clock::{ClockGuard, SearchTimeout};
use super::super::interface::*;
use super::super::options::Options;
use super::util::*;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct Minimax<E, R = StdRng> {
    eval: E,
    opts: Options,
    pub(super) rng: R,
    prev_value: Evaluation,
    nodes: usize,
}

impl<E> Minimax<E, StdRng> {
    pub fn new(eval: E, opts: Options) -> Self {
        Self::with_rng(eval, opts, StdRng::from_entropy())
    }

    pub fn with_seed(eval: E, opts: Options, seed: u64) -> Self {
        Self::with_rng(eval, opts, StdRng::seed_from_u64(seed))
    }
}

impl<E, R: Rng> Minimax<E, R> {
    pub fn with_rng(eval: E, opts: Options, rng: R) -> Self {
        Minimax { eval, opts, rng, prev_value: 0.0, nodes: 0 }
    }

    /// Score of the last completed decision, from the deciding player's
    /// perspective.
    #[doc(hidden)]
    pub fn root_value(&self) -> Evaluation {
        self.prev_value
    }

    /// Recursive calls made by the last search.
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Decide a move for the player to move, searching `depth` plies.
    ///
    /// Returns `None` only if there are no legal moves. If the search can't
    /// single out a move, a random legal one is returned instead.
    pub fn minimax<P>(
        &mut self, pos: &P, depth: usize, guard: &ClockGuard,
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
        let best = self.max_value(pos, player, depth, guard)?;
        self.prev_value = best.value;
        Ok(best.best_move.or_else(|| trace_fallback(random_move(&legal, &mut self.rng))))
    }

    fn max_value<P>(
        &mut self, pos: &P, player: P::Player, depth: usize, guard: &ClockGuard,
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
            let value = self.min_value(&pos.forecast(m), player, depth - 1, guard)?.value;
            best.max(value, m);
        }
        Ok(best)
    }

    fn min_value<P>(
        &mut self, pos: &P, player: P::Player, depth: usize, guard: &ClockGuard,
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
            let value = self.max_value(&pos.forecast(m), player, depth - 1, guard)?.value;
            best.min(value, m);
        }
        Ok(best)
    }
}

/// Fixed-depth play: one search at `Options::search_depth` per turn.
impl<P, E, R> Strategy<P> for Minimax<E, R>
where
    P: Position,
    E: Evaluator<P>,
    R: Rng,
{
    fn choose_move(&mut self, pos: &P, clock: &dyn Clock) -> Option<Move> {
        // Something to return if the search doesn't finish in time.
        let legal = pos.legal_moves(pos.active_player());
        let fallback = random_move(&legal, &mut self.rng);
        let guard = ClockGuard::new(clock, self.opts.timer_threshold);
        match self.minimax(pos, self.opts.search_depth, &guard) {
            Ok(m) => m,
            Err(timeout) => {
                debug!("minimax abandoned after {} nodes: {}", self.nodes, timeout);
                trace_fallback(fallback)
            }
        }
    }
}
