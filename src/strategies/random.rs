//! A strategy that randomly chooses a move, for use in tests.

use super::super::interface::*;
use super::util::random_move;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct Random<R = StdRng> {
    rng: R,
}

impl Random<StdRng> {
    pub fn new() -> Self {
        Random { rng: StdRng::from_entropy() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Random { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for Random<StdRng> {
    fn default() -> Self {
        Random::new()
    }
}

impl<R: Rng> Random<R> {
    pub fn with_rng(rng: R) -> Self {
        Random { rng }
    }
}

impl<P: Position, R: Rng> Strategy<P> for Random<R> {
    fn choose_move(&mut self, pos: &P, _clock: &dyn Clock) -> Option<Move> {
        random_move(&pos.legal_moves(pos.active_player()), &mut self.rng)
    }
}
