//! Time-bounded game-tree search for two-player, zero-sum, perfect-information
//! games.
//!
//! Implement `Position` for your game and `Evaluator` for your heuristic,
//! then pick a `Strategy`: fixed-depth `Minimax`, fixed-depth `AlphaBeta`, or
//! the time-bounded `IterativeDeepening`.

pub mod clock;
pub mod heuristics;
pub mod interface;
pub mod isolation;
pub mod options;
pub mod strategies;
pub mod util;

pub use clock::{ClockGuard, Deadline, SearchTimeout};
pub use interface::{
    Clock, Evaluation, Evaluator, Move, Position, Strategy, BEST_EVAL, WORST_EVAL,
};
pub use options::Options;
pub use strategies::alphabeta::AlphaBeta;
pub use strategies::iterative::IterativeDeepening;
pub use strategies::minimax::Minimax;
pub use strategies::random::Random;
pub use strategies::SearchResult;
