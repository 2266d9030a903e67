//! Strategy implementations.

pub mod alphabeta;
pub mod iterative;
pub mod minimax;
pub mod random;
mod util;

pub use self::util::SearchResult;
