//! The common structures and traits.

use std::fmt::{Debug, Display, Formatter, Result};
use std::time::Duration;

/// An assessment of a position from the perspective of a given player.
/// Higher values mean a more favorable position.
pub type Evaluation = f64;

/// An absolutely wonderful outcome, e.g. a win.
pub const BEST_EVAL: Evaluation = f64::INFINITY;
/// An absolutely disastrous outcome, e.g. a loss.
pub const WORST_EVAL: Evaluation = f64::NEG_INFINITY;

/// A board coordinate that a player moves to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    /// The conventional "no move" coordinate. Searches report the absence of
    /// a move as `None`; this exists for display and for callers that need a
    /// plain coordinate.
    pub const NONE: Move = Move { row: -1, col: -1 };

    pub const fn new(row: i32, col: i32) -> Move {
        Move { row, col }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A two-player, perfect-knowledge game position.
///
/// Positions are never mutated by a search: each branch obtains its own
/// successor from `forecast`.
pub trait Position: Clone {
    /// Handle identifying one of the two players.
    type Player: Copy + Eq + Debug;

    /// The player whose turn it is.
    fn active_player(&self) -> Self::Player;

    /// The other player.
    fn opponent(&self, player: Self::Player) -> Self::Player;

    /// The moves `player` could make from here, in a stable order. Empty if
    /// there are none.
    fn legal_moves(&self, player: Self::Player) -> Vec<Move>;

    /// A new position with the active player's `m` applied. `self` is left
    /// untouched.
    fn forecast(&self, m: Move) -> Self;

    /// Whether `player` has definitely won in this position.
    fn is_winner(&self, player: Self::Player) -> bool;

    /// Whether `player` has definitely lost in this position.
    fn is_loser(&self, player: Self::Player) -> bool;

    /// Board width in cells. Used with `height` by the opening shortcut,
    /// which only fires while every one of the `width * height` cells is a
    /// legal move. Positions without a grid can return 0.
    fn width(&self) -> usize;

    /// Board height in cells; see `width`.
    fn height(&self) -> usize;
}

/// Evaluates a game's positions.
pub trait Evaluator<P: Position> {
    /// Score `pos` from the perspective of `player`. Lost and won positions
    /// should map to `WORST_EVAL` and `BEST_EVAL` respectively.
    fn evaluate(&self, pos: &P, player: P::Player) -> Evaluation;
}

impl<P, F> Evaluator<P> for F
where
    P: Position,
    F: Fn(&P, P::Player) -> Evaluation,
{
    fn evaluate(&self, pos: &P, player: P::Player) -> Evaluation {
        self(pos, player)
    }
}

/// Reports how much of the current turn's time budget is left.
pub trait Clock {
    fn time_left(&self) -> Duration;
}

impl<F: Fn() -> Duration> Clock for F {
    fn time_left(&self) -> Duration {
        self()
    }
}

/// Defines a method of choosing a move for the player to move.
pub trait Strategy<P: Position> {
    /// Pick a move for `pos.active_player()` before `clock` runs out.
    ///
    /// Returns `None` only when there are no legal moves.
    fn choose_move(&mut self, pos: &P, clock: &dyn Clock) -> Option<Move>;
}
