//! Knight-move Isolation, for use in tests and demos.
//!
//! Each player first drops their piece on any blank cell, then moves like a
//! chess knight onto blank cells. Every cell a piece lands on stays blocked
//! for the rest of the game. A player with no legal move on their turn
//! loses.

use super::interface::{self, Move};

use std::fmt::{Display, Formatter};
use thiserror::Error;

const DIRECTIONS: [(i32, i32); 8] =
    [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    fn idx(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("{0} is not a legal move for {1:?}")]
    IllegalMove(Move, Player),
    #[error("board must be at least 1x1, got {0}x{1}")]
    Empty(usize, usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    blocked: Vec<bool>,
    locations: [Option<Move>; 2],
    active: Player,
    move_count: usize,
}

impl Board {
    /// A blank board.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero. Use `try_new` to get a
    /// `BoardError` instead.
    pub fn new(width: usize, height: usize) -> Board {
        match Board::try_new(width, height) {
            Ok(board) => board,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_new(width: usize, height: usize) -> Result<Board, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::Empty(width, height));
        }
        Ok(Board {
            width,
            height,
            blocked: vec![false; width * height],
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        })
    }

    /// Where `player`'s piece stands, if it has been placed yet.
    pub fn location(&self, player: Player) -> Option<Move> {
        self.locations[player.idx()]
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    fn index(&self, m: Move) -> Option<usize> {
        if m.row < 0 || m.col < 0 {
            return None;
        }
        let (row, col) = (m.row as usize, m.col as usize);
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    /// Whether `m` is on the board and not yet visited.
    pub fn is_blank(&self, m: Move) -> bool {
        self.index(m).map_or(false, |i| !self.blocked[i])
    }

    /// Move the active player's piece to `m` and pass the turn.
    pub fn apply_move(&mut self, m: Move) -> Result<(), BoardError> {
        if !self.legal_moves_for(self.active).contains(&m) {
            return Err(BoardError::IllegalMove(m, self.active));
        }
        self.place(m);
        Ok(())
    }

    // Callers guarantee `m` is legal.
    fn place(&mut self, m: Move) {
        if let Some(i) = self.index(m) {
            self.blocked[i] = true;
        }
        self.locations[self.active.idx()] = Some(m);
        self.active = self.active.other();
        self.move_count += 1;
    }

    fn legal_moves_for(&self, player: Player) -> Vec<Move> {
        match self.location(player) {
            None => (0..self.height as i32)
                .flat_map(|row| (0..self.width as i32).map(move |col| Move::new(row, col)))
                .filter(|&m| self.is_blank(m))
                .collect(),
            Some(from) => DIRECTIONS
                .iter()
                .map(|&(dr, dc)| Move::new(from.row + dr, from.col + dc))
                .filter(|&m| self.is_blank(m))
                .collect(),
        }
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new(7, 7)
    }
}

impl interface::Position for Board {
    type Player = Player;

    fn active_player(&self) -> Player {
        self.active
    }

    fn opponent(&self, player: Player) -> Player {
        player.other()
    }

    fn legal_moves(&self, player: Player) -> Vec<Move> {
        self.legal_moves_for(player)
    }

    fn forecast(&self, m: Move) -> Board {
        let mut next = self.clone();
        next.place(m);
        next
    }

    fn is_winner(&self, player: Player) -> bool {
        player != self.active && self.legal_moves_for(self.active).is_empty()
    }

    fn is_loser(&self, player: Player) -> bool {
        player == self.active && self.legal_moves_for(self.active).is_empty()
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        for row in 0..self.height as i32 {
            for col in 0..self.width as i32 {
                let m = Move::new(row, col);
                let c = if self.location(Player::One) == Some(m) {
                    '1'
                } else if self.location(Player::Two) == Some(m) {
                    '2'
                } else if self.is_blank(m) {
                    '.'
                } else {
                    '#'
                };
                write!(f, "{}", c)?;
                if col + 1 < self.width as i32 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
