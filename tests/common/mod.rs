// Shared fixtures: an explicit game tree, and a clock that runs out after a
// fixed number of queries.

#![allow(dead_code)]

use adversarial_search::{Evaluation, Move, Position};
use rand::Rng;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug)]
pub struct Node {
    // Heuristic value from the maximizer's point of view.
    value: Evaluation,
    children: Vec<Rc<Node>>,
}

pub fn leaf(value: Evaluation) -> Rc<Node> {
    Rc::new(Node { value, children: Vec::new() })
}

pub fn branch(value: Evaluation, children: Vec<Rc<Node>>) -> Rc<Node> {
    Rc::new(Node { value, children })
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Max,
    Min,
}

/// A position that walks a hand-built tree. Moves are `(0, child index)`.
#[derive(Clone, Debug)]
pub struct Tree {
    node: Rc<Node>,
    to_move: Side,
}

impl Tree {
    pub fn new(root: Rc<Node>) -> Tree {
        Tree { node: root, to_move: Side::Max }
    }

    pub fn value(&self, player: Side) -> Evaluation {
        match player {
            Side::Max => self.node.value,
            Side::Min => -self.node.value,
        }
    }
}

impl Position for Tree {
    type Player = Side;

    fn active_player(&self) -> Side {
        self.to_move
    }

    fn opponent(&self, player: Side) -> Side {
        match player {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }

    fn legal_moves(&self, _player: Side) -> Vec<Move> {
        (0..self.node.children.len() as i32).map(|i| Move::new(0, i)).collect()
    }

    fn forecast(&self, m: Move) -> Tree {
        Tree {
            node: self.node.children[m.col as usize].clone(),
            to_move: self.opponent(self.to_move),
        }
    }

    fn is_winner(&self, _player: Side) -> bool {
        false
    }

    fn is_loser(&self, _player: Side) -> bool {
        false
    }

    // No opening shortcut for trees.
    fn width(&self) -> usize {
        0
    }

    fn height(&self) -> usize {
        0
    }
}

pub fn tree_value(t: &Tree, player: Side) -> Evaluation {
    t.value(player)
}

/// The example from AIMA figure 5.2: minimax value 3 through the first move.
pub fn aima_tree() -> Tree {
    Tree::new(branch(
        0.0,
        vec![
            branch(1.0, vec![leaf(3.0), leaf(12.0), leaf(8.0)]),
            branch(10.0, vec![leaf(2.0), leaf(4.0), leaf(6.0)]),
            branch(2.0, vec![leaf(14.0), leaf(5.0), leaf(2.0)]),
        ],
    ))
}

/// A random tree with small integer values, so that ties are common.
pub fn random_tree<R: Rng>(rng: &mut R, depth: usize) -> Rc<Node> {
    let value = rng.gen_range(-5..=5) as Evaluation;
    if depth == 0 {
        return leaf(value);
    }
    let n = rng.gen_range(0..=4);
    branch(value, (0..n).map(|_| random_tree(rng, depth - 1)).collect())
}

/// A clock with plenty of time until it has been asked `limit` times.
pub struct ScriptedClock {
    queries: Cell<usize>,
    limit: usize,
}

impl ScriptedClock {
    pub fn trips_at(limit: usize) -> ScriptedClock {
        ScriptedClock { queries: Cell::new(0), limit }
    }

    pub fn queries(&self) -> usize {
        self.queries.get()
    }
}

impl adversarial_search::Clock for ScriptedClock {
    fn time_left(&self) -> Duration {
        self.queries.set(self.queries.get() + 1);
        if self.queries.get() >= self.limit {
            Duration::ZERO
        } else {
            Duration::from_secs(3600)
        }
    }
}

pub fn plenty() -> Duration {
    Duration::from_secs(3600)
}
