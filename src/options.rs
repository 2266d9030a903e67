//! Search configuration.

use std::time::Duration;

/// Options shared by the search engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    pub(crate) search_depth: usize,
    pub(crate) timer_threshold: Duration,
    pub(crate) max_depth: Option<usize>,
}

impl Options {
    pub fn new() -> Self {
        Options {
            search_depth: 3,
            timer_threshold: Duration::from_millis(10),
            max_depth: None,
        }
    }

    /// Number of plies a fixed-depth player searches.
    pub fn with_search_depth(mut self, depth: usize) -> Self {
        self.search_depth = depth;
        self
    }

    /// Time left at which a search is abandoned. Must leave enough room for
    /// the deepest call chain to unwind before the turn ends.
    pub fn with_timer_threshold(mut self, threshold: Duration) -> Self {
        self.timer_threshold = threshold;
        self
    }

    /// Stop iterative deepening after this depth even if time remains.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn search_depth(&self) -> usize {
        self.search_depth
    }

    pub fn timer_threshold(&self) -> Duration {
        self.timer_threshold
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::new()
    }
}
