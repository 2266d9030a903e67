//! Time keeping for searches.
//!
//! A search never sets its own deadline. It polls a caller supplied `Clock`
//! through a `ClockGuard` on entry to every recursive call, and unwinds with
//! `SearchTimeout` as soon as the time left drops below the safety threshold.

use super::interface::Clock;

use std::cell::Cell;
use std::time::{Duration, Instant};
use thiserror::Error;

/// The search ran too close to the end of the turn and was abandoned.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
#[error("search timed out with {remaining:?} left (threshold {threshold:?})")]
pub struct SearchTimeout {
    pub remaining: Duration,
    pub threshold: Duration,
}

/// A wall-clock budget for one turn.
#[derive(Copy, Clone, Debug)]
pub struct Deadline {
    end: Instant,
}

impl Deadline {
    pub fn after(budget: Duration) -> Deadline {
        Deadline { end: Instant::now() + budget }
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.end
    }
}

impl Clock for Deadline {
    fn time_left(&self) -> Duration {
        self.end.saturating_duration_since(Instant::now())
    }
}

/// Aborts a search once the time left falls below `threshold`.
pub struct ClockGuard<'a> {
    clock: &'a dyn Clock,
    threshold: Duration,
    checks: Cell<u64>,
}

impl<'a> ClockGuard<'a> {
    pub fn new(clock: &'a dyn Clock, threshold: Duration) -> Self {
        ClockGuard { clock, threshold, checks: Cell::new(0) }
    }

    /// Poll the clock. Must be called before any work in every recursive
    /// search call; the cost per node is too variable under pruning to check
    /// any less often.
    pub fn check(&self) -> Result<(), SearchTimeout> {
        self.checks.set(self.checks.get() + 1);
        let remaining = self.clock.time_left();
        if remaining < self.threshold {
            return Err(SearchTimeout { remaining, threshold: self.threshold });
        }
        Ok(())
    }

    /// Whether there is more than the threshold left, without counting as a
    /// check.
    pub fn has_time(&self) -> bool {
        self.clock.time_left() > self.threshold
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    /// Number of `check` calls made so far.
    pub fn checks(&self) -> u64 {
        self.checks.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trips_below_threshold() {
        let left = Cell::new(Duration::from_millis(50));
        let clock = || left.get();
        let guard = ClockGuard::new(&clock, Duration::from_millis(10));
        assert!(guard.check().is_ok());
        left.set(Duration::from_millis(10));
        assert!(guard.check().is_ok());
        left.set(Duration::from_millis(9));
        let err = guard.check().unwrap_err();
        assert_eq!(err.remaining, Duration::from_millis(9));
        assert_eq!(err.threshold, Duration::from_millis(10));
        assert_eq!(guard.checks(), 3);
    }

    #[test]
    fn has_time_is_strict() {
        let clock = || Duration::from_millis(10);
        let guard = ClockGuard::new(&clock, Duration::from_millis(10));
        assert!(!guard.has_time());
        assert!(guard.check().is_ok());
        assert_eq!(guard.checks(), 1);
    }

    #[test]
    fn deadline_counts_down() {
        let deadline = Deadline::after(Duration::from_secs(60));
        assert!(!deadline.expired());
        assert!(deadline.time_left() <= Duration::from_secs(60));
        assert!(deadline.time_left() > Duration::from_secs(50));

        let gone = Deadline::after(Duration::ZERO);
        assert!(gone.expired());
        assert_eq!(gone.time_left(), Duration::ZERO);
    }
}
