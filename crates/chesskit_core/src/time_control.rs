//! Search limits and the soft move deadline.
//!
//! The deadline is soft: search code polls it between moves and every few
//! thousand nodes, and in-flight recursion unwinds normally once it has
//! passed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Limits for one search call. The time budget takes precedence over
/// depth: once the deadline passes the engine returns the best move found
/// so far.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies.
    pub depth: u8,
    /// Wall-clock budget for this move (None = unlimited).
    pub move_time: Option<Duration>,
    pub budget: TimeBudget,
}

impl SearchLimits {
    fn new(depth: u8, move_time: Option<Duration>) -> Self {
        Self {
            depth,
            move_time,
            budget: TimeBudget::new(move_time),
        }
    }

    /// Depth-only limits, no clock.
    pub fn depth(depth: u8) -> Self {
        Self::new(depth, None)
    }

    /// Clock-only limits; the engine picks its own depth.
    pub fn time(move_time: Duration) -> Self {
        Self::new(u8::MAX, Some(move_time))
    }

    /// Start the clock. Call when search begins.
    pub fn start(&self) {
        self.budget.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(3)
    }
}

/// Cheaply cloneable stop signal with an optional wall-clock deadline.
/// `is_stopped` is an atomic load, fine to call on every node; the actual
/// clock read happens in `check_time`, typically every N nodes.
#[derive(Debug, Clone)]
pub struct TimeBudget {
    stopped: Arc<AtomicBool>,
    /// Absolute point the search must stop at, armed by `start`.
    deadline: Arc<RwLock<Option<Instant>>>,
    limit: Option<Duration>,
    check_interval: u64,
}

impl TimeBudget {
    pub fn new(limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            deadline: Arc::new(RwLock::new(None)),
            limit,
            check_interval: 1024,
        }
    }

    /// Arm the deadline and clear the stop flag.
    pub fn start(&self) {
        *self.deadline.write().unwrap() = self.limit.map(|l| Instant::now() + l);
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Force the search to stop.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Read the clock and latch the stop flag once the deadline has passed.
    /// Returns true once the search should stop.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }
        if let Some(deadline) = *self.deadline.read().unwrap()
            && Instant::now() >= deadline
        {
            self.stop();
            return true;
        }
        false
    }

    /// True every `check_interval` nodes; gates `check_time` so the clock
    /// is not read on every node.
    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        nodes % self.check_interval == 0
    }
}

impl Default for TimeBudget {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
