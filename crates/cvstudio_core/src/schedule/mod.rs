//! Edit-coalescing scheduler for expensive re-renders.
//!
//! # Responsibility
//! - Own the single shared debounce deadline for fine-grained edits.
//! - Report when the quiet window has elapsed, exactly once per window.
//!
//! # Invariants
//! - One deadline exists regardless of how many fields changed; each
//!   notification supersedes the previous deadline (no explicit cancel).
//! - All methods take `now` explicitly, so behavior is deterministic and
//!   tests never sleep; the host event loop owns real timing.

use std::time::{Duration, Instant};

/// Quiet period after the last fine-grained edit before a render fires.
pub const DEFAULT_QUIET_WINDOW: Duration = Duration::from_millis(300);

/// Deadline-owning debounce component.
///
/// Fine-grained edits call [`notify`](Self::notify); the host tick calls
/// [`fire_if_due`](Self::fire_if_due) and re-renders when it returns true.
/// Structural edits render synchronously and [`clear`](Self::clear) any
/// pending deadline, since their render already reflects the latest state.
#[derive(Debug)]
pub struct RenderScheduler {
    window: Duration,
    deadline: Option<Instant>,
}

impl RenderScheduler {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_QUIET_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Records a fine-grained edit, pushing the deadline to `now + window`.
    pub fn notify(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// True while a render is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consumes an elapsed deadline.
    ///
    /// Returns true exactly once per quiet window; the caller re-renders.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drops any pending deadline without firing.
    pub fn clear(&mut self) {
        self.deadline = None;
    }
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new()
    }
}
