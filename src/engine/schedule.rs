//! The single tick source of a countdown.
//!
//! A [`TickSchedule`] holds at most one armed deadline. Arming replaces the
//! deadline instead of adding a second source, and a cancelled schedule
//! never fires, so pause/resume cycles cannot stack tick loops.

use std::future;
use std::time::Duration;

use tokio::time::{sleep_until, Instant};

/// Cancellable periodic deadline.
#[derive(Debug)]
pub struct TickSchedule {
    period: Duration,
    deadline: Option<Instant>,
}

impl TickSchedule {
    /// Creates a disarmed schedule firing every `period` once armed.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    /// Arms the schedule: the first tick fires one full period from now.
    pub fn arm(&mut self) {
        self.deadline = Some(Instant::now() + self.period);
    }

    /// Disarms the schedule.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Waits for the next tick.
    ///
    /// Pends forever while disarmed. Cancel-safe: dropping the future before
    /// it completes leaves the deadline in place.
    pub async fn wait(&mut self) {
        let Some(deadline) = self.deadline else {
            return future::pending().await;
        };

        sleep_until(deadline).await;

        let next = deadline + self.period;
        let now = Instant::now();
        // Fell behind by more than a period: skip the missed ticks
        self.deadline = Some(if next <= now { now + self.period } else { next });
    }
}

// ============================================================================
// Tests
// ============================================================================
