//! Countdown engine: the state machine behind the timer.
//!
//! ```text
//! Idle --start--> Running --pause--> Paused --resume--> Running
//! Running --(remaining == 0)--> Completed
//! any --reset--> Idle
//! ```
//!
//! The engine owns its [`TickSchedule`]; every transition that stops the
//! countdown cancels it and every transition that starts it re-arms it, so
//! there is never more than one tick source.

use tracing::{debug, info};

use crate::types::{format_hms, ControlState, CountdownConfig, DurationInput, Snapshot, TimerState};

use super::error::{Command, CountdownError};
use super::observer::CountdownObserver;
use super::schedule::TickSchedule;

/// Status message emitted after a reset.
pub const RESET_MESSAGE: &str = "Countdown reset!";

/// Status message emitted when the countdown reaches zero.
pub const COMPLETE_MESSAGE: &str = "Countdown complete!";

// ============================================================================
// CountdownEngine
// ============================================================================

/// Countdown state machine reporting to an observer `O`.
pub struct CountdownEngine<O> {
    state: TimerState,
    remaining_seconds: u64,
    schedule: TickSchedule,
    observer: O,
}

impl<O: CountdownObserver> CountdownEngine<O> {
    /// Creates an idle engine ticking at the configured interval.
    pub fn new(config: &CountdownConfig, observer: O) -> Self {
        Self {
            state: TimerState::Idle,
            remaining_seconds: 0,
            schedule: TickSchedule::new(config.tick_interval()),
            observer,
        }
    }

    /// Starts a countdown from the raw field texts.
    ///
    /// # Errors
    ///
    /// - [`CountdownError::InvalidTransition`] if the engine is not idle
    /// - [`CountdownError::Parse`] if a field is not a non-negative integer
    /// - [`CountdownError::InvalidDuration`] if the total is zero
    pub fn start(&mut self, input: &DurationInput) -> Result<(), CountdownError> {
        if self.state != TimerState::Idle {
            return self.reject(CountdownError::InvalidTransition {
                command: Command::Start,
                state: self.state,
            });
        }

        let total = match input.parse() {
            Ok(duration) => duration.total_seconds(),
            Err(e) => return self.reject(e),
        };
        if total == 0 {
            return self.reject(CountdownError::InvalidDuration);
        }

        self.remaining_seconds = total;
        self.schedule.arm();
        info!(total_seconds = total, "Countdown started");
        self.transition(TimerState::Running);
        Ok(())
    }

    /// Pauses a running countdown.
    ///
    /// # Errors
    ///
    /// Returns [`CountdownError::InvalidTransition`] if the engine is not running.
    pub fn pause(&mut self) -> Result<(), CountdownError> {
        if self.state != TimerState::Running {
            return self.reject(CountdownError::InvalidTransition {
                command: Command::Pause,
                state: self.state,
            });
        }

        self.schedule.cancel();
        info!(remaining_seconds = self.remaining_seconds, "Countdown paused");
        self.transition(TimerState::Paused);
        Ok(())
    }

    /// Resumes a paused countdown.
    ///
    /// # Errors
    ///
    /// Returns [`CountdownError::InvalidTransition`] if the engine is not paused.
    pub fn resume(&mut self) -> Result<(), CountdownError> {
        if self.state != TimerState::Paused {
            return self.reject(CountdownError::InvalidTransition {
                command: Command::Resume,
                state: self.state,
            });
        }

        self.schedule.arm();
        info!(remaining_seconds = self.remaining_seconds, "Countdown resumed");
        self.transition(TimerState::Running);
        Ok(())
    }

    /// Returns to idle from any state and drops any pending tick.
    pub fn reset(&mut self) {
        self.schedule.cancel();
        self.remaining_seconds = 0;
        info!(from = %self.state, "Countdown reset");
        self.transition(TimerState::Idle);
        self.observer.on_status(RESET_MESSAGE);
    }

    /// Advances the countdown by one second.
    ///
    /// Returns the new remaining time, or `None` if the engine is not running
    /// (the tick is ignored).
    pub fn tick(&mut self) -> Option<u64> {
        if self.state != TimerState::Running {
            debug!(state = %self.state, "Tick ignored");
            return None;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        self.observer
            .on_tick(&format_hms(self.remaining_seconds), self.remaining_seconds);

        if self.remaining_seconds == 0 {
            self.schedule.cancel();
            info!("Countdown complete");
            self.transition(TimerState::Completed);
            self.observer.on_status(COMPLETE_MESSAGE);
        }

        Some(self.remaining_seconds)
    }

    /// Waits until the next tick is due. Pends forever unless running.
    pub async fn next_tick(&mut self) {
        self.schedule.wait().await
    }

    /// Returns true if a tick is scheduled.
    pub fn is_ticking(&self) -> bool {
        self.schedule.is_armed()
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn controls(&self) -> ControlState {
        self.state.controls()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.state, self.remaining_seconds)
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    fn transition(&mut self, to: TimerState) {
        debug!(from = %self.state, to = %to, "State transition");
        self.state = to;
        self.observer.on_state_change(to, self.remaining_seconds);
    }

    fn reject(&self, error: CountdownError) -> Result<(), CountdownError> {
        debug!(state = %self.state, kind = error.kind(), "Command rejected: {}", error);
        self.observer.on_status(&error.to_string());
        Err(error)
    }
}

// ============================================================================
// Tests
// ============================================================================
