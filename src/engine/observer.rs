//! Output interface of the countdown engine.
//!
//! The engine never touches a display directly. It reports through a
//! [`CountdownObserver`]:
//! - `on_tick` once per elapsed second while running
//! - `on_status` for rejected commands, reset and completion
//! - `on_state_change` after every successful transition

use std::sync::Mutex;

use serde::Serialize;
use tokio::sync::mpsc;

use crate::types::TimerState;

// ============================================================================
// CountdownObserver
// ============================================================================

/// Callbacks invoked by the engine.
///
/// Implementations are called from the engine's own task and must not block.
pub trait CountdownObserver {
    /// Called after each tick with the remaining time, both as `HH:MM:SS`
    /// and in seconds.
    fn on_tick(&self, display: &str, remaining_seconds: u64);

    /// Called with a human-readable status message.
    fn on_status(&self, message: &str);

    /// Called after the engine moved to `state`.
    fn on_state_change(&self, _state: TimerState, _remaining_seconds: u64) {}
}

// ============================================================================
// CountdownEvent
// ============================================================================

/// Observer callbacks as values, for channel-based front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CountdownEvent {
    /// One second elapsed
    Tick {
        #[serde(rename = "remainingSeconds")]
        remaining_seconds: u64,
        display: String,
    },
    /// Status message for the user
    Status { message: String },
    /// The engine changed state
    StateChanged {
        state: TimerState,
        #[serde(rename = "remainingSeconds")]
        remaining_seconds: u64,
    },
}

// ============================================================================
// ChannelObserver
// ============================================================================

/// Forwards every callback as a [`CountdownEvent`] over an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    event_tx: mpsc::UnboundedSender<CountdownEvent>,
}

impl ChannelObserver {
    pub fn new(event_tx: mpsc::UnboundedSender<CountdownEvent>) -> Self {
        Self { event_tx }
    }

    /// Creates an observer together with the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<CountdownEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    fn send(&self, event: CountdownEvent) {
        if self.event_tx.send(event).is_err() {
            tracing::warn!("Event receiver dropped, countdown event discarded");
        }
    }
}

impl CountdownObserver for ChannelObserver {
    fn on_tick(&self, display: &str, remaining_seconds: u64) {
        self.send(CountdownEvent::Tick {
            remaining_seconds,
            display: display.to_string(),
        });
    }

    fn on_status(&self, message: &str) {
        self.send(CountdownEvent::Status {
            message: message.to_string(),
        });
    }

    fn on_state_change(&self, state: TimerState, remaining_seconds: u64) {
        self.send(CountdownEvent::StateChanged {
            state,
            remaining_seconds,
        });
    }
}

// ============================================================================
// MockObserver
// ============================================================================

/// Observer that records every callback, for tests.
#[derive(Debug, Default)]
pub struct MockObserver {
    ticks: Mutex<Vec<String>>,
    statuses: Mutex<Vec<String>>,
    transitions: Mutex<Vec<(TimerState, u64)>>,
}

impl MockObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ticks(&self) -> Vec<String> {
        self.ticks.lock().unwrap().clone()
    }

    #[must_use]
    pub fn statuses(&self) -> Vec<String> {
        self.statuses.lock().unwrap().clone()
    }

    #[must_use]
    pub fn transitions(&self) -> Vec<(TimerState, u64)> {
        self.transitions.lock().unwrap().clone()
    }

    #[must_use]
    pub fn last_status(&self) -> Option<String> {
        self.statuses.lock().unwrap().last().cloned()
    }

    pub fn clear(&self) {
        self.ticks.lock().unwrap().clear();
        self.statuses.lock().unwrap().clear();
        self.transitions.lock().unwrap().clear();
    }
}

impl CountdownObserver for MockObserver {
    fn on_tick(&self, display: &str, _remaining_seconds: u64) {
        self.ticks.lock().unwrap().push(display.to_string());
    }

    fn on_status(&self, message: &str) {
        self.statuses.lock().unwrap().push(message.to_string());
    }

    fn on_state_change(&self, state: TimerState, remaining_seconds: u64) {
        self.transitions
            .lock()
            .unwrap()
            .push((state, remaining_seconds));
    }
}

impl<T: CountdownObserver + ?Sized> CountdownObserver for std::sync::Arc<T> {
    fn on_tick(&self, display: &str, remaining_seconds: u64) {
        (**self).on_tick(display, remaining_seconds)
    }

    fn on_status(&self, message: &str) {
        (**self).on_status(message)
    }

    fn on_state_change(&self, state: TimerState, remaining_seconds: u64) {
        (**self).on_state_change(state, remaining_seconds)
    }
}

// ============================================================================
// Tests
// ============================================================================
