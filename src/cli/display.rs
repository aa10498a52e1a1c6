//! Display utilities for the Countdown Timer CLI.
//!
//! This module provides formatted output for:
//! - Tick and status events
//! - Status snapshots
//! - Error messages
//!
//! Rendering returns strings; the session decides where they are written.

use crate::engine::CountdownEvent;
use crate::types::{format_hms, Snapshot, TimerState};

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Prints a session-level error (bad command line, not an engine status).
    pub fn show_error(message: &str) {
        eprintln!("Error: {}", message);
    }

    /// Renders an event as a display line, or `None` if it has no text form.
    ///
    /// `previous` is the state the engine was in before `event`.
    pub fn render_event(
        event: &CountdownEvent,
        previous: TimerState,
        json: bool,
    ) -> Option<String> {
        if json {
            return serde_json::to_string(event).ok();
        }

        match event {
            CountdownEvent::Tick { display, .. } => Some(format!("Time left: {}", display)),
            CountdownEvent::Status { message } => Some(message.clone()),
            // Show the full duration as soon as the countdown starts.
            // On resume the last tick line is still current.
            CountdownEvent::StateChanged {
                state: TimerState::Running,
                remaining_seconds,
            } if previous == TimerState::Idle => {
                Some(format!("Time left: {}", format_hms(*remaining_seconds)))
            }
            CountdownEvent::StateChanged { .. } => None,
        }
    }

    /// Renders a snapshot for the `status` command.
    pub fn render_status(snapshot: &Snapshot, json: bool) -> String {
        if json {
            return serde_json::to_string(snapshot).unwrap_or_default();
        }

        let state_display = match snapshot.state {
            TimerState::Idle => "Idle",
            TimerState::Running => "Running",
            TimerState::Paused => "Paused",
            TimerState::Completed => "Completed",
        };
        format!(
            "State: {} | Time left: {} | Controls: {}",
            state_display,
            snapshot.display,
            snapshot.controls.enabled().join(", ")
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
