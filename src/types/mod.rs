//! Core data types for the Countdown Timer.
//!
//! This module defines the data structures used for:
//! - Timer state and control availability
//! - Duration input parsing
//! - Engine configuration with validation
//! - Serializable snapshots for front ends

use serde::{Deserialize, Serialize};

use crate::engine::error::{CountdownError, TimeField};

// ============================================================================
// TimerState
// ============================================================================

/// Represents the current state of the countdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerState {
    /// No countdown has been started (or it was reset)
    #[default]
    Idle,
    /// Counting down
    Running,
    /// Countdown is on hold
    Paused,
    /// Countdown reached zero
    Completed,
}

impl TimerState {
    /// Returns the string representation of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerState::Idle => "idle",
            TimerState::Running => "running",
            TimerState::Paused => "paused",
            TimerState::Completed => "completed",
        }
    }

    /// Returns true if the countdown is actively ticking.
    pub fn is_running(&self) -> bool {
        matches!(self, TimerState::Running)
    }

    /// Returns the controls a front end should enable in this state.
    pub fn controls(&self) -> ControlState {
        match self {
            TimerState::Idle => ControlState {
                start: true,
                pause: false,
                resume: false,
                reset: false,
            },
            TimerState::Running => ControlState {
                start: false,
                pause: true,
                resume: false,
                reset: true,
            },
            TimerState::Paused => ControlState {
                start: false,
                pause: false,
                resume: true,
                reset: true,
            },
            TimerState::Completed => ControlState {
                start: false,
                pause: false,
                resume: false,
                reset: true,
            },
        }
    }
}

impl std::fmt::Display for TimerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ControlState
// ============================================================================

/// Which commands are meaningful in the current state.
///
/// `reset` is accepted by the engine in every state; this only describes
/// what a front end should offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub start: bool,
    pub pause: bool,
    pub resume: bool,
    pub reset: bool,
}

impl ControlState {
    /// Returns the names of the enabled controls, in button order.
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            (self.start, "start"),
            (self.pause, "pause"),
            (self.resume, "resume"),
            (self.reset, "reset"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }
}

// ============================================================================
// Durations
// ============================================================================

/// Raw hours/minutes/seconds text as typed into the input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DurationInput {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl DurationInput {
    /// Creates an input from the three field texts.
    pub fn new(
        hours: impl Into<String>,
        minutes: impl Into<String>,
        seconds: impl Into<String>,
    ) -> Self {
        Self {
            hours: hours.into(),
            minutes: minutes.into(),
            seconds: seconds.into(),
        }
    }

    /// Parses the three fields into a [`CountdownDuration`].
    ///
    /// # Errors
    ///
    /// Returns [`CountdownError::Parse`] naming the first field that is not
    /// a non-negative integer.
    pub fn parse(&self) -> Result<CountdownDuration, CountdownError> {
        Ok(CountdownDuration {
            hours: parse_field(TimeField::Hours, &self.hours)?,
            minutes: parse_field(TimeField::Minutes, &self.minutes)?,
            seconds: parse_field(TimeField::Seconds, &self.seconds)?,
        })
    }
}

impl From<CountdownDuration> for DurationInput {
    fn from(duration: CountdownDuration) -> Self {
        Self::new(
            duration.hours.to_string(),
            duration.minutes.to_string(),
            duration.seconds.to_string(),
        )
    }
}

fn parse_field(field: TimeField, text: &str) -> Result<u32, CountdownError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CountdownError::Parse {
            field,
            input: text.to_string(),
        });
    }
    trimmed.parse().map_err(|_| CountdownError::Parse {
        field,
        input: text.to_string(),
    })
}

/// A parsed hours/minutes/seconds triple.
///
/// Minutes and seconds may exceed 59; they simply add up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountdownDuration {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl CountdownDuration {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Total length in seconds.
    pub fn total_seconds(&self) -> u64 {
        u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}

/// Formats seconds as zero-padded `HH:MM:SS`.
///
/// Hours are not wrapped at 24 or 100.
pub fn format_hms(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

// ============================================================================
// CountdownConfig
// ============================================================================

/// Default tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Upper bound for the tick interval in milliseconds.
pub const MAX_TICK_INTERVAL_MS: u64 = 60_000;

/// Configuration for the countdown engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownConfig {
    /// Length of one tick in milliseconds (1-60000)
    pub tick_interval_ms: u64,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl CountdownConfig {
    /// Creates a new configuration with the specified tick interval.
    pub fn with_tick_interval_ms(mut self, millis: u64) -> Self {
        self.tick_interval_ms = millis;
        self
    }

    /// Returns the tick interval as a [`std::time::Duration`].
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms)
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.tick_interval_ms < 1 || self.tick_interval_ms > MAX_TICK_INTERVAL_MS {
            return Err(format!(
                "tick interval must be between 1 and {} ms",
                MAX_TICK_INTERVAL_MS
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// Read-only view of the engine for front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: TimerState,
    #[serde(rename = "remainingSeconds")]
    pub remaining_seconds: u64,
    /// `remaining_seconds` as `HH:MM:SS`
    pub display: String,
    pub controls: ControlState,
}

impl Snapshot {
    pub fn new(state: TimerState, remaining_seconds: u64) -> Self {
        Self {
            state,
            remaining_seconds,
            display: format_hms(remaining_seconds),
            controls: state.controls(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
