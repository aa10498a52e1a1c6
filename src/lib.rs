//! Countdown Timer Library
//!
//! This library provides the core functionality for the Countdown Timer.
//! It includes:
//! - Countdown engine: state machine, tick schedule and observer callbacks
//! - Runner that serializes user commands and ticks on a single task
//! - CLI command parsing, interactive session and display utilities
//! - Type definitions for state, durations and configuration

pub mod cli;
pub mod engine;
pub mod types;

// Re-export commonly used types for convenience
pub use engine::{
    ChannelObserver, CountdownEngine, CountdownError, CountdownEvent, CountdownHandle,
    CountdownObserver, CountdownRunner, MockObserver,
};
pub use types::{
    format_hms, ControlState, CountdownConfig, CountdownDuration, DurationInput, Snapshot,
    TimerState,
};
