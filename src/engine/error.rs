//! Countdown engine error types.
//!
//! Every error here is recoverable: its `Display` text is the status message
//! shown to the user, and the engine state is left untouched.

use std::fmt;

use thiserror::Error;

use crate::types::TimerState;

/// One of the three duration input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Hours,
    Minutes,
    Seconds,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeField::Hours => write!(f, "hours"),
            TimeField::Minutes => write!(f, "minutes"),
            TimeField::Seconds => write!(f, "seconds"),
        }
    }
}

/// User commands the engine may reject. Reset is accepted in every state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Resume,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Pause => "pause",
            Command::Resume => "resume",
        }
    }

    /// Status message shown when this command is issued in the wrong state.
    pub fn rejection_message(&self) -> &'static str {
        match self {
            Command::Start => "Countdown is already active!",
            Command::Pause => "Countdown is not active or already paused!",
            Command::Resume => "Countdown is not paused!",
        }
    }
}

/// Errors reported by the countdown engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountdownError {
    /// A duration field is not a non-negative integer.
    #[error("Please enter valid numbers! ({field}: {input:?})")]
    Parse { field: TimeField, input: String },

    /// The duration adds up to zero seconds.
    #[error("Please enter a positive duration!")]
    InvalidDuration,

    /// The command is not valid in the current state.
    #[error("{}", .command.rejection_message())]
    InvalidTransition { command: Command, state: TimerState },
}

impl CountdownError {
    /// Short machine-friendly name of the error kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "parse_error",
            Self::InvalidDuration => "invalid_duration",
            Self::InvalidTransition { .. } => "invalid_transition",
        }
    }

    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "Use whole numbers such as 0, 5 or 30",
            Self::InvalidDuration => "Set at least one field above zero",
            Self::InvalidTransition { state, .. } => match state {
                TimerState::Idle => "Start a countdown first",
                TimerState::Running => "Pause or reset the running countdown",
                TimerState::Paused => "Resume or reset the paused countdown",
                TimerState::Completed => "Reset before starting a new countdown",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CountdownError::Parse {
            field: TimeField::Minutes,
            input: "abc".to_string(),
        };
        assert!(err.to_string().starts_with("Please enter valid numbers!"));
        assert!(err.to_string().contains("minutes"));
        assert!(err.to_string().contains("abc"));

        assert_eq!(
            CountdownError::InvalidDuration.to_string(),
            "Please enter a positive duration!"
        );
    }

    #[test]
    fn test_invalid_transition_messages() {
        let cases = [
            (Command::Start, "Countdown is already active!"),
            (Command::Pause, "Countdown is not active or already paused!"),
            (Command::Resume, "Countdown is not paused!"),
        ];
        for (command, message) in cases {
            let err = CountdownError::InvalidTransition {
                command,
                state: TimerState::Idle,
            };
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn test_kind() {
        assert_eq!(CountdownError::InvalidDuration.kind(), "invalid_duration");
        assert_eq!(
            CountdownError::Parse {
                field: TimeField::Hours,
                input: String::new()
            }
            .kind(),
            "parse_error"
        );
        assert_eq!(
            CountdownError::InvalidTransition {
                command: Command::Pause,
                state: TimerState::Paused
            }
            .kind(),
            "invalid_transition"
        );
    }

    #[test]
    fn test_suggestion_depends_on_state() {
        let err = CountdownError::InvalidTransition {
            command: Command::Start,
            state: TimerState::Completed,
        };
        assert_eq!(err.suggestion(), "Reset before starting a new countdown");
    }

    #[test]
    fn test_command_as_str() {
        assert_eq!(Command::Start.to_string(), "start");
        assert_eq!(Command::Pause.to_string(), "pause");
        assert_eq!(Command::Resume.to_string(), "resume");
    }
}
