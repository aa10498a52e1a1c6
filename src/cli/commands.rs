//! Command definitions for the Countdown Timer CLI.
//!
//! Uses clap derive macro for argument parsing.

use clap::{Args, Parser, Subcommand};

use crate::types::{CountdownConfig, DurationInput, DEFAULT_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS};

// ============================================================================
// CLI Structure
// ============================================================================

/// Countdown Timer CLI
#[derive(Parser, Debug)]
#[command(
    name = "countdown",
    version,
    about = "Countdown timer with pause, resume and reset",
    long_about = "Enter hours, minutes and seconds, start the countdown and watch the \
                  remaining time. Control it interactively by typing commands on stdin.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run an interactive countdown session
    Run(RunArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Run Command Arguments
// ============================================================================

/// Arguments for the run command
///
/// Duration fields are kept as text so the engine reports malformed input
/// the same way it does for interactive `start`.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Hours to count down (starts immediately when any duration is given)
    #[arg(long, allow_hyphen_values = true)]
    pub hours: Option<String>,

    /// Minutes to count down
    #[arg(short, long, allow_hyphen_values = true)]
    pub minutes: Option<String>,

    /// Seconds to count down
    #[arg(short, long, allow_hyphen_values = true)]
    pub seconds: Option<String>,

    /// Tick interval in milliseconds
    #[arg(
        long,
        hide = true,
        default_value_t = DEFAULT_TICK_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(1..=MAX_TICK_INTERVAL_MS)
    )]
    pub tick_ms: u64,

    /// Print events as JSON lines
    #[arg(long)]
    pub json: bool,
}

impl RunArgs {
    /// Returns the duration to start with, if any field was given.
    ///
    /// Missing fields default to `0`.
    pub fn initial_duration(&self) -> Option<DurationInput> {
        if self.hours.is_none() && self.minutes.is_none() && self.seconds.is_none() {
            return None;
        }
        let field = |f: &Option<String>| f.clone().unwrap_or_else(|| "0".to_string());
        Some(DurationInput::new(
            field(&self.hours),
            field(&self.minutes),
            field(&self.seconds),
        ))
    }

    /// Builds the engine configuration from the flags.
    pub fn config(&self) -> CountdownConfig {
        CountdownConfig::default().with_tick_interval_ms(self.tick_ms)
    }
}

// ============================================================================
// Tests
// ============================================================================
