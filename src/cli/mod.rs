//! CLI module for the Countdown Timer.
//!
//! This module provides the terminal front end:
//! - `commands`: Command definitions using clap derive
//! - `input`: Parsing of interactive session lines
//! - `display`: Output formatting and display logic
//! - `session`: The interactive session loop

pub mod commands;
pub mod display;
pub mod input;
pub mod session;

pub use commands::{Cli, Commands, RunArgs};
pub use display::Display;
pub use input::SessionCommand;
pub use session::run_session;
