//! Countdown engine module.
//!
//! - `countdown`: state machine (start, pause, resume, reset, tick)
//! - `schedule`: the single cancellable tick source
//! - `observer`: output callbacks and their channel/mock implementations
//! - `runner`: single-task driver applying commands and ticks
//! - `error`: recoverable engine errors

pub mod countdown;
pub mod error;
pub mod observer;
pub mod runner;
pub mod schedule;

pub use countdown::{CountdownEngine, COMPLETE_MESSAGE, RESET_MESSAGE};
pub use error::{Command, CountdownError, TimeField};
pub use observer::{ChannelObserver, CountdownEvent, CountdownObserver, MockObserver};
pub use runner::{CountdownHandle, CountdownRunner, Request};
pub use schedule::TickSchedule;
