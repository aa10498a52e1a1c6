//! Cooperative driver for a [`CountdownEngine`].
//!
//! The runner is the only task touching the engine. It waits on either the
//! next user command or the next due tick, so commands and ticks are applied
//! one at a time and no lock guards the engine state.

use anyhow::{anyhow, Context, Result};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::types::{DurationInput, Snapshot};

use super::countdown::CountdownEngine;
use super::observer::CountdownObserver;

// ============================================================================
// Request
// ============================================================================

/// Messages sent from a [`CountdownHandle`] to the runner.
#[derive(Debug)]
pub enum Request {
    Start(DurationInput),
    Pause,
    Resume,
    Reset,
    Snapshot(oneshot::Sender<Snapshot>),
    Shutdown,
}

// ============================================================================
// CountdownHandle
// ============================================================================

/// Command interface for the presentation layer.
///
/// Commands are fire-and-forget; outcomes arrive through the engine's
/// observer. Cloning a handle is cheap.
#[derive(Debug, Clone)]
pub struct CountdownHandle {
    request_tx: mpsc::UnboundedSender<Request>,
}

impl CountdownHandle {
    /// Requests a countdown start from the raw field texts.
    ///
    /// # Errors
    ///
    /// Returns an error if the runner has stopped.
    pub fn start(&self, input: DurationInput) -> Result<()> {
        self.send(Request::Start(input))
    }

    /// Requests a pause.
    ///
    /// # Errors
    ///
    /// Returns an error if the runner has stopped.
    pub fn pause(&self) -> Result<()> {
        self.send(Request::Pause)
    }

    /// Requests a resume.
    ///
    /// # Errors
    ///
    /// Returns an error if the runner has stopped.
    pub fn resume(&self) -> Result<()> {
        self.send(Request::Resume)
    }

    /// Requests a reset.
    ///
    /// # Errors
    ///
    /// Returns an error if the runner has stopped.
    pub fn reset(&self) -> Result<()> {
        self.send(Request::Reset)
    }

    /// Asks the runner to exit after the requests already queued.
    ///
    /// # Errors
    ///
    /// Returns an error if the runner has stopped.
    pub fn shutdown(&self) -> Result<()> {
        self.send(Request::Shutdown)
    }

    /// Returns the engine state after all previously sent commands.
    ///
    /// # Errors
    ///
    /// Returns an error if the runner has stopped.
    pub async fn snapshot(&self) -> Result<Snapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Request::Snapshot(reply_tx))?;
        reply_rx
            .await
            .context("Countdown runner dropped the snapshot request")
    }

    fn send(&self, request: Request) -> Result<()> {
        self.request_tx
            .send(request)
            .map_err(|_| anyhow!("Countdown runner is not running"))
    }
}

// ============================================================================
// CountdownRunner
// ============================================================================

/// Owns the engine and applies requests and ticks to it.
pub struct CountdownRunner<O> {
    engine: CountdownEngine<O>,
    request_rx: mpsc::UnboundedReceiver<Request>,
}

impl<O: CountdownObserver> CountdownRunner<O> {
    /// Wraps `engine`, returning the runner and its first handle.
    pub fn new(engine: CountdownEngine<O>) -> (Self, CountdownHandle) {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        (
            Self { engine, request_rx },
            CountdownHandle { request_tx },
        )
    }

    /// Runs until every handle is dropped or a shutdown is requested.
    ///
    /// Returns the engine so its final state can be inspected.
    ///
    /// # Errors
    ///
    /// Currently infallible; the `Result` matches the other task entry points.
    pub async fn run(mut self) -> Result<CountdownEngine<O>> {
        info!("Countdown runner started");

        loop {
            let ticking = self.engine.is_ticking();
            tokio::select! {
                // Queued commands win over a due tick
                biased;

                request = self.request_rx.recv() => match request {
                    Some(Request::Shutdown) | None => break,
                    Some(request) => self.dispatch(request),
                },
                () = self.engine.next_tick(), if ticking => {
                    self.engine.tick();
                }
            }
        }

        info!("Countdown runner stopped");
        Ok(self.engine)
    }

    fn dispatch(&mut self, request: Request) {
        debug!(?request, "Dispatching request");
        // Rejections are already reported through the observer
        let _ = match request {
            Request::Start(input) => self.engine.start(&input),
            Request::Pause => self.engine.pause(),
            Request::Resume => self.engine.resume(),
            Request::Reset => {
                self.engine.reset();
                Ok(())
            }
            Request::Snapshot(reply_tx) => {
                let _ = reply_tx.send(self.engine.snapshot());
                Ok(())
            }
            Request::Shutdown => Ok(()),
        };
    }
}

// ============================================================================
// Tests
// ============================================================================
