//! Interactive terminal session.
//!
//! Stands in for the presentation layer: reads commands line by line, feeds
//! them to the countdown runner and prints what the engine reports. When the
//! input ends, the session keeps going until the countdown stops running.

use std::io::Write;

use anyhow::{anyhow, Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::engine::{
    ChannelObserver, CountdownEngine, CountdownEvent, CountdownHandle, CountdownRunner,
};
use crate::types::TimerState;

use super::commands::RunArgs;
use super::display::Display;
use super::input::{SessionCommand, HELP};

/// Runs a session reading commands from `input` and writing to `output`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, reading or writing
/// fails, or the runner task dies.
pub async fn run_session<R, W>(args: &RunArgs, input: R, output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let config = args.config();
    config.validate().map_err(|e| anyhow!(e))?;

    let (observer, mut events) = ChannelObserver::channel();
    let engine = CountdownEngine::new(&config, observer);
    let (runner, handle) = CountdownRunner::new(engine);
    let runner_task = tokio::spawn(runner.run());
    info!(tick_interval_ms = config.tick_interval_ms, "Session started");

    let mut out = EventWriter::new(output, args.json);

    if let Some(duration) = args.initial_duration() {
        handle.start(duration)?;
    }

    let mut lines = input.lines();
    let mut input_open = true;

    loop {
        tokio::select! {
            Some(event) = events.recv() => {
                out.event(&event)?;
            }
            line = lines.next_line(), if input_open => {
                match line.context("Failed to read input")? {
                    Some(line) => match SessionCommand::parse(&line) {
                        Ok(Some(SessionCommand::Quit)) => break,
                        Ok(Some(command)) => {
                            apply(command, &handle, &mut events, &mut out).await?;
                        }
                        Ok(None) => {}
                        Err(message) => out.line(&format!("Error: {}", message))?,
                    },
                    None => {
                        debug!("Input closed");
                        input_open = false;
                    }
                }
            }
            else => break,
        }

        if !input_open {
            let snapshot = handle.snapshot().await?;
            out.drain(&mut events)?;
            if !snapshot.state.is_running() {
                break;
            }
        }
    }

    handle.shutdown()?;
    runner_task
        .await
        .context("Countdown runner panicked")??;
    // Outcomes of commands sent right before quitting
    out.drain(&mut events)?;
    info!("Session finished");
    Ok(())
}

async fn apply<W: Write>(
    command: SessionCommand,
    handle: &CountdownHandle,
    events: &mut mpsc::UnboundedReceiver<CountdownEvent>,
    out: &mut EventWriter<W>,
) -> Result<()> {
    match command {
        SessionCommand::Start(input) => handle.start(input)?,
        SessionCommand::Pause => handle.pause()?,
        SessionCommand::Resume => handle.resume()?,
        SessionCommand::Reset => handle.reset()?,
        SessionCommand::Status => {
            let snapshot = handle.snapshot().await?;
            // Events produced before the snapshot go first
            out.drain(events)?;
            let status = Display::render_status(&snapshot, out.json);
            out.line(&status)?;
        }
        SessionCommand::Help => out.line(HELP)?,
        SessionCommand::Quit => {}
    }
    Ok(())
}

/// Writes rendered events, tracking the last reported engine state.
struct EventWriter<W> {
    output: W,
    json: bool,
    state: TimerState,
}

impl<W: Write> EventWriter<W> {
    fn new(output: W, json: bool) -> Self {
        Self {
            output,
            json,
            state: TimerState::Idle,
        }
    }

    fn event(&mut self, event: &CountdownEvent) -> Result<()> {
        let rendered = Display::render_event(event, self.state, self.json);
        if let CountdownEvent::StateChanged { state, .. } = event {
            self.state = *state;
        }
        match rendered {
            Some(line) => self.line(&line),
            None => Ok(()),
        }
    }

    fn drain(&mut self, events: &mut mpsc::UnboundedReceiver<CountdownEvent>) -> Result<()> {
        while let Ok(event) = events.try_recv() {
            self.event(&event)?;
        }
        Ok(())
    }

    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    async fn run(args: RunArgs, input: &'static str) -> Vec<String> {
        let mut output = Vec::new();
        run_session(&args, input.as_bytes(), &mut output)
            .await
            .unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn args() -> RunArgs {
        RunArgs {
            tick_ms: 1000,
            ..RunArgs::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_runs_to_completion_after_eof() {
        let lines = run(args(), "start 0 0 2\n").await;
        assert_eq!(
            lines,
            vec![
                "Time left: 00:00:02",
                "Time left: 00:00:01",
                "Time left: 00:00:00",
                "Countdown complete!",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_duration_from_flags() {
        let run_args = RunArgs {
            seconds: Some("1".to_string()),
            ..args()
        };
        let lines = run(run_args, "").await;
        assert_eq!(
            lines,
            vec!["Time left: 00:00:01", "Time left: 00:00:00", "Countdown complete!"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejections_and_status() {
        let lines = run(args(), "start 0 0 0\npause\nstatus\nquit\n").await;
        assert_eq!(
            lines,
            vec![
                "Please enter a positive duration!",
                "Countdown is not active or already paused!",
                "State: Idle | Time left: 00:00:00 | Controls: start",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_parse_error_message() {
        let lines = run(args(), "start 0 abc 0\nstatus\n").await;
        assert!(lines[0].starts_with("Please enter valid numbers!"));
        assert!(lines[1].starts_with("State: Idle"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_then_eof_exits() {
        let lines = run(args(), "start 0 1 0\npause\nstatus\n").await;
        assert_eq!(lines[0], "Time left: 00:01:00");
        assert_eq!(
            lines.last().unwrap(),
            "State: Paused | Time left: 00:01:00 | Controls: resume, reset"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_message() {
        let lines = run(args(), "start 0 0 9\nreset\nstatus\n").await;
        assert!(lines.contains(&"Countdown reset!".to_string()));
        assert_eq!(
            lines.last().unwrap(),
            "State: Idle | Time left: 00:00:00 | Controls: start"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_resume_does_not_repeat_time_left() {
        let lines = run(args(), "start 0 0 3\npause\nresume\n").await;
        assert_eq!(
            lines,
            vec![
                "Time left: 00:00:03",
                "Time left: 00:00:02",
                "Time left: 00:00:01",
                "Time left: 00:00:00",
                "Countdown complete!",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_reports_pending_outcomes() {
        let lines = run(args(), "resume\nquit\n").await;
        assert_eq!(lines, vec!["Countdown is not paused!"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bad_line_and_help() {
        let lines = run(args(), "bogus\nhelp\nquit\n").await;
        assert_eq!(lines[0], "Error: unknown command: bogus (type 'help')");
        assert_eq!(lines[1], "Commands:");
    }

    #[tokio::test(start_paused = true)]
    async fn test_json_output() {
        let run_args = RunArgs {
            json: true,
            ..args()
        };
        let lines = run(run_args, "start 0 0 1\n").await;
        let events: Vec<serde_json::Value> = lines
            .iter()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(events[0]["event"], "state_changed");
        assert_eq!(events[0]["state"], "running");
        assert_eq!(events[1]["event"], "tick");
        assert_eq!(events[1]["display"], "00:00:00");
        assert_eq!(events.last().unwrap()["message"], "Countdown complete!");
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let run_args = RunArgs {
            tick_ms: 0,
            ..RunArgs::default()
        };
        let result = run_session(&run_args, "".as_bytes(), Vec::new()).await;
        assert!(result.is_err());
    }
}
