//! Parsing of interactive session lines.

use crate::types::DurationInput;

/// A command typed into the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Start(DurationInput),
    Pause,
    Resume,
    Reset,
    Status,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    ///
    /// `start` takes up to three fields; missing ones default to `0`, so
    /// `start 0 5` is five minutes. Field text is passed through unchecked
    /// for the engine to validate.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match word.to_ascii_lowercase().as_str() {
            "start" => {
                if args.is_empty() || args.len() > 3 {
                    return Err("usage: start <hours> [minutes] [seconds]".to_string());
                }
                let field = |i: usize| args.get(i).copied().unwrap_or("0");
                SessionCommand::Start(DurationInput::new(field(0), field(1), field(2)))
            }
            "pause" | "p" => SessionCommand::Pause,
            "resume" | "r" => SessionCommand::Resume,
            "reset" | "x" => SessionCommand::Reset,
            "status" | "s" => SessionCommand::Status,
            "help" | "h" | "?" => SessionCommand::Help,
            "quit" | "q" | "exit" => SessionCommand::Quit,
            other => return Err(format!("unknown command: {} (type 'help')", other)),
        };

        if !args.is_empty() && !matches!(command, SessionCommand::Start(_)) {
            return Err(format!("{} takes no arguments", word));
        }
        Ok(Some(command))
    }
}

/// Help text for the interactive session.
pub const HELP: &str = "\
Commands:
  start <h> [m] [s]   start a countdown
  pause  (p)          pause the countdown
  resume (r)          resume a paused countdown
  reset  (x)          reset to idle
  status (s)          show the current state
  help   (h)          show this help
  quit   (q)          exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start_full() {
        assert_eq!(
            SessionCommand::parse("start 1 2 3"),
            Ok(Some(SessionCommand::Start(DurationInput::new("1", "2", "3"))))
        );
    }

    #[test]
    fn test_parse_start_defaults_missing_fields() {
        assert_eq!(
            SessionCommand::parse("start 0 5"),
            Ok(Some(SessionCommand::Start(DurationInput::new("0", "5", "0"))))
        );
    }

    #[test]
    fn test_parse_start_passes_bad_text_through() {
        assert_eq!(
            SessionCommand::parse("START a -1 x"),
            Ok(Some(SessionCommand::Start(DurationInput::new("a", "-1", "x"))))
        );
    }

    #[test]
    fn test_parse_start_arity() {
        assert!(SessionCommand::parse("start").is_err());
        assert!(SessionCommand::parse("start 1 2 3 4").is_err());
    }

    #[test]
    fn test_parse_aliases() {
        let cases = [
            ("pause", SessionCommand::Pause),
            ("p", SessionCommand::Pause),
            ("resume", SessionCommand::Resume),
            ("r", SessionCommand::Resume),
            ("reset", SessionCommand::Reset),
            ("x", SessionCommand::Reset),
            ("status", SessionCommand::Status),
            ("s", SessionCommand::Status),
            ("?", SessionCommand::Help),
            ("q", SessionCommand::Quit),
            ("  Quit  ", SessionCommand::Quit),
        ];
        for (line, expected) in cases {
            assert_eq!(SessionCommand::parse(line), Ok(Some(expected)), "{:?}", line);
        }
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(SessionCommand::parse(""), Ok(None));
        assert_eq!(SessionCommand::parse("   \t"), Ok(None));
    }

    #[test]
    fn test_parse_errors() {
        assert!(SessionCommand::parse("launch")
            .unwrap_err()
            .contains("unknown command"));
        assert!(SessionCommand::parse("pause now")
            .unwrap_err()
            .contains("takes no arguments"));
    }
}
