//! Line-oriented interactive console.
//!
//! Reads one command per line, applies it to a [`ChoiceSession`], and writes
//! the outcome.  Every successful edit is followed by the freshly recomputed
//! result, so the user sees the effect of each pick immediately.
//!
//! The loop is generic over its reader and writer so tests can drive it with
//! in-memory buffers instead of a terminal.

use std::io::{BufRead, Write};

use serde_json::json;
use thiserror::Error;
use tracing::{debug, info};

use crate::application::command::{parse_command, Command, CommandError, HELP};
use crate::application::render::{render_keys, render_report, OutputFormat, Report};
use crate::application::session::ChoiceSession;

/// Errors that end the interactive loop.
///
/// Bad commands and bad indices are reported to the user and do not end it.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

/// Display settings for the console.
#[derive(Debug, Clone)]
pub struct ConsoleOptions {
    pub format: OutputFormat,
    pub verbose: bool,
    /// Written before each line is read; empty for no prompt.
    pub prompt: String,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            verbose: false,
            prompt: String::new(),
        }
    }
}

/// Runs the interactive loop until `quit` or end of input.
///
/// # Errors
///
/// Returns [`ConsoleError`] if reading input or writing output fails.
pub fn run_console<R: BufRead, W: Write>(
    session: &mut ChoiceSession,
    input: R,
    output: &mut W,
    options: &ConsoleOptions,
) -> Result<(), ConsoleError> {
    info!("interactive session started");
    let mut lines = input.lines();

    loop {
        if !options.prompt.is_empty() {
            write!(output, "{}", options.prompt)?;
            output.flush()?;
        }

        let Some(line) = lines.next().transpose()? else {
            debug!("end of input");
            break;
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                writeln!(output, "error: {e}")?;
                continue;
            }
        };

        match command {
            Command::Edit(event) => match session.apply(event).map(|_| ()) {
                Ok(()) => write_update(session, output, options)?,
                Err(e) => writeln!(output, "error: {e}")?,
            },
            Command::Show => {
                let report = Report::build(session.aggregator(), session.selections());
                writeln!(output, "{}", render_report(&report, options.format, true)?)?;
            }
            Command::Options(index) => match session.options(index) {
                Ok((from, to)) => match options.format {
                    OutputFormat::Text => {
                        writeln!(output, "from: {}", render_keys(&from, OutputFormat::Text)?)?;
                        writeln!(output, "to: {}", render_keys(&to, OutputFormat::Text)?)?;
                    }
                    OutputFormat::Json => {
                        writeln!(output, "{}", json!({ "from": from, "to": to }))?;
                    }
                },
                Err(e) => writeln!(output, "error: {e}")?,
            },
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => {
                debug!("quit requested");
                break;
            }
        }
    }

    info!(result = session.result(), "interactive session ended");
    Ok(())
}

/// Writes the result after an edit.
fn write_update<W: Write>(
    session: &ChoiceSession,
    output: &mut W,
    options: &ConsoleOptions,
) -> Result<(), ConsoleError> {
    match (options.format, options.verbose) {
        (OutputFormat::Text, false) => writeln!(output, "result: {}", session.result())?,
        (format, verbose) => {
            let report = Report::build(session.aggregator(), session.selections());
            writeln!(output, "{}", render_report(&report, format, verbose)?)?;
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str, options: &ConsoleOptions) -> (ChoiceSession, String) {
        let mut session = ChoiceSession::default();
        let mut out = Vec::new();
        run_console(&mut session, script.as_bytes(), &mut out, options).expect("console run");
        (session, String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn test_each_edit_prints_the_new_result() {
        // Arrange
        let script = "from 0 1\nto 0 5\nadd\nfrom 1 q\nto 1 o\n";

        // Act
        let (session, out) = run(script, &ConsoleOptions::default());

        // Assert
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "result: ",
                "result: 234",
                "result: 234",
                "result: 234",
                "result: 234wertyui"
            ]
        );
        assert_eq!(session.result(), "234wertyui");
    }

    #[test]
    fn test_quit_stops_reading() {
        let (session, out) = run("from 0 a\nquit\nto 0 g\n", &ConsoleOptions::default());
        assert_eq!(out, "result: \n");
        assert!(session.selections().get(0).and_then(|s| s.to.as_ref()).is_none());
    }

    #[test]
    fn test_errors_are_reported_and_loop_continues() {
        let (_, out) = run("frob\nto 3 g\n\nfrom 0 z\n", &ConsoleOptions::default());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("error: unknown command"));
        assert_eq!(lines[1], "error: no selection #3: the list has 1 selection(s)");
        assert_eq!(lines[2], "result: ");
    }

    #[test]
    fn test_options_command_prints_both_lists() {
        let (_, out) = run("from 0 b\noptions 0\n", &ConsoleOptions::default());
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].starts_with("from: ` 1 2"));
        assert_eq!(lines[2], "to: n m , . /");
    }

    #[test]
    fn test_options_command_json() {
        let options = ConsoleOptions {
            format: OutputFormat::Json,
            ..ConsoleOptions::default()
        };
        let (_, out) = run("options 0\n", &options);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["from"].as_array().map(Vec::len), Some(47));
        assert_eq!(value["to"], value["from"]);
    }

    #[test]
    fn test_show_prints_every_selection() {
        let (_, out) = run("from 0 1\nto 0 4\nadd\nshow\n", &ConsoleOptions::default());
        let tail: Vec<&str> = out.lines().skip(3).collect();
        assert_eq!(tail, vec!["#0 1:4 -> 2 3", "#1 -:- incomplete", "result: 23"]);
    }

    #[test]
    fn test_prompt_is_written_before_each_read() {
        let options = ConsoleOptions {
            prompt: "> ".to_string(),
            ..ConsoleOptions::default()
        };
        let (_, out) = run("add\n", &options);
        assert_eq!(out, "> result: \n> ");
    }

    #[test]
    fn test_json_edit_prints_report() {
        let options = ConsoleOptions {
            format: OutputFormat::Json,
            ..ConsoleOptions::default()
        };
        let (_, out) = run("from 0 z\nto 0 b\n", &options);
        let last = out.lines().last().expect("output line");
        let value: serde_json::Value = serde_json::from_str(last).unwrap();
        assert_eq!(value["result"], "xcv");
    }
}
