//! Parsing of interactive commands and `FROM:TO` pair arguments.
//!
//! Interactive commands are whitespace-separated, one per line:
//!
//! | Command              | Effect                                        |
//! |----------------------|-----------------------------------------------|
//! | `from <i> <key>`     | set the `from` key of selection `i`           |
//! | `to <i> <key>`       | set the `to` key of selection `i`             |
//! | `add`                | append an empty selection                     |
//! | `show`               | print every selection and the result          |
//! | `options <i>`        | print the from/to options for selection `i`   |
//! | `help`               | print the command list                        |
//! | `quit` / `exit`      | end the session                               |
//!
//! Selection indices are zero-based.

use keyspan_core::Selection;
use thiserror::Error;

use super::session::SessionEvent;

/// One parsed interactive command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// An edit to apply to the session.
    Edit(SessionEvent),
    Show,
    Options(usize),
    Help,
    Quit,
}

/// Errors produced while parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command {0:?} (try `help`)")]
    Unknown(String),

    #[error("`{command}` needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("`{command}` takes no argument {extra:?}")]
    UnexpectedArgument { command: &'static str, extra: String },

    #[error("invalid selection index {0:?}")]
    InvalidIndex(String),
}

/// Errors produced while parsing a `FROM:TO` pair argument.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PairParseError {
    #[error("pair {0:?} is missing ':' (expected FROM:TO)")]
    MissingColon(String),
}

/// Usage text printed by the `help` command.
pub const HELP: &str = "\
commands:
  from <i> <key>   set the from key of selection i
  to <i> <key>     set the to key of selection i
  add              append an empty selection
  show             print every selection and the result
  options <i>      print the from/to options for selection i
  help             print this list
  quit             end the session";

/// Parses one interactive command line.
///
/// # Errors
///
/// Returns a [`CommandError`] describing the first problem found.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let name = words.next().ok_or(CommandError::Empty)?;

    let (label, command) = match name {
        "from" | "to" => {
            let command = if name == "from" { "from" } else { "to" };
            let index = parse_index(command, words.next())?;
            let key = words
                .next()
                .ok_or(CommandError::MissingArgument {
                    command,
                    argument: "key",
                })?
                .to_string();
            let event = if command == "from" {
                SessionEvent::SetFrom { index, key }
            } else {
                SessionEvent::SetTo { index, key }
            };
            (command, Command::Edit(event))
        }
        "add" => ("add", Command::Edit(SessionEvent::AddSelection)),
        "show" => ("show", Command::Show),
        "options" => ("options", Command::Options(parse_index("options", words.next())?)),
        "help" | "?" => ("help", Command::Help),
        "quit" | "exit" => ("quit", Command::Quit),
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    match words.next() {
        Some(extra) => Err(CommandError::UnexpectedArgument {
            command: label,
            extra: extra.to_string(),
        }),
        None => Ok(command),
    }
}

fn parse_index(command: &'static str, word: Option<&str>) -> Result<usize, CommandError> {
    let word = word.ok_or(CommandError::MissingArgument {
        command,
        argument: "selection index",
    })?;
    word.parse()
        .map_err(|_| CommandError::InvalidIndex(word.to_string()))
}

/// Parses a `FROM:TO` pair into a [`Selection`].
///
/// An empty side leaves that field unset, so `a:`, `:b` and `:` are all valid
/// (incomplete) selections.  The string is split at the first `:`.
///
/// # Errors
///
/// Returns [`PairParseError::MissingColon`] if `arg` contains no `:`.
pub fn parse_pair(arg: &str) -> Result<Selection, PairParseError> {
    let (from, to) = arg
        .split_once(':')
        .ok_or_else(|| PairParseError::MissingColon(arg.to_string()))?;
    let side = |s: &str| (!s.is_empty()).then(|| s.to_string());
    Ok(Selection {
        from: side(from),
        to: side(to),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
