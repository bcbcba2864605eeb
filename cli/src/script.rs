//! Line-oriented command scripts.
//!
//! One command per line, arguments separated by whitespace. The last
//! argument of commands that take free text (titles, task names) runs to the
//! end of the line. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! add-board Trabalho
//! add-task 2 write report
//! complete-task 2 1
//! rename-board 1 Casa
//! ```

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use boards::Command;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("missing argument `{0}`")]
    MissingArgument(&'static str),
    #[error("invalid id `{0}`")]
    InvalidId(String),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

/// A parsed command with its 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

/// Parse a whole script, stopping at the first bad line.
///
/// # Errors
///
/// Returns the 1-based line number with the parse error.
pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>, (usize, ParseError)> {
    let mut out = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        if let Some(command) = parse_line(raw).map_err(|err| (line, err))? {
            out.push(ScriptLine { line, command });
        }
    }
    Ok(out)
}

/// Parse one line. Blank lines and comments yield `None`.
///
/// # Errors
///
/// Returns [`ParseError`] for unknown verbs, missing arguments, ids that are
/// not unsigned integers, or text left over after the final id.
pub fn parse_line(raw: &str) -> Result<Option<Command>, ParseError> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (verb, rest) = split_word(line);
    let command = match verb {
        "add-board" => Command::AddBoard { title: text(rest, "title")? },
        "delete-board" => Command::DeleteBoard { board_id: last_id(rest, "board_id")? },
        "duplicate-board" => Command::DuplicateBoard { board_id: last_id(rest, "board_id")? },
        "rename-board" => {
            let (board_id, rest) = id(rest, "board_id")?;
            Command::RenameBoard { board_id, title: text(rest, "title")? }
        }
        "add-task" => {
            let (board_id, rest) = id(rest, "board_id")?;
            Command::AddTask { board_id, name: text(rest, "name")? }
        }
        "delete-task" => {
            let (board_id, rest) = id(rest, "board_id")?;
            Command::DeleteTask { board_id, task_id: last_id(rest, "task_id")? }
        }
        "complete-task" => {
            let (board_id, rest) = id(rest, "board_id")?;
            Command::CompleteTask { board_id, task_id: last_id(rest, "task_id")? }
        }
        other => return Err(ParseError::UnknownCommand(other.to_owned())),
    };
    Ok(Some(command))
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    }
}

fn id<'a>(input: &'a str, name: &'static str) -> Result<(u64, &'a str), ParseError> {
    let (word, rest) = split_word(input);
    if word.is_empty() {
        return Err(ParseError::MissingArgument(name));
    }
    let value: u64 = word.parse().map_err(|_| ParseError::InvalidId(word.to_owned()))?;
    Ok((value, rest))
}

/// An id that must end the line.
fn last_id(input: &str, name: &'static str) -> Result<u64, ParseError> {
    let (value, rest) = id(input, name)?;
    let rest = rest.trim_end();
    if !rest.is_empty() {
        return Err(ParseError::UnexpectedArgument(rest.to_owned()));
    }
    Ok(value)
}

fn text(input: &str, name: &'static str) -> Result<String, ParseError> {
    let value = input.trim();
    if value.is_empty() {
        return Err(ParseError::MissingArgument(name));
    }
    Ok(value.to_owned())
}
