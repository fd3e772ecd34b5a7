pub mod entry;

use thiserror::Error;

/// One line of user input, as a journal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ToggleForm,
    Title(String),
    Content(String),
    More(String),
    Save,
    Cancel,
    Delete(String),
    Confirm,
    Dismiss,
    Show(String),
    Refresh,
    Retry,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}' (type `help`)")]
    Unknown(String),
    #[error("`{0}` needs an argument (type `help`)")]
    MissingArgument(&'static str),
}

pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    let required = |name: &'static str| -> Result<String, CommandError> {
        let arg = rest.trim();
        if arg.is_empty() {
            Err(CommandError::MissingArgument(name))
        } else {
            Ok(arg.to_string())
        }
    };

    let command = match word.to_lowercase().as_str() {
        "new" | "n" => Command::ToggleForm,
        // text fields keep inner and trailing whitespace as typed
        "title" => Command::Title(rest.to_string()),
        "content" => Command::Content(rest.to_string()),
        "more" => Command::More(rest.to_string()),
        "save" => Command::Save,
        "cancel" => Command::Cancel,
        "delete" | "rm" => Command::Delete(required("delete")?),
        "yes" | "y" => Command::Confirm,
        "no" => Command::Dismiss,
        "show" => Command::Show(required("show")?),
        "refresh" | "r" => Command::Refresh,
        "retry" => Command::Retry,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}
