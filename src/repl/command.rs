//! Command grammar
//!
//! One input line maps to exactly one [`Command`]. The first
//! whitespace-delimited token selects the command; everything the tokenizer
//! does not recognize falls back to [`Command::Add`], which treats the whole
//! line as a new task description. A recognized keyword with a malformed
//! remainder is a [`CommandError`], never a silent fallback add.

use thiserror::Error;

use crate::task::TaskError;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `bye` — end the session
    Bye,
    /// `list` — render every task with its 1-based number
    List,
    /// `mark <n>` — set task `n` to done (1-based, as typed)
    Mark(usize),
    /// `unmark <n>` — set task `n` to not done
    Unmark(usize),
    /// `todo <description>` — append a plain task
    Todo(String),
    /// `deadline <description> /by <by>` — append a deadline task
    Deadline { description: String, by: String },
    /// `event <description> /from <from> /to <to>` — append an event
    Event {
        description: String,
        from: String,
        to: String,
    },
    /// Catch-all: the whole line becomes a plain task's description
    Add(String),
}

/// User-visible errors raised while parsing or executing a command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("cannot add an empty task")]
    EmptyInput,

    #[error("'{0}' needs a task number, e.g. '{0} 2'")]
    MissingIndex(&'static str),

    #[error("'{0}' is not a task number")]
    InvalidIndex(String),

    #[error("task {index} is out of range: the list has {size} tasks")]
    OutOfRange { index: usize, size: usize },

    #[error("the {0} command needs a description")]
    EmptyDescription(&'static str),

    #[error("the {command} command needs a '{marker} <...>' part")]
    MissingPart {
        command: &'static str,
        marker: &'static str,
    },

    #[error(transparent)]
    Task(#[from] TaskError),
}

impl Command {
    /// Parse one input line.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let input = line.trim();
        if input.is_empty() {
            return Err(CommandError::EmptyInput);
        }

        let (keyword, rest) = match input.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (input, ""),
        };

        match keyword {
            // bye and list match the whole line; "list groceries" is a
            // fallback add, same as any other unrecognized line
            "bye" if rest.is_empty() => Ok(Self::Bye),
            "list" if rest.is_empty() => Ok(Self::List),
            "mark" => parse_index("mark", rest).map(Self::Mark),
            "unmark" => parse_index("unmark", rest).map(Self::Unmark),
            "todo" => {
                if rest.is_empty() {
                    Err(CommandError::EmptyDescription("todo"))
                } else {
                    Ok(Self::Todo(rest.to_string()))
                }
            }
            "deadline" => parse_deadline(rest),
            "event" => parse_event(rest),
            _ => Ok(Self::Add(input.to_string())),
        }
    }
}

fn parse_index(command: &'static str, arg: &str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingIndex(command));
    }
    arg.parse()
        .map_err(|_| CommandError::InvalidIndex(arg.to_string()))
}

/// Split a token list at the first occurrence of `marker`.
fn split_at_token<'a>(
    tokens: &[&'a str],
    marker: &str,
) -> Option<(Vec<&'a str>, Vec<&'a str>)> {
    let position = tokens.iter().position(|token| *token == marker)?;
    Some((
        tokens[..position].to_vec(),
        tokens[position + 1..].to_vec(),
    ))
}

fn parse_deadline(rest: &str) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    let (description, by) =
        split_at_token(&tokens, "/by").ok_or(CommandError::MissingPart {
            command: "deadline",
            marker: "/by",
        })?;

    if description.is_empty() {
        return Err(CommandError::EmptyDescription("deadline"));
    }
    if by.is_empty() {
        return Err(CommandError::MissingPart {
            command: "deadline",
            marker: "/by",
        });
    }

    Ok(Command::Deadline {
        description: description.join(" "),
        by: by.join(" "),
    })
}

fn parse_event(rest: &str) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    let (description, window) =
        split_at_token(&tokens, "/from").ok_or(CommandError::MissingPart {
            command: "event",
            marker: "/from",
        })?;
    // /to must follow /from
    let (from, to) = split_at_token(&window, "/to").ok_or(CommandError::MissingPart {
        command: "event",
        marker: "/to",
    })?;

    if description.is_empty() {
        return Err(CommandError::EmptyDescription("event"));
    }
    if from.is_empty() {
        return Err(CommandError::MissingPart {
            command: "event",
            marker: "/from",
        });
    }
    if to.is_empty() {
        return Err(CommandError::MissingPart {
            command: "event",
            marker: "/to",
        });
    }

    Ok(Command::Event {
        description: description.join(" "),
        from: from.join(" "),
        to: to.join(" "),
    })
}
