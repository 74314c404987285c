//! Interactive session loop
//!
//! The [`Session`] owns the task list and is its only writer. It reads one
//! line at a time from any [`BufRead`], executes exactly one command per
//! line, and writes one divider-wrapped response block per line to any
//! [`Write`]. Errors are reported on the output stream and never end the
//! loop; only `bye` (or running out of input) does.

pub mod command;

pub use command::{Command, CommandError};

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::task::{Task, TaskList};

/// Fixed divider printed before and after every response block.
pub const DIVIDER: &str = "____________________________________________________________";

const GREETING: &[&str] = &["Hello! I'm Lumen", "What can I help you with?"];
const FAREWELL: &str = "Till we meet again!";
const LIST_HEADER: &str = "Here are the tasks in your list:";
const MARKED_DONE: &str = "Nice! I've marked this task as done:";
const MARKED_UNDONE: &str = "OK, I've marked this task as not done yet:";
const ADDED: &str = "Got it. I've added this task:";

/// Whether the read loop keeps going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One interactive session over a single task list.
#[derive(Debug, Default)]
pub struct Session {
    tasks: TaskList,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The session's task list.
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Write the greeting block.
    pub fn greet<W: Write>(&self, output: &mut W) -> io::Result<()> {
        respond(output, GREETING)
    }

    /// Read and execute lines until `bye` or end of input.
    ///
    /// End of input without a `bye` is treated as an implicit goodbye: the
    /// farewell block is still written and the loop exits cleanly.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        for line in input.lines() {
            if self.handle(&line?, output)? == Flow::Quit {
                return Ok(());
            }
        }
        respond(output, &[FAREWELL])
    }

    /// Execute one input line and write its response block.
    pub fn handle<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<Flow> {
        debug!("input line: {:?}", line);

        let (lines, flow) = match Command::parse(line).and_then(|command| self.execute(command)) {
            Ok(outcome) => outcome,
            Err(err) => (vec![err.to_string()], Flow::Continue),
        };
        respond(output, &lines)?;
        Ok(flow)
    }

    fn execute(&mut self, command: Command) -> Result<(Vec<String>, Flow), CommandError> {
        debug!("executing {:?}", command);

        match command {
            Command::Bye => Ok((vec![FAREWELL.to_string()], Flow::Quit)),

            Command::List => {
                let mut lines = vec![LIST_HEADER.to_string()];
                lines.extend(
                    self.tasks
                        .iter()
                        .enumerate()
                        .map(|(i, task)| format!("{}{}", i + 1, task)),
                );
                Ok((lines, Flow::Continue))
            }

            Command::Mark(number) => {
                let task = self.task_at(number)?;
                task.mark_done();
                Ok((
                    vec![MARKED_DONE.to_string(), task.to_string()],
                    Flow::Continue,
                ))
            }

            Command::Unmark(number) => {
                let task = self.task_at(number)?;
                task.mark_undone();
                Ok((
                    vec![MARKED_UNDONE.to_string(), task.to_string()],
                    Flow::Continue,
                ))
            }

            Command::Todo(description) => self.append(Task::todo(description)?),

            Command::Deadline { description, by } => self.append(Task::deadline(description, by)?),

            Command::Event {
                description,
                from,
                to,
            } => self.append(Task::event(description, from, to)?),

            Command::Add(text) => {
                let description = self.tasks.add(Task::todo(text)?).description().to_string();
                Ok((
                    vec![
                        format!("added: {}", description),
                        format!("Now you have {} tasks in the list.", self.tasks.len()),
                    ],
                    Flow::Continue,
                ))
            }
        }
    }

    /// Append a task built by a keyword command and report the new count.
    fn append(&mut self, task: Task) -> Result<(Vec<String>, Flow), CommandError> {
        let rendered = self.tasks.add(task).to_string();
        Ok((
            vec![
                ADDED.to_string(),
                rendered,
                format!("Now you have {} tasks in the list.", self.tasks.len()),
            ],
            Flow::Continue,
        ))
    }

    /// Resolve a user-facing 1-based task number to the task it names.
    fn task_at(&mut self, number: usize) -> Result<&mut Task, CommandError> {
        let size = self.tasks.len();
        number
            .checked_sub(1)
            .and_then(|index| self.tasks.get_mut(index))
            .ok_or(CommandError::OutOfRange {
                index: number,
                size,
            })
    }
}

fn respond<W: Write, S: AsRef<str>>(output: &mut W, lines: &[S]) -> io::Result<()> {
    writeln!(output, "{}", DIVIDER)?;
    for line in lines {
        writeln!(output, "{}", line.as_ref())?;
    }
    writeln!(output, "{}", DIVIDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(session: &mut Session, line: &str) -> (String, Flow) {
        let mut output = Vec::new();
        let flow = session.handle(line, &mut output).unwrap();
        (String::from_utf8(output).unwrap(), flow)
    }

    #[test]
    fn test_todo_then_list() {
        let mut session = Session::new();
        handle(&mut session, "todo buy milk");

        let (output, flow) = handle(&mut session, "list");
        assert_eq!(flow, Flow::Continue);
        assert!(output.contains("Here are the tasks in your list:"));
        assert!(output.contains("1[T][ ] buy milk"));
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut session = Session::new();
        handle(&mut session, "todo first");
        handle(&mut session, "deadline second /by Friday");
        handle(&mut session, "event third /from 2pm /to 4pm");

        let (output, _) = handle(&mut session, "list");
        assert!(output.contains("1[T][ ] first"));
        assert!(output.contains("2[D][ ] second (by: Friday)"));
        assert!(output.contains("3[E][ ] third (from: 2pm to: 4pm)"));
    }

    #[test]
    fn test_mark_and_unmark() {
        let mut session = Session::new();
        handle(&mut session, "todo buy milk");

        let (output, _) = handle(&mut session, "mark 1");
        assert!(output.contains("Nice! I've marked this task as done:"));
        assert!(output.contains("[T][X] buy milk"));

        let (output, _) = handle(&mut session, "unmark 1");
        assert!(output.contains("OK, I've marked this task as not done yet:"));
        assert!(output.contains("[T][ ] buy milk"));
    }

    #[test]
    fn test_mark_out_of_range_leaves_list_alone() {
        let mut session = Session::new();

        let (output, flow) = handle(&mut session, "mark 1");
        assert_eq!(flow, Flow::Continue);
        assert!(output.contains("out of range"));
        assert!(session.tasks().is_empty());

        handle(&mut session, "todo buy milk");
        let (output, _) = handle(&mut session, "mark 2");
        assert!(output.contains("out of range"));
        assert!(!session.tasks().get(0).unwrap().is_done());
    }

    #[test]
    fn test_non_numeric_index_is_reported() {
        let mut session = Session::new();
        handle(&mut session, "todo buy milk");

        let (output, flow) = handle(&mut session, "mark one");
        assert_eq!(flow, Flow::Continue);
        assert!(output.contains("'one' is not a task number"));
        assert!(!session.tasks().get(0).unwrap().is_done());
    }

    #[test]
    fn test_bye_quits() {
        let mut session = Session::new();
        let (output, flow) = handle(&mut session, "bye");
        assert_eq!(flow, Flow::Quit);
        assert!(output.contains("Till we meet again!"));
        assert!(session.tasks().is_empty());
    }

    #[test]
    fn test_fallback_echo_is_distinct_from_todo() {
        let mut session = Session::new();

        let (output, _) = handle(&mut session, "hello there");
        assert!(output.contains("added: hello there"));
        assert!(!output.contains("Got it."));

        let (output, _) = handle(&mut session, "todo buy milk");
        assert!(output.contains("Got it. I've added this task:"));
        assert!(output.contains("Now you have 2 tasks in the list."));
    }

    #[test]
    fn test_every_response_is_divider_wrapped() {
        let mut session = Session::new();
        for line in ["todo buy milk", "list", "mark nope", "hello"] {
            let (output, _) = handle(&mut session, line);
            assert!(output.starts_with(&format!("{}\n", DIVIDER)));
            assert!(output.ends_with(&format!("{}\n", DIVIDER)));
        }
    }

    #[test]
    fn test_run_implicit_bye_at_end_of_input() {
        let mut session = Session::new();
        let mut output = Vec::new();
        let input = "todo buy milk\nlist\n";

        session
            .run(std::io::Cursor::new(input), &mut output)
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Till we meet again!"));
    }

    #[test]
    fn test_run_stops_at_bye() {
        let mut session = Session::new();
        let mut output = Vec::new();
        let input = "bye\ntodo never added\n";

        session
            .run(std::io::Cursor::new(input), &mut output)
            .unwrap();

        assert!(session.tasks().is_empty());
        let output = String::from_utf8(output).unwrap();
        assert!(!output.contains("never added"));
    }
}
