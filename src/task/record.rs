//! Task record encoding
//!
//! The stable serialized form of a task, distinct from its human-readable
//! rendering: `<tag>|<done>|<description>[|<variant fields>…]`. Fields are
//! joined with `|`; inside a field, `\` is written as `\\` and `|` as `\|`,
//! so the delimiter stays unambiguous against arbitrary description text.
//! Encoding is pure; whatever persistence layer consumes these lines owns
//! the file I/O.

use super::error::RecordError;
use super::model::{Task, TaskKind, TaskStatus};

fn escape(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for c in field.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '|' => out.push_str("\\|"),
            _ => out.push(c),
        }
    }
    out
}

/// Split a record line on unescaped `|`, unescaping each field.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => current.push(chars.next().unwrap_or('\\')),
            '|' => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

impl Task {
    /// Encode this task as one record line.
    pub fn to_record(&self) -> String {
        let mut fields = vec![
            self.kind().tag().to_string(),
            self.status().record_marker().to_string(),
            escape(self.description()),
        ];

        match self.kind() {
            TaskKind::Todo => {}
            TaskKind::Deadline { by } => fields.push(escape(by)),
            TaskKind::Event { from, to } => {
                fields.push(escape(from));
                fields.push(escape(to));
            }
        }

        fields.join("|")
    }

    /// Decode a record line produced by [`Task::to_record`].
    pub fn from_record(line: &str) -> Result<Self, RecordError> {
        if line.is_empty() {
            return Err(RecordError::Empty);
        }

        let fields = split_fields(line);
        let tag = fields[0].as_str();

        let expected = match tag {
            "T" => 3,
            "D" => 4,
            "E" => 5,
            other => return Err(RecordError::UnknownTag(other.to_string())),
        };
        if fields.len() != expected {
            return Err(RecordError::FieldCount {
                expected,
                found: fields.len(),
            });
        }

        let status = TaskStatus::from_record_marker(&fields[1])
            .ok_or_else(|| RecordError::InvalidDoneMarker(fields[1].clone()))?;

        let mut task = match tag {
            "T" => Task::todo(fields[2].as_str())?,
            "D" => Task::deadline(fields[2].as_str(), fields[3].as_str())?,
            _ => Task::event(fields[2].as_str(), fields[3].as_str(), fields[4].as_str())?,
        };

        if status == TaskStatus::Done {
            task.mark_done();
        }
        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::error::TaskError;

    #[test]
    fn test_encode_per_variant() {
        let todo = Task::todo("buy milk").unwrap();
        assert_eq!(todo.to_record(), "T|0|buy milk");

        let mut deadline = Task::deadline("return book", "June 6th").unwrap();
        deadline.mark_done();
        assert_eq!(deadline.to_record(), "D|1|return book|June 6th");

        let event = Task::event("project meeting", "Mon 2pm", "4pm").unwrap();
        assert_eq!(event.to_record(), "E|0|project meeting|Mon 2pm|4pm");
    }

    #[test]
    fn test_encode_escapes_delimiter() {
        let task = Task::todo(r"review a|b \ c").unwrap();
        assert_eq!(task.to_record(), r"T|0|review a\|b \\ c");
    }

    #[test]
    fn test_roundtrip() -> Result<(), RecordError> {
        let mut deadline = Task::deadline("return book", "June 6th").unwrap();
        deadline.mark_done();
        let event = Task::event("standup", "9am", "9:15am").unwrap();
        let tricky = Task::todo(r"pipes | and \ slashes \| together").unwrap();

        for task in [Task::todo("buy milk").unwrap(), deadline, event, tricky] {
            let decoded = Task::from_record(&task.to_record())?;
            assert_eq!(decoded, task);
        }
        Ok(())
    }

    #[test]
    fn test_decode_rejects_malformed_records() {
        assert_eq!(Task::from_record(""), Err(RecordError::Empty));
        assert_eq!(
            Task::from_record("X|0|what"),
            Err(RecordError::UnknownTag("X".to_string()))
        );
        assert_eq!(
            Task::from_record("T|2|buy milk"),
            Err(RecordError::InvalidDoneMarker("2".to_string()))
        );
        assert_eq!(
            Task::from_record("D|0|return book"),
            Err(RecordError::FieldCount {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            Task::from_record("T|0|"),
            Err(RecordError::Task(TaskError::EmptyDescription))
        );
    }
}
