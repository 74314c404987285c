//! Task data model

use std::fmt;

use super::error::TaskError;

/// Completion state of a task.
///
/// Both transitions are total: marking a done task done again (or an undone
/// task undone) is a no-op, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    /// Not completed yet
    #[default]
    NotDone,
    /// Completed
    Done,
}

impl TaskStatus {
    /// Single-character icon shown inside the rendered checkbox.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::NotDone => " ",
            Self::Done => "X",
        }
    }

    /// Compact marker used in the record encoding.
    pub fn record_marker(&self) -> &'static str {
        match self {
            Self::NotDone => "0",
            Self::Done => "1",
        }
    }

    /// Parse a record marker back into a status.
    pub fn from_record_marker(s: &str) -> Option<Self> {
        match s {
            "0" => Some(Self::NotDone),
            "1" => Some(Self::Done),
            _ => None,
        }
    }
}

/// Variant-specific payload. Every task carries exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// Plain to-do, nothing beyond the description
    Todo,
    /// Deadline-bound task; `by` is free text, echoed verbatim
    Deadline { by: String },
    /// Timed event with a free-text start/end window
    Event { from: String, to: String },
}

impl TaskKind {
    /// Short stable tag identifying the variant in renderings and records.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Todo => "T",
            Self::Deadline { .. } => "D",
            Self::Event { .. } => "E",
        }
    }
}

/// A task: description, completion status, and variant payload.
///
/// The description is fixed at construction; there is no rename operation.
/// The only mutable variant field is a deadline's `by` marker, via
/// [`Task::set_by`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    status: TaskStatus,
    kind: TaskKind,
}

impl Task {
    fn new(description: impl Into<String>, kind: TaskKind) -> Result<Self, TaskError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(TaskError::EmptyDescription);
        }

        match &kind {
            TaskKind::Todo => {}
            TaskKind::Deadline { by } => {
                if by.trim().is_empty() {
                    return Err(TaskError::EmptyField("by"));
                }
            }
            TaskKind::Event { from, to } => {
                if from.trim().is_empty() {
                    return Err(TaskError::EmptyField("from"));
                }
                if to.trim().is_empty() {
                    return Err(TaskError::EmptyField("to"));
                }
            }
        }

        Ok(Self {
            description,
            status: TaskStatus::default(),
            kind,
        })
    }

    /// Create a plain to-do task.
    pub fn todo(description: impl Into<String>) -> Result<Self, TaskError> {
        Self::new(description, TaskKind::Todo)
    }

    /// Create a deadline-bound task.
    pub fn deadline(
        description: impl Into<String>,
        by: impl Into<String>,
    ) -> Result<Self, TaskError> {
        Self::new(description, TaskKind::Deadline { by: by.into() })
    }

    /// Create a timed event.
    pub fn event(
        description: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Self, TaskError> {
        Self::new(
            description,
            TaskKind::Event {
                from: from.into(),
                to: to.into(),
            },
        )
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Mark the task as done. Idempotent.
    pub fn mark_done(&mut self) {
        self.status = TaskStatus::Done;
    }

    /// Mark the task as not done. Idempotent.
    pub fn mark_undone(&mut self) {
        self.status = TaskStatus::NotDone;
    }

    /// Status icon, `"X"` when done and `" "` otherwise.
    pub fn status_icon(&self) -> &'static str {
        self.status.icon()
    }

    /// Replace a deadline's `by` marker.
    ///
    /// The `by` marker is the one variant field that stays mutable after
    /// construction. Errors on non-deadline tasks and on blank replacements.
    pub fn set_by(&mut self, by: impl Into<String>) -> Result<(), TaskError> {
        let new_by = by.into();
        if new_by.trim().is_empty() {
            return Err(TaskError::EmptyField("by"));
        }
        match &mut self.kind {
            TaskKind::Deadline { by } => {
                *by = new_by;
                Ok(())
            }
            _ => Err(TaskError::NoDeadlineField),
        }
    }
}

impl fmt::Display for Task {
    /// Render as `[<tag>][<icon>] <description>` plus the variant annotation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.tag(),
            self.status.icon(),
            self.description
        )?;

        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", by),
            TaskKind::Event { from, to } => write!(f, " (from: {} to: {})", from, to),
        }
    }
}
