//! Task management module
//!
//! This module provides the session's task model:
//! - Polymorphic task representation (todo / deadline / event)
//! - Completion state machine (not done <-> done)
//! - Stable record encoding for an external persistence layer

pub mod error;
pub mod list;
pub mod model;
pub mod record;

pub use error::{RecordError, TaskError};
pub use list::TaskList;
pub use model::{Task, TaskKind, TaskStatus};
