//! Lumen library - task model and command interpreter for the interactive
//! command-line task manager

pub mod cli;
pub mod config;
pub mod repl;
pub mod task;
