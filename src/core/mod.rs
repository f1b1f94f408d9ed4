//! Core shell logic.
//!
//! This module provides:
//! - [`Command`] parsing and [`execute_command`] dispatch
//! - [`VirtualFs`] construction and path resolution
//! - [`Shell`] as the single `execute` entry point
//! - [`CommandHistory`] recall and the [`TerminalSession`] facade

mod commands;
mod error;
mod filesystem;
mod history;
mod session;
mod shell;

pub use commands::{Command, CommandResult, PathArg, execute_command};
pub use error::CommandError;
pub use filesystem::{ManifestError, Resolved, VirtualFs, sorted_children};
pub use history::{CommandHistory, HistoryDirection};
pub use session::TerminalSession;
pub use shell::Shell;
