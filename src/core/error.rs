//! User-facing command failures.
//!
//! Every failure the shell can report is a [`CommandError`] variant whose
//! `Display` output is exactly the line the terminal prints. The public
//! [`Shell::execute`](crate::core::Shell::execute) contract never surfaces
//! these as `Err`: failures are flattened into ordinary output lines, so
//! the shell emulation always "succeeds" from the caller's perspective.

use thiserror::Error;

/// A command failure, rendered verbatim as an output line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{shell}: {0}: command not found. Type 'help' for available commands.", shell = crate::config::SHELL_NAME)]
    CommandNotFound(String),

    #[error("ls: cannot access '{0}': No such file or directory")]
    LsNoSuchPath(String),

    #[error("ls: cannot access directory")]
    LsUnreadable,

    #[error("cat: missing file operand")]
    CatMissingOperand,

    #[error("cat: {0}: No such file or directory")]
    CatNoSuchFile(String),

    #[error("cat: {0}: Is a directory")]
    CatIsDirectory(String),

    #[error("cd: {0}: No such file or directory")]
    CdNoSuchPath(String),

    #[error("cd: {0}: Not a directory")]
    CdNotADirectory(String),

    #[error("find: missing search term")]
    FindMissingTerm,

    #[error("find: '{0}' not found")]
    FindNoMatches(String),

    #[error("grep: missing pattern or filename")]
    GrepMissingOperand,

    #[error("grep: {0}: No such file or directory")]
    GrepNoSuchFile(String),

    #[error("grep: no matches found for '{0}'")]
    GrepNoMatches(String),
}
