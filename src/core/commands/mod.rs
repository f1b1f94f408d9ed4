//! Command parsing and execution.
//!
//! Input lines are parsed into the [`Command`] enum, then dispatched by
//! [`execute_command`] against explicit state (working directory plus
//! filesystem reference). Handlers return [`CommandResult`] or a typed
//! [`CommandError`](crate::core::CommandError); nothing panics.

mod execute;
mod result;

pub use execute::execute_command;
pub use result::CommandResult;

use std::fmt;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `cat bar.txt`).
///
/// Stored as typed, unvalidated text; validation happens during execution
/// against the virtual filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PathArg {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command.
///
/// Required operands stay `Option` here; reporting a missing operand is the
/// executor's job, keeping all user-facing failure text in one place.
#[derive(Clone, Debug)]
pub enum Command {
    Ls(Option<PathArg>),
    Cat(Option<PathArg>),
    Cd(Option<PathArg>),
    Pwd,
    Tree,
    Find(Option<String>),
    Grep {
        pattern: Option<String>,
        file: Option<PathArg>,
    },
    Echo(String),
    Whoami,
    Date,
    Uname,
    Help,
    Clear,
    Unknown(String),
}

impl Command {
    /// Parse a command from its name and positional arguments.
    ///
    /// Names match exactly (no aliases, no case folding). Extra arguments
    /// beyond what a command consumes are ignored, as a real shell ignores
    /// them here.
    pub fn parse(name: &str, args: &[String]) -> Self {
        match name {
            "ls" => Self::Ls(args.first().map(PathArg::new)),
            "cat" => Self::Cat(args.first().map(PathArg::new)),
            "cd" => Self::Cd(args.first().map(PathArg::new)),
            "pwd" => Self::Pwd,
            "tree" => Self::Tree,
            "find" => Self::Find(args.first().cloned()),
            "grep" => Self::Grep {
                pattern: args.first().cloned(),
                file: args.get(1).map(PathArg::new),
            },
            "echo" => Self::Echo(args.join(" ")),
            "whoami" => Self::Whoami,
            "date" => Self::Date,
            "uname" => Self::Uname,
            "help" => Self::Help,
            "clear" => Self::Clear,
            _ => Self::Unknown(name.to_string()),
        }
    }
}
