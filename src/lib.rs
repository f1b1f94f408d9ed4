//! yutsh — the shell-emulation core behind a browser "terminal" widget.
//!
//! A portfolio site renders a prompt and feeds raw input lines to this
//! crate; in return it gets ordered display lines (or a typed clear
//! signal) to show. Behind that contract sit a static in-memory
//! filesystem, a fixed table of mock commands (`ls`, `cat`, `cd`, `pwd`,
//! `tree`, `find`, `grep`, `echo`, `whoami`, `date`, `uname`, `help`,
//! `clear`), and arrow-key command history.
//!
//! The crate is UI-agnostic: rendering, keyboard wiring, and scrolling are
//! the embedding site's problem. The only presentation duties it exports
//! are [`render_markup`], which turns the two ANSI-like color markers in
//! output lines into markup spans, and the prompt-path query on
//! [`Shell`]/[`TerminalSession`].
//!
//! ```
//! use yutsh::{CommandResult, Shell};
//!
//! let mut shell = Shell::default();
//! assert_eq!(shell.execute("pwd"), CommandResult::line("/home/portfolio"));
//! shell.execute("cd projects");
//! assert_eq!(shell.current_path(), "projects");
//! ```

pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::{
    Command, CommandError, CommandHistory, CommandResult, HistoryDirection, ManifestError, Shell,
    TerminalSession, VirtualFs,
};
pub use crate::models::{CommandRecord, FsNode, Manifest, SessionLog, VirtualPath};
pub use crate::utils::{Clock, FixedClock, SystemClock, render_markup};
