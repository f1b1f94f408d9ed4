//! The command processor: working-directory state plus the `execute` entry point.

use crate::core::commands::{Command, CommandResult, execute_command};
use crate::core::filesystem::VirtualFs;
use crate::models::VirtualPath;
use crate::utils::{Clock, SystemClock};

/// A shell session over a [`VirtualFs`].
///
/// Owns the filesystem and the working directory; `execute` is the single
/// entry point. All failures come back as ordinary output lines, never as
/// errors, so callers only ever render.
pub struct Shell {
    fs: VirtualFs,
    cwd: VirtualPath,
    clock: Box<dyn Clock>,
}

impl Shell {
    /// Shell over the given filesystem, using the system wall clock.
    pub fn new(fs: VirtualFs) -> Self {
        Self::with_clock(fs, Box::new(SystemClock))
    }

    /// Shell with an injected clock (tests pin `date` output this way).
    pub fn with_clock(fs: VirtualFs, clock: Box<dyn Clock>) -> Self {
        Self {
            fs,
            cwd: VirtualPath::root(),
            clock,
        }
    }

    /// Parse one raw input line and execute it.
    ///
    /// The line is trimmed and split on whitespace runs; the first token is
    /// the command name, the rest are positional arguments. No quoting. A
    /// blank line yields an empty command token and therefore the
    /// command-not-found line; callers are expected to filter blank input
    /// before calling.
    pub fn execute(&mut self, input: &str) -> CommandResult {
        let mut tokens = input.split_whitespace();
        let name = tokens.next().unwrap_or("");
        let args: Vec<String> = tokens.map(str::to_string).collect();

        let cmd = Command::parse(name, &args);
        match execute_command(cmd, &mut self.cwd, &self.fs, self.clock.as_ref()) {
            Ok(result) => result,
            Err(err) => CommandResult::line(err.to_string()),
        }
    }

    /// Slash-joined working-directory segments; empty string at the root.
    /// Used by the presentation layer to render the prompt.
    pub fn current_path(&self) -> String {
        self.cwd.display()
    }

    /// Current Unix timestamp from the shell's clock.
    pub fn now_unix(&self) -> u64 {
        self.clock.now_unix()
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(VirtualFs::portfolio())
    }
}
