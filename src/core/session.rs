//! A full terminal session: shell, display log, and command history.

use crate::core::history::{CommandHistory, HistoryDirection};
use crate::core::shell::Shell;
use crate::models::SessionLog;

/// Everything the presentation layer holds for one terminal instance.
///
/// `submit` is the one write path: it filters blank input (the caller
/// contract of [`Shell::execute`]), records history, executes, and applies
/// the result to the display log.
#[derive(Default)]
pub struct TerminalSession {
    shell: Shell,
    log: SessionLog,
    history: CommandHistory,
}

impl TerminalSession {
    /// Session over the built-in portfolio filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session over a preconfigured shell.
    pub fn with_shell(shell: Shell) -> Self {
        Self {
            shell,
            log: SessionLog::new(),
            history: CommandHistory::default(),
        }
    }

    /// Submit one raw input line. Blank input is ignored entirely.
    pub fn submit(&mut self, input: &str) {
        if input.trim().is_empty() {
            return;
        }
        self.history.push(input);
        let timestamp = self.shell.now_unix();
        let result = self.shell.execute(input);
        self.log.apply(input, result, timestamp);
    }

    /// Recall a history entry for the input box.
    pub fn recall(&mut self, direction: HistoryDirection) -> Option<String> {
        self.history.navigate(direction)
    }

    /// Working-directory string for prompt rendering.
    pub fn prompt_path(&self) -> String {
        self.shell.current_path()
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }
}
