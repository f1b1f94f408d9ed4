//! Display-log types: executed commands and the visible session log.

use crate::core::CommandResult;

/// One executed input line together with the output it produced.
///
/// Created once per non-blank submission and immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandRecord {
    /// The raw input line as typed.
    pub input: String,
    /// Ordered output lines, still carrying color markers.
    pub output: Vec<String>,
    /// Unix timestamp (seconds) of execution.
    pub timestamp: u64,
}

/// The ordered log of executed commands shown on screen.
///
/// A [`CommandResult::ClearScreen`] resets the log instead of appending;
/// everything else becomes a [`CommandRecord`].
#[derive(Clone, Debug, Default)]
pub struct SessionLog {
    records: Vec<CommandRecord>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[CommandRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Apply one execution result to the log.
    pub fn apply(&mut self, input: &str, result: CommandResult, timestamp: u64) {
        match result {
            CommandResult::ClearScreen => self.records.clear(),
            CommandResult::Lines(output) => self.records.push(CommandRecord {
                input: input.to_string(),
                output,
                timestamp,
            }),
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
