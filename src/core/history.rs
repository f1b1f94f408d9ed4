//! Command history with arrow-key recall semantics.

use crate::config::MAX_COMMAND_HISTORY;

/// Recall direction: `Up` walks toward older entries, `Down` toward newer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryDirection {
    Up,
    Down,
}

/// Bounded list of previously submitted lines with a navigation cursor.
///
/// The UI key binding lives elsewhere; this only models the recall rules:
/// `Up` from a fresh prompt starts at the newest entry, `Down` past the
/// newest returns an empty string to clear the input, and submitting
/// anything resets the cursor.
#[derive(Clone, Debug)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
    capacity: usize,
}

impl CommandHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            capacity,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Record a submitted line and reset the cursor.
    ///
    /// Blank lines and immediate repeats are not recorded; the list is
    /// bounded by dropping the oldest entry.
    pub fn push(&mut self, input: &str) {
        let input = input.trim();
        if !input.is_empty() && self.entries.last().map(String::as_str) != Some(input) {
            self.entries.push(input.to_string());
            if self.entries.len() > self.capacity {
                self.entries.remove(0);
            }
        }
        self.cursor = None;
    }

    /// Move the cursor and return the line to place in the input box.
    ///
    /// `None` means the input should be left as-is; `Some("")` (from
    /// walking past the newest entry) means clear it.
    pub fn navigate(&mut self, direction: HistoryDirection) -> Option<String> {
        match direction {
            HistoryDirection::Up => {
                if self.entries.is_empty() {
                    return None;
                }
                let index = match self.cursor {
                    None => self.entries.len() - 1,
                    Some(i) => i.saturating_sub(1),
                };
                self.cursor = Some(index);
                Some(self.entries[index].clone())
            }
            HistoryDirection::Down => {
                let index = self.cursor? + 1;
                if index >= self.entries.len() {
                    self.cursor = None;
                    return Some(String::new());
                }
                self.cursor = Some(index);
                Some(self.entries[index].clone())
            }
        }
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(MAX_COMMAND_HISTORY)
    }
}
