//! Command execution result type.

/// Outcome of executing one input line.
///
/// The clear signal is a variant rather than a reserved output string, so
/// callers can never confuse it with printable text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Ordered display lines. Empty for silent commands such as `cd`.
    Lines(Vec<String>),
    /// Reset the visible command log.
    ClearScreen,
}

impl CommandResult {
    /// A result with no visible output.
    pub fn empty() -> Self {
        Self::Lines(Vec::new())
    }

    /// A single-line result.
    pub fn line(line: impl Into<String>) -> Self {
        Self::Lines(vec![line.into()])
    }

    pub fn is_clear(&self) -> bool {
        matches!(self, Self::ClearScreen)
    }

    /// Display lines, if any. `None` for the clear signal.
    pub fn lines(&self) -> Option<&[String]> {
        match self {
            Self::Lines(lines) => Some(lines),
            Self::ClearScreen => None,
        }
    }
}
