//! Shell configuration.
//!
//! Centralizes the constants used throughout the crate. Text assets are
//! loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Built-in filesystem manifest (the portfolio tree).
pub const BUILTIN_MANIFEST: &str = include_str!("../assets/filesystem.json");

/// Usage listing for the `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

// =============================================================================
// Shell Identity
// =============================================================================

/// Shell name used in the command-not-found message.
pub const SHELL_NAME: &str = "yutsh";

/// Fixed username reported by `whoami`.
pub const USERNAME: &str = "Yutsuna";

/// Identification string reported by `uname`.
pub const UNAME_TEXT: &str = "YutsuSH: Yutsu Shell v0.0.1";

/// Absolute prefix prepended by `pwd`.
pub const PWD_PREFIX: &str = "/home/portfolio";

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of command history entries kept for arrow-key recall.
pub const MAX_COMMAND_HISTORY: usize = 100;

/// ANSI-like color markers embedded in output lines.
///
/// The presentation layer substitutes these for markup via
/// [`crate::utils::render_markup`] before display.
pub mod color {
    /// Directory entries (blue).
    pub const DIR: &str = "\x1b[34m";
    /// File entries (white, rendered green by the site theme).
    pub const FILE: &str = "\x1b[37m";
    /// End of colored span.
    pub const RESET: &str = "\x1b[0m";
}

/// Glyphs used by the `tree` command.
pub mod tree {
    pub const BRANCH: &str = "├── ";
    pub const LAST: &str = "└── ";
    pub const DIR_ICON: &str = "📁 ";
    pub const FILE_ICON: &str = "📄 ";
}
