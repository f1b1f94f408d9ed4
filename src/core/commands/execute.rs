//! Command handlers.
//!
//! Every handler takes explicit state (working directory, filesystem,
//! clock) and returns either a [`CommandResult`] or a [`CommandError`]
//! whose `Display` text is the line to print. `cd` is the only handler
//! that mutates anything.

use std::collections::BTreeMap;

use crate::config::{self, color, tree};
use crate::core::commands::{Command, CommandResult, PathArg};
use crate::core::error::CommandError;
use crate::core::filesystem::{VirtualFs, sorted_children};
use crate::models::{FsNode, VirtualPath};
use crate::utils::{Clock, format_datetime};

/// Execute a parsed command against the given shell state.
pub fn execute_command(
    cmd: Command,
    cwd: &mut VirtualPath,
    fs: &VirtualFs,
    clock: &dyn Clock,
) -> Result<CommandResult, CommandError> {
    match cmd {
        Command::Ls(path) => ls(path, cwd, fs),
        Command::Cat(file) => cat(file, cwd, fs),
        Command::Cd(path) => cd(path, cwd, fs),
        Command::Pwd => Ok(pwd(cwd)),
        Command::Tree => Ok(tree_listing(cwd, fs)),
        Command::Find(term) => find(term, fs),
        Command::Grep { pattern, file } => grep(pattern, file, cwd, fs),
        Command::Echo(text) => Ok(CommandResult::line(text)),
        Command::Whoami => Ok(CommandResult::line(config::USERNAME)),
        Command::Date => Ok(CommandResult::line(format_datetime(clock.now_unix()))),
        Command::Uname => Ok(CommandResult::line(config::UNAME_TEXT)),
        Command::Help => Ok(CommandResult::Lines(
            config::HELP_TEXT.lines().map(str::to_string).collect(),
        )),
        Command::Clear => Ok(CommandResult::ClearScreen),
        Command::Unknown(name) => Err(CommandError::CommandNotFound(name)),
    }
}

fn ls(
    path: Option<PathArg>,
    cwd: &VirtualPath,
    fs: &VirtualFs,
) -> Result<CommandResult, CommandError> {
    let target = path.as_ref().map(|p| p.as_str()).unwrap_or(".");
    let (_, resolved) = fs
        .resolve(cwd, target)
        .ok_or_else(|| CommandError::LsNoSuchPath(target.to_string()))?;

    // A file target lists as just its own name, uncolored.
    if let Some(node) = resolved.node()
        && !node.is_directory()
    {
        return Ok(CommandResult::line(node.name()));
    }

    // Defensive: a resolved directory always carries a child map.
    let children = resolved.children().ok_or(CommandError::LsUnreadable)?;
    let lines = sorted_children(children)
        .iter()
        .map(|node| colorize_entry(node))
        .collect();
    Ok(CommandResult::Lines(lines))
}

/// Wrap an entry name in its directory/file color marker.
fn colorize_entry(node: &FsNode) -> String {
    let marker = if node.is_directory() {
        color::DIR
    } else {
        color::FILE
    };
    format!("{}{}{}", marker, node.name(), color::RESET)
}

fn cat(
    file: Option<PathArg>,
    cwd: &VirtualPath,
    fs: &VirtualFs,
) -> Result<CommandResult, CommandError> {
    let file = file.ok_or(CommandError::CatMissingOperand)?;
    let (_, resolved) = fs
        .resolve(cwd, file.as_str())
        .ok_or_else(|| CommandError::CatNoSuchFile(file.to_string()))?;

    if resolved.is_directory() {
        return Err(CommandError::CatIsDirectory(file.to_string()));
    }
    let content = resolved.node().and_then(FsNode::content).unwrap_or("");
    Ok(CommandResult::Lines(
        content.split('\n').map(str::to_string).collect(),
    ))
}

fn cd(
    path: Option<PathArg>,
    cwd: &mut VirtualPath,
    fs: &VirtualFs,
) -> Result<CommandResult, CommandError> {
    match path.as_ref().map(|p| p.as_str()) {
        // `cd` and `cd ~` go home (the root).
        None | Some("~") => {
            *cwd = VirtualPath::root();
            Ok(CommandResult::empty())
        }
        // `cd ..` at the root is a no-op, not an error.
        Some("..") => {
            cwd.pop();
            Ok(CommandResult::empty())
        }
        Some(target) => {
            let (new_path, resolved) = fs
                .resolve(cwd, target)
                .ok_or_else(|| CommandError::CdNoSuchPath(target.to_string()))?;
            if !resolved.is_directory() {
                return Err(CommandError::CdNotADirectory(target.to_string()));
            }
            // Adopt the normalized path so the cwd stays resolvable even
            // for inputs like `a/../b`.
            *cwd = new_path;
            Ok(CommandResult::empty())
        }
    }
}

fn pwd(cwd: &VirtualPath) -> CommandResult {
    if cwd.is_root() {
        CommandResult::line(config::PWD_PREFIX)
    } else {
        CommandResult::line(format!("{}/{}", config::PWD_PREFIX, cwd.display()))
    }
}

/// Shallow listing of the current directory with tree-drawing connectors.
/// One level deep despite the name; matches the original's scope.
fn tree_listing(cwd: &VirtualPath, fs: &VirtualFs) -> CommandResult {
    let Some(children) = fs.children_at(cwd) else {
        return CommandResult::empty();
    };
    let entries = sorted_children(children);
    let lines = entries
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let connector = if index == entries.len() - 1 {
                tree::LAST
            } else {
                tree::BRANCH
            };
            let icon = if node.is_directory() {
                tree::DIR_ICON
            } else {
                tree::FILE_ICON
            };
            format!("{}{}{}", connector, icon, node.name())
        })
        .collect();
    CommandResult::Lines(lines)
}

fn find(term: Option<String>, fs: &VirtualFs) -> Result<CommandResult, CommandError> {
    let term = term.ok_or(CommandError::FindMissingTerm)?;

    // Depth-first over the whole tree from the true root, ignoring the
    // working directory. Case-sensitive substring match on names.
    let mut results = Vec::new();
    search(fs.root(), "", &term, &mut results);

    if results.is_empty() {
        return Err(CommandError::FindNoMatches(term));
    }
    Ok(CommandResult::Lines(results))
}

fn search(
    children: &BTreeMap<String, FsNode>,
    prefix: &str,
    term: &str,
    results: &mut Vec<String>,
) {
    for node in sorted_children(children) {
        let full_path = if prefix.is_empty() {
            node.name().to_string()
        } else {
            format!("{}/{}", prefix, node.name())
        };
        if node.name().contains(term) {
            results.push(full_path.clone());
        }
        if let Some(sub) = node.children() {
            search(sub, &full_path, term, results);
        }
    }
}

fn grep(
    pattern: Option<String>,
    file: Option<PathArg>,
    cwd: &VirtualPath,
    fs: &VirtualFs,
) -> Result<CommandResult, CommandError> {
    let (Some(pattern), Some(file)) = (pattern, file) else {
        return Err(CommandError::GrepMissingOperand);
    };

    // Directories and empty files report the same way as missing paths.
    let content = fs
        .resolve(cwd, file.as_str())
        .and_then(|(_, resolved)| resolved.node())
        .and_then(FsNode::content)
        .filter(|content| !content.is_empty())
        .ok_or_else(|| CommandError::GrepNoSuchFile(file.to_string()))?;

    let needle = pattern.to_lowercase();
    let matches: Vec<String> = content
        .split('\n')
        .filter(|line| line.to_lowercase().contains(&needle))
        .map(str::to_string)
        .collect();

    if matches.is_empty() {
        return Err(CommandError::GrepNoMatches(pattern));
    }
    Ok(CommandResult::Lines(matches))
}
