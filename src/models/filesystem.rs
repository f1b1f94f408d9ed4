//! Virtual filesystem node types and the manifest they are built from.

use std::collections::BTreeMap;

use serde::Deserialize;

// =============================================================================
// Filesystem Nodes
// =============================================================================

/// A single entry in the virtual filesystem tree.
///
/// The tree is built once from a [`Manifest`] at session start and never
/// mutated afterwards; every command is a read-only traversal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FsNode {
    File {
        name: String,
        /// File body, possibly multi-line. Empty string for empty files.
        content: String,
    },
    Directory {
        name: String,
        /// Children keyed by name. BTreeMap keeps listings deterministic.
        children: BTreeMap<String, FsNode>,
    },
}

impl FsNode {
    /// The entry's own name (matches the key under which its parent stores it).
    pub fn name(&self) -> &str {
        match self {
            FsNode::File { name, .. } | FsNode::Directory { name, .. } => name,
        }
    }

    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, FsNode::Directory { .. })
    }

    /// File content (files only).
    pub fn content(&self) -> Option<&str> {
        match self {
            FsNode::File { content, .. } => Some(content),
            FsNode::Directory { .. } => None,
        }
    }

    /// Child map (directories only).
    pub fn children(&self) -> Option<&BTreeMap<String, FsNode>> {
        match self {
            FsNode::Directory { children, .. } => Some(children),
            FsNode::File { .. } => None,
        }
    }
}

// =============================================================================
// Virtual Paths
// =============================================================================

/// A working-directory path relative to the filesystem root.
///
/// An empty segment list means the root itself. Only `cd` mutates the
/// shell's path, and only after the target has been validated, so a held
/// `VirtualPath` always denotes a resolvable directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VirtualPath {
    segments: Vec<String>,
}

impl VirtualPath {
    /// The filesystem root (empty segment list).
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Slash-joined segments; empty string at root. Used for prompt display.
    pub fn display(&self) -> String {
        self.segments.join("/")
    }

    /// Drop the last segment. Popping at root is a safe no-op.
    pub fn pop(&mut self) {
        self.segments.pop();
    }

    /// Resolve `path` against this path, normalizing as it goes.
    ///
    /// Empty segments and `.` are dropped; `..` pops one level and is
    /// silently clamped at root. The result is purely lexical, existence
    /// is checked separately against the tree.
    pub fn join(&self, path: &str) -> VirtualPath {
        let mut segments = self.segments.clone();
        for part in path.split('/').filter(|s| !s.is_empty()) {
            match part {
                "." => {}
                ".." => {
                    segments.pop();
                }
                _ => segments.push(part.to_string()),
            }
        }
        VirtualPath { segments }
    }
}

// =============================================================================
// Manifest
// =============================================================================

/// Serialized form of a filesystem entry, as found in `filesystem.json`.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeSpec {
    File {
        name: String,
        #[serde(default)]
        content: String,
    },
    Directory {
        name: String,
        #[serde(default)]
        children: BTreeMap<String, NodeSpec>,
    },
}

impl NodeSpec {
    pub fn name(&self) -> &str {
        match self {
            NodeSpec::File { name, .. } | NodeSpec::Directory { name, .. } => name,
        }
    }
}

/// Top-level manifest: the root directory's children keyed by name.
pub type Manifest = BTreeMap<String, NodeSpec>;
