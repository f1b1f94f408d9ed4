//! Virtual filesystem: tree construction and path resolution.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::config;
use crate::models::{FsNode, Manifest, NodeSpec, VirtualPath};

/// Construction-time manifest failures.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("invalid filesystem manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// An entry's `name` field disagrees with the key it is stored under.
    #[error("manifest entry '{key}' names itself '{name}'")]
    NameMismatch { key: String, name: String },

    #[error("manifest entry '{0}' has an empty name")]
    EmptyName(String),
}

/// The static in-memory filesystem a shell session runs against.
///
/// Built once from a [`Manifest`] and immutable for the life of the
/// session; no command mutates it.
#[derive(Clone, Debug)]
pub struct VirtualFs {
    /// Root directory children keyed by name.
    root: BTreeMap<String, FsNode>,
}

impl VirtualFs {
    /// Build a filesystem from a manifest, validating the name/key invariant.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self, ManifestError> {
        Ok(Self {
            root: Self::build_children(manifest)?,
        })
    }

    /// Parse a manifest from JSON and build the filesystem.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        Self::from_manifest(&manifest)
    }

    /// The built-in portfolio tree (`about.txt` plus an empty `projects/`).
    pub fn portfolio() -> Self {
        Self::from_json(config::BUILTIN_MANIFEST).expect("built-in manifest must be valid")
    }

    fn build_children(
        specs: &BTreeMap<String, NodeSpec>,
    ) -> Result<BTreeMap<String, FsNode>, ManifestError> {
        let mut children = BTreeMap::new();
        for (key, spec) in specs {
            if spec.name().is_empty() {
                return Err(ManifestError::EmptyName(key.clone()));
            }
            if spec.name() != key {
                return Err(ManifestError::NameMismatch {
                    key: key.clone(),
                    name: spec.name().to_string(),
                });
            }
            let node = match spec {
                NodeSpec::File { name, content } => FsNode::File {
                    name: name.clone(),
                    content: content.clone(),
                },
                NodeSpec::Directory {
                    name,
                    children: sub,
                } => FsNode::Directory {
                    name: name.clone(),
                    children: Self::build_children(sub)?,
                },
            };
            children.insert(key.clone(), node);
        }
        Ok(children)
    }

    /// Root directory children.
    pub fn root(&self) -> &BTreeMap<String, FsNode> {
        &self.root
    }

    /// Walk a normalized path from the root.
    ///
    /// Returns `None` if a segment is missing, or if a file shows up
    /// before the final segment: a file never resolves mid-path.
    pub fn node_at(&self, path: &VirtualPath) -> Option<&FsNode> {
        let (first, rest) = path.segments().split_first()?;
        let mut current = self.root.get(first)?;
        for segment in rest {
            current = current.children()?.get(segment)?;
        }
        Some(current)
    }

    /// Children of the directory denoted by `path`; the root for an empty path.
    ///
    /// `None` if the path is missing or denotes a file.
    pub fn children_at(&self, path: &VirtualPath) -> Option<&BTreeMap<String, FsNode>> {
        if path.is_root() {
            return Some(&self.root);
        }
        self.node_at(path)?.children()
    }

    /// Resolve `path` relative to `current` and look the target up.
    ///
    /// Empty and `.` paths resolve to the current directory itself. The
    /// returned [`VirtualPath`] is normalized and safe to adopt as a new
    /// working directory when the node is a directory.
    pub fn resolve<'a>(
        &'a self,
        current: &VirtualPath,
        path: &str,
    ) -> Option<(VirtualPath, Resolved<'a>)> {
        let target = current.join(path);
        let resolved = if target.is_root() {
            Resolved::Root(&self.root)
        } else {
            Resolved::Node(self.node_at(&target)?)
        };
        Some((target, resolved))
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::portfolio()
    }
}

/// Outcome of a successful path resolution.
///
/// The root has no owning [`FsNode`], so it gets its own variant.
#[derive(Clone, Copy, Debug)]
pub enum Resolved<'a> {
    /// The filesystem root (always a directory).
    Root(&'a BTreeMap<String, FsNode>),
    /// Any other entry.
    Node(&'a FsNode),
}

impl<'a> Resolved<'a> {
    pub fn is_directory(&self) -> bool {
        match self {
            Resolved::Root(_) => true,
            Resolved::Node(node) => node.is_directory(),
        }
    }

    /// Child map when the target is a directory.
    pub fn children(&self) -> Option<&'a BTreeMap<String, FsNode>> {
        match self {
            Resolved::Root(children) => Some(children),
            Resolved::Node(node) => node.children(),
        }
    }

    /// The resolved node when the target is not the root.
    pub fn node(&self) -> Option<&'a FsNode> {
        match self {
            Resolved::Root(_) => None,
            Resolved::Node(node) => Some(node),
        }
    }
}

/// Directory children ordered for display: directories first, then files,
/// alphabetical within each group.
pub fn sorted_children(children: &BTreeMap<String, FsNode>) -> Vec<&FsNode> {
    let mut entries: Vec<&FsNode> = children.values().collect();
    entries.sort_by_key(|node| (!node.is_directory(), node.name().to_string()));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_fs() -> VirtualFs {
        VirtualFs::from_json(
            r#"{
                "about.txt": { "type": "file", "name": "about.txt", "content": "Yutsuna" },
                "notes.txt": { "type": "file", "name": "notes.txt", "content": "alpha\nbeta" },
                "projects": {
                    "type": "directory",
                    "name": "projects",
                    "children": {
                        "web": {
                            "type": "directory",
                            "name": "web",
                            "children": {
                                "app.txt": { "type": "file", "name": "app.txt", "content": "demo" }
                            }
                        }
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_portfolio_tree() {
        let fs = VirtualFs::portfolio();
        let root = fs.root();
        assert_eq!(root.len(), 2);
        assert!(matches!(
            root.get("about.txt"),
            Some(FsNode::File { content, .. }) if content == "Yutsuna"
        ));
        assert!(matches!(
            root.get("projects"),
            Some(FsNode::Directory { children, .. }) if children.is_empty()
        ));
    }

    #[test]
    fn test_manifest_name_mismatch_rejected() {
        let result = VirtualFs::from_json(
            r#"{ "a.txt": { "type": "file", "name": "b.txt", "content": "" } }"#,
        );
        assert!(matches!(
            result,
            Err(ManifestError::NameMismatch { key, name }) if key == "a.txt" && name == "b.txt"
        ));
    }

    #[test]
    fn test_manifest_empty_name_rejected() {
        let result =
            VirtualFs::from_json(r#"{ "": { "type": "file", "name": "", "content": "" } }"#);
        assert!(matches!(result, Err(ManifestError::EmptyName(_))));
    }

    #[test]
    fn test_manifest_bad_json_rejected() {
        assert!(matches!(
            VirtualFs::from_json("not json"),
            Err(ManifestError::Parse(_))
        ));
    }

    #[test]
    fn test_node_at_nested() {
        let fs = test_fs();
        let path = VirtualPath::root().join("projects/web/app.txt");
        let node = fs.node_at(&path).unwrap();
        assert_eq!(node.name(), "app.txt");
        assert_eq!(node.content(), Some("demo"));
    }

    #[test]
    fn test_node_at_missing() {
        let fs = test_fs();
        assert!(fs.node_at(&VirtualPath::root().join("nope")).is_none());
        assert!(
            fs.node_at(&VirtualPath::root().join("projects/nope"))
                .is_none()
        );
    }

    #[test]
    fn test_file_mid_path_fails_resolution() {
        // `about.txt/deeper` must not resolve to the file: a file before the
        // final segment fails the walk instead of silently winning.
        let fs = test_fs();
        assert!(
            fs.node_at(&VirtualPath::root().join("about.txt/deeper"))
                .is_none()
        );
        assert!(fs.resolve(&VirtualPath::root(), "about.txt/deeper").is_none());
    }

    #[test]
    fn test_resolve_empty_and_dot_are_current_dir() {
        let fs = test_fs();
        let current = VirtualPath::root().join("projects");

        let (path, resolved) = fs.resolve(&current, ".").unwrap();
        assert_eq!(path, current);
        assert!(resolved.is_directory());

        let (path, _) = fs.resolve(&current, "").unwrap();
        assert_eq!(path, current);
    }

    #[test]
    fn test_resolve_relative_and_parent() {
        let fs = test_fs();
        let current = VirtualPath::root().join("projects/web");

        let (path, resolved) = fs.resolve(&current, "app.txt").unwrap();
        assert_eq!(path.display(), "projects/web/app.txt");
        assert!(!resolved.is_directory());

        let (path, resolved) = fs.resolve(&current, "../..").unwrap();
        assert!(path.is_root());
        assert!(resolved.is_directory());
    }

    #[test]
    fn test_resolve_root_clamped() {
        let fs = test_fs();
        let (path, resolved) = fs.resolve(&VirtualPath::root(), "../../projects").unwrap();
        assert_eq!(path.display(), "projects");
        assert!(resolved.is_directory());
    }

    #[test]
    fn test_children_at() {
        let fs = test_fs();
        assert_eq!(fs.children_at(&VirtualPath::root()).unwrap().len(), 3);
        assert!(
            fs.children_at(&VirtualPath::root().join("about.txt"))
                .is_none()
        );
    }

    #[test]
    fn test_sorted_children_dirs_first() {
        let fs = test_fs();
        let names: Vec<&str> = sorted_children(fs.root())
            .iter()
            .map(|n| n.name())
            .collect();
        assert_eq!(names, vec!["projects", "about.txt", "notes.txt"]);
    }
}
