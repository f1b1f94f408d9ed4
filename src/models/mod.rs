//! Data models for the terminal core.
//!
//! - [`FsNode`], [`NodeSpec`], [`Manifest`] - virtual filesystem representation
//! - [`VirtualPath`] - working-directory paths
//! - [`CommandRecord`], [`SessionLog`] - the visible display log

mod filesystem;
mod terminal;

pub use filesystem::{FsNode, Manifest, NodeSpec, VirtualPath};
pub use terminal::{CommandRecord, SessionLog};
