#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for Cumin block workspaces.
//!
//! A workspace is an arena of [`Node`]s addressed by [`NodeId`]. Nodes refer to
//! their children (value slots, statement slots, the `next` link) by id, so the
//! generator can walk the tree through a shared `&Workspace` without cloning it.
//!
//! Two ways to build one:
//! - **JSON** (`Workspace::from_json`): nested block serialization, flattened
//!   into the arena on load
//! - **Builder** (`WorkspaceBuilder`): programmatic construction for hosts
//!   and tests

mod json;
mod node;
pub mod utils;
mod workspace;

#[cfg(test)]
mod json_tests;
#[cfg(test)]
mod workspace_tests;

pub use node::{ExtraState, Node, NodeId};
pub use workspace::{Workspace, WorkspaceBuilder, WorkspaceOptions};

/// Errors raised while loading or assembling a workspace.
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("invalid workspace JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two nodes claim the same block id.
    #[error("duplicate block id `{0}`")]
    DuplicateId(String),

    /// A slot or `next` link points outside the arena.
    #[error("block `{node}` refers to missing node #{target}")]
    DanglingReference { node: String, target: u32 },
}
