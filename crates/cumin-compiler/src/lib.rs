//! Cumin code generator: turns a block workspace into Cumin source text.
//!
//! The pipeline is a single depth-first pass:
//! - `rules` - one translation rule per [`BlockKind`]
//! - `generator` - the pass itself: value composition, statement sequencing,
//!   instrumentation and final assembly
//! - `definitions` - hoisted helpers and procedures, emitted once each
//! - `names` - scope-aware identifier allocation
//! - `precedence` - operator binding strengths and parenthesization
//! - `literal` - string quoting and small text predicates

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod definitions;
mod generator;
pub mod literal;
pub mod names;
pub mod precedence;
pub mod rules;

#[cfg(test)]
mod precedence_tests;
#[cfg(test)]
pub mod test_utils;

use cumin_core::Workspace;

pub use config::Config;
pub use precedence::Order;
pub use rules::BlockKind;

/// Fatal generation errors.
///
/// Each one points at a defect in the workspace (or the rule set), never at a
/// condition a rerun could recover from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No rule exists for the block's kind.
    #[error("block `{node}`: unknown block kind `{kind}`")]
    UnknownKind { node: String, kind: String },

    /// A dropdown field holds a value outside its options.
    #[error("block `{node}` ({kind}): invalid value `{value}` for field `{field}`")]
    InvalidField {
        node: String,
        kind: String,
        field: String,
        value: String,
    },

    /// A statement block sits in a value slot.
    #[error("block `{node}` ({kind}) in slot `{slot}` does not produce a value")]
    ExpectedValue {
        node: String,
        kind: String,
        slot: String,
    },

    /// A value block sits in a statement chain.
    #[error("block `{node}` ({kind}) is a value, not a statement")]
    ExpectedStatement { node: String, kind: String },

    /// The block is reached twice: a cyclic chain or a shared child.
    #[error("block `{node}` is reached more than once (cyclic or shared link)")]
    MalformedLinkage { node: String },

    /// A link points at a node that is not in the workspace.
    #[error("link to missing node {id}")]
    MissingNode { id: String },
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Generate Cumin source for every top-level block of `workspace`.
///
/// Output is the hoisted definitions (variable declaration, helpers,
/// procedures) in registration order, followed by the top-level code.
/// Nothing is returned if any block fails.
pub fn generate(workspace: &Workspace, config: &Config) -> Result<String> {
    generator::Generator::new(workspace, config).run()
}
