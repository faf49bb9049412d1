//! JSON loading for nested block serialization.
//!
//! The editor stores blocks as a tree: value inputs, statement inputs and the
//! `next` link each embed the child block. Loading flattens that tree into the
//! workspace arena, assigning ids to blocks that lack one.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{ExtraState, NodeId, Workspace, WorkspaceBuilder, WorkspaceError, WorkspaceOptions};

impl Workspace {
    /// Parse a workspace from its JSON serialization.
    ///
    /// Statement chains nest one level per block, so the parser's recursion
    /// limit is lifted and the stack grows on demand instead.
    pub fn from_json(json: &str) -> Result<Self, WorkspaceError> {
        let mut de = serde_json::Deserializer::from_str(json);
        de.disable_recursion_limit();
        let raw = RawWorkspace::deserialize(serde_stacker::Deserializer::new(&mut de))?;
        de.end()?;
        raw.into_workspace()
    }
}

/// Raw workspace structure matching the editor's save format.
#[derive(Debug, Deserialize)]
struct RawWorkspace {
    #[serde(default)]
    options: WorkspaceOptions,
    #[serde(default)]
    variables: Vec<String>,
    #[serde(default)]
    blocks: Vec<RawBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    fields: IndexMap<String, RawField>,
    #[serde(default)]
    inputs: IndexMap<String, RawBlock>,
    #[serde(default)]
    statements: IndexMap<String, RawBlock>,
    #[serde(default)]
    next: Option<Box<RawBlock>>,
    #[serde(default)]
    comment: Option<String>,
    #[serde(default)]
    disabled: bool,
    #[serde(default)]
    extra_state: RawExtraState,
}

/// Field values arrive as strings, numbers or booleans; generation sees text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawField {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl From<RawField> for String {
    fn from(raw: RawField) -> Self {
        match raw {
            RawField::Text(text) => text,
            RawField::Number(n) => n.to_string(),
            RawField::Bool(true) => "TRUE".to_string(),
            RawField::Bool(false) => "FALSE".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExtraState {
    #[serde(default)]
    else_if_count: usize,
    #[serde(default)]
    has_else: bool,
    #[serde(default)]
    item_count: Option<usize>,
    #[serde(default)]
    params: Vec<RawParam>,
    #[serde(default)]
    has_return_value: Option<bool>,
}

/// Procedure parameters: bare names or `{ "name": ... }` objects.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawParam {
    Name(String),
    Object { name: String },
}

impl From<RawExtraState> for ExtraState {
    fn from(raw: RawExtraState) -> Self {
        Self {
            else_if_count: raw.else_if_count,
            has_else: raw.has_else,
            item_count: raw.item_count,
            params: raw
                .params
                .into_iter()
                .map(|p| match p {
                    RawParam::Name(name) | RawParam::Object { name } => name,
                })
                .collect(),
            has_return_value: raw.has_return_value,
        }
    }
}

impl RawWorkspace {
    fn into_workspace(self) -> Result<Workspace, WorkspaceError> {
        let mut builder = WorkspaceBuilder::new();
        builder.options(self.options);
        for name in self.variables {
            builder.variable(name);
        }
        for block in self.blocks {
            let root = lower(&mut builder, block);
            builder.top(root);
        }
        builder.build()
    }
}

/// Lower a block and every statement chained after it.
///
/// The `next` chain is walked in a loop; only value and statement slots
/// recurse.
fn lower(builder: &mut WorkspaceBuilder, head: RawBlock) -> NodeId {
    let (first, mut next) = lower_block(builder, head);
    let mut prev = first;
    while let Some(raw) = next {
        let (id, after) = lower_block(builder, *raw);
        builder.next(prev, id);
        prev = id;
        next = after;
    }
    first
}

/// Lower one block, handing back its `next` link untouched.
fn lower_block(builder: &mut WorkspaceBuilder, raw: RawBlock) -> (NodeId, Option<Box<RawBlock>>) {
    let id = match raw.id {
        Some(id) => builder.node_with_id(id, &raw.kind),
        None => builder.node(&raw.kind),
    };

    for (name, value) in raw.fields {
        builder.field(id, &name, value);
    }
    for (slot, child) in raw.inputs {
        let child = lower(builder, child);
        builder.value(id, &slot, child);
    }
    for (slot, head) in raw.statements {
        let head = lower(builder, head);
        builder.statement(id, &slot, head);
    }
    if let Some(comment) = raw.comment {
        builder.comment(id, comment);
    }
    if raw.disabled {
        builder.disable(id);
    }
    builder.extra(id, raw.extra_state.into());
    (id, raw.next)
}
