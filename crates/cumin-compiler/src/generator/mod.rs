//! The generation pass.
//!
//! A [`Generator`] is the per-pass session: it borrows the workspace, owns the
//! name table and the definition registry, and is dropped when the pass ends.

mod compose;
mod instrument;
mod sequence;


use std::collections::HashSet;

use cumin_core::{Node, NodeId, Workspace};

use crate::definitions::Definitions;
use crate::names::{NameKind, NameTable, ScopeId};
use crate::precedence::Order;
use crate::rules::{self, BlockKind};
use crate::{Config, Error, Result};

/// What a rule produced for one block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Generated {
    /// An expression and the precedence it binds with.
    Value { code: String, order: Order },
    /// Statement lines, each terminated by a newline.
    Statement(String),
    /// Nothing inline; the block registered a definition instead.
    Hoisted,
}

impl Generated {
    pub(crate) fn value(code: impl Into<String>, order: Order) -> Self {
        Self::Value {
            code: code.into(),
            order,
        }
    }

    pub(crate) fn statement(code: impl Into<String>) -> Self {
        Self::Statement(code.into())
    }
}

pub(crate) struct Generator<'a> {
    workspace: &'a Workspace,
    config: &'a Config,
    one_based: bool,
    names: NameTable,
    definitions: Definitions,
    /// Scope temporaries are allocated in
    scope: ScopeId,
    /// Every node dispatched so far; a second visit means a cycle or sharing
    seen: HashSet<NodeId>,
    /// Blocks currently being generated, outermost first
    ancestors: Vec<&'a Node>,
}

impl<'a> Generator<'a> {
    pub(crate) fn new(workspace: &'a Workspace, config: &'a Config) -> Self {
        let mut names = NameTable::new(config.reserved_words());
        let declared: Vec<String> = workspace
            .used_variables()
            .iter()
            .map(|var| names.get_or_create(var, NameKind::Variable, ScopeId::GLOBAL))
            .collect();
        let mut definitions = Definitions::default();
        definitions.declare_variables(&declared);

        Self {
            workspace,
            config,
            one_based: config
                .one_based_index
                .unwrap_or(workspace.options().one_based_index),
            names,
            definitions,
            scope: ScopeId::GLOBAL,
            seen: HashSet::new(),
            ancestors: Vec::new(),
        }
    }

    /// Generate every top-level block and assemble the final text.
    pub(crate) fn run(mut self) -> Result<String> {
        tracing::debug!(
            nodes = self.workspace.len(),
            roots = self.workspace.top_nodes().len(),
            one_based = self.one_based,
            "generation started"
        );

        let mut lines = Vec::new();
        for &root in self.workspace.top_nodes() {
            let line = self.top_level(root)?;
            if !line.is_empty() {
                lines.push(line);
            }
        }

        let output = self.finish(&lines.join("\n"));
        tracing::debug!(
            definitions = self.definitions.len(),
            bytes = output.len(),
            "generation finished"
        );
        Ok(output)
    }

    /// Prepend definitions to `body` and normalize surrounding whitespace.
    fn finish(&self, body: &str) -> String {
        let definitions: Vec<&str> = self.definitions.codes().collect();
        let code = format!("{}\n\n\n{}", definitions.join("\n\n"), body);
        strip_trailing_spaces(&collapse_trailing(strip_leading(&code)))
    }

    pub(crate) fn node(&self, id: NodeId) -> Result<&'a Node> {
        let workspace: &'a Workspace = self.workspace;
        workspace.get(id).ok_or_else(|| Error::MissingNode {
            id: id.to_string(),
        })
    }

    /// Mark `id` as generated. Fails if it already was.
    fn visit(&mut self, id: NodeId, node: &Node) -> Result<()> {
        if self.seen.insert(id) {
            Ok(())
        } else {
            Err(Error::MalformedLinkage {
                node: node.id.clone(),
            })
        }
    }

    /// Run the rule for `node` with it pushed on the ancestor stack.
    fn dispatch(&mut self, node: &'a Node) -> Result<(BlockKind, Generated)> {
        let kind = BlockKind::of(node)?;
        tracing::trace!(id = %node.id, kind = kind.as_str(), "dispatch");
        self.ancestors.push(node);
        let result = rules::dispatch(self, kind, node);
        self.ancestors.pop();
        Ok((kind, result?))
    }

    pub(crate) fn config(&self) -> &'a Config {
        self.config
    }

    pub(crate) fn indent(&self) -> &'a str {
        let config: &'a Config = self.config;
        config.indent_unit()
    }

    /// Whether user-facing indices start at 1.
    pub(crate) fn one_based(&self) -> bool {
        self.one_based
    }

    /// Identifier for a user variable.
    pub(crate) fn variable_name(&mut self, key: &str) -> String {
        self.names
            .get_or_create(key, NameKind::Variable, ScopeId::GLOBAL)
    }

    /// Identifier for a user procedure.
    pub(crate) fn procedure_name(&mut self, key: &str) -> String {
        self.names
            .get_or_create(key, NameKind::Procedure, ScopeId::GLOBAL)
    }

    /// Fresh identifier for an engine temporary in the current scope.
    pub(crate) fn temporary(&mut self, base: &str) -> String {
        self.names.get_distinct(base, self.scope)
    }

    /// Run `body` with temporaries allocated in a fresh child scope.
    pub(crate) fn in_child_scope<T>(
        &mut self,
        body: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let outer = self.scope;
        self.scope = self.names.open_scope(outer);
        let result = body(self);
        self.scope = outer;
        result
    }

    /// Name of helper `desired`, registering `lines` on first request.
    pub(crate) fn provide(&mut self, desired: &str, lines: &[&str]) -> String {
        let indent = self.indent();
        self.definitions
            .provide(&mut self.names, indent, desired, lines)
    }

    pub(crate) fn define_procedure(&mut self, name: &str, code: String) {
        self.definitions.define_procedure(name, code);
    }
}

/// Drop leading whitespace up to and including its last line break.
fn strip_leading(code: &str) -> &str {
    let ws_len = code.len() - code.trim_start().len();
    match code[..ws_len].rfind('\n') {
        Some(pos) => &code[pos + 1..],
        None => code,
    }
}

/// Collapse trailing whitespace that spans a line break into one `\n`.
fn collapse_trailing(code: &str) -> String {
    let body_len = code.trim_end().len();
    match code[body_len..].find('\n') {
        Some(pos) => format!("{}\n", &code[..body_len + pos]),
        None => code.to_string(),
    }
}

/// Remove spaces and tabs before every line break.
fn strip_trailing_spaces(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    let mut lines = code.split('\n').peekable();
    while let Some(line) = lines.next() {
        if lines.peek().is_some() {
            out.push_str(line.trim_end_matches([' ', '\t']));
            out.push('\n');
        } else {
            out.push_str(line);
        }
    }
    out
}
