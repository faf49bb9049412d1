//! The node arena and its builder.

use std::collections::HashSet;

use serde::Deserialize;

use crate::{ExtraState, Node, NodeId, WorkspaceError};

/// Per-workspace generation switches set by the editor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceOptions {
    /// User-facing list and text indices start at 1.
    #[serde(default)]
    pub one_based_index: bool,
}

/// An immutable snapshot of a block program.
///
/// Nodes live in a flat arena; `top` lists the roots in display order.
#[derive(Clone, Debug, Default)]
pub struct Workspace {
    nodes: Vec<Node>,
    top: Vec<NodeId>,
    variables: Vec<String>,
    options: WorkspaceOptions,
}

impl Workspace {
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Root nodes in the order they are generated.
    pub fn top_nodes(&self) -> &[NodeId] {
        &self.top
    }

    /// Variables declared explicitly by the editor.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn options(&self) -> WorkspaceOptions {
        self.options
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i as u32), node))
    }

    /// Declared variables followed by every variable referenced from a root.
    ///
    /// References are `VAR` fields and procedure parameters, collected
    /// depth-first. Names compare case-insensitively; the first spelling wins.
    pub fn used_variables(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        let mut push = |name: &str| {
            if seen.insert(name.to_lowercase()) {
                names.push(name.to_string());
            }
        };

        for name in &self.variables {
            push(name);
        }

        let mut visited = HashSet::new();
        let mut stack: Vec<NodeId> = self.top.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            let Some(node) = self.get(id) else {
                continue;
            };
            if let Some(var) = node.field("VAR") {
                push(var);
            }
            for param in &node.extra.params {
                push(param);
            }
            let children: Vec<NodeId> = node.children().collect();
            stack.extend(children.into_iter().rev());
        }

        names
    }
}

/// Incremental construction of a [`Workspace`].
///
/// Links are validated once in [`build`](Self::build), so nodes may be wired
/// in any order. Cycles and shared children are representable on purpose:
/// the generator is the one that rejects them.
#[derive(Debug, Default)]
pub struct WorkspaceBuilder {
    nodes: Vec<Node>,
    top: Vec<NodeId>,
    variables: Vec<String>,
    options: WorkspaceOptions,
    /// Nodes whose id is synthesized in `build`.
    unnamed: HashSet<NodeId>,
}

impl WorkspaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node whose id is synthesized on [`build`](Self::build).
    ///
    /// The id is `b<index>`, or `b<index>_<n>` when an explicit id already
    /// claims that name.
    pub fn node(&mut self, kind: &str) -> NodeId {
        let id = self.node_with_id(String::new(), kind);
        self.unnamed.insert(id);
        id
    }

    pub fn node_with_id(&mut self, id: impl Into<String>, kind: &str) -> NodeId {
        let node_id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(id, kind));
        node_id
    }

    /// Mutable access to a node added by this builder.
    ///
    /// # Panics
    /// Panics if `id` was not returned by this builder.
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub fn field(&mut self, id: NodeId, name: &str, value: impl Into<String>) -> &mut Self {
        self.get_mut(id).fields.insert(name.to_string(), value.into());
        self
    }

    pub fn value(&mut self, id: NodeId, slot: &str, child: NodeId) -> &mut Self {
        self.get_mut(id).values.insert(slot.to_string(), child);
        self
    }

    pub fn statement(&mut self, id: NodeId, slot: &str, head: NodeId) -> &mut Self {
        self.get_mut(id).statements.insert(slot.to_string(), head);
        self
    }

    pub fn next(&mut self, id: NodeId, next: NodeId) -> &mut Self {
        self.get_mut(id).next = Some(next);
        self
    }

    pub fn comment(&mut self, id: NodeId, text: impl Into<String>) -> &mut Self {
        self.get_mut(id).comment = Some(text.into());
        self
    }

    pub fn disable(&mut self, id: NodeId) -> &mut Self {
        self.get_mut(id).disabled = true;
        self
    }

    pub fn extra(&mut self, id: NodeId, extra: ExtraState) -> &mut Self {
        self.get_mut(id).extra = extra;
        self
    }

    /// Append a root.
    pub fn top(&mut self, id: NodeId) -> &mut Self {
        self.top.push(id);
        self
    }

    pub fn variable(&mut self, name: impl Into<String>) -> &mut Self {
        self.variables.push(name.into());
        self
    }

    pub fn options(&mut self, options: WorkspaceOptions) -> &mut Self {
        self.options = options;
        self
    }

    /// Validate ids and links, then freeze the arena.
    pub fn build(mut self) -> Result<Workspace, WorkspaceError> {
        let mut ids = HashSet::new();
        for (index, node) in self.nodes.iter().enumerate() {
            if self.unnamed.contains(&NodeId(index as u32)) {
                continue;
            }
            if !ids.insert(node.id.clone()) {
                return Err(WorkspaceError::DuplicateId(node.id.clone()));
            }
        }

        for (index, node) in self.nodes.iter_mut().enumerate() {
            if !self.unnamed.contains(&NodeId(index as u32)) {
                continue;
            }
            let mut id = format!("b{index}");
            let mut suffix = 1;
            while ids.contains(&id) {
                id = format!("b{index}_{suffix}");
                suffix += 1;
            }
            ids.insert(id.clone());
            node.id = id;
        }

        let len = self.nodes.len();
        let dangling = |owner: &str, target: NodeId| WorkspaceError::DanglingReference {
            node: owner.to_string(),
            target: target.as_u32(),
        };
        for node in &self.nodes {
            if let Some(target) = node.children().find(|child| child.index() >= len) {
                return Err(dangling(&node.id, target));
            }
        }
        if let Some(&target) = self.top.iter().find(|root| root.index() >= len) {
            return Err(dangling("<top>", target));
        }

        Ok(Workspace {
            nodes: self.nodes,
            top: self.top,
            variables: self.variables,
            options: self.options,
        })
    }
}
