//! Block nodes and their mutation state.

use indexmap::IndexMap;

/// Index of a node inside its [`Workspace`](crate::Workspace) arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Raw arena index.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Shape information a block carries beyond its fields and slots.
///
/// Variadic blocks (if/else-if chains, text joins, procedure signatures)
/// describe their current arity here, the way the editor's mutator left it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtraState {
    /// Number of `else if` arms after the first `if`.
    pub else_if_count: usize,
    /// Whether an `else` arm exists.
    pub has_else: bool,
    /// Number of `ADD<n>` inputs on a join block.
    pub item_count: Option<usize>,
    /// Parameter names of a procedure definition or call.
    pub params: Vec<String>,
    /// Whether a conditional return carries a value.
    pub has_return_value: Option<bool>,
}

/// A single block instance.
#[derive(Clone, Debug)]
pub struct Node {
    /// Stable block id, substituted into instrumentation snippets.
    pub id: String,
    /// Block type tag selecting the translation rule.
    pub kind: String,
    pub fields: IndexMap<String, String>,
    /// Expression-producing children.
    pub values: IndexMap<String, NodeId>,
    /// Heads of statement chains.
    pub statements: IndexMap<String, NodeId>,
    pub next: Option<NodeId>,
    pub comment: Option<String>,
    pub disabled: bool,
    pub extra: ExtraState,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            fields: IndexMap::new(),
            values: IndexMap::new(),
            statements: IndexMap::new(),
            next: None,
            comment: None,
            disabled: false,
            extra: ExtraState::default(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn value(&self, slot: &str) -> Option<NodeId> {
        self.values.get(slot).copied()
    }

    pub fn statement(&self, slot: &str) -> Option<NodeId> {
        self.statements.get(slot).copied()
    }

    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }

    /// All child links: value slots, statement slots, then `next`.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.values
            .values()
            .chain(self.statements.values())
            .copied()
            .chain(self.next)
    }
}
