//! Configuration for a generation pass.

/// Generation options.
///
/// Instrumentation snippets may contain `%1`, which is replaced by the quoted
/// id of the block being instrumented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// One level of indentation
    pub(crate) indent: String,
    /// Snippet injected before every statement
    pub(crate) statement_prefix: Option<String>,
    /// Snippet injected after every statement and before early exits
    pub(crate) statement_suffix: Option<String>,
    /// Snippet injected at the top of every loop body
    pub(crate) loop_trap: Option<String>,
    /// Overrides the workspace's index convention when set
    pub(crate) one_based_index: Option<bool>,
    /// Identifiers generated code must not use
    pub(crate) reserved_words: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            statement_prefix: None,
            statement_suffix: None,
            loop_trap: None,
            one_based_index: None,
            reserved_words: Vec::new(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation unit.
    pub fn indent(mut self, value: impl Into<String>) -> Self {
        self.indent = value.into();
        self
    }

    /// Set the snippet injected before each statement.
    pub fn statement_prefix(mut self, value: impl Into<String>) -> Self {
        self.statement_prefix = Some(value.into());
        self
    }

    /// Set the snippet injected after each statement.
    pub fn statement_suffix(mut self, value: impl Into<String>) -> Self {
        self.statement_suffix = Some(value.into());
        self
    }

    /// Set the snippet injected at the top of loop bodies.
    pub fn loop_trap(mut self, value: impl Into<String>) -> Self {
        self.loop_trap = Some(value.into());
        self
    }

    /// Force one-based (or zero-based) user indices, ignoring the workspace.
    pub fn one_based_index(mut self, value: bool) -> Self {
        self.one_based_index = Some(value);
        self
    }

    /// Reserve an extra identifier.
    pub fn reserve(mut self, word: impl Into<String>) -> Self {
        self.reserved_words.push(word.into());
        self
    }

    pub fn indent_unit(&self) -> &str {
        &self.indent
    }

    pub fn reserved_words(&self) -> &[String] {
        &self.reserved_words
    }
}
