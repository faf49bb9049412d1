//! Instrumentation hooks: statement prefix/suffix, loop traps and the extra
//! injections early exits need.

use cumin_core::Node;

use super::Generator;
use crate::BlockKind;
use crate::literal::prefix_lines;

/// Substitute the quoted block id for `%1` in an instrumentation snippet.
pub(crate) fn inject_id(snippet: &str, node: &Node) -> String {
    snippet.replace("%1", &format!("'{}'", node.id))
}

impl<'a> Generator<'a> {
    /// The statement prefix for `node`, if configured.
    pub(crate) fn prefix_for(&self, node: &Node) -> Option<String> {
        let prefix = self.config().statement_prefix.as_deref()?;
        Some(inject_id(prefix, node))
    }

    /// The statement suffix for `node`, if configured.
    pub(crate) fn suffix_for(&self, node: &Node) -> Option<String> {
        let suffix = self.config().statement_suffix.as_deref()?;
        Some(inject_id(suffix, node))
    }

    /// Surround a generated statement with its prefix and suffix.
    ///
    /// Kinds that place their own instrumentation are returned untouched.
    pub(crate) fn wrap_statement(&self, kind: BlockKind, node: &Node, code: String) -> String {
        if kind.suppresses_prefix_suffix() {
            return code;
        }
        let mut out = self.prefix_for(node).unwrap_or_default();
        out.push_str(&code);
        if let Some(suffix) = self.suffix_for(node) {
            out.push_str(&suffix);
        }
        out
    }

    /// Instrument a loop body: trap and suffix at the top, prefix at the
    /// bottom so the next iteration re-enters the loop block.
    pub(crate) fn add_loop_trap(&self, branch: String, node: &Node) -> String {
        let indent = self.indent();
        let mut branch = branch;
        if let Some(trap) = self.indented_loop_trap(node) {
            branch = trap + &branch;
        }
        if let Some(suffix) = self.suffix_for(node) {
            branch = prefix_lines(&suffix, indent) + &branch;
        }
        if let Some(prefix) = self.prefix_for(node) {
            branch.push_str(&prefix_lines(&prefix, indent));
        }
        branch
    }

    /// The loop trap for `node`, indented one level, if configured.
    pub(crate) fn indented_loop_trap(&self, node: &Node) -> Option<String> {
        let trap = self.config().loop_trap.as_deref()?;
        Some(prefix_lines(&inject_id(trap, node), self.indent()))
    }

    /// The suffix, indented one level, for code that leaves `node` early.
    pub(crate) fn early_exit_suffix(&self, node: &Node) -> String {
        self.suffix_for(node)
            .map(|suffix| prefix_lines(&suffix, self.indent()))
            .unwrap_or_default()
    }

    /// The nearest loop enclosing the block being generated.
    pub(crate) fn surrounding_loop(&self) -> Option<&'a Node> {
        self.ancestors
            .iter()
            .rev()
            .skip(1)
            .copied()
            .find(|node| BlockKind::of(node).is_ok_and(BlockKind::is_loop))
    }
}
