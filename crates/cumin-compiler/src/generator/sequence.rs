//! Statement chains, top-level blocks and block comments.

use std::collections::HashSet;

use cumin_core::{Node, NodeId};

use super::{Generated, Generator};
use crate::literal::prefix_lines;
use crate::{BlockKind, Error, Result};

impl<'a> Generator<'a> {
    /// The chain in statement slot `slot`, indented one level.
    ///
    /// An empty slot yields empty text.
    pub(crate) fn statement_to_code(&mut self, parent: &Node, slot: &str) -> Result<String> {
        let Some(head) = parent.statement(slot) else {
            return Ok(String::new());
        };
        let code = self.chain_to_code(head)?;
        Ok(prefix_lines(&code, self.indent()))
    }

    /// Concatenate the statements of the chain starting at `head`.
    pub(crate) fn chain_to_code(&mut self, head: NodeId) -> Result<String> {
        let mut out = String::new();
        let mut cursor = Some(head);
        while let Some(id) = cursor {
            let node = self.node(id)?;
            self.visit(id, node)?;
            if node.is_enabled() {
                out.push_str(&self.statement(node)?);
            }
            cursor = node.next;
        }
        Ok(out)
    }

    fn statement(&mut self, node: &'a Node) -> Result<String> {
        match self.dispatch(node)? {
            (kind, Generated::Statement(code)) => {
                let code = self.wrap_statement(kind, node, code);
                Ok(format!("{}{code}", self.comment_lines(node)))
            }
            (_, Generated::Hoisted) => Ok(String::new()),
            (_, Generated::Value { .. }) => Err(Error::ExpectedStatement {
                node: node.id.clone(),
                kind: node.kind.clone(),
            }),
        }
    }

    /// Code for one root: a statement chain, or a value used as a statement.
    pub(crate) fn top_level(&mut self, root: NodeId) -> Result<String> {
        let node = self.node(root)?;
        if !node.is_enabled() || !BlockKind::of(node)?.is_value() {
            return self.chain_to_code(root);
        }

        self.visit(root, node)?;
        let (kind, generated) = self.dispatch(node)?;
        let Generated::Value { code, .. } = generated else {
            return Ok(String::new());
        };
        let line = format!("{}{code}", self.comment_lines(node));
        if line.is_empty() {
            return Ok(line);
        }
        Ok(self.wrap_statement(kind, node, format!("{line};\n")))
    }

    /// `// ` lines for the block's own comment and every comment found inside
    /// its value slots. Comments of nested statements are left to them.
    pub(crate) fn comment_lines(&self, node: &Node) -> String {
        let mut out = String::new();
        if let Some(comment) = node.comment.as_deref().filter(|c| !c.is_empty()) {
            out.push_str(&prefix_lines(&format!("{comment}\n"), "// "));
        }
        for &child in node.values.values() {
            let nested = self.nested_comments(child);
            if !nested.is_empty() {
                out.push_str(&prefix_lines(&nested, "// "));
            }
        }
        out
    }

    /// Comments of `root` and all its descendants, one per line, preorder.
    fn nested_comments(&self, root: NodeId) -> String {
        let mut out = String::new();
        let mut visited = HashSet::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            let Some(node) = self.workspace.get(id) else {
                continue;
            };
            if let Some(comment) = node.comment.as_deref().filter(|c| !c.is_empty()) {
                out.push_str(comment);
                out.push('\n');
            }
            let children: Vec<NodeId> = node.children().collect();
            stack.extend(children.into_iter().rev());
        }
        out
    }
}
