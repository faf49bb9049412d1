//! Value slots: generating a child expression and fitting it into its context.

use cumin_core::Node;

use super::{Generated, Generator};
use crate::literal::{format_number, is_number, parse_number};
use crate::precedence::{Order, compose};
use crate::{Error, Result};

impl<'a> Generator<'a> {
    /// Code for the expression in `slot`, bracketed for an `outer` context.
    ///
    /// `None` when the slot is empty, holds a disabled block, or generates no
    /// text; the calling rule picks its own default.
    pub(crate) fn value_to_code(
        &mut self,
        parent: &Node,
        slot: &str,
        outer: Order,
    ) -> Result<Option<String>> {
        let Some(id) = parent.value(slot) else {
            return Ok(None);
        };
        let node = self.node(id)?;
        self.visit(id, node)?;
        if !node.is_enabled() {
            return Ok(None);
        }

        let (code, inner) = match self.dispatch(node)? {
            (_, Generated::Value { code, order }) => (code, order),
            (_, Generated::Hoisted) => return Ok(None),
            (_, Generated::Statement(_)) => {
                return Err(Error::ExpectedValue {
                    node: node.id.clone(),
                    kind: node.kind.clone(),
                    slot: slot.to_string(),
                });
            }
        };
        if code.is_empty() {
            return Ok(None);
        }
        Ok(Some(compose(code, inner, outer)))
    }

    /// [`value_to_code`](Self::value_to_code) with a fallback literal.
    pub(crate) fn value_or(
        &mut self,
        parent: &Node,
        slot: &str,
        outer: Order,
        default: &str,
    ) -> Result<String> {
        Ok(self
            .value_to_code(parent, slot, outer)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// Zero-based index expression for the user index in `slot`.
    ///
    /// `delta` is added to the index (after undoing one-based numbering),
    /// `negate` flips its sign, and `order` is the context the result is
    /// embedded in. Numeric literals are folded; other code gets explicit
    /// arithmetic, bracketed when `order` binds at least as loosely.
    pub(crate) fn adjusted_index(
        &mut self,
        parent: &Node,
        slot: &str,
        delta: i64,
        negate: bool,
        order: Order,
    ) -> Result<String> {
        let mut delta = delta;
        if self.one_based() {
            delta -= 1;
        }
        let default = if self.one_based() { "1" } else { "0" };

        let child_order = if delta > 0 {
            Order::Addition
        } else if delta < 0 {
            Order::Subtraction
        } else if negate {
            Order::UnaryNegation
        } else {
            order
        };
        let at = self.value_or(parent, slot, child_order, default)?;

        if is_number(&at) {
            if let Some(value) = parse_number(&at) {
                let shifted = value + delta as f64;
                return Ok(format_number(if negate { -shifted } else { shifted }));
            }
        }

        let mut at = at;
        let mut inner = None;
        if delta > 0 {
            at = format!("{at} + {delta}");
            inner = Some(Order::Addition);
        } else if delta < 0 {
            at = format!("{at} - {}", -delta);
            inner = Some(Order::Subtraction);
        }
        if negate {
            at = if delta != 0 {
                format!("-({at})")
            } else {
                format!("-{at}")
            };
            inner = Some(Order::UnaryNegation);
        }
        match inner {
            Some(inner) if order.class() >= inner.class() => Ok(format!("({at})")),
            _ => Ok(at),
        }
    }
}
