//! Conditionals and boolean expressions.

use cumin_core::Node;

use super::{BlockKind, choice, connected_arity};
use crate::Result;
use crate::generator::{Generated, Generator};
use crate::precedence::Order;

field_choice! {
    CompareOp {
        Eq => "EQ",
        Neq => "NEQ",
        Lt => "LT",
        Lte => "LTE",
        Gt => "GT",
        Gte => "GTE",
    }
}

field_choice! {
    LogicOp {
        And => "AND",
        Or => "OR",
    }
}

field_choice! {
    Bool {
        True => "TRUE",
        False => "FALSE",
    }
}

/// `if` / `else if` / `else`. Places its own instrumentation: the prefix once
/// before the chain and the suffix at the top of every branch.
pub(super) fn controls_if(g: &mut Generator<'_>, kind: BlockKind, node: &Node) -> Result<Generated> {
    let mut code = g.prefix_for(node).unwrap_or_default();
    let suffix = g.early_exit_suffix(node);

    let arms = node.extra.else_if_count.saturating_add(1);
    let arms = connected_arity(node, arms, &["IF", "DO"]).max(1);
    for n in 0..arms {
        let condition = g.value_or(node, &format!("IF{n}"), Order::None, "false")?;
        let branch = g.statement_to_code(node, &format!("DO{n}"))?;
        if n > 0 {
            code.push_str(" else ");
        }
        code.push_str(&format!("if ({condition}) {{\n{suffix}{branch}}}"));
    }

    let has_else = kind == BlockKind::ControlsIfElse || node.extra.has_else;
    if has_else || g.suffix_for(node).is_some() {
        let branch = g.statement_to_code(node, "ELSE")?;
        code.push_str(&format!(" else {{\n{suffix}{branch}}}"));
    }

    code.push('\n');
    Ok(Generated::statement(code))
}

pub(super) fn compare(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let op = choice::<CompareOp>(node, "OP")?;
    let (operator, order) = match op {
        CompareOp::Eq => ("==", Order::Equality),
        CompareOp::Neq => ("!=", Order::Equality),
        CompareOp::Lt => ("<", Order::Relational),
        CompareOp::Lte => ("<=", Order::Relational),
        CompareOp::Gt => (">", Order::Relational),
        CompareOp::Gte => (">=", Order::Relational),
    };
    let a = g.value_or(node, "A", order, "0")?;
    let b = g.value_or(node, "B", order, "0")?;
    Ok(Generated::value(format!("{a} {operator} {b}"), order))
}

pub(super) fn operation(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let (operator, order, neutral) = match choice::<LogicOp>(node, "OP")? {
        LogicOp::And => ("&&", Order::LogicalAnd, "true"),
        LogicOp::Or => ("||", Order::LogicalOr, "false"),
    };
    let a = g.value_to_code(node, "A", order)?;
    let b = g.value_to_code(node, "B", order)?;
    let (a, b) = match (a, b) {
        // Nothing to combine
        (None, None) => ("false".to_string(), "false".to_string()),
        (a, b) => (
            a.unwrap_or_else(|| neutral.to_string()),
            b.unwrap_or_else(|| neutral.to_string()),
        ),
    };
    Ok(Generated::value(format!("{a} {operator} {b}"), order))
}

pub(super) fn negate(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let operand = g.value_or(node, "BOOL", Order::LogicalNot, "true")?;
    Ok(Generated::value(format!("!{operand}"), Order::LogicalNot))
}

pub(super) fn boolean(node: &Node) -> Result<Generated> {
    let code = match choice::<Bool>(node, "BOOL")? {
        Bool::True => "true",
        Bool::False => "false",
    };
    Ok(Generated::value(code, Order::Atomic))
}

pub(super) fn null() -> Generated {
    Generated::value("null", Order::Atomic)
}

pub(super) fn ternary(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let condition = g.value_or(node, "IF", Order::Conditional, "false")?;
    let then = g.value_or(node, "THEN", Order::Conditional, "null")?;
    let otherwise = g.value_or(node, "ELSE", Order::Conditional, "null")?;
    Ok(Generated::value(
        format!("{condition} ? {then} : {otherwise}"),
        Order::Conditional,
    ))
}
