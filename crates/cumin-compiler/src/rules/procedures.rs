//! User procedures: definitions are hoisted, calls stay inline.

use cumin_core::Node;

use super::text_field;
use crate::Result;
use crate::generator::{Generated, Generator};
use crate::literal::prefix_lines;
use crate::precedence::Order;

/// `function name(args) { ... }`, registered as a definition.
///
/// The body gets its own naming scope. The block's prefix and suffix run on
/// entry, and again before the return when there is both a body and a value.
pub(super) fn define(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let name = g.procedure_name(text_field(node, "NAME"));
    let indent = g.indent();

    let mut entry = g.prefix_for(node).unwrap_or_default();
    if let Some(suffix) = g.suffix_for(node) {
        entry.push_str(&suffix);
    }
    let entry = prefix_lines(&entry, indent);
    let loop_trap = g.indented_loop_trap(node).unwrap_or_default();

    let (branch, returned) = g.in_child_scope(|g| {
        let branch = g.statement_to_code(node, "STACK")?;
        let returned = g.value_to_code(node, "RETURN", Order::None)?;
        Ok((branch, returned))
    })?;

    let (before_return, return_line) = match returned {
        Some(value) => {
            let revisit = if branch.is_empty() { "" } else { entry.as_str() };
            (revisit, format!("{indent}return {value};\n"))
        }
        None => ("", String::new()),
    };

    let args: Vec<String> = node
        .extra
        .params
        .iter()
        .map(|param| g.variable_name(param))
        .collect();

    let code = format!(
        "{}function {name}({}) {{\n{entry}{loop_trap}{branch}{before_return}{return_line}}}",
        g.comment_lines(node),
        args.join(", "),
    );
    g.define_procedure(&name, code);
    Ok(Generated::Hoisted)
}

pub(super) fn call(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let name = g.procedure_name(text_field(node, "NAME"));
    let args = (0..node.extra.params.len())
        .map(|i| g.value_or(node, &format!("ARG{i}"), Order::Comma, "null"))
        .collect::<Result<Vec<_>>>()?;
    Ok(Generated::value(
        format!("{name}({})", args.join(", ")),
        Order::FunctionCall,
    ))
}

pub(super) fn call_statement(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    match call(g, node)? {
        Generated::Value { code, .. } => Ok(Generated::statement(format!("{code};\n"))),
        other => Ok(other),
    }
}

/// `if (cond) { return ...; }`. The suffix runs inside the branch, since the
/// one after the statement is skipped when the return fires.
pub(super) fn if_return(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let condition = g.value_or(node, "CONDITION", Order::None, "false")?;
    let mut code = format!("if ({condition}) {{\n");
    code.push_str(&g.early_exit_suffix(node));

    if node.extra.has_return_value.unwrap_or(true) {
        let value = g.value_or(node, "VALUE", Order::None, "null")?;
        code.push_str(&format!("{}return {value};\n", g.indent()));
    } else {
        code.push_str(&format!("{}return;\n", g.indent()));
    }
    code.push_str("}\n");
    Ok(Generated::statement(code))
}
