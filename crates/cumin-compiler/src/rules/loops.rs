//! Loops and the statements that leave them.

use cumin_core::Node;

use super::{choice, invalid_field, text_field};
use crate::Result;
use crate::generator::{Generated, Generator};
use crate::literal::{format_number, is_number, is_word, parse_number};
use crate::precedence::Order;

field_choice! {
    LoopMode {
        While => "WHILE",
        Until => "UNTIL",
    }
}

field_choice! {
    Flow {
        Break => "BREAK",
        Continue => "CONTINUE",
    }
}

/// `repeat N times`. The count comes from the `TIMES` field when the block
/// has one, otherwise from the `TIMES` value slot.
pub(super) fn repeat(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let repeats = match node.field("TIMES") {
        Some(raw) => {
            let count = parse_number(raw).ok_or_else(|| invalid_field(node, "TIMES", raw))?;
            format_number(count)
        }
        None => g.value_or(node, "TIMES", Order::Assignment, "0")?,
    };
    let branch = g.statement_to_code(node, "DO")?;
    let branch = g.add_loop_trap(branch, node);

    let mut code = String::new();
    let counter = g.temporary("count");
    let end = if is_word(&repeats) || is_number(&repeats) {
        repeats
    } else {
        let end = g.temporary("repeat_end");
        code.push_str(&format!("var {end} = {repeats};\n"));
        end
    };
    code.push_str(&format!(
        "for (var {counter} = 0; {counter} < {end}; {counter}++) {{\n{branch}}}\n"
    ));
    Ok(Generated::statement(code))
}

pub(super) fn while_until(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let until = choice::<LoopMode>(node, "MODE")? == LoopMode::Until;
    let order = if until { Order::LogicalNot } else { Order::None };
    let condition = g.value_or(node, "BOOL", order, "false")?;
    let branch = g.statement_to_code(node, "DO")?;
    let branch = g.add_loop_trap(branch, node);

    let condition = if until {
        format!("!{condition}")
    } else {
        condition
    };
    Ok(Generated::statement(format!(
        "while ({condition}) {{\n{branch}}}\n"
    )))
}

/// Counted loop over `VAR` from `FROM` to `TO` by `BY`.
///
/// Literal bounds produce a plain `for`; anything else is cached in
/// temporaries and the direction is decided once at run time.
pub(super) fn for_range(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let var = g.variable_name(text_field(node, "VAR"));
    let from = g.value_or(node, "FROM", Order::Assignment, "0")?;
    let to = g.value_or(node, "TO", Order::Assignment, "0")?;
    let by = g.value_or(node, "BY", Order::Assignment, "1")?;
    let branch = g.statement_to_code(node, "DO")?;
    let branch = g.add_loop_trap(branch, node);

    let literal = |text: &str| {
        if is_number(text) {
            parse_number(text)
        } else {
            None
        }
    };

    if let (Some(start), Some(end), Some(step)) = (literal(&from), literal(&to), literal(&by)) {
        let up = start <= end;
        let mut code = format!(
            "for ({var} = {from}; {var}{}{to}; {var}",
            if up { " <= " } else { " >= " }
        );
        let step = step.abs();
        if step == 1.0 {
            code.push_str(if up { "++" } else { "--" });
        } else {
            code.push_str(if up { " += " } else { " -= " });
            code.push_str(&format_number(step));
        }
        code.push_str(&format!(") {{\n{branch}}}\n"));
        return Ok(Generated::statement(code));
    }

    let mut code = String::new();
    let start_var = if is_word(&from) || is_number(&from) {
        from
    } else {
        let start_var = g.temporary(&format!("{var}_start"));
        code.push_str(&format!("var {start_var} = {from};\n"));
        start_var
    };
    let end_var = if is_word(&to) || is_number(&to) {
        to
    } else {
        let end_var = g.temporary(&format!("{var}_end"));
        code.push_str(&format!("var {end_var} = {to};\n"));
        end_var
    };

    let inc = g.temporary(&format!("{var}_inc"));
    match literal(&by) {
        Some(step) => code.push_str(&format!("var {inc} = {};\n", format_number(step.abs()))),
        None => code.push_str(&format!("var {inc} = Math.abs({by});\n")),
    }
    code.push_str(&format!("if ({start_var} > {end_var}) {{\n"));
    code.push_str(&format!("{}{inc} = -{inc};\n", g.indent()));
    code.push_str("}\n");
    code.push_str(&format!(
        "for ({var} = {start_var}; {inc} >= 0 ? {var} <= {end_var} : {var} >= {end_var}; {var} += {inc}) {{\n{branch}}}\n"
    ));
    Ok(Generated::statement(code))
}

pub(super) fn for_each(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let var = g.variable_name(text_field(node, "VAR"));
    let list = g.value_or(node, "LIST", Order::Assignment, "[]")?;
    let branch = g.statement_to_code(node, "DO")?;
    let branch = g.add_loop_trap(branch, node);

    let mut code = String::new();
    let list_var = if is_word(&list) {
        list
    } else {
        let list_var = g.temporary(&format!("{var}_list"));
        code.push_str(&format!("var {list_var} = {list};\n"));
        list_var
    };
    let index_var = g.temporary(&format!("{var}_index"));
    let branch = format!(
        "{}{var} = {list_var}[{index_var}];\n{branch}",
        g.indent()
    );
    code.push_str(&format!(
        "for (var {index_var} in {list_var}) {{\n{branch}}}\n"
    ));
    Ok(Generated::statement(code))
}

/// `break` / `continue`.
///
/// Control leaves before the normal suffix and before the enclosing loop's
/// next prefix would run, so both are emitted ahead of the jump.
pub(super) fn flow_statement(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let flow = choice::<Flow>(node, "FLOW")?;

    let mut code = g.prefix_for(node).unwrap_or_default();
    if let Some(suffix) = g.suffix_for(node) {
        code.push_str(&suffix);
    }
    if let Some(enclosing) = g.surrounding_loop() {
        if let Some(prefix) = g.prefix_for(enclosing) {
            code.push_str(&prefix);
        }
    }

    code.push_str(match flow {
        Flow::Break => "break;\n",
        Flow::Continue => "continue;\n",
    });
    Ok(Generated::statement(code))
}
