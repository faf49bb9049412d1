//! Variable reads and writes.

use cumin_core::Node;

use super::text_field;
use crate::Result;
use crate::generator::{Generated, Generator};
use crate::precedence::Order;

pub(super) fn get(g: &mut Generator<'_>, node: &Node) -> Generated {
    Generated::value(g.variable_name(text_field(node, "VAR")), Order::Atomic)
}

pub(super) fn set(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let value = g.value_or(node, "VALUE", Order::Assignment, "0")?;
    let var = g.variable_name(text_field(node, "VAR"));
    Ok(Generated::statement(format!("{var} = {value};\n")))
}
