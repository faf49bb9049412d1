//! Colour literals and the helpers that mix them.

use cumin_core::Node;

use crate::Result;
use crate::generator::{Generated, Generator};
use crate::literal::quote;
use crate::precedence::Order;

const RANDOM: &[&str] = &[
    "function %FN%() {",
    "  var num = Math.floor(Math.random() * Math.pow(2, 24));",
    "  return '#' + ('00000' + num.toString(16)).substr(-6);",
    "}",
];

const RGB: &[&str] = &[
    "function %FN%(r, g, b) {",
    "  r = Math.max(Math.min(Number(r), 100), 0) * 2.55;",
    "  g = Math.max(Math.min(Number(g), 100), 0) * 2.55;",
    "  b = Math.max(Math.min(Number(b), 100), 0) * 2.55;",
    "  r = ('0' + (Math.round(r) || 0).toString(16)).slice(-2);",
    "  g = ('0' + (Math.round(g) || 0).toString(16)).slice(-2);",
    "  b = ('0' + (Math.round(b) || 0).toString(16)).slice(-2);",
    "  return '#' + r + g + b;",
    "}",
];

const BLEND: &[&str] = &[
    "function %FN%(c1, c2, ratio) {",
    "  ratio = Math.max(Math.min(Number(ratio), 1), 0);",
    "  var r1 = parseInt(c1.substring(1, 3), 16);",
    "  var g1 = parseInt(c1.substring(3, 5), 16);",
    "  var b1 = parseInt(c1.substring(5, 7), 16);",
    "  var r2 = parseInt(c2.substring(1, 3), 16);",
    "  var g2 = parseInt(c2.substring(3, 5), 16);",
    "  var b2 = parseInt(c2.substring(5, 7), 16);",
    "  var r = Math.round(r1 * (1 - ratio) + r2 * ratio);",
    "  var g = Math.round(g1 * (1 - ratio) + g2 * ratio);",
    "  var b = Math.round(b1 * (1 - ratio) + b2 * ratio);",
    "  r = ('0' + (r || 0).toString(16)).slice(-2);",
    "  g = ('0' + (g || 0).toString(16)).slice(-2);",
    "  b = ('0' + (b || 0).toString(16)).slice(-2);",
    "  return '#' + r + g + b;",
    "}",
];

pub(super) fn picker(node: &Node) -> Generated {
    let colour = node.field("COLOUR").unwrap_or("#ff0000");
    Generated::value(quote(colour), Order::Atomic)
}

pub(super) fn random(g: &mut Generator<'_>) -> Generated {
    let helper = g.provide("colourRandom", RANDOM);
    Generated::value(format!("{helper}()"), Order::FunctionCall)
}

/// Colour from red, green and blue percentages.
pub(super) fn rgb(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let red = g.value_or(node, "RED", Order::Comma, "0")?;
    let green = g.value_or(node, "GREEN", Order::Comma, "0")?;
    let blue = g.value_or(node, "BLUE", Order::Comma, "0")?;
    let helper = g.provide("colourRgb", RGB);
    Ok(Generated::value(
        format!("{helper}({red}, {green}, {blue})"),
        Order::FunctionCall,
    ))
}

pub(super) fn blend(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let c1 = g.value_or(node, "COLOUR1", Order::Comma, "'#000000'")?;
    let c2 = g.value_or(node, "COLOUR2", Order::Comma, "'#000000'")?;
    let ratio = g.value_or(node, "RATIO", Order::Comma, "0.5")?;
    let helper = g.provide("colourBlend", BLEND);
    Ok(Generated::value(
        format!("{helper}({c1}, {c2}, {ratio})"),
        Order::FunctionCall,
    ))
}
