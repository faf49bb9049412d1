//! Text literals and string operations.

use cumin_core::Node;
use cumin_core::utils::to_pascal_case;

use super::{FieldChoice, choice, connected_arity, text_field};
use crate::Result;
use crate::generator::{Generated, Generator};
use crate::literal::{is_quoted_word, is_string_literal, multiline_quote, quote};
use crate::precedence::Order;

field_choice! {
    Occurrence {
        First => "FIRST",
        Last => "LAST",
    }
}

field_choice! {
    CharAt {
        FromStart => "FROM_START",
        FromEnd => "FROM_END",
        First => "FIRST",
        Last => "LAST",
        Random => "RANDOM",
    }
}

field_choice! {
    SubstringStart {
        FromStart => "FROM_START",
        FromEnd => "FROM_END",
        First => "FIRST",
    }
}

field_choice! {
    SubstringEnd {
        FromStart => "FROM_START",
        FromEnd => "FROM_END",
        Last => "LAST",
    }
}

field_choice! {
    Case {
        Uppercase => "UPPERCASE",
        Lowercase => "LOWERCASE",
        Titlecase => "TITLECASE",
    }
}

field_choice! {
    TrimMode {
        Both => "BOTH",
        Left => "LEFT",
        Right => "RIGHT",
    }
}

field_choice! {
    PromptType {
        Text => "TEXT",
        Number => "NUMBER",
    }
}

const RANDOM_LETTER: &[&str] = &[
    "function %FN%(text) {",
    "  var x = Math.floor(Math.random() * text.length);",
    "  return text[x];",
    "}",
];

const TITLE_CASE: &[&str] = &[
    "function %FN%(str) {",
    r"  return str.replace(/\S+/g,",
    "      function(txt) {return txt[0].toUpperCase() + txt.substring(1).toLowerCase();});",
    "}",
];

const COUNT: &[&str] = &[
    "function %FN%(haystack, needle) {",
    "  if (needle.length === 0) {",
    "    return haystack.length + 1;",
    "  } else {",
    "    return haystack.split(needle).length - 1;",
    "  }",
    "}",
];

const REPLACE: &[&str] = &[
    "function %FN%(haystack, needle, replacement) {",
    r#"  needle = needle.replace(/([-()\[\]{}+?*.$\^|,:#<!\\])/g,"\\$1")"#,
    r#"                 .replace(/\x08/g,"\\x08");"#,
    "  return haystack.replace(new RegExp(needle, 'g'), replacement);",
    "}",
];

/// Wrap `value` in `String(...)` unless it is already a string literal.
fn force_string(value: &str) -> String {
    if is_string_literal(value) {
        value.to_string()
    } else {
        format!("String({value})")
    }
}

pub(super) fn literal(node: &Node) -> Generated {
    Generated::value(quote(text_field(node, "TEXT")), Order::Atomic)
}

/// Multi-line text keeps its line structure; more than one line is bracketed
/// so the concatenation survives any context.
pub(super) fn multiline(node: &Node) -> Generated {
    let code = multiline_quote(text_field(node, "TEXT"));
    let code = if code.contains('\n') {
        format!("({code})")
    } else {
        code
    };
    Generated::value(code, Order::Atomic)
}

pub(super) fn join(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    match connected_arity(node, node.extra.item_count.unwrap_or(2), &["ADD"]) {
        0 => Ok(Generated::value("''", Order::Atomic)),
        1 => {
            let element = g.value_or(node, "ADD0", Order::None, "''")?;
            Ok(Generated::value(force_string(&element), Order::FunctionCall))
        }
        2 => {
            let first = g.value_or(node, "ADD0", Order::None, "''")?;
            let second = g.value_or(node, "ADD1", Order::None, "''")?;
            Ok(Generated::value(
                format!("{} + {}", force_string(&first), force_string(&second)),
                Order::Addition,
            ))
        }
        count => {
            let elements = (0..count)
                .map(|i| g.value_or(node, &format!("ADD{i}"), Order::Comma, "''"))
                .collect::<Result<Vec<_>>>()?;
            Ok(Generated::value(
                format!("[{}].join('')", elements.join(",")),
                Order::FunctionCall,
            ))
        }
    }
}

pub(super) fn append(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let var = g.variable_name(text_field(node, "VAR"));
    let value = g.value_or(node, "TEXT", Order::None, "''")?;
    Ok(Generated::statement(format!(
        "{var} += {};\n",
        force_string(&value)
    )))
}

pub(super) fn length(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let text = g.value_or(node, "VALUE", Order::FunctionCall, "''")?;
    Ok(Generated::value(format!("{text}.length"), Order::Member))
}

pub(super) fn is_empty(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let text = g.value_or(node, "VALUE", Order::Member, "''")?;
    Ok(Generated::value(format!("!{text}.length"), Order::LogicalNot))
}

pub(super) fn index_of(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let method = match choice::<Occurrence>(node, "END")? {
        Occurrence::First => "indexOf",
        Occurrence::Last => "lastIndexOf",
    };
    let needle = g.value_or(node, "FIND", Order::None, "''")?;
    let text = g.value_or(node, "VALUE", Order::Member, "''")?;
    let code = format!("{text}.{method}({needle})");
    if g.one_based() {
        return Ok(Generated::value(format!("{code} + 1"), Order::Addition));
    }
    Ok(Generated::value(code, Order::FunctionCall))
}

pub(super) fn char_at(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let at = choice::<CharAt>(node, "WHERE")?;
    let text_order = if at == CharAt::Random {
        Order::None
    } else {
        Order::Member
    };
    let text = g.value_or(node, "VALUE", text_order, "''")?;

    let code = match at {
        CharAt::First => format!("{text}.charAt(0)"),
        CharAt::Last => format!("{text}.slice(-1)"),
        CharAt::FromStart => {
            let index = g.adjusted_index(node, "AT", 0, false, Order::None)?;
            format!("{text}.charAt({index})")
        }
        CharAt::FromEnd => {
            let index = g.adjusted_index(node, "AT", 1, true, Order::None)?;
            format!("{text}.slice({index}).charAt(0)")
        }
        CharAt::Random => {
            let helper = g.provide("textRandomLetter", RANDOM_LETTER);
            format!("{helper}({text})")
        }
    };
    Ok(Generated::value(code, Order::FunctionCall))
}

/// Index expression inside a `subsequence*` helper.
fn helper_index(at: &str, from_end: bool, fixed: Option<&str>) -> String {
    match fixed {
        Some(fixed) => fixed.to_string(),
        None if from_end => format!("sequence.length - 1 - {at}"),
        None => at.to_string(),
    }
}

/// Substring between two positions.
///
/// Positions that need the text's length read it inline when the text is a
/// plain word or literal; otherwise a `subsequence<Start><End>` helper
/// evaluates the text once.
pub(super) fn substring(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let text = g.value_or(node, "STRING", Order::FunctionCall, "''")?;
    let start = choice::<SubstringStart>(node, "WHERE1")?;
    let end = choice::<SubstringEnd>(node, "WHERE2")?;

    if start == SubstringStart::First && end == SubstringEnd::Last {
        return Ok(Generated::value(text, Order::FunctionCall));
    }

    let needs_length = start == SubstringStart::FromEnd
        || matches!(end, SubstringEnd::FromEnd | SubstringEnd::Last);
    if is_quoted_word(&text) || !needs_length {
        let at1 = match start {
            SubstringStart::FromStart => g.adjusted_index(node, "AT1", 0, false, Order::None)?,
            SubstringStart::FromEnd => {
                let at = g.adjusted_index(node, "AT1", 1, false, Order::Subtraction)?;
                format!("{text}.length - {at}")
            }
            SubstringStart::First => "0".to_string(),
        };
        let at2 = match end {
            SubstringEnd::FromStart => g.adjusted_index(node, "AT2", 1, false, Order::None)?,
            SubstringEnd::FromEnd => {
                let at = g.adjusted_index(node, "AT2", 0, false, Order::Subtraction)?;
                format!("{text}.length - {at}")
            }
            SubstringEnd::Last => format!("{text}.length"),
        };
        return Ok(Generated::value(
            format!("{text}.slice({at1}, {at2})"),
            Order::FunctionCall,
        ));
    }

    let start_takes_at = start != SubstringStart::First;
    let end_takes_at = end != SubstringEnd::Last;
    let at1 = if start_takes_at {
        Some(g.adjusted_index(node, "AT1", 0, false, Order::None)?)
    } else {
        None
    };
    let at2 = if end_takes_at {
        Some(g.adjusted_index(node, "AT2", 0, false, Order::None)?)
    } else {
        None
    };

    let mut params = String::from("sequence");
    if start_takes_at {
        params.push_str(", at1");
    }
    if end_takes_at {
        params.push_str(", at2");
    }
    let start_index = helper_index(
        "at1",
        start == SubstringStart::FromEnd,
        (start == SubstringStart::First).then_some("0"),
    );
    let end_index = helper_index(
        "at2",
        end == SubstringEnd::FromEnd,
        (end == SubstringEnd::Last).then_some("sequence.length - 1"),
    );
    let lines = [
        format!("function %FN%({params}) {{"),
        format!("  var start = {start_index};"),
        format!("  var end = {end_index} + 1;"),
        "  return sequence.slice(start, end);".to_string(),
        "}".to_string(),
    ];
    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
    let desired = format!(
        "subsequence{}{}",
        to_pascal_case(start.as_str()),
        to_pascal_case(end.as_str())
    );
    let helper = g.provide(&desired, &lines);

    let mut code = format!("{helper}({text}");
    for at in at1.iter().chain(at2.iter()) {
        code.push_str(", ");
        code.push_str(at);
    }
    code.push(')');
    Ok(Generated::value(code, Order::FunctionCall))
}

pub(super) fn change_case(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let method = match choice::<Case>(node, "CASE")? {
        Case::Uppercase => Some(".toUpperCase()"),
        Case::Lowercase => Some(".toLowerCase()"),
        Case::Titlecase => None,
    };
    let text_order = if method.is_some() {
        Order::Member
    } else {
        Order::None
    };
    let text = g.value_or(node, "TEXT", text_order, "''")?;

    let code = match method {
        Some(method) => format!("{text}{method}"),
        None => {
            let helper = g.provide("textToTitleCase", TITLE_CASE);
            format!("{helper}({text})")
        }
    };
    Ok(Generated::value(code, Order::FunctionCall))
}

pub(super) fn trim(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let method = match choice::<TrimMode>(node, "MODE")? {
        TrimMode::Both => ".trim()",
        TrimMode::Left => r".replace(/^[\s\xa0]+/, '')",
        TrimMode::Right => r".replace(/[\s\xa0]+$/, '')",
    };
    let text = g.value_or(node, "TEXT", Order::Member, "''")?;
    Ok(Generated::value(format!("{text}{method}"), Order::FunctionCall))
}

pub(super) fn print(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let message = g.value_or(node, "TEXT", Order::None, "''")?;
    Ok(Generated::statement(format!("window.alert({message});\n")))
}

/// Prompt for input. The message is the `TEXT` field when the block has one,
/// otherwise the `TEXT` value slot.
pub(super) fn prompt(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let message = match node.field("TEXT") {
        Some(text) => quote(text),
        None => g.value_or(node, "TEXT", Order::None, "''")?,
    };
    let code = format!("window.prompt({message})");
    let code = match choice::<PromptType>(node, "TYPE")? {
        PromptType::Text => code,
        PromptType::Number => format!("Number({code})"),
    };
    Ok(Generated::value(code, Order::FunctionCall))
}

pub(super) fn count(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let text = g.value_or(node, "TEXT", Order::Member, "''")?;
    let needle = g.value_or(node, "SUB", Order::None, "''")?;
    let helper = g.provide("textCount", COUNT);
    Ok(Generated::value(
        format!("{helper}({text}, {needle})"),
        Order::Subtraction,
    ))
}

pub(super) fn replace(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let text = g.value_or(node, "TEXT", Order::Member, "''")?;
    let from = g.value_or(node, "FROM", Order::None, "''")?;
    let to = g.value_or(node, "TO", Order::None, "''")?;
    let helper = g.provide("textReplace", REPLACE);
    Ok(Generated::value(
        format!("{helper}({text}, {from}, {to})"),
        Order::Member,
    ))
}

pub(super) fn reverse(g: &mut Generator<'_>, node: &Node) -> Result<Generated> {
    let text = g.value_or(node, "TEXT", Order::Member, "''")?;
    Ok(Generated::value(
        format!("{text}.split('').reverse().join('')"),
        Order::Member,
    ))
}
