//! Translation rules, one per block kind.
//!
//! Rules read fields and generate children through the [`Generator`]; they
//! never bracket their own output. That is left to the composer, driven by
//! the [`Order`](crate::Order) each value rule reports.

use cumin_core::Node;

use crate::generator::{Generated, Generator};
use crate::{Error, Result};

/// Declare a dropdown field's options. The first option is the default for
/// an absent field.
macro_rules! field_choice {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub(crate) enum $name {
            $($variant),+
        }

        impl $crate::rules::FieldChoice for $name {
            const OPTIONS: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }
    };
}

mod colour;
mod logic;
mod loops;
mod procedures;
mod text;
mod variables;

#[cfg(test)]
mod mod_tests;
#[cfg(test)]
mod text_tests;

/// Every block kind the generator knows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    ControlsIf,
    ControlsIfElse,
    LogicCompare,
    LogicOperation,
    LogicNegate,
    LogicBoolean,
    LogicNull,
    LogicTernary,
    ControlsRepeatExt,
    ControlsRepeat,
    ControlsWhileUntil,
    ControlsFor,
    ControlsForEach,
    ControlsFlowStatements,
    ProceduresDefReturn,
    ProceduresDefNoReturn,
    ProceduresCallReturn,
    ProceduresCallNoReturn,
    ProceduresIfReturn,
    VariablesGet,
    VariablesSet,
    VariablesGetDynamic,
    VariablesSetDynamic,
    Text,
    TextMultiline,
    TextJoin,
    TextAppend,
    TextLength,
    TextIsEmpty,
    TextIndexOf,
    TextCharAt,
    TextGetSubstring,
    TextChangeCase,
    TextTrim,
    TextPrint,
    TextPromptExt,
    TextPrompt,
    TextCount,
    TextReplace,
    TextReverse,
    ColourPicker,
    ColourRandom,
    ColourRgb,
    ColourBlend,
}

impl BlockKind {
    pub const ALL: &'static [BlockKind] = &[
        Self::ControlsIf,
        Self::ControlsIfElse,
        Self::LogicCompare,
        Self::LogicOperation,
        Self::LogicNegate,
        Self::LogicBoolean,
        Self::LogicNull,
        Self::LogicTernary,
        Self::ControlsRepeatExt,
        Self::ControlsRepeat,
        Self::ControlsWhileUntil,
        Self::ControlsFor,
        Self::ControlsForEach,
        Self::ControlsFlowStatements,
        Self::ProceduresDefReturn,
        Self::ProceduresDefNoReturn,
        Self::ProceduresCallReturn,
        Self::ProceduresCallNoReturn,
        Self::ProceduresIfReturn,
        Self::VariablesGet,
        Self::VariablesSet,
        Self::VariablesGetDynamic,
        Self::VariablesSetDynamic,
        Self::Text,
        Self::TextMultiline,
        Self::TextJoin,
        Self::TextAppend,
        Self::TextLength,
        Self::TextIsEmpty,
        Self::TextIndexOf,
        Self::TextCharAt,
        Self::TextGetSubstring,
        Self::TextChangeCase,
        Self::TextTrim,
        Self::TextPrint,
        Self::TextPromptExt,
        Self::TextPrompt,
        Self::TextCount,
        Self::TextReplace,
        Self::TextReverse,
        Self::ColourPicker,
        Self::ColourRandom,
        Self::ColourRgb,
        Self::ColourBlend,
    ];

    /// The block type tag as stored in a workspace.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ControlsIf => "controls_if",
            Self::ControlsIfElse => "controls_ifelse",
            Self::LogicCompare => "logic_compare",
            Self::LogicOperation => "logic_operation",
            Self::LogicNegate => "logic_negate",
            Self::LogicBoolean => "logic_boolean",
            Self::LogicNull => "logic_null",
            Self::LogicTernary => "logic_ternary",
            Self::ControlsRepeatExt => "controls_repeat_ext",
            Self::ControlsRepeat => "controls_repeat",
            Self::ControlsWhileUntil => "controls_whileUntil",
            Self::ControlsFor => "controls_for",
            Self::ControlsForEach => "controls_forEach",
            Self::ControlsFlowStatements => "controls_flow_statements",
            Self::ProceduresDefReturn => "procedures_defreturn",
            Self::ProceduresDefNoReturn => "procedures_defnoreturn",
            Self::ProceduresCallReturn => "procedures_callreturn",
            Self::ProceduresCallNoReturn => "procedures_callnoreturn",
            Self::ProceduresIfReturn => "procedures_ifreturn",
            Self::VariablesGet => "variables_get",
            Self::VariablesSet => "variables_set",
            Self::VariablesGetDynamic => "variables_get_dynamic",
            Self::VariablesSetDynamic => "variables_set_dynamic",
            Self::Text => "text",
            Self::TextMultiline => "text_multiline",
            Self::TextJoin => "text_join",
            Self::TextAppend => "text_append",
            Self::TextLength => "text_length",
            Self::TextIsEmpty => "text_isEmpty",
            Self::TextIndexOf => "text_indexOf",
            Self::TextCharAt => "text_charAt",
            Self::TextGetSubstring => "text_getSubstring",
            Self::TextChangeCase => "text_changeCase",
            Self::TextTrim => "text_trim",
            Self::TextPrint => "text_print",
            Self::TextPromptExt => "text_prompt_ext",
            Self::TextPrompt => "text_prompt",
            Self::TextCount => "text_count",
            Self::TextReplace => "text_replace",
            Self::TextReverse => "text_reverse",
            Self::ColourPicker => "colour_picker",
            Self::ColourRandom => "colour_random",
            Self::ColourRgb => "colour_rgb",
            Self::ColourBlend => "colour_blend",
        }
    }

    /// Look up a block type tag.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == name)
    }

    /// The kind of `node`, or [`Error::UnknownKind`].
    pub fn of(node: &Node) -> Result<Self> {
        Self::from_name(&node.kind).ok_or_else(|| Error::UnknownKind {
            node: node.id.clone(),
            kind: node.kind.clone(),
        })
    }

    /// Whether blocks of this kind plug into value slots.
    pub fn is_value(self) -> bool {
        matches!(
            self,
            Self::LogicCompare
                | Self::LogicOperation
                | Self::LogicNegate
                | Self::LogicBoolean
                | Self::LogicNull
                | Self::LogicTernary
                | Self::ProceduresCallReturn
                | Self::VariablesGet
                | Self::VariablesGetDynamic
                | Self::Text
                | Self::TextMultiline
                | Self::TextJoin
                | Self::TextLength
                | Self::TextIsEmpty
                | Self::TextIndexOf
                | Self::TextCharAt
                | Self::TextGetSubstring
                | Self::TextChangeCase
                | Self::TextTrim
                | Self::TextPromptExt
                | Self::TextPrompt
                | Self::TextCount
                | Self::TextReplace
                | Self::TextReverse
                | Self::ColourPicker
                | Self::ColourRandom
                | Self::ColourRgb
                | Self::ColourBlend
        )
    }

    /// Whether `break`/`continue` inside this block target it.
    pub fn is_loop(self) -> bool {
        matches!(
            self,
            Self::ControlsRepeat
                | Self::ControlsRepeatExt
                | Self::ControlsForEach
                | Self::ControlsFor
                | Self::ControlsWhileUntil
        )
    }

    /// Whether the block places its own statement prefix/suffix.
    pub fn suppresses_prefix_suffix(self) -> bool {
        matches!(
            self,
            Self::ControlsIf
                | Self::ControlsIfElse
                | Self::ControlsFlowStatements
                | Self::ProceduresDefReturn
                | Self::ProceduresDefNoReturn
        )
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn dispatch<'a>(
    g: &mut Generator<'a>,
    kind: BlockKind,
    node: &'a Node,
) -> Result<Generated> {
    match kind {
        BlockKind::ControlsIf | BlockKind::ControlsIfElse => logic::controls_if(g, kind, node),
        BlockKind::LogicCompare => logic::compare(g, node),
        BlockKind::LogicOperation => logic::operation(g, node),
        BlockKind::LogicNegate => logic::negate(g, node),
        BlockKind::LogicBoolean => logic::boolean(node),
        BlockKind::LogicNull => Ok(logic::null()),
        BlockKind::LogicTernary => logic::ternary(g, node),

        BlockKind::ControlsRepeatExt | BlockKind::ControlsRepeat => loops::repeat(g, node),
        BlockKind::ControlsWhileUntil => loops::while_until(g, node),
        BlockKind::ControlsFor => loops::for_range(g, node),
        BlockKind::ControlsForEach => loops::for_each(g, node),
        BlockKind::ControlsFlowStatements => loops::flow_statement(g, node),

        BlockKind::ProceduresDefReturn | BlockKind::ProceduresDefNoReturn => {
            procedures::define(g, node)
        }
        BlockKind::ProceduresCallReturn => procedures::call(g, node),
        BlockKind::ProceduresCallNoReturn => procedures::call_statement(g, node),
        BlockKind::ProceduresIfReturn => procedures::if_return(g, node),

        BlockKind::VariablesGet | BlockKind::VariablesGetDynamic => Ok(variables::get(g, node)),
        BlockKind::VariablesSet | BlockKind::VariablesSetDynamic => variables::set(g, node),

        BlockKind::Text => Ok(text::literal(node)),
        BlockKind::TextMultiline => Ok(text::multiline(node)),
        BlockKind::TextJoin => text::join(g, node),
        BlockKind::TextAppend => text::append(g, node),
        BlockKind::TextLength => text::length(g, node),
        BlockKind::TextIsEmpty => text::is_empty(g, node),
        BlockKind::TextIndexOf => text::index_of(g, node),
        BlockKind::TextCharAt => text::char_at(g, node),
        BlockKind::TextGetSubstring => text::substring(g, node),
        BlockKind::TextChangeCase => text::change_case(g, node),
        BlockKind::TextTrim => text::trim(g, node),
        BlockKind::TextPrint => text::print(g, node),
        BlockKind::TextPromptExt | BlockKind::TextPrompt => text::prompt(g, node),
        BlockKind::TextCount => text::count(g, node),
        BlockKind::TextReplace => text::replace(g, node),
        BlockKind::TextReverse => text::reverse(g, node),

        BlockKind::ColourPicker => Ok(colour::picker(node)),
        BlockKind::ColourRandom => Ok(colour::random(g)),
        BlockKind::ColourRgb => colour::rgb(g, node),
        BlockKind::ColourBlend => colour::blend(g, node),
    }
}

/// A dropdown field's closed set of options.
pub(crate) trait FieldChoice: Sized + Copy + 'static {
    /// Options in dropdown order.
    const OPTIONS: &'static [Self];

    fn as_str(self) -> &'static str;
}

/// Read dropdown `field`. Absent means the first option; anything outside
/// the options is fatal.
pub(crate) fn choice<T: FieldChoice>(node: &Node, field: &str) -> Result<T> {
    let Some(value) = node.field(field) else {
        return Ok(T::OPTIONS[0]);
    };
    T::OPTIONS
        .iter()
        .copied()
        .find(|option| option.as_str() == value)
        .ok_or_else(|| invalid_field(node, field, value))
}

/// Arity of a variadic block, trimmed to its last connected numbered slot.
///
/// `declared` comes from the mutation state; arms past the highest
/// `<prefix><n>` slot in use are empty and dropped.
pub(crate) fn connected_arity(node: &Node, declared: usize, prefixes: &[&str]) -> usize {
    let connected = node
        .values
        .keys()
        .chain(node.statements.keys())
        .filter_map(|slot| {
            prefixes
                .iter()
                .find_map(|prefix| slot.strip_prefix(prefix)?.parse::<usize>().ok())
        })
        .map(|n| n.saturating_add(1))
        .max()
        .unwrap_or(0);
    declared.min(connected)
}

/// Read free-text `field`; absent is empty.
pub(crate) fn text_field<'n>(node: &'n Node, field: &str) -> &'n str {
    node.field(field).unwrap_or("")
}

pub(crate) fn invalid_field(node: &Node, field: &str, value: &str) -> Error {
    Error::InvalidField {
        node: node.id.clone(),
        kind: node.kind.clone(),
        field: field.to_string(),
        value: value.to_string(),
    }
}
