//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Workspace JSON file (positional).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Workspace JSON file (use \"-\" for stdin)")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write generated code to FILE instead of stdout")
}

/// Force one-based indices (--one-based).
pub fn one_based_arg() -> Arg {
    Arg::new("one_based")
        .long("one-based")
        .action(ArgAction::SetTrue)
        .conflicts_with("zero_based")
        .help("Treat user-facing indices as one-based, overriding the workspace")
}

/// Force zero-based indices (--zero-based).
pub fn zero_based_arg() -> Arg {
    Arg::new("zero_based")
        .long("zero-based")
        .action(ArgAction::SetTrue)
        .help("Treat user-facing indices as zero-based, overriding the workspace")
}

/// Indent width in spaces (--indent).
pub fn indent_arg() -> Arg {
    Arg::new("indent")
        .long("indent")
        .value_name("N")
        .value_parser(value_parser!(u8).range(1..=16))
        .help("Spaces per indentation level [default: 2]")
}

/// Snippet before every statement (--statement-prefix).
pub fn statement_prefix_arg() -> Arg {
    Arg::new("statement_prefix")
        .long("statement-prefix")
        .value_name("SNIPPET")
        .help("Code injected before every statement (%1 is the block id)")
}

/// Snippet after every statement (--statement-suffix).
pub fn statement_suffix_arg() -> Arg {
    Arg::new("statement_suffix")
        .long("statement-suffix")
        .value_name("SNIPPET")
        .help("Code injected after every statement (%1 is the block id)")
}

/// Snippet at the top of every loop body (--loop-trap).
pub fn loop_trap_arg() -> Arg {
    Arg::new("loop_trap")
        .long("loop-trap")
        .value_name("SNIPPET")
        .help("Code injected at the top of every loop body (%1 is the block id)")
}

/// Extra reserved identifier (--reserve, repeatable).
pub fn reserve_arg() -> Arg {
    Arg::new("reserve")
        .long("reserve")
        .value_name("WORD")
        .action(ArgAction::Append)
        .help("Identifier generated code must not use (repeatable)")
}

/// Verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Log generation progress to stderr (-vv for every block)")
}
