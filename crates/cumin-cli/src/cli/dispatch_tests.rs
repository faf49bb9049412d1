//! Tests for CLI dispatch logic: argument parsing and conversion into the
//! generator's `Config`.

use std::path::PathBuf;

use cumin_compiler::Config;

use super::*;
use crate::cli::commands::{check_command, generate_command, kinds_command};
use crate::commands::check::CheckArgs;
use crate::commands::generate::GenerateArgs;

fn generate_args(argv: &[&str]) -> GenerateArgs {
    let m = generate_command()
        .try_get_matches_from(argv)
        .expect("arguments should parse");
    GenerateParams::from_matches(&m).into()
}

#[test]
fn generate_defaults() {
    let args = generate_args(&["generate", "ws.json"]);
    assert_eq!(args.input, PathBuf::from("ws.json"));
    assert_eq!(args.output, None);
    assert_eq!(args.config, Config::default());
}

#[test]
fn generate_accepts_stdin_and_output() {
    let args = generate_args(&["generate", "-", "-o", "out.cumin"]);
    assert_eq!(args.input, PathBuf::from("-"));
    assert_eq!(args.output, Some(PathBuf::from("out.cumin")));
}

#[test]
fn generate_requires_input() {
    let result = generate_command().try_get_matches_from(["generate"]);
    assert!(result.is_err());
}

#[test]
fn index_base_flags_override_workspace() {
    let args = generate_args(&["generate", "ws.json", "--one-based"]);
    assert_eq!(args.config, Config::new().one_based_index(true));

    let args = generate_args(&["generate", "ws.json", "--zero-based"]);
    assert_eq!(args.config, Config::new().one_based_index(false));
}

#[test]
fn index_base_flags_conflict() {
    let result =
        generate_command().try_get_matches_from(["generate", "ws.json", "--one-based", "--zero-based"]);
    assert!(result.is_err());
}

#[test]
fn indent_is_a_space_count() {
    let args = generate_args(&["generate", "ws.json", "--indent", "4"]);
    assert_eq!(args.config, Config::new().indent("    "));

    let result = generate_command().try_get_matches_from(["generate", "ws.json", "--indent", "0"]);
    assert!(result.is_err());
}

#[test]
fn snippets_gain_a_trailing_newline() {
    let args = generate_args(&[
        "generate",
        "ws.json",
        "--statement-prefix",
        "highlight(%1);",
        "--statement-suffix",
        "done(%1);\n",
        "--loop-trap",
        "if (--budget == 0) throw 'Infinite loop.';",
    ]);
    assert_eq!(
        args.config,
        Config::new()
            .statement_prefix("highlight(%1);\n")
            .statement_suffix("done(%1);\n")
            .loop_trap("if (--budget == 0) throw 'Infinite loop.';\n")
    );
}

#[test]
fn reserve_is_repeatable() {
    let args = generate_args(&["generate", "ws.json", "--reserve", "score", "--reserve", "lives"]);
    assert_eq!(args.config, Config::new().reserve("score").reserve("lives"));
}

#[test]
fn verbose_is_counted() {
    let m = generate_command()
        .try_get_matches_from(["generate", "ws.json", "-vv"])
        .unwrap();
    assert_eq!(GenerateParams::from_matches(&m).verbose, 2);

    let m = check_command()
        .try_get_matches_from(["check", "ws.json"])
        .unwrap();
    assert_eq!(CheckParams::from_matches(&m).verbose, 0);
}

#[test]
fn check_maps_index_base_only() {
    let m = check_command()
        .try_get_matches_from(["check", "ws.json", "--one-based"])
        .unwrap();
    let args: CheckArgs = CheckParams::from_matches(&m).into();
    assert_eq!(args.input, PathBuf::from("ws.json"));
    assert_eq!(args.config, Config::new().one_based_index(true));

    let result = check_command().try_get_matches_from(["check", "ws.json", "--indent", "4"]);
    assert!(result.is_err());
}

#[test]
fn kinds_takes_no_arguments() {
    assert!(kinds_command().try_get_matches_from(["kinds"]).is_ok());
    assert!(kinds_command().try_get_matches_from(["kinds", "extra"]).is_err());
}

#[test]
fn cli_requires_a_subcommand() {
    assert!(build_cli().try_get_matches_from(["cumin"]).is_err());
    assert!(build_cli().try_get_matches_from(["cumin", "kinds"]).is_ok());
}
