//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("cumin")
        .about("Generate Cumin code from block workspaces")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(check_command())
        .subcommand(kinds_command())
}

/// Generate code for a workspace.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate Cumin code for a workspace")
        .after_help(
            r#"EXAMPLES:
  cumin generate workspace.json                    # print to stdout
  cumin generate workspace.json -o program.cumin   # write to a file
  cat workspace.json | cumin generate -            # read stdin
  cumin generate ws.json --one-based --indent 4
  cumin generate ws.json --statement-prefix 'highlight(%1);'"#,
        )
        .arg(input_arg())
        .arg(output_arg())
        .arg(one_based_arg())
        .arg(zero_based_arg())
        .arg(indent_arg())
        .arg(statement_prefix_arg())
        .arg(statement_suffix_arg())
        .arg(loop_trap_arg())
        .arg(reserve_arg())
        .arg(verbose_arg())
}

/// Validate a workspace by generating it and discarding the output.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Check that a workspace generates without errors")
        .after_help(
            r#"EXAMPLES:
  cumin check workspace.json
  cat workspace.json | cumin check -"#,
        )
        .arg(input_arg())
        .arg(one_based_arg())
        .arg(zero_based_arg())
        .arg(verbose_arg())
}

/// List supported block kinds.
pub fn kinds_command() -> Command {
    Command::new("kinds").about("List supported block kinds")
}
