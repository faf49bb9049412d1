//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! Conversion is where flags become a [`Config`]: snippets given on the
//! command line get the trailing newline the generator expects.

use std::path::PathBuf;

use clap::ArgMatches;
use cumin_compiler::Config;

use crate::commands::check::CheckArgs;
use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub one_based: Option<bool>,
    pub indent: Option<u8>,
    pub statement_prefix: Option<String>,
    pub statement_suffix: Option<String>,
    pub loop_trap: Option<String>,
    pub reserved: Vec<String>,
    pub verbose: u8,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: input_path(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            one_based: parse_index_base(m),
            indent: m.get_one::<u8>("indent").copied(),
            statement_prefix: m.get_one::<String>("statement_prefix").cloned(),
            statement_suffix: m.get_one::<String>("statement_suffix").cloned(),
            loop_trap: m.get_one::<String>("loop_trap").cloned(),
            reserved: m
                .get_many::<String>("reserve")
                .map(|words| words.cloned().collect())
                .unwrap_or_default(),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        let mut config = Config::new();
        if let Some(one_based) = p.one_based {
            config = config.one_based_index(one_based);
        }
        if let Some(width) = p.indent {
            config = config.indent(" ".repeat(width as usize));
        }
        if let Some(prefix) = p.statement_prefix {
            config = config.statement_prefix(snippet(prefix));
        }
        if let Some(suffix) = p.statement_suffix {
            config = config.statement_suffix(snippet(suffix));
        }
        if let Some(trap) = p.loop_trap {
            config = config.loop_trap(snippet(trap));
        }
        for word in p.reserved {
            config = config.reserve(word);
        }

        Self {
            input: p.input,
            output: p.output,
            config,
        }
    }
}

pub struct CheckParams {
    pub input: PathBuf,
    pub one_based: Option<bool>,
    pub verbose: u8,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: input_path(m),
            one_based: parse_index_base(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        let mut config = Config::new();
        if let Some(one_based) = p.one_based {
            config = config.one_based_index(one_based);
        }
        Self {
            input: p.input,
            config,
        }
    }
}

fn input_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("input")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

/// `None` leaves the choice to the workspace.
fn parse_index_base(m: &ArgMatches) -> Option<bool> {
    if m.get_flag("one_based") {
        Some(true)
    } else if m.get_flag("zero_based") {
        Some(false)
    } else {
        None
    }
}

/// Snippets are inserted as whole lines.
fn snippet(text: String) -> String {
    if text.ends_with('\n') {
        text
    } else {
        text + "\n"
    }
}
