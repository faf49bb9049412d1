mod cli;
mod commands;
mod logging;

use cli::{CheckParams, GenerateParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            logging::init(params.verbose);
            commands::generate::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            logging::init(params.verbose);
            commands::check::run(params.into());
        }
        Some(("kinds", _)) => commands::kinds::run(),
        _ => unreachable!("clap should have caught this"),
    }
}
