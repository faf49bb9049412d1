use std::path::PathBuf;

use cumin_compiler::Config;

use super::fail;
use super::workspace_loader::load_workspace;

pub struct CheckArgs {
    pub input: PathBuf,
    pub config: Config,
}

pub fn run(args: CheckArgs) {
    let workspace = load_workspace(&args.input).unwrap_or_else(|e| fail(e));
    if let Err(e) = cumin_compiler::generate(&workspace, &args.config) {
        fail(e);
    }

    // Silent on success (like cargo check)
}
