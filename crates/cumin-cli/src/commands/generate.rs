use std::fs;
use std::path::PathBuf;

use cumin_compiler::Config;

use super::fail;
use super::workspace_loader::load_workspace;

pub struct GenerateArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub config: Config,
}

pub fn run(args: GenerateArgs) {
    let workspace = load_workspace(&args.input).unwrap_or_else(|e| fail(e));
    let code = cumin_compiler::generate(&workspace, &args.config).unwrap_or_else(|e| fail(e));

    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &code) {
                fail(format!("failed to write '{}': {}", path.display(), e));
            }
            tracing::info!(path = %path.display(), bytes = code.len(), "code written");
        }
        None => print!("{}", code),
    }
}
