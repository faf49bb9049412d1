use std::fs;
use std::io::{self, Read};
use std::path::Path;

use cumin_core::{Workspace, WorkspaceError};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid workspace in {origin}: {source}")]
    Workspace {
        origin: String,
        #[source]
        source: WorkspaceError,
    },
}

/// Load a workspace from `path`, or from stdin when `path` is `-`.
pub fn load_workspace(path: &Path) -> Result<Workspace, LoadError> {
    let (origin, json) = if path.as_os_str() == "-" {
        ("<stdin>".to_string(), read_stdin()?)
    } else {
        let json = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.display().to_string(),
            source,
        })?;
        (format!("'{}'", path.display()), json)
    };
    parse_workspace(&origin, &json)
}

pub fn parse_workspace(origin: &str, json: &str) -> Result<Workspace, LoadError> {
    let workspace = Workspace::from_json(json).map_err(|source| LoadError::Workspace {
        origin: origin.to_string(),
        source,
    })?;
    tracing::debug!(
        origin,
        nodes = workspace.len(),
        roots = workspace.top_nodes().len(),
        "workspace loaded"
    );
    Ok(workspace)
}

fn read_stdin() -> Result<String, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(buf)
}
