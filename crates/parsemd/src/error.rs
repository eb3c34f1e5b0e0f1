//! CLI error types.

use std::path::PathBuf;

use parsemd_config::ConfigError;
use parsemd_plugins::ConvertError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("reading file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("writing output: {0}")]
    Write(#[from] std::io::Error),

    #[error("converting markdown: {0}")]
    Convert(#[from] ConvertError),
}

/// Read a file, attaching the path to any error.
pub(crate) fn read_file(path: PathBuf) -> Result<Vec<u8>, CliError> {
    std::fs::read(&path).map_err(|source| CliError::Read { path, source })
}
