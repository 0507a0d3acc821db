use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading a `drawer.toml` file from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid drawer config: {0}")]
    Parse(#[from] toml::de::Error),
}
