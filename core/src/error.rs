use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a builtin function table.
///
/// Text analysis itself never fails; this only covers startup.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("malformed builtin table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read builtin table '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("builtin entry #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("builtin '{0}' is defined more than once")]
    DuplicateName(String),
}
