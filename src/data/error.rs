use std::path::PathBuf;

use thiserror::Error;

/// Why a file could not be turned into a [`Dataset`](super::model::Dataset).
///
/// This is the only fatal error in the application: it is shown to the user
/// verbatim and stops the rest of the page from rendering.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file type '.{0}' (expected .csv or .xlsx)")]
    UnsupportedExtension(String),

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("column '{column}' has {found} values, expected {expected}")]
    RaggedColumns {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("{0}")]
    Parse(String),
}

impl From<anyhow::Error> for LoadError {
    fn from(err: anyhow::Error) -> Self {
        LoadError::Parse(format!("{err:#}"))
    }
}
