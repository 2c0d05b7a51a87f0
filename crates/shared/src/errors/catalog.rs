use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate brand id: {0}")]
    DuplicateBrand(i32),
}
