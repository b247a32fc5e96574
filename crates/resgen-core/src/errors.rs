//! Error types for the resgen core library.

use std::path::{Path, PathBuf};

/// Top-level error enum for the resgen core library.
#[derive(Debug, thiserror::Error)]
pub enum ResgenError {
    #[error("Invalid resource name '{name}' in {path}: {reason}")]
    InvalidResourceName {
        path: String,
        name: String,
        reason: String,
    },

    #[error(
        "Duplicate {resource_type} resource '{key}' with identical qualifiers: {}",
        files.join(", ")
    )]
    DuplicateResourceConflict {
        resource_type: String,
        key: String,
        files: Vec<String>,
    },

    #[error("Unknown resource type: '{0}'.")]
    UnknownResourceType(String),

    #[error(
        "Forbidden directory name '{0}'! String resources should be declared in 'values/strings.xml'."
    )]
    ForbiddenDirectory(String),

    #[error("{0}")]
    InvalidQualifier(String),

    #[error("{file} is not valid. {reason}")]
    InvalidValuesFile { file: String, reason: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Emit error: {0}")]
    Emit(#[from] syn::Error),

    #[error("IO error at {}: {source}", path.display())]
    IoAt {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ResgenError {
    /// Attach the offending path to an I/O error.
    pub fn io_at(path: impl AsRef<Path>) -> impl FnOnce(std::io::Error) -> ResgenError {
        let path = path.as_ref().to_path_buf();
        move |source| ResgenError::IoAt { path, source }
    }
}

pub type ResgenResult<T> = Result<T, ResgenError>;
