//! Error types for the use-case layer

use school_domain::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UsecaseError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported seed file '{path}': expected .json, .yaml or .yml")]
    UnsupportedSeedFormat { path: String },

    #[error("Subject '{subject}' refers to teacher #{position}, but only {available} teachers are seeded")]
    UnknownTeacher {
        subject: String,
        position: usize,
        available: usize,
    },
}

pub type Result<T> = std::result::Result<T, UsecaseError>;
