use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvfigError {
    #[error("Path '{path}' is neither a file nor a directory")]
    NotFound { path: PathBuf },

    #[error(
        "The file {path} cannot be processed (extension '{extension}'). Please provide a `json` or `yml/yaml` file"
    )]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Failed to parse {path}: {source}")]
    Parse { path: PathBuf, source: ParseError },

    #[error("Expected a mapping at the root of {path}, found {found}")]
    UnexpectedType { path: PathBuf, found: &'static str },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Environment variable '{var}' does not name any key")]
    EmptyKeyPath { var: String },

    #[error("Invalid config in {path}: {reason}")]
    InvalidValue { path: PathBuf, reason: String },

    #[error("Config path is required: call .path() on the builder")]
    PathRequired,
}

/// Decoder failure, keyed by the codec that produced it.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error("non-finite number at '{key}' has no JSON representation")]
    NonFinite { key: String },
}
