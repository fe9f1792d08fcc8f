use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for ignition generation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside of source reads (output directory, output files).
    #[error(transparent)]
    Io(#[from] io::Error),

    /// One or more required environment variables are absent.
    #[error("Missing env vars: {}", keys.join(", "))]
    MissingEnv { keys: Vec<String> },

    /// Configuration or layout issue.
    #[error("{0}")]
    Configuration(String),

    /// A required source file is missing, is a directory, or cannot be read.
    #[error("Failed to read source '{}': {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Two file entries in one document target the same destination.
    #[error("Duplicate destination '{path}' in ignition config for node '{node}'")]
    DuplicateDestination { node: String, path: String },

    /// A content source is not a base64 data URI produced by the encoder.
    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    /// Manifest glob pattern could not be built.
    #[error("Invalid manifest pattern: {0}")]
    ManifestPattern(#[from] glob::PatternError),

    /// Document serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn source_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::SourceRead { path: path.into(), source }
    }

    /// Closest `io::ErrorKind` for the failure, for library callers that classify errors.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::SourceRead { source, .. } => source.kind(),
            AppError::MissingEnv { .. }
            | AppError::Configuration(_)
            | AppError::InvalidDataUri(_)
            | AppError::ManifestPattern(_)
            | AppError::Json(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::DuplicateDestination { .. } => io::ErrorKind::AlreadyExists,
        }
    }
}
