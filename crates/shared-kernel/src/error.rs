// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum PatchError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<PatchError>,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, PatchError>;

/// Errors raised by tag validation and the in-memory text transforms.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid tag provided: {tag}")]
    InvalidTag { tag: String },

    #[error("No line containing '{marker}' was found")]
    MarkerNotFound { marker: String },

    #[error("Cannot insert at line {index}: file has only {line_count} lines")]
    InsertOutOfRange { index: usize, line_count: usize },

    #[error("No line containing anchor '{anchor}' was found")]
    AnchorNotFound { anchor: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to restore '{path}' after an aborted commit: {source}")]
    Rollback {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

impl PatchError {
    /// Innermost domain error, looking through any context layers.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Context { source, .. } => source.as_domain(),
            Self::Domain(err) => Some(err),
            _ => None,
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<PatchError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| PatchError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| PatchError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
