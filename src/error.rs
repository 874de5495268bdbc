//! Error types for docstruct library.

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Result type alias for docstruct operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error returned by external collaborators (markup converters, PDF text extractors).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error types that can occur while extracting document structure.
#[derive(Error, Debug)]
pub enum Error {
    /// The declared input format is not one of the supported tags.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Format-specific extraction produced no text at all.
    #[error("No text could be extracted from {0} input")]
    EmptyContent(String),

    /// An external conversion collaborator reported an error.
    #[error("Conversion failed: {0}")]
    Conversion(String),

    /// I/O error when reading the input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing a document.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Wrap an error reported by a named collaborator.
    pub fn conversion(source: &str, err: impl std::fmt::Display) -> Self {
        Error::Conversion(format!("{}: {}", source, err))
    }

    /// Get the failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Error::EmptyContent(_) => ErrorKind::EmptyContent,
            Error::Conversion(_) => ErrorKind::ConversionFailure,
            Error::Io(_) => ErrorKind::IoFailure,
            Error::Render(_) => ErrorKind::RenderFailure,
        }
    }

    /// Convert into a transportable failure record.
    pub fn to_failure(&self) -> ParseFailure {
        ParseFailure {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

/// Failure category, stable across versions for callers that serialize errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Declared format not recognized
    UnsupportedFormat,
    /// No text at all after extraction
    EmptyContent,
    /// Markup or PDF-text collaborator failed
    ConversionFailure,
    /// Input could not be read
    IoFailure,
    /// Output could not be serialized
    RenderFailure,
}

/// A structured failure: kind plus human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseFailure {
    /// Failure category
    pub kind: ErrorKind,
    /// Display message of the underlying error
    pub message: String,
}
