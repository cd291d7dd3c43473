//! Unified error types for the generator.
//!
//! This module provides a single error type that covers the package layer,
//! the WordprocessingML writer and filesystem access, presenting a consistent
//! API to callers of the builder.
use thiserror::Error;

/// Main error type for document generation.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML writing or parsing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// A style with this name is already registered on the document
    #[error("Style already exists: {0}")]
    DuplicateStyle(String),

    /// A paragraph referenced a style that was never registered
    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    /// Package part or archive member not found
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// Invalid package structure or part name
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for document generation.
pub type Result<T> = std::result::Result<T, Error>;
