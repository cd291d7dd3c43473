//! Office Open XML (OOXML) format implementation.
//!
//! This module writes Word (.docx) documents on top of the Open Packaging
//! Conventions (OPC). It follows the structure of the python-docx library,
//! adapted for Rust.
//!
//! # Architecture
//!
//! The module is organized into several layers:
//!
//! 1. **OPC Layer** (`opc`): package handling (ZIP, parts, relationships, content types)
//! 2. **Shared Parts** (`common`, `error`): document properties and error types
//! 3. **Format-Specific Modules**:
//!    - `docx`: Word documents
pub mod common;
pub mod docx;
pub mod error;
pub mod opc;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};

// Re-export common utilities
pub use common::{AppProperties, DocumentProperties};

// Re-export error types
pub use error::{OoxmlError, Result};
