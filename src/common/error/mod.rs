//! Unified error types for the generator.
//!
//! Errors raised by the OPC and WordprocessingML layers are converted into the
//! single [`Error`] type re-exported at the crate root.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
