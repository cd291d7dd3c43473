//! Parts shared by all OOXML document types.

pub mod properties;

pub use properties::{AppProperties, DocumentProperties};
