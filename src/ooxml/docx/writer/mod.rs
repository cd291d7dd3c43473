//! Mutable document writer components for DOCX.
//!
//! This module provides the writer API for creating Word documents.

pub mod doc;
pub mod paragraph;
pub mod run;
pub mod section;
pub mod style;

// Re-export main document type
pub use doc::MutableDocument;

// Re-export section types
pub use section::SectionProperties;

// Re-export paragraph types
pub use paragraph::{MutableParagraph, ParagraphAlignment};

// Re-export run types
pub use run::MutableRun;

// Re-export style types
pub use style::{MutableStyle, generate_styles_xml};
