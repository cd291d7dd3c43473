//! The NormalDance coding-standards guide.
//!
//! [`content`] holds the text, [`builder`] turns it into a document.

pub mod builder;
pub mod content;

pub use builder::{StandardsBuilder, build_document, generate, verify};
pub use content::{OUTPUT_FILE, SECTIONS, Section, SectionBody};
