//! Coding Standards - generator for the NormalDance coding-standards guide
//!
//! This library builds the team's coding-standards document as a Word
//! (.docx) file. It carries its own minimal WordprocessingML writer on top of
//! an Open Packaging Conventions (OPC) package layer, plus a small reader used
//! to verify the saved result.
//!
//! # Features
//!
//! - **DOCX writer**: paragraphs, runs, named paragraph styles, page setup
//! - **OPC packaging**: parts, relationships, content types, deterministic ZIP output
//! - **Atomic saves**: a failed write never leaves a truncated document behind
//! - **Read-back**: paragraph styles, alignment and text of a saved document
//!
//! # Example - Generating the guide
//!
//! ```no_run
//! use coding_standards::standards;
//!
//! # fn main() -> coding_standards::Result<()> {
//! standards::generate(standards::OUTPUT_FILE)?;
//! standards::verify(standards::OUTPUT_FILE)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Writing a DOCX file
//!
//! ```no_run
//! use coding_standards::ooxml::docx::{MutableDocument, MutableStyle, ParagraphAlignment};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doc = MutableDocument::new();
//! doc.add_style(MutableStyle::from_name("CustomTitle", 18.0, true))?;
//! doc.add_styled_paragraph("Title", "CustomTitle")?
//!     .set_alignment(ParagraphAlignment::Center);
//! doc.add_paragraph_with_text("Body text");
//! doc.save("document.docx")?;
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod ooxml;
pub mod standards;

// Re-export commonly used types
pub use common::{Error, Result};
pub use ooxml::docx::{DocxReader, MutableDocument, MutableStyle};
pub use standards::StandardsBuilder;
