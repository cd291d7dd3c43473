/// Word (.docx) document support.
///
/// This module writes Microsoft Word documents in the Office Open XML
/// (OOXML) format and reads back the parts needed to verify them.
///
/// # Architecture
///
/// - `writer`: `MutableDocument` with paragraphs, runs, styles and page setup
/// - `reader`: `DocxReader` for paragraph and style inspection of a saved file
/// - `enums` / `format`: shared enumerations used by both sides
///
/// # Example
///
/// ```rust,no_run
/// use coding_standards::ooxml::docx::{DocxReader, MutableDocument, MutableStyle};
///
/// let mut doc = MutableDocument::new();
/// doc.add_style(MutableStyle::from_name("Custom Heading 1", 16.0, true))?;
/// doc.add_styled_paragraph("1. Введение", "CustomHeading1")?;
/// doc.add_paragraph_with_text("Body text");
/// doc.save("output.docx")?;
///
/// let reader = DocxReader::open("output.docx")?;
/// assert_eq!(reader.paragraphs()?.len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub mod enums;
pub mod format;
pub mod reader;
pub mod writer;

pub use enums::WdStyleType;
pub use format::ParagraphAlignment;
pub use reader::{DocxReader, ParagraphInfo, StyleInfo};
pub use writer::{MutableDocument, MutableParagraph, MutableRun, MutableStyle, SectionProperties};
