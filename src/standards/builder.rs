//! Assembles the coding-standards guide into a Word document.

use super::content::{
    DATE, HEADING1_STYLE, HEADING2_STYLE, SECTIONS, STYLES, Section, SectionBody, TITLE,
    TITLE_STYLE, VERSION,
};
use crate::common::{Error, Result};
use crate::ooxml::common::DocumentProperties;
use crate::ooxml::docx::format::ParagraphAlignment;
use crate::ooxml::docx::reader::DocxReader;
use crate::ooxml::docx::writer::{MutableDocument, MutableStyle};
use std::path::Path;

/// Builds the guide in a single linear pass.
///
/// # Examples
///
/// ```rust,no_run
/// use coding_standards::standards::StandardsBuilder;
///
/// let mut builder = StandardsBuilder::new();
/// builder.create_styles()?;
/// builder.add_title_block()?;
/// builder.append_sections()?;
/// builder.save("NORMALDANCE_Coding_Standards_v1.0.docx")?;
/// # Ok::<(), coding_standards::Error>(())
/// ```
#[derive(Debug)]
pub struct StandardsBuilder {
    doc: MutableDocument,
}

impl StandardsBuilder {
    /// Start from an empty document carrying the guide's metadata.
    pub fn new() -> Self {
        let mut doc = MutableDocument::new();
        doc.set_properties(
            DocumentProperties::new()
                .title("Стандарты кодирования NormalDance")
                .subject("Стандарты кодирования")
                .creator("NormalDance")
                .language("ru-RU"),
        );
        Self { doc }
    }

    /// Register a paragraph style and return its id.
    ///
    /// Fails with [`Error::DuplicateStyle`] if the name is already taken.
    ///
    /// [`Error::DuplicateStyle`]: crate::Error::DuplicateStyle
    pub fn create_style(&mut self, name: &str, size_pt: f64, bold: bool) -> Result<String> {
        let style = self
            .doc
            .add_style(MutableStyle::from_name(name, size_pt, bold))?;
        Ok(style.style_id().to_string())
    }

    /// Register the title and heading styles.
    pub fn create_styles(&mut self) -> Result<()> {
        for spec in &STYLES {
            self.create_style(spec.name, spec.size_pt, spec.bold)?;
        }
        Ok(())
    }

    /// Title, version and date lines (centered), then an empty paragraph.
    pub fn add_title_block(&mut self) -> Result<()> {
        for (text, style) in [
            (TITLE, TITLE_STYLE),
            (VERSION, HEADING2_STYLE),
            (DATE, HEADING2_STYLE),
        ] {
            self.doc
                .add_styled_paragraph(text, style)?
                .set_alignment(ParagraphAlignment::Center);
        }
        self.doc.add_paragraph();
        Ok(())
    }

    /// Heading paragraph followed by the section body in default styling.
    pub fn append_section(&mut self, section: &Section) -> Result<()> {
        self.doc.add_styled_paragraph(section.heading, HEADING1_STYLE)?;
        match section.body {
            SectionBody::Text(text) => {
                self.doc.add_paragraph_with_text(text);
            },
            SectionBody::Bullets(items) => {
                for item in items {
                    self.doc.add_paragraph_with_text(item);
                }
            },
        }
        Ok(())
    }

    /// Append all ten sections in order.
    pub fn append_sections(&mut self) -> Result<()> {
        for section in &SECTIONS {
            self.append_section(section)?;
        }
        Ok(())
    }

    pub fn document(&self) -> &MutableDocument {
        &self.doc
    }

    pub fn into_document(self) -> MutableDocument {
        self.doc
    }

    /// Write the document to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.doc.save(path)?;
        Ok(())
    }
}

impl Default for StandardsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the complete guide in memory.
pub fn build_document() -> Result<MutableDocument> {
    let mut builder = StandardsBuilder::new();
    builder.create_styles()?;
    builder.add_title_block()?;
    builder.append_sections()?;
    Ok(builder.into_document())
}

/// Build the complete guide and save it to `path`.
pub fn generate<P: AsRef<Path>>(path: P) -> Result<()> {
    build_document()?.save(path)?;
    Ok(())
}

/// Re-open a saved guide and check that its section headings match, in order.
pub fn verify<P: AsRef<Path>>(path: P) -> Result<()> {
    let reader = DocxReader::open(path)?;
    let headings: Vec<String> = reader
        .paragraphs()?
        .into_iter()
        .filter(|p| p.style.as_deref() == Some(HEADING1_STYLE))
        .map(|p| p.text)
        .collect();

    if headings.len() != SECTIONS.len() {
        return Err(Error::InvalidFormat(format!(
            "expected {} section headings, found {}",
            SECTIONS.len(),
            headings.len()
        )));
    }

    for (found, section) in headings.iter().zip(&SECTIONS) {
        if found != section.heading {
            return Err(Error::InvalidFormat(format!(
                "section {} heading is {:?}, expected {:?}",
                section.number, found, section.heading
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn generated() -> DocxReader {
        let bytes = build_document().unwrap().to_bytes().unwrap();
        DocxReader::from_bytes(&bytes).unwrap()
    }

    #[test]
    fn test_paragraph_sequence() {
        let paragraphs = generated().paragraphs().unwrap();
        assert_eq!(paragraphs.len(), 29);

        assert_eq!(paragraphs[0].text, "Стандарты кодирования\nNormalDance");
        assert_eq!(paragraphs[1].text, "Версия 1.0");
        assert_eq!(paragraphs[2].text, "Дата: Декабрь 2025");
        assert_eq!(paragraphs[3].text, "");
        assert_eq!(paragraphs[3].style, None);

        for para in &paragraphs[..3] {
            assert_eq!(para.alignment, Some(ParagraphAlignment::Center));
        }
        assert_eq!(paragraphs[0].style.as_deref(), Some("CustomTitle"));
        assert_eq!(paragraphs[1].style.as_deref(), Some("CustomHeading2"));
    }

    #[test]
    fn test_ten_headings_in_order() {
        let headings: Vec<String> = generated()
            .paragraphs()
            .unwrap()
            .into_iter()
            .filter(|p| p.style.as_deref() == Some("CustomHeading1"))
            .map(|p| p.text)
            .collect();

        assert_eq!(headings.len(), 10);
        for (i, heading) in headings.iter().enumerate() {
            assert!(heading.starts_with(&format!("{}. ", i + 1)), "{heading}");
        }
        assert!(headings[4].contains("Тестирование"));
    }

    #[test]
    fn test_section_bodies_follow_headings() {
        let paragraphs = generated().paragraphs().unwrap();
        let intro = paragraphs
            .iter()
            .position(|p| p.text == "1. Введение")
            .unwrap();
        assert!(paragraphs[intro + 1]
            .text
            .starts_with("Данный документ содержит"));
        assert_eq!(paragraphs[intro + 1].style, None);

        let bullets: Vec<&str> = paragraphs[intro + 3..intro + 9]
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert!(bullets.iter().all(|b| b.starts_with("• ")));
        assert_eq!(
            bullets[1],
            "• DRY (Don't Repeat Yourself) - избегайте дублирования кода"
        );

        let last = paragraphs.last().unwrap();
        assert!(last.text.contains("Bundle size < 500KB (gzip)"));
        assert!(last.text.ends_with("• Automated alerts"));
    }

    #[test]
    fn test_heading_styles_bold_with_sizes() {
        let reader = generated();
        for (id, size) in [
            ("CustomTitle", 36),
            ("CustomHeading1", 32),
            ("CustomHeading2", 28),
        ] {
            let style = reader.style(id).unwrap().unwrap();
            assert_eq!(style.size, Some(size), "{id}");
            assert!(style.bold, "{id}");
        }
    }

    #[test]
    fn test_duplicate_style_is_rejected() {
        let mut builder = StandardsBuilder::new();
        builder.create_styles().unwrap();
        let err = builder.create_style("CustomTitle", 18.0, true).unwrap_err();
        assert!(matches!(err, Error::DuplicateStyle(ref name) if name == "CustomTitle"));
    }

    #[test]
    fn test_sections_need_styles() {
        let mut builder = StandardsBuilder::new();
        let err = builder.append_section(&SECTIONS[0]).unwrap_err();
        assert!(matches!(err, Error::UnknownStyle(_)));
        assert_eq!(builder.document().paragraph_count(), 0);
    }

    #[test]
    fn test_generate_writes_single_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("NORMALDANCE_Coding_Standards_v1.0.docx");
        generate(&path).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert!(DocxReader::open(&path).is_ok());
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.docx");

        generate(&path).unwrap();
        let first = std::fs::read(&path).unwrap();
        generate(&path).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_unwritable_path_fails_without_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.docx");

        let err = generate(&path).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_verify_accepts_generated_guide() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.docx");
        generate(&path).unwrap();
        verify(&path).unwrap();
    }

    #[test]
    fn test_verify_rejects_missing_sections() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("partial.docx");

        let mut builder = StandardsBuilder::new();
        builder.create_styles().unwrap();
        builder.add_title_block().unwrap();
        builder.append_section(&SECTIONS[0]).unwrap();
        builder.save(&path).unwrap();

        let err = verify(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));
    }

    #[test]
    fn test_core_properties() {
        let bytes = build_document().unwrap().to_bytes().unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        let mut core = String::new();
        std::io::Read::read_to_string(&mut archive.by_name("docProps/core.xml").unwrap(), &mut core)
            .unwrap();
        assert!(core.contains("<dc:creator>NormalDance</dc:creator>"));
        assert!(core.contains("<dc:language>ru-RU</dc:language>"));
        assert!(!core.contains("dcterms:created"));
    }

    proptest! {
        #[test]
        fn test_text_survives_save_and_read(text in "[ -~а-яА-Я<>&'\"\t\n]{0,64}") {
            let mut doc = MutableDocument::new();
            doc.add_paragraph_with_text(&text);
            let bytes = doc.to_bytes().unwrap();
            let paragraphs = DocxReader::from_bytes(&bytes).unwrap().paragraphs().unwrap();
            prop_assert_eq!(paragraphs.len(), 1);
            prop_assert_eq!(&paragraphs[0].text, &text);
        }
    }
}
