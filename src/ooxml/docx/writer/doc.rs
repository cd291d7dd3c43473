//! The in-memory Word document and its DOCX serialization.
use crate::ooxml::common::{AppProperties, DocumentProperties};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter, Part};
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::paragraph::MutableParagraph;
use super::section::SectionProperties;
use super::style::{MutableStyle, generate_styles_xml};

/// A mutable Word document for writing.
///
/// Holds the body paragraphs in insertion order, the style sheet, page setup
/// and document metadata. Nothing touches the filesystem until [`save`] is
/// called.
///
/// [`save`]: MutableDocument::save
#[derive(Debug)]
pub struct MutableDocument {
    /// Document body content
    body: DocumentBody,
    /// Style sheet; built-in styles first, then styles in registration order
    styles: Vec<MutableStyle>,
    /// Page size and margins
    section: SectionProperties,
    /// Core properties (docProps/core.xml)
    properties: DocumentProperties,
    /// Extended properties (docProps/app.xml)
    app_properties: AppProperties,
}

impl MutableDocument {
    /// Create a new empty mutable document.
    pub fn new() -> Self {
        Self {
            body: DocumentBody::new(),
            styles: vec![
                MutableStyle::normal(),
                MutableStyle::default_paragraph_font(),
            ],
            section: SectionProperties::default(),
            properties: DocumentProperties::default(),
            app_properties: AppProperties::default(),
        }
    }

    /// Register a style on the document.
    ///
    /// Fails with [`OoxmlError::DuplicateStyle`] if a style with the same id
    /// is already registered.
    pub fn add_style(&mut self, style: MutableStyle) -> Result<&MutableStyle> {
        if self.style(style.style_id()).is_some() {
            return Err(OoxmlError::DuplicateStyle(style.style_id().to_string()));
        }
        self.styles.push(style);
        let last = self.styles.len() - 1;
        Ok(&self.styles[last])
    }

    /// Look up a style by id.
    pub fn style(&self, style_id: &str) -> Option<&MutableStyle> {
        self.styles.iter().find(|s| s.style_id() == style_id)
    }

    /// All registered styles, built-ins included.
    pub fn styles(&self) -> &[MutableStyle] {
        &self.styles
    }

    /// Get a reference to the section properties.
    pub fn section(&self) -> &SectionProperties {
        &self.section
    }

    /// Get the document core properties.
    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    /// Get a mutable reference to the document core properties.
    pub fn properties_mut(&mut self) -> &mut DocumentProperties {
        &mut self.properties
    }

    /// Replace the document core properties.
    pub fn set_properties(&mut self, properties: DocumentProperties) {
        self.properties = properties;
    }

    /// Add a new empty paragraph to the end of the document.
    pub fn add_paragraph(&mut self) -> &mut MutableParagraph {
        self.body.add_paragraph()
    }

    /// Add a paragraph with text. Empty text yields a paragraph without runs.
    pub fn add_paragraph_with_text(&mut self, text: &str) -> &mut MutableParagraph {
        let para = self.add_paragraph();
        if !text.is_empty() {
            para.add_run_with_text(text);
        }
        para
    }

    /// Add a paragraph with text and a paragraph style.
    ///
    /// The style must already be registered; otherwise nothing is appended
    /// and [`OoxmlError::UnknownStyle`] is returned.
    pub fn add_styled_paragraph(
        &mut self,
        text: &str,
        style_id: &str,
    ) -> Result<&mut MutableParagraph> {
        if self.style(style_id).is_none() {
            return Err(OoxmlError::UnknownStyle(style_id.to_string()));
        }
        let para = self.add_paragraph_with_text(text);
        para.set_style(style_id);
        Ok(para)
    }

    /// Get the number of paragraphs in the document.
    pub fn paragraph_count(&self) -> usize {
        self.body.paragraphs.len()
    }

    /// Get a paragraph by index.
    pub fn paragraph(&self, index: usize) -> Option<&MutableParagraph> {
        self.body.paragraphs.get(index)
    }

    /// Iterate over paragraphs in document order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &MutableParagraph> {
        self.body.paragraphs.iter()
    }

    /// Serialize the document body to `word/document.xml`.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(8192);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<w:document xmlns:w="{}" xmlns:r="{}">"#,
            namespace::WML_MAIN,
            namespace::OFC_RELATIONSHIPS
        )?;
        self.body.to_xml(&mut xml, &self.section)?;
        xml.push_str("</w:document>");
        Ok(xml)
    }

    /// Serialize the style sheet to `word/styles.xml`.
    pub fn styles_xml(&self) -> Result<String> {
        generate_styles_xml(&self.styles)
    }

    /// Serialize `word/settings.xml`.
    pub fn settings_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(xml, r#"<w:settings xmlns:w="{}">"#, namespace::WML_MAIN)?;
        xml.push_str(r#"<w:defaultTabStop w:val="720"/>"#);
        xml.push_str(r#"<w:characterSpacingControl w:val="doNotCompress"/>"#);
        xml.push_str("<w:compat>");
        xml.push_str(r#"<w:compatSetting w:name="compatibilityMode" w:uri="http://schemas.microsoft.com/office/word" w:val="15"/>"#);
        xml.push_str("</w:compat>");
        xml.push_str("</w:settings>");
        Ok(xml)
    }

    /// Assemble the OPC package for this document.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let core_uri = part_uri("/docProps/core.xml")?;
        let app_uri = part_uri("/docProps/app.xml")?;
        let document_uri = part_uri("/word/document.xml")?;
        let styles_uri = part_uri("/word/styles.xml")?;
        let settings_uri = part_uri("/word/settings.xml")?;

        let mut package = OpcPackage::new();
        package.relate_to(&document_uri, rt::OFFICE_DOCUMENT);
        package.relate_to(&core_uri, rt::CORE_PROPERTIES);
        package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        package.add_part(Part::from_xml(
            core_uri,
            ct::OPC_CORE_PROPERTIES,
            self.properties.to_xml(),
        ));
        package.add_part(Part::from_xml(
            app_uri,
            ct::OFC_EXTENDED_PROPERTIES,
            self.app_properties.to_xml(),
        ));

        let mut document_part =
            Part::from_xml(document_uri, ct::WML_DOCUMENT_MAIN, self.to_xml()?);
        document_part.relate_to(&styles_uri, rt::STYLES);
        document_part.relate_to(&settings_uri, rt::SETTINGS);
        package.add_part(document_part);

        package.add_part(Part::from_xml(styles_uri, ct::WML_STYLES, self.styles_xml()?));
        package.add_part(Part::from_xml(
            settings_uri,
            ct::WML_SETTINGS,
            self.settings_xml()?,
        ));

        Ok(package)
    }

    /// Serialize the document to DOCX bytes.
    ///
    /// Identical documents produce byte-identical output.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let package = self.to_package()?;
        Ok(PackageWriter::to_bytes(&package)?)
    }

    /// Save the document to a file, replacing any existing file.
    ///
    /// The write is atomic: on failure the destination is left untouched.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let package = self.to_package()?;
        PackageWriter::write(path, &package)?;
        Ok(())
    }
}

impl Default for MutableDocument {
    fn default() -> Self {
        Self::new()
    }
}

fn part_uri(name: &str) -> Result<PackURI> {
    PackURI::new(name).map_err(|e| OoxmlError::Opc(OpcError::InvalidPackUri(e)))
}

/// The document body containing all paragraphs.
#[derive(Debug)]
pub(crate) struct DocumentBody {
    /// Paragraphs in document order
    pub(crate) paragraphs: Vec<MutableParagraph>,
}

impl DocumentBody {
    fn new() -> Self {
        Self {
            paragraphs: Vec::new(),
        }
    }

    fn add_paragraph(&mut self) -> &mut MutableParagraph {
        self.paragraphs.push(MutableParagraph::new());
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    fn to_xml(&self, xml: &mut String, section: &SectionProperties) -> Result<()> {
        xml.push_str("<w:body>");

        for para in &self.paragraphs {
            para.to_xml(xml)?;
        }

        // sectPr must be the last child of the body
        section.to_xml(xml)?;

        xml.push_str("</w:body>");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx::format::ParagraphAlignment;
    use std::io::{Cursor, Read};

    fn read_member(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_create_empty_document() {
        let doc = MutableDocument::new();
        assert_eq!(doc.paragraph_count(), 0);
        assert_eq!(doc.styles().len(), 2);
        assert!(doc.style("Normal").is_some());
    }

    #[test]
    fn test_add_paragraph() {
        let mut doc = MutableDocument::new();
        doc.add_paragraph_with_text("Hello, World!");
        doc.add_paragraph();
        assert_eq!(doc.paragraph_count(), 2);
        assert_eq!(doc.paragraph(0).unwrap().text(), "Hello, World!");
        assert_eq!(doc.paragraph(1).unwrap().run_count(), 0);
    }

    #[test]
    fn test_add_style_rejects_duplicates() {
        let mut doc = MutableDocument::new();
        doc.add_style(MutableStyle::from_name("Custom Title", 18.0, true))
            .unwrap();
        let err = doc
            .add_style(MutableStyle::from_name("Custom Title", 20.0, false))
            .unwrap_err();
        assert!(matches!(err, OoxmlError::DuplicateStyle(ref id) if id == "CustomTitle"));
        assert_eq!(doc.style("CustomTitle").unwrap().font_size(), Some(36));
    }

    #[test]
    fn test_styled_paragraph_requires_registered_style() {
        let mut doc = MutableDocument::new();
        let err = doc.add_styled_paragraph("x", "Missing").unwrap_err();
        assert!(matches!(err, OoxmlError::UnknownStyle(_)));
        assert_eq!(doc.paragraph_count(), 0);

        doc.add_style(MutableStyle::from_name("Custom Heading 2", 14.0, true))
            .unwrap();
        doc.add_styled_paragraph("Версия 1.0", "CustomHeading2")
            .unwrap()
            .set_alignment(ParagraphAlignment::Center);
        assert_eq!(doc.paragraph(0).unwrap().style(), Some("CustomHeading2"));
    }

    #[test]
    fn test_xml_generation() {
        let mut doc = MutableDocument::new();
        doc.add_paragraph_with_text("Test paragraph");

        let xml = doc.to_xml().unwrap();
        assert!(xml.contains("<w:document"));
        assert!(xml.contains("<w:body>"));
        assert!(xml.contains("Test paragraph"));
        assert!(xml.ends_with("</w:sectPr></w:body></w:document>"));
    }

    #[test]
    fn test_metadata_and_page_setup() {
        let mut doc = MutableDocument::new();
        *doc.properties_mut() = DocumentProperties::new().creator("NormalDance");
        doc.add_paragraph_with_text("a");
        doc.add_paragraph_with_text("b");

        assert_eq!(doc.section(), &SectionProperties::default());
        assert!(doc.properties().to_xml().contains("<dc:creator>NormalDance</dc:creator>"));
        let texts: Vec<String> = doc.paragraphs().map(|p| p.text()).collect();
        assert_eq!(texts, ["a", "b"]);

        let core = read_member(&doc.to_bytes().unwrap(), "docProps/core.xml");
        assert!(core.contains("<dc:creator>NormalDance</dc:creator>"));
    }

    #[test]
    fn test_package_layout() {
        let mut doc = MutableDocument::new();
        doc.add_paragraph_with_text("Body");
        let bytes = doc.to_bytes().unwrap();

        let archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        for expected in [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/core.xml",
            "docProps/app.xml",
            "word/document.xml",
            "word/_rels/document.xml.rels",
            "word/styles.xml",
            "word/settings.xml",
        ] {
            assert!(names.contains(&expected), "missing {expected}");
        }

        let rels = read_member(&bytes, "word/_rels/document.xml.rels");
        assert!(rels.contains(r#"Target="styles.xml""#));
        assert!(rels.contains(r#"Target="settings.xml""#));

        let pkg_rels = read_member(&bytes, "_rels/.rels");
        assert!(pkg_rels.contains(r#"Target="word/document.xml""#));
    }

    #[test]
    fn test_to_bytes_is_deterministic() {
        let mut doc = MutableDocument::new();
        doc.add_paragraph_with_text("Same");
        assert_eq!(doc.to_bytes().unwrap(), doc.to_bytes().unwrap());
    }
}
