//! Body paragraphs (`w:p`) for DOCX documents.
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

// Import shared format types
pub use super::super::format::ParagraphAlignment;
use super::run::MutableRun;

/// A mutable paragraph in a document.
#[derive(Debug)]
pub struct MutableParagraph {
    /// Runs in this paragraph, in order
    pub(crate) runs: Vec<MutableRun>,
    /// Paragraph style ID
    pub(crate) style: Option<String>,
    /// Paragraph properties
    pub(crate) properties: ParagraphProperties,
}

impl MutableParagraph {
    pub(crate) fn new() -> Self {
        Self {
            runs: Vec::new(),
            style: None,
            properties: ParagraphProperties::default(),
        }
    }

    /// Add a new run to the paragraph.
    pub fn add_run(&mut self) -> &mut MutableRun {
        self.runs.push(MutableRun::new());
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    /// Add a run with text.
    pub fn add_run_with_text(&mut self, text: &str) -> &mut MutableRun {
        let run = self.add_run();
        run.set_text(text);
        run
    }

    /// Set the paragraph style by style id.
    ///
    /// The id is not checked here; [`MutableDocument::add_styled_paragraph`]
    /// validates it against the document's style sheet.
    ///
    /// [`MutableDocument::add_styled_paragraph`]: super::MutableDocument::add_styled_paragraph
    pub fn set_style(&mut self, style_id: &str) {
        self.style = Some(style_id.to_string());
    }

    /// Get the paragraph style id.
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Set paragraph alignment.
    pub fn set_alignment(&mut self, alignment: ParagraphAlignment) {
        self.properties.alignment = Some(alignment);
    }

    /// Get paragraph alignment, if set directly on the paragraph.
    pub fn alignment(&self) -> Option<ParagraphAlignment> {
        self.properties.alignment
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text()).collect()
    }

    /// Get the number of runs.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        if self.style.is_none() && !self.properties.has_properties() && self.runs.is_empty() {
            xml.push_str("<w:p/>");
            return Ok(());
        }

        xml.push_str("<w:p>");

        if self.style.is_some() || self.properties.has_properties() {
            xml.push_str("<w:pPr>");

            // Schema order: pStyle before jc
            if let Some(ref style) = self.style {
                write!(xml, "<w:pStyle w:val=\"{}\"/>", escape_xml(style))?;
            }

            if let Some(alignment) = self.properties.alignment {
                write!(xml, "<w:jc w:val=\"{}\"/>", alignment.as_str())?;
            }

            xml.push_str("</w:pPr>");
        }

        for run in &self.runs {
            run.to_xml(xml)?;
        }

        xml.push_str("</w:p>");
        Ok(())
    }
}

/// Paragraph properties.
#[derive(Debug, Default)]
pub(crate) struct ParagraphProperties {
    pub(crate) alignment: Option<ParagraphAlignment>,
}

impl ParagraphProperties {
    pub(crate) fn has_properties(&self) -> bool {
        self.alignment.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(para: &MutableParagraph) -> String {
        let mut xml = String::new();
        para.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_empty_paragraph() {
        assert_eq!(render(&MutableParagraph::new()), "<w:p/>");
    }

    #[test]
    fn test_styled_centered_paragraph() {
        let mut para = MutableParagraph::new();
        para.set_style("CustomHeading2");
        para.set_alignment(ParagraphAlignment::Center);
        para.add_run_with_text("Версия 1.0");

        assert_eq!(
            render(&para),
            concat!(
                r#"<w:p><w:pPr><w:pStyle w:val="CustomHeading2"/><w:jc w:val="center"/></w:pPr>"#,
                r#"<w:r><w:t xml:space="preserve">Версия 1.0</w:t></w:r></w:p>"#
            )
        );
    }

    #[test]
    fn test_alignment_without_style() {
        let mut para = MutableParagraph::new();
        para.set_alignment(ParagraphAlignment::Justify);
        assert_eq!(para.alignment(), Some(ParagraphAlignment::Justify));
        assert_eq!(render(&para), r#"<w:p><w:pPr><w:jc w:val="both"/></w:pPr></w:p>"#);
    }

    #[test]
    fn test_text_concatenates_runs() {
        let mut para = MutableParagraph::new();
        para.add_run_with_text("• DRY ");
        para.add_run_with_text("(Don't Repeat Yourself)");
        assert_eq!(para.text(), "• DRY (Don't Repeat Yourself)");
        assert_eq!(para.run_count(), 2);
    }
}
