//! Text runs (`w:r`) for DOCX paragraphs.
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// A mutable run.
///
/// Runs contain text and character formatting. Line feeds in the text become
/// `<w:br/>` and tabs become `<w:tab/>`, matching how Word itself splits
/// typed text.
#[derive(Debug)]
pub struct MutableRun {
    /// Run text
    pub(crate) text: String,
    /// Run properties
    pub(crate) properties: RunProperties,
}

impl MutableRun {
    pub(crate) fn new() -> Self {
        Self {
            text: String::new(),
            properties: RunProperties::default(),
        }
    }

    /// Set the text content.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Get the text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Make the text bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.properties.bold = Some(bold);
        self
    }

    /// Set font size in half-points (e.g., 24 = 12pt).
    pub fn font_size(&mut self, size: u32) -> &mut Self {
        self.properties.font_size = Some(size);
        self
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:r>");

        if self.properties.has_properties() {
            xml.push_str("<w:rPr>");

            if let Some(bold) = self.properties.bold {
                xml.push_str(if bold { "<w:b/>" } else { "<w:b w:val=\"0\"/>" });
            }

            if let Some(size) = self.properties.font_size {
                write!(xml, "<w:sz w:val=\"{}\"/><w:szCs w:val=\"{}\"/>", size, size)?;
            }

            xml.push_str("</w:rPr>");
        }

        for (i, line) in self.text.split('\n').enumerate() {
            if i > 0 {
                xml.push_str("<w:br/>");
            }
            for (j, segment) in line.split('\t').enumerate() {
                if j > 0 {
                    xml.push_str("<w:tab/>");
                }
                if !segment.is_empty() {
                    write!(
                        xml,
                        "<w:t xml:space=\"preserve\">{}</w:t>",
                        escape_xml(segment)
                    )?;
                }
            }
        }

        xml.push_str("</w:r>");

        Ok(())
    }
}

/// Run properties.
#[derive(Debug, Default)]
pub(crate) struct RunProperties {
    pub(crate) bold: Option<bool>,
    pub(crate) font_size: Option<u32>,
}

impl RunProperties {
    pub(crate) fn has_properties(&self) -> bool {
        self.bold.is_some() || self.font_size.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(run: &MutableRun) -> String {
        let mut xml = String::new();
        run.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_plain_text() {
        let mut run = MutableRun::new();
        run.set_text("Версия 1.0");
        assert_eq!(
            render(&run),
            r#"<w:r><w:t xml:space="preserve">Версия 1.0</w:t></w:r>"#
        );
    }

    #[test]
    fn test_line_breaks_and_tabs() {
        let mut run = MutableRun::new();
        run.set_text("Стандарты кодирования\nNormalDance\tv1");
        assert_eq!(
            render(&run),
            concat!(
                r#"<w:r><w:t xml:space="preserve">Стандарты кодирования</w:t><w:br/>"#,
                r#"<w:t xml:space="preserve">NormalDance</w:t><w:tab/>"#,
                r#"<w:t xml:space="preserve">v1</w:t></w:r>"#
            )
        );
    }

    #[test]
    fn test_formatting() {
        let mut run = MutableRun::new();
        run.set_text("x");
        run.bold(true).font_size(36);
        assert!(render(&run).contains(
            r#"<w:rPr><w:b/><w:sz w:val="36"/><w:szCs w:val="36"/></w:rPr>"#
        ));

        run.bold(false);
        assert!(render(&run).contains(r#"<w:rPr><w:b w:val="0"/>"#));
    }

    #[test]
    fn test_escaping() {
        let mut run = MutableRun::new();
        run.set_text("Bundle size < 500KB & Don't");
        assert!(render(&run).contains("Bundle size &lt; 500KB &amp; Don&apos;t"));
    }
}
