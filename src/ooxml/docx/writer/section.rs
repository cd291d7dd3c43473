use crate::common::unit::inches_to_twips;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// Page setup of the document's single section, in twips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionProperties {
    pub page_width: u32,
    pub page_height: u32,
    pub margin_top: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
    pub margin_right: u32,
    /// Distance of the header from the page edge
    pub header_distance: u32,
    /// Distance of the footer from the page edge
    pub footer_distance: u32,
}

impl Default for SectionProperties {
    /// US Letter, portrait, one-inch margins.
    fn default() -> Self {
        let inch = inches_to_twips(1.0);
        Self {
            page_width: inches_to_twips(8.5),
            page_height: inches_to_twips(11.0),
            margin_top: inch,
            margin_bottom: inch,
            margin_left: inch,
            margin_right: inch,
            header_distance: inches_to_twips(0.5),
            footer_distance: inches_to_twips(0.5),
        }
    }
}

impl SectionProperties {
    /// Write the body-level `w:sectPr` element.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        write!(
            xml,
            r#"<w:sectPr><w:pgSz w:w="{}" w:h="{}"/>"#,
            self.page_width, self.page_height
        )?;
        write!(
            xml,
            r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="{}" w:footer="{}" w:gutter="0"/>"#,
            self.margin_top,
            self.margin_right,
            self.margin_bottom,
            self.margin_left,
            self.header_distance,
            self.footer_distance
        )?;
        xml.push_str(r#"<w:cols w:space="720"/></w:sectPr>"#);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_letter_section() {
        let section = SectionProperties::default();
        assert_eq!((section.page_width, section.page_height), (12240, 15840));

        let mut xml = String::new();
        section.to_xml(&mut xml).unwrap();
        assert!(xml.starts_with(r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/>"#));
        assert!(xml.contains(
            r#"w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720""#
        ));
        assert!(xml.ends_with("</w:sectPr>"));
    }
}
