//! Paragraph and character style definitions for `word/styles.xml`.
use crate::common::unit::pt_to_half_points;
use crate::common::xml::escape_xml;
use crate::ooxml::docx::enums::WdStyleType;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

/// A named style registered on a document.
///
/// Besides the two built-ins every document carries ("Normal" and
/// "Default Paragraph Font"), styles are created with [`MutableStyle::from_name`]
/// and carry only a font size and a bold flag.
///
/// # Examples
///
/// ```rust
/// use coding_standards::ooxml::docx::writer::MutableStyle;
///
/// let style = MutableStyle::from_name("Custom Title", 18.0, true);
/// assert_eq!(style.style_id(), "CustomTitle");
/// assert_eq!(style.font_size(), Some(36));
/// ```
#[derive(Debug, Clone)]
pub struct MutableStyle {
    style_id: String,
    name: String,
    style_type: WdStyleType,
    /// Default style for its type (`w:default`)
    is_default: bool,
    /// User-defined (`w:customStyle`)
    is_custom: bool,
    priority: Option<i32>,
    /// Shown in the quick style gallery (`w:qFormat`)
    is_quick_style: bool,
    /// Half-points
    font_size: Option<u32>,
    bold: bool,
}

impl MutableStyle {
    /// Create an empty custom style.
    pub fn new(
        style_id: impl Into<String>,
        name: impl Into<String>,
        style_type: WdStyleType,
    ) -> Self {
        Self {
            style_id: style_id.into(),
            name: name.into(),
            style_type,
            is_default: false,
            is_custom: true,
            priority: None,
            is_quick_style: false,
            font_size: None,
            bold: false,
        }
    }

    /// Create a custom paragraph style from a display name, a size in points
    /// and a bold flag.
    ///
    /// The style id is the name with whitespace removed, the way Word derives
    /// ids for user-defined styles.
    pub fn from_name(name: &str, size_pt: f64, bold: bool) -> Self {
        let style_id: String = name.chars().filter(|c| !c.is_whitespace()).collect();
        Self {
            font_size: Some(pt_to_half_points(size_pt)),
            bold,
            is_quick_style: true,
            ..Self::new(style_id, name, WdStyleType::Paragraph)
        }
    }

    /// The built-in "Normal" paragraph style.
    pub fn normal() -> Self {
        Self {
            is_default: true,
            is_custom: false,
            is_quick_style: true,
            ..Self::new("Normal", "Normal", WdStyleType::Paragraph)
        }
    }

    /// The built-in default character style.
    pub fn default_paragraph_font() -> Self {
        Self {
            is_default: true,
            is_custom: false,
            priority: Some(1),
            ..Self::new(
                "DefaultParagraphFont",
                "Default Paragraph Font",
                WdStyleType::Character,
            )
        }
    }

    #[inline]
    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn style_type(&self) -> WdStyleType {
        self.style_type
    }

    #[inline]
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    #[inline]
    pub fn is_custom(&self) -> bool {
        self.is_custom
    }

    /// Font size in half-points.
    #[inline]
    pub fn font_size(&self) -> Option<u32> {
        self.font_size
    }

    #[inline]
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        write!(
            xml,
            r#"<w:style w:type="{}" w:styleId="{}""#,
            self.style_type.to_xml(),
            escape_xml(&self.style_id)
        )?;
        if self.is_default {
            xml.push_str(r#" w:default="1""#);
        }
        if self.is_custom {
            xml.push_str(r#" w:customStyle="1""#);
        }
        write!(xml, r#"><w:name w:val="{}"/>"#, escape_xml(&self.name))?;

        if let Some(priority) = self.priority {
            write!(xml, r#"<w:uiPriority w:val="{}"/>"#, priority)?;
        }
        if self.is_quick_style {
            xml.push_str("<w:qFormat/>");
        }

        if self.bold || self.font_size.is_some() {
            xml.push_str("<w:rPr>");
            if self.bold {
                xml.push_str("<w:b/><w:bCs/>");
            }
            if let Some(size) = self.font_size {
                write!(xml, r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/>"#, size)?;
            }
            xml.push_str("</w:rPr>");
        }

        xml.push_str("</w:style>");
        Ok(())
    }
}

/// Render `word/styles.xml`: document defaults (Calibri 11 pt, Russian
/// proofing language) followed by `styles` in order.
pub fn generate_styles_xml(styles: &[MutableStyle]) -> Result<String> {
    let mut xml = String::with_capacity(2048);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, r#"<w:styles xmlns:w="{}">"#, namespace::WML_MAIN)?;

    xml.push_str("<w:docDefaults><w:rPrDefault><w:rPr>");
    xml.push_str(r#"<w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:eastAsia="Calibri" w:cs="Calibri"/>"#);
    xml.push_str(r#"<w:sz w:val="22"/><w:szCs w:val="22"/>"#);
    xml.push_str(r#"<w:lang w:val="ru-RU" w:eastAsia="en-US" w:bidi="ar-SA"/>"#);
    xml.push_str("</w:rPr></w:rPrDefault>");
    xml.push_str(r#"<w:pPrDefault><w:pPr><w:spacing w:after="160" w:line="259" w:lineRule="auto"/></w:pPr></w:pPrDefault>"#);
    xml.push_str("</w:docDefaults>");

    for style in styles {
        style.to_xml(&mut xml)?;
    }

    xml.push_str("</w:styles>");
    Ok(xml)
}
