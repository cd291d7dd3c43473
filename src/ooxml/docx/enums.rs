/// Enumerations for Word document elements.
///
/// These mirror the VBA / python-docx enumerations of the same name.
use std::fmt;

/// Specifies the type of a style.
///
/// Corresponds to the VBA `WdStyleType` enumeration.
///
/// # Examples
///
/// ```rust
/// use coding_standards::ooxml::docx::enums::WdStyleType;
///
/// let style_type = WdStyleType::Paragraph;
/// assert_eq!(style_type.to_xml(), "paragraph");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum WdStyleType {
    /// Paragraph style.
    #[default]
    Paragraph = 1,
    /// Character style.
    Character = 2,
    /// Table style.
    Table = 3,
    /// List (numbering) style.
    List = 4,
}

impl WdStyleType {
    /// Convert the style type to its XML attribute value.
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Character => "character",
            Self::Table => "table",
            Self::List => "numbering",
        }
    }

    /// Parse style type from XML attribute value.
    ///
    /// Returns `None` if the value is not recognized.
    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "paragraph" => Some(Self::Paragraph),
            "character" => Some(Self::Character),
            "table" => Some(Self::Table),
            "numbering" => Some(Self::List),
            _ => None,
        }
    }
}

impl fmt::Display for WdStyleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_xml())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_type_xml() {
        for ty in [
            WdStyleType::Paragraph,
            WdStyleType::Character,
            WdStyleType::Table,
            WdStyleType::List,
        ] {
            assert_eq!(WdStyleType::from_xml(ty.to_xml()), Some(ty));
        }
        assert_eq!(WdStyleType::from_xml("bogus"), None);
        assert_eq!(WdStyleType::default(), WdStyleType::Paragraph);
    }
}
