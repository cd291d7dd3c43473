/// Shared formatting types for DOCX (used in both reading and writing).

/// Paragraph alignment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphAlignment {
    Left,
    Center,
    Right,
    Justify,
}

impl ParagraphAlignment {
    /// Value of the `w:jc` element.
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "both",
        }
    }

    /// Parse a `w:jc` value. Accepts the transitional "start"/"end" aliases.
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "left" | "start" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" | "end" => Some(Self::Right),
            "both" => Some(Self::Justify),
            _ => None,
        }
    }
}
