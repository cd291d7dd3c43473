use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

// Built once, shared by every writer
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

// LeftmostLongest so that "&amp;lt;" unescapes to "&lt;" and not "<"
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("Failed to build XML unescaper")
});

/// Escape XML special characters.
///
/// Safe for both element content and attribute values.
///
/// # Examples
///
/// ```
/// use coding_standards::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("Don't"), "Don&apos;t");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Unescape the five predefined XML entities.
///
/// Unknown or malformed entities are left unchanged.
///
/// # Examples
///
/// ```
/// use coding_standards::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;a &amp; b&gt;"), "<a & b>");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;");
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}

/// Resolve the body of an entity reference (the part between `&` and `;`).
///
/// Handles the predefined entities as well as decimal (`#1049`) and
/// hexadecimal (`#x419`) character references. Returns `None` for anything
/// else.
pub fn resolve_entity(name: &str) -> Option<char> {
    if let Some(code) = name.strip_prefix('#') {
        let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => code.parse::<u32>().ok()?,
        };
        return char::from_u32(value);
    }

    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_specials() {
        assert_eq!(
            escape_xml(r#"<tag attr="v">Don't & stop</tag>"#),
            "&lt;tag attr=&quot;v&quot;&gt;Don&apos;t &amp; stop&lt;/tag&gt;"
        );
    }

    #[test]
    fn test_cyrillic_passes_through() {
        let text = "Стандарты кодирования";
        assert_eq!(escape_xml(text), text);
        assert_eq!(unescape_xml(text), text);
    }

    #[test]
    fn test_resolve_entity() {
        assert_eq!(resolve_entity("lt"), Some('<'));
        assert_eq!(resolve_entity("apos"), Some('\''));
        assert_eq!(resolve_entity("#1049"), Some('Й'));
        assert_eq!(resolve_entity("#x419"), Some('Й'));
        assert_eq!(resolve_entity("nbsp"), None);
        assert_eq!(resolve_entity("#xZZ"), None);
    }
}
