//! Document properties stored under `docProps/`.
//!
//! [`DocumentProperties`] maps to `docProps/core.xml` (Dublin Core metadata)
//! and [`AppProperties`] to `docProps/app.xml` (extended properties).

use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use chrono::{DateTime, SecondsFormat, Utc};

/// Document core properties (metadata).
///
/// Timestamps are only written when set, so a document built without them
/// serializes identically on every run.
#[derive(Debug, Clone, Default)]
pub struct DocumentProperties {
    /// Document title
    pub title: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document creator/author
    pub creator: Option<String>,
    /// Document keywords (comma-separated)
    pub keywords: Option<String>,
    /// Document description
    pub description: Option<String>,
    /// Last modified by
    pub last_modified_by: Option<String>,
    /// Document category
    pub category: Option<String>,
    /// Content status (e.g., "Draft", "Final")
    pub content_status: Option<String>,
    /// Document language
    pub language: Option<String>,
    /// Document revision number
    pub revision: Option<u32>,
    /// Creation date
    pub created: Option<DateTime<Utc>>,
    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl DocumentProperties {
    /// Create a new empty document properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title.
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the document subject.
    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the document creator/author.
    pub fn creator(mut self, creator: &str) -> Self {
        self.creator = Some(creator.to_string());
        self
    }

    /// Set the document keywords.
    pub fn keywords(mut self, keywords: &str) -> Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    /// Set the document description.
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Set who last modified the document.
    pub fn last_modified_by(mut self, name: &str) -> Self {
        self.last_modified_by = Some(name.to_string());
        self
    }

    /// Set the document category.
    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Set the content status.
    pub fn content_status(mut self, status: &str) -> Self {
        self.content_status = Some(status.to_string());
        self
    }

    /// Set the document language (e.g. "ru-RU").
    pub fn language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    pub fn revision(mut self, revision: u32) -> Self {
        self.revision = Some(revision);
        self
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    pub fn modified(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = Some(modified);
        self
    }

    /// Generate core.xml content for this properties set.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

        let text_elements = [
            ("dc:title", &self.title),
            ("dc:subject", &self.subject),
            ("dc:creator", &self.creator),
            ("cp:keywords", &self.keywords),
            ("dc:description", &self.description),
            ("cp:lastModifiedBy", &self.last_modified_by),
            ("cp:category", &self.category),
            ("cp:contentStatus", &self.content_status),
            ("dc:language", &self.language),
        ];

        for (tag, value) in text_elements {
            if let Some(value) = value {
                xml.push_str(&format!("<{tag}>{}</{tag}>", escape_xml(value)));
            }
        }

        if let Some(revision) = self.revision {
            xml.push_str(&format!("<cp:revision>{}</cp:revision>", revision));
        }

        // W3CDTF wants whole seconds with a Z suffix
        if let Some(ref created) = self.created {
            xml.push_str("<dcterms:created xsi:type=\"dcterms:W3CDTF\">");
            xml.push_str(&created.to_rfc3339_opts(SecondsFormat::Secs, true));
            xml.push_str("</dcterms:created>");
        }

        if let Some(ref modified) = self.modified {
            xml.push_str("<dcterms:modified xsi:type=\"dcterms:W3CDTF\">");
            xml.push_str(&modified.to_rfc3339_opts(SecondsFormat::Secs, true));
            xml.push_str("</dcterms:modified>");
        }

        xml.push_str("</cp:coreProperties>");
        xml
    }
}

/// Extended (application) properties.
#[derive(Debug, Clone)]
pub struct AppProperties {
    /// Name of the producing application
    pub application: String,
    /// Version of the producing application ("XX.YYYY")
    pub app_version: Option<String>,
}

impl AppProperties {
    pub fn new(application: &str) -> Self {
        Self {
            application: application.to_string(),
            app_version: None,
        }
    }

    pub fn app_version(mut self, version: &str) -> Self {
        self.app_version = Some(version.to_string());
        self
    }

    /// Generate app.xml content.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(&format!(
            r#"<Properties xmlns="{}">"#,
            namespace::OFC_EXTENDED_PROPERTIES
        ));
        xml.push_str(&format!(
            "<Application>{}</Application>",
            escape_xml(&self.application)
        ));
        if let Some(ref version) = self.app_version {
            xml.push_str(&format!("<AppVersion>{}</AppVersion>", escape_xml(version)));
        }
        xml.push_str("</Properties>");
        xml
    }
}

impl Default for AppProperties {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_document_properties_builder() {
        let props = DocumentProperties::new()
            .title("Test Document")
            .creator("John Doe")
            .subject("Testing")
            .keywords("test, document, rust");

        assert_eq!(props.title, Some("Test Document".to_string()));
        assert_eq!(props.creator, Some("John Doe".to_string()));
        assert_eq!(props.subject, Some("Testing".to_string()));
        assert_eq!(props.keywords, Some("test, document, rust".to_string()));
    }

    #[test]
    fn test_xml_generation() {
        let props = DocumentProperties::new()
            .title("Стандарты кодирования")
            .creator("NormalDance")
            .language("ru-RU");

        let xml = props.to_xml();
        assert!(xml.contains("<dc:title>Стандарты кодирования</dc:title>"));
        assert!(xml.contains("<dc:creator>NormalDance</dc:creator>"));
        assert!(xml.contains("<dc:language>ru-RU</dc:language>"));
        assert!(!xml.contains("dcterms:created"));
    }

    #[test]
    fn test_timestamps() {
        let when = Utc.with_ymd_and_hms(2025, 12, 1, 9, 30, 0).unwrap();
        let xml = DocumentProperties::new().created(when).modified(when).to_xml();
        assert!(xml.contains(
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">2025-12-01T09:30:00Z</dcterms:created>"#
        ));
        assert!(xml.contains("<dcterms:modified"));
    }

    #[test]
    fn test_xml_escaping() {
        let props = DocumentProperties::new().title("Test & <Special> \"Characters\"");

        let xml = props.to_xml();
        assert!(xml.contains("&amp;"));
        assert!(xml.contains("&lt;"));
        assert!(xml.contains("&gt;"));
        assert!(xml.contains("&quot;"));
    }

    #[test]
    fn test_app_properties() {
        let xml = AppProperties::new("coding-standards").app_version("1.0000").to_xml();
        assert!(xml.contains("<Application>coding-standards</Application>"));
        assert!(xml.contains("<AppVersion>1.0000</AppVersion>"));
    }
}
