/// Relationship-related objects for OPC packages.
///
/// This module provides types for managing relationships from a source (the
/// package or a part) to the parts it references.
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::opc::packuri::PackURI;

/// A single relationship from a source to a target part.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference, relative to the source's base URI
    target_ref: String,
}

impl Relationship {
    /// Create a new relationship.
    pub fn new(r_id: String, reltype: String, target_ref: String) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
        }
    }

    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    /// Numeric part of the rId, used for ordering.
    fn ordinal(&self) -> u32 {
        self.r_id
            .strip_prefix("rId")
            .and_then(|n| n.parse().ok())
            .unwrap_or(u32::MAX)
    }
}

/// Collection of relationships from a single source.
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Base URI for computing relative target references
    base_uri: String,

    /// Relationships in allocation order
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    ///
    /// # Arguments
    /// * `base_uri` - Base URI of the source ("/" for the package, "/word" for the main document)
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            rels: Vec::new(),
        }
    }

    /// Relate the source to `target`, returning the allocated rId.
    ///
    /// An existing relationship of the same type and target is reused.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(&self.base_uri);

        if let Some(existing) = self
            .rels
            .iter()
            .find(|rel| rel.reltype == reltype && rel.target_ref == target_ref)
        {
            return existing.r_id.clone();
        }

        let r_id = self.next_r_id();
        self.rels.push(Relationship::new(
            r_id.clone(),
            reltype.to_string(),
            target_ref,
        ));
        r_id
    }

    /// Find the first relationship of the given type.
    pub fn by_reltype(&self, reltype: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.reltype == reltype)
    }

    /// Iterate over relationships in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Lowest unused "rIdN".
    fn next_r_id(&self) -> String {
        (1..)
            .map(|n| format!("rId{}", n))
            .find(|candidate| self.rels.iter().all(|rel| &rel.r_id != candidate))
            .unwrap_or_default()
    }

    /// Serialize to the XML of a `.rels` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<Relationships xmlns="{}">"#,
            namespace::OPC_RELATIONSHIPS
        ));

        // Sort by numeric rId so "rId10" follows "rId9"
        let mut rels: Vec<&Relationship> = self.rels.iter().collect();
        rels.sort_by_key(|rel| rel.ordinal());

        for rel in rels {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref())
            ));
        }

        xml.push_str("</Relationships>");

        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_allocates_sequential_ids() {
        let mut rels = Relationships::new("/word");
        let styles = PackURI::new("/word/styles.xml").unwrap();
        let settings = PackURI::new("/word/settings.xml").unwrap();

        assert_eq!(rels.relate_to(&styles, rt::STYLES), "rId1");
        assert_eq!(rels.relate_to(&settings, rt::SETTINGS), "rId2");
        // Same target and type reuses the id
        assert_eq!(rels.relate_to(&styles, rt::STYLES), "rId1");
        assert_eq!(rels.len(), 2);
        assert_eq!(rels.by_reltype(rt::SETTINGS).unwrap().target_ref(), "settings.xml");
    }

    #[test]
    fn test_xml_orders_numerically() {
        let mut rels = Relationships::new("/");
        for i in 0..11 {
            let uri = PackURI::new(format!("/part{}.xml", i)).unwrap();
            rels.relate_to(&uri, rt::OFFICE_DOCUMENT);
        }

        let xml = rels.to_xml();
        let pos_9 = xml.find(r#"Id="rId9""#).unwrap();
        let pos_10 = xml.find(r#"Id="rId10""#).unwrap();
        assert!(pos_9 < pos_10);
        assert!(xml.contains(r#"Target="part0.xml""#));
    }
}
