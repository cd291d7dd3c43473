/// Parts of an OPC package.
///
/// A part is one stream in the package: its name, its content type, its
/// serialized bytes and the relationships it owns.
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

#[derive(Debug, Clone)]
pub struct Part {
    /// Part name (e.g., "/word/document.xml")
    partname: PackURI,
    /// Content type written to [Content_Types].xml
    content_type: String,
    /// Serialized part content
    blob: Vec<u8>,
    /// Relationships from this part to other parts
    rels: Relationships,
}

impl Part {
    pub fn new(partname: PackURI, content_type: impl Into<String>, blob: Vec<u8>) -> Self {
        let rels = Relationships::new(partname.base_uri());
        Self {
            partname,
            content_type: content_type.into(),
            blob,
            rels,
        }
    }

    /// Create a part holding XML text.
    pub fn from_xml(partname: PackURI, content_type: impl Into<String>, xml: String) -> Self {
        Self::new(partname, content_type, xml.into_bytes())
    }

    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    #[inline]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate this part to another part, returning the rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels.relate_to(target, reltype)
    }
}
