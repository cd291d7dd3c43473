/// The in-memory OPC package assembled before writing.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;

/// An OPC package: package-level relationships plus its parts.
///
/// Parts keep their insertion order, which is also the order in which they
/// are written to the ZIP archive.
#[derive(Debug)]
pub struct OpcPackage {
    /// Package-level relationships (_rels/.rels)
    rels: Relationships,
    /// Parts in insertion order
    parts: Vec<Part>,
}

impl OpcPackage {
    /// Create a new empty package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI),
            parts: Vec::new(),
        }
    }

    /// Add a part, replacing any existing part with the same name.
    pub fn add_part(&mut self, part: Part) {
        match self
            .parts
            .iter_mut()
            .find(|existing| existing.partname() == part.partname())
        {
            Some(existing) => *existing = part,
            None => self.parts.push(part),
        }
    }

    /// Get a part by name.
    pub fn get_part(&self, partname: &PackURI) -> Result<&Part> {
        self.parts
            .iter()
            .find(|part| part.partname() == partname)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.parts.iter().any(|part| part.partname() == partname)
    }

    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package to a part, returning the rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels.relate_to(target, reltype)
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}
