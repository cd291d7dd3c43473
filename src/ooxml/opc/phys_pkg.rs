/// Physical package access: the ZIP archive underneath an OPC package.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use std::io::{Cursor, Read, Write};
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipArchive, ZipWriter};

/// Physical package reader over an in-memory ZIP archive.
pub struct PhysPkgReader<'data> {
    archive: ZipArchive<Cursor<&'data [u8]>>,
}

impl<'data> PhysPkgReader<'data> {
    /// Open a package from its bytes.
    pub fn new(data: &'data [u8]) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(data))?;
        Ok(Self { archive })
    }

    /// Read the content of the member addressed by `pack_uri`.
    pub fn blob_for(&mut self, pack_uri: &PackURI) -> Result<Vec<u8>> {
        let mut file = match self.archive.by_name(pack_uri.membername()) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => {
                return Err(OpcError::PartNotFound(pack_uri.to_string()));
            },
            Err(e) => return Err(e.into()),
        };

        let mut blob = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut blob)?;
        Ok(blob)
    }

    /// Check if a specific member exists in the package.
    pub fn contains(&self, pack_uri: &PackURI) -> bool {
        self.archive.index_for_name(pack_uri.membername()).is_some()
    }

    /// List all member names in archive order.
    pub fn member_names(&self) -> Vec<String> {
        self.archive.file_names().map(String::from).collect()
    }
}

/// Physical package writer for creating OPC packages.
///
/// Every entry is stamped with the ZIP epoch (1980-01-01 00:00) so that the
/// same parts always produce the same archive bytes.
pub struct PhysPkgWriter {
    /// The underlying ZIP archive writer
    archive: ZipWriter<Cursor<Vec<u8>>>,
}

impl PhysPkgWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Write a part to the package with Deflate compression.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());
        self.archive.start_file(pack_uri.membername(), options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the package bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.archive.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut writer = PhysPkgWriter::new();
        let pack_uri = PackURI::new("/test.txt").unwrap();
        writer.write(&pack_uri, b"Hello, World!").unwrap();
        let zip_data = writer.finish().unwrap();

        let mut reader = PhysPkgReader::new(&zip_data).unwrap();
        assert_eq!(reader.blob_for(&pack_uri).unwrap(), b"Hello, World!");
    }

    #[test]
    fn test_multiple_parts_keep_order() {
        let mut writer = PhysPkgWriter::new();

        let content_types = PackURI::new("/[Content_Types].xml").unwrap();
        let rels = PackURI::new("/_rels/.rels").unwrap();
        let document = PackURI::new("/word/document.xml").unwrap();

        writer.write(&content_types, b"<Types/>").unwrap();
        writer.write(&rels, b"<Relationships/>").unwrap();
        writer.write(&document, b"<document/>").unwrap();

        let zip_data = writer.finish().unwrap();
        let mut reader = PhysPkgReader::new(&zip_data).unwrap();

        assert_eq!(
            reader.member_names(),
            vec!["[Content_Types].xml", "_rels/.rels", "word/document.xml"]
        );
        assert!(reader.contains(&rels));
        assert_eq!(reader.blob_for(&document).unwrap(), b"<document/>");
    }

    #[test]
    fn test_missing_member() {
        let zip_data = PhysPkgWriter::new().finish().unwrap();
        let mut reader = PhysPkgReader::new(&zip_data).unwrap();
        let uri = PackURI::new("/word/document.xml").unwrap();
        assert!(matches!(reader.blob_for(&uri), Err(OpcError::PartNotFound(_))));
    }

    #[test]
    fn test_output_is_deterministic() {
        let build = || {
            let mut writer = PhysPkgWriter::new();
            let uri = PackURI::new("/word/document.xml").unwrap();
            writer.write(&uri, "Стандарты".as_bytes()).unwrap();
            writer.finish().unwrap()
        };
        assert_eq!(build(), build());
    }
}
