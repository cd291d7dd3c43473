//! Read-back support for DOCX packages written by this crate.
//!
//! This is a verification reader: it extracts paragraph styles, alignment
//! and text from `word/document.xml`, and style definitions from
//! `word/styles.xml`. It does not build an editable document model.
use crate::common::xml::{resolve_entity, unescape_xml};
use crate::ooxml::docx::enums::WdStyleType;
use crate::ooxml::docx::format::ParagraphAlignment;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::opc::{PackURI, PhysPkgReader};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

const DOCUMENT_PART: &str = "/word/document.xml";
const STYLES_PART: &str = "/word/styles.xml";

/// A paragraph as read back from `word/document.xml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphInfo {
    /// Paragraph style id (`w:pStyle`)
    pub style: Option<String>,
    /// Direct paragraph alignment (`w:jc`)
    pub alignment: Option<ParagraphAlignment>,
    /// Text of all runs; `<w:br/>` reads as `\n` and `<w:tab/>` as `\t`
    pub text: String,
}

/// A style definition as read back from `word/styles.xml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleInfo {
    /// Style id (`w:styleId`)
    pub id: String,
    /// Display name (`w:name`)
    pub name: String,
    /// Style type, if recognized
    pub style_type: Option<WdStyleType>,
    /// Font size in half-points (`w:sz`)
    pub size: Option<u32>,
    /// Whether the style's run properties include bold
    pub bold: bool,
}

/// Reader over the bytes of a saved `.docx` package.
///
/// # Examples
///
/// ```rust,no_run
/// use coding_standards::ooxml::docx::DocxReader;
///
/// let reader = DocxReader::open("NORMALDANCE_Coding_Standards_v1.0.docx")?;
/// for para in reader.paragraphs()? {
///     println!("{:?}: {}", para.style, para.text);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct DocxReader {
    data: Vec<u8>,
}

impl DocxReader {
    /// Open a package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Open a package from its bytes.
    ///
    /// Fails if the bytes are not a ZIP archive or the archive has no main
    /// document part.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let phys = PhysPkgReader::new(data)?;
        if !phys.contains(&part_uri(DOCUMENT_PART)?) {
            return Err(OoxmlError::InvalidFormat(format!(
                "package has no {}",
                DOCUMENT_PART
            )));
        }
        Ok(Self {
            data: data.to_vec(),
        })
    }

    /// Check whether the package contains a part, e.g. `word/styles.xml`.
    pub fn has_part(&self, name: &str) -> bool {
        let name = if name.starts_with('/') {
            name.to_string()
        } else {
            format!("/{}", name)
        };
        let Ok(uri) = PackURI::new(name) else {
            return false;
        };
        PhysPkgReader::new(&self.data)
            .map(|phys| phys.contains(&uri))
            .unwrap_or(false)
    }

    /// Paragraphs of the document body in document order.
    pub fn paragraphs(&self) -> Result<Vec<ParagraphInfo>> {
        let xml = self.part_blob(DOCUMENT_PART)?;
        let mut reader = Reader::from_reader(&xml[..]);

        let mut paragraphs = Vec::new();
        let mut current: Option<ParagraphInfo> = None;
        let mut in_ppr = false;
        let mut in_run = false;
        let mut in_text = false;
        let mut buf = Vec::with_capacity(1024);

        loop {
            buf.clear();
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"p" => {
                        current = Some(ParagraphInfo::default());
                    },
                    b"pPr" => in_ppr = true,
                    b"r" => in_run = true,
                    b"t" => in_text = in_run,
                    _ => {},
                },
                Event::Empty(e) => {
                    let Some(para) = current.as_mut() else {
                        if e.local_name().as_ref() == b"p" {
                            paragraphs.push(ParagraphInfo::default());
                        }
                        continue;
                    };
                    match e.local_name().as_ref() {
                        b"pStyle" if in_ppr => para.style = attr_val(&e)?,
                        b"jc" if in_ppr => {
                            para.alignment = attr_val(&e)?
                                .as_deref()
                                .and_then(ParagraphAlignment::from_xml);
                        },
                        b"br" | b"cr" if in_run => para.text.push('\n'),
                        b"tab" if in_run => para.text.push('\t'),
                        _ => {},
                    }
                },
                Event::Text(e) if in_text => {
                    if let Some(para) = current.as_mut() {
                        para.text.push_str(utf8(&e)?);
                    }
                },
                Event::GeneralRef(e) if in_text => {
                    let name = utf8(&e)?;
                    let ch = resolve_entity(name).ok_or_else(|| {
                        OoxmlError::Xml(format!("unknown entity reference: &{};", name))
                    })?;
                    if let Some(para) = current.as_mut() {
                        para.text.push(ch);
                    }
                },
                Event::End(e) => match e.local_name().as_ref() {
                    b"p" => {
                        if let Some(para) = current.take() {
                            paragraphs.push(para);
                        }
                    },
                    b"pPr" => in_ppr = false,
                    b"r" => in_run = false,
                    b"t" => in_text = false,
                    _ => {},
                },
                Event::Eof => break,
                _ => {},
            }
        }

        Ok(paragraphs)
    }

    /// Style definitions in `word/styles.xml` order.
    pub fn styles(&self) -> Result<Vec<StyleInfo>> {
        let xml = self.part_blob(STYLES_PART)?;
        let mut reader = Reader::from_reader(&xml[..]);

        let mut styles = Vec::new();
        let mut current: Option<StyleInfo> = None;
        let mut in_rpr = false;
        let mut buf = Vec::with_capacity(1024);

        loop {
            buf.clear();
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"style" => {
                        let mut style = StyleInfo::default();
                        for attr in e.attributes().flatten() {
                            let value = unescape_xml(utf8(&attr.value)?);
                            match attr.key.local_name().as_ref() {
                                b"styleId" => style.id = value,
                                b"type" => style.style_type = WdStyleType::from_xml(&value),
                                _ => {},
                            }
                        }
                        current = Some(style);
                    },
                    b"rPr" => in_rpr = current.is_some(),
                    _ => {},
                },
                Event::Empty(e) => {
                    let Some(style) = current.as_mut() else {
                        continue;
                    };
                    match e.local_name().as_ref() {
                        b"name" => style.name = attr_val(&e)?.unwrap_or_default(),
                        b"b" if in_rpr => style.bold = is_on(attr_val(&e)?.as_deref()),
                        b"sz" if in_rpr => {
                            style.size = attr_val(&e)?.and_then(|v| v.parse().ok());
                        },
                        _ => {},
                    }
                },
                Event::End(e) => match e.local_name().as_ref() {
                    b"style" => {
                        if let Some(style) = current.take() {
                            styles.push(style);
                        }
                    },
                    b"rPr" => in_rpr = false,
                    _ => {},
                },
                Event::Eof => break,
                _ => {},
            }
        }

        Ok(styles)
    }

    /// Find a style by id.
    pub fn style(&self, style_id: &str) -> Result<Option<StyleInfo>> {
        Ok(self.styles()?.into_iter().find(|s| s.id == style_id))
    }

    fn part_blob(&self, name: &str) -> Result<Vec<u8>> {
        let mut phys = PhysPkgReader::new(&self.data)?;
        match phys.blob_for(&part_uri(name)?) {
            Ok(blob) => Ok(blob),
            Err(OpcError::PartNotFound(name)) => Err(OoxmlError::PartNotFound(name)),
            Err(e) => Err(e.into()),
        }
    }
}

fn part_uri(name: &str) -> Result<PackURI> {
    PackURI::new(name).map_err(|e| OoxmlError::Opc(OpcError::InvalidPackUri(e)))
}

fn utf8(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| OoxmlError::Xml(e.to_string()))
}

/// Value of the `w:val` attribute, unescaped.
fn attr_val(e: &BytesStart<'_>) -> Result<Option<String>> {
    for attr in e.attributes().flatten() {
        if attr.key.local_name().as_ref() == b"val" {
            return Ok(Some(unescape_xml(utf8(&attr.value)?)));
        }
    }
    Ok(None)
}

/// ST_OnOff: a missing value means on.
fn is_on(val: Option<&str>) -> bool {
    !matches!(val, Some("0" | "false" | "off"))
}
