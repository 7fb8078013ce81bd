//! Zip package access

use std::io::{Read, Seek};

use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{XlsxError, XlsxResult};
use crate::xml::XmlElement;

/// Well-known part names
pub mod parts {
    pub const WORKBOOK: &str = "xl/workbook.xml";
    pub const STYLES: &str = "xl/styles.xml";
    pub const SHARED_STRINGS: &str = "xl/sharedStrings.xml";
    pub const CONTENT_TYPES: &str = "[Content_Types].xml";
}

/// An opened OOXML package
///
/// Owns the zip archive; parts are read on demand and never written.
pub struct Package<R> {
    archive: ZipArchive<R>,
}

impl<R: Read + Seek> Package<R> {
    /// Open a package from a seekable reader
    pub fn new(reader: R) -> XlsxResult<Self> {
        Ok(Self {
            archive: ZipArchive::new(reader)?,
        })
    }

    /// Entry names in archive order
    pub fn entry_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.archive.file_names()
    }

    /// Entry names equal to `name` (zero or one element)
    pub fn find_entries(&self, name: &str) -> Vec<String> {
        self.entry_names()
            .filter(|entry| *entry == name)
            .map(str::to_string)
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entry_names().any(|entry| entry == name)
    }

    /// Read a part's bytes, or `None` if the archive has no such entry
    pub fn read_part(&mut self, name: &str) -> XlsxResult<Option<Vec<u8>>> {
        let mut file = match self.archive.by_name(name) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut bytes = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut bytes)?;
        Ok(Some(bytes))
    }

    /// Read and parse a part, or `None` if the archive has no such entry
    pub fn parse_part(&mut self, name: &str) -> XlsxResult<Option<XmlElement>> {
        match self.read_part(name)? {
            Some(bytes) => XmlElement::parse(&bytes).map(Some),
            None => Ok(None),
        }
    }

    /// Read and parse a part that must exist
    pub fn parse_required_part(&mut self, name: &str) -> XlsxResult<XmlElement> {
        self.parse_part(name)?
            .ok_or_else(|| XlsxError::MissingPart(name.to_string()))
    }
}
