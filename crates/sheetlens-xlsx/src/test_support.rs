//! In-memory package fixtures for unit tests

use std::io::{Cursor, Write};

use crate::package::Package;
use crate::xml::ns;

/// Builds a zip package from literal parts
#[derive(Default)]
pub(crate) struct PackageBuilder {
    parts: Vec<(String, Vec<u8>)>,
}

impl PackageBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn part(mut self, name: &str, content: impl AsRef<[u8]>) -> Self {
        self.parts.push((name.to_string(), content.as_ref().to_vec()));
        self
    }

    pub(crate) fn build(self) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let cursor = Cursor::new(&mut buf);
            let mut zip = zip::ZipWriter::new(cursor);
            let options = zip::write::SimpleFileOptions::default();

            for (name, content) in &self.parts {
                zip.start_file(name.as_str(), options).unwrap();
                zip.write_all(content).unwrap();
            }

            zip.finish().unwrap();
        }
        buf
    }

    pub(crate) fn open(self) -> Package<Cursor<Vec<u8>>> {
        Package::new(Cursor::new(self.build())).unwrap()
    }
}

pub(crate) fn workbook_xml(sheet_names: &[&str]) -> String {
    let sheets: String = sheet_names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            format!(
                r#"<sheet name="{name}" sheetId="{id}" r:id="rId{id}"/>"#,
                id = i + 1
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="{}" xmlns:r="{}"><sheets>{sheets}</sheets></workbook>"#,
        ns::SPREADSHEETML,
        ns::RELATIONSHIPS
    )
}

pub(crate) fn worksheet_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="{}" xmlns:r="{}">{body}</worksheet>"#,
        ns::SPREADSHEETML,
        ns::RELATIONSHIPS
    )
}

pub(crate) fn styles_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="{}">{body}</styleSheet>"#,
        ns::SPREADSHEETML
    )
}

pub(crate) fn shared_strings_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<sst xmlns="{}">{body}</sst>"#,
        ns::SPREADSHEETML
    )
}
