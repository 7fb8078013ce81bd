//! Shared string table (sharedStrings.xml)

use std::io::{Read, Seek};

use log::debug;
use sheetlens_core::{RichTextRun, SharedStringEntry};

use crate::error::XlsxResult;
use crate::package::{parts, Package};
use crate::xml::{check_namespace, decode_excel_escapes, ns, XmlElement};

/// Shared strings in table order, each as its list of runs
#[derive(Debug, Clone, Default)]
pub struct SharedStringTable {
    entries: Vec<SharedStringEntry>,
}

impl SharedStringTable {
    /// Read the package's shared strings; a package without the part gets an empty table
    pub fn load<R: Read + Seek>(package: &mut Package<R>) -> XlsxResult<Self> {
        match package.parse_part(parts::SHARED_STRINGS)? {
            Some(root) => {
                check_namespace(&root, ns::SPREADSHEETML, parts::SHARED_STRINGS);
                Ok(Self::from_element(&root))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_xml(bytes: &[u8]) -> XlsxResult<Self> {
        Ok(Self::from_element(&XmlElement::parse(bytes)?))
    }

    /// Build the table from a parsed `sst` element
    pub fn from_element(root: &XmlElement) -> Self {
        Self {
            entries: root.children_named("si").map(parse_item).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SharedStringEntry> {
        self.entries.get(index)
    }

    /// Entry at `index`, or an empty entry if the index is out of range
    pub fn resolve(&self, index: usize) -> SharedStringEntry {
        self.get(index).cloned().unwrap_or_else(|| {
            debug!(
                "shared string index {} out of range ({} entries)",
                index,
                self.entries.len()
            );
            SharedStringEntry::default()
        })
    }
}

/// Parse a string item (`<si>` or an inline `<is>`).
///
/// A direct `<t>` becomes one plain run, each `<r>` one formatted run.
/// Phonetic runs (`<rPh>`) are skipped.
pub(crate) fn parse_item(si: &XmlElement) -> SharedStringEntry {
    let rpr = si
        .children
        .iter()
        .filter_map(|child| match child.local_name() {
            "t" => Some(RichTextRun::plain(decode_excel_escapes(&child.text))),
            "r" => Some(parse_run(child)),
            _ => None,
        })
        .collect();

    SharedStringEntry { rpr }
}

fn parse_run(r: &XmlElement) -> RichTextRun {
    let mut run = RichTextRun {
        text: r
            .child("t")
            .map(|t| decode_excel_escapes(&t.text))
            .unwrap_or_default(),
        ..Default::default()
    };

    let Some(props) = r.child("rPr") else {
        return run;
    };

    for prop in &props.children {
        let val = || prop.attr("val").unwrap_or_default().to_string();
        match prop.local_name() {
            "sz" => run.sz = val(),
            "rFont" => run.r_font = val(),
            "family" => run.family = val(),
            "charset" => run.charset = val(),
            "scheme" => run.scheme = val(),
            "vertAlign" => run.vert_align = val(),
            "color" => {
                run.color = ["theme", "rgb", "indexed"]
                    .into_iter()
                    .find_map(|key| prop.attr_nonempty(key))
                    .unwrap_or_default()
                    .to_string()
            }
            _ => {}
        }
    }

    run
}
