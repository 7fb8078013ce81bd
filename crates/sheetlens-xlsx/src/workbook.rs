//! Workbook part (workbook.xml): sheet names and worksheet part paths

use std::io::{Read, Seek};

use sheetlens_core::{Error, Result};

use crate::error::XlsxResult;
use crate::package::{parts, Package};
use crate::xml::{check_namespace, ns, XmlElement};

/// Conversion of caller input into a worksheet number.
///
/// Integers are taken as is, floats are truncated toward zero, and strings
/// must hold an integer. Anything else is an [`Error::InvalidArgument`].
pub trait IntoSheetIndex {
    fn into_sheet_index(self) -> Result<u32>;
}

impl IntoSheetIndex for u32 {
    fn into_sheet_index(self) -> Result<u32> {
        Ok(self)
    }
}

impl IntoSheetIndex for usize {
    fn into_sheet_index(self) -> Result<u32> {
        u32::try_from(self).map_err(|_| Error::InvalidArgument(format!("sheet index {}", self)))
    }
}

impl IntoSheetIndex for i32 {
    fn into_sheet_index(self) -> Result<u32> {
        u32::try_from(self).map_err(|_| Error::InvalidArgument(format!("sheet index {}", self)))
    }
}

impl IntoSheetIndex for i64 {
    fn into_sheet_index(self) -> Result<u32> {
        u32::try_from(self).map_err(|_| Error::InvalidArgument(format!("sheet index {}", self)))
    }
}

impl IntoSheetIndex for f64 {
    fn into_sheet_index(self) -> Result<u32> {
        let truncated = self.trunc();
        if !truncated.is_finite() || truncated < 0.0 || truncated > u32::MAX as f64 {
            return Err(Error::InvalidArgument(format!("sheet index {}", self)));
        }
        Ok(truncated as u32)
    }
}

impl IntoSheetIndex for &str {
    fn into_sheet_index(self) -> Result<u32> {
        self.trim()
            .parse()
            .map_err(|_| Error::InvalidArgument(format!("sheet index {:?}", self)))
    }
}

impl IntoSheetIndex for &String {
    fn into_sheet_index(self) -> Result<u32> {
        self.as_str().into_sheet_index()
    }
}

/// Part path of worksheet `index`: `xl/worksheets/sheet<index>.xml`
pub fn worksheet_path<I: IntoSheetIndex>(index: I) -> Result<String> {
    Ok(format!("xl/worksheets/sheet{}.xml", index.into_sheet_index()?))
}

/// A `sheets/sheet` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetEntry {
    pub name: String,
    pub sheet_id: Option<u32>,
    /// Relationship id (`r:id`)
    pub rel_id: Option<String>,
    /// `hidden`, `veryHidden`, or `None` when visible
    pub state: Option<String>,
}

/// Sheets declared by the workbook, addressed from 1
#[derive(Debug, Clone, Default)]
pub struct WorksheetIndex {
    sheets: Vec<SheetEntry>,
}

impl WorksheetIndex {
    /// Read `xl/workbook.xml`, which every package must contain
    pub fn load<R: Read + Seek>(package: &mut Package<R>) -> XlsxResult<Self> {
        let root = package.parse_required_part(parts::WORKBOOK)?;
        check_namespace(&root, ns::SPREADSHEETML, parts::WORKBOOK);
        Ok(Self::from_element(&root))
    }

    pub fn from_xml(bytes: &[u8]) -> XlsxResult<Self> {
        Ok(Self::from_element(&XmlElement::parse(bytes)?))
    }

    /// Collect the named children of `sheets` in document order
    pub fn from_element(root: &XmlElement) -> Self {
        let sheets = root
            .child("sheets")
            .map(|sheets| {
                sheets
                    .children
                    .iter()
                    .filter_map(|el| {
                        let name = el.attr_nonempty("name")?;
                        Some(SheetEntry {
                            name: name.to_string(),
                            sheet_id: el.attr("sheetId").and_then(|v| v.parse().ok()),
                            rel_id: el.attr("r:id").map(str::to_string),
                            state: el
                                .attr("state")
                                .filter(|s| *s != "visible")
                                .map(str::to_string),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self { sheets }
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn sheets(&self) -> &[SheetEntry] {
        &self.sheets
    }

    /// Sheet entry at 1-based `index`
    pub fn entry(&self, index: usize) -> Result<&SheetEntry> {
        index
            .checked_sub(1)
            .and_then(|i| self.sheets.get(i))
            .ok_or(Error::SheetNotFound {
                index,
                count: self.sheets.len(),
            })
    }

    /// Name of the sheet at 1-based `index`
    pub fn name_of(&self, index: usize) -> Result<&str> {
        self.entry(index).map(|sheet| sheet.name.as_str())
    }

    /// 1-based position of the sheet called `name`
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.sheets
            .iter()
            .position(|sheet| sheet.name == name)
            .map(|i| i + 1)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str())
    }
}
