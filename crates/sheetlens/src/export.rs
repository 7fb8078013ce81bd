//! JSON export of worksheet cells
//!
//! The document maps the sheet name to its cells in row-major order:
//!
//! ```json
//! { "Test1": [ { "row": 1, "col": 1, "address": "A1", "value": "8", "formula": "",
//!               "shared": { "rpr": [] }, "style": { "numFmt": {..}, "font": {..},
//!               "fill": {..}, "border": {..} } } ] }
//! ```
//!
//! Every sub-object is present even when empty.

use std::collections::BTreeMap;
use std::fs;
use std::io::{Read, Seek};
use std::path::Path;

use log::debug;
use sheetlens_core::{Cell, CellAddress, CellRange};
use sheetlens_xlsx::IntoSheetIndex;

use crate::archive::XlsxArchive;
use crate::error::Result;

/// Options for JSON export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Indent with two spaces (default: true)
    pub pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl ExportOptions {
    /// Single-line output
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

/// Serialize `cells` under `sheet_name`
pub fn render_json(sheet_name: &str, cells: &[Cell], options: &ExportOptions) -> Result<String> {
    let mut document = BTreeMap::new();
    document.insert(sheet_name, cells);

    let json = if options.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(json)
}

impl<R: Read + Seek> XlsxArchive<R> {
    /// Export the cells of `range` on `worksheet` as a JSON document
    pub fn to_json<I: IntoSheetIndex>(
        &mut self,
        range: &CellRange,
        worksheet: I,
        options: &ExportOptions,
    ) -> Result<String> {
        let index = worksheet.into_sheet_index()?;
        let cells = self.cells(range, index)?;
        let name = self.sheet_name(index as usize)?;

        debug!("exporting {} cells of {:?} ({})", cells.len(), name, range);
        render_json(name, &cells, options)
    }

    /// Export the single cell at `(row, col)`
    pub fn cell_to_json<I: IntoSheetIndex>(
        &mut self,
        row: u32,
        col: u32,
        worksheet: I,
        options: &ExportOptions,
    ) -> Result<String> {
        let range = CellRange::single(CellAddress::new(row, col)?);
        self.to_json(&range, worksheet, options)
    }

    /// Export `range` and write the document to `path`
    pub fn write_json<P: AsRef<Path>, I: IntoSheetIndex>(
        &mut self,
        path: P,
        range: &CellRange,
        worksheet: I,
        options: &ExportOptions,
    ) -> Result<()> {
        let json = self.to_json(range, worksheet, options)?;
        fs::write(path.as_ref(), json)?;
        Ok(())
    }
}
