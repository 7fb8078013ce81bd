//! # sheetlens-xlsx
//!
//! Read-only decoding of XLSX (Office Open XML) packages.
//!
//! Each part is read from the zip package on demand and parsed into an
//! in-memory [`XmlElement`] tree:
//!
//! - `xl/workbook.xml` → [`WorksheetIndex`] (sheet names)
//! - `xl/styles.xml` → [`StyleTable`] (cell formats)
//! - `xl/sharedStrings.xml` → [`SharedStringTable`]
//! - `xl/worksheets/sheet<N>.xml` → [`Worksheet`] (cells, dimension, merges)
//! - `xl/charts/chart<N>.xml` → [`sheetlens_chart::Chart`]
//!
//! Coordinates are 1-based throughout.

mod charts;
mod error;
mod merge;
mod package;
mod shared_strings;
mod sheet;
mod styles;
mod workbook;
mod xml;

#[cfg(test)]
mod test_support;

pub use charts::{chart_parts, parse_chart, read_chart};
pub use error::{XlsxError, XlsxResult};
pub use merge::{find_range, MergeRegistry};
pub use package::{parts, Package};
pub use shared_strings::SharedStringTable;
pub use sheet::{CellContext, Worksheet};
pub use styles::{CellXf, StyleTable};
pub use workbook::{worksheet_path, IntoSheetIndex, SheetEntry, WorksheetIndex};
pub use xml::{ns, strip_namespace, XmlElement};
