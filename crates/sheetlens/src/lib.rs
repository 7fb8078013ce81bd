//! # sheetlens
//!
//! A read-only decoder for Excel XLSX workbooks.
//!
//! sheetlens opens an `.xlsx` package and answers queries against it without
//! loading whole worksheets into a workbook model.
//!
//! ## Features
//!
//! - Resolved cells: value, formula, rich-text shared strings and formats
//! - Sheet names, merged ranges and worksheet dimensions
//! - Best-effort chart metadata (scatter, bar, line, pie)
//! - JSON export of a cell range
//!
//! Rows, columns and worksheets are numbered from 1.
//!
//! ## Example
//!
//! ```no_run
//! use sheetlens::prelude::*;
//!
//! let mut archive = XlsxArchive::open("report.xlsx")?;
//!
//! let name = archive.sheet_name(1)?.to_string();
//! let total = archive.cell(2, 2, 1)?;
//! println!("{}!{} = {}", name, total.address, total.value);
//!
//! let range = CellRange::parse("A1:C3")?;
//! let json = archive.to_json(&range, 1, &ExportOptions::default())?;
//! # Ok::<(), sheetlens::Error>(())
//! ```

mod archive;
pub mod error;
pub mod export;
pub mod prelude;

pub use archive::XlsxArchive;
pub use error::{Error, Result};
pub use export::{render_json, ExportOptions};

// Re-export core types
pub use sheetlens_core::{
    address_to_coordinate, coordinate_to_address, Axis, Border, Cell, CellAddress, CellRange,
    ColorRef, Fill, Font, Format, NumFmt, RichTextRun, SharedStringEntry, MAX_COLS, MAX_ROWS,
};

// Re-export chart types
pub use sheetlens_chart::{CachedValue, Chart, ChartKind, DataSeries, SeriesRef};

// Re-export decoder types
pub use sheetlens_xlsx::{worksheet_path, IntoSheetIndex, XlsxError};
