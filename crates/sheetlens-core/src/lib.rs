//! # sheetlens-core
//!
//! Core data structures for the sheetlens xlsx decoder.
//!
//! This crate provides the types shared by the reader crates:
//! - [`CellAddress`] and [`CellRange`] - 1-based cell addressing and ranges
//! - [`Cell`] - A resolved cell (value, formula, shared string, format)
//! - [`Format`] - Resolved cell formatting (number format, font, fill, border)
//! - [`SharedStringEntry`] - A shared-string table entry made of rich-text runs
//!
//! ## Example
//!
//! ```rust
//! use sheetlens_core::{address_to_coordinate, coordinate_to_address};
//!
//! assert_eq!(address_to_coordinate("AA2").unwrap(), (2, 27));
//! assert_eq!(coordinate_to_address(3, 2), "B3");
//! ```

pub mod cell;
pub mod error;
pub mod rich_text;
pub mod style;

// Re-exports for convenience
pub use cell::{
    address_to_coordinate, coordinate_to_address, Cell, CellAddress, CellRange,
};
pub use error::{Axis, Error, Result};
pub use rich_text::{RichTextRun, SharedStringEntry};

pub use style::{Border, ColorRef, Fill, Font, Format, NumFmt};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum accepted column number (`AAAA`; Excel itself stops at XFD = 16,384)
pub const MAX_COLS: u32 = 18_279;
