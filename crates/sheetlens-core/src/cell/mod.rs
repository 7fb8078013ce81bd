//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A range of cells (e.g., "A1:B10")
//! - [`Cell`] - A cell with its value, formula, shared string and format resolved

mod address;

pub use address::{
    address_to_coordinate, column_to_letters, coordinate_to_address, letters_to_column,
    CellAddress, CellRange, CellRangeIterator,
};

use crate::error::Result;
use crate::rich_text::SharedStringEntry;
use crate::style::Format;

/// A resolved worksheet cell
///
/// Cells missing from a sparse worksheet are represented by [`Cell::empty`]:
/// the coordinates are set and every other field holds its default.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Row number (1-based)
    pub row: u32,
    /// Column number (1-based)
    pub col: u32,
    /// A1-style address
    pub address: String,
    /// Display text: concatenated rich text for shared strings, the cached value otherwise
    pub value: String,
    /// Formula text without the leading `=`, or empty
    pub formula: String,
    /// Shared-string entry; empty unless the cell references the shared-string table
    pub shared: SharedStringEntry,
    /// Resolved format; default when the cell has no style index
    pub style: Format,
}

impl Cell {
    /// An empty cell at `(row, col)`, failing if the coordinates are outside the worksheet
    pub fn empty(row: u32, col: u32) -> Result<Self> {
        let addr = CellAddress::new(row, col)?;
        Ok(Self {
            row,
            col,
            address: addr.to_a1_string(),
            ..Default::default()
        })
    }

    /// True if the cell carries no value, formula or shared string
    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && self.formula.is_empty() && self.shared.rpr.is_empty()
    }
}
