//! Error types for sheetlens-core

use std::fmt;

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Which coordinate axis a range check failed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("col"),
        }
    }
}

/// Errors that can occur in sheetlens-core
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Invalid cell range format
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Row or column outside the legal worksheet bounds
    #[error("Invalid {axis} number {index}: must be between 1 and {max}")]
    CellOutsideRange { axis: Axis, index: u32, max: u32 },

    /// Sheet index beyond the sheets declared by the workbook
    #[error("Sheet {index} not found (workbook has {count} sheets)")]
    SheetNotFound { index: usize, count: usize },

    /// Argument that cannot be coerced to what the operation needs
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn row_outside(index: u32) -> Self {
        Error::CellOutsideRange {
            axis: Axis::Row,
            index,
            max: crate::MAX_ROWS,
        }
    }

    pub(crate) fn col_outside(index: u32) -> Self {
        Error::CellOutsideRange {
            axis: Axis::Column,
            index,
            max: crate::MAX_COLS,
        }
    }
}
