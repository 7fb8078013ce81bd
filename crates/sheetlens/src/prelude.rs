//! Prelude module - common imports for sheetlens users
//!
//! ```rust
//! use sheetlens::prelude::*;
//! ```

// Main types
pub use crate::{ExportOptions, XlsxArchive};

// Cell types
pub use crate::{Cell, CellAddress, CellRange, Format, SharedStringEntry};

// Chart types
pub use crate::{Chart, ChartKind};

// Error types
pub use crate::{Error, Result};
