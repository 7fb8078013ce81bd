//! Cell formatting types
//!
//! This module contains the resolved parts of a cell format:
//! - [`Format`] - Complete cell format
//! - [`NumFmt`] - Number format code
//! - [`Font`] - Font settings
//! - [`Fill`] - Pattern fill
//! - [`Border`] - Which border edges are drawn

mod border;
mod fill;
mod font;
mod number_format;

pub use border::Border;
pub use fill::{ColorRef, Fill};
pub use font::Font;
pub use number_format::NumFmt;

/// Complete resolved cell format
///
/// Every part defaults to its empty instance when the cell has no style
/// or an index in the style chain does not resolve.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Format {
    /// Number format
    #[cfg_attr(feature = "serde", serde(rename = "numFmt"))]
    pub num_fmt: NumFmt,
    /// Font settings
    pub font: Font,
    /// Fill settings
    pub fill: Fill,
    /// Border settings
    pub border: Border,
}

impl Format {
    /// True if no part carries any setting
    pub fn is_default(&self) -> bool {
        *self == Format::default()
    }
}
