//! Cell address and range types
//!
//! All coordinates are 1-based: `A1` is row 1, column 1.

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// Convert a 1-based column number to letters (1 = A, 26 = Z, 27 = AA, etc.)
///
/// Column 0 has no letters and yields an empty string.
pub fn column_to_letters(col: u32) -> String {
    let mut result = String::new();
    let mut n = col;

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}

/// Convert column letters to a 1-based column number (A = 1, Z = 26, AA = 27, etc.)
///
/// Letters are matched case-insensitively. Base 26 without a zero digit.
pub fn letters_to_column(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidAddress("empty column letters".into()));
    }

    let mut col: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidAddress(format!(
                "invalid column letter '{}'",
                c
            )));
        }
        let digit = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        col = col
            .checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| Error::InvalidAddress(format!("column '{}' overflows", letters)))?;
    }

    Ok(col)
}

/// Parse an A1-style address into `(row, col)`.
///
/// The address must be column letters followed by row digits. No range
/// checking is done here; use [`CellAddress::parse`] for validated input.
///
/// # Examples
/// ```
/// use sheetlens_core::address_to_coordinate;
///
/// assert_eq!(address_to_coordinate("A1").unwrap(), (1, 1));
/// assert_eq!(address_to_coordinate("aa2").unwrap(), (2, 27));
/// assert!(address_to_coordinate("8A2").is_err());
/// ```
pub fn address_to_coordinate(address: &str) -> Result<(u32, u32)> {
    let upper = address.to_ascii_uppercase();
    let split = upper
        .find(|c: char| !c.is_ascii_uppercase())
        .unwrap_or(upper.len());
    let (letters, digits) = upper.split_at(split);

    if letters.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidAddress(address.to_string()));
    }

    let col = letters_to_column(letters)?;
    let row: u32 = digits
        .parse()
        .map_err(|_| Error::InvalidAddress(format!("row number overflows in '{}'", address)))?;

    Ok((row, col))
}

/// Format `(row, col)` as an A1-style address.
///
/// A column of 0 has no letters, so the result is the bare row number.
pub fn coordinate_to_address(row: u32, col: u32) -> String {
    format!("{}{}", column_to_letters(col), row)
}

/// A validated cell address (e.g., "A1")
///
/// Rows are 1..=1,048,576 and columns 1..=18,279.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Row number (1-based)
    pub row: u32,
    /// Column number (1-based, A=1)
    pub col: u32,
}

impl CellAddress {
    /// Create a cell address, rejecting coordinates outside the worksheet
    pub fn new(row: u32, col: u32) -> Result<Self> {
        validate(row, col)?;
        Ok(Self { row, col })
    }

    /// Parse a cell address from A1-style notation
    ///
    /// `$` absolute markers are accepted and dropped.
    ///
    /// # Examples
    /// ```
    /// use sheetlens_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("B3").unwrap();
    /// assert_eq!((addr.row, addr.col), (3, 2));
    ///
    /// assert!(CellAddress::parse("A0").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim().replace('$', "");
        let (row, col) = address_to_coordinate(&s)?;
        Self::new(row, col)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        coordinate_to_address(self.row, self.col)
    }
}

/// Check that `row` and `col` fall inside the worksheet grid
pub(crate) fn validate(row: u32, col: u32) -> Result<()> {
    if row == 0 || row > MAX_ROWS {
        return Err(Error::row_outside(row));
    }
    if col == 0 || col > MAX_COLS {
        return Err(Error::col_outside(col));
    }
    Ok(())
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A range of cells (e.g., "A1:B10")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// Start address (top-left)
    pub start: CellAddress,
    /// End address (bottom-right)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range, normalized so `start` is the top-left corner
    pub fn new(start: CellAddress, end: CellAddress) -> Self {
        Self {
            start: CellAddress {
                row: start.row.min(end.row),
                col: start.col.min(end.col),
            },
            end: CellAddress {
                row: start.row.max(end.row),
                col: start.col.max(end.col),
            },
        }
    }

    /// Create a single-cell range
    pub fn single(addr: CellAddress) -> Self {
        Self {
            start: addr,
            end: addr,
        }
    }

    /// Parse a range from A1:B10 notation, or a single address
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        match s.split_once(':') {
            Some((start, end)) => {
                if start.is_empty() || end.is_empty() {
                    return Err(Error::InvalidRange(s.to_string()));
                }
                let start = CellAddress::parse(start)?;
                let end = CellAddress::parse(end)?;
                Ok(Self::new(start, end))
            }
            None => Ok(Self::single(CellAddress::parse(s)?)),
        }
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        addr.row >= self.start.row
            && addr.row <= self.end.row
            && addr.col >= self.start.col
            && addr.col <= self.end.col
    }

    /// Get the number of rows in the range
    pub fn row_count(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    /// Get the number of columns in the range
    pub fn col_count(&self) -> u32 {
        self.end.col - self.start.col + 1
    }

    /// Get the total number of cells in the range
    pub fn cell_count(&self) -> u64 {
        self.row_count() as u64 * self.col_count() as u64
    }

    /// Iterate over all cell addresses in the range (row by row)
    pub fn cells(&self) -> CellRangeIterator {
        CellRangeIterator {
            range: *self,
            current_row: self.start.row,
            current_col: self.start.col,
        }
    }

    /// Format as A1:B10 string
    pub fn to_a1_string(&self) -> String {
        if self.start == self.end {
            self.start.to_a1_string()
        } else {
            format!("{}:{}", self.start.to_a1_string(), self.end.to_a1_string())
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Iterator over cells in a range
pub struct CellRangeIterator {
    range: CellRange,
    current_row: u32,
    current_col: u32,
}

impl Iterator for CellRangeIterator {
    type Item = CellAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_row > self.range.end.row {
            return None;
        }

        let addr = CellAddress {
            row: self.current_row,
            col: self.current_col,
        };

        self.current_col += 1;
        if self.current_col > self.range.end.col {
            self.current_col = self.range.start.col;
            self.current_row += 1;
        }

        Some(addr)
    }
}
