//! Worksheet part access (xl/worksheets/sheet<N>.xml)
//!
//! A [`Worksheet`] is parsed fresh for every query; cells are looked up in
//! the parsed tree and resolved against the style and shared-string tables.

use std::io::{Read, Seek};

use log::debug;
use sheetlens_core::{address_to_coordinate, Cell, CellAddress, CellRange};

use crate::error::XlsxResult;
use crate::package::Package;
use crate::shared_strings::{parse_item, SharedStringTable};
use crate::styles::StyleTable;
use crate::workbook::worksheet_path;
use crate::xml::{check_namespace, ns, XmlElement};

/// Tables a cell is resolved against
#[derive(Debug, Clone, Copy)]
pub struct CellContext<'a> {
    pub styles: &'a StyleTable,
    pub shared_strings: &'a SharedStringTable,
}

impl<'a> CellContext<'a> {
    pub fn new(styles: &'a StyleTable, shared_strings: &'a SharedStringTable) -> Self {
        Self {
            styles,
            shared_strings,
        }
    }
}

/// A parsed worksheet part
#[derive(Debug, Clone)]
pub struct Worksheet {
    index: u32,
    root: XmlElement,
}

impl Worksheet {
    /// Parse worksheet `index` (1-based) from the package
    pub fn load<R: Read + Seek>(package: &mut Package<R>, index: u32) -> XlsxResult<Self> {
        let part = worksheet_path(index)?;
        let root = package.parse_required_part(&part)?;
        check_namespace(&root, ns::SPREADSHEETML, &part);
        Ok(Self { index, root })
    }

    pub fn from_xml(index: u32, bytes: &[u8]) -> XlsxResult<Self> {
        Ok(Self {
            index,
            root: XmlElement::parse(bytes)?,
        })
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    fn sheet_data(&self) -> Option<&XmlElement> {
        let sheet_data = self.root.child("sheetData");
        if sheet_data.is_none() {
            debug!("worksheet {} has no sheetData", self.index);
        }
        sheet_data
    }

    /// Find the cell at `(row, col)`, or `None` if the sheet does not store it.
    ///
    /// The row is found by its `r` number, then its cells are scanned in
    /// document order. Cells are stored in ascending column order, so the scan
    /// stops at the first cell past `col`.
    pub fn find_cell(&self, row: u32, col: u32, ctx: CellContext<'_>) -> XlsxResult<Option<Cell>> {
        let target = CellAddress::new(row, col)?;

        let found = self.sheet_data().and_then(|sheet_data| {
            let (_, row_el) = numbered_rows(sheet_data)
                .take_while(|(r, _)| *r <= target.row)
                .find(|(r, _)| *r == target.row)?;
            numbered_cells(row_el)
                .take_while(|(c, _)| *c <= target.col)
                .find(|(c, _)| *c == target.col)
        });

        match found {
            Some((_, el)) => build_cell(el, target.row, target.col, ctx).map(Some),
            None => Ok(None),
        }
    }

    /// The cell at `(row, col)`; an empty cell if the sheet does not store it
    pub fn cell(&self, row: u32, col: u32, ctx: CellContext<'_>) -> XlsxResult<Cell> {
        match self.find_cell(row, col, ctx)? {
            Some(cell) => Ok(cell),
            None => Ok(Cell::empty(row, col)?),
        }
    }

    /// The cell at zero-based positions in the stored row and cell lists.
    ///
    /// The returned cell carries the 1-based coordinates of the stored cell.
    /// When either position is past the end, an empty cell at
    /// `(row_offset + 1, cell_offset + 1)` is returned.
    pub fn cell_at_offset(
        &self,
        row_offset: usize,
        cell_offset: usize,
        ctx: CellContext<'_>,
    ) -> XlsxResult<Cell> {
        let found = self.sheet_data().and_then(|sheet_data| {
            let (row, row_el) = numbered_rows(sheet_data).nth(row_offset)?;
            let (col, el) = numbered_cells(row_el).nth(cell_offset)?;
            Some((row, col, el))
        });

        match found {
            Some((row, col, el)) => build_cell(el, row, col, ctx),
            None => {
                let row = u32::try_from(row_offset.saturating_add(1)).unwrap_or(u32::MAX);
                let col = u32::try_from(cell_offset.saturating_add(1)).unwrap_or(u32::MAX);
                Ok(Cell::empty(row, col)?)
            }
        }
    }

    /// The `dimension/@ref` text (e.g. `A1:I9`)
    pub fn dimension_address(&self) -> Option<&str> {
        let dimension = self.root.child("dimension");
        if dimension.is_none() {
            debug!("worksheet {} has no dimension", self.index);
        }
        dimension?.attr_nonempty("ref")
    }

    /// The dimension as a range with its start and end coordinates
    pub fn dimension(&self) -> Option<CellRange> {
        let reference = self.dimension_address()?;
        match CellRange::parse(reference) {
            Ok(range) => Some(range),
            Err(e) => {
                debug!("worksheet {} dimension {:?}: {}", self.index, reference, e);
                None
            }
        }
    }

    /// The `mergeCells/mergeCell/@ref` values in document order
    pub fn merge_refs(&self) -> Vec<&str> {
        match self.root.child("mergeCells") {
            Some(merges) => merges
                .children_named("mergeCell")
                .filter_map(|m| m.attr_nonempty("ref"))
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Rows with their 1-based numbers; a row without `r` follows the previous one
fn numbered_rows(sheet_data: &XmlElement) -> impl Iterator<Item = (u32, &XmlElement)> {
    sheet_data.children_named("row").scan(0u32, |last, row| {
        *last = row
            .attr("r")
            .and_then(|r| r.trim().parse().ok())
            .unwrap_or(last.saturating_add(1));
        Some((*last, row))
    })
}

/// Cells with their 1-based column numbers; a cell without `r` follows the previous one
fn numbered_cells(row: &XmlElement) -> impl Iterator<Item = (u32, &XmlElement)> {
    row.children_named("c").scan(0u32, |last, c| {
        *last = c
            .attr("r")
            .and_then(|r| address_to_coordinate(r).ok())
            .map(|(_, col)| col)
            .unwrap_or(last.saturating_add(1));
        Some((*last, c))
    })
}

/// Resolve a stored `<c>` element into a [`Cell`].
///
/// The `t` attribute selects how the value is read: `s` indexes the shared
/// string table, `inlineStr` carries its text in `<is>`, and every other
/// type (`n`, `str`, `b`, `e`, `d`, or none) keeps `<f>` and `<v>` as text.
fn build_cell(el: &XmlElement, row: u32, col: u32, ctx: CellContext<'_>) -> XlsxResult<Cell> {
    let mut cell = Cell::empty(row, col)?;
    let raw_value = el.child("v").map(|v| v.text.as_str()).unwrap_or_default();
    cell.formula = el.child("f").map(|f| f.text.clone()).unwrap_or_default();

    match el.attr("t").unwrap_or("n") {
        "s" => match raw_value.trim().parse::<usize>() {
            Ok(index) => {
                cell.shared = ctx.shared_strings.resolve(index);
                cell.value = cell.shared.text();
            }
            Err(_) => debug!("{}: bad shared string index {:?}", cell.address, raw_value),
        },
        "inlineStr" => {
            cell.value = el.child("is").map(parse_item).unwrap_or_default().text();
        }
        _ => cell.value = raw_value.to_string(),
    }

    if let Some(style) = el.attr("s") {
        match style.trim().parse::<usize>() {
            Ok(index) => cell.style = ctx.styles.resolve(index),
            Err(_) => debug!("{}: bad style index {:?}", cell.address, style),
        }
    }

    Ok(cell)
}
