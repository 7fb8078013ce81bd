//! The opened workbook

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, Read, Seek};
use std::path::Path;

use log::debug;
use sheetlens_chart::Chart;
use sheetlens_core::{Cell, CellAddress, CellRange};
use sheetlens_xlsx::{
    chart_parts, read_chart, CellContext, IntoSheetIndex, MergeRegistry, Package,
    SharedStringTable, StyleTable, Worksheet, WorksheetIndex,
};

use crate::error::{Error, Result};

/// A read-only view of an XLSX workbook.
///
/// The workbook, style and shared-string parts are parsed once when the
/// archive is opened. Worksheet parts are parsed again for every query, so a
/// long-lived archive holds only the shared tables in memory.
///
/// Rows, columns and worksheets are numbered from 1.
///
/// ```no_run
/// use sheetlens::XlsxArchive;
///
/// let mut archive = XlsxArchive::open("report.xlsx")?;
/// let cell = archive.cell(2, 2, 1)?;
/// println!("{} = {}", cell.address, cell.value);
/// # Ok::<(), sheetlens::Error>(())
/// ```
pub struct XlsxArchive<R = BufReader<File>> {
    package: Package<R>,
    workbook: WorksheetIndex,
    styles: StyleTable,
    shared_strings: SharedStringTable,
    merges: MergeRegistry,
}

impl XlsxArchive {
    /// Open an `.xlsx` file (the extension check ignores case)
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let is_xlsx = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("xlsx"))
            .unwrap_or(false);
        if !is_xlsx {
            return Err(Error::UnsupportedFormat(path.display().to_string()));
        }

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::FileNotFound(path.display().to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        debug!("opening {}", path.display());
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read + Seek> XlsxArchive<R> {
    /// Read a workbook from any seekable source
    pub fn from_reader(reader: R) -> Result<Self> {
        let mut package = Package::new(reader)?;
        let workbook = WorksheetIndex::load(&mut package)?;
        let styles = StyleTable::load(&mut package)?;
        let shared_strings = SharedStringTable::load(&mut package)?;

        debug!(
            "workbook: {} sheets, {} cell formats, {} shared strings",
            workbook.len(),
            styles.cell_xf_count(),
            shared_strings.len()
        );

        Ok(Self {
            package,
            workbook,
            styles,
            shared_strings,
            merges: MergeRegistry::new(),
        })
    }

    /// Entry names in archive order
    pub fn entry_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.package.entry_names()
    }

    /// Entries whose name equals `name` exactly
    pub fn find_entries(&self, name: &str) -> Vec<String> {
        self.package.find_entries(name)
    }

    /// Name of the sheet at 1-based `index`
    pub fn sheet_name(&self, index: usize) -> Result<&str> {
        Ok(self.workbook.name_of(index)?)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.workbook.names().collect()
    }

    pub fn sheet_count(&self) -> usize {
        self.workbook.len()
    }

    pub fn workbook(&self) -> &WorksheetIndex {
        &self.workbook
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    pub fn shared_strings(&self) -> &SharedStringTable {
        &self.shared_strings
    }

    pub(crate) fn worksheet<I: IntoSheetIndex>(&mut self, worksheet: I) -> Result<Worksheet> {
        let index = worksheet.into_sheet_index()?;
        Ok(Worksheet::load(&mut self.package, index)?)
    }

    pub(crate) fn context(&self) -> CellContext<'_> {
        CellContext::new(&self.styles, &self.shared_strings)
    }

    /// The resolved cell at `(row, col)`.
    ///
    /// A cell the worksheet does not store comes back empty, with only its
    /// coordinates set.
    pub fn cell<I: IntoSheetIndex>(&mut self, row: u32, col: u32, worksheet: I) -> Result<Cell> {
        CellAddress::new(row, col)?;
        let sheet = self.worksheet(worksheet)?;
        Ok(sheet.cell(row, col, self.context())?)
    }

    /// Like [`cell`](Self::cell), but `None` when the worksheet does not store the cell
    pub fn find_cell<I: IntoSheetIndex>(
        &mut self,
        row: u32,
        col: u32,
        worksheet: I,
    ) -> Result<Option<Cell>> {
        CellAddress::new(row, col)?;
        let sheet = self.worksheet(worksheet)?;
        Ok(sheet.find_cell(row, col, self.context())?)
    }

    /// The cell at zero-based positions in the stored rows and their cells
    pub fn cell_at_offset<I: IntoSheetIndex>(
        &mut self,
        row_offset: usize,
        cell_offset: usize,
        worksheet: I,
    ) -> Result<Cell> {
        let sheet = self.worksheet(worksheet)?;
        Ok(sheet.cell_at_offset(row_offset, cell_offset, self.context())?)
    }

    /// Resolved cells of `range`, row by row
    pub fn cells<I: IntoSheetIndex>(&mut self, range: &CellRange, worksheet: I) -> Result<Vec<Cell>> {
        let sheet = self.worksheet(worksheet)?;
        let ctx = self.context();
        range
            .cells()
            .map(|addr| sheet.cell(addr.row, addr.col, ctx).map_err(Error::from))
            .collect()
    }

    /// The merge range having `start` as a corner, or an empty string
    pub fn merge_range<I: IntoSheetIndex>(&mut self, start: &str, worksheet: I) -> Result<String> {
        let index = worksheet.into_sheet_index()?;
        Ok(self.merges.range_containing(&mut self.package, start, index)?)
    }

    /// All merge ranges of a worksheet, keyed by the worksheet number
    pub fn merge_ranges<I: IntoSheetIndex>(
        &mut self,
        worksheet: I,
    ) -> Result<BTreeMap<String, Vec<String>>> {
        let index = worksheet.into_sheet_index()?;
        Ok(self.merges.all_ranges(&mut self.package, index)?)
    }

    /// The worksheet's declared used range as written (e.g. `A1:I9`)
    pub fn dimension_address<I: IntoSheetIndex>(&mut self, worksheet: I) -> Result<Option<String>> {
        let sheet = self.worksheet(worksheet)?;
        Ok(sheet.dimension_address().map(str::to_string))
    }

    /// The worksheet's declared used range
    pub fn dimension<I: IntoSheetIndex>(&mut self, worksheet: I) -> Result<Option<CellRange>> {
        let sheet = self.worksheet(worksheet)?;
        Ok(sheet.dimension())
    }

    /// Chart part names in numeric order
    pub fn chart_parts(&self) -> Vec<String> {
        chart_parts(&self.package)
    }

    /// The chart at 1-based `index` in [`chart_parts`](Self::chart_parts) order
    pub fn chart(&mut self, index: usize) -> Result<Option<Chart>> {
        Ok(read_chart(&mut self.package, index)?)
    }
}
