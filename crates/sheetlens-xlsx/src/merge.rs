//! Merged cell ranges (`mergeCells`)

use std::collections::{BTreeMap, HashMap};
use std::io::{Read, Seek};

use crate::error::XlsxResult;
use crate::package::Package;
use crate::sheet::Worksheet;

/// Merge range lookups with a per-(address, worksheet) memo.
///
/// Memoized answers live as long as the registry; nothing invalidates them.
#[derive(Debug, Default)]
pub struct MergeRegistry {
    memo: HashMap<(String, u32), String>,
}

impl MergeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first merge range with `start` as one of its corner references.
    ///
    /// Returns an empty string when the worksheet has no such range.
    pub fn range_containing<R: Read + Seek>(
        &mut self,
        package: &mut Package<R>,
        start: &str,
        worksheet: u32,
    ) -> XlsxResult<String> {
        let key = (start.to_string(), worksheet);
        if let Some(found) = self.memo.get(&key) {
            return Ok(found.clone());
        }

        let sheet = Worksheet::load(package, worksheet)?;
        let found = find_range(&sheet.merge_refs(), start)
            .unwrap_or_default()
            .to_string();

        self.memo.insert(key, found.clone());
        Ok(found)
    }

    /// All merge ranges of a worksheet, keyed by the worksheet number.
    ///
    /// Always re-reads the worksheet. A sheet without merges yields an empty map.
    pub fn all_ranges<R: Read + Seek>(
        &self,
        package: &mut Package<R>,
        worksheet: u32,
    ) -> XlsxResult<BTreeMap<String, Vec<String>>> {
        let sheet = Worksheet::load(package, worksheet)?;
        let refs = sheet.merge_refs();

        let mut ranges = BTreeMap::new();
        if !refs.is_empty() {
            ranges.insert(
                worksheet.to_string(),
                refs.into_iter().map(str::to_string).collect(),
            );
        }
        Ok(ranges)
    }

    /// Number of memoized lookups
    pub fn memoized(&self) -> usize {
        self.memo.len()
    }
}

/// First reference whose `:`-separated endpoints include `start`
pub fn find_range<'a>(refs: &[&'a str], start: &str) -> Option<&'a str> {
    refs.iter()
        .copied()
        .find(|r| r.split(':').any(|end| end == start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XlsxError;
    use crate::test_support::{worksheet_xml, PackageBuilder};
    use pretty_assertions::assert_eq;

    fn package() -> Package<std::io::Cursor<Vec<u8>>> {
        PackageBuilder::new()
            .part(
                "xl/worksheets/sheet1.xml",
                worksheet_xml(
                    r#"<sheetData/><mergeCells count="2"><mergeCell ref="H1:I1"/><mergeCell ref="A7:G9"/></mergeCells>"#,
                ),
            )
            .part("xl/worksheets/sheet2.xml", worksheet_xml("<sheetData/>"))
            .open()
    }

    #[test]
    fn test_range_containing_matches_corners() {
        let mut package = package();
        let mut merges = MergeRegistry::new();

        assert_eq!(merges.range_containing(&mut package, "H1", 1).unwrap(), "H1:I1");
        assert_eq!(merges.range_containing(&mut package, "I1", 1).unwrap(), "H1:I1");
        assert_eq!(merges.range_containing(&mut package, "G9", 1).unwrap(), "A7:G9");
        assert_eq!(merges.range_containing(&mut package, "A1", 1).unwrap(), "");
        // interior cells are not corners
        assert_eq!(merges.range_containing(&mut package, "B8", 1).unwrap(), "");
    }

    #[test]
    fn test_range_containing_without_merges() {
        let mut package = package();
        let mut merges = MergeRegistry::new();
        assert_eq!(merges.range_containing(&mut package, "H1", 2).unwrap(), "");
    }

    #[test]
    fn test_range_containing_is_memoized() {
        let mut merges = MergeRegistry::new();
        assert_eq!(merges.range_containing(&mut package(), "H1", 1).unwrap(), "H1:I1");
        assert_eq!(merges.memoized(), 1);

        // the memo answers even for a package that lacks the worksheet
        let mut other = PackageBuilder::new().part("xl/workbook.xml", "<workbook/>").open();
        assert_eq!(merges.range_containing(&mut other, "H1", 1).unwrap(), "H1:I1");
        assert!(matches!(
            merges.range_containing(&mut other, "A7", 1),
            Err(XlsxError::MissingPart(_))
        ));
    }

    #[test]
    fn test_all_ranges() {
        let mut package = package();
        let merges = MergeRegistry::new();

        let all = merges.all_ranges(&mut package, 1).unwrap();
        let mut expected = BTreeMap::new();
        expected.insert("1".to_string(), vec!["H1:I1".to_string(), "A7:G9".to_string()]);
        assert_eq!(all, expected);

        assert!(merges.all_ranges(&mut package, 2).unwrap().is_empty());
    }
}
