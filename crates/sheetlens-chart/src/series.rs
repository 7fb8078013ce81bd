//! Data series types

use once_cell::sync::Lazy;
use regex::Regex;
use sheetlens_core::CellRange;

/// `Sheet!$A$1:$B$2`, optionally with a quoted sheet name
static REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+)!(\$?[A-Z]+\$?\d+(?::\$?[A-Z]+\$?\d+)?)$").expect("valid reference regex")
});

/// A value cached in a chart part's `numCache` / `strCache`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CachedValue {
    Int(i64),
    Float(f64),
    Null,
}

impl CachedValue {
    /// Convert cached text: integer if possible, else float, else null
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if let Ok(i) = text.parse::<i64>() {
            CachedValue::Int(i)
        } else if let Ok(f) = text.parse::<f64>() {
            CachedValue::Float(f)
        } else {
            CachedValue::Null
        }
    }
}

/// A series reference (`c:f`) and the values cached beside it
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesRef {
    /// Formula text, e.g. `Sheet1!$A$2:$A$6`
    pub formula: String,
    /// Sheet name with quoting removed; `None` if the formula is not a plain reference
    pub sheet: Option<String>,
    /// Range part of the formula as written, e.g. `$A$2:$A$6`
    pub range: Option<String>,
    /// Cached values, one slot per point
    pub cache: Vec<CachedValue>,
}

impl SeriesRef {
    /// Split a reference formula into sheet name and range
    pub fn from_formula<S: Into<String>>(formula: S) -> Self {
        let formula = formula.into();
        let (sheet, range) = match REFERENCE.captures(formula.trim()) {
            Some(caps) => (
                Some(unquote_sheet(&caps[1])),
                Some(caps[2].to_string()),
            ),
            None => (None, None),
        };
        Self {
            formula,
            sheet,
            range,
            cache: Vec::new(),
        }
    }

    /// The referenced range with `$` markers removed
    pub fn cell_range(&self) -> Option<CellRange> {
        self.range
            .as_deref()
            .and_then(|r| CellRange::parse(r).ok())
    }
}

fn unquote_sheet(sheet: &str) -> String {
    match sheet
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
    {
        Some(inner) => inner.replace("''", "'"),
        None => sheet.to_string(),
    }
}

/// Data series for a chart
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataSeries {
    /// Series name reference (`c:tx`)
    pub name: Option<SeriesRef>,
    /// Categories / X values (`c:cat` or `c:xVal`)
    pub categories: Option<SeriesRef>,
    /// Values / Y values (`c:val` or `c:yVal`)
    pub values: Option<SeriesRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_reference() {
        let r = SeriesRef::from_formula("Test1!$B$2:$B$4");
        assert_eq!(r.sheet.as_deref(), Some("Test1"));
        assert_eq!(r.range.as_deref(), Some("$B$2:$B$4"));
        assert_eq!(r.cell_range().unwrap().to_string(), "B2:B4");
    }

    #[test]
    fn test_parse_quoted_sheet() {
        let r = SeriesRef::from_formula("'Q1 ''Sales'''!$A$1");
        assert_eq!(r.sheet.as_deref(), Some("Q1 'Sales'"));
        assert_eq!(r.range.as_deref(), Some("$A$1"));
    }

    #[test]
    fn test_parse_non_reference() {
        let r = SeriesRef::from_formula("{1,2,3}");
        assert_eq!(r.sheet, None);
        assert_eq!(r.range, None);
        assert_eq!(r.cell_range(), None);
    }

    #[test]
    fn test_cached_value_parse() {
        assert_eq!(CachedValue::parse("57"), CachedValue::Int(57));
        assert_eq!(CachedValue::parse("2.5"), CachedValue::Float(2.5));
        assert_eq!(CachedValue::parse("1E+3"), CachedValue::Float(1000.0));
        assert_eq!(CachedValue::parse("n/a"), CachedValue::Null);
        assert_eq!(CachedValue::parse(""), CachedValue::Null);
    }
}
