//! Number format types

/// A number format: its id and format code
///
/// Codes are kept verbatim. [`NumFmt::number`], [`NumFmt::unit`] and
/// [`NumFmt::general`] split a code such as `0.000"Ω"` into its numeric
/// literal, trailing unit and whatever precedes them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumFmt {
    /// `numFmtId` as written in the stylesheet
    pub id: String,
    /// Format code (e.g. `0.00`, `#,##0 "kg"`)
    #[cfg_attr(feature = "serde", serde(rename = "formatCode"))]
    pub format_code: String,
}

impl NumFmt {
    pub fn new<I: Into<String>, C: Into<String>>(id: I, format_code: C) -> Self {
        Self {
            id: id.into(),
            format_code: format_code.into(),
        }
    }

    /// Numeric literal part of the format code, or empty
    pub fn number(&self) -> &str {
        split_format_code(&self.format_code).0
    }

    /// Unit suffix following the numeric part, or empty
    pub fn unit(&self) -> &str {
        split_format_code(&self.format_code).1
    }

    /// Text preceding the numeric part, or the whole code when it has no numeric part
    pub fn general(&self) -> &str {
        split_format_code(&self.format_code).2
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'E' | '+' | '-')
}

/// Split a format code into `(number, unit, general)`, scanning from the right.
///
/// Trailing non-digit characters form the unit, the run of digits, `.`, `E`,
/// `+` and `-` before them is the number, and the rest is general. When there
/// is no number run the whole code is general.
fn split_format_code(code: &str) -> (&str, &str, &str) {
    if code.trim().is_empty() {
        return ("", "", "");
    }

    let unit_start = code
        .char_indices()
        .rev()
        .take_while(|(_, c)| !c.is_ascii_digit())
        .last()
        .map_or(code.len(), |(i, _)| i);

    let head = &code[..unit_start];
    let number_start = head
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_number_char(*c))
        .last()
        .map_or(head.len(), |(i, _)| i);

    let number = &head[number_start..];
    if number.is_empty() {
        return ("", "", code);
    }

    (number, code[unit_start..].trim(), &head[..number_start])
}
