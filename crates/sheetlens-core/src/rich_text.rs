//! Shared-string rich text

/// One run of text with its own font properties
///
/// Properties hold the raw attribute text from the run's `<rPr>` element;
/// a property the run does not set is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RichTextRun {
    /// Font size in points
    pub sz: String,
    /// Theme color index, or an ARGB / indexed color when no theme is given
    pub color: String,
    /// Font name
    #[cfg_attr(feature = "serde", serde(rename = "rFont"))]
    pub r_font: String,
    pub family: String,
    pub scheme: String,
    pub charset: String,
    /// `superscript`, `subscript` or empty
    #[cfg_attr(feature = "serde", serde(rename = "vertAlign"))]
    pub vert_align: String,
    pub text: String,
}

impl RichTextRun {
    /// A run with text and no font properties
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// A shared-string table entry: its runs in document order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SharedStringEntry {
    pub rpr: Vec<RichTextRun>,
}

impl SharedStringEntry {
    /// Concatenated text of all runs
    pub fn text(&self) -> String {
        self.rpr.iter().map(|run| run.text.as_str()).collect()
    }

    pub fn is_rich(&self) -> bool {
        self.rpr.len() > 1
    }
}
