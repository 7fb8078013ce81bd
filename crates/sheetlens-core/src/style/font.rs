//! Font style types

/// Font settings as declared in the stylesheet
///
/// Value properties keep the raw attribute text (`sz` is `"11"`, `color` is a
/// theme index or ARGB string). Flag properties are true when the element is
/// present and not switched off.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    /// Font size in points
    pub sz: String,
    /// Font name (e.g., "Calibri")
    pub name: String,
    pub family: String,
    pub charset: String,
    /// `major`, `minor` or empty
    pub scheme: String,
    pub color: String,
    /// Bold
    pub b: bool,
    /// Italic
    pub i: bool,
    /// Underline
    pub u: bool,
    pub strike: bool,
    pub outline: bool,
    pub shadow: bool,
    pub condense: String,
    pub extend: String,
    /// `superscript`, `subscript` or empty
    #[cfg_attr(feature = "serde", serde(rename = "vertAlign"))]
    pub vert_align: String,
}
