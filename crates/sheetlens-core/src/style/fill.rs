//! Fill style types

/// A color reference from a fill's `fgColor` / `bgColor` element
///
/// Attributes the element does not carry are left empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorRef {
    pub theme: String,
    /// ARGB hex (e.g., "FFFF0000")
    pub rgb: String,
    pub tint: String,
    /// Legacy palette index
    pub indexed: String,
}

/// Pattern fill
///
/// Gradient fills are not modeled; they resolve to an empty fill.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fill {
    /// Pattern type (`none`, `solid`, `gray125`, ...), empty if unset
    #[cfg_attr(feature = "serde", serde(rename = "patternFill"))]
    pub pattern_type: String,
    /// Foreground color
    #[cfg_attr(feature = "serde", serde(rename = "fgColor"))]
    pub fg_color: Option<ColorRef>,
    /// Background color
    #[cfg_attr(feature = "serde", serde(rename = "bgColor"))]
    pub bg_color: Option<ColorRef>,
}

impl Fill {
    /// True if the fill paints nothing
    pub fn is_none(&self) -> bool {
        self.pattern_type.is_empty() || self.pattern_type == "none"
    }
}
