//! Border style types

/// Border edges of a cell
///
/// An edge is set only when its element exists in the stylesheet and carries a
/// `style` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Border {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
    pub diagonal: bool,
}

impl Border {
    /// Check if any edge is drawn
    pub fn has_any(&self) -> bool {
        self.left || self.right || self.top || self.bottom || self.diagonal
    }

    /// Check if all four outer edges are drawn
    pub fn is_boxed(&self) -> bool {
        self.left && self.right && self.top && self.bottom
    }
}
