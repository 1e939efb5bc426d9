//! Layout data types for imposition
//!
//! These types sit between the raw sheet/document dimensions and the
//! `LayoutResult` handed to callers.

/// A uniform tiling of one document size on one sheet face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tiling {
    /// Number of documents across
    pub columns: usize,
    /// Number of documents down
    pub rows: usize,
    /// Whether the document is turned 90° in this tiling
    pub document_rotated: bool,
    /// Sheet area left uncovered
    pub waste: f32,
}

impl Tiling {
    /// Copies per sheet (columns × rows), saturating at `usize::MAX`
    pub fn copies(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }

    /// True if `self` beats `other`: more copies, or equal copies with
    /// strictly less waste. Equal tilings never beat each other, so the
    /// first one seen is kept.
    pub fn beats(&self, other: &Tiling) -> bool {
        self.copies() > other.copies()
            || (self.copies() == other.copies() && self.waste < other.waste)
    }
}
