//! Bleed inference
//!
//! A document whose size matches a standard page size is assumed to be
//! supplied at trim with no bleed; anything else is assumed to carry the
//! default 0.125" allowance. This is a heuristic, callers can override it.

use crate::constants::{DEFAULT_BLEED_PT, DEFAULT_STANDARD_SIZE_TOLERANCE_PT};

/// A standard page size in points (portrait)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardPageSize {
    pub name: &'static str,
    pub width: f32,
    pub height: f32,
}

/// Page sizes recognized as "already at trim"
pub const STANDARD_PAGE_SIZES: &[StandardPageSize] = &[
    StandardPageSize { name: "Letter", width: 612.0, height: 792.0 },
    StandardPageSize { name: "Legal", width: 612.0, height: 1008.0 },
    StandardPageSize { name: "Tabloid", width: 792.0, height: 1224.0 },
    StandardPageSize { name: "Half Letter", width: 396.0, height: 612.0 },
    StandardPageSize { name: "A3", width: 841.89, height: 1190.55 },
    StandardPageSize { name: "A4", width: 595.28, height: 841.89 },
    StandardPageSize { name: "A5", width: 419.53, height: 595.28 },
];

impl StandardPageSize {
    /// Whether `width × height` matches this size in either orientation
    pub fn matches(&self, width: f32, height: f32, tolerance: f32) -> bool {
        let close = |a: f32, b: f32| (a - b).abs() <= tolerance;
        (close(width, self.width) && close(height, self.height))
            || (close(width, self.height) && close(height, self.width))
    }
}

/// Find the standard page size matching the given dimensions, if any
pub fn find_standard_size(width: f32, height: f32, tolerance: f32) -> Option<&'static StandardPageSize> {
    STANDARD_PAGE_SIZES
        .iter()
        .find(|size| size.matches(width, height, tolerance))
}

/// Infer a bleed allowance with an explicit matching tolerance
pub fn infer_bleed_allowance_with_tolerance(width: f32, height: f32, tolerance: f32) -> f32 {
    if find_standard_size(width, height, tolerance).is_some() {
        0.0
    } else {
        DEFAULT_BLEED_PT
    }
}

/// Infer a bleed allowance using the default tolerance
pub fn infer_bleed_allowance(width: f32, height: f32) -> f32 {
    infer_bleed_allowance_with_tolerance(width, height, DEFAULT_STANDARD_SIZE_TOLERANCE_PT)
}

/// The unit being imposed: its size plus a bleed allowance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Document {
    pub width: f32,
    pub height: f32,
    pub bleed_allowance: f32,
}

impl Document {
    /// Create a document and infer its bleed allowance
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            bleed_allowance: infer_bleed_allowance(width, height),
        }
    }

    /// Create a document, inferring bleed with a custom tolerance
    pub fn with_tolerance(width: f32, height: f32, tolerance: f32) -> Self {
        Self {
            width,
            height,
            bleed_allowance: infer_bleed_allowance_with_tolerance(width, height, tolerance),
        }
    }

    /// Override the inferred bleed allowance
    pub fn with_bleed_allowance(mut self, bleed_allowance: f32) -> Self {
        self.bleed_allowance = bleed_allowance;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_has_no_bleed() {
        assert_eq!(infer_bleed_allowance(612.0, 792.0), 0.0);
        // Landscape letter
        assert_eq!(infer_bleed_allowance(792.0, 612.0), 0.0);
    }

    #[test]
    fn test_odd_size_gets_default_bleed() {
        assert_eq!(infer_bleed_allowance(252.0, 144.0), 9.0);
    }

    #[test]
    fn test_a4_within_tolerance() {
        assert_eq!(infer_bleed_allowance(595.0, 842.0), 0.0);
        assert_eq!(find_standard_size(595.0, 842.0, 1.0).map(|s| s.name), Some("A4"));
    }

    #[test]
    fn test_tolerance_is_respected() {
        // Letter plus 0.125" bleed on each side
        assert_eq!(infer_bleed_allowance(630.0, 810.0), DEFAULT_BLEED_PT);
        assert_eq!(infer_bleed_allowance_with_tolerance(630.0, 810.0, 20.0), 0.0);
        assert_eq!(infer_bleed_allowance_with_tolerance(612.5, 792.0, 0.1), DEFAULT_BLEED_PT);
    }

    #[test]
    fn test_document_override() {
        let doc = Document::new(612.0, 792.0).with_bleed_allowance(4.5);
        assert_eq!(doc.bleed_allowance, 4.5);
        assert_eq!(Document::with_tolerance(613.5, 792.0, 2.0).bleed_allowance, 0.0);
    }
}
