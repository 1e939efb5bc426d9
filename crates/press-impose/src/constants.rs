//! Shared constants for imposition
//!
//! This module centralizes unit conversions and default allowances used
//! by the optimizer and the sequencer.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert inches to points
#[inline]
pub fn inches_to_pt(inches: f32) -> f32 {
    inches * POINTS_PER_INCH
}

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to inches
#[inline]
pub fn pt_to_inches(pt: f32) -> f32 {
    pt / POINTS_PER_INCH
}

// =============================================================================
// Bleed
// =============================================================================

/// Bleed assumed for documents that are not a standard page size (0.125")
pub const DEFAULT_BLEED_PT: f32 = 0.125 * POINTS_PER_INCH;

/// Default tolerance when matching a document against standard page sizes
pub const DEFAULT_STANDARD_SIZE_TOLERANCE_PT: f32 = 1.0;

// =============================================================================
// Signatures
// =============================================================================

/// Pages carried by one folded booklet sheet (front-left/right, back-left/right)
pub const PAGES_PER_BOOKLET_SHEET: usize = 4;

/// Pages split off each end of a booklet when the cover is printed separately
pub const COVER_PAGES_PER_SIDE: usize = 2;

/// Page slots per booklet row (left and right of the spine)
pub const BOOKLET_SLOTS_PER_ROW: usize = 2;
