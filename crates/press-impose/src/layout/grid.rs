//! Grid tiling calculation
//!
//! A sheet face is tiled with a single uniform grid of identical
//! documents: no mixed rotations within one sheet.

use super::Tiling;

// =============================================================================
// Tiling
// =============================================================================

/// Tile a document of `doc_width × doc_height` on a face of
/// `sheet_width × sheet_height`, without rotating the document.
///
/// Non-positive document dimensions produce an empty tiling.
pub fn tile(doc_width: f32, doc_height: f32, sheet_width: f32, sheet_height: f32) -> Tiling {
    let sheet_area = sheet_width * sheet_height;
    if doc_width <= 0.0 || doc_height <= 0.0 || sheet_width <= 0.0 || sheet_height <= 0.0 {
        return Tiling {
            columns: 0,
            rows: 0,
            document_rotated: false,
            waste: sheet_area.max(0.0),
        };
    }

    // Float-to-int casts saturate, so a vanishingly small document gives
    // huge counts; the product saturates too instead of overflowing.
    let columns = (sheet_width / doc_width).floor() as usize;
    let rows = (sheet_height / doc_height).floor() as usize;
    let copies = columns.saturating_mul(rows) as f32;

    Tiling {
        columns,
        rows,
        document_rotated: false,
        waste: (sheet_area - copies * doc_width * doc_height).max(0.0),
    }
}

/// Candidate tilings for both document orientations, in search order:
/// as supplied first, then rotated 90°.
pub fn candidate_tilings(
    doc_width: f32,
    doc_height: f32,
    sheet_width: f32,
    sheet_height: f32,
) -> [Tiling; 2] {
    let upright = tile(doc_width, doc_height, sheet_width, sheet_height);
    let rotated = Tiling {
        document_rotated: true,
        ..tile(doc_height, doc_width, sheet_width, sheet_height)
    };
    [upright, rotated]
}

/// Best tiling of a document on one sheet face, trying both document
/// orientations. Ties keep the unrotated document.
pub fn best_tiling(doc_width: f32, doc_height: f32, sheet_width: f32, sheet_height: f32) -> Tiling {
    let [upright, rotated] = candidate_tilings(doc_width, doc_height, sheet_width, sheet_height);
    if rotated.beats(&upright) {
        rotated
    } else {
        upright
    }
}

// =============================================================================
// Tests
// =============================================================================
