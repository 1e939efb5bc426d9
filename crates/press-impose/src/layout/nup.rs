//! N-up search across a sheet catalog
//!
//! Exhaustive search over every candidate sheet, both sheet orientations
//! and both document orientations. Order of evaluation is part of the
//! contract: catalog order, then portrait before landscape, then the
//! document as supplied before rotated. Ties keep the first candidate.

use super::{Document, Tiling, candidate_tilings};
use crate::types::{LayoutResult, Orientation, SheetSize};

const SHEET_ORIENTATIONS: [Orientation; 2] = [Orientation::Portrait, Orientation::Landscape];

/// Find the sheet, orientation and grid giving the most copies of a
/// `document_width × document_height` document.
///
/// Returns `None` when the catalog is empty or no sheet fits a single
/// copy. The bleed allowance on the result is inferred from the document
/// size and does not influence the choice.
pub fn maximize_n_up(
    document_width: f32,
    document_height: f32,
    candidate_sheets: &[SheetSize],
) -> Option<LayoutResult> {
    optimize(&Document::new(document_width, document_height), candidate_sheets)
}

/// Same search as [`maximize_n_up`] for a document whose bleed allowance
/// has already been decided.
pub fn optimize(document: &Document, candidate_sheets: &[SheetSize]) -> Option<LayoutResult> {
    let mut best: Option<(Tiling, &SheetSize, Orientation)> = None;

    for sheet in candidate_sheets {
        for orientation in SHEET_ORIENTATIONS {
            let (sheet_width, sheet_height) = sheet.dimensions_with_orientation(orientation);
            for tiling in candidate_tilings(document.width, document.height, sheet_width, sheet_height) {
                let improves = match &best {
                    Some((current, _, _)) => tiling.beats(current),
                    None => tiling.copies() > 0,
                };
                if improves {
                    best = Some((tiling, sheet, orientation));
                }
            }
        }
    }

    let (tiling, sheet, orientation) = best?;
    log::debug!(
        "Best layout: {}x{} on {} ({}), rotated={}",
        tiling.columns,
        tiling.rows,
        sheet.name,
        orientation,
        tiling.document_rotated
    );

    Some(LayoutResult {
        columns: tiling.columns,
        rows: tiling.rows,
        sheet_name: sheet.name.clone(),
        sheet_orientation: orientation,
        document_rotated: tiling.document_rotated,
        bleed_allowance: document.bleed_allowance,
        copies: tiling.copies(),
        waste: tiling.waste,
    })
}
