//! Collate-and-cut mode
//!
//! A sheet is cut into `slots` pieces and each piece position becomes its
//! own stack. Stacking the sheets in order keeps every stack in page
//! order, so slot `i` carries a contiguous run of pages:
//!
//! ```text
//! 2x1 grid, 6 pages, simplex
//! sheet 0: [1, 4]
//! sheet 1: [2, 5]
//! sheet 2: [3, 6]
//! ```

use super::sheet::{mirror_rows, page_at};
use crate::options::ImpositionConfig;
use crate::types::SheetSequence;

/// Physical sheets needed; duplex sheets carry two pages of each stack
pub(crate) fn stacks_needed(total_pages: usize, config: &ImpositionConfig) -> usize {
    let pages_per_stack = total_pages.div_ceil(config.slots_per_face());
    pages_per_stack.div_ceil(config.faces_per_sheet())
}

pub(crate) fn collate_sequence(
    sheet_index: usize,
    total_pages: usize,
    config: &ImpositionConfig,
) -> SheetSequence {
    let slots = config.slots_per_face();
    let faces = config.faces_per_sheet();
    let sheets = stacks_needed(total_pages, config);
    if sheet_index >= sheets {
        return SheetSequence::blank(slots, if config.is_duplex() { slots } else { 0 });
    }

    // Pages in one cut stack, across all sheets
    let slots_per_column = sheets * faces;
    let first = sheet_index * faces;

    let front = (0..slots)
        .map(|slot| page_at(first + slot * slots_per_column, total_pages))
        .collect();

    let mut back: Vec<_> = if config.is_duplex() {
        (0..slots)
            .map(|slot| page_at(first + 1 + slot * slots_per_column, total_pages))
            .collect()
    } else {
        Vec::new()
    };

    if config.mirrors_back_rows() {
        mirror_rows(&mut back, config.columns());
    }

    SheetSequence { front, back }
}
