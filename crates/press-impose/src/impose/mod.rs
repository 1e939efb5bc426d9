//! Page sequencing - which source page goes in every slot of every sheet
//!
//! Every function here is pure: identical arguments give identical
//! sequences. Gaps (zero pages, a page or sheet index past the end) come
//! back as blank slots rather than errors.

mod booklet;
mod collate;
mod repeat;
mod sheet;
mod stack;

pub use booklet::{BookletSpread, booklet_creep, booklet_spread, padded_page_count};

use crate::options::ImpositionConfig;
use crate::types::*;
use booklet::{booklet_sequence, booklet_sheet_count};
use collate::{collate_sequence, stacks_needed};
use repeat::{repeat_sequence, repeat_sheet_count};
use stack::{stack_sequence, stack_sheet_count};

/// Page numbers on the front and back of physical sheet `sheet_index`.
///
/// Faces hold `columns × rows` slots in row-major order, except Booklet
/// where each row is a left/right page pair (`2 × rows` slots). The back
/// face is empty for simplex jobs.
pub fn sequence_for_sheet(
    sheet_index: usize,
    total_source_pages: usize,
    config: &ImpositionConfig,
) -> SheetSequence {
    match config.mode() {
        ImpositionMode::Stack => stack_sequence(sheet_index, total_source_pages, config),
        ImpositionMode::Repeat => repeat_sequence(sheet_index, total_source_pages, config),
        ImpositionMode::Booklet => booklet_sequence(sheet_index, total_source_pages, config),
        ImpositionMode::CollateCut => collate_sequence(sheet_index, total_source_pages, config),
    }
}

/// Number of physical sheets needed to print every source page
pub fn total_sheets(total_source_pages: usize, config: &ImpositionConfig) -> usize {
    match config.mode() {
        ImpositionMode::Stack => stack_sheet_count(total_source_pages, config),
        ImpositionMode::Repeat => repeat_sheet_count(total_source_pages, config),
        ImpositionMode::Booklet => booklet_sheet_count(total_source_pages, config),
        ImpositionMode::CollateCut => stacks_needed(total_source_pages, config),
    }
}

/// Sequences for every sheet of the job, in print order
pub fn sequence_all(total_source_pages: usize, config: &ImpositionConfig) -> Vec<SheetSequence> {
    (0..total_sheets(total_source_pages, config))
        .map(|sheet| sequence_for_sheet(sheet, total_source_pages, config))
        .collect()
}
