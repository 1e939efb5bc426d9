//! Stack mode: strict reading order across slots, faces and sheets

use super::sheet::{mirror_rows, page_at};
use crate::options::ImpositionConfig;
use crate::types::SheetSequence;

pub(crate) fn stack_sequence(
    sheet_index: usize,
    total_pages: usize,
    config: &ImpositionConfig,
) -> SheetSequence {
    let slots = config.slots_per_face();
    let faces = config.faces_per_sheet();
    let Some(base) = sheet_index
        .checked_mul(slots * faces)
        .filter(|&base| base < total_pages)
    else {
        return SheetSequence::blank(slots, if config.is_duplex() { slots } else { 0 });
    };

    let mut front = Vec::with_capacity(slots);
    let mut back = Vec::with_capacity(if config.is_duplex() { slots } else { 0 });

    for slot in 0..slots {
        let front_index = base + slot * faces;
        front.push(page_at(front_index, total_pages));
        if config.is_duplex() {
            back.push(page_at(front_index + 1, total_pages));
        }
    }

    if config.mirrors_back_rows() {
        mirror_rows(&mut back, config.columns());
    }

    SheetSequence { front, back }
}

pub(crate) fn stack_sheet_count(total_pages: usize, config: &ImpositionConfig) -> usize {
    total_pages.div_ceil(config.slots_per_face() * config.faces_per_sheet())
}
