//! Repeat mode: every slot on a sheet carries the same page (and the same
//! back page when duplex), so the cut pieces are identical copies.

use super::sheet::page_at;
use crate::options::ImpositionConfig;
use crate::types::SheetSequence;

pub(crate) fn repeat_sequence(
    sheet_index: usize,
    total_pages: usize,
    config: &ImpositionConfig,
) -> SheetSequence {
    let slots = config.slots_per_face();
    let master = sheet_index.checked_mul(config.faces_per_sheet());

    let front_page = master.and_then(|index| page_at(index, total_pages));
    let back = if config.is_duplex() {
        let back_page = master
            .and_then(|index| index.checked_add(1))
            .and_then(|index| page_at(index, total_pages));
        vec![back_page; slots]
    } else {
        Vec::new()
    };

    SheetSequence {
        front: vec![front_page; slots],
        back,
    }
}

pub(crate) fn repeat_sheet_count(total_pages: usize, config: &ImpositionConfig) -> usize {
    total_pages.div_ceil(config.faces_per_sheet())
}
