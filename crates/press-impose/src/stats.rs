use crate::constants::PAGES_PER_BOOKLET_SHEET;
use crate::impose::sequence_all;
use crate::options::ImpositionConfig;
use crate::types::*;

/// Calculate statistics for an imposition job.
///
/// Zero source pages yields zero sheets and slots.
pub fn calculate_statistics(
    total_source_pages: usize,
    config: &ImpositionConfig,
) -> ImpositionStatistics {
    let sequences = sequence_all(total_source_pages, config);
    let output_sheets = sequences.len();

    let slots_per_face = match config.mode() {
        ImpositionMode::Booklet => 2 * config.rows(),
        _ => config.slots_per_face(),
    };

    // Booklets are always two-sided
    let faces_per_sheet = match config.mode() {
        ImpositionMode::Booklet => 2,
        _ if config.is_duplex() => 2,
        _ => 1,
    };
    let output_faces = output_sheets * faces_per_sheet;

    let filled_slots: usize = sequences.iter().map(SheetSequence::filled_slots).sum();
    let blank_slots = output_faces * slots_per_face - filled_slots;

    // Whole signatures of the paginated pages (interior only without the cover)
    let padded_pages = match config.mode() {
        ImpositionMode::Booklet => Some(output_sheets * PAGES_PER_BOOKLET_SHEET),
        _ => None,
    };

    ImpositionStatistics {
        source_pages: total_source_pages,
        output_sheets,
        output_faces,
        slots_per_face,
        filled_slots,
        blank_slots,
        padded_pages,
    }
}
