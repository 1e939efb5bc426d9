//! Booklet (saddle-stitch) signature pagination
//!
//! Each physical sheet carries four pages, two per face, and the sheets
//! nest inside each other before folding. Sheet 0 holds the outermost
//! spread, the last sheet holds the centerfold.
//!
//! ## 8 pages (2 sheets)
//! ```text
//! sheet 0  front: [8, 1]  back: [2, 7]
//! sheet 1  front: [6, 3]  back: [4, 5]
//! ```
//!
//! Every spread sums to `padded - 1` in 0-based indices.

use super::sheet::page_at;
use crate::constants::{
    BOOKLET_SLOTS_PER_ROW, COVER_PAGES_PER_SIDE, PAGES_PER_BOOKLET_SHEET,
};
use crate::options::ImpositionConfig;
use crate::types::{PageNumber, SheetSequence};

/// Raw 0-based page indices for one booklet sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookletSpread {
    pub front_left: usize,
    pub front_right: usize,
    pub back_left: usize,
    pub back_right: usize,
}

/// Smallest multiple of 4 that holds `pages`
pub fn padded_page_count(pages: usize) -> usize {
    pages.div_ceil(PAGES_PER_BOOKLET_SHEET) * PAGES_PER_BOOKLET_SHEET
}

/// Page indices printed on booklet sheet `sheet_index` of a signature
/// with `padded_pages` pages.
///
/// Returns `None` when the sheet index lies past the centerfold.
pub fn booklet_spread(sheet_index: usize, padded_pages: usize) -> Option<BookletSpread> {
    let outer = sheet_index.checked_mul(2)?;
    // back_right = padded - outer - 2 must stay above back_left = outer + 1
    if outer.checked_add(2)? > padded_pages || padded_pages - outer - 2 < outer + 1 {
        return None;
    }

    Some(BookletSpread {
        front_left: padded_pages - outer - 1,
        front_right: outer,
        back_left: outer + 1,
        back_right: padded_pages - outer - 2,
    })
}

/// Pages actually paginated and the index offset applied to them.
///
/// Without the cover, the first and last two pages are left for the
/// caller to print separately.
fn interior_pages(total_pages: usize, config: &ImpositionConfig) -> (usize, usize) {
    if !config.include_cover() && total_pages >= 2 * COVER_PAGES_PER_SIDE {
        (total_pages - 2 * COVER_PAGES_PER_SIDE, COVER_PAGES_PER_SIDE)
    } else {
        (total_pages, 0)
    }
}

pub(crate) fn booklet_sequence(
    sheet_index: usize,
    total_pages: usize,
    config: &ImpositionConfig,
) -> SheetSequence {
    let rows = config.rows();
    let slots = BOOKLET_SLOTS_PER_ROW * rows;
    let (pages, offset) = interior_pages(total_pages, config);
    let padded = padded_page_count(pages);

    let Some(spread) = booklet_spread(sheet_index, padded) else {
        return SheetSequence::blank(slots, slots);
    };

    let resolve =
        |index: usize| -> Option<PageNumber> { page_at(index, pages).map(|page| page + offset) };
    let front = [resolve(spread.front_left), resolve(spread.front_right)];
    let back = [resolve(spread.back_left), resolve(spread.back_right)];

    SheetSequence {
        front: front.repeat(rows),
        back: back.repeat(rows),
    }
}

pub(crate) fn booklet_sheet_count(total_pages: usize, config: &ImpositionConfig) -> usize {
    let (pages, _) = interior_pages(total_pages, config);
    padded_page_count(pages) / PAGES_PER_BOOKLET_SHEET
}

/// Creep shift for one booklet sheet.
///
/// Inner sheets are pushed outward by the paper they are folded around.
/// `total_creep` is spread evenly from zero on the outermost sheet to the
/// full amount on the centerfold.
pub fn booklet_creep(sheet_index: usize, total_sheets: usize, total_creep: f32) -> f32 {
    if total_sheets <= 1 {
        return 0.0;
    }
    let step = total_creep / (total_sheets - 1) as f32;
    sheet_index.min(total_sheets - 1) as f32 * step
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImpositionMode;

    fn booklet(include_cover: bool) -> ImpositionConfig {
        ImpositionConfig::new(ImpositionMode::Booklet, 1, 1, false)
            .unwrap()
            .with_include_cover(include_cover)
    }

    #[test]
    fn test_padded_page_count() {
        assert_eq!(padded_page_count(0), 0);
        assert_eq!(padded_page_count(1), 4);
        assert_eq!(padded_page_count(4), 4);
        assert_eq!(padded_page_count(6), 8);
        assert_eq!(padded_page_count(9), 12);
    }

    #[test]
    fn test_spread_for_eight_pages() {
        let spread = booklet_spread(0, 8).unwrap();
        assert_eq!(
            spread,
            BookletSpread {
                front_left: 7,
                front_right: 0,
                back_left: 1,
                back_right: 6,
            }
        );
        let spread = booklet_spread(1, 8).unwrap();
        assert_eq!((spread.front_left, spread.front_right), (5, 2));
        assert_eq!((spread.back_left, spread.back_right), (3, 4));
    }

    #[test]
    fn test_spread_past_centerfold() {
        assert!(booklet_spread(2, 8).is_none());
        assert!(booklet_spread(0, 0).is_none());
        assert!(booklet_spread(usize::MAX, 8).is_none());
    }

    #[test]
    fn test_cover_excluded_offsets_interior() {
        // 8 pages, cover printed separately: interior is pages 3..=6
        let config = booklet(false);
        let seq = booklet_sequence(0, 8, &config);
        assert_eq!(seq.front, vec![Some(6), Some(3)]);
        assert_eq!(seq.back, vec![Some(4), Some(5)]);
        assert_eq!(booklet_sheet_count(8, &config), 1);
    }

    #[test]
    fn test_cover_kept_when_too_few_pages() {
        let config = booklet(false);
        let seq = booklet_sequence(0, 3, &config);
        assert_eq!(seq.front, vec![None, Some(1)]);
        assert_eq!(seq.back, vec![Some(2), Some(3)]);
    }

    #[test]
    fn test_creep_spread() {
        assert_eq!(booklet_creep(0, 1, 9.0), 0.0);
        assert_eq!(booklet_creep(0, 4, 9.0), 0.0);
        assert_eq!(booklet_creep(1, 4, 9.0), 3.0);
        assert_eq!(booklet_creep(3, 4, 9.0), 9.0);
    }
}
