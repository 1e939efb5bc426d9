//! Per-face helpers shared by the sequencing modes

use crate::types::PageNumber;

/// Resolve a 0-based page index to a 1-based page number, or blank when
/// it falls past the last source page.
#[inline]
pub(crate) fn page_at(index: usize, total_pages: usize) -> Option<PageNumber> {
    (index < total_pages).then_some(index + 1)
}

/// Mirror each row of a face independently for work-and-turn.
///
/// After the sheet is flipped left-to-right, back-face cell `col` sits
/// under front-face cell `columns - 1 - col`.
pub(crate) fn mirror_rows(face: &mut [Option<PageNumber>], columns: usize) {
    for row in face.chunks_mut(columns) {
        row.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_at() {
        assert_eq!(page_at(0, 3), Some(1));
        assert_eq!(page_at(2, 3), Some(3));
        assert_eq!(page_at(3, 3), None);
        assert_eq!(page_at(0, 0), None);
    }

    #[test]
    fn test_mirror_rows_is_per_row() {
        let mut face = vec![Some(1), Some(2), Some(3), Some(4), Some(5), None];
        mirror_rows(&mut face, 3);
        assert_eq!(face, vec![Some(3), Some(2), Some(1), None, Some(5), Some(4)]);
    }

    #[test]
    fn test_mirror_single_column_is_identity() {
        let mut face = vec![Some(1), Some(2)];
        mirror_rows(&mut face, 1);
        assert_eq!(face, vec![Some(1), Some(2)]);
    }
}
