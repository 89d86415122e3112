//! Pagination windows and page-number ranges
//!
//! Page bounds are fail-fast: a request outside the valid range is a
//! typed error, never a silent clamp. Clamping, if wanted, is the UI
//! layer's visible decision.

use std::ops::Range;

use super::errors::{RecapError, RecapResult};

/// Number of valid pages for a filtered set.
///
/// An empty set still has one (empty) page, so page 1 is always valid.
/// `page_size` must be positive; the page window computation rejects a
/// zero size before calling this.
pub fn page_count(total_matches: usize, page_size: usize) -> usize {
    total_matches.div_ceil(page_size).max(1)
}

/// Computes the record range for a page and the total page count.
///
/// Rejects with [`RecapError::PageOutOfRange`] if `page_number` lies
/// outside `[1, total_pages]` or if `page_size` is zero (no page is
/// valid then, reported as `total_pages = 0`).
pub(crate) fn window(
    page_number: usize,
    page_size: usize,
    total_matches: usize,
) -> RecapResult<(Range<usize>, usize)> {
    if page_size == 0 {
        return Err(RecapError::PageOutOfRange {
            requested: page_number,
            total_pages: 0,
        });
    }

    let total_pages = page_count(total_matches, page_size);
    if page_number == 0 || page_number > total_pages {
        return Err(RecapError::PageOutOfRange {
            requested: page_number,
            total_pages,
        });
    }

    let start = (page_number - 1) * page_size;
    let end = (start + page_size).min(total_matches);
    Ok((start..end, total_pages))
}

/// Contiguous window of page numbers containing `current`.
///
/// The window has width `min(window, total_pages)` and is re-anchored at
/// the edges so it always stays inside `[1, total_pages]`: current 1 of
/// 12 gives `[1..5]`, current 6 gives `[4..8]`, current 12 gives
/// `[8..12]` (window 5).
pub fn visible_page_numbers(current: usize, total_pages: usize, window: usize) -> Vec<usize> {
    let width = window.min(total_pages);
    if width == 0 {
        return Vec::new();
    }

    let mut start = current.saturating_sub(width / 2).max(1);
    let mut end = start + width - 1;
    if end > total_pages {
        end = total_pages;
        start = end + 1 - width;
    }

    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(23, 10), 3);
        assert_eq!(page_count(30, 10), 3);
        assert_eq!(page_count(31, 10), 4);
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(9, 10), 1);
    }

    #[test]
    fn test_window_slices() {
        assert_eq!(window(1, 10, 23).unwrap(), (0..10, 3));
        assert_eq!(window(2, 10, 23).unwrap(), (10..20, 3));
        assert_eq!(window(3, 10, 23).unwrap(), (20..23, 3));
    }

    #[test]
    fn test_window_rejects_out_of_range() {
        let err = window(4, 10, 23).unwrap_err();
        assert_eq!(
            err,
            RecapError::PageOutOfRange {
                requested: 4,
                total_pages: 3,
            }
        );
        assert!(window(0, 10, 23).is_err());
    }

    #[test]
    fn test_empty_set_has_one_valid_page() {
        assert_eq!(window(1, 10, 0).unwrap(), (0..0, 1));
        assert!(window(2, 10, 0).is_err());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = window(1, 0, 23).unwrap_err();
        assert_eq!(
            err,
            RecapError::PageOutOfRange {
                requested: 1,
                total_pages: 0,
            }
        );
    }

    #[test]
    fn test_visible_pages_left_edge() {
        assert_eq!(visible_page_numbers(1, 12, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_page_numbers(2, 12, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_visible_pages_centered() {
        assert_eq!(visible_page_numbers(6, 12, 5), vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_visible_pages_right_edge() {
        assert_eq!(visible_page_numbers(12, 12, 5), vec![8, 9, 10, 11, 12]);
        assert_eq!(visible_page_numbers(11, 12, 5), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_visible_pages_fewer_than_window() {
        assert_eq!(visible_page_numbers(1, 3, 5), vec![1, 2, 3]);
        assert_eq!(visible_page_numbers(1, 1, 5), vec![1]);
    }

    #[test]
    fn test_visible_pages_zero_window() {
        assert!(visible_page_numbers(1, 12, 0).is_empty());
    }
}
