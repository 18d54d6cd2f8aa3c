use std::num::NonZeroUsize;

/// One page's slice of a filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub clamped_page: usize,
    pub total_pages: usize,
    pub start: usize,
    /// Exclusive.
    pub end: usize,
}

impl PageWindow {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Computes the window for `requested_page` (1-based). Out-of-range requests,
/// including zero and negatives, are clamped; an empty list still has page 1.
pub fn compute(total_items: usize, page_size: NonZeroUsize, requested_page: i64) -> PageWindow {
    let size = page_size.get();
    let total_pages = total_items.div_ceil(size).max(1);
    let clamped_page = if requested_page < 1 {
        1
    } else {
        usize::try_from(requested_page)
            .unwrap_or(usize::MAX)
            .min(total_pages)
    };
    let start = (clamped_page - 1) * size;
    let end = (start + size).min(total_items);

    PageWindow {
        clamped_page,
        total_pages,
        start,
        end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let w = compute(0, size(5), 1);
        assert_eq!(w.total_pages, 1);
        assert_eq!(w.clamped_page, 1);
        assert!(w.is_empty());
    }

    #[test]
    fn last_page_is_partial() {
        let w = compute(7, size(5), 2);
        assert_eq!(w, PageWindow { clamped_page: 2, total_pages: 2, start: 5, end: 7 });
        assert_eq!(w.len(), 2);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        assert_eq!(compute(10, size(5), 1).total_pages, 2);
    }

    #[test]
    fn zero_and_negative_pages_clamp_to_first() {
        assert_eq!(compute(12, size(5), 0).clamped_page, 1);
        assert_eq!(compute(12, size(5), -40).clamped_page, 1);
    }

    #[test]
    fn huge_page_clamps_to_last() {
        let w = compute(12, size(5), i64::MAX);
        assert_eq!(w.clamped_page, 3);
        assert_eq!(w.range(), 10..12);
    }

    #[test]
    fn totals_match_ceiling_for_all_small_inputs() {
        for total in 0..60usize {
            for page_size in 1..12usize {
                let expected = std::cmp::max(1, (total + page_size - 1) / page_size);
                for requested in [-3i64, 0, 1, 2, 7, 1000] {
                    let w = compute(total, size(page_size), requested);
                    assert_eq!(w.total_pages, expected);
                    assert!(w.clamped_page >= 1 && w.clamped_page <= w.total_pages);
                    assert!(w.start <= w.end && w.end <= total);
                    assert!(w.len() <= page_size);
                }
            }
        }
    }
}
