use serde::{Deserialize, Serialize};

/// Windows with at most this many pages render every page number.
const FULL_WINDOW: u32 = 7;

/// One entry of the page-number bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

impl PageItem {
    pub fn page(self) -> Option<u32> {
        match self {
            PageItem::Page(n) => Some(n),
            PageItem::Ellipsis => None,
        }
    }
}

/// Page numbers and ellipsis markers to render for `current` of `total` pages.
///
/// The first three and last three pages are always shown, plus the neighbours
/// of the current page when it sits in the middle. Page numbers never repeat
/// and stay within `1..=total`.
pub fn compute_window(current: u32, total: u32) -> Vec<PageItem> {
    if total <= FULL_WINDOW {
        return (1..=total).map(PageItem::Page).collect();
    }

    let current = i64::from(current);
    let total_i = i64::from(total);

    let mut raw: Vec<Option<i64>> = vec![Some(1), Some(2), Some(3)];
    if current > 5 {
        raw.push(None);
    }
    if current >= 4 && current <= total_i - 3 {
        raw.extend([Some(current - 1), Some(current), Some(current + 1)]);
    }
    if current < total_i - 4 {
        raw.push(None);
    }
    raw.extend([Some(total_i - 2), Some(total_i - 1), Some(total_i)]);

    let mut seen = Vec::with_capacity(raw.len());
    let mut out = Vec::with_capacity(raw.len());
    for entry in raw {
        match entry {
            None => out.push(PageItem::Ellipsis),
            Some(n) if n >= 1 && n <= total_i => {
                let n = n as u32;
                if !seen.contains(&n) {
                    seen.push(n);
                    out.push(PageItem::Page(n));
                }
            }
            Some(_) => {}
        }
    }
    out
}

/// Pagination block carried by list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    #[serde(default)]
    pub total_pages: u32,
}

/// Paging position of a list view. Pages are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl PaginationState {
    pub fn new(limit: u32) -> Self {
        Self {
            total: 0,
            page: 1,
            limit,
        }
    }

    /// `ceil(total / limit)`, zero when the limit is zero.
    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.limit)) as u32
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn window(&self) -> Vec<PageItem> {
        compute_window(self.page, self.total_pages())
    }

    /// Index range of the current page inside a fully loaded collection.
    pub fn slice_bounds(&self, len: usize) -> (usize, usize) {
        let limit = self.limit as usize;
        let start = (self.page.saturating_sub(1) as usize)
            .saturating_mul(limit)
            .min(len);
        let end = start.saturating_add(limit).min(len);
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    fn pages(items: &[PageItem]) -> Vec<u32> {
        items.iter().filter_map(|i| i.page()).collect()
    }

    #[test]
    fn test_small_totals_list_every_page() {
        for total in 0..=7 {
            for current in 1..=total.max(1) {
                let window = compute_window(current, total);
                assert_eq!(pages(&window), (1..=total).collect::<Vec<_>>());
                assert!(!window.contains(&Ellipsis));
            }
        }
    }

    #[test]
    fn test_first_page_of_ten() {
        assert_eq!(
            compute_window(1, 10),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_leading_boundaries() {
        // current = 4: middle block starts, no leading ellipsis
        assert_eq!(
            compute_window(4, 12),
            vec![
                Page(1), Page(2), Page(3), Page(4), Page(5),
                Ellipsis, Page(10), Page(11), Page(12)
            ]
        );
        // current = 5: still no leading ellipsis
        assert_eq!(
            compute_window(5, 12),
            vec![
                Page(1), Page(2), Page(3), Page(4), Page(5), Page(6),
                Ellipsis, Page(10), Page(11), Page(12)
            ]
        );
        // current = 6: leading ellipsis appears
        assert_eq!(
            compute_window(6, 12),
            vec![
                Page(1), Page(2), Page(3), Ellipsis, Page(5), Page(6), Page(7),
                Ellipsis, Page(10), Page(11), Page(12)
            ]
        );
    }

    #[test]
    fn test_trailing_boundaries() {
        // current = total - 4: trailing ellipsis suppressed
        assert_eq!(
            compute_window(8, 12),
            vec![
                Page(1), Page(2), Page(3), Ellipsis, Page(7), Page(8), Page(9),
                Page(10), Page(11), Page(12)
            ]
        );
        // current = total - 3: last middle page merges into trailing block
        assert_eq!(
            compute_window(9, 12),
            vec![
                Page(1), Page(2), Page(3), Ellipsis, Page(8), Page(9),
                Page(10), Page(11), Page(12)
            ]
        );
        // current = total - 2: no middle block
        assert_eq!(
            compute_window(10, 12),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(10), Page(11), Page(12)]
        );
        // current = total - 5: both ellipses present
        assert_eq!(
            compute_window(7, 12),
            vec![
                Page(1), Page(2), Page(3), Ellipsis, Page(6), Page(7), Page(8),
                Ellipsis, Page(10), Page(11), Page(12)
            ]
        );
    }

    #[test]
    fn test_overlap_near_small_total() {
        assert_eq!(
            compute_window(4, 8),
            (1..=8).map(Page).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_pages_ascending_and_unique() {
        for total in 8..40 {
            for current in 1..=total {
                let p = pages(&compute_window(current, total));
                assert!(p.windows(2).all(|w| w[0] < w[1]), "{current}/{total}");
                assert!(p.iter().all(|n| (1..=total).contains(n)));
            }
        }
    }

    #[test]
    fn test_total_pages() {
        let mut state = PaginationState::new(20);
        assert_eq!(state.total_pages(), 0);
        state.total = 41;
        assert_eq!(state.total_pages(), 3);
        state.limit = 0;
        assert_eq!(state.total_pages(), 0);
    }

    #[test]
    fn test_navigation_bounds() {
        let state = PaginationState {
            total: 45,
            page: 1,
            limit: 20,
        };
        assert!(!state.has_prev());
        assert!(state.has_next());

        let last = PaginationState { page: 3, ..state };
        assert!(last.has_prev());
        assert!(!last.has_next());
    }

    #[test]
    fn test_slice_bounds() {
        let state = PaginationState {
            total: 45,
            page: 3,
            limit: 20,
        };
        assert_eq!(state.slice_bounds(45), (40, 45));
        assert_eq!(PaginationState { page: 9, ..state }.slice_bounds(45), (45, 45));
    }
}
