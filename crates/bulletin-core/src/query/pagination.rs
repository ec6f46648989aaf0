//! Page arithmetic, the page cursor, and the page-number strip.

use crate::error::{BulletinError, Result};

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered to users.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 20, 50, 100];

/// Numbered buttons in the page strip, edges excluded.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// A validated request for one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Build a request for 1-based `page` with `page_size` items per page.
    ///
    /// # Errors
    ///
    /// Returns `BulletinError::InvalidInput` if either value is zero.
    pub fn new(page: usize, page_size: usize) -> Result<Self> {
        if page == 0 {
            return Err(BulletinError::InvalidInput(
                "Page numbers start at 1".to_string(),
            ));
        }
        if page_size == 0 {
            return Err(BulletinError::InvalidInput(
                "Page size must be at least 1".to_string(),
            ));
        }
        Ok(Self { page, page_size })
    }

    /// First page with the given size.
    pub fn first(page_size: usize) -> Result<Self> {
        Self::new(1, page_size)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Number of pages needed for `total` items; zero when there are none.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Where one page falls within a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Items after filtering
    pub total: usize,
    /// `ceil(total / page_size)`
    pub total_pages: usize,
    /// Requested page (1-based)
    pub page: usize,
    pub page_size: usize,
    /// Slice start (0-based, inclusive)
    pub start: usize,
    /// Slice end (0-based, exclusive)
    pub end: usize,
}

impl PageWindow {
    pub fn compute(total: usize, request: PageRequest) -> Self {
        let page_size = request.page_size();
        let page = request.page();
        let start = (page - 1).saturating_mul(page_size).min(total);
        let end = start.saturating_add(page_size).min(total);

        Self {
            total,
            total_pages: total_pages(total, page_size),
            page,
            page_size,
            start,
            end,
        }
    }

    /// True when the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// 1-based inclusive range of displayed items, `None` for an empty page.
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.is_empty() {
            None
        } else {
            Some((self.start + 1, self.end))
        }
    }

    /// "`first` to `last` of `total`", or `None` for an empty page.
    pub fn summary(&self) -> Option<String> {
        self.range()
            .map(|(first, last)| format!("{} to {} of {}", first, last, self.total))
    }
}

/// One slot in the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Page buttons for `current` out of `total_pages`.
///
/// At most [`MAX_VISIBLE_PAGES`] consecutive pages around `current`; the
/// window slides instead of shrinking near either end. Page 1 and the last
/// page are always present, with an ellipsis wherever pages are skipped.
/// `current` outside `[1, total_pages]` is clamped first.
pub fn page_strip(current: usize, total_pages: usize) -> Vec<PageMarker> {
    if total_pages == 0 {
        return Vec::new();
    }
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageMarker::Page).collect();
    }

    let current = current.clamp(1, total_pages);
    let half = MAX_VISIBLE_PAGES / 2;
    let (start, end) = if current <= half + 1 {
        (1, MAX_VISIBLE_PAGES)
    } else if current + half >= total_pages {
        (total_pages - MAX_VISIBLE_PAGES + 1, total_pages)
    } else {
        (current - half, current + half)
    };

    let mut strip = Vec::with_capacity(MAX_VISIBLE_PAGES + 4);
    if start > 1 {
        strip.push(PageMarker::Page(1));
        if start > 2 {
            strip.push(PageMarker::Ellipsis);
        }
    }
    strip.extend((start..=end).map(PageMarker::Page));
    if end < total_pages {
        if end < total_pages - 1 {
            strip.push(PageMarker::Ellipsis);
        }
        strip.push(PageMarker::Page(total_pages));
    }
    strip
}

/// Current page and page size of a listing.
///
/// Moving outside `[1, total_pages]` is ignored rather than rejected, and
/// changing the page size always returns to page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Pager {
    /// A pager on page 1.
    ///
    /// # Errors
    ///
    /// Returns `BulletinError::InvalidInput` if `page_size` is zero.
    pub fn new(page_size: usize) -> Result<Self> {
        let request = PageRequest::first(page_size)?;
        Ok(Self {
            page: request.page(),
            page_size: request.page_size(),
        })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The request for the current page.
    pub fn request(&self) -> PageRequest {
        PageRequest {
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// Move to `page` if it is within `[1, total_pages]`.
    ///
    /// Returns whether the move was accepted; out-of-range pages leave the
    /// pager where it was.
    pub fn go_to(&mut self, page: usize, total_pages: usize) -> bool {
        if (1..=total_pages).contains(&page) {
            self.page = page;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self, total_pages: usize) -> bool {
        self.go_to(self.page.saturating_add(1), total_pages)
    }

    pub fn previous(&mut self, total_pages: usize) -> bool {
        self.go_to(self.page.saturating_sub(1), total_pages)
    }

    /// Change the page size and return to page 1.
    ///
    /// # Errors
    ///
    /// Returns `BulletinError::InvalidInput` if `page_size` is zero; the
    /// pager is left unchanged.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        let request = PageRequest::first(page_size)?;
        self.page = request.page();
        self.page_size = request.page_size();
        Ok(())
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Ellipsis, Page};

    fn window(total: usize, page: usize, size: usize) -> PageWindow {
        PageWindow::compute(total, PageRequest::new(page, size).unwrap())
    }

    #[test]
    fn test_request_rejects_zero() {
        assert!(PageRequest::new(0, 10).is_err());
        assert!(PageRequest::new(1, 0).is_err());
        assert_eq!(PageRequest::default(), PageRequest::new(1, 10).unwrap());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(23, 10), 3);
    }

    #[test]
    fn test_window_first_and_last_page() {
        let first = window(23, 1, 10);
        assert_eq!((first.start, first.end), (0, 10));
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.summary().as_deref(), Some("1 to 10 of 23"));

        let last = window(23, 3, 10);
        assert_eq!((last.start, last.end), (20, 23));
        assert_eq!(last.range(), Some((21, 23)));
        assert_eq!(last.summary().as_deref(), Some("21 to 23 of 23"));
    }

    #[test]
    fn test_window_empty_collection() {
        let empty = window(0, 1, 10);
        assert_eq!(empty.total_pages, 0);
        assert!(empty.is_empty());
        assert_eq!(empty.range(), None);
        assert_eq!(empty.summary(), None);
    }

    #[test]
    fn test_window_past_the_end_is_empty() {
        let past = window(5, 4, 10);
        assert!(past.is_empty());
        assert_eq!(past.range(), None);
        assert_eq!(past.total_pages, 1);
    }

    #[test]
    fn test_window_huge_page_does_not_overflow() {
        let far = window(5, usize::MAX, usize::MAX);
        assert!(far.is_empty());
    }

    #[test]
    fn test_pager_out_of_range_is_noop() {
        let mut pager = Pager::new(10).unwrap();
        assert!(pager.go_to(3, 3));
        assert_eq!(pager.page(), 3);

        assert!(!pager.go_to(4, 3));
        assert!(!pager.go_to(0, 3));
        assert_eq!(pager.page(), 3);

        assert!(!pager.next(3));
        assert_eq!(pager.page(), 3);
        assert!(pager.previous(3));
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn test_pager_previous_on_first_page_is_noop() {
        let mut pager = Pager::default();
        assert!(!pager.previous(3));
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_pager_no_pages() {
        let mut pager = Pager::default();
        assert!(!pager.go_to(1, 0));
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut pager = Pager::new(10).unwrap();
        pager.go_to(3, 3);

        pager.set_page_size(5).unwrap();

        assert_eq!(pager.page(), 1);
        assert_eq!(pager.page_size(), 5);
        assert_eq!(pager.request(), PageRequest::new(1, 5).unwrap());
    }

    #[test]
    fn test_invalid_page_size_leaves_pager_alone() {
        let mut pager = Pager::new(10).unwrap();
        pager.go_to(2, 3);

        assert!(pager.set_page_size(0).is_err());
        assert_eq!((pager.page(), pager.page_size()), (2, 10));
    }

    #[test]
    fn test_strip_small_page_counts() {
        assert_eq!(page_strip(1, 0), vec![]);
        assert_eq!(page_strip(1, 1), vec![Page(1)]);
        assert_eq!(
            page_strip(3, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn test_strip_at_start() {
        assert_eq!(
            page_strip(1, 12),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(12)]
        );
    }

    #[test]
    fn test_strip_in_middle() {
        assert_eq!(
            page_strip(6, 12),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Page(8),
                Ellipsis,
                Page(12)
            ]
        );
    }

    #[test]
    fn test_strip_at_end() {
        assert_eq!(
            page_strip(12, 12),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12)]
        );
    }

    #[test]
    fn test_strip_no_ellipsis_for_adjacent_edge() {
        assert_eq!(
            page_strip(4, 6),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6)]
        );
        assert_eq!(
            page_strip(3, 6),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6)]
        );
    }

    #[test]
    fn test_strip_clamps_current() {
        assert_eq!(page_strip(99, 12), page_strip(12, 12));
        assert_eq!(page_strip(0, 12), page_strip(1, 12));
    }

    #[test]
    fn test_strip_invariants_hold_everywhere() {
        for total in 1..=30 {
            for current in 1..=total {
                let strip = page_strip(current, total);
                let pages: Vec<usize> = strip
                    .iter()
                    .filter_map(|m| match m {
                        Page(p) => Some(*p),
                        Ellipsis => None,
                    })
                    .collect();

                assert_eq!(pages.first(), Some(&1), "total={} current={}", total, current);
                assert_eq!(pages.last(), Some(&total));
                assert!(pages.contains(&current));
                assert!(pages.iter().all(|p| (1..=total).contains(p)));
                assert!(pages.windows(2).all(|w| w[0] < w[1]));

                let window: Vec<&usize> = pages
                    .iter()
                    .filter(|p| total <= MAX_VISIBLE_PAGES || (**p != 1 && **p != total))
                    .collect();
                assert!(window.len() <= MAX_VISIBLE_PAGES);

                // An ellipsis sits exactly where pages are skipped.
                for pair in strip.windows(2) {
                    if let [Page(a), Page(b)] = pair {
                        assert_eq!(*b, a + 1);
                    }
                }
            }
        }
    }
}
