//! Property-based tests for the pagination controller.
//! Verifies the layout invariants for every page count and current page,
//! not just the worked examples in the unit tests.

use dav_ui::config::MAX_VISIBLE_ENTRIES;
use dav_ui::pagination::{PageChange, PageEntry, PaginationController, Region};

proptest::proptest! {
    /// Entry count is buttons plus at most two ellipses, and never more than `pages`.
    #[test]
    fn entry_count_is_bounded(pages in 0i32..=50, offset in 0i32..50) {
        let current = if pages == 0 { 1 } else { 1 + offset % pages };
        let entries = PaginationController::new(pages, current).entries();

        let ellipses = entries.iter().filter(|e| e.is_ellipsis()).count();
        let buttons = entries.iter().filter(|e| !e.is_ellipsis()).count();
        assert_eq!(entries.len(), buttons + ellipses);
        assert!(ellipses <= 2, "pages={pages} current={current}: {ellipses} ellipses");
        assert!(entries.len() <= pages as usize);
    }

    /// First and last page are always explicit buttons.
    #[test]
    fn first_and_last_page_always_visible(pages in 1i32..=200, offset in 0i32..200) {
        let current = 1 + offset % pages;
        let entries = PaginationController::new(pages, current).entries();

        assert_eq!(entries.first().and_then(PageEntry::index), Some(1));
        assert_eq!(entries.last().and_then(PageEntry::index), Some(pages));
    }

    /// Explicit pages ascend strictly and the current page is the only selected one.
    #[test]
    fn pages_ascend_and_one_is_selected(pages in 1i32..=200, offset in 0i32..200) {
        let current = 1 + offset % pages;
        let entries = PaginationController::new(pages, current).entries();

        let indices: Vec<i32> = entries.iter().filter_map(PageEntry::index).collect();
        assert!(indices.windows(2).all(|w| w[0] < w[1]), "{indices:?}");

        let selected: Vec<i32> = entries
            .iter()
            .filter_map(|e| match e {
                PageEntry::Page { index, selected: true } => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(selected, vec![current]);
    }

    /// At most one ellipsis per region, start before end.
    #[test]
    fn one_ellipsis_per_region(pages in 0i32..=200, offset in 0i32..200) {
        let current = if pages == 0 { 1 } else { 1 + offset % pages };
        let entries = PaginationController::new(pages, current).entries();

        let regions: Vec<Region> = entries
            .iter()
            .filter_map(|e| match e {
                PageEntry::Ellipsis(region) => Some(*region),
                PageEntry::Page { .. } => None,
            })
            .collect();
        assert!(
            regions.is_empty()
                || regions == [Region::Start]
                || regions == [Region::End]
                || regions == [Region::Start, Region::End],
            "{regions:?}"
        );
    }

    /// Any input, however far out of range, stays within the fixed capacity.
    #[test]
    fn never_panics_and_fits_capacity(pages in proptest::num::i32::ANY, current in proptest::num::i32::ANY) {
        let state = PaginationController::new(pages, current).state();
        assert!(state.entries.len() <= MAX_VISIBLE_ENTRIES);
        assert_eq!(state.show_navigation, pages > 0);
    }

    /// Back and forward move by exactly one page and only when enabled.
    #[test]
    fn navigation_moves_one_page(pages in 1i32..=100, offset in 0i32..100) {
        let current = 1 + offset % pages;
        let c = PaginationController::new(pages, current);

        match c.back() {
            Some(PageChange { page }) => assert_eq!(page, current - 1),
            None => assert_eq!(current, 1),
        }
        match c.forward() {
            Some(PageChange { page }) => assert_eq!(page, current + 1),
            None => assert_eq!(current, pages),
        }
    }
}
