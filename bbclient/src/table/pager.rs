use std::ops::Range;

/// Fixed-size page window over the sorted row sequence. Pages are 1-based;
/// every mutation clamps into the valid range, so an empty snapshot still
/// reports page 1 of 1.
#[derive(Debug, Clone)]
pub struct Pager {
    page: usize,
    per_page: usize,
}

impl Pager {
    pub fn new(per_page: usize) -> Self {
        Self { page: 1, per_page }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Total pages for `rows` rows, never less than one.
    pub fn total_pages(&self, rows: usize) -> usize {
        rows.div_ceil(self.per_page).max(1)
    }

    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    pub fn is_last(&self, rows: usize) -> bool {
        self.page == self.total_pages(rows)
    }

    /// Jump directly to `page`, clamped into range.
    pub fn set_page(&mut self, page: usize, rows: usize) {
        self.page = page.clamp(1, self.total_pages(rows));
    }

    pub fn next(&mut self, rows: usize) {
        self.set_page(self.page + 1, rows);
    }

    pub fn prev(&mut self, rows: usize) {
        self.set_page(self.page.saturating_sub(1), rows);
    }

    pub fn first(&mut self) {
        self.page = 1;
    }

    pub fn last(&mut self, rows: usize) {
        self.page = self.total_pages(rows);
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Keep the current page valid when the row count changes underneath.
    pub fn clamp_to(&mut self, rows: usize) {
        self.page = self.page.clamp(1, self.total_pages(rows));
    }

    /// Index range of the current page within the sorted sequence.
    pub fn page_range(&self, rows: usize) -> Range<usize> {
        let start = self.offset().min(rows);
        let end = (start + self.per_page).min(rows);
        start..end
    }

    /// Index of the first row of the current page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_three_rows_make_three_pages() {
        let pager = Pager::new(10);
        assert_eq!(pager.total_pages(23), 3);
        assert_eq!(pager.total_pages(20), 2);
        assert_eq!(pager.total_pages(1), 1);
    }

    #[test]
    fn empty_snapshot_still_has_one_page() {
        let mut pager = Pager::new(10);
        assert_eq!(pager.total_pages(0), 1);
        pager.clamp_to(0);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.page_range(0), 0..0);
    }

    #[test]
    fn set_page_clamps_both_ends() {
        let mut pager = Pager::new(10);
        pager.set_page(0, 23);
        assert_eq!(pager.page(), 1);
        pager.set_page(4, 23);
        assert_eq!(pager.page(), 3);
    }

    #[test]
    fn next_and_prev_saturate_at_the_edges() {
        let mut pager = Pager::new(10);
        pager.prev(23);
        assert_eq!(pager.page(), 1);

        pager.last(23);
        pager.next(23);
        assert_eq!(pager.page(), 3);
    }

    #[test]
    fn page_ranges_cover_the_sequence() {
        let mut pager = Pager::new(10);
        assert_eq!(pager.page_range(23), 0..10);

        pager.next(23);
        assert_eq!(pager.page_range(23), 10..20);
        assert_eq!(pager.offset(), 10);

        pager.next(23);
        assert_eq!(pager.page_range(23), 20..23);
    }

    #[test]
    fn shrinking_row_count_clamps_the_page() {
        let mut pager = Pager::new(10);
        pager.last(23);
        pager.clamp_to(5);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn edge_flags_track_the_current_page() {
        let mut pager = Pager::new(10);
        assert!(pager.is_first());
        assert!(!pager.is_last(23));

        pager.last(23);
        assert!(pager.is_last(23));
        assert!(!pager.is_first());
    }
}
