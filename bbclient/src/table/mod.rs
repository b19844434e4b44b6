//! Sort, selection, and pagination state shared by every table view. All of
//! it operates on borrowed row snapshots; the fetched data is never mutated
//! or reordered in place.

mod pager;
mod select;
mod sort;

pub use pager::Pager;
pub use select::Selection;
pub use sort::{SortDirection, SortKey, SortState};

/// Rows shown per page wherever a view paginates.
pub const PAGE_SIZE: usize = 10;

/// A row that can be displayed in a sortable table.
pub trait TableRow {
    /// Column identifier, one variant per sortable column.
    type Field: Copy + PartialEq;

    /// Stable identity used by the selection tracker. Unique within a
    /// snapshot.
    fn id(&self) -> &str;

    /// Projection of one column into an orderable key. Every row of a table
    /// must project a given field to the same `SortKey` variant.
    fn sort_key(&self, field: Self::Field) -> SortKey;
}

/// Combined per-view table state.
pub struct TableState<R: TableRow> {
    pub sort: SortState<R::Field>,
    pub selection: Selection,
    pub pager: Option<Pager>,
}

impl<R: TableRow> TableState<R> {
    pub fn new() -> Self {
        Self {
            sort: SortState::default(),
            selection: Selection::default(),
            pager: None,
        }
    }

    pub fn paginated() -> Self {
        Self {
            pager: Some(Pager::new(PAGE_SIZE)),
            ..Self::new()
        }
    }

    /// Back to defaults: no sort, empty selection, first page. Applied
    /// whenever a fresh row snapshot is installed.
    pub fn reset(&mut self) {
        self.sort.clear();
        self.selection.clear();
        if let Some(pager) = &mut self.pager {
            pager.reset();
        }
    }

    /// The rows the current page displays: the full snapshot ordered by the
    /// active sort, then clamped to the pager window.
    pub fn visible<'a>(&mut self, rows: &'a [R]) -> Vec<&'a R> {
        let sorted = self.sort.apply(rows);
        match &mut self.pager {
            Some(pager) => {
                pager.clamp_to(sorted.len());
                let range = pager.page_range(sorted.len());
                sorted[range].to_vec()
            }
            None => sorted,
        }
    }

    /// Offset of the first visible row within the sorted sequence, for
    /// positional reference numbers that keep counting across pages.
    pub fn page_offset(&self) -> usize {
        self.pager.as_ref().map_or(0, Pager::offset)
    }
}

impl<R: TableRow> Default for TableState<R> {
    fn default() -> Self {
        Self::new()
    }
}
