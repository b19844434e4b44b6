use super::TableRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Orderable projection of a single cell. The derived ordering is only
/// meaningful between keys of the same variant, which holds as long as a
/// column projects every row consistently.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Text(String),
    Int(i64),
}

impl SortKey {
    /// Case-insensitive text key.
    pub fn text(value: &str) -> Self {
        SortKey::Text(value.to_lowercase())
    }

    /// Timestamp key in epoch milliseconds. Missing values sort as epoch
    /// zero, placing them first in an ascending sort.
    pub fn instant(value: Option<&chrono::DateTime<chrono::Utc>>) -> Self {
        SortKey::Int(value.map_or(0, |t| t.timestamp_millis()))
    }

    /// Fixed-rank key for closed enumerations whose ordering is not
    /// alphabetical.
    pub fn rank(value: u8) -> Self {
        SortKey::Int(i64::from(value))
    }
}

/// The single active sort column and its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F> {
    active: Option<(F, SortDirection)>,
}

impl<F> Default for SortState<F> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<F: Copy + PartialEq> SortState<F> {
    /// Advance the three-state cycle for `field`: unsorted -> ascending ->
    /// descending -> unsorted. A different field always starts a fresh
    /// ascending cycle and drops the previous sort.
    pub fn toggle(&mut self, field: F) {
        self.active = match self.active {
            Some((current, SortDirection::Ascending)) if current == field => {
                Some((field, SortDirection::Descending))
            }
            Some((current, SortDirection::Descending)) if current == field => None,
            _ => Some((field, SortDirection::Ascending)),
        };
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn is_sorted(&self) -> bool {
        self.active.is_some()
    }

    /// Direction indicator for a column header, `None` when the column is
    /// not the active sort.
    pub fn direction_of(&self, field: F) -> Option<SortDirection> {
        match self.active {
            Some((current, direction)) if current == field => Some(direction),
            _ => None,
        }
    }

    /// Ordered view of `rows` without mutating them. The sort is stable, so
    /// rows with equal keys keep their snapshot order; with no active sort
    /// the snapshot order is returned as-is.
    pub fn apply<'a, R>(&self, rows: &'a [R]) -> Vec<&'a R>
    where
        R: TableRow<Field = F>,
    {
        let mut view: Vec<&R> = rows.iter().collect();
        if let Some((field, direction)) = self.active {
            view.sort_by(|a, b| {
                let (ka, kb) = (a.sort_key(field), b.sort_key(field));
                match direction {
                    SortDirection::Ascending => ka.cmp(&kb),
                    SortDirection::Descending => kb.cmp(&ka),
                }
            });
        }
        view
    }
}
