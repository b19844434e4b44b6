use std::collections::HashSet;

/// Identifier-based row selection. Addressing rows by id rather than index
/// keeps a selection attached to its rows across sorting and paging.
#[derive(Debug, Default, Clone)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Toggle a single row in or out of the selection.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn set(&mut self, id: &str, selected: bool) {
        if selected {
            self.ids.insert(id.to_string());
        } else {
            self.ids.remove(id);
        }
    }

    /// The header checkbox action: select every visible row, unless they
    /// are all selected already, in which case deselect them. Ids outside
    /// the visible set are never touched.
    pub fn toggle_all(&mut self, visible: &[&str]) {
        if self.all_selected(visible) {
            for id in visible {
                self.ids.remove(*id);
            }
        } else {
            for id in visible {
                self.ids.insert((*id).to_string());
            }
        }
    }

    /// True when the visible set is non-empty and fully selected.
    pub fn all_selected(&self, visible: &[&str]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.ids.contains(*id))
    }

    /// Something is selected, but not everything visible. Drives the
    /// header checkbox's third display state.
    pub fn indeterminate(&self, visible: &[&str]) -> bool {
        !self.ids.is_empty() && !self.all_selected(visible)
    }
}
