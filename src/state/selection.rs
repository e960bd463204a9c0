/// Selection state for the asset grid
///
/// A plain set of asset identifiers. All mutations are total: adding an
/// id the store has never heard of is allowed (it simply never renders
/// as checked), removing an absent id is a no-op.

use std::collections::HashSet;

/// The set of currently selected asset ids
#[derive(Debug, Default, Clone)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an id. Returns true if it was newly added (idempotent).
    pub fn add(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    /// Remove an id. Returns true if it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Drop everything. No-op on an already empty selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Read-only snapshot of the selected ids
    pub fn ids(&self) -> HashSet<String> {
        self.ids.clone()
    }
}
