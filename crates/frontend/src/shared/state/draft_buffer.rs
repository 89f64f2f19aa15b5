use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq)]
struct Entry<D> {
    original: D,
    draft: D,
}

/// DraftBuffer holds per-row edit drafts while a list is in edit mode.
///
/// Every row is snapshotted on `begin`; edits only touch the draft of the
/// row they target. The fetched collection itself is never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct DraftBuffer<K: Ord, D> {
    entries: BTreeMap<K, Entry<D>>,
    active: bool,
}

impl<K: Ord + Copy, D: Clone + PartialEq> DraftBuffer<K, D> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            active: false,
        }
    }

    /// Enter edit mode with a snapshot of the given rows
    pub fn begin(&mut self, rows: impl IntoIterator<Item = (K, D)>) {
        self.entries = rows
            .into_iter()
            .map(|(key, value)| {
                (
                    key,
                    Entry {
                        original: value.clone(),
                        draft: value,
                    },
                )
            })
            .collect();
        self.active = true;
    }

    /// Snapshot a single row without discarding the others
    pub fn begin_row(&mut self, key: K, value: D) {
        self.entries.insert(
            key,
            Entry {
                original: value.clone(),
                draft: value,
            },
        );
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn draft(&self, key: &K) -> Option<&D> {
        self.entries.get(key).map(|e| &e.draft)
    }

    /// Apply `change` to the draft of `key`. Returns false for unknown rows.
    pub fn edit(&mut self, key: &K, change: impl FnOnce(&mut D)) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) => {
                change(&mut entry.draft);
                true
            }
            None => false,
        }
    }

    pub fn is_dirty(&self, key: &K) -> bool {
        self.entries
            .get(key)
            .map(|e| e.draft != e.original)
            .unwrap_or(false)
    }

    /// Rows whose draft differs from the snapshot, in key order
    pub fn dirty_entries(&self) -> Vec<(K, D)> {
        self.entries
            .iter()
            .filter(|(_, e)| e.draft != e.original)
            .map(|(k, e)| (*k, e.draft.clone()))
            .collect()
    }

    pub fn has_changes(&self) -> bool {
        self.entries.values().any(|e| e.draft != e.original)
    }

    /// Changes were persisted: leave edit mode and drop every draft
    pub fn commit(&mut self) {
        self.entries.clear();
        self.active = false;
    }

    /// Drop a single row's draft, e.g. after its own save or cancel
    pub fn remove(&mut self, key: &K) {
        self.entries.remove(key);
    }

    pub fn discard(&mut self) {
        self.entries.clear();
        self.active = false;
    }

    /// Leave edit mode. Unsaved changes are only discarded if `confirm`
    /// agrees; returns whether edit mode was left.
    pub fn request_exit(&mut self, confirm: impl FnOnce() -> bool) -> bool {
        if self.has_changes() && !confirm() {
            return false;
        }
        self.discard();
        true
    }
}

impl<K: Ord + Copy, D: Clone + PartialEq> Default for DraftBuffer<K, D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_medicine::Medicine;
    use serde_json::json;

    fn medicines() -> Vec<Medicine> {
        serde_json::from_value(json!([
            {"id": 1, "nazwa": "Paracetamol", "ilosc": 10, "kategoria_id": 1, "podkategoria_id": 11},
            {"id": 2, "nazwa": "Ibuprofen", "ilosc": 5, "kategoria_id": 1},
            {"id": 3, "nazwa": "Bandaż", "ilosc": 7, "kategoria_id": 2}
        ]))
        .unwrap()
    }

    fn started() -> DraftBuffer<i64, contracts::domain::a001_medicine::MedicineDraft> {
        let mut buffer = DraftBuffer::new();
        buffer.begin(medicines().iter().map(|m| (m.id, m.draft())));
        buffer
    }

    #[test]
    fn test_begin_snapshots_fetched_values() {
        let rows = medicines();
        let buffer = started();
        assert!(buffer.is_active());
        assert_eq!(buffer.len(), 3);
        for m in &rows {
            assert_eq!(buffer.draft(&m.id), Some(&m.draft()));
            assert!(!buffer.is_dirty(&m.id));
        }
        assert!(!buffer.has_changes());
    }

    #[test]
    fn test_edit_touches_only_its_row() {
        let rows = medicines();
        let mut buffer = started();
        assert!(buffer.edit(&2, |d| d.quantity = 50));

        assert_eq!(buffer.draft(&2).map(|d| d.quantity), Some(50));
        assert_eq!(buffer.draft(&1), Some(&rows[0].draft()));
        assert_eq!(buffer.draft(&3), Some(&rows[2].draft()));
        assert_eq!(buffer.dirty_entries().len(), 1);
        assert_eq!(buffer.dirty_entries()[0].0, 2);
        // fetched rows are untouched
        assert_eq!(rows[1].quantity, 5);
    }

    #[test]
    fn test_edit_back_to_original_is_clean() {
        let mut buffer = started();
        buffer.edit(&1, |d| d.quantity = 11);
        buffer.edit(&1, |d| d.quantity = 10);
        assert!(!buffer.is_dirty(&1));
    }

    #[test]
    fn test_edit_unknown_row() {
        let mut buffer = started();
        assert!(!buffer.edit(&99, |d| d.quantity = 1));
        assert!(!buffer.has_changes());
    }

    #[test]
    fn test_category_change_in_buffer_resets_lower_levels() {
        let mut buffer = started();
        buffer.edit(&1, |d| d.categories.set_category(Some(2)));
        let draft = buffer.draft(&1).unwrap();
        assert_eq!(draft.categories.category, Some(2));
        assert_eq!(draft.categories.subcategory, None);
        assert_eq!(draft.categories.sub_subcategory, None);
    }

    #[test]
    fn test_exit_without_changes_needs_no_confirmation() {
        let mut buffer = started();
        assert!(buffer.request_exit(|| panic!("should not ask")));
        assert!(!buffer.is_active());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_exit_with_changes_respects_confirmation() {
        let mut buffer = started();
        buffer.edit(&3, |d| d.name = "Bandaż elastyczny".into());

        assert!(!buffer.request_exit(|| false));
        assert!(buffer.is_active());
        assert!(buffer.is_dirty(&3));

        assert!(buffer.request_exit(|| true));
        assert!(!buffer.is_active());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_commit_clears() {
        let mut buffer = started();
        buffer.edit(&1, |d| d.quantity = 0);
        buffer.commit();
        assert!(!buffer.is_active());
        assert!(!buffer.has_changes());
    }

    #[test]
    fn test_single_row_snapshot() {
        let rows = medicines();
        let mut buffer = DraftBuffer::new();
        buffer.begin_row(rows[0].id, rows[0].draft());
        assert!(!buffer.is_active());
        assert!(buffer.contains(&1));
        buffer.remove(&1);
        assert!(!buffer.contains(&1));
    }
}
