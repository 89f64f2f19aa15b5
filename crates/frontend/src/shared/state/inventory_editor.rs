//! View model shared by the category-grouped inventory lists.
//!
//! Holds the fetched tree, the category catalog and two draft buffers:
//! `bulk` for the all-rows edit mode and `rows` for single-row edits. The
//! fetched tree is only ever replaced by a re-fetch.

use super::bulk_save::{plan_rows, save_all, SaveDisposition, SaveSummary};
use super::draft_buffer::DraftBuffer;
use crate::shared::api_utils::ApiError;
use crate::shared::components::{confirm, Notice};
use contracts::domain::a001_medicine::{Medicine, MedicineDraft};
use contracts::domain::a002_equipment::{Equipment, EquipmentDraft};
use contracts::domain::common::{CategoryCatalog, CategoryRecord, CategoryTree, InventoryItem};
use leptos::prelude::*;
use std::future::Future;

const DISCARD_PROMPT: &str = "Masz niezapisane zmiany. Czy na pewno chcesz je porzucić?";

/// A listing row that can be edited through a draft
pub trait EditableItem: InventoryItem + Clone + Send + Sync + 'static {
    type Draft: Clone + PartialEq + Send + Sync + 'static;

    fn to_draft(&self) -> Self::Draft;

    /// The row as it should be sent back, stamped with `author`
    fn apply_draft(&self, draft: &Self::Draft, author: Option<String>) -> Self;

    fn validate_draft(draft: &Self::Draft) -> Result<(), String>;
}

impl EditableItem for Medicine {
    type Draft = MedicineDraft;

    fn to_draft(&self) -> MedicineDraft {
        self.draft()
    }

    fn apply_draft(&self, draft: &MedicineDraft, author: Option<String>) -> Self {
        self.with_draft(draft, author)
    }

    fn validate_draft(draft: &MedicineDraft) -> Result<(), String> {
        draft.validate()
    }
}

impl EditableItem for Equipment {
    type Draft = EquipmentDraft;

    fn to_draft(&self) -> EquipmentDraft {
        self.draft()
    }

    fn apply_draft(&self, draft: &EquipmentDraft, author: Option<String>) -> Self {
        self.with_draft(draft, author)
    }

    fn validate_draft(draft: &EquipmentDraft) -> Result<(), String> {
        draft.validate()
    }
}

/// Edited rows that pass validation, or the first failure prefixed with
/// the row's name
pub fn validated_edits<D>(
    edited: Vec<(i64, D)>,
    validate: impl Fn(&D) -> Result<(), String>,
    name_of: impl Fn(i64) -> String,
) -> Result<Vec<(i64, D)>, String> {
    for (id, draft) in &edited {
        if let Err(msg) = validate(draft) {
            return Err(format!("{}: {}", name_of(*id), msg));
        }
    }
    Ok(edited)
}

/// Notice reporting a bulk save
pub fn summary_notice(summary: &SaveSummary) -> Notice {
    match summary.disposition() {
        SaveDisposition::AllSucceeded => Notice::success(summary.message()),
        SaveDisposition::NothingToSave => Notice::info(summary.message()),
        SaveDisposition::PartiallySucceeded | SaveDisposition::AllFailed => {
            Notice::error(summary.message())
        }
    }
}

/// Apply a finished save-all: commit the buffer when edit mode ends, then
/// re-fetch in every case
pub fn finish_bulk(summary: &SaveSummary, commit: impl FnOnce(), refetch: impl FnOnce()) -> Notice {
    if summary.clears_edit_mode() {
        commit();
    }
    refetch();
    summary_notice(summary)
}

pub struct InventoryEditor<T: EditableItem> {
    pub tree: RwSignal<CategoryTree<T>>,
    pub catalog: RwSignal<CategoryCatalog>,
    pub bulk: RwSignal<DraftBuffer<i64, T::Draft>>,
    pub rows: RwSignal<DraftBuffer<i64, T::Draft>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub notice: RwSignal<Option<Notice>>,
}

impl<T: EditableItem> Clone for InventoryEditor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: EditableItem> Copy for InventoryEditor<T> {}

impl<T: EditableItem> InventoryEditor<T> {
    pub fn new() -> Self {
        Self {
            tree: RwSignal::new(CategoryTree::default()),
            catalog: RwSignal::new(CategoryCatalog::default()),
            bulk: RwSignal::new(DraftBuffer::new()),
            rows: RwSignal::new(DraftBuffer::new()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            notice: RwSignal::new(None),
        }
    }

    /// Replace the tree with a fresh fetch. A failed fetch keeps the old tree.
    pub fn load<Fut>(self, fetch: Fut)
    where
        Fut: Future<Output = Result<CategoryTree<T>, ApiError>> + 'static,
    {
        self.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch.await {
                Ok(tree) => {
                    log::debug!("loaded {} rows", tree.item_count());
                    self.tree.set(tree);
                }
                Err(e) => {
                    log::error!("fetch failed: {}", e);
                    self.notice
                        .set(Some(Notice::error(format!("Nie udało się pobrać danych: {}", e))));
                }
            }
            self.loading.set(false);
        });
    }

    pub fn load_catalog<Fut>(self, fetch: Fut)
    where
        Fut: Future<Output = Result<Vec<CategoryRecord>, ApiError>> + 'static,
    {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch.await {
                Ok(records) => self.catalog.set(CategoryCatalog::new(records)),
                Err(e) => log::warn!("category catalog unavailable: {}", e),
            }
        });
    }

    pub fn find(&self, id: i64) -> Option<T> {
        self.tree
            .with_untracked(|t| t.find(|i| i.item_id() == id).cloned())
    }

    fn name_of(&self, id: i64) -> String {
        self.find(id)
            .map(|i| i.item_name().to_string())
            .unwrap_or_else(|| format!("#{}", id))
    }

    pub fn is_bulk(&self) -> bool {
        self.bulk.with(|b| b.is_active())
    }

    /// Unsaved edits in either buffer
    pub fn has_unsaved(&self) -> bool {
        self.bulk.with(|b| b.has_changes()) || self.rows.with(|r| r.has_changes())
    }

    /// Snapshot every loaded row into the bulk buffer
    pub fn enter_bulk(&self) {
        if self.rows.with_untracked(|r| r.has_changes()) && !confirm(DISCARD_PROMPT) {
            return;
        }
        self.rows.update(|r| r.discard());
        let snapshot: Vec<(i64, T::Draft)> = self.tree.with_untracked(|t| {
            t.items()
                .into_iter()
                .map(|i| (i.item_id(), i.to_draft()))
                .collect()
        });
        log::info!("bulk edit started for {} rows", snapshot.len());
        self.bulk.update(|b| b.begin(snapshot));
    }

    /// Leave bulk mode; asks before dropping unsaved edits
    pub fn exit_bulk(&self) -> bool {
        let mut buffer = self.bulk.get_untracked();
        let left = buffer.request_exit(|| confirm(DISCARD_PROMPT));
        if left {
            self.bulk.set(buffer);
        }
        left
    }

    pub fn is_editing(&self, id: i64) -> bool {
        self.bulk.with(|b| b.contains(&id)) || self.rows.with(|r| r.contains(&id))
    }

    pub fn is_dirty(&self, id: i64) -> bool {
        self.bulk.with(|b| b.is_dirty(&id)) || self.rows.with(|r| r.is_dirty(&id))
    }

    /// Current draft of a row in edit, bulk buffer first
    pub fn draft(&self, id: i64) -> Option<T::Draft> {
        self.bulk
            .with(|b| b.draft(&id).cloned())
            .or_else(|| self.rows.with(|r| r.draft(&id).cloned()))
    }

    /// Apply a field change to exactly one row's draft
    pub fn edit(&self, id: i64, change: impl FnOnce(&mut T::Draft)) {
        if self.bulk.with_untracked(|b| b.contains(&id)) {
            self.bulk.update(|b| {
                b.edit(&id, change);
            });
        } else {
            self.rows.update(|r| {
                r.edit(&id, change);
            });
        }
    }

    pub fn start_row(&self, id: i64) {
        if let Some(item) = self.find(id) {
            self.rows.update(|r| r.begin_row(id, item.to_draft()));
        }
    }

    pub fn cancel_row(&self, id: i64) {
        self.rows.update(|r| r.remove(&id));
    }

    /// Persist one row edited on its own
    pub fn save_row<Fut>(
        self,
        id: i64,
        author: Option<String>,
        send: impl FnOnce(T) -> Fut,
        refetch: impl Fn() + 'static,
    ) where
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let Some(draft) = self.rows.with_untracked(|r| r.draft(&id).cloned()) else {
            return;
        };
        if let Err(msg) = T::validate_draft(&draft) {
            self.notice.set(Some(Notice::error(msg)));
            return;
        }
        let Some(item) = self.find(id) else {
            log::warn!("row {} no longer loaded", id);
            self.rows.update(|r| r.remove(&id));
            refetch();
            return;
        };

        let request = send(item.apply_draft(&draft, author));
        self.saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match request.await {
                Ok(()) => {
                    self.rows.update(|r| r.remove(&id));
                    self.notice.set(Some(Notice::success("Zapisano zmiany")));
                }
                Err(e) => {
                    log::error!("update of row {} failed: {}", id, e);
                    self.notice.set(Some(Notice::error(e.to_string())));
                }
            }
            self.saving.set(false);
            refetch();
        });
    }

    /// Save every edited row of the bulk buffer concurrently
    pub fn save_bulk<Fut>(
        self,
        author: Option<String>,
        send: impl Fn(T) -> Fut,
        refetch: impl Fn() + 'static,
    ) where
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let edited = self.bulk.with_untracked(|b| b.dirty_entries());
        let edited = match validated_edits(edited, T::validate_draft, |id| self.name_of(id)) {
            Ok(edited) => edited,
            Err(msg) => {
                self.notice.set(Some(Notice::error(msg)));
                return;
            }
        };
        if edited.is_empty() {
            let notice = finish_bulk(&SaveSummary::default(), || self.bulk.update(|b| b.commit()), refetch);
            self.notice.set(Some(notice));
            return;
        }

        let plans = plan_rows(
            edited,
            |id| self.find(*id),
            |item, draft| send(item.apply_draft(&draft, author.clone())),
        );
        self.saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let summary = save_all(plans).await;
            self.saving.set(false);
            let notice = finish_bulk(&summary, || self.bulk.update(|b| b.commit()), refetch);
            self.notice.set(Some(notice));
        });
    }

    /// Confirm, delete and re-fetch
    pub fn delete<Fut>(self, id: i64, send: impl FnOnce(i64) -> Fut, refetch: impl Fn() + 'static)
    where
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let name = self.name_of(id);
        if !confirm(&format!("Czy na pewno usunąć „{}”?", name)) {
            return;
        }
        let request = send(id);
        wasm_bindgen_futures::spawn_local(async move {
            match request.await {
                Ok(()) => {
                    log::info!("deleted row {}", id);
                    self.rows.update(|r| r.remove(&id));
                    self.bulk.update(|b| b.remove(&id));
                    self.notice.set(Some(Notice::success(format!("Usunięto: {}", name))));
                }
                Err(e) => {
                    log::error!("delete of row {} failed: {}", id, e);
                    self.notice.set(Some(Notice::error(e.to_string())));
                }
            }
            refetch();
        });
    }
}

impl<T: EditableItem> Default for InventoryEditor<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::NoticeKind;
    use futures::executor::block_on;
    use futures::future::{ready, Ready};
    use std::cell::{Cell, RefCell};

    type Outcome = Ready<Result<(), ApiError>>;

    fn failed() -> Result<(), ApiError> {
        Err(ApiError::Http {
            status: 500,
            message: None,
        })
    }

    /// Runs save-all over rows 1..=3 all edited, `outcome` deciding each
    /// request; returns the buffer afterwards, re-fetch count and notice
    fn run_bulk(outcome: impl Fn(i64) -> Result<(), ApiError>) -> (DraftBuffer<i64, i32>, usize, Notice) {
        let mut buffer = DraftBuffer::new();
        buffer.begin((1..=3).map(|id| (id, 0)));
        for id in 1..=3 {
            buffer.edit(&id, |d| *d = 10);
        }
        let plans = plan_rows(buffer.dirty_entries(), |id| Some(*id), |id: i64, _: i32| -> Outcome {
            ready(outcome(id))
        });

        let summary = block_on(save_all(plans));
        let buffer = RefCell::new(buffer);
        let refetched = Cell::new(0);
        let notice = finish_bulk(
            &summary,
            || buffer.borrow_mut().commit(),
            || refetched.set(refetched.get() + 1),
        );
        (buffer.into_inner(), refetched.get(), notice)
    }

    #[test]
    fn test_all_saved_commits_and_refetches() {
        let (buffer, refetched, notice) = run_bulk(|_| Ok(()));
        assert!(!buffer.is_active());
        assert!(!buffer.has_changes());
        assert_eq!(refetched, 1);
        assert_eq!(notice.kind, NoticeKind::Success);
    }

    #[test]
    fn test_partial_save_keeps_buffer_and_refetches() {
        let (buffer, refetched, notice) = run_bulk(|id| if id == 2 { failed() } else { Ok(()) });
        assert!(buffer.is_active());
        assert_eq!(buffer.dirty_entries().len(), 3);
        assert_eq!(refetched, 1);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.text.contains("2 z 3"));
    }

    #[test]
    fn test_failed_save_keeps_buffer_and_refetches() {
        let (buffer, refetched, notice) = run_bulk(|_| failed());
        assert!(buffer.is_active());
        assert!(buffer.has_changes());
        assert_eq!(refetched, 1);
        assert_eq!(notice.kind, NoticeKind::Error);
    }

    #[test]
    fn test_nothing_to_save_commits_and_refetches() {
        let mut buffer: DraftBuffer<i64, i32> = DraftBuffer::new();
        buffer.begin([(1, 0)]);
        let refetched = Cell::new(0);
        let notice = finish_bulk(
            &SaveSummary::default(),
            || buffer.commit(),
            || refetched.set(refetched.get() + 1),
        );
        assert!(!buffer.is_active());
        assert_eq!(refetched.get(), 1);
        assert_eq!(notice.kind, NoticeKind::Info);
    }

    #[test]
    fn test_validated_edits_names_the_failing_row() {
        let mut bad = MedicineDraft {
            name: "Paracetamol".into(),
            ..Default::default()
        };
        bad.quantity = -2;
        let good = MedicineDraft {
            name: "Gaza".into(),
            quantity: 4,
            ..Default::default()
        };

        let err = validated_edits(
            vec![(1, good.clone()), (2, bad)],
            Medicine::validate_draft,
            |id| format!("lek {}", id),
        )
        .unwrap_err();
        assert_eq!(err, "lek 2: Ilość nie może być ujemna");

        let ok = validated_edits(vec![(1, good)], Medicine::validate_draft, |_| String::new());
        assert_eq!(ok.unwrap().len(), 1);
    }

    #[test]
    fn test_summary_notice_kinds() {
        let all = SaveSummary { attempted: 2, succeeded: 2, failed: 0 };
        let partial = SaveSummary { attempted: 3, succeeded: 1, failed: 2 };
        let none = SaveSummary { attempted: 2, succeeded: 0, failed: 2 };
        assert_eq!(summary_notice(&all).kind, NoticeKind::Success);
        assert_eq!(summary_notice(&partial).kind, NoticeKind::Error);
        assert!(summary_notice(&partial).text.contains("1 z 3"));
        assert_eq!(summary_notice(&none).kind, NoticeKind::Error);
        assert_eq!(summary_notice(&SaveSummary::default()).kind, NoticeKind::Info);
    }

    #[test]
    fn test_equipment_draft_round_trip_through_trait() {
        let e: Equipment =
            serde_json::from_str(r#"{"sprzet_id": 5, "sprzet_nazwa": "Nosze", "sprzet_ilosc_aktualna": 1}"#)
                .unwrap();
        let mut draft = e.to_draft();
        draft.current_quantity = 3;
        let sent = e.apply_draft(&draft, Some("bosman".into()));
        assert_eq!(sent.current_quantity, 3);
        assert_eq!(sent.modified_by.as_deref(), Some("bosman"));
        assert!(Equipment::validate_draft(&draft).is_ok());
    }
}
