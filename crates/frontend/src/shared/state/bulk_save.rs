//! Concurrent "save all" for the bulk edit mode.
//!
//! One request per edited row, all in flight at once, no rollback. The
//! caller re-fetches its collection after every run.

use crate::shared::api_utils::ApiError;
use futures::future::join_all;
use std::fmt::Display;
use std::future::Future;

/// What to do for one edited row
pub enum RowSave<F> {
    /// Row still exists; send its update
    Send(F),
    /// Row vanished from the loaded tree; counted as a failure
    Missing,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveDisposition {
    NothingToSave,
    AllSucceeded,
    PartiallySucceeded,
    AllFailed,
}

impl SaveSummary {
    pub fn disposition(&self) -> SaveDisposition {
        if self.attempted == 0 {
            SaveDisposition::NothingToSave
        } else if self.failed == 0 {
            SaveDisposition::AllSucceeded
        } else if self.succeeded == 0 {
            SaveDisposition::AllFailed
        } else {
            SaveDisposition::PartiallySucceeded
        }
    }

    /// Whether edit mode should be left and the buffer emptied
    pub fn clears_edit_mode(&self) -> bool {
        matches!(
            self.disposition(),
            SaveDisposition::NothingToSave | SaveDisposition::AllSucceeded
        )
    }

    /// Notice shown to the operator
    pub fn message(&self) -> String {
        match self.disposition() {
            SaveDisposition::NothingToSave => "Brak zmian do zapisania".to_string(),
            SaveDisposition::AllSucceeded => {
                format!("Zapisano wszystkie zmiany ({})", self.succeeded)
            }
            SaveDisposition::PartiallySucceeded => format!(
                "Zapisano {} z {} pozycji, błędy: {}",
                self.succeeded, self.attempted, self.failed
            ),
            SaveDisposition::AllFailed => format!(
                "Nie udało się zapisać żadnej zmiany ({} błędów)",
                self.failed
            ),
        }
    }
}

/// Build a plan for each edited row: look the row up in the loaded data and
/// turn it into a request, or mark it missing.
pub fn plan_rows<K, D, T, F>(
    edited: Vec<(K, D)>,
    lookup: impl Fn(&K) -> Option<T>,
    send: impl Fn(T, D) -> F,
) -> Vec<(K, RowSave<F>)> {
    edited
        .into_iter()
        .map(|(key, draft)| {
            let plan = match lookup(&key) {
                Some(row) => RowSave::Send(send(row, draft)),
                None => RowSave::Missing,
            };
            (key, plan)
        })
        .collect()
}

/// Run every planned update concurrently and wait for all of them to settle
pub async fn save_all<K, F>(rows: Vec<(K, RowSave<F>)>) -> SaveSummary
where
    K: Display,
    F: Future<Output = Result<(), ApiError>>,
{
    let mut summary = SaveSummary {
        attempted: rows.len(),
        ..SaveSummary::default()
    };

    let mut keys = Vec::new();
    let mut requests = Vec::new();
    for (key, plan) in rows {
        match plan {
            RowSave::Send(request) => {
                keys.push(key);
                requests.push(request);
            }
            RowSave::Missing => {
                log::warn!("row {} is no longer in the loaded data, skipped", key);
                summary.failed += 1;
            }
        }
    }

    let results = join_all(requests).await;
    for (key, result) in keys.iter().zip(results) {
        match result {
            Ok(()) => summary.succeeded += 1,
            Err(e) => {
                log::error!("saving row {} failed: {}", key, e);
                summary.failed += 1;
            }
        }
    }

    log::info!(
        "bulk save: {} attempted, {} saved, {} failed",
        summary.attempted,
        summary.succeeded,
        summary.failed
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::state::DraftBuffer;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::rc::Rc;

    fn fake_put(
        calls: &Rc<Cell<usize>>,
    ) -> impl Fn(i64, i32) -> std::pin::Pin<Box<dyn Future<Output = Result<(), ApiError>>>> {
        let calls = calls.clone();
        move |id: i64, _quantity: i32| {
            let calls = calls.clone();
            Box::pin(async move {
                calls.set(calls.get() + 1);
                if id % 2 == 0 {
                    Err(ApiError::Http {
                        status: 500,
                        message: None,
                    })
                } else {
                    Ok(())
                }
            })
        }
    }

    fn buffer_with(edits: &[(i64, i32)]) -> DraftBuffer<i64, i32> {
        let mut buffer = DraftBuffer::new();
        buffer.begin((1..=6).map(|id| (id, 0)));
        for (id, qty) in edits {
            buffer.edit(id, |d| *d = *qty);
        }
        buffer
    }

    #[test]
    fn test_one_call_per_edited_row() {
        let calls = Rc::new(Cell::new(0));
        let buffer = buffer_with(&[(1, 5), (3, 7), (5, 9)]);
        let plans = plan_rows(buffer.dirty_entries(), |id| Some(*id), fake_put(&calls));

        let summary = block_on(save_all(plans));
        assert_eq!(calls.get(), 3);
        assert_eq!(summary.attempted, 3);
        assert_eq!(summary.succeeded, 3);
        assert_eq!(summary.disposition(), SaveDisposition::AllSucceeded);
        assert!(summary.clears_edit_mode());
    }

    #[test]
    fn test_all_failed_keeps_edit_mode() {
        let calls = Rc::new(Cell::new(0));
        let buffer = buffer_with(&[(2, 1), (4, 1)]);
        let plans = plan_rows(buffer.dirty_entries(), |id| Some(*id), fake_put(&calls));

        let summary = block_on(save_all(plans));
        assert_eq!(calls.get(), 2);
        assert_eq!(summary.disposition(), SaveDisposition::AllFailed);
        assert!(!summary.clears_edit_mode());
    }

    #[test]
    fn test_partial_reports_both_counts() {
        let calls = Rc::new(Cell::new(0));
        let buffer = buffer_with(&[(1, 1), (2, 1), (3, 1)]);
        let plans = plan_rows(buffer.dirty_entries(), |id| Some(*id), fake_put(&calls));

        let summary = block_on(save_all(plans));
        assert_eq!((summary.succeeded, summary.failed), (2, 1));
        assert_eq!(summary.disposition(), SaveDisposition::PartiallySucceeded);
        assert!(summary.message().contains('2'));
        assert!(summary.message().contains('1'));
        assert!(!summary.clears_edit_mode());
    }

    #[test]
    fn test_missing_row_is_soft_failure() {
        let calls = Rc::new(Cell::new(0));
        let buffer = buffer_with(&[(1, 1), (3, 1)]);
        let plans = plan_rows(
            buffer.dirty_entries(),
            |id| (*id != 3).then_some(*id),
            fake_put(&calls),
        );

        let summary = block_on(save_all(plans));
        assert_eq!(calls.get(), 1);
        assert_eq!(summary.attempted, 2);
        assert_eq!((summary.succeeded, summary.failed), (1, 1));
    }

    #[test]
    fn test_nothing_edited_issues_no_calls() {
        let calls = Rc::new(Cell::new(0));
        let buffer = buffer_with(&[]);
        let plans = plan_rows(buffer.dirty_entries(), |id| Some(*id), fake_put(&calls));

        let summary = block_on(save_all(plans));
        assert_eq!(calls.get(), 0);
        assert_eq!(summary.disposition(), SaveDisposition::NothingToSave);
        assert!(summary.clears_edit_mode());
    }
}
