use crate::shared::list_utils::SearchQuery;
use contracts::domain::a001_medicine::Medicine;
use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MedicineListState {
    pub search: String,
    /// Selected stock status; empty means all
    pub status: String,
}

impl MedicineListState {
    pub fn query(&self) -> SearchQuery {
        SearchQuery {
            text: self.search.clone(),
            status: (!self.status.is_empty()).then(|| self.status.clone()),
        }
    }

    pub fn is_filtered(&self) -> bool {
        !self.search.trim().is_empty() || !self.status.is_empty()
    }

    /// Placeholder for a table with no rows to show
    pub fn empty_text(&self, loading: bool) -> &'static str {
        if loading {
            "Ładowanie..."
        } else if self.is_filtered() {
            "Brak leków spełniających kryteria"
        } else {
            "Brak leków"
        }
    }
}

/// Row filter of the medicine list: name substring plus stock status
pub fn matches(query: &SearchQuery, medicine: &Medicine) -> bool {
    query.matches_with_status(medicine, &medicine.stock_status)
}

pub fn create_state() -> RwSignal<MedicineListState> {
    RwSignal::new(MedicineListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::CategoryTree;
    use serde_json::json;

    fn tree() -> CategoryTree<Medicine> {
        serde_json::from_value(json!({
            "Leki przeciwbólowe": {
                "Doustne": [
                    {"id": 1, "nazwa": "Paracetamol", "status_ilosci": "Wystarczająca ilość"},
                    {"id": 2, "nazwa": "Ibuprofen", "status_ilosci": "Niski stan"}
                ]
            },
            "Opatrunki": {"null": [{"id": 3, "nazwa": "Gaza jałowa", "status_ilosci": "Niski stan"}]}
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_state_matches_everything() {
        let state = MedicineListState::default();
        assert!(!state.is_filtered());
        let q = state.query();
        assert_eq!(tree().filtered(|m| matches(&q, m)), tree());
    }

    #[test]
    fn test_name_and_status_combine() {
        let state = MedicineListState {
            search: "PROFEN".into(),
            status: "Niski stan".into(),
        };
        let q = state.query();
        let visible = tree().filtered(|m| matches(&q, m));
        assert_eq!(visible.item_count(), 1);
        assert_eq!(visible.roots.len(), 1);

        let by_status = MedicineListState {
            search: String::new(),
            status: "Niski stan".into(),
        };
        let q = by_status.query();
        let visible = tree().filtered(|m| matches(&q, m));
        assert_eq!(visible.item_count(), 2);
        assert_eq!(visible.roots.len(), 2);
    }

    #[test]
    fn test_empty_text_mentions_active_filter() {
        let mut state = MedicineListState::default();
        assert_eq!(state.empty_text(true), "Ładowanie...");
        assert_eq!(state.empty_text(false), "Brak leków");
        state.status = "Niski stan".into();
        assert_eq!(state.empty_text(false), "Brak leków spełniających kryteria");
    }
}
