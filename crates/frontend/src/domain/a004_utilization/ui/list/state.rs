use crate::shared::list_utils::SearchQuery;
use contracts::domain::a004_utilization::UtilizationRecord;
use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UtilizationListState {
    pub search: String,
    /// Group label; empty means all groups
    pub group: String,
}

impl UtilizationListState {
    pub fn matches(&self, record: &UtilizationRecord) -> bool {
        SearchQuery::text(self.search.clone()).matches_name(&record.name)
            && (self.group.is_empty() || record.group_label() == self.group)
    }

    pub fn apply(&self, records: &[UtilizationRecord]) -> Vec<UtilizationRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

pub fn create_state() -> RwSignal<UtilizationListState> {
    RwSignal::new(UtilizationListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_utilization::UNGROUPED_LABEL;
    use serde_json::json;

    fn records() -> Vec<UtilizationRecord> {
        serde_json::from_value(json!([
            {"id": 1, "nazwa": "Ketonal", "ilosc": 2, "powod": "Przeterminowany", "grupa": "2025/01"},
            {"id": 2, "nazwa": "Paracetamol", "ilosc": 10, "powod": "Uszkodzony"},
            {"id": 3, "nazwa": "Ketoprofen", "ilosc": 1, "powod": "Przeterminowany", "grupa": "2025/02"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_search_and_group_filters() {
        let state = UtilizationListState {
            search: "KETO".into(),
            group: "2025/02".into(),
        };
        let ids: Vec<i64> = state.apply(&records()).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3]);

        let ungrouped = UtilizationListState {
            search: String::new(),
            group: UNGROUPED_LABEL.into(),
        };
        assert_eq!(ungrouped.apply(&records()).len(), 1);
        assert_eq!(UtilizationListState::default().apply(&records()).len(), 3);
    }
}
