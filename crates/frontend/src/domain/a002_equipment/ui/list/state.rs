use crate::shared::list_utils::SearchQuery;
use contracts::domain::a002_equipment::Equipment;
use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EquipmentListState {
    pub search: String,
    /// Show only rows below the required quantity
    pub shortage_only: bool,
}

impl EquipmentListState {
    pub fn query(&self) -> SearchQuery {
        SearchQuery::text(self.search.clone())
    }
}

/// Name substring, optionally restricted to rows with a shortage
pub fn matches(state: &EquipmentListState, query: &SearchQuery, equipment: &Equipment) -> bool {
    query.matches(equipment) && (!state.shortage_only || equipment.shortage() > 0)
}

pub fn create_state() -> RwSignal<EquipmentListState> {
    RwSignal::new(EquipmentListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::{CategoryTree, DisplayRow};
    use serde_json::json;

    #[test]
    fn test_single_item_tree_renders_header_and_row() {
        let tree: CategoryTree<Equipment> = serde_json::from_value(json!({
            "Sprzęt diagnostyczny": {"null": [
                {"sprzet_id": 1, "sprzet_nazwa": "Termometr", "sprzet_termin": "Ważny"}
            ]}
        }))
        .unwrap();
        let rows = tree.display_rows();
        assert_eq!(rows.len(), 2);
        assert!(matches!(&rows[0], DisplayRow::Group { depth: 0, label } if label == "Sprzęt diagnostyczny"));
        match &rows[1] {
            DisplayRow::Item { item, .. } => {
                assert_eq!(item.name, "Termometr");
                assert!(!contracts::domain::common::term_tone(&item.term_status).is_alert());
            }
            other => panic!("expected item row, got {:?}", other),
        }
    }

    #[test]
    fn test_name_search_is_case_insensitive() {
        let state = EquipmentListState {
            search: "TERMO".into(),
            shortage_only: false,
        };
        let e: Equipment =
            serde_json::from_value(json!({"sprzet_id": 1, "sprzet_nazwa": "Termometr"})).unwrap();
        assert!(matches(&state, &state.query(), &e));
        let all = EquipmentListState::default();
        assert!(matches(&all, &all.query(), &e));
    }

    #[test]
    fn test_shortage_filter() {
        let state = EquipmentListState {
            search: String::new(),
            shortage_only: true,
        };
        let short: Equipment = serde_json::from_value(json!({
            "sprzet_id": 1, "sprzet_nazwa": "Nosze",
            "sprzet_ilosc_aktualna": 1, "sprzet_ilosc_wymagana": 2
        }))
        .unwrap();
        let full: Equipment = serde_json::from_value(json!({
            "sprzet_id": 2, "sprzet_nazwa": "Szyna",
            "sprzet_ilosc_aktualna": 4, "sprzet_ilosc_wymagana": 2
        }))
        .unwrap();
        let q = state.query();
        assert!(matches(&state, &q, &short));
        assert!(!matches(&state, &q, &full));
    }
}
