use crate::shared::api_utils::{self, ApiError};
use contracts::domain::a002_equipment::Equipment;
use contracts::domain::common::CategoryTree;

pub const UNCATEGORIZED: &str = "Bez kategorii";

pub async fn fetch_overview() -> Result<CategoryTree<Equipment>, ApiError> {
    api_utils::get_json("sprzet-zgrany-kategorie").await
}

/// Per top-level category: how many items, how many below requirement
#[derive(Clone, Debug, PartialEq)]
pub struct CategorySummary {
    pub label: String,
    pub items: usize,
    pub short: usize,
    pub missing_units: i32,
}

pub fn summarize(tree: &CategoryTree<Equipment>) -> Vec<CategorySummary> {
    tree.by_top_category(UNCATEGORIZED)
        .into_iter()
        .map(|(label, items)| CategorySummary {
            label: label.to_string(),
            items: items.len(),
            short: items.iter().filter(|e| e.shortage() > 0).count(),
            missing_units: items.iter().map(|e| e.shortage()).sum(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_counts_shortages() {
        let tree: CategoryTree<Equipment> = serde_json::from_value(json!({
            "Unieruchomienie": {
                "Szyny": [
                    {"sprzet_id": 1, "sprzet_nazwa": "Szyna Kramera", "sprzet_ilosc_aktualna": 1, "sprzet_ilosc_wymagana": 4},
                    {"sprzet_id": 2, "sprzet_nazwa": "Kołnierz", "sprzet_ilosc_aktualna": 2, "sprzet_ilosc_wymagana": 2}
                ]
            },
            "null": {"null": [
                {"sprzet_id": 3, "sprzet_nazwa": "Nosze", "sprzet_ilosc_aktualna": 0, "sprzet_ilosc_wymagana": 1}
            ]}
        }))
        .unwrap();

        let summary = summarize(&tree);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].label, "Unieruchomienie");
        assert_eq!((summary[0].items, summary[0].short, summary[0].missing_units), (2, 1, 3));
        assert_eq!(summary[1].label, UNCATEGORIZED);
        assert_eq!(summary[1].missing_units, 1);
    }
}
