use crate::domain::common::{CategorySelection, InventoryItem};
use crate::shared::dates::{option_date, option_expiry, ExpiryDate};
use crate::shared::lenient;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type EquipmentId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(rename = "sprzet_id", deserialize_with = "lenient::int")]
    pub id: EquipmentId,

    #[serde(rename = "sprzet_nazwa")]
    pub name: String,

    #[serde(rename = "sprzet_ilosc_aktualna", default, deserialize_with = "lenient::int_or_default")]
    pub current_quantity: i32,

    #[serde(rename = "sprzet_ilosc_wymagana", default, deserialize_with = "lenient::int_or_default")]
    pub required_quantity: i32,

    #[serde(rename = "sprzet_data_waznosci", default, with = "option_expiry")]
    pub expiry_date: Option<ExpiryDate>,

    #[serde(rename = "sprzet_kategoria_id", default, deserialize_with = "lenient::opt_int")]
    pub category_id: Option<i64>,

    #[serde(rename = "sprzet_podkategoria_id", default, deserialize_with = "lenient::opt_int")]
    pub subcategory_id: Option<i64>,

    /// Computed term status ("Ważny", "Przeterminowany", ...)
    #[serde(rename = "sprzet_termin", default)]
    pub term_status: String,

    #[serde(rename = "sprzet_zmodyfikowal", default)]
    pub modified_by: Option<String>,
}

impl InventoryItem for Equipment {
    fn item_id(&self) -> i64 {
        self.id
    }

    fn item_name(&self) -> &str {
        &self.name
    }
}

impl Equipment {
    /// Expiry date when the backend value could be parsed
    pub fn expiry(&self) -> Option<NaiveDate> {
        self.expiry_date.as_ref().and_then(ExpiryDate::date)
    }

    /// How many units are missing to reach the required quantity
    pub fn shortage(&self) -> i32 {
        (self.required_quantity - self.current_quantity).max(0)
    }

    pub fn categories(&self) -> CategorySelection {
        CategorySelection::new(self.category_id, self.subcategory_id, None)
    }

    pub fn draft(&self) -> EquipmentDraft {
        EquipmentDraft {
            name: self.name.clone(),
            current_quantity: self.current_quantity,
            required_quantity: self.required_quantity,
            expiry_date: self.expiry(),
            categories: self.categories(),
        }
    }

    pub fn with_draft(&self, draft: &EquipmentDraft, modified_by: Option<String>) -> Equipment {
        Equipment {
            id: self.id,
            name: draft.name.trim().to_string(),
            current_quantity: draft.current_quantity,
            required_quantity: draft.required_quantity,
            expiry_date: ExpiryDate::merge(&self.expiry_date, draft.expiry_date),
            category_id: draft.categories.category,
            subcategory_id: draft.categories.subcategory,
            term_status: self.term_status.clone(),
            modified_by: modified_by.or_else(|| self.modified_by.clone()),
        }
    }
}

/// Editable equipment fields. Equipment has no third category level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquipmentDraft {
    pub name: String,
    pub current_quantity: i32,
    pub required_quantity: i32,
    pub expiry_date: Option<NaiveDate>,
    pub categories: CategorySelection,
}

impl EquipmentDraft {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Nazwa sprzętu jest wymagana".to_string());
        }
        if self.current_quantity < 0 || self.required_quantity < 0 {
            return Err("Ilość nie może być ujemna".to_string());
        }
        Ok(())
    }
}

/// Body of `POST sprzet-all`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEquipment {
    #[serde(rename = "sprzet_nazwa")]
    pub name: String,

    #[serde(rename = "sprzet_ilosc_aktualna")]
    pub current_quantity: i32,

    #[serde(rename = "sprzet_ilosc_wymagana")]
    pub required_quantity: i32,

    #[serde(rename = "sprzet_data_waznosci", with = "option_date")]
    pub expiry_date: Option<NaiveDate>,

    #[serde(rename = "sprzet_kategoria_id")]
    pub category_id: i64,

    #[serde(rename = "sprzet_podkategoria_id")]
    pub subcategory_id: Option<i64>,

    #[serde(rename = "sprzet_zmodyfikowal")]
    pub modified_by: Option<String>,
}

impl NewEquipment {
    pub fn from_draft(draft: &EquipmentDraft, modified_by: Option<String>) -> Result<Self, String> {
        draft.validate()?;
        let category_id = draft
            .categories
            .category
            .ok_or_else(|| "Wybierz kategorię".to_string())?;

        Ok(Self {
            name: draft.name.trim().to_string(),
            current_quantity: draft.current_quantity,
            required_quantity: draft.required_quantity,
            expiry_date: draft.expiry_date,
            category_id,
            subcategory_id: draft.categories.subcategory,
            modified_by,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{term_tone, CategoryTree, DisplayRow, StatusTone};

    #[test]
    fn test_minimal_row_from_category_listing() {
        let tree: CategoryTree<Equipment> = serde_json::from_str(
            r#"{"Sprzęt diagnostyczny": {"null": [{"sprzet_id": 1, "sprzet_nazwa": "Termometr", "sprzet_termin": "Ważny"}]}}"#,
        )
        .unwrap();

        let rows = tree.display_rows();
        assert_eq!(rows.len(), 2);
        assert!(matches!(&rows[0], DisplayRow::Group { label, .. } if label == "Sprzęt diagnostyczny"));
        match &rows[1] {
            DisplayRow::Item { item, .. } => {
                assert_eq!(item.name, "Termometr");
                assert_eq!(term_tone(&item.term_status), StatusTone::Normal);
            }
            other => panic!("expected item row, got {:?}", other),
        }
    }

    #[test]
    fn test_shortage() {
        let mut e: Equipment =
            serde_json::from_str(r#"{"sprzet_id": 2, "sprzet_nazwa": "Nosze"}"#).unwrap();
        e.required_quantity = 3;
        e.current_quantity = 1;
        assert_eq!(e.shortage(), 2);
        e.current_quantity = 5;
        assert_eq!(e.shortage(), 0);
    }

    #[test]
    fn test_draft_round_trip_and_category_reset() {
        let mut e: Equipment =
            serde_json::from_str(r#"{"sprzet_id": 2, "sprzet_nazwa": "Nosze", "sprzet_kategoria_id": 4, "sprzet_podkategoria_id": 40}"#)
                .unwrap();
        e.modified_by = Some("bosman".to_string());
        assert_eq!(e.with_draft(&e.draft(), None), e);

        let mut d = e.draft();
        d.categories.set_category(Some(5));
        let updated = e.with_draft(&d, Some("oficer".to_string()));
        assert_eq!(updated.category_id, Some(5));
        assert_eq!(updated.subcategory_id, None);
    }

    #[test]
    fn test_loose_row_keeps_raw_expiry() {
        let e: Equipment = serde_json::from_str(
            r#"{"sprzet_id": "9", "sprzet_nazwa": "Nosze", "sprzet_ilosc_aktualna": "1", "sprzet_kategoria_id": "4", "sprzet_data_waznosci": "bezterminowo"}"#,
        )
        .unwrap();
        assert_eq!((e.id, e.current_quantity, e.category_id), (9, 1, Some(4)));

        let mut d = e.draft();
        d.required_quantity = 2;
        let body = serde_json::to_value(e.with_draft(&d, None)).unwrap();
        assert_eq!(body["sprzet_data_waznosci"], "bezterminowo");
        assert_eq!(body["sprzet_ilosc_wymagana"], 2);
    }

    #[test]
    fn test_new_equipment_body() {
        let d = EquipmentDraft {
            name: " Defibrylator ".to_string(),
            current_quantity: 1,
            required_quantity: 1,
            expiry_date: None,
            categories: CategorySelection::new(Some(4), None, None),
        };
        let body = NewEquipment::from_draft(&d, None).unwrap();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["sprzet_nazwa"], "Defibrylator");
        assert_eq!(json["sprzet_kategoria_id"], 4);
    }
}
