use crate::domain::common::{CategorySelection, InventoryItem};
use crate::shared::dates::{option_date, option_expiry, ExpiryDate};
use crate::shared::lenient;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type MedicineId = i64;

// ============================================================================
// Aggregate
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    #[serde(deserialize_with = "lenient::int")]
    pub id: MedicineId,

    #[serde(rename = "nazwa")]
    pub name: String,

    #[serde(rename = "ilosc", default, deserialize_with = "lenient::int_or_default")]
    pub quantity: i32,

    #[serde(rename = "opakowanie", default)]
    pub package: String,

    #[serde(rename = "data_waznosci", default, with = "option_expiry")]
    pub expiry_date: Option<ExpiryDate>,

    #[serde(rename = "ilosc_minimalna", default, deserialize_with = "lenient::int_or_default")]
    pub min_quantity: i32,

    #[serde(rename = "klasa_przechowywania", default)]
    pub storage_class: Option<String>,

    #[serde(rename = "kategoria_id", default, deserialize_with = "lenient::opt_int")]
    pub category_id: Option<i64>,

    #[serde(rename = "podkategoria_id", default, deserialize_with = "lenient::opt_int")]
    pub subcategory_id: Option<i64>,

    #[serde(rename = "podpodkategoria_id", default, deserialize_with = "lenient::opt_int")]
    pub sub_subcategory_id: Option<i64>,

    // Computed by the backend, never sent back meaningfully
    #[serde(rename = "status_ilosci", default)]
    pub stock_status: String,

    #[serde(rename = "status_terminu", default)]
    pub term_status: String,

    #[serde(rename = "zmodyfikowal", default)]
    pub modified_by: Option<String>,
}

impl InventoryItem for Medicine {
    fn item_id(&self) -> i64 {
        self.id
    }

    fn item_name(&self) -> &str {
        &self.name
    }
}

impl Medicine {
    /// Expiry date when the backend value could be parsed
    pub fn expiry(&self) -> Option<NaiveDate> {
        self.expiry_date.as_ref().and_then(ExpiryDate::date)
    }

    pub fn categories(&self) -> CategorySelection {
        CategorySelection::new(
            self.category_id,
            self.subcategory_id,
            self.sub_subcategory_id,
        )
    }

    /// Editable snapshot of this row
    pub fn draft(&self) -> MedicineDraft {
        MedicineDraft {
            name: self.name.clone(),
            quantity: self.quantity,
            package: self.package.clone(),
            expiry_date: self.expiry(),
            min_quantity: self.min_quantity,
            storage_class: self.storage_class.clone().unwrap_or_default(),
            categories: self.categories(),
        }
    }

    /// Full record to PUT: this row with the draft's fields applied
    pub fn with_draft(&self, draft: &MedicineDraft, modified_by: Option<String>) -> Medicine {
        Medicine {
            id: self.id,
            name: draft.name.trim().to_string(),
            quantity: draft.quantity,
            package: draft.package.trim().to_string(),
            expiry_date: ExpiryDate::merge(&self.expiry_date, draft.expiry_date),
            min_quantity: draft.min_quantity,
            storage_class: non_empty(&draft.storage_class),
            category_id: draft.categories.category,
            subcategory_id: draft.categories.subcategory,
            sub_subcategory_id: draft.categories.sub_subcategory,
            stock_status: self.stock_status.clone(),
            term_status: self.term_status.clone(),
            modified_by: modified_by.or_else(|| self.modified_by.clone()),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ============================================================================
// Draft (edit buffer entry and add-new form)
// ============================================================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedicineDraft {
    pub name: String,
    pub quantity: i32,
    pub package: String,
    pub expiry_date: Option<NaiveDate>,
    pub min_quantity: i32,
    pub storage_class: String,
    pub categories: CategorySelection,
}

impl MedicineDraft {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Nazwa leku jest wymagana".to_string());
        }
        if self.quantity < 0 {
            return Err("Ilość nie może być ujemna".to_string());
        }
        if self.min_quantity < 0 {
            return Err("Ilość minimalna nie może być ujemna".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Body of `POST leki-all`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMedicine {
    #[serde(rename = "nazwa")]
    pub name: String,

    #[serde(rename = "ilosc")]
    pub quantity: i32,

    #[serde(rename = "opakowanie")]
    pub package: String,

    #[serde(rename = "data_waznosci", with = "option_date")]
    pub expiry_date: Option<NaiveDate>,

    #[serde(rename = "ilosc_minimalna")]
    pub min_quantity: i32,

    #[serde(rename = "klasa_przechowywania")]
    pub storage_class: Option<String>,

    #[serde(rename = "kategoria_id")]
    pub category_id: i64,

    #[serde(rename = "podkategoria_id")]
    pub subcategory_id: Option<i64>,

    #[serde(rename = "podpodkategoria_id")]
    pub sub_subcategory_id: Option<i64>,

    #[serde(rename = "zmodyfikowal")]
    pub modified_by: Option<String>,
}

impl NewMedicine {
    pub fn from_draft(draft: &MedicineDraft, modified_by: Option<String>) -> Result<Self, String> {
        draft.validate()?;
        let category_id = draft
            .categories
            .category
            .ok_or_else(|| "Wybierz kategorię".to_string())?;

        Ok(Self {
            name: draft.name.trim().to_string(),
            quantity: draft.quantity,
            package: draft.package.trim().to_string(),
            expiry_date: draft.expiry_date,
            min_quantity: draft.min_quantity,
            storage_class: non_empty(&draft.storage_class),
            category_id,
            subcategory_id: draft.categories.subcategory,
            sub_subcategory_id: draft.categories.sub_subcategory,
            modified_by,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::CategoryTree;
    use serde_json::json;

    fn medicine() -> Medicine {
        serde_json::from_value(json!({
            "id": 12,
            "nazwa": "Paracetamol 500mg",
            "ilosc": 40,
            "opakowanie": "tabletki",
            "data_waznosci": "2026-05-01",
            "ilosc_minimalna": 20,
            "klasa_przechowywania": null,
            "kategoria_id": 1,
            "podkategoria_id": 10,
            "podpodkategoria_id": null,
            "status_ilosci": "Wystarczająca ilość",
            "status_terminu": "Ważny",
            "zmodyfikowal": "jkowalski"
        }))
        .unwrap()
    }

    #[test]
    fn test_deserialize_backend_row() {
        let m = medicine();
        assert_eq!(m.id, 12);
        assert_eq!(m.expiry(), NaiveDate::from_ymd_opt(2026, 5, 1));
        assert_eq!(m.categories(), CategorySelection::new(Some(1), Some(10), None));
        assert_eq!(m.item_name(), "Paracetamol 500mg");
    }

    #[test]
    fn test_sparse_row_uses_defaults() {
        let m: Medicine = serde_json::from_value(json!({"id": 3, "nazwa": "Gaza"})).unwrap();
        assert_eq!(m.quantity, 0);
        assert_eq!(m.expiry_date, None);
        assert!(m.term_status.is_empty());
    }

    #[test]
    fn test_untouched_draft_round_trips() {
        let m = medicine();
        assert_eq!(m.with_draft(&m.draft(), None), m);
    }

    #[test]
    fn test_with_draft_applies_fields_and_author() {
        let m = medicine();
        let mut d = m.draft();
        d.quantity = 15;
        d.categories.set_category(Some(2));
        let updated = m.with_draft(&d, Some("anowak".to_string()));
        assert_eq!(updated.quantity, 15);
        assert_eq!(updated.category_id, Some(2));
        assert_eq!(updated.subcategory_id, None);
        assert_eq!(updated.modified_by.as_deref(), Some("anowak"));
        assert_eq!(updated.id, m.id);
    }

    #[test]
    fn test_new_medicine_requires_name_and_category() {
        let mut d = MedicineDraft::default();
        assert!(NewMedicine::from_draft(&d, None).is_err());
        d.name = "Aspiryna".to_string();
        assert_eq!(
            NewMedicine::from_draft(&d, None).unwrap_err(),
            "Wybierz kategorię"
        );
        d.categories.set_category(Some(1));
        let body = NewMedicine::from_draft(&d, Some("kapitan".to_string())).unwrap();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["nazwa"], "Aspiryna");
        assert_eq!(json["kategoria_id"], 1);
        assert_eq!(json["data_waznosci"], serde_json::Value::Null);
    }

    #[test]
    fn test_unparsed_expiry_survives_unrelated_edit() {
        let m: Medicine = serde_json::from_value(json!({
            "id": 4,
            "nazwa": "Ketonal",
            "ilosc": 2,
            "data_waznosci": "2026/05/01"
        }))
        .unwrap();
        assert_eq!(m.expiry(), None);

        let mut d = m.draft();
        d.quantity = 3;
        let body = serde_json::to_value(m.with_draft(&d, None)).unwrap();
        assert_eq!(body["data_waznosci"], "2026/05/01");
        assert_eq!(body["ilosc"], 3);

        d.expiry_date = NaiveDate::from_ymd_opt(2027, 1, 31);
        let body = serde_json::to_value(m.with_draft(&d, None)).unwrap();
        assert_eq!(body["data_waznosci"], "2027-01-31");
    }

    #[test]
    fn test_ids_and_quantities_sent_as_text() {
        let tree: CategoryTree<Medicine> = serde_json::from_value(json!({
            "Leki": {"null": [{
                "id": "1",
                "nazwa": "A",
                "ilosc": "5",
                "kategoria_id": "3",
                "podkategoria_id": "null",
                "podpodkategoria_id": ""
            }]}
        }))
        .unwrap();
        let m = tree.find(|m| m.id == 1).unwrap();
        assert_eq!(m.quantity, 5);
        assert_eq!(m.categories(), CategorySelection::new(Some(3), None, None));

        let body = serde_json::to_value(m).unwrap();
        assert_eq!(body["id"], 1);
        assert_eq!(body["kategoria_id"], 3);
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let mut d = medicine().draft();
        d.quantity = -1;
        assert!(d.validate().is_err());
    }
}
