use crate::domain::a001_medicine::Medicine;
use crate::shared::dates::option_date;
use crate::shared::lenient::string_or_number;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Heading used for records without a group tag
pub const UNGROUPED_LABEL: &str = "Bez grupy";

/// A disposed batch, as listed by `GET utylizacja`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilizationRecord {
    #[serde(default)]
    pub id: i64,

    #[serde(rename = "nazwa")]
    pub name: String,

    #[serde(rename = "ilosc", default)]
    pub quantity: i32,

    #[serde(rename = "opakowanie", default)]
    pub package: String,

    #[serde(rename = "data_waznosci", default, with = "option_date")]
    pub expiry_date: Option<NaiveDate>,

    /// Nominal strength or pack size, free text ("10 mg", "20")
    #[serde(rename = "ilosc_nominalna", default, deserialize_with = "string_or_number")]
    pub nominal_quantity: Option<String>,

    #[serde(rename = "powod", default)]
    pub reason: String,

    #[serde(rename = "grupa", default)]
    pub group: Option<String>,
}

impl UtilizationRecord {
    pub fn group_label(&self) -> &str {
        self.group
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .unwrap_or(UNGROUPED_LABEL)
    }
}

/// Records grouped by group tag, groups in order of first appearance
pub fn group_records(records: &[UtilizationRecord]) -> Vec<(String, Vec<&UtilizationRecord>)> {
    let mut groups: Vec<(String, Vec<&UtilizationRecord>)> = Vec::new();
    for record in records {
        let label = record.group_label();
        match groups.iter_mut().find(|(l, _)| l == label) {
            Some((_, items)) => items.push(record),
            None => groups.push((label.to_string(), vec![record])),
        }
    }
    groups
}

/// Body of `POST utylizacja/from-medicine`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilizeMedicineRequest {
    #[serde(rename = "id_leku")]
    pub medicine_id: i64,

    #[serde(rename = "ilosc")]
    pub quantity: i32,

    #[serde(rename = "powod")]
    pub reason: String,

    #[serde(rename = "grupa")]
    pub group: Option<String>,
}

impl UtilizeMedicineRequest {
    /// Validate the operator's input against the current stock of `medicine`
    pub fn new(
        medicine: &Medicine,
        quantity: i32,
        reason: &str,
        group: &str,
    ) -> Result<Self, String> {
        if quantity < 1 {
            return Err("Ilość do utylizacji musi być większa od zera".to_string());
        }
        if quantity > medicine.quantity {
            return Err(format!(
                "Nie można zutylizować więcej niż stan magazynowy ({})",
                medicine.quantity
            ));
        }
        let reason = reason.trim();
        if reason.is_empty() {
            return Err("Podaj powód utylizacji".to_string());
        }
        let group = group.trim();

        Ok(Self {
            medicine_id: medicine.id,
            quantity,
            reason: reason.to_string(),
            group: (!group.is_empty()).then(|| group.to_string()),
        })
    }
}
