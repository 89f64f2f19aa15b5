//! Inventory as it stood on a past date, nested by category like the live
//! listings.

use crate::shared::api_utils::{self, ApiError};
use crate::shared::config::ReportConfig;
use crate::shared::pdf_report::{equipment_status_report, medicine_status_report, ReportDocument};
use chrono::NaiveDate;
use contracts::domain::a001_medicine::Medicine;
use contracts::domain::a002_equipment::Equipment;
use contracts::domain::common::CategoryTree;
use contracts::shared::dates;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InventoryKind {
    #[default]
    Medicines,
    Equipment,
}

impl InventoryKind {
    pub fn label(&self) -> &'static str {
        match self {
            InventoryKind::Medicines => "Leki",
            InventoryKind::Equipment => "Sprzęt",
        }
    }

    /// `leki/status-by-date/01-06-2025`
    pub fn path(&self, date: NaiveDate) -> String {
        let resource = match self {
            InventoryKind::Medicines => "leki",
            InventoryKind::Equipment => "sprzet",
        };
        format!("{}/status-by-date/{}", resource, dates::to_path_param(date))
    }

    pub fn file_prefix(&self) -> &'static str {
        match self {
            InventoryKind::Medicines => "stan-lekow",
            InventoryKind::Equipment => "stan-sprzetu",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StatusSnapshot {
    Medicines(CategoryTree<Medicine>),
    Equipment(CategoryTree<Equipment>),
}

impl StatusSnapshot {
    pub fn kind(&self) -> InventoryKind {
        match self {
            StatusSnapshot::Medicines(_) => InventoryKind::Medicines,
            StatusSnapshot::Equipment(_) => InventoryKind::Equipment,
        }
    }

    pub fn item_count(&self) -> usize {
        match self {
            StatusSnapshot::Medicines(tree) => tree.item_count(),
            StatusSnapshot::Equipment(tree) => tree.item_count(),
        }
    }

    /// The same document backs the on-screen preview and the PDF
    pub fn report(&self, date: NaiveDate, config: &ReportConfig) -> ReportDocument {
        match self {
            StatusSnapshot::Medicines(tree) => medicine_status_report(tree, date, config),
            StatusSnapshot::Equipment(tree) => equipment_status_report(tree, date, config),
        }
    }
}

pub async fn fetch(kind: InventoryKind, date: NaiveDate) -> Result<StatusSnapshot, ApiError> {
    let path = kind.path(date);
    Ok(match kind {
        InventoryKind::Medicines => StatusSnapshot::Medicines(api_utils::get_json(&path).await?),
        InventoryKind::Equipment => StatusSnapshot::Equipment(api_utils::get_json(&path).await?),
    })
}
