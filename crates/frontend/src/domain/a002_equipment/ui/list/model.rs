use crate::shared::api_utils::{self, ApiError};
use contracts::domain::a002_equipment::{Equipment, EquipmentId, NewEquipment};
use contracts::domain::common::{CategoryRecord, CategoryTree};

pub async fn fetch_tree() -> Result<CategoryTree<Equipment>, ApiError> {
    api_utils::get_json("sprzet-kategorie").await
}

pub async fn fetch_categories() -> Result<Vec<CategoryRecord>, ApiError> {
    api_utils::get_json("kategorie-sprzetu").await
}

pub async fn update(equipment: Equipment) -> Result<(), ApiError> {
    api_utils::put(&format!("sprzet/{}", equipment.id), &equipment).await
}

pub async fn create(equipment: NewEquipment) -> Result<(), ApiError> {
    api_utils::post("sprzet-all", &equipment).await
}

pub async fn delete(id: EquipmentId) -> Result<(), ApiError> {
    api_utils::delete(&format!("sprzet/delete/{}", id)).await
}
