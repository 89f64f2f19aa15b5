use crate::shared::api_utils::{self, ApiError};
use contracts::domain::a001_medicine::{Medicine, MedicineId, NewMedicine};
use contracts::domain::common::{CategoryRecord, CategoryTree};

pub async fn fetch_tree() -> Result<CategoryTree<Medicine>, ApiError> {
    api_utils::get_json("leki-kategorie").await
}

pub async fn fetch_categories() -> Result<Vec<CategoryRecord>, ApiError> {
    api_utils::get_json("kategorie-lekow").await
}

pub async fn update(medicine: Medicine) -> Result<(), ApiError> {
    api_utils::put(&format!("leki/{}", medicine.id), &medicine).await
}

pub async fn create(medicine: NewMedicine) -> Result<(), ApiError> {
    api_utils::post("leki-all", &medicine).await
}

pub async fn delete(id: MedicineId) -> Result<(), ApiError> {
    api_utils::delete(&format!("leki/delete/{}", id)).await
}
