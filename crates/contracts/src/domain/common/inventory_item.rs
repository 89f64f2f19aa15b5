/// A row that can appear in a category-grouped inventory listing.
pub trait InventoryItem {
    /// Stable numeric id assigned by the backend
    fn item_id(&self) -> i64;

    /// Name shown in the listing and used by text search
    fn item_name(&self) -> &str;
}
