pub mod bulk_save;
pub mod draft_buffer;
pub mod inventory_editor;

pub use bulk_save::{plan_rows, save_all, RowSave, SaveDisposition, SaveSummary};
pub use draft_buffer::DraftBuffer;
pub use inventory_editor::{EditableItem, InventoryEditor};
