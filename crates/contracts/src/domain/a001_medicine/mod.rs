pub mod aggregate;

pub use aggregate::{Medicine, MedicineDraft, MedicineId, NewMedicine};
