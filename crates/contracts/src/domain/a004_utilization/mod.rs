pub mod aggregate;

pub use aggregate::{group_records, UtilizationRecord, UtilizeMedicineRequest, UNGROUPED_LABEL};
