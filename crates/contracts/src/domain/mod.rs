pub mod a001_medicine;
pub mod a002_equipment;
pub mod a003_order;
pub mod a004_utilization;
pub mod common;
