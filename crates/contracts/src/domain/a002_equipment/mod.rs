pub mod aggregate;

pub use aggregate::{Equipment, EquipmentDraft, EquipmentId, NewEquipment};
