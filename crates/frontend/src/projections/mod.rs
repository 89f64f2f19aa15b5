pub mod p901_status_by_date;
pub mod p902_equipment_overview;
