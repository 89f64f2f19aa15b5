pub mod u501_attach_to_order;
pub mod u502_utilize_medicine;
