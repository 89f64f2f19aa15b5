pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod export;
pub mod form_utils;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod pdf_report;
pub mod state;
