pub mod category_codes;
pub mod layout;
pub mod render;
pub mod reports;

pub use layout::{Column, ReportDocument, ReportRow};
pub use render::{render_pdf, ReportError};
pub use reports::{
    equipment_status_report, medicine_status_report, order_form, report_filename,
    utilization_protocol,
};

use crate::shared::export::{create_blob, download_blob};

/// Render the report and hand it to the browser as a download
pub fn download_report(report: &ReportDocument, filename: &str) -> Result<(), ReportError> {
    let bytes = render_pdf(report)?;
    let blob = create_blob(&bytes, "application/pdf").map_err(ReportError::Download)?;
    download_blob(&blob, filename).map_err(ReportError::Download)?;
    log::info!("report {} generated ({} bytes)", filename, bytes.len());
    Ok(())
}
