/// CSV export of the inventory lists and browser downloads in general
use contracts::domain::a001_medicine::Medicine;
use contracts::domain::a002_equipment::Equipment;
use contracts::shared::dates;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Rows that can be written to a CSV sheet
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

impl CsvExportable for Medicine {
    fn headers() -> Vec<&'static str> {
        vec![
            "ID",
            "Nazwa",
            "Ilość",
            "Opakowanie",
            "Data ważności",
            "Ilość minimalna",
            "Klasa przechowywania",
            "Status ilości",
            "Status terminu",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.quantity.to_string(),
            self.package.clone(),
            dates::display_expiry(&self.expiry_date),
            self.min_quantity.to_string(),
            self.storage_class.clone().unwrap_or_default(),
            self.stock_status.clone(),
            self.term_status.clone(),
        ]
    }
}

impl CsvExportable for Equipment {
    fn headers() -> Vec<&'static str> {
        vec![
            "ID",
            "Nazwa",
            "Ilość aktualna",
            "Ilość wymagana",
            "Data ważności",
            "Termin",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.current_quantity.to_string(),
            self.required_quantity.to_string(),
            dates::display_expiry(&self.expiry_date),
            self.term_status.clone(),
        ]
    }
}

/// Build the CSV text: UTF-8 BOM so spreadsheets pick up Polish letters,
/// `;` as separator
pub fn build_csv<T: CsvExportable>(data: &[&T]) -> String {
    let mut csv_content = String::new();
    csv_content.push('\u{FEFF}');
    csv_content.push_str(&T::headers().join(";"));
    csv_content.push('\n');

    for item in data {
        let escaped_row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&escaped_row.join(";"));
        csv_content.push('\n');
    }
    csv_content
}

/// Export rows to a CSV file and start the download
pub fn export_to_csv<T: CsvExportable>(data: &[&T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Brak danych do eksportu".to_string());
    }
    let csv_content = build_csv(data);
    let blob = create_blob(csv_content.as_bytes(), "text/csv;charset=utf-8;")?;
    download_blob(&blob, filename)
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Wrap raw bytes in a Blob of the given MIME type
pub fn create_blob(bytes: &[u8], mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Nie udało się utworzyć pliku: {:?}", e))
}

/// Trigger a browser download of the blob
pub fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("Brak obiektu window")?;
    let document = window.document().ok_or("Brak obiektu document")?;
    let body = document.body().ok_or("Brak elementu body")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}
