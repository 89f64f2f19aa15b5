use super::layout::{ReportDocument, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Nie udało się wygenerować PDF: {0}")]
    Render(String),

    #[error("Nie udało się pobrać pliku: {0}")]
    Download(String),
}

const LAYER_NAME: &str = "Warstwa 1";

/// Built-in PDF fonts only cover Latin-1, so Polish letters are mapped to
/// their base letters
pub fn transliterate(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'ą' => 'a',
            'ć' => 'c',
            'ę' => 'e',
            'ł' => 'l',
            'ń' => 'n',
            'ó' => 'o',
            'ś' => 's',
            'ź' | 'ż' => 'z',
            'Ą' => 'A',
            'Ć' => 'C',
            'Ę' => 'E',
            'Ł' => 'L',
            'Ń' => 'N',
            'Ó' => 'O',
            'Ś' => 'S',
            'Ź' | 'Ż' => 'Z',
            '—' | '–' => '-',
            '„' | '”' => '"',
            other => other,
        })
        .collect()
}

/// Render a laid-out report to PDF bytes
pub fn render_pdf(report: &ReportDocument) -> Result<Vec<u8>, ReportError> {
    let pages = report.layout();
    let (doc, first_page, first_layer) = PdfDocument::new(
        transliterate(&report.title),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        LAYER_NAME,
    );

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Render(format!("{:?}", e)))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Render(format!("{:?}", e)))?;

    for (index, page) in pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME)
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);
        for run in &page.runs {
            let font = if run.bold { &bold } else { &regular };
            layer.use_text(
                transliterate(&run.text),
                run.size,
                Mm(run.x_mm),
                Mm(run.y_mm),
                font,
            );
        }
    }

    doc.save_to_bytes()
        .map_err(|e| ReportError::Render(format!("{:?}", e)))
}
