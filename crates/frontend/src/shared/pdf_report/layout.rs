//! Page model of a tabular A4 report.
//!
//! `ReportDocument::layout` places every piece of text on pages in
//! millimetres (origin bottom-left, as PDF expects). It depends only on the
//! document, so the result can be asserted on directly.

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 15.0;

const TITLE_SIZE: f32 = 14.0;
const HEADER_SIZE: f32 = 10.0;
const TEXT_SIZE: f32 = 9.0;
const ROW_HEIGHT_MM: f32 = 6.0;
const SECTION_INDENT_MM: f32 = 4.0;
const FOOTER_LINE_MM: f32 = 12.0;
const PAGE_NUMBER_Y_MM: f32 = 8.0;

/// Average glyph width of Helvetica relative to the font size, in mm per pt
const GLYPH_MM_PER_PT: f32 = 0.5 * 0.3528;

pub const EMPTY_TABLE_TEXT: &str = "Brak pozycji";

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub title: &'static str,
    pub width_mm: f32,
}

impl Column {
    pub const fn new(title: &'static str, width_mm: f32) -> Self {
        Self { title, width_mm }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportRow {
    /// Group heading, indented by level
    Section { level: usize, label: String },
    Cells(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    /// Lines under the title on the first page: vessel, owner, date
    pub header_lines: Vec<String>,
    pub columns: Vec<Column>,
    pub rows: Vec<ReportRow>,
    /// Closing lines such as signature fields
    pub footer_lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x_mm: f32,
    pub y_mm: f32,
    pub size: f32,
    pub bold: bool,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub runs: Vec<TextRun>,
}

impl PageLayout {
    fn text(&mut self, x_mm: f32, y_mm: f32, size: f32, bold: bool, text: impl Into<String>) {
        self.runs.push(TextRun {
            x_mm,
            y_mm,
            size,
            bold,
            text: text.into(),
        });
    }
}

/// Shorten `text` so it fits `width_mm` at `size` points
pub fn fit_to_width(text: &str, width_mm: f32, size: f32) -> String {
    let max_chars = ((width_mm - 1.0) / (size * GLYPH_MM_PER_PT)).floor().max(1.0) as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(2);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("..");
    out
}

struct Cursor {
    pages: Vec<PageLayout>,
    y: f32,
}

impl Cursor {
    fn page(&mut self) -> &mut PageLayout {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }
}

impl ReportDocument {
    fn bottom_limit() -> f32 {
        MARGIN_MM + ROW_HEIGHT_MM
    }

    fn column_header(&self, cursor: &mut Cursor) {
        let mut x = MARGIN_MM;
        let y = cursor.y;
        for column in &self.columns {
            let title = fit_to_width(column.title, column.width_mm, TEXT_SIZE);
            cursor.page().text(x, y, TEXT_SIZE, true, title);
            x += column.width_mm;
        }
        cursor.y -= ROW_HEIGHT_MM;
    }

    fn new_page(&self, cursor: &mut Cursor, with_header: bool) {
        cursor.pages.push(PageLayout::default());
        cursor.y = PAGE_HEIGHT_MM - MARGIN_MM;
        if with_header {
            self.column_header(cursor);
        }
    }

    fn ensure_room(&self, cursor: &mut Cursor, height: f32, with_header: bool) {
        if cursor.y - height < Self::bottom_limit() {
            self.new_page(cursor, with_header);
        }
    }

    fn place_row(&self, cursor: &mut Cursor, row: &ReportRow) {
        self.ensure_room(cursor, ROW_HEIGHT_MM, true);
        let y = cursor.y;
        match row {
            ReportRow::Section { level, label } => {
                let x = MARGIN_MM + *level as f32 * SECTION_INDENT_MM;
                let width = PAGE_WIDTH_MM - MARGIN_MM - x;
                cursor
                    .page()
                    .text(x, y, TEXT_SIZE, true, fit_to_width(label, width, TEXT_SIZE));
            }
            ReportRow::Cells(cells) => {
                let mut x = MARGIN_MM;
                for (column, cell) in self.columns.iter().zip(cells) {
                    if !cell.is_empty() {
                        let text = fit_to_width(cell, column.width_mm, TEXT_SIZE);
                        cursor.page().text(x, y, TEXT_SIZE, false, text);
                    }
                    x += column.width_mm;
                }
            }
        }
        cursor.y -= ROW_HEIGHT_MM;
    }

    /// Lay the document out on A4 pages. The column header is repeated on
    /// every page that carries table rows; pages are numbered "i / n".
    pub fn layout(&self) -> Vec<PageLayout> {
        let mut cursor = Cursor {
            pages: vec![PageLayout::default()],
            y: PAGE_HEIGHT_MM - MARGIN_MM,
        };

        let title_y = cursor.y;
        cursor
            .page()
            .text(MARGIN_MM, title_y, TITLE_SIZE, true, self.title.clone());
        cursor.y -= 9.0;
        for line in &self.header_lines {
            let y = cursor.y;
            cursor.page().text(MARGIN_MM, y, HEADER_SIZE, false, line.clone());
            cursor.y -= 5.0;
        }
        cursor.y -= 4.0;

        self.column_header(&mut cursor);
        if self.rows.is_empty() {
            let y = cursor.y;
            cursor
                .page()
                .text(MARGIN_MM, y, TEXT_SIZE, false, EMPTY_TABLE_TEXT);
            cursor.y -= ROW_HEIGHT_MM;
        }
        for row in &self.rows {
            self.place_row(&mut cursor, row);
        }

        if !self.footer_lines.is_empty() {
            cursor.y -= ROW_HEIGHT_MM;
            let needed = self.footer_lines.len() as f32 * FOOTER_LINE_MM;
            self.ensure_room(&mut cursor, needed, false);
            for line in &self.footer_lines {
                let y = cursor.y;
                cursor.page().text(MARGIN_MM, y, HEADER_SIZE, false, line.clone());
                cursor.y -= FOOTER_LINE_MM;
            }
        }

        let total = cursor.pages.len();
        for (index, page) in cursor.pages.iter_mut().enumerate() {
            page.text(
                PAGE_WIDTH_MM - MARGIN_MM - 20.0,
                PAGE_NUMBER_Y_MM,
                8.0,
                false,
                format!("Strona {} / {}", index + 1, total),
            );
        }
        cursor.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(rows: usize) -> ReportDocument {
        ReportDocument {
            title: "Raport".into(),
            header_lines: vec!["Statek".into()],
            columns: vec![Column::new("Lp.", 10.0), Column::new("Nazwa", 80.0)],
            rows: (1..=rows)
                .map(|i| ReportRow::Cells(vec![i.to_string(), format!("Pozycja {}", i)]))
                .collect(),
            footer_lines: vec!["Podpis: ............".into()],
        }
    }

    fn texts(page: &PageLayout) -> Vec<&str> {
        page.runs.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn test_single_page() {
        let pages = document(3).layout();
        assert_eq!(pages.len(), 1);
        let t = texts(&pages[0]);
        assert_eq!(t[0], "Raport");
        assert!(t.contains(&"Pozycja 3"));
        assert!(t.contains(&"Podpis: ............"));
        assert!(t.contains(&"Strona 1 / 1"));
    }

    #[test]
    fn test_long_table_paginates_and_repeats_header() {
        let pages = document(100).layout();
        assert!(pages.len() >= 3);
        for page in &pages {
            let t = texts(page);
            if t.iter().any(|s| s.starts_with("Pozycja")) {
                assert!(t.contains(&"Nazwa"));
            }
            for run in &page.runs {
                assert!(run.y_mm >= PAGE_NUMBER_Y_MM);
                assert!(run.y_mm <= PAGE_HEIGHT_MM);
            }
        }
        let last = texts(pages.last().unwrap());
        assert!(last.contains(&format!("Strona {} / {}", pages.len(), pages.len()).as_str()));

        let rows_placed: usize = pages
            .iter()
            .map(|p| texts(p).iter().filter(|s| s.starts_with("Pozycja")).count())
            .sum();
        assert_eq!(rows_placed, 100);
    }

    #[test]
    fn test_layout_is_deterministic() {
        assert_eq!(document(40).layout(), document(40).layout());
    }

    #[test]
    fn test_empty_table_message() {
        let pages = document(0).layout();
        assert!(texts(&pages[0]).contains(&EMPTY_TABLE_TEXT));
    }

    #[test]
    fn test_fit_to_width() {
        assert_eq!(fit_to_width("Gaza", 30.0, 9.0), "Gaza");
        let long = "Bardzo długa nazwa leku która się nie zmieści";
        let fitted = fit_to_width(long, 20.0, 9.0);
        assert!(fitted.ends_with(".."));
        assert!(fitted.chars().count() < long.chars().count());
    }
}
