//! Report builders: fetched data plus a date in, `ReportDocument` out.
use super::category_codes::{prefixed, CodeTable};
use super::layout::{Column, ReportDocument, ReportRow};
use crate::shared::config::ReportConfig;
use chrono::NaiveDate;
use contracts::domain::a001_medicine::Medicine;
use contracts::domain::a002_equipment::Equipment;
use contracts::domain::a003_order::OrderDetails;
use contracts::domain::a004_utilization::{group_records, UtilizationRecord};
use contracts::domain::common::{CategoryTree, DisplayRow};
use contracts::shared::dates;

const SIGNATURE_LINE: &str = "..................................................";

fn header_lines(config: &ReportConfig, date_line: String) -> Vec<String> {
    let mut lines = vec![format!("Statek: {}", config.vessel_name)];
    if !config.owner.trim().is_empty() {
        lines.push(config.owner.clone());
    }
    lines.push(date_line);
    lines
}

/// Flatten a category tree into sections and numbered item rows
fn tree_rows<T: Clone>(
    tree: &CategoryTree<T>,
    codes: CodeTable,
    cells: impl Fn(usize, &T) -> Vec<String>,
) -> Vec<ReportRow> {
    let mut number = 0;
    tree.display_rows()
        .into_iter()
        .map(|row| match row {
            DisplayRow::Group { depth: 0, label } => ReportRow::Section {
                level: 0,
                label: prefixed(codes, &label),
            },
            DisplayRow::Group { depth, label } => ReportRow::Section {
                level: depth,
                label,
            },
            DisplayRow::Item { item, .. } => {
                number += 1;
                ReportRow::Cells(cells(number, &item))
            }
        })
        .collect()
}

fn join_statuses(first: &str, second: &str) -> String {
    [first.trim(), second.trim()]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" / ")
}

pub fn medicine_status_report(
    tree: &CategoryTree<Medicine>,
    date: NaiveDate,
    config: &ReportConfig,
) -> ReportDocument {
    ReportDocument {
        title: format!("Stan leków na dzień {}", dates::to_display(date)),
        header_lines: header_lines(config, format!("Data raportu: {}", dates::to_display(date))),
        columns: vec![
            Column::new("Lp.", 10.0),
            Column::new("Nazwa", 58.0),
            Column::new("Opakowanie", 24.0),
            Column::new("Ilość", 14.0),
            Column::new("Min.", 12.0),
            Column::new("Data ważności", 24.0),
            Column::new("Status", 38.0),
        ],
        rows: tree_rows(tree, CodeTable::Medicine, |n, m| {
            vec![
                n.to_string(),
                m.name.clone(),
                m.package.clone(),
                m.quantity.to_string(),
                m.min_quantity.to_string(),
                dates::display_expiry(&m.expiry_date),
                join_statuses(&m.stock_status, &m.term_status),
            ]
        }),
        footer_lines: vec![format!("Sporządził: {}", SIGNATURE_LINE)],
    }
}

pub fn equipment_status_report(
    tree: &CategoryTree<Equipment>,
    date: NaiveDate,
    config: &ReportConfig,
) -> ReportDocument {
    ReportDocument {
        title: format!("Stan sprzętu medycznego na dzień {}", dates::to_display(date)),
        header_lines: header_lines(config, format!("Data raportu: {}", dates::to_display(date))),
        columns: vec![
            Column::new("Lp.", 10.0),
            Column::new("Nazwa", 70.0),
            Column::new("Stan", 18.0),
            Column::new("Wymagane", 18.0),
            Column::new("Brak", 16.0),
            Column::new("Data ważności", 24.0),
            Column::new("Termin", 24.0),
        ],
        rows: tree_rows(tree, CodeTable::Equipment, |n, e| {
            vec![
                n.to_string(),
                e.name.clone(),
                e.current_quantity.to_string(),
                e.required_quantity.to_string(),
                match e.shortage() {
                    0 => String::new(),
                    s => s.to_string(),
                },
                dates::display_expiry(&e.expiry_date),
                e.term_status.clone(),
            ]
        }),
        footer_lines: vec![format!("Sporządził: {}", SIGNATURE_LINE)],
    }
}

/// Disposal protocol, one section per group tag
pub fn utilization_protocol(
    records: &[UtilizationRecord],
    date: NaiveDate,
    config: &ReportConfig,
) -> ReportDocument {
    let mut rows = Vec::new();
    let mut number = 0;
    for (group, items) in group_records(records) {
        rows.push(ReportRow::Section {
            level: 0,
            label: group,
        });
        for r in items {
            number += 1;
            rows.push(ReportRow::Cells(vec![
                number.to_string(),
                r.name.clone(),
                r.quantity.to_string(),
                r.package.clone(),
                r.nominal_quantity.clone().unwrap_or_default(),
                dates::display_opt(r.expiry_date),
                r.reason.clone(),
            ]));
        }
    }

    ReportDocument {
        title: "Protokół utylizacji leków".to_string(),
        header_lines: header_lines(config, format!("Data protokołu: {}", dates::to_display(date))),
        columns: vec![
            Column::new("Lp.", 10.0),
            Column::new("Nazwa", 50.0),
            Column::new("Ilość", 14.0),
            Column::new("Opakowanie", 24.0),
            Column::new("Il. nominalna", 22.0),
            Column::new("Data ważności", 24.0),
            Column::new("Powód", 36.0),
        ],
        rows,
        footer_lines: vec![
            format!("Sporządził: {}", SIGNATURE_LINE),
            format!("Świadek: {}", SIGNATURE_LINE),
            format!("Zatwierdził (kapitan): {}", SIGNATURE_LINE),
        ],
    }
}

pub fn order_form(details: &OrderDetails, date: NaiveDate, config: &ReportConfig) -> ReportDocument {
    let order = &details.order;
    let mut header = header_lines(config, format!("Data wydruku: {}", dates::to_display(date)));
    header.push(format!("Status: {}", order.status.as_str()));
    header.push(format!("Data utworzenia: {}", dates::display_opt(order.created_at)));

    ReportDocument {
        title: format!("Zamówienie nr {}: {}", order.id, order.name),
        header_lines: header,
        columns: vec![
            Column::new("Lp.", 10.0),
            Column::new("Rodzaj", 20.0),
            Column::new("Nazwa", 110.0),
            Column::new("Ilość", 20.0),
        ],
        rows: details
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                ReportRow::Cells(vec![
                    (i + 1).to_string(),
                    line.kind_label().to_string(),
                    line.name.clone(),
                    line.quantity.to_string(),
                ])
            })
            .collect(),
        footer_lines: vec![format!("Zamawiający: {}", SIGNATURE_LINE)],
    }
}

/// "stan-lekow" + 2025-06-01 -> "stan-lekow-2025-06-01.pdf"
pub fn report_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}.pdf", prefix, dates::to_iso(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> ReportConfig {
        ReportConfig {
            vessel_name: "m/s Nawigator".into(),
            owner: String::new(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_medicine_report_sections_and_codes() {
        let tree: CategoryTree<Medicine> = serde_json::from_value(json!({
            "Leki przeciwbólowe": {
                "Doustne": [{"id": 1, "nazwa": "Paracetamol", "ilosc": 20, "data_waznosci": "2026-01-31",
                             "status_ilosci": "Wystarczająca ilość", "status_terminu": "Ważny"}]
            },
            "Opatrunki": {"null": [{"id": 2, "nazwa": "Gaza", "ilosc": 3}]}
        }))
        .unwrap();

        let doc = medicine_status_report(&tree, date(), &config());
        assert_eq!(doc.title, "Stan leków na dzień 01.06.2025");
        assert_eq!(doc.header_lines[0], "Statek: m/s Nawigator");
        assert_eq!(
            doc.rows[0],
            ReportRow::Section {
                level: 0,
                label: "A. Leki przeciwbólowe".into()
            }
        );
        assert_eq!(
            doc.rows[1],
            ReportRow::Section {
                level: 1,
                label: "Doustne".into()
            }
        );
        match &doc.rows[2] {
            ReportRow::Cells(cells) => {
                assert_eq!(cells[0], "1");
                assert_eq!(cells[5], "31.01.2026");
                assert_eq!(cells[6], "Wystarczająca ilość / Ważny");
            }
            other => panic!("expected cells, got {:?}", other),
        }
        assert_eq!(
            doc.rows[3],
            ReportRow::Section {
                level: 0,
                label: "N. Opatrunki".into()
            }
        );
        assert!(matches!(&doc.rows[4], ReportRow::Cells(c) if c[0] == "2" && c[5] == "—"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let tree: CategoryTree<Equipment> = serde_json::from_value(json!({
            "Sprzęt diagnostyczny": {"null": [{"sprzet_id": 1, "sprzet_nazwa": "Termometr",
                "sprzet_ilosc_aktualna": 1, "sprzet_ilosc_wymagana": 3}]}
        }))
        .unwrap();
        let a = equipment_status_report(&tree, date(), &config());
        let b = equipment_status_report(&tree, date(), &config());
        assert_eq!(a, b);
        assert_eq!(a.layout(), b.layout());
        assert!(matches!(&a.rows[1], ReportRow::Cells(c) if c[4] == "2"));
    }

    #[test]
    fn test_utilization_protocol_groups() {
        let records: Vec<UtilizationRecord> = serde_json::from_value(json!([
            {"id": 1, "nazwa": "Morfina", "ilosc": 2, "powod": "Przeterminowany", "grupa": "P/1"},
            {"id": 2, "nazwa": "Ketonal", "ilosc": 1, "powod": "Uszkodzony"},
            {"id": 3, "nazwa": "Relanium", "ilosc": 5, "powod": "Przeterminowany", "grupa": "P/1"}
        ]))
        .unwrap();
        let doc = utilization_protocol(&records, date(), &config());
        let sections: Vec<&str> = doc
            .rows
            .iter()
            .filter_map(|r| match r {
                ReportRow::Section { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(sections, vec!["P/1", "Bez grupy"]);
        assert_eq!(doc.rows.len(), 5);
        assert_eq!(doc.footer_lines.len(), 3);
    }

    #[test]
    fn test_order_form() {
        let details: OrderDetails = serde_json::from_value(json!({
            "id": 4, "nazwa": "Gdynia", "status": "Nowe",
            "pozycje": [{"id_leku": 1, "nazwa": "Paracetamol", "ilosc": 3}]
        }))
        .unwrap();
        let doc = order_form(&details, date(), &config());
        assert_eq!(doc.title, "Zamówienie nr 4: Gdynia");
        assert!(doc.header_lines.contains(&"Status: Nowe".to_string()));
        assert_eq!(
            doc.rows,
            vec![ReportRow::Cells(vec![
                "1".into(),
                "Lek".into(),
                "Paracetamol".into(),
                "3".into()
            ])]
        );
    }

    #[test]
    fn test_filename() {
        assert_eq!(report_filename("stan-lekow", date()), "stan-lekow-2025-06-01.pdf");
    }
}
