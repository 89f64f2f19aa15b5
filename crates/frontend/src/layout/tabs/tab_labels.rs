//! Tab titles by tab key.

pub const ORDER_DETAIL_PREFIX: &str = "a003_order_detail_";

/// Readable title for a tab key. Unknown keys map to "".
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Aggregates (a0xx) ─────────────────────────────────────────────
        "a001_medicine" => "Leki",
        "a002_equipment" => "Sprzęt medyczny",
        "a003_order" => "Zamówienia",
        "a004_utilization" => "Utylizacja",

        // ── Projections (p9xx) ────────────────────────────────────────────
        "p901_status_by_date" => "Stan na dzień",
        "p902_equipment_overview" => "Zestawienie sprzętu",

        _ => "",
    }
}

/// Detail tab title: «<entity> · <identifier>»
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

pub fn order_detail_key(order_id: i64) -> String {
    format!("{}{}", ORDER_DETAIL_PREFIX, order_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a001_medicine"), "Leki");
        assert_eq!(tab_label_for_key("p902_equipment_overview"), "Zestawienie sprzętu");
        assert_eq!(tab_label_for_key("unknown"), "");
    }

    #[test]
    fn test_detail_key_and_label() {
        assert_eq!(order_detail_key(17), "a003_order_detail_17");
        assert_eq!(detail_tab_label("Zamówienie", "17"), "Zamówienie · 17");
    }
}
