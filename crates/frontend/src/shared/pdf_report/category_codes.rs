//! Report prefixes for top-level categories.
//!
//! Keys are lowercase category names as the backend spells them. Unknown
//! categories get a prefix derived from their initials.
use phf::phf_map;

static MEDICINE_CODES: phf::Map<&'static str, &'static str> = phf_map! {
    "leki przeciwbólowe" => "A",
    "leki przeciwgorączkowe" => "A",
    "leki kardiologiczne" => "B",
    "leki układu krążenia" => "B",
    "leki układu oddechowego" => "C",
    "leki przewodu pokarmowego" => "D",
    "leki przeciwwymiotne" => "D",
    "antybiotyki" => "E",
    "leki przeciwinfekcyjne" => "E",
    "leki przeciwalergiczne" => "F",
    "leki psychotropowe" => "G",
    "leki uspokajające" => "G",
    "leki znieczulające" => "H",
    "leki dermatologiczne" => "I",
    "leki okulistyczne" => "J",
    "płyny infuzyjne" => "K",
    "szczepionki" => "L",
    "środki odkażające" => "M",
    "opatrunki" => "N",
};

static EQUIPMENT_CODES: phf::Map<&'static str, &'static str> = phf_map! {
    "sprzęt diagnostyczny" => "S1",
    "sprzęt do resuscytacji" => "S2",
    "sprzęt do unieruchamiania" => "S3",
    "sprzęt chirurgiczny" => "S4",
    "sprzęt do iniekcji" => "S5",
    "materiały opatrunkowe" => "S6",
    "środki ochrony osobistej" => "S7",
    "sprzęt transportowy" => "S8",
    "sprzęt do tlenoterapii" => "S9",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeTable {
    Medicine,
    Equipment,
}

impl CodeTable {
    fn map(self) -> &'static phf::Map<&'static str, &'static str> {
        match self {
            CodeTable::Medicine => &MEDICINE_CODES,
            CodeTable::Equipment => &EQUIPMENT_CODES,
        }
    }
}

/// Code for a top-level category label
pub fn category_code(table: CodeTable, label: &str) -> String {
    let key = label.trim().to_lowercase();
    match table.map().get(key.as_str()) {
        Some(code) => (*code).to_string(),
        None => initials(label),
    }
}

/// "Sprzęt do unieruchamiania" -> "SDU"
fn initials(label: &str) -> String {
    let code: String = label
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .take(3)
        .collect();
    if code.is_empty() {
        "X".to_string()
    } else {
        code
    }
}

/// "A. Leki przeciwbólowe"
pub fn prefixed(table: CodeTable, label: &str) -> String {
    format!("{}. {}", category_code(table, label), label.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_ignore_case() {
        assert_eq!(category_code(CodeTable::Medicine, "Antybiotyki"), "E");
        assert_eq!(category_code(CodeTable::Medicine, " OPATRUNKI "), "N");
        assert_eq!(
            category_code(CodeTable::Equipment, "Sprzęt diagnostyczny"),
            "S1"
        );
    }

    #[test]
    fn test_unknown_falls_back_to_initials() {
        assert_eq!(category_code(CodeTable::Medicine, "inne środki"), "IŚ");
        assert_eq!(category_code(CodeTable::Equipment, ""), "X");
        assert_eq!(
            prefixed(CodeTable::Equipment, "Sprzęt diagnostyczny"),
            "S1. Sprzęt diagnostyczny"
        );
    }
}
