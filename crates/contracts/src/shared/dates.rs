//! Date handling shared by all views.
//!
//! The backend is not consistent about date formats, so parsing is lenient
//! while every outgoing representation goes through exactly one function:
//! - JSON bodies: `yyyy-mm-dd`
//! - status-by-date path parameters: `dd-mm-yyyy`
//! - screen and PDF: `dd.mm.yyyy`

use chrono::NaiveDate;

pub const ISO_FORMAT: &str = "%Y-%m-%d";
pub const PATH_FORMAT: &str = "%d-%m-%Y";
pub const DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// Placeholder rendered for a missing date
pub const NO_DATE: &str = "—";

/// Parse any of the formats the backend has been seen to send.
///
/// Accepts `yyyy-mm-dd`, `dd-mm-yyyy`, `dd.mm.yyyy` and ISO datetimes
/// (`2025-03-15T00:00:00Z`, `2025-03-15 10:00:00`).
pub fn parse_flexible(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let date_part = trimmed
        .split(|c: char| c == 'T' || c == ' ')
        .next()
        .unwrap_or(trimmed);

    [ISO_FORMAT, PATH_FORMAT, DISPLAY_FORMAT]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}

pub fn to_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

pub fn to_path_param(date: NaiveDate) -> String {
    date.format(PATH_FORMAT).to_string()
}

pub fn to_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

pub fn display_opt(date: Option<NaiveDate>) -> String {
    date.map(to_display).unwrap_or_else(|| NO_DATE.to_string())
}

/// Expiry date of an inventory row.
///
/// Values the parser does not recognise are kept verbatim so a write-back of
/// the row sends them unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpiryDate {
    Parsed(NaiveDate),
    Raw(String),
}

impl ExpiryDate {
    /// `None` for empty and `"null"` values
    pub fn from_raw(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return None;
        }
        Some(match parse_flexible(trimmed) {
            Some(date) => ExpiryDate::Parsed(date),
            None => ExpiryDate::Raw(trimmed.to_string()),
        })
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            ExpiryDate::Parsed(date) => Some(*date),
            ExpiryDate::Raw(_) => None,
        }
    }

    pub fn display(&self) -> String {
        match self {
            ExpiryDate::Parsed(date) => to_display(*date),
            ExpiryDate::Raw(raw) => raw.clone(),
        }
    }

    /// Value to write back: `original` unless the edited date differs from it
    pub fn merge(original: &Option<ExpiryDate>, edited: Option<NaiveDate>) -> Option<ExpiryDate> {
        if edited == original.as_ref().and_then(ExpiryDate::date) {
            original.clone()
        } else {
            edited.map(ExpiryDate::Parsed)
        }
    }
}

pub fn display_expiry(date: &Option<ExpiryDate>) -> String {
    date.as_ref()
        .map(ExpiryDate::display)
        .unwrap_or_else(|| NO_DATE.to_string())
}

/// Serde adapter for `Option<ExpiryDate>`: parsed dates go out as ISO,
/// unrecognised ones exactly as received.
pub mod option_expiry {
    use super::ExpiryDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<ExpiryDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(ExpiryDate::Parsed(d)) => serializer.serialize_str(&super::to_iso(*d)),
            Some(ExpiryDate::Raw(raw)) => serializer.serialize_str(raw),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<ExpiryDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(ExpiryDate::from_raw))
    }
}

/// Serde adapter for optional dates: lenient on input, ISO on output.
pub mod option_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&super::to_iso(*d)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(super::parse_flexible))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Holder {
        #[serde(default, with = "option_date")]
        date: Option<NaiveDate>,
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_flexible_formats() {
        assert_eq!(parse_flexible("2025-03-15"), Some(d(2025, 3, 15)));
        assert_eq!(parse_flexible("15-03-2025"), Some(d(2025, 3, 15)));
        assert_eq!(parse_flexible("15.03.2025"), Some(d(2025, 3, 15)));
        assert_eq!(parse_flexible("2025-03-15T14:02:26.123Z"), Some(d(2025, 3, 15)));
        assert_eq!(parse_flexible("2025-03-15 14:02:26"), Some(d(2025, 3, 15)));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_flexible(""), None);
        assert_eq!(parse_flexible("invalid"), None);
        assert_eq!(parse_flexible("2025-13-40"), None);
    }

    #[test]
    fn test_outgoing_formats() {
        let date = d(2024, 12, 1);
        assert_eq!(to_iso(date), "2024-12-01");
        assert_eq!(to_path_param(date), "01-12-2024");
        assert_eq!(to_display(date), "01.12.2024");
        assert_eq!(display_opt(None), NO_DATE);
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct ExpiryHolder {
        #[serde(default, with = "option_expiry")]
        date: Option<ExpiryDate>,
    }

    #[test]
    fn test_unrecognised_expiry_is_sent_back_verbatim() {
        let h: ExpiryHolder = serde_json::from_str(r#"{"date":"2026/05/01"}"#).unwrap();
        assert_eq!(h.date, Some(ExpiryDate::Raw("2026/05/01".to_string())));
        assert_eq!(display_expiry(&h.date), "2026/05/01");
        assert_eq!(serde_json::to_string(&h).unwrap(), r#"{"date":"2026/05/01"}"#);

        let parsed: ExpiryHolder = serde_json::from_str(r#"{"date":"01.05.2026"}"#).unwrap();
        assert_eq!(parsed.date, Some(ExpiryDate::Parsed(d(2026, 5, 1))));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#"{"date":"2026-05-01"}"#);

        let empty: ExpiryHolder = serde_json::from_str(r#"{"date":""}"#).unwrap();
        assert_eq!(empty.date, None);
        let null_text: ExpiryHolder = serde_json::from_str(r#"{"date":"null"}"#).unwrap();
        assert_eq!(null_text.date, None);
    }

    #[test]
    fn test_expiry_merge_keeps_original_unless_edited() {
        let raw = Some(ExpiryDate::Raw("V 2026".to_string()));
        assert_eq!(ExpiryDate::merge(&raw, None), raw);
        assert_eq!(
            ExpiryDate::merge(&raw, Some(d(2027, 1, 1))),
            Some(ExpiryDate::Parsed(d(2027, 1, 1)))
        );

        let parsed = Some(ExpiryDate::Parsed(d(2026, 5, 1)));
        assert_eq!(ExpiryDate::merge(&parsed, Some(d(2026, 5, 1))), parsed);
        assert_eq!(ExpiryDate::merge(&parsed, None), None);
        assert_eq!(ExpiryDate::merge(&None, None), None);
    }

    #[test]
    fn test_serde_adapter() {
        let h: Holder = serde_json::from_str(r#"{"date":"31.01.2026"}"#).unwrap();
        assert_eq!(h.date, Some(d(2026, 1, 31)));
        assert_eq!(serde_json::to_string(&h).unwrap(), r#"{"date":"2026-01-31"}"#);

        let empty: Holder = serde_json::from_str(r#"{"date":null}"#).unwrap();
        assert_eq!(empty.date, None);
        let missing: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.date, None);
        let garbage: Holder = serde_json::from_str(r#"{"date":"brak"}"#).unwrap();
        assert_eq!(garbage.date, None);
    }
}
