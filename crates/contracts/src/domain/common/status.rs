//! Visual classification of the status strings computed by the backend.
//!
//! The backend sends free-form Polish labels; only the tone is decided here.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Normal,
    Warning,
    Alert,
}

impl StatusTone {
    /// BEM modifier used by the tables
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusTone::Normal => "status status--normal",
            StatusTone::Warning => "status status--warning",
            StatusTone::Alert => "status status--alert",
        }
    }

    pub fn is_alert(&self) -> bool {
        !matches!(self, StatusTone::Normal)
    }
}

/// Tone for an expiry ("termin") status. Only a valid term renders plain.
pub fn term_tone(status: &str) -> StatusTone {
    let s = status.trim().to_lowercase();
    if s.is_empty() || s.starts_with("ważn") || s == "ok" {
        StatusTone::Normal
    } else if s.starts_with("kończ") || s.contains("wkrótce") {
        StatusTone::Warning
    } else {
        StatusTone::Alert
    }
}

/// Tone for a stock-level status
pub fn stock_tone(status: &str) -> StatusTone {
    let s = status.trim().to_lowercase();
    if s.starts_with("brak") {
        StatusTone::Alert
    } else if s.starts_with("nisk") || s.contains("poniżej") {
        StatusTone::Warning
    } else {
        StatusTone::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_tone() {
        assert_eq!(term_tone("Ważny"), StatusTone::Normal);
        assert_eq!(term_tone(""), StatusTone::Normal);
        assert_eq!(term_tone("Kończy się termin"), StatusTone::Warning);
        assert_eq!(term_tone("Przeterminowany"), StatusTone::Alert);
        assert!(!term_tone("Ważny").is_alert());
        assert!(term_tone("Przeterminowane").is_alert());
    }

    #[test]
    fn test_stock_tone() {
        assert_eq!(stock_tone("Wystarczająca ilość"), StatusTone::Normal);
        assert_eq!(stock_tone("Niski stan"), StatusTone::Warning);
        assert_eq!(stock_tone("Poniżej minimum"), StatusTone::Warning);
        assert_eq!(stock_tone("Brak"), StatusTone::Alert);
    }
}
