use serde::{Deserialize, Serialize};

/// Body of a non-2xx backend response. Only `message` is ever shown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Extract the operator-facing message from a raw response body, if any
    pub fn message_from(raw: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(raw)
            .ok()
            .and_then(|body| body.message)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_extracted() {
        assert_eq!(
            ErrorBody::message_from(r#"{"message":"Brak leku"}"#),
            Some("Brak leku".to_string())
        );
    }

    #[test]
    fn test_missing_or_blank_message() {
        assert_eq!(ErrorBody::message_from(r#"{"error":"x"}"#), None);
        assert_eq!(ErrorBody::message_from(r#"{"message":"  "}"#), None);
        assert_eq!(ErrorBody::message_from("<html>502</html>"), None);
    }
}
