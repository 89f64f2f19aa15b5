//! Deserializers for fields the backend sends with varying JSON types.

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a string, a number or null and keep it as display text
pub fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn integer<E: Error>(value: Option<Value>) -> Result<Option<i64>, E> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .map(Some)
            .ok_or_else(|| E::custom(format!("expected an integer, got {}", n))),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed == "null" {
                return Ok(None);
            }
            trimmed
                .parse::<i64>()
                .map(Some)
                .map_err(|_| E::custom(format!("expected an integer, got \"{}\"", trimmed)))
        }
        Some(other) => Err(E::custom(format!("expected an integer, got {}", other))),
    }
}

fn narrow<T: TryFrom<i64>, E: Error>(value: i64) -> Result<T, E> {
    T::try_from(value).map_err(|_| E::custom(format!("integer {} out of range", value)))
}

/// Optional integer sent as a number, a numeric string, `"null"` or empty
pub fn opt_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    integer::<D::Error>(value)?
        .map(narrow::<T, D::Error>)
        .transpose()
}

/// Integer that may arrive as text; null and empty become the default
pub fn int_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64> + Default,
{
    Ok(opt_int(deserializer)?.unwrap_or_default())
}

/// Required integer that may arrive as text
pub fn int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    opt_int(deserializer)?.ok_or_else(|| D::Error::custom("missing integer value"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "string_or_number")]
        value: Option<String>,
    }

    fn parse(raw: &str) -> Option<String> {
        serde_json::from_str::<Holder>(raw).unwrap().value
    }

    #[test]
    fn test_string_or_number() {
        assert_eq!(parse(r#"{"value": "10 mg"}"#), Some("10 mg".to_string()));
        assert_eq!(parse(r#"{"value": 20}"#), Some("20".to_string()));
        assert_eq!(parse(r#"{"value": 2.5}"#), Some("2.5".to_string()));
        assert_eq!(parse(r#"{"value": ""}"#), None);
        assert_eq!(parse(r#"{"value": null}"#), None);
        assert_eq!(parse("{}"), None);
    }

    #[derive(Deserialize)]
    struct Ints {
        #[serde(deserialize_with = "int")]
        id: i64,
        #[serde(default, deserialize_with = "opt_int")]
        parent: Option<i64>,
        #[serde(default, deserialize_with = "int_or_default")]
        quantity: i32,
    }

    fn ints(raw: &str) -> Result<Ints, serde_json::Error> {
        serde_json::from_str(raw)
    }

    #[test]
    fn test_integers_sent_as_text() {
        let row = ints(r#"{"id": "7", "parent": " 3 ", "quantity": "12"}"#).unwrap();
        assert_eq!((row.id, row.parent, row.quantity), (7, Some(3), 12));

        let row = ints(r#"{"id": 7, "parent": 3, "quantity": 12.0}"#).unwrap();
        assert_eq!((row.id, row.parent, row.quantity), (7, Some(3), 12));
    }

    #[test]
    fn test_null_like_integers() {
        let row = ints(r#"{"id": 1, "parent": "null", "quantity": ""}"#).unwrap();
        assert_eq!((row.parent, row.quantity), (None, 0));
        let row = ints(r#"{"id": 1, "parent": null, "quantity": null}"#).unwrap();
        assert_eq!((row.parent, row.quantity), (None, 0));
        let row = ints(r#"{"id": 1}"#).unwrap();
        assert_eq!((row.parent, row.quantity), (None, 0));
    }

    #[test]
    fn test_bad_integers_rejected() {
        assert!(ints(r#"{"id": "abc"}"#).is_err());
        assert!(ints(r#"{"id": null}"#).is_err());
        assert!(ints(r#"{"id": 1, "quantity": 2.5}"#).is_err());
        assert!(ints(r#"{"id": 1, "quantity": 4000000000}"#).is_err());
    }
}
