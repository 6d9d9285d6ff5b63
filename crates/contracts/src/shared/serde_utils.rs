//! Deserializers for backend fields whose JSON type is not stable.
//!
//! The stored procedures behind the inyeccion endpoints return the same column as a number
//! on one route and as a string on another; these helpers normalise everything to text.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(s) => s.trim().to_string(),
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

/// Accepts a string, number, bool or null and yields `Option<String>`; blank text becomes `None`
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(Scalar::into_text).filter(|s| !s.is_empty()))
}

/// Like [`opt_text`] but yields an empty string for null
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_text(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "opt_text")]
        a: Option<String>,
        #[serde(default, deserialize_with = "text")]
        b: String,
    }

    #[test]
    fn test_numbers_and_strings_become_text() {
        let row: Row = serde_json::from_str(r#"{"a": 1520, "b": " 2024-05-01 "}"#).unwrap();
        assert_eq!(row.a.as_deref(), Some("1520"));
        assert_eq!(row.b, "2024-05-01");
    }

    #[test]
    fn test_null_and_missing() {
        let row: Row = serde_json::from_str(r#"{"a": null}"#).unwrap();
        assert_eq!(row.a, None);
        assert_eq!(row.b, "");

        let row: Row = serde_json::from_str(r#"{"a": "  ", "b": null}"#).unwrap();
        assert_eq!(row.a, None);
        assert_eq!(row.b, "");
    }
}
