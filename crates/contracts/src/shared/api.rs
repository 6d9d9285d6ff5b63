//! Wire shapes shared by every endpoint plus the path conventions of the business backend.
//!
//! Paths are relative to the backend root; the console prefixes them with the gateway's
//! `/api` mount and the gateway forwards them unchanged.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Acknowledgement returned by mutating endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// `GET`/`POST /{collection}/{empresa}`
pub fn catalog_path(collection: &str, empresa: &str) -> String {
    format!("/{}/{}", collection, empresa)
}

/// `PUT /{collection}/{empresa}/{key}`
pub fn catalog_item_path(collection: &str, empresa: &str, key: impl Display) -> String {
    format!("/{}/{}/{}", collection, empresa, key)
}

/// Builds a query string from already-formatted pairs, skipping empty values
pub fn query_string(pairs: &[(&str, String)]) -> String {
    let parts: Vec<String> = pairs
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!("?{}", parts.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_paths() {
        assert_eq!(catalog_path("colores", "athletic"), "/colores/athletic");
        assert_eq!(
            catalog_item_path("proveedores", "uptown", 17),
            "/proveedores/uptown/17"
        );
    }

    #[test]
    fn test_query_string_skips_empty() {
        assert_eq!(query_string(&[]), "");
        assert_eq!(
            query_string(&[("anio", "2024".into()), ("semana", String::new())]),
            "?anio=2024"
        );
    }

    #[test]
    fn test_api_response_tolerates_missing_fields() {
        let ack: ApiResponse = serde_json::from_str("{}").unwrap();
        assert!(!ack.success);
        assert!(ack.message.is_empty());
    }
}
