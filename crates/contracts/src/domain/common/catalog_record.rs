use serde::{de::DeserializeOwned, Serialize};

use crate::shared::error::ApiError;
use crate::shared::list::{CreatePolicy, ForeignKeys, Keyed, LookupSpec, Searchable};
use crate::shared::validation::Validate;

/// Trait for catalog aggregates edited through the generic list screen
///
/// Combines the per-record behaviour the list controller needs (key, search, joins,
/// validation) with the static metadata of the catalog.
pub trait CatalogRecord:
    Clone
    + PartialEq
    + Default
    + std::fmt::Debug
    + Serialize
    + DeserializeOwned
    + Keyed
    + Searchable
    + ForeignKeys
    + Validate
    + Send
    + Sync
    + 'static
{
    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Aggregate index (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Backend collection (e.g. "colores")
    fn collection_name() -> &'static str;

    /// Name of the natural key field (e.g. "color")
    fn key_field() -> &'static str;

    /// UI name, singular (e.g. "Color")
    fn element_name() -> &'static str;

    /// UI name, plural (e.g. "Colores")
    fn list_name() -> &'static str;

    /// Singular with article, used in messages (e.g. "el color")
    fn element_with_article() -> &'static str;

    // ============================================================================
    // Behaviour with defaults
    // ============================================================================

    fn create_policy() -> CreatePolicy {
        CreatePolicy::Append
    }

    /// Lookup collections loaded alongside the catalog
    fn lookups() -> &'static [LookupSpec] {
        &[]
    }

    /// Full name (e.g. "a001_colores")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}

/// Record the backend sent back for a create or update.
///
/// A JSON object carrying the key field is decoded as `T`, so keys and fields the backend
/// assigns or normalizes reach the collection. An empty body or a bare acknowledgement
/// (`{"success": true, "message": ...}`) keeps the submitted draft.
pub fn saved_record<T: CatalogRecord>(body: &str, draft: &T) -> Result<T, ApiError> {
    if body.trim().is_empty() {
        return Ok(draft.clone());
    }
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if value.get(T::key_field()).is_none() {
        log::debug!("{}: save acknowledged without a record", T::full_name());
        return Ok(draft.clone());
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_color::Color;
    use crate::domain::a008_proveedor::Proveedor;

    fn draft() -> Color {
        Color {
            color: 0,
            descripcion: " Rojo ".to_string(),
        }
    }

    #[test]
    fn test_server_record_replaces_draft() {
        let saved = saved_record(r#"{"color": 12, "descripcion": "ROJO"}"#, &draft()).unwrap();
        assert_eq!(
            saved,
            Color {
                color: 12,
                descripcion: "ROJO".to_string()
            }
        );

        let proveedor = Proveedor {
            proveedor: 7,
            nombre: "Hules del Bajío".to_string(),
            estatus: String::new(),
            ..Default::default()
        };
        let saved = saved_record(
            r#"{"proveedor": 7, "nombre": "Hules del Bajío", "estatus": "I"}"#,
            &proveedor,
        )
        .unwrap();
        assert_eq!(saved.estatus, "I");
    }

    #[test]
    fn test_empty_body_or_ack_keeps_draft() {
        assert_eq!(saved_record("", &draft()).unwrap(), draft());
        assert_eq!(
            saved_record(r#"{"success": true, "message": "ok"}"#, &draft()).unwrap(),
            draft()
        );
    }

    #[test]
    fn test_malformed_body_is_a_decode_error() {
        assert!(matches!(
            saved_record::<Color>("<html>", &draft()),
            Err(ApiError::Decode(_))
        ));
    }
}
