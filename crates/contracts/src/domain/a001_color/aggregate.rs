use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::domain::common::CatalogRecord;
use crate::shared::list::{ForeignKeys, Keyed, Searchable};
use crate::shared::serde_utils::text;
use crate::shared::validation::{require_positive, FieldErrors, Validate};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Color de material
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    #[serde(default)]
    pub color: i32,
    #[serde(default, deserialize_with = "text")]
    pub descripcion: String,
}

impl Keyed for Color {
    fn key(&self) -> i32 {
        self.color
    }
}

impl Searchable for Color {
    fn key_text(&self) -> String {
        self.color.to_string()
    }

    fn search_fields(&self) -> Vec<Option<Cow<'_, str>>> {
        vec![Some(Cow::Borrowed(self.descripcion.as_str()))]
    }
}

impl ForeignKeys for Color {}

impl Validate for Color {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_positive(&mut errors, "color", self.color, "El Color debe ser un número positivo");

        let descripcion = self.descripcion.trim();
        if descripcion.is_empty() {
            errors.add("descripcion", "El campo Descripción es requerido");
        } else if descripcion.chars().count() < 2 {
            errors.add("descripcion", "La Descripción debe tener al menos 2 caracteres");
        }
        errors
    }
}

impl CatalogRecord for Color {
    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "colores"
    }

    fn key_field() -> &'static str {
        "color"
    }

    fn element_name() -> &'static str {
        "Color"
    }

    fn list_name() -> &'static str {
        "Colores"
    }

    fn element_with_article() -> &'static str {
        "el color"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let ok = Color { color: 5, descripcion: "Rojo".into() };
        assert!(ok.validate().is_empty());

        let short = Color { color: 5, descripcion: " R ".into() };
        assert_eq!(
            short.validate().get("descripcion"),
            Some("La Descripción debe tener al menos 2 caracteres")
        );

        let errors = Color::default().validate();
        assert_eq!(errors.get("color"), Some("El Color debe ser un número positivo"));
        assert_eq!(errors.get("descripcion"), Some("El campo Descripción es requerido"));
    }

    #[test]
    fn test_null_description_from_backend() {
        let color: Color = serde_json::from_str(r#"{"color": 9, "descripcion": null}"#).unwrap();
        assert_eq!(color, Color { color: 9, descripcion: String::new() });
    }
}
