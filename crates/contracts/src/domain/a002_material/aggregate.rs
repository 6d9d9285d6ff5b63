use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::domain::common::CatalogRecord;
use crate::shared::list::{ForeignKeys, Keyed, Searchable};
use crate::shared::serde_utils::text;
use crate::shared::validation::{require_positive, FieldErrors, Validate};

/// Longest description the backend column accepts
pub const MAX_DESCRIPCION: usize = 20;

/// Material (piel, sintético, textil...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    #[serde(default)]
    pub material: i32,
    #[serde(default, deserialize_with = "text")]
    pub descripcion: String,
}

impl Keyed for Material {
    fn key(&self) -> i32 {
        self.material
    }
}

impl Searchable for Material {
    fn key_text(&self) -> String {
        self.material.to_string()
    }

    fn search_fields(&self) -> Vec<Option<Cow<'_, str>>> {
        vec![Some(Cow::Borrowed(self.descripcion.as_str()))]
    }
}

impl ForeignKeys for Material {}

impl Validate for Material {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_positive(&mut errors, "material", self.material, "El # de Material debe ser positivo.");
        if self.descripcion.trim().is_empty() {
            errors.add("descripcion", "La Descripción es requerida.");
        } else if self.descripcion.chars().count() > MAX_DESCRIPCION {
            errors.add("descripcion", "La descripción no puede exceder los 20 caracteres.");
        }
        errors
    }
}

impl CatalogRecord for Material {
    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "materiales"
    }

    fn key_field() -> &'static str {
        "material"
    }

    fn element_name() -> &'static str {
        "Material"
    }

    fn list_name() -> &'static str {
        "Materiales"
    }

    fn element_with_article() -> &'static str {
        "el material"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_length_limit() {
        let long = Material {
            material: 3,
            descripcion: "Piel de becerro curtida".into(),
        };
        assert_eq!(
            long.validate().get("descripcion"),
            Some("La descripción no puede exceder los 20 caracteres.")
        );

        let exact = Material {
            material: 3,
            descripcion: "x".repeat(MAX_DESCRIPCION),
        };
        assert!(exact.validate().is_empty());
    }
}
