use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::domain::common::CatalogRecord;
use crate::shared::list::{ForeignKeys, Keyed, Searchable};
use crate::shared::serde_utils::text;
use crate::shared::validation::{require_positive, require_text, FieldErrors, Validate};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marca {
    #[serde(default)]
    pub marca: i32,
    #[serde(default, deserialize_with = "text")]
    pub descripcion: String,
}

impl Keyed for Marca {
    fn key(&self) -> i32 {
        self.marca
    }
}

impl Searchable for Marca {
    fn key_text(&self) -> String {
        self.marca.to_string()
    }

    fn search_fields(&self) -> Vec<Option<Cow<'_, str>>> {
        vec![Some(Cow::Borrowed(self.descripcion.as_str()))]
    }
}

impl ForeignKeys for Marca {}

impl Validate for Marca {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_positive(&mut errors, "marca", self.marca, "La Marca debe ser un número positivo");
        require_text(&mut errors, "descripcion", &self.descripcion, "El campo Descripción es requerido");
        errors
    }
}

impl CatalogRecord for Marca {
    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "marcas"
    }

    fn key_field() -> &'static str {
        "marca"
    }

    fn element_name() -> &'static str {
        "Marca"
    }

    fn list_name() -> &'static str {
        "Marcas"
    }

    fn element_with_article() -> &'static str {
        "la marca"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_and_description_required() {
        let errors = Marca { marca: -2, descripcion: "  ".into() }.validate();
        assert_eq!(errors.len(), 2);
        assert!(Marca { marca: 4, descripcion: "Athletic".into() }.validate().is_empty());
    }
}
