use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::domain::common::CatalogRecord;
use crate::shared::list::{ForeignKeys, Keyed, Searchable};
use crate::shared::serde_utils::text;
use crate::shared::validation::{require_positive, require_text, FieldErrors, Validate};

/// Sublínea de producto, agrupa líneas dentro de una marca
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sublinea {
    #[serde(default)]
    pub sublinea: i32,
    #[serde(default, deserialize_with = "text")]
    pub descripcion: String,
}

impl Keyed for Sublinea {
    fn key(&self) -> i32 {
        self.sublinea
    }
}

impl Searchable for Sublinea {
    fn key_text(&self) -> String {
        self.sublinea.to_string()
    }

    fn search_fields(&self) -> Vec<Option<Cow<'_, str>>> {
        vec![Some(Cow::Borrowed(self.descripcion.as_str()))]
    }
}

impl ForeignKeys for Sublinea {}

impl Validate for Sublinea {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_positive(&mut errors, "sublinea", self.sublinea, "La Sublínea debe ser un número positivo");
        require_text(&mut errors, "descripcion", &self.descripcion, "El campo Descripción es requerido");
        errors
    }
}

impl CatalogRecord for Sublinea {
    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "sublineas"
    }

    fn key_field() -> &'static str {
        "sublinea"
    }

    fn element_name() -> &'static str {
        "Sublínea"
    }

    fn list_name() -> &'static str {
        "Sublíneas"
    }

    fn element_with_article() -> &'static str {
        "la sublínea"
    }
}
