use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::domain::common::CatalogRecord;
use crate::shared::list::{ForeignKeys, Keyed, Searchable};
use crate::shared::serde_utils::text;
use crate::shared::validation::{require_positive, require_text, FieldErrors, Validate};

/// Corrida: rango de tallas de un modelo, de `punto_inicial` a `punto_final`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corrida {
    #[serde(default)]
    pub corrida: i32,
    #[serde(rename = "puntoInicial", default)]
    pub punto_inicial: i32,
    #[serde(rename = "puntoFinal", default)]
    pub punto_final: i32,
    #[serde(default, deserialize_with = "text")]
    pub descripcion: String,
}

impl Corrida {
    /// "25 - 30"
    pub fn rango(&self) -> String {
        format!("{} - {}", self.punto_inicial, self.punto_final)
    }
}

impl Keyed for Corrida {
    fn key(&self) -> i32 {
        self.corrida
    }
}

impl Searchable for Corrida {
    fn key_text(&self) -> String {
        self.corrida.to_string()
    }

    fn search_fields(&self) -> Vec<Option<Cow<'_, str>>> {
        vec![
            Some(Cow::Borrowed(self.descripcion.as_str())),
            Some(Cow::Owned(self.punto_inicial.to_string())),
            Some(Cow::Owned(self.punto_final.to_string())),
        ]
    }
}

impl ForeignKeys for Corrida {}

impl Validate for Corrida {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_positive(&mut errors, "corrida", self.corrida, "El # de Corrida debe ser positivo.");
        require_positive(
            &mut errors,
            "puntoInicial",
            self.punto_inicial,
            "El Punto Inicial debe ser positivo.",
        );
        require_positive(&mut errors, "puntoFinal", self.punto_final, "El Punto Final debe ser positivo.");
        // the range check outranks the positivity message
        if self.punto_final < self.punto_inicial {
            errors.set("puntoFinal", "El Punto Final no puede ser menor al Inicial.");
        }
        require_text(&mut errors, "descripcion", &self.descripcion, "La Descripción es requerida.");
        errors
    }
}

impl CatalogRecord for Corrida {
    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "corridas"
    }

    fn key_field() -> &'static str {
        "corrida"
    }

    fn element_name() -> &'static str {
        "Corrida"
    }

    fn list_name() -> &'static str {
        "Corridas"
    }

    fn element_with_article() -> &'static str {
        "la corrida"
    }
}
