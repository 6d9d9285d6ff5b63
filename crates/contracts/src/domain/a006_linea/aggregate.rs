use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::domain::common::CatalogRecord;
use crate::shared::list::lookup::DESCRIPTION_NOT_FOUND;
use crate::shared::list::{ForeignKeys, Keyed, LookupSpec, Searchable};
use crate::shared::serde_utils::text;
use crate::shared::validation::{require_positive, require_selected, require_text, FieldErrors, Validate};

const LOOKUPS: &[LookupSpec] = &[
    LookupSpec {
        collection: "marcas",
        key_field: "marca",
        fields: &["marca"],
        fallback: DESCRIPTION_NOT_FOUND,
    },
    LookupSpec {
        collection: "sublineas",
        key_field: "sublinea",
        fields: &["sublinea"],
        fallback: DESCRIPTION_NOT_FOUND,
    },
];

/// Línea de producto; pertenece a una marca y a una sublínea
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Linea {
    #[serde(default)]
    pub linea: i32,
    #[serde(default, deserialize_with = "text")]
    pub descripcion: String,
    #[serde(default)]
    pub marca: i32,
    #[serde(default)]
    pub sublinea: i32,
}

impl Keyed for Linea {
    fn key(&self) -> i32 {
        self.linea
    }
}

impl Searchable for Linea {
    fn key_text(&self) -> String {
        self.linea.to_string()
    }

    fn search_fields(&self) -> Vec<Option<Cow<'_, str>>> {
        vec![Some(Cow::Borrowed(self.descripcion.as_str()))]
    }
}

impl ForeignKeys for Linea {
    fn foreign_key(&self, field: &str) -> Option<i32> {
        match field {
            "marca" => Some(self.marca),
            "sublinea" => Some(self.sublinea),
            _ => None,
        }
    }
}

impl Validate for Linea {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_positive(&mut errors, "linea", self.linea, "La Línea debe ser un número positivo");
        require_text(&mut errors, "descripcion", &self.descripcion, "El campo Descripción es requerido");
        require_selected(&mut errors, "marca", Some(self.marca), "Debe seleccionar una Marca");
        require_selected(&mut errors, "sublinea", Some(self.sublinea), "Debe seleccionar una Sublínea");
        errors
    }
}

impl CatalogRecord for Linea {
    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "lineas"
    }

    fn key_field() -> &'static str {
        "linea"
    }

    fn element_name() -> &'static str {
        "Línea"
    }

    fn list_name() -> &'static str {
        "Líneas"
    }

    fn element_with_article() -> &'static str {
        "la línea"
    }

    fn lookups() -> &'static [LookupSpec] {
        LOOKUPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{LookupResolver, LookupTable};

    #[test]
    fn test_joins_marca_and_sublinea() {
        let [marcas, sublineas] = [&LOOKUPS[0], &LOOKUPS[1]];
        let resolver = LookupResolver::new()
            .with_spec(marcas, LookupTable::from_pairs([(1, "Athletic".to_string())]))
            .with_spec(sublineas, LookupTable::from_pairs([(2, "Deportivo".to_string())]));

        let linea = Linea {
            linea: 10,
            descripcion: "Runner".into(),
            marca: 1,
            sublinea: 7,
        };
        let row = resolver.resolve(&linea);
        assert_eq!(row.description("marca"), "Athletic");
        assert_eq!(row.description("sublinea"), DESCRIPTION_NOT_FOUND);
        assert!(row.matches_filter("athletic"));
    }

    #[test]
    fn test_selects_required() {
        let errors = Linea {
            linea: 1,
            descripcion: "Runner".into(),
            marca: 0,
            sublinea: 0,
        }
        .validate();
        assert_eq!(errors.get("marca"), Some("Debe seleccionar una Marca"));
        assert_eq!(errors.get("sublinea"), Some("Debe seleccionar una Sublínea"));
    }
}
