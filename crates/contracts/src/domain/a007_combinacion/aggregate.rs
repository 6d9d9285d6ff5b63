use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::domain::common::CatalogRecord;
use crate::shared::list::lookup::NOT_AVAILABLE;
use crate::shared::list::{ForeignKeys, Keyed, LookupSpec, Searchable};
use crate::shared::validation::{require_positive, require_selected, FieldErrors, Validate};

/// Number of material/color pairs a combination can hold
pub const PAIRS: usize = 6;

pub const MATERIAL_FIELDS: [&str; PAIRS] =
    ["material1", "material2", "material3", "material4", "material5", "material6"];
pub const COLOR_FIELDS: [&str; PAIRS] = ["color1", "color2", "color3", "color4", "color5", "color6"];

const LOOKUPS: &[LookupSpec] = &[
    LookupSpec {
        collection: "materiales",
        key_field: "material",
        fields: &MATERIAL_FIELDS,
        fallback: NOT_AVAILABLE,
    },
    LookupSpec {
        collection: "colores",
        key_field: "color",
        fields: &COLOR_FIELDS,
        fallback: NOT_AVAILABLE,
    },
];

/// Combinación: hasta seis pares material + color que identifican una variante de producto.
///
/// The first pair is mandatory. Pairs 2..6 are optional; the backend sends `null` for an
/// empty slot and the form treats `0` the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combinacion {
    #[serde(default)]
    pub combinacion: i32,
    #[serde(default)]
    pub material1: i32,
    #[serde(default)]
    pub color1: i32,
    #[serde(default)]
    pub material2: Option<i32>,
    #[serde(default)]
    pub color2: Option<i32>,
    #[serde(default)]
    pub material3: Option<i32>,
    #[serde(default)]
    pub color3: Option<i32>,
    #[serde(default)]
    pub material4: Option<i32>,
    #[serde(default)]
    pub color4: Option<i32>,
    #[serde(default)]
    pub material5: Option<i32>,
    #[serde(default)]
    pub color5: Option<i32>,
    #[serde(default)]
    pub material6: Option<i32>,
    #[serde(default)]
    pub color6: Option<i32>,
}

fn unset_zero(value: Option<i32>) -> Option<i32> {
    value.filter(|v| *v != 0)
}

impl Combinacion {
    /// Material of pair `n` (1-based); `None` when the slot is empty
    pub fn material(&self, n: usize) -> Option<i32> {
        let value = match n {
            1 => Some(self.material1),
            2 => self.material2,
            3 => self.material3,
            4 => self.material4,
            5 => self.material5,
            6 => self.material6,
            _ => None,
        };
        unset_zero(value)
    }

    pub fn color(&self, n: usize) -> Option<i32> {
        let value = match n {
            1 => Some(self.color1),
            2 => self.color2,
            3 => self.color3,
            4 => self.color4,
            5 => self.color5,
            6 => self.color6,
            _ => None,
        };
        unset_zero(value)
    }

    pub fn set_material(&mut self, n: usize, value: Option<i32>) {
        let value = unset_zero(value);
        match n {
            1 => self.material1 = value.unwrap_or(0),
            2 => self.material2 = value,
            3 => self.material3 = value,
            4 => self.material4 = value,
            5 => self.material5 = value,
            6 => self.material6 = value,
            _ => {}
        }
    }

    pub fn set_color(&mut self, n: usize, value: Option<i32>) {
        let value = unset_zero(value);
        match n {
            1 => self.color1 = value.unwrap_or(0),
            2 => self.color2 = value,
            3 => self.color3 = value,
            4 => self.color4 = value,
            5 => self.color5 = value,
            6 => self.color6 = value,
            _ => {}
        }
    }
}

impl Keyed for Combinacion {
    fn key(&self) -> i32 {
        self.combinacion
    }
}

// descriptions of every pair are added by the lookup join
impl Searchable for Combinacion {
    fn key_text(&self) -> String {
        self.combinacion.to_string()
    }

    fn search_fields(&self) -> Vec<Option<Cow<'_, str>>> {
        Vec::new()
    }
}

impl ForeignKeys for Combinacion {
    fn foreign_key(&self, field: &str) -> Option<i32> {
        if let Some(i) = MATERIAL_FIELDS.iter().position(|f| *f == field) {
            return self.material(i + 1);
        }
        if let Some(i) = COLOR_FIELDS.iter().position(|f| *f == field) {
            return self.color(i + 1);
        }
        None
    }
}

impl Validate for Combinacion {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_positive(&mut errors, "combinacion", self.combinacion, "El campo Combinación es requerido");
        require_selected(&mut errors, "material1", self.material(1), "El Material 1 es requerido");
        require_selected(&mut errors, "color1", self.color(1), "El Color 1 es requerido");
        errors
    }
}

impl CatalogRecord for Combinacion {
    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "combinaciones"
    }

    fn key_field() -> &'static str {
        "combinacion"
    }

    fn element_name() -> &'static str {
        "Combinación"
    }

    fn list_name() -> &'static str {
        "Combinaciones"
    }

    fn element_with_article() -> &'static str {
        "la combinación"
    }

    fn lookups() -> &'static [LookupSpec] {
        LOOKUPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{LookupResolver, LookupTable};

    fn resolver() -> LookupResolver {
        LookupResolver::new()
            .with_spec(
                &LOOKUPS[0],
                LookupTable::from_pairs([(1, "Piel".to_string()), (2, "Gamuza".to_string())]),
            )
            .with_spec(&LOOKUPS[1], LookupTable::from_pairs([(5, "Negro".to_string())]))
    }

    #[test]
    fn test_null_slots_from_backend() {
        let c: Combinacion = serde_json::from_str(
            r#"{"combinacion":300,"material1":1,"color1":5,"material2":2,"color2":null}"#,
        )
        .unwrap();
        assert_eq!(c.material(2), Some(2));
        assert_eq!(c.color(2), None);
        assert_eq!(c.material(6), None);
    }

    #[test]
    fn test_zero_clears_optional_slot() {
        let mut c = Combinacion::default();
        c.set_material(3, Some(4));
        assert_eq!(c.material3, Some(4));
        c.set_material(3, Some(0));
        assert_eq!(c.material3, None);
        c.set_color(1, None);
        assert_eq!(c.color1, 0);
    }

    #[test]
    fn test_every_pair_is_resolved_and_searchable() {
        let c = Combinacion {
            combinacion: 300,
            material1: 1,
            color1: 5,
            material2: Some(2),
            color2: Some(99),
            ..Default::default()
        };
        let row = resolver().resolve(&c);
        assert_eq!(row.description("material1"), "Piel");
        assert_eq!(row.description("color1"), "Negro");
        assert_eq!(row.description("material2"), "Gamuza");
        assert_eq!(row.description("color2"), NOT_AVAILABLE);
        assert_eq!(row.description("material6"), NOT_AVAILABLE);
        assert!(row.matches_filter("gamuza"));
        assert!(row.matches_filter("300"));
    }

    #[test]
    fn test_empty_slots_do_not_match_the_dash() {
        let c = Combinacion {
            combinacion: 40,
            material1: 1,
            color1: 5,
            ..Default::default()
        };
        let row = resolver().resolve(&c);
        assert_eq!(row.description("material3"), NOT_AVAILABLE);
        assert!(!row.matches_filter("-"));
        assert!(row.matches_filter("negro"));
    }

    #[test]
    fn test_first_pair_required() {
        let errors = Combinacion { combinacion: 1, ..Default::default() }.validate();
        assert_eq!(errors.get("material1"), Some("El Material 1 es requerido"));
        assert_eq!(errors.get("color1"), Some("El Color 1 es requerido"));
    }
}
