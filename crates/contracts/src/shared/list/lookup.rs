//! Foreign-key resolution against lookup collections.
//!
//! A catalog declares its joins as [`LookupSpec`]s (which collection, which of its own
//! fields point into it, which placeholder to show on a miss). Once the lookup collections
//! are loaded, a [`LookupResolver`] turns each raw record into a [`Resolved`] row carrying
//! the descriptions next to the record. A missing match is not an error.

use super::search::Searchable;
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Placeholder for an optional reference with no match
pub const NOT_AVAILABLE: &str = "-";
/// Placeholder for a mandatory reference with no match
pub const DESCRIPTION_NOT_FOUND: &str = "Descripción no encontrada";

/// Records whose fields reference other catalogs by numeric key
pub trait ForeignKeys {
    /// Value of the referencing field, `None` when the record has no such field or it is unset
    fn foreign_key(&self, _field: &str) -> Option<i32> {
        None
    }
}

/// Static description of one lookup collection and the fields resolved through it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupSpec {
    /// Backend collection, e.g. `"materiales"`
    pub collection: &'static str,
    /// Key field inside the lookup records, e.g. `"material"`
    pub key_field: &'static str,
    /// Fields of the primary record resolved through this collection
    pub fields: &'static [&'static str],
    pub fallback: &'static str,
}

/// key → description map built once per load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    entries: BTreeMap<i32, String>,
}

impl LookupTable {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (i32, String)>) -> Self {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Builds the table from raw JSON records. Records without a numeric key are skipped,
    /// a missing `descripcion` becomes an empty string.
    pub fn from_json(records: &[Value], key_field: &str) -> Self {
        let entries = records
            .iter()
            .filter_map(|record| {
                let key = match record.get(key_field)? {
                    Value::Number(n) => n.as_i64()?,
                    Value::String(s) => s.trim().parse::<i64>().ok()?,
                    _ => return None,
                };
                let key = i32::try_from(key).ok()?;
                let description = record
                    .get("descripcion")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .trim()
                    .to_string();
                Some((key, description))
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, key: i32) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    /// `(key, description)` pairs ordered by key, for select inputs
    pub fn options(&self) -> Vec<(i32, String)> {
        self.entries
            .iter()
            .map(|(k, v)| (*k, v.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Join {
    field: &'static str,
    table: Arc<LookupTable>,
    fallback: &'static str,
}

/// Ordered list of `(field, lookup table)` joins applied to every record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupResolver {
    joins: Vec<Join>,
    tables: BTreeMap<&'static str, Arc<LookupTable>>,
}

impl LookupResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every field of `spec` against `table`
    pub fn with_spec(mut self, spec: &LookupSpec, table: LookupTable) -> Self {
        let table = Arc::new(table);
        for field in spec.fields {
            self.joins.push(Join {
                field: *field,
                table: Arc::clone(&table),
                fallback: spec.fallback,
            });
        }
        self.tables.insert(spec.collection, table);
        self
    }

    /// Loaded table for a collection, used to fill select inputs in forms
    pub fn table(&self, collection: &str) -> Option<&LookupTable> {
        self.tables.get(collection).map(Arc::as_ref)
    }

    pub fn is_empty(&self) -> bool {
        self.joins.is_empty()
    }

    /// Resolves every joined field of `record`. Unset references (None or 0) and keys
    /// absent from the table both resolve to the join's placeholder.
    pub fn resolve<T: ForeignKeys + Clone>(&self, record: &T) -> Resolved<T> {
        let descriptions = self
            .joins
            .iter()
            .map(|join| {
                let found = record
                    .foreign_key(join.field)
                    .filter(|key| *key != 0)
                    .and_then(|key| join.table.get(key));
                ResolvedField {
                    field: join.field,
                    description: found.unwrap_or(join.fallback).to_string(),
                    found: found.is_some(),
                }
            })
            .collect();
        Resolved {
            record: record.clone(),
            descriptions,
        }
    }

    pub fn resolve_all<T: ForeignKeys + Clone>(&self, records: &[T]) -> Vec<Resolved<T>> {
        records.iter().map(|r| self.resolve(r)).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ResolvedField {
    field: &'static str,
    description: String,
    /// false when `description` is the join's placeholder
    found: bool,
}

/// A record plus the descriptions of its foreign keys
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub record: T,
    descriptions: Vec<ResolvedField>,
}

impl<T> Resolved<T> {
    /// Row without joins
    pub fn plain(record: T) -> Self {
        Self {
            record,
            descriptions: Vec::new(),
        }
    }

    /// Description resolved for `field`; empty when the field is not joined
    pub fn description(&self, field: &str) -> &str {
        self.descriptions
            .iter()
            .find(|d| d.field == field)
            .map(|d| d.description.as_str())
            .unwrap_or("")
    }
}

impl<T: Searchable> Searchable for Resolved<T> {
    fn key_text(&self) -> String {
        self.record.key_text()
    }

    fn search_fields(&self) -> Vec<Option<Cow<'_, str>>> {
        let mut fields = self.record.search_fields();
        fields.extend(
            self.descriptions
                .iter()
                .filter(|d| d.found)
                .map(|d| Some(Cow::Borrowed(d.description.as_str()))),
        );
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    struct Pair {
        id: i32,
        material: Option<i32>,
        color: Option<i32>,
    }

    impl ForeignKeys for Pair {
        fn foreign_key(&self, field: &str) -> Option<i32> {
            match field {
                "material" => self.material,
                "color" => self.color,
                _ => None,
            }
        }
    }

    impl Searchable for Pair {
        fn key_text(&self) -> String {
            self.id.to_string()
        }

        fn search_fields(&self) -> Vec<Option<Cow<'_, str>>> {
            Vec::new()
        }
    }

    const MATERIALES: LookupSpec = LookupSpec {
        collection: "materiales",
        key_field: "material",
        fields: &["material"],
        fallback: NOT_AVAILABLE,
    };

    const COLORES: LookupSpec = LookupSpec {
        collection: "colores",
        key_field: "color",
        fields: &["color"],
        fallback: DESCRIPTION_NOT_FOUND,
    };

    fn resolver() -> LookupResolver {
        let materiales = LookupTable::from_json(
            &[
                json!({"material": 1, "descripcion": "Piel"}),
                json!({"material": "2", "descripcion": "Sintético"}),
                json!({"descripcion": "sin clave"}),
            ],
            "material",
        );
        let colores = LookupTable::from_pairs([(5, "Rojo".to_string())]);
        LookupResolver::new()
            .with_spec(&MATERIALES, materiales)
            .with_spec(&COLORES, colores)
    }

    #[test]
    fn test_from_json_skips_records_without_key() {
        let resolver = resolver();
        let table = resolver.table("materiales").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(2), Some("Sintético"));
    }

    #[test]
    fn test_resolve_hits_and_misses() {
        let row = resolver().resolve(&Pair { id: 1, material: Some(2), color: Some(9) });
        assert_eq!(row.description("material"), "Sintético");
        assert_eq!(row.description("color"), DESCRIPTION_NOT_FOUND);
        assert_eq!(row.description("otro"), "");
    }

    #[test]
    fn test_unset_reference_uses_placeholder() {
        let row = resolver().resolve(&Pair { id: 1, material: Some(0), color: None });
        assert_eq!(row.description("material"), NOT_AVAILABLE);
        assert_eq!(row.description("color"), DESCRIPTION_NOT_FOUND);
    }

    #[test]
    fn test_resolved_rows_are_searchable_by_description() {
        let row = resolver().resolve(&Pair { id: 40, material: Some(1), color: Some(5) });
        assert!(row.matches_filter("piel"));
        assert!(row.matches_filter("rojo"));
        assert!(row.matches_filter("40"));
        assert!(!row.matches_filter("azul"));
    }

    #[test]
    fn test_placeholders_are_not_searchable() {
        let row = resolver().resolve(&Pair { id: 40, material: Some(1), color: None });
        assert_eq!(row.description("color"), DESCRIPTION_NOT_FOUND);
        assert!(!row.matches_filter("-"));
        assert!(!row.matches_filter("no encontrada"));
        assert!(row.matches_filter("piel"));
    }
}
