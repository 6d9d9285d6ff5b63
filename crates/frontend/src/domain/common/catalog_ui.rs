//! Per-catalog screen configuration: table columns and form fields.
//!
//! Forms edit the draft through its JSON representation, so one generic form can
//! drive every catalog. Field names are the wire names (`puntoInicial`, `correoE`),
//! the same names `Validate` reports errors under.

use contracts::domain::common::CatalogRecord;
use contracts::shared::list::Resolved;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Number,
    Text { max_len: Option<usize> },
    /// Mandatory reference; 0 means nothing selected
    Select { lookup: &'static str },
    /// Optional reference; stored as null when nothing is selected
    OptionalSelect { lookup: &'static str },
    /// "A"/"I" status of a supplier
    Estatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Number }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Text { max_len: None } }
    }

    pub const fn text_max(name: &'static str, label: &'static str, max_len: usize) -> Self {
        Self { name, label, kind: FieldKind::Text { max_len: Some(max_len) } }
    }

    pub const fn select(name: &'static str, label: &'static str, lookup: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Select { lookup } }
    }

    pub const fn optional_select(name: &'static str, label: &'static str, lookup: &'static str) -> Self {
        Self { name, label, kind: FieldKind::OptionalSelect { lookup } }
    }
}

/// One table column: header plus the text of the cell for a row
pub struct ColumnDef<T> {
    pub header: &'static str,
    pub cell: fn(&Resolved<T>) -> String,
}

/// Screen configuration of a catalog edited through the generic list
pub trait CatalogUi: CatalogRecord {
    fn columns() -> Vec<ColumnDef<Self>>;

    /// Form inputs; the one named after `key_field` is locked while editing
    fn form_fields() -> Vec<FieldDef>;

    fn page_id() -> &'static str;
}

/// Text shown in the input for `field`; zero and null render empty
pub fn field_value<T: CatalogRecord>(draft: &T, field: &str) -> String {
    let Ok(json) = serde_json::to_value(draft) else {
        return String::new();
    };
    match json.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.as_i64() == Some(0) => String::new(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Draft with `field` set from the raw input text, or `None` if the draft no longer
/// deserializes
pub fn with_field<T: CatalogRecord>(draft: &T, field: &str, kind: FieldKind, raw: &str) -> Option<T> {
    let mut json = serde_json::to_value(draft).ok()?;
    let object = json.as_object_mut()?;
    let number = raw.trim().parse::<i32>().ok();
    let value = match kind {
        FieldKind::Number | FieldKind::Select { .. } => Value::from(number.unwrap_or(0)),
        FieldKind::OptionalSelect { .. } => match number.filter(|n| *n != 0) {
            Some(n) => Value::from(n),
            None => Value::Null,
        },
        FieldKind::Text { .. } | FieldKind::Estatus => Value::from(raw.to_string()),
    };
    object.insert(field.to_string(), value);
    serde_json::from_value(json).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_corrida::Corrida;
    use contracts::domain::a007_combinacion::Combinacion;

    #[test]
    fn test_edit_renamed_numeric_field() {
        let draft = Corrida::default();
        let draft = with_field(&draft, "puntoInicial", FieldKind::Number, "22").unwrap();
        assert_eq!(draft.punto_inicial, 22);
        assert_eq!(field_value(&draft, "puntoInicial"), "22");
        assert_eq!(field_value(&draft, "puntoFinal"), "");

        let draft = with_field(&draft, "puntoInicial", FieldKind::Number, "x").unwrap();
        assert_eq!(draft.punto_inicial, 0);
    }

    #[test]
    fn test_optional_select_clears_to_none() {
        let draft = with_field(
            &Combinacion::default(),
            "material2",
            FieldKind::OptionalSelect { lookup: "materiales" },
            "4",
        )
        .unwrap();
        assert_eq!(draft.material2, Some(4));

        let draft = with_field(
            &draft,
            "material2",
            FieldKind::OptionalSelect { lookup: "materiales" },
            "",
        )
        .unwrap();
        assert_eq!(draft.material2, None);
    }
}
