use std::collections::BTreeMap;

/// Field-level validation messages keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message; the first message for a field wins
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Records a message, replacing any earlier one for the field
    pub fn set(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Local, synchronous validation of a form draft
pub trait Validate {
    fn validate(&self) -> FieldErrors;
}

/// Requires a strictly positive key
pub fn require_positive(errors: &mut FieldErrors, field: &'static str, value: i32, message: &str) {
    if value <= 0 {
        errors.add(field, message);
    }
}

/// Requires non-blank text
pub fn require_text(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.add(field, message);
    }
}

/// Requires a foreign key to be selected (0 and `None` both mean "not selected")
pub fn require_selected(
    errors: &mut FieldErrors,
    field: &'static str,
    value: Option<i32>,
    message: &str,
) {
    if value.unwrap_or(0) <= 0 {
        errors.add(field, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_wins_and_set_overrides() {
        let mut errors = FieldErrors::new();
        errors.add("descripcion", "requerida");
        errors.add("descripcion", "muy corta");
        assert_eq!(errors.get("descripcion"), Some("requerida"));

        errors.set("descripcion", "muy corta");
        assert_eq!(errors.get("descripcion"), Some("muy corta"));
    }

    #[test]
    fn test_clear_removes_only_that_field() {
        let mut errors = FieldErrors::new();
        require_positive(&mut errors, "color", 0, "positivo");
        require_text(&mut errors, "descripcion", "  ", "requerida");
        require_selected(&mut errors, "marca", Some(0), "seleccione");
        assert_eq!(errors.len(), 3);

        errors.clear("color");
        assert_eq!(errors.get("color"), None);
        assert_eq!(errors.len(), 2);
    }
}
