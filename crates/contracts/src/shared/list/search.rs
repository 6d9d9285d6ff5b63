use std::borrow::Cow;

/// Types that take part in the free-text list search
pub trait Searchable {
    /// Natural key rendered as text; always searched
    fn key_text(&self) -> String;

    /// Textual fields searched besides the key. `None` is compared as an empty string.
    fn search_fields(&self) -> Vec<Option<Cow<'_, str>>>;

    /// `needle` must already be lower-cased (see [`normalize_filter`])
    fn matches_filter(&self, needle: &str) -> bool {
        if self.key_text().to_lowercase().contains(needle) {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.as_deref().unwrap_or("").to_lowercase().contains(needle))
    }
}

/// Lower-cased needle, or `None` when the term is blank and the filter is the identity
pub fn normalize_filter(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Keeps the records matching `term`, preserving their order
pub fn filter_list<T: Searchable + Clone>(items: &[T], term: &str) -> Vec<T> {
    match normalize_filter(term) {
        None => items.to_vec(),
        Some(needle) => items
            .iter()
            .filter(|item| item.matches_filter(&needle))
            .cloned()
            .collect(),
    }
}

/// Number of records matching `term`
pub fn count_matches<T: Searchable>(items: &[T], term: &str) -> usize {
    match normalize_filter(term) {
        None => items.len(),
        Some(needle) => items.iter().filter(|item| item.matches_filter(&needle)).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i32,
        name: Option<String>,
    }

    impl Searchable for Row {
        fn key_text(&self) -> String {
            self.id.to_string()
        }

        fn search_fields(&self) -> Vec<Option<Cow<'_, str>>> {
            vec![self.name.as_deref().map(Cow::Borrowed)]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 12, name: Some("Rojo Ferrari".into()) },
            Row { id: 7, name: None },
            Row { id: 31, name: Some("Azul marino".into()) },
        ]
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let found = filter_list(&rows(), "ROJO");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 12);
    }

    #[test]
    fn test_filter_matches_stringified_key() {
        let found = filter_list(&rows(), "1");
        assert_eq!(found.iter().map(|r| r.id).collect::<Vec<_>>(), vec![12, 31]);
    }

    #[test]
    fn test_missing_field_never_panics() {
        assert!(filter_list(&rows(), "marino").iter().all(|r| r.name.is_some()));
        assert_eq!(count_matches(&rows(), "zzz"), 0);
    }

    #[test]
    fn test_clearing_restores_original_order() {
        let all = rows();
        let narrowed = filter_list(&all, "azul");
        assert_eq!(narrowed.len(), 1);
        assert_eq!(filter_list(&all, ""), all);
        assert_eq!(filter_list(&all, "   "), all);
    }
}
