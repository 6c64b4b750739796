// Suggestion module - debounced autocomplete lookups against a remote source

pub mod debounce;
pub mod source;
pub mod worker;

pub use debounce::Debouncer;
pub use source::{FetchError, HttpSource, SuggestionSource};
pub use worker::{SearchRequest, SuggestionBatch, SuggestionWorker};

use crate::formula::token::Token;

/// Case-insensitive substring filter on entity names. An empty query matches
/// every entity.
pub fn filter_by_name(entities: Vec<Token>, query: &str) -> Vec<Token> {
    let needle = query.to_lowercase();
    entities
        .into_iter()
        .filter(|entity| entity.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(name: &str) -> Token {
        Token {
            name: name.to_string(),
            category: "fruit".to_string(),
            value: "1".to_string(),
            id: "1".to_string(),
        }
    }

    #[test]
    fn test_filter_matches_substring() {
        let entities = vec![entity("Apple"), entity("Banana")];
        let filtered = filter_by_name(entities, "ap");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Apple");
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let entities = vec![entity("Apple"), entity("Pineapple")];
        let filtered = filter_by_name(entities, "APPLE");
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_preserves_source_order() {
        let entities = vec![entity("Pineapple"), entity("Apple")];
        let filtered = filter_by_name(entities, "apple");
        assert_eq!(filtered[0].name, "Pineapple");
        assert_eq!(filtered[1].name, "Apple");
    }

    #[test]
    fn test_filter_empty_query_matches_all() {
        let entities = vec![entity("Apple"), entity("Banana")];
        assert_eq!(filter_by_name(entities, "").len(), 2);
    }

    #[test]
    fn test_filter_no_match_yields_empty() {
        let entities = vec![entity("Apple")];
        assert!(filter_by_name(entities, "zzz").is_empty());
    }
}
