//! Filtering utilities for document matching.

use serde_json::Value;

use crate::{
    comparison::{coerce_to_string, strict_equals},
    constants::{ID_ALIAS_FIELD, ID_FIELD},
    Document,
    Filter,
};

/// Checks if a document matches every condition of the filter.
///
/// An empty filter matches every document.
pub fn matches_filter(doc: &Document, filter: &Filter) -> bool {
    filter
        .conditions()
        .iter()
        .all(|(field, expected)| matches_condition(doc, field, expected))
}

/// Checks a single `field == expected` condition.
///
/// Identity fields are aliased: a condition on either `_id` or `id` compares
/// the string form of `expected` against the string form of both of the
/// document's identity fields.
fn matches_condition(doc: &Document, field: &str, expected: &Value) -> bool {
    if field == ID_FIELD || field == ID_ALIAS_FIELD {
        let wanted = coerce_to_string(Some(expected));
        return coerce_to_string(doc.get(ID_FIELD)) == wanted || coerce_to_string(doc.get(ID_ALIAS_FIELD)) == wanted;
    }
    doc.get(field)
        .is_some_and(|actual| strict_equals(actual, expected))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn create_doc(data: Value) -> Document { Document::from_value("test", data).unwrap() }

    fn filter(value: Value) -> Filter { Filter::try_from(value).unwrap() }

    #[test]
    fn test_empty_filter_matches_everything() {
        let doc = create_doc(json!({"name": "Alice"}));
        assert!(matches_filter(&doc, &Filter::new()));
        assert!(matches_filter(&create_doc(json!({})), &Filter::new()));
    }

    #[test]
    fn test_matches_filter_equals() {
        let doc = create_doc(json!({"name": "Alice", "age": 25}));
        assert!(matches_filter(&doc, &filter(json!({"name": "Alice"}))));
        assert!(matches_filter(
            &doc,
            &filter(json!({"name": "Alice", "age": 25}))
        ));
        assert!(!matches_filter(&doc, &filter(json!({"name": "Bob"}))));
        assert!(!matches_filter(
            &doc,
            &filter(json!({"name": "Alice", "age": 26}))
        ));
    }

    #[test]
    fn test_no_partial_matching() {
        let doc = create_doc(json!({"category": "Beaches"}));
        assert!(!matches_filter(&doc, &filter(json!({"category": "Beach"}))));
        assert!(!matches_filter(&doc, &filter(json!({"category": "beaches"}))));
    }

    #[test]
    fn test_missing_field_never_matches() {
        let doc = create_doc(json!({"name": "Alice"}));
        assert!(!matches_filter(&doc, &filter(json!({"age": null}))));
        assert!(!matches_filter(&doc, &filter(json!({"age": 0}))));
    }

    #[test]
    fn test_null_field_matches_null() {
        let doc = create_doc(json!({"parentId": null}));
        assert!(matches_filter(&doc, &filter(json!({"parentId": null}))));
    }

    #[test]
    fn test_id_aliasing() {
        let doc = create_doc(json!({"_id": "abc", "id": "abc", "title": "Post"}));
        assert!(matches_filter(&doc, &filter(json!({"_id": "abc"}))));
        assert!(matches_filter(&doc, &filter(json!({"id": "abc"}))));
        assert!(!matches_filter(&doc, &filter(json!({"id": "abd"}))));
    }

    #[test]
    fn test_id_aliasing_with_one_field_only() {
        let only_canonical = create_doc(json!({"_id": "abc"}));
        let only_alias = create_doc(json!({"id": "abc"}));
        for doc in [&only_canonical, &only_alias] {
            assert!(matches_filter(doc, &filter(json!({"_id": "abc"}))));
            assert!(matches_filter(doc, &filter(json!({"id": "abc"}))));
        }
    }

    #[test]
    fn test_id_comparison_is_string_coerced() {
        let doc = create_doc(json!({"_id": "42", "id": "42"}));
        assert!(matches_filter(&doc, &filter(json!({"id": 42}))));

        let numeric = create_doc(json!({"_id": 7}));
        assert!(matches_filter(&numeric, &filter(json!({"_id": "7"}))));
    }

    #[test]
    fn test_id_filter_does_not_match_documents_without_ids() {
        let doc = create_doc(json!({"title": "No id"}));
        assert!(!matches_filter(&doc, &filter(json!({"id": "abc"}))));
        assert!(!matches_filter(&doc, &filter(json!({"_id": null}))));
    }

    #[test]
    fn test_query_operators_are_literal() {
        let doc = create_doc(json!({"likes": 10, "status": "open"}));
        assert!(!matches_filter(&doc, &filter(json!({"likes": {"$gte": 5}}))));
        assert!(!matches_filter(
            &doc,
            &filter(json!({"status": {"$ne": "closed"}}))
        ));
        assert!(!matches_filter(
            &doc,
            &filter(json!({"$or": [{"status": "open"}]}))
        ));
    }

    #[test]
    fn test_numeric_representation_does_not_matter() {
        let doc = create_doc(json!({"rating": 4}));
        assert!(matches_filter(&doc, &filter(json!({"rating": 4.0}))));
    }

    #[test]
    fn test_array_and_object_values() {
        let doc = create_doc(json!({"tags": ["sun", "sea"], "geo": {"lat": 1, "lng": 2}}));
        assert!(matches_filter(&doc, &filter(json!({"tags": ["sun", "sea"]}))));
        assert!(!matches_filter(&doc, &filter(json!({"tags": "sun"}))));
        assert!(matches_filter(
            &doc,
            &filter(json!({"geo": {"lng": 2, "lat": 1}}))
        ));
    }
}
