//! Property tests for record and query normalization

use contact_directory::models::DEFAULT_CATEGORY;
use contact_directory::normalize::{normalize_patch, ContactPatch, FlagValue, TagList};
use contact_directory::{ContactQuery, QueryOptions, SortKey};
use proptest::prelude::*;

#[test]
fn test_supported_boolean_forms() {
    let cases = [
        (Some(FlagValue::Bool(true)), true),
        (Some(FlagValue::from("true")), true),
        (Some(FlagValue::from("1")), true),
        (Some(FlagValue::Bool(false)), false),
        (Some(FlagValue::from("false")), false),
        (None, false),
    ];
    for (input, expected) in cases {
        let descriptor = QueryOptions {
            favorite_only: input,
            ..QueryOptions::default()
        }
        .normalize();
        assert_eq!(descriptor.favorite_only, expected);
    }
}

#[test]
fn test_favorite_only_normalized_when_present() {
    let update = normalize_patch(ContactPatch::new().first("x"));
    assert_eq!(update.favorite, None);

    let update = normalize_patch(ContactPatch::new().favorite("false"));
    assert_eq!(update.favorite, Some(false));
}

#[test]
fn test_category_sentinel() {
    for input in ["", "all"] {
        let update = normalize_patch(ContactPatch::new().category(input));
        assert_eq!(update.category.as_deref(), Some(DEFAULT_CATEGORY));
    }
    let update = normalize_patch(ContactPatch::new().category("Friends"));
    assert_eq!(update.category.as_deref(), Some("Friends"));
}

#[test]
fn test_payloads_with_other_json_shapes_are_coerced() {
    let patch: ContactPatch = serde_json::from_str(r#"{"favorite":1}"#).expect("favorite number rejected");
    assert_eq!(normalize_patch(patch).favorite, Some(false));

    let patch: ContactPatch =
        serde_json::from_str(r#"{"first":"Lan","tags":["a",2]}"#).expect("mixed tag list rejected");
    let update = normalize_patch(patch);
    assert_eq!(update.first.as_deref(), Some("Lan"));
    assert_eq!(update.tags, Some(vec!["a".to_string(), "2".to_string()]));

    let patch: ContactPatch = serde_json::from_str(r#"{"tags":{"a":1}}"#).expect("tag object rejected");
    assert_eq!(normalize_patch(patch).tags, None);

    let options: QueryOptions =
        serde_json::from_str(r#"{"q":"vo","favorite":0}"#).expect("numeric favorite rejected");
    let descriptor = ContactQuery::from(options).normalize();
    assert_eq!(descriptor.q, "vo");
    assert!(!descriptor.favorite_only);
}

#[test]
fn test_raw_and_structured_search_agree() {
    let raw = ContactQuery::from("vo").normalize();
    let structured = ContactQuery::from(QueryOptions::new().q("vo")).normalize();
    assert_eq!(raw, structured);
    assert_eq!(raw.sort_by, SortKey::Last);
}

proptest! {
    #[test]
    fn prop_other_text_is_false(text in "\\PC*") {
        prop_assume!(text != "true" && text != "1");
        prop_assert!(!FlagValue::from(text.as_str()).is_truthy());
    }

    #[test]
    fn prop_list_tags_are_clean_and_ordered(tags in proptest::collection::vec("[ a-z,]{0,8}", 0..8)) {
        let normalized = TagList::List(tags.clone()).normalize();
        let expected: Vec<String> = tags
            .iter()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();
        prop_assert_eq!(normalized, Some(expected));
    }

    #[test]
    fn prop_delimited_tags_are_clean_and_ordered(text in "[ a-z,]{0,40}") {
        let normalized = TagList::Delimited(text.clone()).normalize().unwrap_or_default();
        for tag in &normalized {
            prop_assert!(!tag.is_empty());
            prop_assert_eq!(tag.trim(), tag.as_str());
            prop_assert!(!tag.contains(','));
        }
        let expected: Vec<&str> = text.split(',').map(str::trim).filter(|t| !t.is_empty()).collect();
        prop_assert_eq!(normalized, expected);
    }

    #[test]
    fn prop_category_is_never_empty_or_all(category in "\\PC{0,12}") {
        let update = normalize_patch(ContactPatch::new().category(category.clone()));
        let stored = update.category.unwrap_or_default();
        prop_assert!(!stored.is_empty());
        prop_assert_ne!(stored.as_str(), "all");
        if !category.is_empty() && category != "all" {
            prop_assert_eq!(stored, category);
        }
    }

    #[test]
    fn prop_twitter_handle_has_no_leading_at(handle in "[ @a-z_]{0,16}") {
        let update = normalize_patch(ContactPatch::new().twitter_handle(handle));
        let stored = update.twitter_handle.unwrap_or_default();
        prop_assert!(!stored.starts_with('@'));
        prop_assert_eq!(stored.trim(), stored.as_str());
    }

    #[test]
    fn prop_unknown_sort_falls_back(name in "[a-z]{0,10}") {
        let key = SortKey::parse(&name);
        if !["first", "company", "recent", "favorite"].contains(&name.as_str()) {
            prop_assert_eq!(key, SortKey::Last);
        }
    }
}
