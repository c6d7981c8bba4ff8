//! The filter pipeline.
//!
//! Stages run in a fixed order (search, favorite, category, tag) and each
//! is skipped when its descriptor field is empty. The pipeline consumes an
//! owned copy of the collection; stored records are never touched.

use crate::models::{Contact, ALL_CATEGORIES};
use crate::query::QueryDescriptor;
use crate::search::search;

/// Apply every active filter stage.
#[must_use]
pub fn apply_filters(contacts: Vec<Contact>, descriptor: &QueryDescriptor) -> Vec<Contact> {
    let mut result = contacts;

    if !descriptor.q.is_empty() {
        result = search(result, &descriptor.q);
    }
    if descriptor.favorite_only {
        result.retain(|contact| contact.favorite);
    }
    if is_category_filter(&descriptor.category) {
        result.retain(|contact| matches_category(contact, &descriptor.category));
    }
    if !descriptor.tag.is_empty() {
        let needle = descriptor.tag.to_lowercase();
        result.retain(|contact| has_tag_containing(contact, &needle));
    }

    result
}

fn is_category_filter(category: &str) -> bool {
    !category.is_empty() && category != ALL_CATEGORIES
}

/// Case-insensitive category equality
#[must_use]
pub fn matches_category(contact: &Contact, category: &str) -> bool {
    !contact.category.is_empty() && contact.category.to_lowercase() == category.to_lowercase()
}

/// True if any tag contains `needle`, which must already be lower-cased
#[must_use]
pub fn has_tag_containing(contact: &Contact, needle: &str) -> bool {
    contact.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}
