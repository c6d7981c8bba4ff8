//! Sort strategies for listing results.
//!
//! All strategies use a stable sort, so records that compare equal keep the
//! order produced by the filter pipeline (search relevance, when active).

use std::cmp::Ordering;

use crate::models::Contact;
use crate::query::SortKey;
use crate::utils::compare_base;

/// Order `contacts` in place by `key`.
pub fn sort_contacts(contacts: &mut [Contact], key: SortKey) {
    match key {
        SortKey::Last => contacts.sort_by(by_last_then_first),
        SortKey::First => contacts.sort_by(|a, b| a.first.cmp(&b.first).then_with(|| a.last.cmp(&b.last))),
        SortKey::Company => contacts.sort_by(|a, b| {
            a.company
                .to_lowercase()
                .cmp(&b.company.to_lowercase())
                .then_with(|| by_last_then_first(a, b))
        }),
        SortKey::Recent => contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Favorite => contacts.sort_by(by_favorite),
    }
}

fn by_last_then_first(a: &Contact, b: &Contact) -> Ordering {
    a.last.cmp(&b.last).then_with(|| a.first.cmp(&b.first))
}

fn by_favorite(a: &Contact, b: &Contact) -> Ordering {
    b.favorite
        .cmp(&a.favorite)
        .then_with(|| compare_base(&a.last, &b.last))
}
