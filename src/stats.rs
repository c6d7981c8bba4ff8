//! Aggregate statistics over the full collection.

use serde::Serialize;

use crate::models::{category_label, Contact, DEFAULT_CATEGORY};

/// How many top categories a summary reports
pub const TOP_CATEGORY_COUNT: usize = 3;

/// Count of contacts sharing one stored category value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// Stored category value, verbatim
    pub value: String,
    /// Display label
    pub label: &'static str,
    /// Number of contacts
    pub count: usize,
}

/// Summary of the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactStats {
    /// Number of contacts
    pub total: usize,
    /// Number of favorites
    pub favorites: usize,
    /// Most populated categories, largest first
    pub top_categories: Vec<CategoryCount>,
}

impl ContactStats {
    /// Summarize a collection.
    ///
    /// Category values are counted as stored, so `"work"` and `"Work"` are
    /// separate entries. Equal counts keep first-seen order.
    #[must_use]
    pub fn from_contacts(contacts: &[Contact]) -> Self {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for contact in contacts {
            let key = if contact.category.is_empty() {
                DEFAULT_CATEGORY
            } else {
                contact.category.as_str()
            };
            match counts.iter_mut().find(|(value, _)| value == key) {
                Some((_, count)) => *count += 1,
                None => counts.push((key.to_string(), 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            total: contacts.len(),
            favorites: contacts.iter().filter(|contact| contact.favorite).count(),
            top_categories: counts
                .into_iter()
                .take(TOP_CATEGORY_COUNT)
                .map(|(value, count)| CategoryCount {
                    label: category_label(&value),
                    value,
                    count,
                })
                .collect(),
        }
    }
}
