//! Relevance ranking for free-text search.
//!
//! Each searchable value of a contact is ranked against the query and the
//! best rank wins. Ranks, from best to worst: case-sensitive equality,
//! equality, prefix, word prefix, substring, acronym, and finally an in-order
//! fuzzy match scored by how tightly the query characters cluster. Values
//! are compared without case or diacritics.

use std::cmp::Ordering;

use crate::models::Contact;
use crate::utils::fold_base;

/// How well a value matched a query
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rank(f64);

impl Rank {
    /// Exact match including case
    pub const CASE_SENSITIVE_EQUAL: Self = Self(7.0);
    /// Exact match ignoring case
    pub const EQUAL: Self = Self(6.0);
    /// Value starts with the query
    pub const STARTS_WITH: Self = Self(5.0);
    /// A word inside the value starts with the query
    pub const WORD_STARTS_WITH: Self = Self(4.0);
    /// Value contains the query
    pub const CONTAINS: Self = Self(3.0);
    /// Word initials contain the query
    pub const ACRONYM: Self = Self(2.0);
    /// Query characters appear in order; scored between 1 and 2
    pub const MATCHES: Self = Self(1.0);
    /// No match
    pub const NO_MATCH: Self = Self(0.0);

    /// Numeric score
    #[must_use]
    pub const fn score(self) -> f64 {
        self.0
    }

    /// True for any rank at or above [`Rank::MATCHES`]
    #[must_use]
    pub fn is_match(self) -> bool {
        self.0 >= Self::MATCHES.0
    }
}

/// Rank a single value against a query.
#[must_use]
pub fn rank_value(value: &str, query: &str) -> Rank {
    if query.len() > value.len() && query.chars().count() > value.chars().count() {
        return Rank::NO_MATCH;
    }
    if value == query {
        return Rank::CASE_SENSITIVE_EQUAL;
    }

    let value = fold_base(value);
    let query = fold_base(query);

    if value == query {
        return Rank::EQUAL;
    }
    if value.starts_with(&query) {
        return Rank::STARTS_WITH;
    }
    if value.contains(&format!(" {query}")) {
        return Rank::WORD_STARTS_WITH;
    }
    if value.contains(&query) {
        return Rank::CONTAINS;
    }
    if query.chars().count() == 1 {
        return Rank::NO_MATCH;
    }
    if acronym(&value).contains(&query) {
        return Rank::ACRONYM;
    }
    closeness(&value, &query)
}

fn acronym(value: &str) -> String {
    value
        .split(' ')
        .flat_map(|word| word.split('-'))
        .filter_map(|part| part.chars().next())
        .collect()
}

fn closeness(value: &str, query: &str) -> Rank {
    let chars: Vec<char> = value.chars().collect();
    let mut cursor = 0;
    let mut first = None;
    let mut last = 0;

    for wanted in query.chars() {
        let Some(offset) = chars[cursor..].iter().position(|c| *c == wanted) else {
            return Rank::NO_MATCH;
        };
        let index = cursor + offset;
        first.get_or_insert(index);
        last = index;
        cursor = index + 1;
    }

    let spread = count_as_f64(last - first.unwrap_or(0) + 1);
    let in_order = count_as_f64(query.chars().count()) / count_as_f64(chars.len());
    Rank(Rank::MATCHES.0 + in_order * (1.0 / spread))
}

fn count_as_f64(count: usize) -> f64 {
    f64::from(u32::try_from(count).unwrap_or(u32::MAX))
}

/// Searchable values of a contact, in key priority order
fn searchable_values(contact: &Contact) -> impl Iterator<Item = (usize, &str)> {
    [
        contact.first.as_str(),
        contact.last.as_str(),
        contact.company.as_str(),
        contact.email.as_str(),
    ]
    .into_iter()
    .enumerate()
    .chain(contact.tags.iter().map(|tag| (4, tag.as_str())))
}

/// Best rank of a contact and the index of the key that produced it
#[must_use]
pub fn rank_contact(contact: &Contact, query: &str) -> (Rank, usize) {
    searchable_values(contact).fold((Rank::NO_MATCH, usize::MAX), |best, (key, value)| {
        let rank = rank_value(value, query);
        if rank > best.0 {
            (rank, key)
        } else {
            best
        }
    })
}

/// Keep matching contacts, best matches first.
///
/// Ties keep the earlier key, then the incoming order.
#[must_use]
pub fn search(contacts: Vec<Contact>, query: &str) -> Vec<Contact> {
    let mut ranked: Vec<(Rank, usize, Contact)> = contacts
        .into_iter()
        .filter_map(|contact| {
            let (rank, key) = rank_contact(&contact, query);
            rank.is_match().then_some((rank, key, contact))
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(Ordering::Equal)
            .then(a.1.cmp(&b.1))
    });

    ranked.into_iter().map(|(_, _, contact)| contact).collect()
}
