//! Data models for the contact directory
//!
//! This module contains the stored contact record and the fixed category
//! enumeration used for display and filtering.

use serde::{Deserialize, Serialize};

/// Default category assigned when none is supplied
pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// Reserved filter value meaning "no category restriction"; never stored
pub const ALL_CATEGORIES: &str = "all";

/// Placeholder shown for contacts without a first or last name
pub const NO_NAME: &str = "No Name";

/// A selectable contact category with its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryOption {
    /// Stored value
    pub value: &'static str,
    /// Human readable label
    pub label: &'static str,
}

/// Categories in display order; the last entry is the default.
pub static CATEGORY_OPTIONS: [CategoryOption; 7] = [
    CategoryOption { value: "work", label: "Work" },
    CategoryOption { value: "family", label: "Family" },
    CategoryOption { value: "friends", label: "Friends" },
    CategoryOption { value: "services", label: "Services" },
    CategoryOption { value: "vip", label: "VIP" },
    CategoryOption { value: "community", label: "Community" },
    CategoryOption { value: DEFAULT_CATEGORY, label: "Uncategorized" },
];

/// Label for a stored category value.
///
/// Lookup is exact; values outside the enumeration (including differently
/// cased ones) get the Uncategorized label.
#[must_use]
pub fn category_label(value: &str) -> &'static str {
    CATEGORY_OPTIONS
        .iter()
        .find(|option| option.value == value)
        .or_else(|| CATEGORY_OPTIONS.last())
        .map_or("Uncategorized", |option| option.label)
}

/// A contact record as stored in the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    /// Unique, immutable identifier
    pub id: String,
    /// Creation time in milliseconds since the Unix epoch
    pub created_at: i64,
    /// First name
    pub first: String,
    /// Last name
    pub last: String,
    /// Company or organisation
    pub company: String,
    /// Free-form location
    pub location: String,
    /// Avatar image URL
    pub avatar_url: String,
    /// Free-form notes
    pub notes: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Twitter handle without the leading `@`
    pub twitter_handle: String,
    /// Category value, never empty and never `"all"`
    pub category: String,
    /// Favorite flag
    pub favorite: bool,
    /// Ordered, non-empty trimmed tags
    pub tags: Vec<String>,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            id: String::new(),
            created_at: 0,
            first: String::new(),
            last: String::new(),
            company: String::new(),
            location: String::new(),
            avatar_url: String::new(),
            notes: String::new(),
            email: String::new(),
            phone: String::new(),
            twitter_handle: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            favorite: false,
            tags: Vec::new(),
        }
    }
}

impl Contact {
    /// Blank contact with the given id and creation time
    #[must_use]
    pub fn blank(id: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: id.into(),
            created_at,
            ..Self::default()
        }
    }

    /// Full name, or the "No Name" placeholder when both parts are empty
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.first.is_empty() && self.last.is_empty() {
            return NO_NAME.to_string();
        }
        format!("{} {}", self.first, self.last).trim().to_string()
    }

    /// Stored avatar URL, or a generated robohash avatar keyed by id
    #[must_use]
    pub fn avatar_or_default(&self) -> String {
        if self.avatar_url.is_empty() {
            format!("https://robohash.org/{}.png?size=200x200", self.id)
        } else {
            self.avatar_url.clone()
        }
    }

    /// Label of this contact's category
    #[must_use]
    pub fn category_label(&self) -> &'static str {
        category_label(&self.category)
    }
}
