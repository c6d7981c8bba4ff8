//! Record normalization for create and update payloads.
//!
//! Callers describe changes with a [`ContactPatch`], a typed partial update in
//! which every field is optional. Unknown fields are ignored on
//! deserialization. [`normalize_patch`] coerces the patch into a
//! [`ContactUpdate`] whose values already satisfy the stored-record
//! invariants; nothing here ever rejects input.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Contact, ALL_CATEGORIES, DEFAULT_CATEGORY};

/// A boolean-like input value
///
/// Only `true`, `"true"` and `"1"` are truthy; every other value is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    /// A real boolean
    Bool(bool),
    /// A textual form such as a form field or URL parameter
    Text(String),
    /// Any other JSON value, such as a number or null
    Other(Value),
}

impl FlagValue {
    /// Coerce to a boolean
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Text(text) => text == "true" || text == "1",
            Self::Other(_) => false,
        }
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FlagValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Coerce an optional boolean-like value; absent is false.
#[must_use]
pub fn is_truthy(value: Option<&FlagValue>) -> bool {
    value.is_some_and(FlagValue::is_truthy)
}

/// Tags as supplied by a caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagList {
    /// An explicit list
    List(Vec<String>),
    /// A single comma-separated string
    Delimited(String),
    /// A list holding non-string elements; each one is stringified
    Mixed(Vec<Value>),
    /// Any other JSON value; leaves stored tags untouched
    Other(Value),
}

impl TagList {
    /// Trimmed, non-empty tags in their original order.
    ///
    /// Duplicates are kept. Returns `None` for values that are neither a
    /// list nor a string.
    #[must_use]
    pub fn normalize(self) -> Option<Vec<String>> {
        match self {
            Self::List(tags) => Some(clean_tags(tags.iter().map(String::as_str))),
            Self::Delimited(text) => Some(clean_tags(text.split(','))),
            Self::Mixed(values) => {
                let tags: Vec<String> = values.iter().map(tag_text).collect();
                Some(clean_tags(tags.iter().map(String::as_str)))
            }
            Self::Other(_) => None,
        }
    }
}

fn tag_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl From<Vec<String>> for TagList {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<&str> for TagList {
    fn from(value: &str) -> Self {
        Self::Delimited(value.to_string())
    }
}

fn clean_tags<'a>(tags: impl Iterator<Item = &'a str>) -> Vec<String> {
    tags.map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// A partial contact update as supplied by a caller
///
/// `id` and `createdAt` are not part of the schema and cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactPatch {
    /// First name
    pub first: Option<String>,
    /// Last name
    pub last: Option<String>,
    /// Company
    pub company: Option<String>,
    /// Location
    pub location: Option<String>,
    /// Avatar URL
    #[serde(alias = "avatar")]
    pub avatar_url: Option<String>,
    /// Notes
    pub notes: Option<String>,
    /// Email
    pub email: Option<String>,
    /// Phone
    pub phone: Option<String>,
    /// Twitter handle, with or without a leading `@`
    #[serde(alias = "twitter")]
    pub twitter_handle: Option<String>,
    /// Category value; empty or `"all"` means uncategorized
    pub category: Option<String>,
    /// Favorite flag in any boolean-like form
    pub favorite: Option<FlagValue>,
    /// Tags as a list or a comma-separated string
    pub tags: Option<TagList>,
}

impl ContactPatch {
    /// Empty patch
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first name
    #[must_use]
    pub fn first(mut self, value: impl Into<String>) -> Self {
        self.first = Some(value.into());
        self
    }

    /// Set the last name
    #[must_use]
    pub fn last(mut self, value: impl Into<String>) -> Self {
        self.last = Some(value.into());
        self
    }

    /// Set the company
    #[must_use]
    pub fn company(mut self, value: impl Into<String>) -> Self {
        self.company = Some(value.into());
        self
    }

    /// Set the location
    #[must_use]
    pub fn location(mut self, value: impl Into<String>) -> Self {
        self.location = Some(value.into());
        self
    }

    /// Set the avatar URL
    #[must_use]
    pub fn avatar_url(mut self, value: impl Into<String>) -> Self {
        self.avatar_url = Some(value.into());
        self
    }

    /// Set the notes
    #[must_use]
    pub fn notes(mut self, value: impl Into<String>) -> Self {
        self.notes = Some(value.into());
        self
    }

    /// Set the email
    #[must_use]
    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    /// Set the phone
    #[must_use]
    pub fn phone(mut self, value: impl Into<String>) -> Self {
        self.phone = Some(value.into());
        self
    }

    /// Set the twitter handle
    #[must_use]
    pub fn twitter_handle(mut self, value: impl Into<String>) -> Self {
        self.twitter_handle = Some(value.into());
        self
    }

    /// Set the category
    #[must_use]
    pub fn category(mut self, value: impl Into<String>) -> Self {
        self.category = Some(value.into());
        self
    }

    /// Set the favorite flag
    #[must_use]
    pub fn favorite(mut self, value: impl Into<FlagValue>) -> Self {
        self.favorite = Some(value.into());
        self
    }

    /// Set the tags
    #[must_use]
    pub fn tags(mut self, value: impl Into<TagList>) -> Self {
        self.tags = Some(value.into());
        self
    }
}

/// A normalized partial update, ready to merge into a stored contact
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    /// First name
    pub first: Option<String>,
    /// Last name
    pub last: Option<String>,
    /// Company
    pub company: Option<String>,
    /// Location
    pub location: Option<String>,
    /// Avatar URL
    pub avatar_url: Option<String>,
    /// Trimmed notes
    pub notes: Option<String>,
    /// Trimmed email
    pub email: Option<String>,
    /// Trimmed phone
    pub phone: Option<String>,
    /// Twitter handle without `@`
    pub twitter_handle: Option<String>,
    /// Category, never empty or `"all"`
    pub category: Option<String>,
    /// Coerced favorite flag
    pub favorite: Option<bool>,
    /// Cleaned tags
    pub tags: Option<Vec<String>>,
}

impl ContactUpdate {
    /// Merge the supplied fields into `contact`, leaving the rest untouched.
    pub fn apply_to(self, contact: &mut Contact) {
        fn merge<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        merge(&mut contact.first, self.first);
        merge(&mut contact.last, self.last);
        merge(&mut contact.company, self.company);
        merge(&mut contact.location, self.location);
        merge(&mut contact.avatar_url, self.avatar_url);
        merge(&mut contact.notes, self.notes);
        merge(&mut contact.email, self.email);
        merge(&mut contact.phone, self.phone);
        merge(&mut contact.twitter_handle, self.twitter_handle);
        merge(&mut contact.category, self.category);
        merge(&mut contact.favorite, self.favorite);
        merge(&mut contact.tags, self.tags);
    }

    /// Names of the fields this update touches, for logging
    #[must_use]
    pub fn field_names(&self) -> Vec<&'static str> {
        [
            ("first", self.first.is_some()),
            ("last", self.last.is_some()),
            ("company", self.company.is_some()),
            ("location", self.location.is_some()),
            ("avatarUrl", self.avatar_url.is_some()),
            ("notes", self.notes.is_some()),
            ("email", self.email.is_some()),
            ("phone", self.phone.is_some()),
            ("twitterHandle", self.twitter_handle.is_some()),
            ("category", self.category.is_some()),
            ("favorite", self.favorite.is_some()),
            ("tags", self.tags.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }
}

/// Trim a twitter handle and strip any leading `@` characters.
#[must_use]
pub fn normalize_twitter_handle(handle: &str) -> String {
    handle
        .trim_start_matches(|c: char| c == '@' || c.is_whitespace())
        .trim_end()
        .to_string()
}

/// Map empty or `"all"` to the default category; keep anything else verbatim.
#[must_use]
pub fn normalize_category(category: &str) -> String {
    if category.is_empty() || category == ALL_CATEGORIES {
        DEFAULT_CATEGORY.to_string()
    } else {
        category.to_string()
    }
}

/// Coerce a caller patch into a normalized update.
#[must_use]
pub fn normalize_patch(patch: ContactPatch) -> ContactUpdate {
    let trimmed = |value: String| value.trim().to_string();

    ContactUpdate {
        first: patch.first,
        last: patch.last,
        company: patch.company,
        location: patch.location,
        avatar_url: patch.avatar_url,
        notes: patch.notes.map(trimmed),
        email: patch.email.map(trimmed),
        phone: patch.phone.map(trimmed),
        twitter_handle: patch.twitter_handle.as_deref().map(normalize_twitter_handle),
        category: patch.category.as_deref().map(normalize_category),
        favorite: patch.favorite.as_ref().map(FlagValue::is_truthy),
        tags: patch.tags.and_then(TagList::normalize),
    }
}

/// Normalize a full record before it is stored.
///
/// Applied to freshly created contacts so the stored shape holds the same
/// invariants as updated ones.
#[must_use]
pub fn normalize_contact(mut contact: Contact) -> Contact {
    contact.twitter_handle = normalize_twitter_handle(&contact.twitter_handle);
    contact.email = contact.email.trim().to_string();
    contact.phone = contact.phone.trim().to_string();
    contact.notes = contact.notes.trim().to_string();
    contact.category = normalize_category(&contact.category);
    contact.tags = clean_tags(contact.tags.iter().map(String::as_str));
    contact
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_values() {
        assert!(FlagValue::Bool(true).is_truthy());
        assert!(FlagValue::from("true").is_truthy());
        assert!(FlagValue::from("1").is_truthy());
        assert!(!FlagValue::Bool(false).is_truthy());
        assert!(!FlagValue::from("false").is_truthy());
        assert!(!FlagValue::from("TRUE").is_truthy());
        assert!(!FlagValue::from("yes").is_truthy());
        assert!(!is_truthy(None));
    }

    #[test]
    fn test_twitter_handle() {
        assert_eq!(normalize_twitter_handle("  @@ava_codes "), "ava_codes");
        assert_eq!(normalize_twitter_handle("minhvo_dev"), "minhvo_dev");
        assert_eq!(normalize_twitter_handle("@"), "");
        assert_eq!(normalize_twitter_handle("@ @x"), "x");
    }

    #[test]
    fn test_category() {
        assert_eq!(normalize_category(""), DEFAULT_CATEGORY);
        assert_eq!(normalize_category("all"), DEFAULT_CATEGORY);
        assert_eq!(normalize_category("Work"), "Work");
        assert_eq!(normalize_category("All"), "All");
    }

    #[test]
    fn test_tags_from_string_and_list() {
        assert_eq!(
            TagList::from(" react, ,speaker ,react").normalize(),
            Some(vec!["react".to_string(), "speaker".to_string(), "react".to_string()])
        );
        assert_eq!(
            TagList::from(vec![" ux ".to_string(), String::new(), "design".to_string()]).normalize(),
            Some(vec!["ux".to_string(), "design".to_string()])
        );
    }

    #[test]
    fn test_patch_only_touches_supplied_fields() {
        let update = normalize_patch(ContactPatch::new().favorite("1").email("  a@b.c "));
        assert_eq!(update.favorite, Some(true));
        assert_eq!(update.email.as_deref(), Some("a@b.c"));
        assert_eq!(update.category, None);
        assert_eq!(update.field_names(), vec!["email", "favorite"]);
    }

    #[test]
    fn test_apply_merges_in_place() {
        let mut contact = Contact::blank("id", 10);
        contact.category = "work".to_string();
        contact.first = "Ava".to_string();

        normalize_patch(ContactPatch::new().last("Nguyen").tags("design, ux")).apply_to(&mut contact);

        assert_eq!(contact.first, "Ava");
        assert_eq!(contact.last, "Nguyen");
        assert_eq!(contact.category, "work");
        assert_eq!(contact.tags, vec!["design", "ux"]);
        assert_eq!(contact.created_at, 10);
    }

    #[test]
    fn test_patch_deserializes_aliases_and_ignores_unknown() {
        let patch: ContactPatch = serde_json::from_str(
            r#"{"twitter":"@x","avatar":"a.png","favorite":"true","tags":"a,b","id":"hijack","bogus":1}"#,
        )
        .unwrap();
        let update = normalize_patch(patch);
        assert_eq!(update.twitter_handle.as_deref(), Some("x"));
        assert_eq!(update.avatar_url.as_deref(), Some("a.png"));
        assert_eq!(update.favorite, Some(true));
        assert_eq!(update.tags, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_patch_accepts_boolean_and_list() {
        let patch: ContactPatch = serde_json::from_str(r#"{"favorite":false,"tags":[" a ",""]}"#).unwrap();
        assert_eq!(patch.favorite, Some(FlagValue::Bool(false)));
        assert_eq!(patch.tags, Some(TagList::List(vec![" a ".to_string(), String::new()])));
    }

    #[test]
    fn test_patch_coerces_other_json_shapes() {
        let patch: ContactPatch = serde_json::from_str(r#"{"favorite":1,"tags":["a",2," ",true]}"#).unwrap();
        let update = normalize_patch(patch);
        assert_eq!(update.favorite, Some(false));
        assert_eq!(
            update.tags,
            Some(vec!["a".to_string(), "2".to_string(), "true".to_string()])
        );

        let patch: ContactPatch = serde_json::from_str(r#"{"favorite":[1],"tags":7}"#).unwrap();
        let update = normalize_patch(patch);
        assert_eq!(update.favorite, Some(false));
        assert_eq!(update.tags, None);
    }

    #[test]
    fn test_normalize_contact() {
        let mut contact = Contact::blank("id", 0);
        contact.category = "all".to_string();
        contact.twitter_handle = "@@h ".to_string();
        contact.tags = vec![" ".to_string(), "t".to_string()];
        let contact = normalize_contact(contact);
        assert_eq!(contact.category, DEFAULT_CATEGORY);
        assert_eq!(contact.twitter_handle, "h");
        assert_eq!(contact.tags, vec!["t"]);
    }
}
