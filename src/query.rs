//! Query normalization.
//!
//! A listing request arrives as a [`ContactQuery`]: nothing, a raw search
//! string, or structured [`QueryOptions`] that may use any of several field
//! aliases. Every form normalizes to one [`QueryDescriptor`], the only input
//! the filter pipeline and sort engine accept.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::normalize::{is_truthy, FlagValue};

/// Named sort strategies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Last name, then first name
    #[default]
    Last,
    /// First name, then last name
    First,
    /// Lower-cased company, then last and first name
    Company,
    /// Newest first
    Recent,
    /// Favorites first, then last name
    Favorite,
}

impl SortKey {
    /// All strategies in display order
    pub const ALL: [Self; 5] = [Self::Last, Self::First, Self::Company, Self::Recent, Self::Favorite];

    /// Parse a sort name; unknown names fall back to [`SortKey::Last`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "first" => Self::First,
            "company" => Self::Company,
            "recent" => Self::Recent,
            "favorite" => Self::Favorite,
            _ => Self::Last,
        }
    }

    /// Canonical name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Last => "last",
            Self::First => "first",
            Self::Company => "company",
            Self::Recent => "recent",
            Self::Favorite => "favorite",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical filter/sort descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryDescriptor {
    /// Search term, empty for none
    pub q: String,
    /// Keep favorites only
    pub favorite_only: bool,
    /// Category filter, empty or `"all"` for none
    pub category: String,
    /// Sort strategy
    pub sort_by: SortKey,
    /// Tag substring filter, empty for none
    pub tag: String,
}

impl QueryDescriptor {
    /// Stable key identifying this query, used to memoize simulated latency
    #[must_use]
    pub fn cache_key(&self) -> String {
        let body = serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"));
        format!("getContacts:{body}")
    }
}

/// Structured query options
///
/// Each canonical field accepts several aliases. When more than one alias is
/// set the first one in declaration order wins: `q` over `query`,
/// `favoriteOnly` over `onlyFavorites` over `favorite`, `category` over
/// `categoryFilter`, `sortBy` over `sort`, `tag` over `tagFilter`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryOptions {
    /// Search term
    pub q: Option<String>,
    /// Alias of `q`
    pub query: Option<String>,
    /// Favorites only
    pub favorite_only: Option<FlagValue>,
    /// Alias of `favoriteOnly`
    pub only_favorites: Option<FlagValue>,
    /// Alias of `favoriteOnly`
    pub favorite: Option<FlagValue>,
    /// Category filter
    pub category: Option<String>,
    /// Alias of `category`
    pub category_filter: Option<String>,
    /// Sort strategy name
    pub sort_by: Option<String>,
    /// Alias of `sortBy`
    pub sort: Option<String>,
    /// Tag filter
    pub tag: Option<String>,
    /// Alias of `tag`
    pub tag_filter: Option<String>,
}

impl QueryOptions {
    /// Empty options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term
    #[must_use]
    pub fn q(mut self, value: impl Into<String>) -> Self {
        self.q = Some(value.into());
        self
    }

    /// Set the favorites-only flag
    #[must_use]
    pub fn favorite_only(mut self, value: impl Into<FlagValue>) -> Self {
        self.favorite_only = Some(value.into());
        self
    }

    /// Set the category filter
    #[must_use]
    pub fn category(mut self, value: impl Into<String>) -> Self {
        self.category = Some(value.into());
        self
    }

    /// Set the sort strategy by name
    #[must_use]
    pub fn sort_by(mut self, value: impl Into<String>) -> Self {
        self.sort_by = Some(value.into());
        self
    }

    /// Set the tag filter
    #[must_use]
    pub fn tag(mut self, value: impl Into<String>) -> Self {
        self.tag = Some(value.into());
        self
    }

    /// Build options from URL-style parameters.
    ///
    /// Recognised names are `q`, `favorite`, `category`, `sort` and `tag`;
    /// anything else is ignored. A repeated name keeps its last value.
    #[must_use]
    pub fn from_params<'a, I>(params: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = Self::default();
        for (name, value) in params {
            match name {
                "q" => options.query = Some(value.to_string()),
                "favorite" => options.favorite = Some(FlagValue::from(value)),
                "category" => options.category_filter = Some(value.to_string()),
                "sort" => options.sort = Some(value.to_string()),
                "tag" => options.tag_filter = Some(value.to_string()),
                _ => {}
            }
        }
        options
    }

    /// Collapse aliases into the canonical descriptor.
    #[must_use]
    pub fn normalize(self) -> QueryDescriptor {
        let favorite = self.favorite_only.or(self.only_favorites).or(self.favorite);
        let sort_by = self.sort_by.or(self.sort);

        QueryDescriptor {
            q: self.q.or(self.query).unwrap_or_default(),
            favorite_only: is_truthy(favorite.as_ref()),
            category: self.category.or(self.category_filter).unwrap_or_default(),
            sort_by: sort_by.as_deref().map_or(SortKey::Last, SortKey::parse),
            tag: self.tag.or(self.tag_filter).unwrap_or_default(),
        }
    }
}

/// A listing request in any accepted form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContactQuery {
    /// No filters, default sort
    #[default]
    All,
    /// Raw search text, default sort
    Search(String),
    /// Structured options
    Filter(QueryOptions),
}

impl ContactQuery {
    /// Normalize to the canonical descriptor. Never fails.
    #[must_use]
    pub fn normalize(self) -> QueryDescriptor {
        match self {
            Self::All => QueryDescriptor::default(),
            Self::Search(q) => QueryDescriptor {
                q,
                ..QueryDescriptor::default()
            },
            Self::Filter(options) => options.normalize(),
        }
    }
}

impl From<&str> for ContactQuery {
    fn from(value: &str) -> Self {
        Self::Search(value.to_string())
    }
}

impl From<String> for ContactQuery {
    fn from(value: String) -> Self {
        Self::Search(value)
    }
}

impl From<QueryOptions> for ContactQuery {
    fn from(value: QueryOptions) -> Self {
        Self::Filter(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for ContactQuery {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::All, Into::into)
    }
}
