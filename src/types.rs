use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Account metadata returned by `GET /users/{handle}`.
///
/// Only the fields the card shows are kept; everything else in the
/// payload is ignored.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Profile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

impl Profile {
    /// Display name, or the handle when the account has none.
    pub fn display_name(&self) -> &str {
        present(&self.name).unwrap_or(&self.login)
    }
}

/// One entry of `GET /users/{handle}/repos`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RepositorySummary {
    pub id: u64,
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

/// A (language, occurrences) pair of the language histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCount {
    pub name: String,
    pub value: u32,
}

/// Treats `None` and blank strings alike; the API sends `""` for unset blogs.
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
