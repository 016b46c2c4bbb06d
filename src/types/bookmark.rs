use serde::{Deserialize, Serialize};

/// Represents a saved bookmark.
///
/// `category` is nullable: a bookmark whose category was deleted is treated
/// as uncategorized. A dangling category reference is tolerated because the
/// delete cascade runs as two separate store writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(default)]
    pub favorite: bool,
    pub owner_id: String,
}

/// Input for creating a bookmark. The repository assigns id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkDraft {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub favorite: bool,
}

/// Partial bookmark update with merge semantics: `None` leaves a field
/// untouched. `description` and `category` use a double `Option` so an
/// explicit clear (`Some(None)`) is distinct from "not supplied".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookmarkPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
}

impl BookmarkPatch {
    /// Shorthand for the favorite-only patch used by `set_favorite`.
    pub fn favorite(value: bool) -> Self {
        Self {
            favorite: Some(value),
            ..Self::default()
        }
    }
}
