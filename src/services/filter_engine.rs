//! Filter engine: derives the visible bookmark list from the full
//! collection, the active category, and a free-text query.
//!
//! Pure and referentially transparent — no persistence access, no hidden
//! state. The same inputs always produce the same output, in input order.

use crate::types::bookmark::Bookmark;

/// Filters `bookmarks` by category and query, AND-combined.
///
/// The category filter is an exact id match (no hierarchy). The query is
/// lowercased and matched as a substring against the lowercased title,
/// description (an absent description never matches), or URL. An empty
/// query with no active category is the identity.
pub fn filter_bookmarks(
    bookmarks: &[Bookmark],
    active_category: Option<&str>,
    query: &str,
) -> Vec<Bookmark> {
    let needle = query.to_lowercase();
    bookmarks
        .iter()
        .filter(|b| matches_category(b, active_category) && matches_query(b, &needle))
        .cloned()
        .collect()
}

fn matches_category(bookmark: &Bookmark, active_category: Option<&str>) -> bool {
    match active_category {
        Some(id) => bookmark.category.as_deref() == Some(id),
        None => true,
    }
}

fn matches_query(bookmark: &Bookmark, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    bookmark.title.to_lowercase().contains(needle)
        || bookmark
            .description
            .as_ref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
        || bookmark.url.to_lowercase().contains(needle)
}
