//! Bookmark repository for markstash.
//!
//! Implements `BookmarkRepository` — CRUD over a user's bookmark collection,
//! backed by the key-value store. Every mutation reads the whole collection,
//! applies the change, and rewrites the whole collection: O(n) per call,
//! fine for a personal bookmark list, not built for thousands of records.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use url::Url;
use uuid::Uuid;

use crate::store::kv::{self, KeyValueStore};
use crate::types::bookmark::{Bookmark, BookmarkDraft, BookmarkPatch};
use crate::types::errors::RepositoryError;

/// Trait defining bookmark CRUD operations. Implemented by the local
/// store-backed repository and the remote-backend repository.
pub trait BookmarkRepository {
    /// Lists the owner's bookmarks in storage (insertion) order.
    fn list(&self) -> Result<Vec<Bookmark>, RepositoryError>;
    /// Creates a bookmark from a draft, assigning id and timestamps.
    fn create(&mut self, draft: &BookmarkDraft) -> Result<Bookmark, RepositoryError>;
    /// Merges the given fields into the record matching `id`.
    fn update(&mut self, id: &str, patch: &BookmarkPatch) -> Result<Bookmark, RepositoryError>;
    /// Removes the record matching `id`. No-op if it does not exist.
    fn delete(&mut self, id: &str) -> Result<(), RepositoryError>;
    /// Convenience specialization of `update` restricted to `favorite`.
    fn set_favorite(&mut self, id: &str, favorite: bool) -> Result<Bookmark, RepositoryError>;
}

/// Rejects empty titles.
pub(crate) fn validate_title(title: &str) -> Result<(), RepositoryError> {
    if title.trim().is_empty() {
        return Err(RepositoryError::Validation(
            "Title must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Rejects empty or non-absolute URLs. `Url::parse` only accepts absolute
/// URLs with a scheme, which is exactly the contract.
pub(crate) fn validate_url(url: &str) -> Result<(), RepositoryError> {
    if url.trim().is_empty() {
        return Err(RepositoryError::Validation(
            "URL must not be empty".to_string(),
        ));
    }
    Url::parse(url)
        .map_err(|e| RepositoryError::Validation(format!("Invalid URL '{}': {}", url, e)))?;
    Ok(())
}

pub(crate) fn validate_draft(draft: &BookmarkDraft) -> Result<(), RepositoryError> {
    validate_title(&draft.title)?;
    validate_url(&draft.url)
}

pub(crate) fn validate_patch(patch: &BookmarkPatch) -> Result<(), RepositoryError> {
    if let Some(title) = &patch.title {
        validate_title(title)?;
    }
    if let Some(url) = &patch.url {
        validate_url(url)?;
    }
    Ok(())
}

/// Bookmark repository backed by the local key-value store, scoped to one
/// owner's collection key.
pub struct LocalBookmarkRepository {
    store: Arc<dyn KeyValueStore>,
    owner_id: String,
}

impl LocalBookmarkRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, owner_id: impl Into<String>) -> Self {
        Self {
            store,
            owner_id: owner_id.into(),
        }
    }

    fn collection_key(&self) -> String {
        kv::bookmarks_key(&self.owner_id)
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn apply_patch(bookmark: &mut Bookmark, patch: &BookmarkPatch) {
        if let Some(title) = &patch.title {
            bookmark.title = title.clone();
        }
        if let Some(url) = &patch.url {
            bookmark.url = url.clone();
        }
        if let Some(description) = &patch.description {
            bookmark.description = description.clone();
        }
        if let Some(category) = &patch.category {
            bookmark.category = category.clone();
        }
        if let Some(favorite) = patch.favorite {
            bookmark.favorite = favorite;
        }
    }
}

impl BookmarkRepository for LocalBookmarkRepository {
    fn list(&self) -> Result<Vec<Bookmark>, RepositoryError> {
        Ok(kv::read_collection(self.store.as_ref(), &self.collection_key())?)
    }

    fn create(&mut self, draft: &BookmarkDraft) -> Result<Bookmark, RepositoryError> {
        validate_draft(draft)?;

        let now = Self::now();
        let bookmark = Bookmark {
            id: Uuid::new_v4().to_string(),
            title: draft.title.clone(),
            url: draft.url.clone(),
            description: draft.description.clone(),
            category: draft.category.clone(),
            created_at: now,
            updated_at: now,
            favorite: draft.favorite,
            owner_id: self.owner_id.clone(),
        };

        let key = self.collection_key();
        let mut bookmarks: Vec<Bookmark> = kv::read_collection(self.store.as_ref(), &key)?;
        bookmarks.push(bookmark.clone());
        kv::write_collection(self.store.as_ref(), &key, &bookmarks)?;

        Ok(bookmark)
    }

    fn update(&mut self, id: &str, patch: &BookmarkPatch) -> Result<Bookmark, RepositoryError> {
        validate_patch(patch)?;

        let key = self.collection_key();
        let mut bookmarks: Vec<Bookmark> = kv::read_collection(self.store.as_ref(), &key)?;
        let bookmark = bookmarks
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;

        Self::apply_patch(bookmark, patch);
        bookmark.updated_at = Self::now();
        let updated = bookmark.clone();

        kv::write_collection(self.store.as_ref(), &key, &bookmarks)?;
        Ok(updated)
    }

    fn delete(&mut self, id: &str) -> Result<(), RepositoryError> {
        let key = self.collection_key();
        let mut bookmarks: Vec<Bookmark> = kv::read_collection(self.store.as_ref(), &key)?;
        let before = bookmarks.len();
        bookmarks.retain(|b| b.id != id);

        // Idempotent: a miss is not an error and skips the rewrite.
        if bookmarks.len() != before {
            kv::write_collection(self.store.as_ref(), &key, &bookmarks)?;
        }
        Ok(())
    }

    fn set_favorite(&mut self, id: &str, favorite: bool) -> Result<Bookmark, RepositoryError> {
        self.update(id, &BookmarkPatch::favorite(favorite))
    }
}
