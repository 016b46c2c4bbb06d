//! Remote-backed repository implementations.
//!
//! Thin adapters from the repository traits onto [`RemoteClient`]. Input
//! validation runs client-side with the same rules as the local variant,
//! so callers see identical `Validation` errors regardless of backend.
//! The category delete cascade is the backend's responsibility here.

use std::sync::Arc;

use super::bookmark::{validate_draft, validate_patch, BookmarkRepository};
use super::category::CategoryRepository;
use crate::remote::RemoteClient;
use crate::types::bookmark::{Bookmark, BookmarkDraft, BookmarkPatch};
use crate::types::category::{Category, CategoryPatch};
use crate::types::errors::RepositoryError;

/// Bookmark repository delegating to the remote backend.
pub struct RemoteBookmarkRepository {
    client: Arc<RemoteClient>,
    owner_id: String,
}

impl RemoteBookmarkRepository {
    pub fn new(client: Arc<RemoteClient>, owner_id: impl Into<String>) -> Self {
        Self {
            client,
            owner_id: owner_id.into(),
        }
    }
}

impl BookmarkRepository for RemoteBookmarkRepository {
    fn list(&self) -> Result<Vec<Bookmark>, RepositoryError> {
        self.client.fetch_bookmarks(&self.owner_id)
    }

    fn create(&mut self, draft: &BookmarkDraft) -> Result<Bookmark, RepositoryError> {
        validate_draft(draft)?;
        self.client.create_bookmark(draft, &self.owner_id)
    }

    fn update(&mut self, id: &str, patch: &BookmarkPatch) -> Result<Bookmark, RepositoryError> {
        validate_patch(patch)?;
        self.client.update_bookmark_by_id(id, patch)
    }

    fn delete(&mut self, id: &str) -> Result<(), RepositoryError> {
        self.client.delete_bookmark_by_id(id)
    }

    fn set_favorite(&mut self, id: &str, favorite: bool) -> Result<Bookmark, RepositoryError> {
        self.update(id, &BookmarkPatch::favorite(favorite))
    }
}

/// Category repository delegating to the remote backend.
pub struct RemoteCategoryRepository {
    client: Arc<RemoteClient>,
    owner_id: String,
}

impl RemoteCategoryRepository {
    pub fn new(client: Arc<RemoteClient>, owner_id: impl Into<String>) -> Self {
        Self {
            client,
            owner_id: owner_id.into(),
        }
    }
}

impl CategoryRepository for RemoteCategoryRepository {
    fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        self.client.fetch_categories(&self.owner_id)
    }

    fn create(&mut self, name: &str, color: &str) -> Result<Category, RepositoryError> {
        if name.trim().is_empty() {
            return Err(RepositoryError::Validation(
                "Category name must not be empty".to_string(),
            ));
        }
        self.client.create_category(name, color, &self.owner_id)
    }

    fn update(&mut self, id: &str, patch: &CategoryPatch) -> Result<Category, RepositoryError> {
        if let Some(name) = &patch.name {
            if name.trim().is_empty() {
                return Err(RepositoryError::Validation(
                    "Category name must not be empty".to_string(),
                ));
            }
        }
        self.client.update_category_by_id(id, patch)
    }

    fn delete(&mut self, id: &str) -> Result<(), RepositoryError> {
        self.client.delete_category_by_id(id)
    }
}
