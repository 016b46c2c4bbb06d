//! Category repository for markstash.
//!
//! Mirrors the bookmark repository's read-modify-write shape and owns the
//! delete cascade: bookmarks referencing a deleted category are reassigned
//! to `None` strictly before the category row is removed. The two writes
//! are not atomic; if the second fails, the result is a harmless orphaned
//! category rather than a dangling bookmark reference.

use std::sync::Arc;

use uuid::Uuid;

use crate::store::kv::{self, KeyValueStore};
use crate::types::bookmark::Bookmark;
use crate::types::category::{Category, CategoryPatch};
use crate::types::errors::RepositoryError;

/// Trait defining category CRUD operations.
pub trait CategoryRepository {
    /// Lists the owner's categories in storage order.
    fn list(&self) -> Result<Vec<Category>, RepositoryError>;
    /// Creates a category. Fails validation on an empty name.
    fn create(&mut self, name: &str, color: &str) -> Result<Category, RepositoryError>;
    /// Merges the given fields into the record matching `id`.
    fn update(&mut self, id: &str, patch: &CategoryPatch) -> Result<Category, RepositoryError>;
    /// Removes the category and reassigns its bookmarks to uncategorized.
    fn delete(&mut self, id: &str) -> Result<(), RepositoryError>;
}

fn validate_name(name: &str) -> Result<(), RepositoryError> {
    if name.trim().is_empty() {
        return Err(RepositoryError::Validation(
            "Category name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Category repository backed by the local key-value store, scoped to one
/// owner. Holds the bookmark collection key as well so the delete cascade
/// can rewrite it.
pub struct LocalCategoryRepository {
    store: Arc<dyn KeyValueStore>,
    owner_id: String,
}

impl LocalCategoryRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, owner_id: impl Into<String>) -> Self {
        Self {
            store,
            owner_id: owner_id.into(),
        }
    }

    fn collection_key(&self) -> String {
        kv::categories_key(&self.owner_id)
    }

    /// Reassigns every bookmark referencing `category_id` to uncategorized
    /// and persists the bookmark collection. Must complete before the
    /// category row is removed.
    fn cascade_unassign(&self, category_id: &str) -> Result<(), RepositoryError> {
        let key = kv::bookmarks_key(&self.owner_id);
        let mut bookmarks: Vec<Bookmark> = kv::read_collection(self.store.as_ref(), &key)?;
        let mut changed = false;
        for bookmark in &mut bookmarks {
            if bookmark.category.as_deref() == Some(category_id) {
                bookmark.category = None;
                changed = true;
            }
        }
        if changed {
            kv::write_collection(self.store.as_ref(), &key, &bookmarks)?;
        }
        Ok(())
    }
}

impl CategoryRepository for LocalCategoryRepository {
    fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        Ok(kv::read_collection(self.store.as_ref(), &self.collection_key())?)
    }

    fn create(&mut self, name: &str, color: &str) -> Result<Category, RepositoryError> {
        validate_name(name)?;

        let category = Category {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            color: color.to_string(),
        };

        let key = self.collection_key();
        let mut categories: Vec<Category> = kv::read_collection(self.store.as_ref(), &key)?;
        categories.push(category.clone());
        kv::write_collection(self.store.as_ref(), &key, &categories)?;

        Ok(category)
    }

    fn update(&mut self, id: &str, patch: &CategoryPatch) -> Result<Category, RepositoryError> {
        if let Some(name) = &patch.name {
            validate_name(name)?;
        }

        let key = self.collection_key();
        let mut categories: Vec<Category> = kv::read_collection(self.store.as_ref(), &key)?;
        let category = categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;

        if let Some(name) = &patch.name {
            category.name = name.clone();
        }
        if let Some(color) = &patch.color {
            category.color = color.clone();
        }
        let updated = category.clone();

        kv::write_collection(self.store.as_ref(), &key, &categories)?;
        Ok(updated)
    }

    fn delete(&mut self, id: &str) -> Result<(), RepositoryError> {
        // Cascade first: no bookmark may ever point at a deleted category.
        self.cascade_unassign(id)?;

        let key = self.collection_key();
        let mut categories: Vec<Category> = kv::read_collection(self.store.as_ref(), &key)?;
        let before = categories.len();
        categories.retain(|c| c.id != id);

        if categories.len() != before {
            kv::write_collection(self.store.as_ref(), &key, &categories)?;
        }
        Ok(())
    }
}
