//! Unit tests for the store-backed category repository, including the
//! delete cascade and its failure ordering.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use markstash::repositories::{
    BookmarkRepository, CategoryRepository, LocalBookmarkRepository, LocalCategoryRepository,
};
use markstash::store::{KeyValueStore, LocalStore};
use markstash::types::bookmark::BookmarkDraft;
use markstash::types::category::CategoryPatch;
use markstash::types::errors::{RepositoryError, StoreError};

fn memory_store() -> Arc<dyn KeyValueStore> {
    Arc::new(LocalStore::open_in_memory().unwrap())
}

fn draft_in(category: Option<&str>) -> BookmarkDraft {
    BookmarkDraft {
        title: "Issue tracker".to_string(),
        url: "https://example.com/issues".to_string(),
        description: None,
        category: category.map(str::to_string),
        favorite: false,
    }
}

#[test]
fn test_create_and_list() {
    let mut repo = LocalCategoryRepository::new(memory_store(), "u1");
    let work = repo.create("Work", "#1976d2").unwrap();

    assert!(!work.id.is_empty());
    assert_eq!(work.name, "Work");
    assert_eq!(work.color, "#1976d2");
    assert_eq!(repo.list().unwrap(), vec![work]);
}

#[test]
fn test_create_rejects_empty_name() {
    let mut repo = LocalCategoryRepository::new(memory_store(), "u1");
    assert!(matches!(
        repo.create("  ", "#fff"),
        Err(RepositoryError::Validation(_))
    ));
    assert!(repo.list().unwrap().is_empty());
}

#[test]
fn test_update_edits_in_place() {
    let mut repo = LocalCategoryRepository::new(memory_store(), "u1");
    let work = repo.create("Work", "#1976d2").unwrap();

    let patch = CategoryPatch {
        name: Some("Job".to_string()),
        color: None,
    };
    let updated = repo.update(&work.id, &patch).unwrap();

    assert_eq!(updated.id, work.id);
    assert_eq!(updated.name, "Job");
    assert_eq!(updated.color, "#1976d2");

    // The edited record replaces the original; nothing is dropped.
    let listed = repo.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Job");
}

#[test]
fn test_update_unknown_id_is_not_found() {
    let mut repo = LocalCategoryRepository::new(memory_store(), "u1");
    let patch = CategoryPatch {
        name: Some("x".to_string()),
        color: None,
    };
    assert!(matches!(
        repo.update("missing", &patch),
        Err(RepositoryError::NotFound(_))
    ));
}

#[test]
fn test_delete_is_idempotent() {
    let mut repo = LocalCategoryRepository::new(memory_store(), "u1");
    let work = repo.create("Work", "#1976d2").unwrap();

    repo.delete(&work.id).unwrap();
    assert!(repo.list().unwrap().is_empty());
    repo.delete(&work.id).unwrap();
}

#[test]
fn test_delete_cascades_to_bookmarks() {
    let store = memory_store();
    let mut categories = LocalCategoryRepository::new(store.clone(), "u1");
    let mut bookmarks = LocalBookmarkRepository::new(store, "u1");

    let work = categories.create("Work", "#1976d2").unwrap();
    let other = categories.create("Play", "#00aa00").unwrap();
    bookmarks.create(&draft_in(Some(&work.id))).unwrap();
    bookmarks.create(&draft_in(Some(&other.id))).unwrap();
    bookmarks.create(&draft_in(None)).unwrap();

    categories.delete(&work.id).unwrap();

    let after = bookmarks.list().unwrap();
    assert_eq!(after.len(), 3);
    assert!(after[0].category.is_none());
    assert_eq!(after[1].category.as_deref(), Some(other.id.as_str()));
    assert!(after[2].category.is_none());
    assert_eq!(categories.list().unwrap(), vec![other]);
}

/// Store wrapper that, once armed, rejects writes to keys with the given
/// prefix. Reads and other writes pass through.
struct FlakyStore {
    inner: Arc<dyn KeyValueStore>,
    fail_prefix: &'static str,
    armed: AtomicBool,
}

impl FlakyStore {
    fn new(inner: Arc<dyn KeyValueStore>, fail_prefix: &'static str) -> Self {
        Self {
            inner,
            fail_prefix,
            armed: AtomicBool::new(false),
        }
    }

    fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }
}

impl KeyValueStore for FlakyStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.armed.load(Ordering::SeqCst) && key.starts_with(self.fail_prefix) {
            return Err(StoreError::Unavailable("write rejected".to_string()));
        }
        self.inner.write(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.inner.delete(key)
    }
}

#[test]
fn test_cascade_failure_leaves_orphaned_category_not_dangling_bookmark() {
    let flaky = Arc::new(FlakyStore::new(memory_store(), "categories:"));
    let store: Arc<dyn KeyValueStore> = flaky.clone();
    let mut categories = LocalCategoryRepository::new(store.clone(), "u1");
    let mut bookmarks = LocalBookmarkRepository::new(store, "u1");

    let work = categories.create("Work", "#1976d2").unwrap();
    bookmarks.create(&draft_in(Some(&work.id))).unwrap();

    // Bookmark write succeeds, category write fails: delete must error
    // with the bookmark already unassigned and the category still present.
    flaky.arm();
    assert!(categories.delete(&work.id).is_err());

    assert!(bookmarks.list().unwrap()[0].category.is_none());
    assert_eq!(categories.list().unwrap(), vec![work]);
}

#[test]
fn test_owners_are_namespaced() {
    let store = memory_store();
    let mut alice = LocalCategoryRepository::new(store.clone(), "alice");
    let mut bob = LocalCategoryRepository::new(store, "bob");

    alice.create("Work", "#111111").unwrap();
    assert_eq!(alice.list().unwrap().len(), 1);
    assert!(bob.list().unwrap().is_empty());
}
