//! markstash — personal bookmark manager core.
//!
//! Entry point: runs an interactive console demo of every component over
//! an in-memory store.

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║               markstash v{} — Demo Mode                   ║", env!("CARGO_PKG_VERSION"));
    println!("║     Bookmark manager core: categories, filtering, auth     ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_store();
    demo_password_hash();
    demo_auth();
    demo_bookmarks();
    demo_categories();
    demo_filter();
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All 7 components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_store() {
    use markstash::store::{KeyValueStore, LocalStore};
    section("Key-Value Store");

    let store = LocalStore::open_in_memory().expect("Failed to open store");
    store.write("demo", "[1,2,3]").unwrap();
    println!("  Wrote payload under 'demo': {}", store.read("demo").unwrap().unwrap());
    println!("  Schema version: {}", store.schema_version());
    println!("  ✓ LocalStore + migrations OK");
    println!();
}

fn demo_password_hash() {
    use markstash::services::{PasswordHasher, PasswordHasherTrait};
    section("Password Hashing");

    let hasher = PasswordHasher::new();
    let stored = hasher.hash_password("my-secret-password").unwrap();
    println!("  Derived PBKDF2 hash ({} chars, salt {} chars)", stored.hash.len(), stored.salt.len());
    assert!(hasher.verify_password("my-secret-password", &stored.salt, &stored.hash));
    assert!(!hasher.verify_password("wrong", &stored.salt, &stored.hash));
    println!("  Verified correct password, rejected wrong one");
    println!("  ✓ PasswordHasher OK");
    println!();
}

fn demo_auth() {
    use markstash::services::{AuthService, LocalAuthService};
    use markstash::store::{KeyValueStore, LocalStore};
    use std::sync::Arc;
    section("Auth Service");

    let store: Arc<dyn KeyValueStore> = Arc::new(LocalStore::open_in_memory().unwrap());
    let mut auth = LocalAuthService::new(store);

    let user = auth.sign_up("demo@example.com", "hunter2").unwrap();
    println!("  Signed up: {} (id {})", user.email, user.id);

    let duplicate = auth.sign_up("demo@example.com", "other");
    println!("  Duplicate sign-up rejected: {}", duplicate.unwrap_err());

    auth.sign_out().unwrap();
    assert!(auth.current_user().unwrap().is_none());
    let user = auth.sign_in("demo@example.com", "hunter2").unwrap();
    println!("  Signed back in: {}", user.email);
    println!("  ✓ AuthService OK");
    println!();
}

fn demo_bookmarks() {
    use markstash::repositories::{BookmarkRepository, LocalBookmarkRepository};
    use markstash::store::{KeyValueStore, LocalStore};
    use markstash::types::bookmark::{BookmarkDraft, BookmarkPatch};
    use std::sync::Arc;
    section("Bookmark Repository");

    let store: Arc<dyn KeyValueStore> = Arc::new(LocalStore::open_in_memory().unwrap());
    let mut repo = LocalBookmarkRepository::new(store, "demo-user");

    let bookmark = repo
        .create(&BookmarkDraft {
            title: "The Rust Book".to_string(),
            url: "https://doc.rust-lang.org/book/".to_string(),
            description: Some("Learn Rust".to_string()),
            category: None,
            favorite: false,
        })
        .unwrap();
    println!("  Created bookmark '{}' ({})", bookmark.title, bookmark.id);

    let updated = repo.set_favorite(&bookmark.id, true).unwrap();
    println!("  Marked favorite: {}", updated.favorite);

    let renamed = repo
        .update(
            &bookmark.id,
            &BookmarkPatch {
                title: Some("The Book".to_string()),
                ..BookmarkPatch::default()
            },
        )
        .unwrap();
    println!("  Renamed to '{}'", renamed.title);
    println!("  Listing {} bookmark(s)", repo.list().unwrap().len());

    repo.delete(&bookmark.id).unwrap();
    repo.delete(&bookmark.id).unwrap(); // idempotent
    println!("  Deleted (twice, second is a no-op)");
    println!("  ✓ BookmarkRepository OK");
    println!();
}

fn demo_categories() {
    use markstash::repositories::{
        BookmarkRepository, CategoryRepository, LocalBookmarkRepository, LocalCategoryRepository,
    };
    use markstash::store::{KeyValueStore, LocalStore};
    use markstash::types::bookmark::BookmarkDraft;
    use std::sync::Arc;
    section("Category Repository + Delete Cascade");

    let store: Arc<dyn KeyValueStore> = Arc::new(LocalStore::open_in_memory().unwrap());
    let mut categories = LocalCategoryRepository::new(store.clone(), "demo-user");
    let mut bookmarks = LocalBookmarkRepository::new(store, "demo-user");

    let work = categories.create("Work", "#1976d2").unwrap();
    println!("  Created category '{}' ({})", work.name, work.color);

    let bookmark = bookmarks
        .create(&BookmarkDraft {
            title: "Issue tracker".to_string(),
            url: "https://example.com/issues".to_string(),
            description: None,
            category: Some(work.id.clone()),
            favorite: false,
        })
        .unwrap();
    println!("  Bookmark assigned to category: {:?}", bookmark.category);

    categories.delete(&work.id).unwrap();
    let after = bookmarks.list().unwrap();
    println!("  After cascade, bookmark category: {:?}", after[0].category);
    assert!(after[0].category.is_none());
    println!("  ✓ CategoryRepository OK");
    println!();
}

fn demo_filter() {
    use markstash::services::filter_bookmarks;
    use markstash::types::bookmark::Bookmark;
    section("Filter Engine");

    let all = vec![
        Bookmark {
            id: "1".to_string(),
            title: "Foo Bar".to_string(),
            url: "https://x.com".to_string(),
            description: None,
            category: Some("catA".to_string()),
            created_at: 0,
            updated_at: 0,
            favorite: false,
            owner_id: "u".to_string(),
        },
        Bookmark {
            id: "2".to_string(),
            title: "baz".to_string(),
            url: "https://foo.com".to_string(),
            description: None,
            category: None,
            created_at: 0,
            updated_at: 0,
            favorite: true,
            owner_id: "u".to_string(),
        },
    ];

    println!("  filter(all, None, \"\") -> {} results", filter_bookmarks(&all, None, "").len());
    println!("  filter(all, Some(catA), \"\") -> {} result", filter_bookmarks(&all, Some("catA"), "").len());
    println!("  filter(all, None, \"foo\") -> {} results", filter_bookmarks(&all, None, "foo").len());
    println!("  ✓ Filter engine OK");
    println!();
}

fn demo_app_core() {
    use markstash::app::App;
    use markstash::types::bookmark::BookmarkDraft;
    section("App Core");

    let mut app = App::open_in_memory().expect("Failed to init app");
    assert!(app.bookmarks().is_err());
    println!("  Repositories gated before sign-in");

    app.sign_up("demo@example.com", "hunter2").unwrap();
    println!("  Signed up as {}", app.user().unwrap().email);

    app.bookmarks()
        .unwrap()
        .create(&BookmarkDraft {
            title: "crates.io".to_string(),
            url: "https://crates.io".to_string(),
            description: None,
            category: None,
            favorite: false,
        })
        .unwrap();
    println!("  Created a bookmark through the app gate");

    app.sign_out().unwrap();
    assert!(app.bookmarks().is_err());
    println!("  Repositories gated again after sign-out");
    println!("  ✓ App core OK");
    println!();
}
