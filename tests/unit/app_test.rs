//! Unit tests for the app core: backend wiring, the session gate, and
//! session restoration across restarts.

use markstash::app::App;
use markstash::config::{AppConfig, StorageBackend};
use markstash::types::bookmark::BookmarkDraft;
use markstash::types::errors::AuthError;

fn sample_draft() -> BookmarkDraft {
    BookmarkDraft {
        title: "crates.io".to_string(),
        url: "https://crates.io".to_string(),
        description: None,
        category: None,
        favorite: false,
    }
}

#[test]
fn test_repositories_gated_before_sign_in() {
    let mut app = App::open_in_memory().unwrap();
    assert!(matches!(app.bookmarks(), Err(AuthError::NotAuthenticated)));
    assert!(matches!(app.categories(), Err(AuthError::NotAuthenticated)));
    assert!(app.user().is_none());
}

#[test]
fn test_sign_up_opens_the_session() {
    let mut app = App::open_in_memory().unwrap();
    let user = app.sign_up("a@example.com", "hunter2").unwrap();

    assert_eq!(app.user().map(|u| u.id.as_str()), Some(user.id.as_str()));
    let bookmark = app.bookmarks().unwrap().create(&sample_draft()).unwrap();
    assert_eq!(bookmark.owner_id, user.id);
    app.categories().unwrap().create("Work", "#1976d2").unwrap();
}

#[test]
fn test_sign_out_gates_repositories_again() {
    let mut app = App::open_in_memory().unwrap();
    app.sign_up("a@example.com", "hunter2").unwrap();

    app.sign_out().unwrap();
    assert!(app.user().is_none());
    assert!(matches!(app.bookmarks(), Err(AuthError::NotAuthenticated)));
}

#[test]
fn test_sign_in_reopens_the_session_with_existing_data() {
    let mut app = App::open_in_memory().unwrap();
    app.sign_up("a@example.com", "hunter2").unwrap();
    app.bookmarks().unwrap().create(&sample_draft()).unwrap();
    app.sign_out().unwrap();

    app.sign_in("a@example.com", "hunter2").unwrap();
    assert_eq!(app.bookmarks().unwrap().list().unwrap().len(), 1);
}

#[test]
fn test_users_see_only_their_own_data() {
    let mut app = App::open_in_memory().unwrap();
    app.sign_up("a@example.com", "hunter2").unwrap();
    app.bookmarks().unwrap().create(&sample_draft()).unwrap();
    app.sign_out().unwrap();

    app.sign_up("b@example.com", "hunter2").unwrap();
    assert!(app.bookmarks().unwrap().list().unwrap().is_empty());
}

#[test]
fn test_startup_restores_persisted_session() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        storage: StorageBackend::Local {
            path: dir.path().join("app.db").to_string_lossy().into_owned(),
        },
    };

    {
        let mut app = App::new(&config).unwrap();
        app.sign_up("a@example.com", "hunter2").unwrap();
        app.bookmarks().unwrap().create(&sample_draft()).unwrap();
    }

    // A fresh process over the same store picks the session back up.
    let mut app = App::new(&config).unwrap();
    assert!(app.user().is_none());
    app.startup().unwrap();
    assert_eq!(app.user().map(|u| u.email.as_str()), Some("a@example.com"));
    assert_eq!(app.bookmarks().unwrap().list().unwrap().len(), 1);
}

#[test]
fn test_startup_without_persisted_session_stays_anonymous() {
    let mut app = App::open_in_memory().unwrap();
    app.startup().unwrap();
    assert!(app.user().is_none());
    assert!(matches!(app.bookmarks(), Err(AuthError::NotAuthenticated)));
}
