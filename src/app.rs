//! App core for markstash.
//!
//! Wires the configured backend to the repository and auth traits, and
//! enforces the session gate: repositories are only reachable while a
//! user is signed in, because they are constructed per owner on sign-in.

use std::sync::Arc;

use crate::config::{AppConfig, StorageBackend};
use crate::remote::RemoteClient;
use crate::repositories::{
    BookmarkRepository, CategoryRepository, LocalBookmarkRepository, LocalCategoryRepository,
    RemoteBookmarkRepository, RemoteCategoryRepository,
};
use crate::services::{AuthService, LocalAuthService, RemoteAuthService};
use crate::store::{KeyValueStore, LocalStore};
use crate::types::errors::AuthError;
use crate::types::user::User;

enum Backend {
    Local(Arc<dyn KeyValueStore>),
    Remote(Arc<RemoteClient>),
}

struct Session {
    user: User,
    bookmarks: Box<dyn BookmarkRepository>,
    categories: Box<dyn CategoryRepository>,
}

/// Central application struct holding the backend, the auth provider,
/// and the active session's repositories.
pub struct App {
    backend: Backend,
    auth: Box<dyn AuthService>,
    session: Option<Session>,
}

impl App {
    /// Creates a new App against the configured backend.
    pub fn new(config: &AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        match &config.storage {
            StorageBackend::Local { path } => {
                let store: Arc<dyn KeyValueStore> = Arc::new(LocalStore::open(path)?);
                Ok(Self::with_local_store(store))
            }
            StorageBackend::Remote { base_url } => {
                let client = Arc::new(RemoteClient::new(base_url.clone()));
                let auth = Box::new(RemoteAuthService::new(client.clone()));
                Ok(Self {
                    backend: Backend::Remote(client),
                    auth,
                    session: None,
                })
            }
        }
    }

    /// Creates an App over an in-memory store. Useful for testing.
    pub fn open_in_memory() -> Result<Self, Box<dyn std::error::Error>> {
        let store: Arc<dyn KeyValueStore> = Arc::new(LocalStore::open_in_memory()?);
        Ok(Self::with_local_store(store))
    }

    fn with_local_store(store: Arc<dyn KeyValueStore>) -> Self {
        let auth = Box::new(LocalAuthService::new(store.clone()));
        Self {
            backend: Backend::Local(store),
            auth,
            session: None,
        }
    }

    /// Startup sequence: restore a persisted session, if one exists.
    pub fn startup(&mut self) -> Result<(), AuthError> {
        if let Some(user) = self.auth.current_user()? {
            self.open_session(user);
        }
        Ok(())
    }

    /// Registers a new account and opens its session.
    pub fn sign_up(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self.auth.sign_up(email, password)?;
        self.open_session(user.clone());
        Ok(user)
    }

    /// Signs in an existing account and opens its session.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self.auth.sign_in(email, password)?;
        self.open_session(user.clone());
        Ok(user)
    }

    /// Signs out and drops the session's repositories.
    pub fn sign_out(&mut self) -> Result<(), AuthError> {
        self.auth.sign_out()?;
        self.session = None;
        Ok(())
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// The signed-in user's bookmark repository.
    pub fn bookmarks(&mut self) -> Result<&mut (dyn BookmarkRepository + 'static), AuthError> {
        self.session
            .as_mut()
            .map(|s| s.bookmarks.as_mut())
            .ok_or(AuthError::NotAuthenticated)
    }

    /// The signed-in user's category repository.
    pub fn categories(&mut self) -> Result<&mut (dyn CategoryRepository + 'static), AuthError> {
        self.session
            .as_mut()
            .map(|s| s.categories.as_mut())
            .ok_or(AuthError::NotAuthenticated)
    }

    /// Builds the per-owner repositories for the authenticated user.
    fn open_session(&mut self, user: User) {
        let (bookmarks, categories): (Box<dyn BookmarkRepository>, Box<dyn CategoryRepository>) =
            match &self.backend {
                Backend::Local(store) => (
                    Box::new(LocalBookmarkRepository::new(store.clone(), user.id.clone())),
                    Box::new(LocalCategoryRepository::new(store.clone(), user.id.clone())),
                ),
                Backend::Remote(client) => (
                    Box::new(RemoteBookmarkRepository::new(client.clone(), user.id.clone())),
                    Box::new(RemoteCategoryRepository::new(client.clone(), user.id.clone())),
                ),
            };
        self.session = Some(Session {
            user,
            bookmarks,
            categories,
        });
    }
}
