//! Session/identity provider for markstash.
//!
//! Two states: Anonymous and Authenticated. The provider resolves and
//! persists the current user but does not gate the repositories itself —
//! that enforcement lives in the app layer.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use super::password_hash::{PasswordHasher, PasswordHasherTrait};
use crate::remote::RemoteClient;
use crate::store::kv::{self, KeyValueStore, CURRENT_USER_KEY, USERS_KEY};
use crate::types::errors::AuthError;
use crate::types::user::{SessionUser, StoredCredential, User};

/// Trait defining session operations. Implemented by the local
/// store-backed provider and the remote-backend provider.
pub trait AuthService {
    /// Registers a new account and signs it in.
    fn sign_up(&mut self, email: &str, password: &str) -> Result<User, AuthError>;
    /// Signs in an existing account.
    fn sign_in(&mut self, email: &str, password: &str) -> Result<User, AuthError>;
    /// Unconditionally transitions to Anonymous.
    fn sign_out(&mut self) -> Result<(), AuthError>;
    /// Resolves the persisted session, if any.
    fn current_user(&self) -> Result<Option<User>, AuthError>;
}

/// Auth provider backed by the local key-value store.
///
/// Credentials are stored under the `users` key as salted PBKDF2 hashes;
/// the active session is a `{id, email}` marker under `currentUser`.
pub struct LocalAuthService {
    store: Arc<dyn KeyValueStore>,
    hasher: PasswordHasher,
}

impl LocalAuthService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            hasher: PasswordHasher::new(),
        }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn persist_session(&self, user: &User) -> Result<(), AuthError> {
        let session = SessionUser {
            id: user.id.clone(),
            email: user.email.clone(),
        };
        kv::write_object(self.store.as_ref(), CURRENT_USER_KEY, &session)?;
        Ok(())
    }

    fn user_from_credential(credential: &StoredCredential) -> User {
        User {
            id: credential.user_id.clone(),
            email: credential.email.clone(),
            created_at: credential.created_at,
        }
    }
}

impl AuthService for LocalAuthService {
    fn sign_up(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let mut users: Vec<StoredCredential> =
            kv::read_collection(self.store.as_ref(), USERS_KEY)?;

        // Duplicate check before any write: the existing record stays untouched.
        if users.iter().any(|u| u.email == email) {
            return Err(AuthError::DuplicateEmail(email.to_string()));
        }

        let hashed = self.hasher.hash_password(password)?;
        let credential = StoredCredential {
            user_id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            salt: hashed.salt,
            password_hash: hashed.hash,
            created_at: Self::now(),
        };
        let user = Self::user_from_credential(&credential);

        users.push(credential);
        kv::write_collection(self.store.as_ref(), USERS_KEY, &users)?;
        self.persist_session(&user)?;
        Ok(user)
    }

    fn sign_in(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let users: Vec<StoredCredential> =
            kv::read_collection(self.store.as_ref(), USERS_KEY)?;

        // Unknown email and wrong password are indistinguishable to the caller.
        let credential = users
            .iter()
            .find(|u| u.email == email)
            .ok_or(AuthError::InvalidCredentials)?;
        if !self
            .hasher
            .verify_password(password, &credential.salt, &credential.password_hash)
        {
            return Err(AuthError::InvalidCredentials);
        }

        let user = Self::user_from_credential(credential);
        self.persist_session(&user)?;
        Ok(user)
    }

    fn sign_out(&mut self) -> Result<(), AuthError> {
        self.store.delete(CURRENT_USER_KEY)?;
        Ok(())
    }

    fn current_user(&self) -> Result<Option<User>, AuthError> {
        let session: Option<SessionUser> =
            kv::read_object(self.store.as_ref(), CURRENT_USER_KEY)?;
        let Some(session) = session else {
            return Ok(None);
        };

        // Resolve through the credential store; a session marker whose
        // account has vanished reads as signed out.
        let users: Vec<StoredCredential> =
            kv::read_collection(self.store.as_ref(), USERS_KEY)?;
        Ok(users
            .iter()
            .find(|u| u.user_id == session.id)
            .map(Self::user_from_credential))
    }
}

/// Auth provider delegating to the remote backend.
pub struct RemoteAuthService {
    client: Arc<RemoteClient>,
}

impl RemoteAuthService {
    pub fn new(client: Arc<RemoteClient>) -> Self {
        Self { client }
    }
}

impl AuthService for RemoteAuthService {
    fn sign_up(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        self.client.sign_up(email, password)
    }

    fn sign_in(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        self.client.sign_in(email, password)
    }

    fn sign_out(&mut self) -> Result<(), AuthError> {
        self.client.sign_out()
    }

    fn current_user(&self) -> Result<Option<User>, AuthError> {
        self.client.get_current_user()
    }
}
