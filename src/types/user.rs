use serde::{Deserialize, Serialize};

/// An authenticated account. Referenced by every bookmark's `owner_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub created_at: i64,
}

/// A credential row in the local user store.
///
/// The password is never persisted; only a random salt and the
/// PBKDF2-HMAC-SHA256 hash derived from it, both base64-encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCredential {
    pub user_id: String,
    pub email: String,
    pub salt: String,
    pub password_hash: String,
    pub created_at: i64,
}

/// The persisted session marker under the `currentUser` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
}
