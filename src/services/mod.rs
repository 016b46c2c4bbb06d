// markstash services
// Stateless helpers and the session provider: filtering, password hashing, auth.

pub mod auth_service;
pub mod filter_engine;
pub mod password_hash;

pub use auth_service::{AuthService, LocalAuthService, RemoteAuthService};
pub use filter_engine::filter_bookmarks;
pub use password_hash::{PasswordHasher, PasswordHasherTrait};
