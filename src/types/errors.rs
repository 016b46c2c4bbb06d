use std::fmt;

// === StoreError ===

/// Errors raised by the key-value store adapter.
#[derive(Debug)]
pub enum StoreError {
    /// The underlying medium could not be read or written.
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Store unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

// === CryptoError ===

/// Errors related to password hashing operations.
#[derive(Debug)]
pub enum CryptoError {
    /// Failed to generate random bytes for a salt.
    RandomGeneration(String),
    /// Stored salt or hash could not be decoded.
    InvalidEncoding(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::RandomGeneration(msg) => {
                write!(f, "Random generation failed: {}", msg)
            }
            CryptoError::InvalidEncoding(msg) => write!(f, "Invalid encoding: {}", msg),
        }
    }
}

impl std::error::Error for CryptoError {}

// === RepositoryError ===

/// Errors raised by the bookmark and category repositories.
#[derive(Debug)]
pub enum RepositoryError {
    /// Input failed validation (empty title, malformed URL, empty name).
    Validation(String),
    /// No record matched the given ID.
    NotFound(String),
    /// The backing store or remote backend failed.
    Store(String),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            RepositoryError::NotFound(id) => write!(f, "Record not found: {}", id),
            RepositoryError::Store(msg) => write!(f, "Repository store error: {}", msg),
        }
    }
}

impl std::error::Error for RepositoryError {}

impl From<StoreError> for RepositoryError {
    fn from(err: StoreError) -> Self {
        RepositoryError::Store(err.to_string())
    }
}

// === AuthError ===

/// Errors raised by the session/identity provider.
#[derive(Debug)]
pub enum AuthError {
    /// Sign-up attempted with an email that is already registered.
    DuplicateEmail(String),
    /// No stored credential matched the given email and password.
    InvalidCredentials,
    /// An operation required a session but none exists.
    NotAuthenticated,
    /// The backing store or remote backend failed.
    Store(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::DuplicateEmail(email) => {
                write!(f, "Email already registered: {}", email)
            }
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
            AuthError::NotAuthenticated => write!(f, "Not signed in"),
            AuthError::Store(msg) => write!(f, "Auth store error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        AuthError::Store(err.to_string())
    }
}

impl From<CryptoError> for AuthError {
    fn from(err: CryptoError) -> Self {
        AuthError::Store(err.to_string())
    }
}

// === ConfigError ===

/// Errors related to application configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O error occurred while reading or writing the config file.
    IoError(String),
    /// Failed to serialize or deserialize the config.
    SerializationError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "Config I/O error: {}", msg),
            ConfigError::SerializationError(msg) => {
                write!(f, "Config serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
