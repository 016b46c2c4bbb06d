//! Salted password hashing for the local credential store.
//!
//! Local mode authenticates without a server, so credentials live in the
//! key-value store — as PBKDF2-HMAC-SHA256 hashes with a random per-user
//! salt, never plaintext. This mode is prototype-grade regardless: any
//! code with access to the store file can enumerate the user list.

use std::num::NonZeroU32;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use ring::pbkdf2;
use ring::rand::{SecureRandom, SystemRandom};
use zeroize::Zeroize;

use crate::types::errors::CryptoError;

/// PBKDF2 iteration count for password hashing.
const PBKDF2_ITERATIONS: u32 = 100_000;

/// Salt length in bytes.
const SALT_LENGTH: usize = 16;

/// Derived hash length in bytes.
const HASH_LENGTH: usize = 32;

/// A freshly derived salt + hash pair, base64-encoded for persistence.
#[derive(Debug, Clone)]
pub struct PasswordHash {
    pub salt: String,
    pub hash: String,
}

/// Trait defining password hashing operations.
pub trait PasswordHasherTrait {
    /// Hashes a password with a fresh random salt.
    fn hash_password(&self, password: &str) -> Result<PasswordHash, CryptoError>;

    /// Verifies a password against a stored salt + hash pair.
    /// Undecodable stored values verify as false, never as an error.
    fn verify_password(&self, password: &str, salt: &str, hash: &str) -> bool;
}

/// PBKDF2 password hasher using the `ring` crate.
pub struct PasswordHasher {
    rng: SystemRandom,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }

    fn iterations() -> NonZeroU32 {
        // 100_000 is trivially non-zero; unwrap_or placates the type.
        NonZeroU32::new(PBKDF2_ITERATIONS).unwrap_or(NonZeroU32::MIN)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasherTrait for PasswordHasher {
    fn hash_password(&self, password: &str) -> Result<PasswordHash, CryptoError> {
        let mut salt = vec![0u8; SALT_LENGTH];
        self.rng
            .fill(&mut salt)
            .map_err(|_| CryptoError::RandomGeneration("Failed to generate salt".to_string()))?;

        let mut derived = vec![0u8; HASH_LENGTH];
        pbkdf2::derive(
            pbkdf2::PBKDF2_HMAC_SHA256,
            Self::iterations(),
            &salt,
            password.as_bytes(),
            &mut derived,
        );

        let result = PasswordHash {
            salt: BASE64.encode(&salt),
            hash: BASE64.encode(&derived),
        };
        derived.zeroize();
        Ok(result)
    }

    fn verify_password(&self, password: &str, salt: &str, hash: &str) -> bool {
        let Ok(salt) = BASE64.decode(salt) else {
            return false;
        };
        let Ok(expected) = BASE64.decode(hash) else {
            return false;
        };
        // ring's verify is constant-time over the derived output.
        pbkdf2::verify(
            pbkdf2::PBKDF2_HMAC_SHA256,
            Self::iterations(),
            &salt,
            password.as_bytes(),
            &expected,
        )
        .is_ok()
    }
}
