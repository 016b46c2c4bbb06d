//! markstash storage layer.
//!
//! Provides the key-value store contract and the SQLite-backed local
//! implementation.
//!
//! # Usage
//!
//! ```no_run
//! use markstash::store::LocalStore;
//!
//! // Open a persistent store
//! let store = LocalStore::open("markstash.db").expect("failed to open store");
//!
//! // Or use an in-memory store for testing
//! let store = LocalStore::open_in_memory().expect("failed to open in-memory store");
//! ```

pub mod kv;
pub mod local;

pub use kv::KeyValueStore;
pub use local::LocalStore;
