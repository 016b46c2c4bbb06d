//! markstash — personal bookmark manager core.
//!
//! Users authenticate, then create, edit, delete, and filter bookmarks
//! organized into user-defined categories. Persistence is a local SQLite
//! key-value store or a thin remote JSON CRUD client, selected at startup.
//!
//! This library crate exposes all modules for use by the binary and
//! integration tests.

pub mod app;
pub mod config;
pub mod remote;
pub mod repositories;
pub mod services;
pub mod store;
pub mod types;
