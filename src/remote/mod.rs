// Remote-backend variant: an opaque JSON CRUD client over HTTP.

pub mod client;

pub use client::RemoteClient;
