// markstash repositories
// CRUD abstractions over the persisted bookmark and category collections,
// with one trait per collection and local/remote implementations behind it.

pub mod bookmark;
pub mod category;
pub mod remote;

pub use bookmark::{BookmarkRepository, LocalBookmarkRepository};
pub use category::{CategoryRepository, LocalCategoryRepository};
pub use remote::{RemoteBookmarkRepository, RemoteCategoryRepository};
