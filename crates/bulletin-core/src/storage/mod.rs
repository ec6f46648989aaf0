//! Storage layer: key-value backends and the post store built on them.

pub mod file;
pub mod memory;
pub mod posts;
pub mod traits;
pub mod types;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use posts::{PostStore, NEWS_KEY};
pub use traits::KeyValueStore;
pub use types::{NewPost, Post, PostPatch, Timestamp};
