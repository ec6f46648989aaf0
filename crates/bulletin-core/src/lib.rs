//! # Bulletin Core
//!
//! Core library for Bulletin - a local, single-user collection of rich-text
//! news posts.
//!
//! This crate owns the data layer and the query engine, independent of the
//! CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: Key-value backends and the post store built on them
//! - **query**: Filtering, sorting and pagination of posts
//! - **text**: Plain-text extraction from post HTML, collation
//! - **fs**: Atomic file writes
//!
//! Storage is the leaf; the query engine reads the full collection from it
//! and derives everything else. Mutations go through the store and the
//! caller re-reads afterwards.

pub mod error;
pub mod fs;
pub mod query;
pub mod storage;
pub mod text;

pub use error::{BulletinError, Result};
pub use query::{PostQuery, QueryPage, SortMode};
pub use storage::{KeyValueStore, NewPost, Post, PostPatch, PostStore, Timestamp};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
