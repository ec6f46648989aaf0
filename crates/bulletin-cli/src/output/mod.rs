//! Machine-readable output for posts and listings.

mod json;

pub use json::{page_json, post_json};
