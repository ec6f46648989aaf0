//! Post commands: list, new, edit, show, pin/unpin, delete.

mod delete;
mod edit;
mod list;
mod new;
mod pin;
mod show;

pub use delete::handle_delete;
pub use edit::handle_edit;
pub use list::handle_list;
pub use new::handle_new;
pub use pin::handle_pin;
pub use show::handle_show;

use bulletin_core::storage::{KeyValueStore, Post, PostStore};

use crate::errors::CliError;

/// Shortest prefix accepted in place of a full id.
const MIN_PREFIX_LEN: usize = 4;

/// Look a post up by full id, or by a prefix that matches exactly one post.
pub(crate) fn find_post<S: KeyValueStore>(
    store: &PostStore<S>,
    id: &str,
) -> Result<Post, CliError> {
    let id = id.trim();
    if let Some(post) = store.get(id) {
        return Ok(post);
    }
    if id.len() < MIN_PREFIX_LEN {
        return Err(CliError::post_not_found(id));
    }

    let mut matches: Vec<Post> = store
        .list()
        .into_iter()
        .filter(|post| post.id.starts_with(id))
        .collect();
    match matches.len() {
        0 => Err(CliError::post_not_found(id)),
        1 => Ok(matches.remove(0)),
        n => Err(CliError::invalid_input(format!(
            "Id prefix {} matches {} posts; use more characters",
            id, n
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulletin_core::storage::{MemoryStore, NEWS_KEY};

    fn store() -> PostStore<MemoryStore> {
        let raw = serde_json::json!([
            {"id": "0190aaaa-1111", "content": "<p>a</p>", "createdAt": "2024-01-01T00:00:00Z", "isPinned": false},
            {"id": "0190aaaa-2222", "content": "<p>b</p>", "createdAt": "2024-01-02T00:00:00Z", "isPinned": false},
            {"id": "abc", "content": "<p>c</p>", "createdAt": "2024-01-03T00:00:00Z", "isPinned": true},
        ]);
        PostStore::new(MemoryStore::new().with_value(NEWS_KEY, raw.to_string()))
    }

    #[test]
    fn test_exact_id() {
        assert_eq!(find_post(&store(), "abc").expect("found").content, "<p>c</p>");
    }

    #[test]
    fn test_unique_prefix() {
        let post = find_post(&store(), "0190aaaa-2").expect("found");
        assert_eq!(post.id, "0190aaaa-2222");
    }

    #[test]
    fn test_ambiguous_prefix() {
        assert!(matches!(
            find_post(&store(), "0190aaaa"),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_short_or_unknown() {
        assert!(matches!(
            find_post(&store(), "01"),
            Err(CliError::NotFound { .. })
        ));
        assert!(matches!(
            find_post(&store(), "ffffffff"),
            Err(CliError::NotFound { .. })
        ));
    }
}
