//! The post store: per-item operations over a whole-collection value.
//!
//! The entire collection lives as one JSON array under [`NEWS_KEY`]. Every
//! mutation reads the array, changes one element and writes the array back.
//! That keeps the on-disk format trivial and is fine for hundreds of posts;
//! it is not meant for more.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::storage::traits::KeyValueStore;
use crate::storage::types::{NewPost, Post, PostPatch};

/// Key under which the post collection is persisted.
pub const NEWS_KEY: &str = "news";

/// One element of the persisted array.
///
/// Elements that do not read as a [`Post`] are hidden from callers but
/// written back verbatim, so a mutation never drops them.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum Record {
    Post(Post),
    Unreadable(serde_json::Value),
}

impl Record {
    fn id(&self) -> Option<&str> {
        match self {
            Record::Post(post) => Some(post.id.as_str()),
            Record::Unreadable(value) => value.get("id").and_then(serde_json::Value::as_str),
        }
    }
}

/// Durable post collection on top of a [`KeyValueStore`].
#[derive(Debug)]
pub struct PostStore<S> {
    kv: S,
}

impl<S: KeyValueStore> PostStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Give back the underlying key-value store.
    pub fn into_inner(self) -> S {
        self.kv
    }

    /// All persisted posts, in storage order.
    ///
    /// Never fails: a missing, unreadable or non-array value reads as an
    /// empty collection, and array elements that are not valid posts are
    /// skipped (both logged at `warn`).
    pub fn list(&self) -> Vec<Post> {
        self.load()
            .into_iter()
            .filter_map(|record| match record {
                Record::Post(post) => Some(post),
                Record::Unreadable(_) => None,
            })
            .collect()
    }

    /// Look up a post by id.
    pub fn get(&self, id: &str) -> Option<Post> {
        self.list().into_iter().find(|post| post.id == id)
    }

    /// Create a post with a freshly generated id and persist it.
    ///
    /// # Errors
    ///
    /// Returns `BulletinError::Storage` if the collection cannot be written.
    pub fn create(&mut self, new_post: NewPost) -> Result<Post> {
        let mut records = self.load();
        let taken: HashSet<&str> = records.iter().filter_map(Record::id).collect();
        let id = generate_id(&taken);

        let post = Post {
            id,
            content: new_post.content,
            created_at: new_post.created_at.into(),
            is_pinned: new_post.is_pinned,
        };
        records.push(Record::Post(post.clone()));
        self.save(&records)?;

        tracing::debug!(id = %post.id, total = records.len(), "created post");
        Ok(post)
    }

    /// Merge `patch` over the post with `id` and persist.
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` without writing anything if no post has that id.
    pub fn update(&mut self, id: &str, patch: &PostPatch) -> Result<Option<Post>> {
        let mut records = self.load();
        let found = records.iter_mut().find_map(|record| match record {
            Record::Post(post) if post.id == id => Some(post),
            _ => None,
        });
        let Some(post) = found else {
            tracing::debug!(id, "update skipped, post not found");
            return Ok(None);
        };

        patch.apply_to(post);
        let updated = post.clone();
        self.save(&records)?;

        tracing::debug!(id, "updated post");
        Ok(Some(updated))
    }

    /// Remove the post with `id`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(false)` without writing anything if no post has that id.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let records = self.load();
        let before = records.len();
        let remaining: Vec<Record> = records
            .into_iter()
            .filter(|record| !matches!(record, Record::Post(post) if post.id == id))
            .collect();
        if remaining.len() == before {
            tracing::debug!(id, "delete skipped, post not found");
            return Ok(false);
        }

        self.save(&remaining)?;
        tracing::debug!(id, total = remaining.len(), "deleted post");
        Ok(true)
    }

    fn load(&self) -> Vec<Record> {
        let raw = match self.kv.get(NEWS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "post collection unreadable, treating as empty");
                return Vec::new();
            }
        };

        let values = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(values) => values,
            Err(err) => {
                tracing::warn!(error = %err, "post collection malformed, treating as empty");
                return Vec::new();
            }
        };

        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| match Post::deserialize(&value) {
                Ok(post) => Record::Post(post),
                Err(err) => {
                    tracing::warn!(index, error = %err, "skipping unreadable post");
                    Record::Unreadable(value)
                }
            })
            .collect()
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        self.kv.set(NEWS_KEY, &raw)
    }
}

/// A UUIDv7 string not already present in `taken`.
///
/// v7 ids are time-ordered with a random tail, so two posts created in the
/// same millisecond still differ. The loop only matters for collections
/// carrying ids from elsewhere.
fn generate_id(taken: &HashSet<&str>) -> String {
    loop {
        let id = Uuid::now_v7().to_string();
        if !taken.contains(id.as_str()) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;
    use chrono::{TimeZone, Utc};

    fn store() -> PostStore<MemoryStore> {
        PostStore::new(MemoryStore::new())
    }

    #[test]
    fn test_list_empty_when_nothing_persisted() {
        assert!(store().list().is_empty());
    }

    #[test]
    fn test_list_treats_malformed_data_as_empty() {
        for raw in ["not json", "{\"id\":1}", "null", ""] {
            let store = PostStore::new(MemoryStore::new().with_value(NEWS_KEY, raw));
            assert!(store.list().is_empty(), "expected empty for {:?}", raw);
        }
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let mut store = store();
        let mut ids = HashSet::new();
        for i in 0..200 {
            let post = store.create(NewPost::new(format!("<p>{}</p>", i))).unwrap();
            assert!(ids.insert(post.id));
        }
        assert_eq!(store.list().len(), 200);
    }

    #[test]
    fn test_create_appends_in_storage_order() {
        let mut store = store();
        let first = store.create(NewPost::new("<p>first</p>")).unwrap();
        let second = store.create(NewPost::new("<p>second</p>").pinned(true)).unwrap();

        let posts = store.list();
        assert_eq!(posts, vec![first, second]);
        assert!(posts[1].is_pinned);
        assert!(!posts[0].is_pinned);
    }

    #[test]
    fn test_create_keeps_given_timestamp() {
        let mut store = store();
        let when = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();

        let post = store
            .create(NewPost::new("<p>x</p>").with_created_at(when))
            .unwrap();

        assert_eq!(*post.created_at.as_datetime(), when);
        assert_eq!(*store.get(&post.id).unwrap().created_at.as_datetime(), when);
    }

    #[test]
    fn test_update_preserves_unspecified_fields() {
        let mut store = store();
        let post = store.create(NewPost::new("<p>body</p>")).unwrap();

        let updated = store
            .update(&post.id, &PostPatch::new().pinned(true))
            .unwrap()
            .expect("post exists");

        assert!(updated.is_pinned);
        assert_eq!(updated.content, post.content);
        assert_eq!(updated.created_at, post.created_at);
        assert_eq!(store.get(&post.id), Some(updated));
    }

    #[test]
    fn test_update_missing_id_leaves_storage_untouched() {
        let seeded = MemoryStore::new().with_value(NEWS_KEY, "[]");
        let mut store = PostStore::new(seeded);

        let result = store
            .update("nope", &PostPatch::new().content("<p>x</p>"))
            .unwrap();

        assert!(result.is_none());
        assert_eq!(
            store.into_inner().get(NEWS_KEY).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_delete_twice() {
        let mut store = store();
        let keep = store.create(NewPost::new("<p>keep</p>")).unwrap();
        let post = store.create(NewPost::new("<p>drop</p>")).unwrap();

        assert!(store.delete(&post.id).unwrap());
        assert!(!store.delete(&post.id).unwrap());
        assert_eq!(store.list(), vec![keep]);
    }

    #[test]
    fn test_get_missing_is_none() {
        let mut store = store();
        store.create(NewPost::new("<p>x</p>")).unwrap();

        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_reads_legacy_timestamp_ids() {
        let raw = r#"[{"id":"1717171717171","content":"<p>old</p>","createdAt":"2024-05-31T16:08:37.171Z","isPinned":false}]"#;
        let mut store = PostStore::new(MemoryStore::new().with_value(NEWS_KEY, raw));

        let post = store.get("1717171717171").expect("legacy post");
        assert_eq!(post.content, "<p>old</p>");

        let fresh = store.create(NewPost::new("<p>new</p>")).unwrap();
        assert_ne!(fresh.id, post.id);
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn test_unreadable_records_survive_mutations() {
        let raw = r#"[{"id":"1","content":"<p>one</p>","createdAt":"2024-01-01T00:00:00.000Z","isPinned":false},{"id":"2"},{"id":"3","content":"<p>three</p>","createdAt":"last tuesday"}]"#;
        let mut store = PostStore::new(MemoryStore::new().with_value(NEWS_KEY, raw));

        let visible: Vec<String> = store.list().into_iter().map(|p| p.id).collect();
        assert_eq!(visible, vec!["1"]);

        let fresh = store.create(NewPost::new("<p>new</p>")).unwrap();
        assert!(store.update("1", &PostPatch::new().pinned(true)).unwrap().is_some());
        assert!(!store.delete("2").unwrap());

        let stored: serde_json::Value =
            serde_json::from_str(&store.into_inner().get(NEWS_KEY).unwrap().unwrap()).unwrap();
        let stored = stored.as_array().unwrap();
        assert_eq!(stored.len(), 4);
        assert_eq!(stored[0]["isPinned"], true);
        assert_eq!(stored[1], serde_json::json!({"id": "2"}));
        assert_eq!(stored[2]["createdAt"], "last tuesday");
        assert_eq!(stored[3]["id"], fresh.id.as_str());
    }

    #[test]
    fn test_offset_less_timestamps_are_readable() {
        let raw = r#"[{"id":"1","content":"<p>a</p>","createdAt":"2024-01-01T00:00:00.000Z","isPinned":false},{"id":"2","content":"<p>b</p>","createdAt":"2024-02-01T10:00:00","isPinned":false}]"#;
        let mut store = PostStore::new(MemoryStore::new().with_value(NEWS_KEY, raw));
        assert_eq!(store.list().len(), 2);

        store.create(NewPost::new("<p>c</p>")).unwrap();

        let ids: Vec<String> = store.list().into_iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(&ids[..2], ["1", "2"]);
        assert_eq!(
            *store.get("2").unwrap().created_at.as_datetime(),
            Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_update_leaves_stored_timestamps_byte_identical() {
        let raw = r#"[{"id":"1","content":"<p>a</p>","createdAt":"2024-01-01T00:00:00.000Z","isPinned":false},{"id":"2","content":"<p>b</p>","createdAt":"2024-03-05T12:30:00+02:00","isPinned":false}]"#;
        let mut store = PostStore::new(MemoryStore::new().with_value(NEWS_KEY, raw));

        store.update("1", &PostPatch::new().pinned(true)).unwrap();

        let written = store.into_inner().get(NEWS_KEY).unwrap().unwrap();
        assert!(written.contains(r#""createdAt":"2024-01-01T00:00:00.000Z""#));
        assert!(written.contains(r#""createdAt":"2024-03-05T12:30:00+02:00""#));
        assert!(written.contains(r#""isPinned":true"#));
    }
}
