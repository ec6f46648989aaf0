//! Core data types for the storage layer.
//!
//! The serialized shape of [`Post`] is the persisted format: a JSON object
//! with `id`, `content`, `createdAt` and `isPinned`. There is no schema
//! version, so renaming a field here breaks existing stores.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::BulletinError;

/// A post's creation time as it was persisted.
///
/// The original string is written back unchanged, so rewriting the
/// collection never alters a timestamp. Comparisons use the parsed instant.
/// Accepted forms: RFC 3339, ISO-8601 without an offset (read as UTC) and a
/// bare `YYYY-MM-DD` (midnight UTC).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    raw: String,
    instant: DateTime<Utc>,
}

impl Timestamp {
    /// The parsed instant.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.instant
    }

    /// The string as stored.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    let naive = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;
    Some(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

impl FromStr for Timestamp {
    type Err = BulletinError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let instant = parse_instant(value).ok_or_else(|| {
            BulletinError::Validation(format!("not an ISO-8601 timestamp: {:?}", value))
        })?;
        Ok(Self {
            raw: value.to_string(),
            instant,
        })
    }
}

/// New timestamps are written with millisecond precision and a `Z` suffix.
impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self {
            raw: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
            instant,
        }
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant
            .cmp(&other.instant)
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A news post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique identifier, assigned at creation
    pub id: String,

    /// Rich-text body as an HTML string
    pub content: String,

    /// When this post was created
    pub created_at: Timestamp,

    /// Whether the post is pinned
    #[serde(default)]
    pub is_pinned: bool,
}

/// Builder for creating new posts.
///
/// Everything but the id; the store assigns that.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// HTML body
    pub content: String,

    /// Initial pinned flag
    pub is_pinned: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl NewPost {
    /// A new unpinned post created now.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_pinned: false,
            created_at: Utc::now(),
        }
    }

    pub fn pinned(mut self, is_pinned: bool) -> Self {
        self.is_pinned = is_pinned;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// Partial update for an existing post.
///
/// Fields left as `None` keep their stored value. `id` and `created_at`
/// are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub content: Option<String>,
    pub is_pinned: Option<bool>,
}

impl PostPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn pinned(mut self, is_pinned: bool) -> Self {
        self.is_pinned = Some(is_pinned);
        self
    }

    /// True when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.is_pinned.is_none()
    }

    /// Merge this patch over `post`.
    pub fn apply_to(&self, post: &mut Post) {
        if let Some(ref content) = self.content {
            post.content = content.clone();
        }
        if let Some(is_pinned) = self.is_pinned {
            post.is_pinned = is_pinned;
        }
    }
}
