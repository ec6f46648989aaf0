//! Sort modes for post listings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BulletinError;
use crate::storage::Post;
use crate::text::{collate, plain_text};

/// How a listing is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Newest `created_at` first
    #[default]
    DateNewest,
    /// Oldest `created_at` first
    DateOldest,
    /// Plain text of the content, A to Z
    Title,
    /// Pinned posts first, then newest first within each group
    Pinned,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::DateNewest,
        SortMode::DateOldest,
        SortMode::Title,
        SortMode::Pinned,
    ];

    /// Stable identifier, as accepted by `FromStr` and stored in config.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DateNewest => "date-newest",
            Self::DateOldest => "date-oldest",
            Self::Title => "title",
            Self::Pinned => "pinned",
        }
    }

    /// Human-readable description.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DateNewest => "Sort by date (newest first)",
            Self::DateOldest => "Sort by date (oldest first)",
            Self::Title => "Sort by content",
            Self::Pinned => "Sort by pinned",
        }
    }

    /// Compare two posts whose plain text has already been extracted.
    ///
    /// `a_text`/`b_text` are only consulted by [`SortMode::Title`].
    pub fn compare(&self, a: &Post, a_text: &str, b: &Post, b_text: &str) -> Ordering {
        match self {
            Self::DateNewest => b.created_at.cmp(&a.created_at),
            Self::DateOldest => a.created_at.cmp(&b.created_at),
            Self::Title => collate(a_text, b_text),
            Self::Pinned => b
                .is_pinned
                .cmp(&a.is_pinned)
                .then_with(|| b.created_at.cmp(&a.created_at)),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = BulletinError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| {
                BulletinError::InvalidInput(format!(
                    "Unknown sort mode: {} (expected one of: date-newest, date-oldest, title, pinned)",
                    value
                ))
            })
    }
}

/// Sort `posts` by `mode`. Equal keys keep their relative order.
pub fn sort_posts(posts: Vec<Post>, mode: SortMode) -> Vec<Post> {
    let mut keyed: Vec<(String, Post)> = posts
        .into_iter()
        .map(|post| {
            let text = match mode {
                SortMode::Title => plain_text(&post.content),
                _ => String::new(),
            };
            (text, post)
        })
        .collect();
    keyed.sort_by(|(a_text, a), (b_text, b)| mode.compare(a, a_text, b, b_text));
    keyed.into_iter().map(|(_, post)| post).collect()
}
