//! JSON documents printed by `--json`.

use bulletin_core::query::{PostQuery, QueryPage};
use bulletin_core::storage::Post;
use bulletin_core::text::plain_text;

/// A post as stored, plus its extracted plain text. `createdAt` is the stored string.
pub fn post_json(post: &Post) -> serde_json::Value {
    serde_json::json!({
        "id": post.id,
        "content": post.content,
        "text": plain_text(&post.content),
        "createdAt": post.created_at,
        "isPinned": post.is_pinned,
    })
}

/// One listing page with the query that produced it.
pub fn page_json(query: &PostQuery, page: &QueryPage) -> serde_json::Value {
    let window = &page.window;
    let range = window
        .range()
        .map(|(first, last)| serde_json::json!({ "first": first, "last": last }));
    serde_json::json!({
        "search": query.search,
        "sort": query.sort,
        "page": window.page,
        "pageSize": window.page_size,
        "total": window.total,
        "totalPages": window.total_pages,
        "range": range,
        "posts": page.posts.iter().map(post_json).collect::<Vec<_>>(),
    })
}
