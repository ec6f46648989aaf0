use bulletin_core::storage::{NewPost, Post};

use crate::app::AppContext;
use crate::cli::NewArgs;
use crate::helpers::{parse_datetime, read_content};
use crate::output::post_json;
use crate::template::DEFAULT_CONTENT;
use crate::ui::{format_datetime, print, receipt, UiContext};

pub fn handle_new(ctx: &AppContext, args: &NewArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(args.json, None)?;
    let created_at = args.date.as_deref().map(parse_datetime).transpose()?;

    let (content, source) = read_content(
        args.no_input,
        args.content.clone(),
        ctx.editor()?,
        DEFAULT_CONTENT,
    )?;
    tracing::debug!(?source, bytes = content.len(), "read post content");

    let mut new_post = NewPost::new(content).pinned(args.pin);
    if let Some(when) = created_at {
        new_post = new_post.with_created_at(when);
    }

    let mut store = ctx.open_store()?;
    let post = store.create(new_post)?;

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&post_json(&post))?);
    } else if ctx.quiet() {
        println!("{}", post.id);
    } else {
        print(&ui, &post_receipt(&ui, "Published news post", &post));
    }
    Ok(())
}

/// Receipt shared by the commands that write a post.
pub(super) fn post_receipt(ui: &UiContext, title: &str, post: &Post) -> String {
    let pretty = ui.mode.is_pretty();
    let date = format_datetime(post.created_at.as_datetime(), ui.timezone, pretty);
    let pinned = if post.is_pinned { "yes" } else { "no" };
    receipt(
        ui,
        title,
        &[
            ("ID", post.id.as_str()),
            ("Date", date.as_str()),
            ("Pinned", pinned),
        ],
    )
}
