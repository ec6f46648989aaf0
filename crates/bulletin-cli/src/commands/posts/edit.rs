use bulletin_core::storage::PostPatch;

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::helpers::read_content;
use crate::output::post_json;
use crate::ui::print;

use super::find_post;
use super::new::post_receipt;

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(args.json, None)?;
    let mut store = ctx.open_store()?;
    let post = find_post(&store, &args.id)?;

    let pin = match (args.pin, args.unpin) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };

    let mut patch = PostPatch::new();
    if let Some(is_pinned) = pin {
        patch = patch.pinned(is_pinned);
    }
    // A bare pin toggle leaves the content alone.
    if args.content.is_some() || pin.is_none() {
        let (content, source) = read_content(
            args.no_input,
            args.content.clone(),
            ctx.editor()?,
            &post.content,
        )?;
        tracing::debug!(?source, bytes = content.len(), "read replacement content");
        patch = patch.content(content);
    }

    let updated = store
        .update(&post.id, &patch)?
        .ok_or_else(|| CliError::post_not_found(&post.id))?;

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&post_json(&updated))?);
    } else if !ctx.quiet() {
        print(&ui, &post_receipt(&ui, "Updated news post", &updated));
    }
    Ok(())
}
