use bulletin_core::storage::PostPatch;

use crate::app::AppContext;
use crate::cli::PinArgs;
use crate::errors::CliError;
use crate::output::post_json;
use crate::ui::{badge, print, Badge};

use super::find_post;
use super::new::post_receipt;

/// `bulletin pin` and `bulletin unpin`.
pub fn handle_pin(ctx: &AppContext, args: &PinArgs, is_pinned: bool) -> anyhow::Result<()> {
    let ui = ctx.ui(args.json, None)?;
    let mut store = ctx.open_store()?;
    let post = find_post(&store, &args.id)?;

    let verb = if is_pinned { "Pinned" } else { "Unpinned" };
    if post.is_pinned == is_pinned {
        if ui.mode.is_json() {
            println!("{}", serde_json::to_string_pretty(&post_json(&post))?);
        } else if !ctx.quiet() {
            if ui.mode.is_pretty() {
                let message = format!("Already {}: {}", verb.to_lowercase(), post.id);
                print(&ui, &badge(&ui, Badge::Info, &message));
            } else {
                print(&ui, "status=unchanged");
            }
        }
        return Ok(());
    }

    let updated = store
        .update(&post.id, &PostPatch::new().pinned(is_pinned))?
        .ok_or_else(|| CliError::post_not_found(&post.id))?;

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&post_json(&updated))?);
    } else if !ctx.quiet() {
        let title = format!("{} news post", verb);
        print(&ui, &post_receipt(&ui, &title, &updated));
    }
    Ok(())
}
