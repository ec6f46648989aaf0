use dialoguer::Confirm;

use bulletin_core::text::plain_text;

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::constants::TITLE_WIDTH;
use crate::errors::CliError;
use crate::ui::{badge, is_interactive, print, receipt, title, Badge};

use super::find_post;

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(false, None)?;
    let mut store = ctx.open_store()?;
    let post = find_post(&store, &args.id)?;

    if !args.force {
        if !is_interactive() {
            return Err(CliError::invalid_input(
                "Refusing to delete without confirmation; pass --force",
            )
            .into());
        }
        let preview = title(&plain_text(&post.content), TITLE_WIDTH);
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Are you sure you want to delete this news? \"{}\"",
                preview
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            if !ctx.quiet() {
                if ui.mode.is_pretty() {
                    print(&ui, &badge(&ui, Badge::Info, "Cancelled"));
                } else {
                    print(&ui, "status=cancelled");
                }
            }
            return Ok(());
        }
    }

    if !store.delete(&post.id)? {
        return Err(CliError::post_not_found(&post.id).into());
    }

    if !ctx.quiet() {
        print(&ui, &receipt(&ui, "Deleted news post", &[("ID", post.id.as_str())]));
    }
    Ok(())
}
