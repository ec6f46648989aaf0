use bulletin_core::text::plain_text;

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::post_json;
use crate::ui::{blank_line, format_datetime, header, kv, print, wrap};

const TEXT_WIDTH: usize = 80;

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(args.json, None)?;
    let store = ctx.open_store()?;
    let post = super::find_post(&store, &args.id)?;

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&post_json(&post))?);
        return Ok(());
    }
    if args.html {
        println!("{}", post.content);
        return Ok(());
    }

    let text = plain_text(&post.content);
    let pretty = ui.mode.is_pretty();
    let date = format_datetime(post.created_at.as_datetime(), ui.timezone, pretty);
    let pinned = match (pretty, post.is_pinned) {
        (true, true) => "yes",
        (true, false) => "no",
        (false, true) => "true",
        (false, false) => "false",
    };

    if !pretty {
        print(&ui, &kv(&ui, "id", &post.id));
        print(&ui, &kv(&ui, "created_at", &date));
        print(&ui, &kv(&ui, "pinned", pinned));
        print(&ui, &kv(&ui, "text", &text));
        return Ok(());
    }

    if !ctx.quiet() {
        print(&ui, &header(&ui, "show", None));
        print(&ui, &kv(&ui, "ID", &post.id));
        print(&ui, &kv(&ui, "Date", &date));
        print(&ui, &kv(&ui, "Pinned", pinned));
        blank_line(&ui);
    }
    for line in wrap(&text, ui.width.clamp(20, TEXT_WIDTH)) {
        print(&ui, &line);
    }
    Ok(())
}
