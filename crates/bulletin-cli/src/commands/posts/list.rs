use bulletin_core::query::{run_query, Pager, PostQuery, QueryPage};
use bulletin_core::text::plain_text;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::constants::TITLE_WIDTH;
use crate::helpers::validate_page_size;
use crate::output::page_json;
use crate::ui::theme::symbols;
use crate::ui::{
    badge, blank_line, format_date, header, hint, kv, page_strip, print, simple_table, title, Badge,
    Column, UiContext,
};

const EMPTY_MESSAGE: &str = "No news found. Create your first news post!";

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let config = ctx.config()?;
    let page_size = validate_page_size(args.page_size.unwrap_or(config.list.page_size))?;
    let sort = args.sort.unwrap_or(config.list.sort);
    let ui = ctx.ui(args.json, args.format)?;

    let store = ctx.open_store()?;
    let posts = store.list();
    let query = PostQuery::new().search(args.search.clone()).sort(sort);

    // Resolve the page against the filtered total, like a pager widget would.
    let mut pager = Pager::new(page_size)?;
    let mut page = run_query(posts.clone(), &query.clone().page(pager.request()));
    let mut rejected_page = None;
    if args.page != pager.page() {
        if pager.go_to(args.page, page.total_pages()) {
            page = run_query(posts, &query.clone().page(pager.request()));
        } else {
            rejected_page = Some(args.page);
        }
    }
    let query = query.page(pager.request());
    tracing::debug!(
        total = page.total(),
        page = pager.page(),
        page_size = pager.page_size(),
        "listing posts"
    );

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&page_json(&query, &page))?);
        return Ok(());
    }

    if !ctx.quiet() && ui.mode.is_pretty() {
        print(&ui, &header(&ui, "list", Some(describe(&query).as_str())));
        blank_line(&ui);
    }

    if page.posts.is_empty() {
        if !ctx.quiet() {
            print(&ui, EMPTY_MESSAGE);
            if !query.search.is_empty() {
                print(&ui, &hint(&ui, "Clear --search to list every post."));
            }
            if let Some(requested) = rejected_page {
                print_rejected_page(&ui, requested, &page);
            }
        }
        return Ok(());
    }

    print(&ui, &render_rows(&ui, &page));

    if !ctx.quiet() {
        if let Some(requested) = rejected_page {
            blank_line(&ui);
            print_rejected_page(&ui, requested, &page);
        }
        print_footer(&ui, &page);
    }
    Ok(())
}

fn print_rejected_page(ui: &UiContext, requested: usize, page: &QueryPage) {
    let notice = match page.total_pages() {
        0 => format!(
            "Page {} is out of range (no pages); showing page {}.",
            requested, page.window.page
        ),
        last => format!(
            "Page {} is out of range (1-{}); showing page {}.",
            requested, last, page.window.page
        ),
    };
    if ui.mode.is_pretty() {
        print(ui, &badge(ui, Badge::Warn, &notice));
    } else {
        print(ui, &hint(ui, &notice));
    }
}

fn describe(query: &PostQuery) -> String {
    if query.search.is_empty() {
        query.sort.label().to_lowercase()
    } else {
        format!(
            "{}, matching \"{}\"",
            query.sort.label().to_lowercase(),
            query.search
        )
    }
}

fn render_rows(ui: &UiContext, page: &QueryPage) -> String {
    if ui.mode.is_pretty() {
        let columns = [
            Column::new("TITLE"),
            Column::new("DATE POSTED"),
            Column::new("PIN"),
            Column::new("ID"),
        ];
        let pin = symbols::PIN.get(ui.unicode);
        let rows: Vec<Vec<String>> = page
            .posts
            .iter()
            .map(|post| {
                vec![
                    title(&plain_text(&post.content), TITLE_WIDTH),
                    format_date(post.created_at.as_datetime(), ui.timezone),
                    if post.is_pinned { pin.to_string() } else { String::new() },
                    post.id.clone(),
                ]
            })
            .collect();
        simple_table(ui, &columns, &rows)
    } else {
        let rows: Vec<Vec<String>> = page
            .posts
            .iter()
            .map(|post| {
                vec![
                    post.id.clone(),
                    post.created_at.as_datetime().to_rfc3339(),
                    (if post.is_pinned { "pinned" } else { "-" }).to_string(),
                    plain_text(&post.content),
                ]
            })
            .collect();
        simple_table(ui, &[], &rows)
    }
}

fn print_footer(ui: &UiContext, page: &QueryPage) {
    let window = &page.window;
    if ui.mode.is_pretty() {
        blank_line(ui);
        if let Some(strip) = page_strip(ui, &page.strip(), window.page, window.total_pages) {
            print(ui, &strip);
        }
        if let Some(summary) = window.summary() {
            let dot = symbols::DOT.get(ui.unicode);
            print(
                ui,
                &format!("Results {} {} {} per page", summary, dot, window.page_size),
            );
        }
    } else {
        print(ui, &kv(ui, "page", &window.page.to_string()));
        print(ui, &kv(ui, "total_pages", &window.total_pages.to_string()));
        print(ui, &kv(ui, "total", &window.total.to_string()));
    }
}
