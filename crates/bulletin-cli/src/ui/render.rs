//! Rendering primitives for CLI output.

use bulletin_core::query::PageMarker;
use comfy_table::{Attribute, Cell, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, symbols, Badge};

/// Command header.
///
/// Pretty: `Bulletin · list (context)`, plain: `bulletin list`, JSON: nothing.
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Bulletin", styles::bold(), ctx.color);
            let dot = symbols::DOT.get(ctx.unicode);
            match context {
                Some(c) => format!("{} {} {} ({})", title, dot, command, c),
                None => format!("{} {} {}", title, dot, command),
            }
        }
        OutputMode::Plain => format!("bulletin {}", command),
        OutputMode::Json => String::new(),
    }
}

pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let text = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        text
    } else {
        format!("{} {}", text, message)
    }
}

/// Pretty: `Key: value` with a dim key. Plain: `key=value`.
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", label, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", styled("Hint:", styles::dim(), ctx.color), text)
    } else {
        format!("hint={}", text)
    }
}

/// Summary block after a mutation.
///
/// Pretty: badge plus indented pairs. Plain: `status=ok` plus `key=value` lines.
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        lines.extend(items.iter().map(|(k, v)| format!("  {}", kv(ctx, k, v))));
    } else {
        lines.push("status=ok".to_string());
        lines.extend(items.iter().map(|(k, v)| kv(ctx, k, v)));
    }
    lines.join("\n")
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self { header }
    }
}

/// Borderless table in pretty mode, space-separated rows otherwise.
pub fn simple_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = ComfyTable::new();
    table.load_preset(comfy_table::presets::NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(ctx.width.min(u16::MAX as usize) as u16);

    let header_cells: Vec<Cell> = columns
        .iter()
        .map(|c| {
            let cell = Cell::new(c.header);
            if ctx.color {
                cell.add_attribute(Attribute::Dim)
            } else {
                cell
            }
        })
        .collect();
    table.set_header(header_cells);

    for i in 0..columns.len() {
        if let Some(column) = table.column_mut(i) {
            column.set_padding((0, 2));
        }
    }
    for row in rows {
        table.add_row(row);
    }

    table.to_string()
}

/// Page strip such as `‹ 1 … 4 5 [6] 7 8 … 12 ›`.
///
/// `None` when everything fits on one page.
pub fn page_strip(
    ctx: &UiContext,
    strip: &[PageMarker],
    current: usize,
    total_pages: usize,
) -> Option<String> {
    if total_pages <= 1 {
        return None;
    }

    let mut parts = Vec::with_capacity(strip.len() + 2);
    let previous = symbols::PREVIOUS.get(ctx.unicode);
    parts.push(if current > 1 {
        previous.to_string()
    } else {
        styled(previous, styles::dim(), ctx.color)
    });

    for marker in strip {
        parts.push(match marker {
            PageMarker::Page(n) if *n == current => {
                styled(&format!("[{}]", n), styles::current(), ctx.color)
            }
            PageMarker::Page(n) => n.to_string(),
            PageMarker::Ellipsis => symbols::ELLIPSIS.get(ctx.unicode).to_string(),
        });
    }

    let next = symbols::NEXT.get(ctx.unicode);
    parts.push(if current < total_pages {
        next.to_string()
    } else {
        styled(next, styles::dim(), ctx.color)
    });

    Some(parts.join(" "))
}

/// Write to stdout unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Empty line, pretty mode only.
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::with_capacity(2);
    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        lines.extend(error_hint.map(|h| hint(ctx, h)));
    } else {
        lines.push(format!("error={}", message));
        lines.extend(error_hint.map(|h| format!("hint={}", h)));
    }
    lines.join("\n")
}

pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
            timezone: None,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Pretty,
            timezone: None,
        }
    }

    #[test]
    fn test_header() {
        assert_eq!(header(&plain_ctx(), "list", None), "bulletin list");
        let pretty = header(&pretty_ctx(), "list", Some("sorted by title"));
        assert_eq!(pretty, "Bulletin \u{00B7} list (sorted by title)");
    }

    #[test]
    fn test_kv() {
        assert_eq!(kv(&plain_ctx(), "Total Pages", "3"), "total_pages=3");
        assert_eq!(kv(&pretty_ctx(), "Total", "3"), "Total: 3");
    }

    #[test]
    fn test_hint() {
        assert_eq!(hint(&plain_ctx(), "run it"), "hint=run it");
        assert_eq!(hint(&pretty_ctx(), "run it"), "Hint: run it");
    }

    #[test]
    fn test_receipt() {
        let plain = receipt(&plain_ctx(), "Created", &[("ID", "abc")]);
        assert_eq!(plain, "status=ok\nid=abc");

        let pretty = receipt(&pretty_ctx(), "Created", &[("ID", "abc")]);
        assert_eq!(pretty, "[\u{2713}] Created\n  ID: abc");
    }

    #[test]
    fn test_simple_table_plain_has_no_header() {
        let columns = [Column::new("TITLE"), Column::new("DATE")];
        let rows = vec![
            vec!["one".to_string(), "Jan 1, 2024".to_string()],
            vec!["two".to_string(), "Jan 2, 2024".to_string()],
        ];
        assert_eq!(
            simple_table(&plain_ctx(), &columns, &rows),
            "one Jan 1, 2024\ntwo Jan 2, 2024"
        );
    }

    #[test]
    fn test_simple_table_pretty_aligns_columns() {
        let columns = [Column::new("TITLE"), Column::new("DATE")];
        let rows = vec![
            vec!["a".to_string(), "Jan 1, 2024".to_string()],
            vec!["longer title".to_string(), "Jan 2, 2024".to_string()],
        ];
        let out = simple_table(&pretty_ctx(), &columns, &rows);
        let line_with = |needle: &str| {
            out.lines()
                .find(|line| line.contains(needle))
                .expect("line present")
                .to_string()
        };
        let date_col = line_with("DATE").find("DATE");
        assert!(date_col.is_some());
        assert_eq!(line_with("Jan 1").find("Jan 1"), date_col);
        assert_eq!(line_with("Jan 2").find("Jan 2"), date_col);
    }

    #[test]
    fn test_page_strip_hidden_for_single_page() {
        assert_eq!(page_strip(&pretty_ctx(), &[PageMarker::Page(1)], 1, 1), None);
        assert_eq!(page_strip(&pretty_ctx(), &[], 1, 0), None);
    }

    #[test]
    fn test_page_strip_marks_current() {
        let strip = [
            PageMarker::Page(1),
            PageMarker::Ellipsis,
            PageMarker::Page(4),
            PageMarker::Page(5),
            PageMarker::Page(6),
            PageMarker::Page(7),
            PageMarker::Page(8),
            PageMarker::Ellipsis,
            PageMarker::Page(12),
        ];
        let ascii = UiContext {
            unicode: false,
            ..pretty_ctx()
        };
        assert_eq!(
            page_strip(&ascii, &strip, 6, 12).as_deref(),
            Some("< 1 ... 4 5 [6] 7 8 ... 12 >")
        );
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(&plain_ctx(), "Post not found", Some("check the id")),
            "error=Post not found\nhint=check the id"
        );
        assert_eq!(
            error_message(&pretty_ctx(), "Post not found", None),
            "[\u{2717}] Post not found"
        );
    }
}
