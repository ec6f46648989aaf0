//! Terminal output for the Bulletin CLI.
//!
//! - **context**: TTY, width, color, unicode and display zone
//! - **mode**: json / plain / pretty resolution
//! - **theme**: badges, symbols, colors
//! - **render**: headers, tables, page strip, receipts, hints
//! - **format**: truncation, wrapping, dates
//!
//! Commands build a [`UiContext`] once and hand it to every render call.
//! JSON output bypasses these helpers entirely.

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::{is_interactive, UiContext};
pub use mode::OutputFormat;
pub use theme::Badge;

pub use render::{
    badge, blank_line, header, hint, kv, page_strip, print, print_error, receipt, simple_table,
    Column,
};

pub use format::{format_date, format_datetime, title, wrap};
