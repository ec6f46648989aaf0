//! Input and parsing helpers for the CLI.
//!
//! - Post content from a flag, stdin or an editor (`input`)
//! - Dates and page sizes (`parsing`)

mod input;
mod parsing;

pub use input::read_content;
pub use parsing::{parse_datetime, validate_page_size};
