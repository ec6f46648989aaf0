//! String and date formatting for listings.

use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;

/// Cut `s` to at most `max_len` characters, ending in "..." when shortened.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let kept: String = s.chars().take(max_len - 3).collect();
    format!("{}...", kept)
}

/// Title shown for a post: its plain text, or a placeholder when empty.
pub fn title(text: &str, max_len: usize) -> String {
    if text.is_empty() {
        "(empty)".to_string()
    } else {
        truncate(text, max_len)
    }
}

/// Word-wrap `text` to `width` columns, keeping blank lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
            } else if line.chars().count() + 1 + word.chars().count() <= width {
                line.push(' ');
                line.push_str(word);
            } else {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
            }
        }
        lines.push(line);
    }
    lines
}

/// Listing date, e.g. `Jan 5, 2024`.
pub fn format_date(dt: &DateTime<Utc>, timezone: Option<Tz>) -> String {
    const FORMAT: &str = "%b %-d, %Y";
    match timezone {
        Some(tz) => dt.with_timezone(&tz).format(FORMAT).to_string(),
        None => dt.with_timezone(&Local).format(FORMAT).to_string(),
    }
}

/// Full timestamp. Pretty output uses the display zone, plain output RFC 3339 UTC.
pub fn format_datetime(dt: &DateTime<Utc>, timezone: Option<Tz>, pretty: bool) -> String {
    const FORMAT: &str = "%b %-d, %Y %H:%M %Z";
    if !pretty {
        return dt.to_rfc3339();
    }
    match timezone {
        Some(tz) => dt.with_timezone(&tz).format(FORMAT).to_string(),
        None => dt.with_timezone(&Local).format("%b %-d, %Y %H:%M").to_string(),
    }
}
