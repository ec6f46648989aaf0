//! Plain-text extraction and collation for post content.
//!
//! Post bodies are HTML produced by a rich-text editor. Search and the
//! `title` sort only care about the visible words, so this module reduces
//! markup to whitespace-normalized text in document order:
//!
//! - tags are dropped; block-level tags and `<br>` separate words
//! - `<script>` and `<style>` bodies are dropped along with comments
//! - named entities in common use and numeric references are decoded
//!
//! It is deliberately not an HTML parser. Malformed markup degrades to
//! "drop the broken tag", never to an error.

use std::cmp::Ordering;

/// Tags whose boundaries separate words in the rendered text.
const BREAKING_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav",
    "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Tags whose content is never visible.
const HIDDEN_TAGS: &[&str] = &["script", "style", "template"];

/// Longest entity body considered (`&` and `;` excluded).
const MAX_ENTITY_LEN: usize = 32;

/// Visible text of an HTML fragment, whitespace-normalized.
pub fn plain_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(pos) = rest.find(&['<', '&'][..]) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        rest = if tail.starts_with('<') {
            consume_markup(tail, &mut out)
        } else {
            consume_entity(tail, &mut out)
        };
    }
    out.push_str(rest);

    normalize_whitespace(&out)
}

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_ignore_case(text: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&needle.to_lowercase())
}

/// Collapse runs of whitespace (including non-breaking spaces) to one space.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn consume_markup<'a>(tail: &'a str, out: &mut String) -> &'a str {
    if let Some(comment) = tail.strip_prefix("<!--") {
        return match comment.find("-->") {
            Some(end) => &comment[end + 3..],
            None => "",
        };
    }

    let starts_tag = tail[1..]
        .chars()
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '/' || c == '!' || c == '?')
        .unwrap_or(false);
    if !starts_tag {
        // A bare `<` in text, e.g. "a < b".
        out.push('<');
        return &tail[1..];
    }

    let Some(end) = tag_end(tail) else {
        return "";
    };
    let inner = &tail[1..end];
    let after = &tail[end + 1..];

    let closing = inner.starts_with('/');
    let name: String = inner
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if BREAKING_TAGS.contains(&name.as_str()) {
        out.push(' ');
    }

    let self_closing = inner.ends_with('/');
    if !closing && !self_closing && HIDDEN_TAGS.contains(&name.as_str()) {
        return skip_hidden(after, &name);
    }

    after
}

/// Byte index of the `>` closing the tag at the start of `tail`, ignoring
/// any `>` inside quoted attribute values.
fn tag_end(tail: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (idx, c) in tail.char_indices().skip(1) {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '>' => return Some(idx),
            None => {}
        }
    }
    None
}

fn skip_hidden<'a>(after: &'a str, name: &str) -> &'a str {
    // ASCII lowercasing keeps byte offsets, so indices map back onto `after`.
    let lowered = after.to_ascii_lowercase();
    let Some(close) = lowered.find(&format!("</{}", name)) else {
        return "";
    };
    match after[close..].find('>') {
        Some(end) => &after[close + end + 1..],
        None => "",
    }
}

fn consume_entity<'a>(tail: &'a str, out: &mut String) -> &'a str {
    let body = &tail[1..];
    let decoded = body
        .find(';')
        .filter(|&semi| semi > 0 && semi <= MAX_ENTITY_LEN)
        .and_then(|semi| decode_entity(&body[..semi]).map(|c| (c, semi)));

    match decoded {
        Some((c, semi)) => {
            out.push(c);
            &body[semi + 1..]
        }
        None => {
            out.push('&');
            body
        }
    }
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(numeric) = name.strip_prefix('#') {
        let code = match numeric.strip_prefix(&['x', 'X'][..]) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }

    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{00A0}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        "laquo" => '\u{00AB}',
        "raquo" => '\u{00BB}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201C}',
        "rdquo" => '\u{201D}',
        "copy" => '\u{00A9}',
        "reg" => '\u{00AE}',
        "trade" => '\u{2122}',
        "euro" => '\u{20AC}',
        _ => return None,
    };
    Some(c)
}

/// Locale-style ordering of two plain-text strings.
///
/// Compares in three passes, like a collator at tertiary strength:
/// 1. letters with accents and case removed
/// 2. accents (unaccented first)
/// 3. case (lowercase first)
pub fn collate(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .map(strip_accent)
        .cmp(b.chars().flat_map(char::to_lowercase).map(strip_accent));

    primary
        .then_with(|| {
            a.chars()
                .flat_map(char::to_lowercase)
                .cmp(b.chars().flat_map(char::to_lowercase))
        })
        .then_with(|| case_order(a, b))
}

fn case_order(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .find(|(x, y)| x != y)
        .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        })
        .unwrap_or_else(|| a.chars().count().cmp(&b.chars().count()))
}

fn strip_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' => 's',
        'ť' | 'ţ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        'ё' => 'е',
        'й' => 'и',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags() {
        assert_eq!(plain_text("<p>Hello <strong>world</strong></p>"), "Hello world");
    }

    #[test]
    fn test_nested_formatting_keeps_words_together() {
        assert_eq!(plain_text("<p>un<em>believ</em>able</p>"), "unbelievable");
    }

    #[test]
    fn test_blocks_separate_words() {
        assert_eq!(
            plain_text("<h1>Title</h1><p>First</p><ul><li>a</li><li>b</li></ul>line<br>break"),
            "Title First a b line break"
        );
    }

    #[test]
    fn test_images_and_hidden_content_contribute_nothing() {
        let html = r#"<p>Look<img src="x.png" alt="a > b"></p><script>var x = "<p>no</p>";</script><style>p{}</style><!-- note -->"#;
        assert_eq!(plain_text(html), "Look");
    }

    #[test]
    fn test_decodes_entities() {
        assert_eq!(
            plain_text("<p>Fish &amp; chips&nbsp;&#8211; &#x41;&lt;3 &bogus; &</p>"),
            "Fish & chips \u{2013} A<3 &bogus; &"
        );
    }

    #[test]
    fn test_bare_angle_bracket_is_text() {
        assert_eq!(plain_text("1 < 2 and 3 > 2"), "1 < 2 and 3 > 2");
    }

    #[test]
    fn test_unterminated_markup() {
        assert_eq!(plain_text("before <p class=\"x"), "before");
        assert_eq!(plain_text("before <!-- never closed"), "before");
    }

    #[test]
    fn test_plain_text_passthrough_and_empty() {
        assert_eq!(plain_text("  just\n\ttext  "), "just text");
        assert_eq!(plain_text(""), "");
        assert_eq!(plain_text("<p></p>"), "");
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Breaking News", "news"));
        assert!(contains_ignore_case("Breaking News", "BREAK"));
        assert!(contains_ignore_case("Привет Мир", "мир"));
        assert!(!contains_ignore_case("Breaking News", "sport"));
        assert!(contains_ignore_case("anything", ""));
        assert!(contains_ignore_case("", ""));
    }

    #[test]
    fn test_collate_ignores_case_at_first() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_collate_accents_sort_with_base_letter() {
        assert_eq!(collate("école", "ecole"), Ordering::Greater);
        assert_eq!(collate("école", "fable"), Ordering::Less);
    }

    #[test]
    fn test_collate_lowercase_first_on_tie() {
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("same", "same"), Ordering::Equal);
        assert_eq!(collate("ab", "abc"), Ordering::Less);
    }
}
