//! Escaping for HTML and Markdown output.
//!
//! Issue titles, descriptions, locations and recommendations come straight
//! from the analysis producer and frequently quote raw configuration lines
//! (`line vty 0 4`, `access-list 10 permit any`, `<secret>` placeholders).
//! Everything taken from a report must pass through one of these functions
//! before it is embedded in markup.

/// Rewrite each character through `map`; `None` keeps the character as is.
fn escape_with(s: &str, map: impl Fn(char) -> Option<&'static str>) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match map(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

const fn html_entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#x27;"),
        _ => None,
    }
}

/// Escape text for HTML element content.
///
/// ```
/// use secreport::reports::escape::escape_html;
///
/// assert_eq!(escape_html("enable secret <hash>"), "enable secret &lt;hash&gt;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    escape_with(s, html_entity)
}

/// Escape text for an HTML attribute value. Whitespace control characters
/// are encoded as well so they cannot end the attribute.
#[must_use]
pub fn escape_html_attr(s: &str) -> String {
    escape_with(s, |c| match c {
        '\n' => Some("&#10;"),
        '\r' => Some("&#13;"),
        '\t' => Some("&#9;"),
        other => html_entity(other),
    })
}

/// Escape text for a Markdown table cell.
///
/// ```
/// use secreport::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("permit | deny"), "permit \\| deny");
/// ```
#[must_use]
pub fn escape_markdown_table(s: &str) -> String {
    escape_with(s, |c| match c {
        '|' => Some("\\|"),
        '`' => Some("\\`"),
        '[' => Some("\\["),
        ']' => Some("\\]"),
        '\n' => Some(" "),
        '\r' => Some(""),
        _ => None,
    })
}

/// Escape text for inline Markdown (headings, paragraphs).
#[must_use]
pub fn escape_markdown_inline(s: &str) -> String {
    escape_with(s, |c| match c {
        '*' => Some("\\*"),
        '_' => Some("\\_"),
        '`' => Some("\\`"),
        '[' => Some("\\["),
        ']' => Some("\\]"),
        '#' => Some("\\#"),
        '!' => Some("\\!"),
        '~' => Some("\\~"),
        '|' => Some("\\|"),
        '<' => Some("\\<"),
        '>' => Some("\\>"),
        '\n' => Some(" "),
        '\r' => Some(""),
        _ => None,
    })
}

/// Escape text for a Markdown list item. Line breaks become `; ` so a
/// multi-line recommendation stays one bullet.
#[must_use]
pub fn escape_markdown_list(s: &str) -> String {
    escape_with(s, |c| match c {
        '*' => Some("\\*"),
        '`' => Some("\\`"),
        '[' => Some("\\["),
        ']' => Some("\\]"),
        '<' => Some("\\<"),
        '>' => Some("\\>"),
        '\n' => Some("; "),
        '\r' => Some(""),
        _ => None,
    })
}
