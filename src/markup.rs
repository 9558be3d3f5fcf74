//! Atlassian wiki markup to Markdown conversion
//!
//! The conversion is a fixed sequence of regex passes. It only rewrites the
//! handful of constructs Jira comments and descriptions actually use; anything
//! else passes through untouched.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref BOLD: Regex = Regex::new(r"\+\*(.+?)\*\+").unwrap();
    static ref HEADING: Regex = Regex::new(r"(?m)^h([1-6])\.\s+").unwrap();
    static ref BLOCKQUOTE: Regex = Regex::new(r"(?m)^\s*>").unwrap();
    static ref IMAGE: Regex = Regex::new(r"!([^|!]+)\|[^!]*!").unwrap();
    static ref ESCAPED_RULE: Regex = Regex::new(r"\\-+").unwrap();
    // includes U+00A0, which Jira pastes in from rich-text editors
    static ref INLINE_WHITESPACE: Regex = Regex::new(r"[ \t\u{00A0}]+").unwrap();
    static ref BLANK_LINES: Regex = Regex::new(r"\n{3,}").unwrap();
    // CRLF, LF, CR, VT, FF, FS, GS, RS, NEL, LS and PS all end a line
    static ref LINE_BREAK: Regex =
        Regex::new(r"\r\n|[\n\r\x0b\x0c\x1c-\x1e\x{85}\x{2028}\x{2029}]").unwrap();
}

/// Convert Atlassian wiki markup to Markdown
///
/// Accepts arbitrary text and never fails. Headings and blockquotes are only
/// recognised at the start of a line.
///
/// # Example
/// ```
/// use jira_md::markup::atlassian_to_markdown;
///
/// assert_eq!(atlassian_to_markdown("h2. Title"), "## Title");
/// assert_eq!(atlassian_to_markdown("+*bold*+"), "**bold**");
/// ```
pub fn atlassian_to_markdown(text: &str) -> String {
    let text = normalize_line_breaks(text);

    let text = BOLD.replace_all(&text, "**${1}**");
    let text = HEADING.replace_all(&text, |caps: &Captures| {
        let level: usize = caps[1].parse().unwrap_or(1);
        format!("{} ", "#".repeat(level))
    });
    let text = BLOCKQUOTE.replace_all(&text, ">");
    let text = IMAGE.replace_all(&text, "![](${1})");
    let text = ESCAPED_RULE.replace_all(&text, "---");
    let text = INLINE_WHITESPACE.replace_all(&text, " ");
    let text = BLANK_LINES.replace_all(&text, "\n\n");

    strip_trailing_whitespace(&text)
        .trim_matches(is_space)
        .to_string()
}

/// Turn literal `\n` escapes and CRLF pairs into plain newlines
fn normalize_line_breaks(text: &str) -> String {
    text.replace("\\n", "\n").replace("\r\n", "\n")
}

/// Split on any line separator, trim each line's end, rejoin with `\n`
fn strip_trailing_whitespace(text: &str) -> String {
    LINE_BREAK
        .split(text)
        .map(|line| line.trim_end_matches(is_space))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Unicode whitespace plus the ASCII information separators
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
