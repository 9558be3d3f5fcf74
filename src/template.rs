//! Ticket body template handling
//!
//! The rendered ticket is a template with `{{placeholder}}` markers for each
//! section. The layout can be replaced through configuration.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::ticket::Ticket;

/// Layout used when the configuration does not provide one
pub const DEFAULT_TEMPLATE: &str = "
**Jira Ticket** {{key}}

**Summary:** {{summary}}

**Root Cause:**
{{root_cause}}

**Description:**

{{description}}

**Comment:**

{{comments}}
";

lazy_static! {
    static ref UNKNOWN_PLACEHOLDER: Regex = Regex::new(r"(?m)^.*\{\{[^}]+\}\}.*\n?").unwrap();
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{(\w+)\}\}").unwrap();
}

/// Render a ticket into the given template
///
/// # Arguments
/// * `template` - Template text with `{{placeholder}}` markers
/// * `ticket` - The extracted, already converted ticket sections
///
/// # Returns
/// The template with every known placeholder replaced. Lines holding
/// placeholders that are not recognised are dropped. Section text is
/// inserted verbatim and never scanned for placeholders itself.
pub fn render_ticket(template: &str, ticket: &Ticket) -> String {
    let sections = [
        ("key", ticket.key.as_str()),
        ("summary", ticket.summary.as_str()),
        ("root_cause", ticket.root_cause.as_str()),
        ("description", ticket.description.as_str()),
        ("comments", ticket.comments.as_str()),
    ];

    let body = remove_unknown_placeholders(template, &sections.map(|(name, _)| name));

    PLACEHOLDER
        .replace_all(&body, |caps: &Captures| {
            sections
                .iter()
                .find(|(name, _)| *name == &caps[1])
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .to_string()
}

fn placeholder(name: &str) -> String {
    format!("{{{{{}}}}}", name)
}

/// Remove lines that carry a placeholder outside of `known`
fn remove_unknown_placeholders(template: &str, known: &[&str]) -> String {
    UNKNOWN_PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let line = &caps[0];
            let stripped = known
                .iter()
                .fold(line.to_string(), |acc, name| acc.replace(&placeholder(name), ""));

            if stripped.contains("{{") && stripped.contains("}}") {
                String::new()
            } else {
                line.to_string()
            }
        })
        .to_string()
}
