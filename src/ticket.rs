//! Ticket assembly from a Jira "get issue" response
//!
//! The response is expected to be a list whose first element wraps the issue
//! under an `issue` key. Every field on the paths read here is required; a
//! missing key is reported with its full path.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::comments::{format_comments_with, Comment};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::markup::atlassian_to_markdown;
use crate::template::render_ticket;

/// Converted sections of a single Jira issue
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ticket {
    /// The issue key (e.g., "ER-14520")
    pub key: String,
    /// Plain-text title, copied as is
    pub summary: String,
    pub root_cause: String,
    pub description: String,
    /// All comments rendered as one Markdown block
    pub comments: String,
    pub comment_count: usize,
}

/// The mapping handed back to the calling workflow
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TicketOutput {
    pub result: String,
}

/// Format a Jira response with the default configuration
pub fn main(jira_response: &Value) -> Result<TicketOutput> {
    assemble(jira_response, &Config::default())
}

/// Extract a ticket from the response and render it into the configured template
pub fn assemble(jira_response: &Value, config: &Config) -> Result<TicketOutput> {
    let ticket = extract(jira_response, config)?;
    Ok(TicketOutput {
        result: render_ticket(&config.template.body, &ticket),
    })
}

/// Pull the ticket sections out of the response and convert them to Markdown
pub fn extract(jira_response: &Value, config: &Config) -> Result<Ticket> {
    let issue = first_issue(jira_response)?;
    let fields = field(issue, "fields", "[0].issue")?;

    let key = expect_str(field(issue, "key", "[0].issue")?, "[0].issue.key")?;
    let summary = text_field(fields, "summary")?;
    let root_cause = text_field(fields, &config.jira.root_cause_field)?;
    let description = text_field(fields, "description")?;
    let comments = comments(fields)?;

    Ok(Ticket {
        key: key.to_string(),
        summary: summary.to_string(),
        root_cause: atlassian_to_markdown(root_cause),
        description: atlassian_to_markdown(description),
        comments: format_comments_with(&comments, &config.comments.unknown_author),
        comment_count: comments.len(),
    })
}

fn first_issue(jira_response: &Value) -> Result<&Value> {
    let entry = jira_response
        .as_array()
        .and_then(|entries| entries.first())
        .ok_or(Error::EmptyResponse)?;

    field(entry, "issue", "[0]")
}

fn field<'a>(value: &'a Value, name: &str, parent: &str) -> Result<&'a Value> {
    value
        .get(name)
        .ok_or_else(|| Error::MissingField(format!("{}.{}", parent, name)))
}

fn expect_str<'a>(value: &'a Value, path: &str) -> Result<&'a str> {
    value.as_str().ok_or_else(|| Error::InvalidField {
        path: path.to_string(),
        expected: "string",
    })
}

/// Read a markup field under `issue.fields`; `null` counts as empty text
fn text_field<'a>(fields: &'a Value, name: &str) -> Result<&'a str> {
    let path = format!("[0].issue.fields.{}", name);
    match field(fields, name, "[0].issue.fields")? {
        Value::Null => Ok(""),
        value => expect_str(value, &path),
    }
}

fn comments(fields: &Value) -> Result<Vec<Comment>> {
    let comment = field(fields, "comment", "[0].issue.fields")?;
    let list = field(comment, "comments", "[0].issue.fields.comment")?;

    if !list.is_array() {
        return Err(Error::InvalidField {
            path: "[0].issue.fields.comment.comments".to_string(),
            expected: "array",
        });
    }

    Ok(Vec::<Comment>::deserialize(list)?)
}
