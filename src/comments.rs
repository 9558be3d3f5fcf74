//! Jira comment rendering

use serde::{Deserialize, Serialize};

use crate::markup::atlassian_to_markdown;

/// Label used when a comment carries no author display name
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// The author of a Jira comment
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Author {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

/// A single entry of `fields.comment.comments`
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Comment {
    #[serde(default)]
    pub author: Option<Author>,
    /// Raw Atlassian markup
    #[serde(default)]
    pub body: Option<String>,
}

impl Comment {
    pub fn new(author: Option<&str>, body: impl Into<String>) -> Self {
        Self {
            author: author.map(|name| Author {
                display_name: Some(name.to_string()),
            }),
            body: Some(body.into()),
        }
    }

    /// The author's display name, if Jira sent one
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref()?.display_name.as_deref()
    }
}

/// Render comments as Markdown sections separated by horizontal rules
///
/// Order is preserved. An empty slice yields an empty string.
pub fn format_comments_display(comments: &[Comment]) -> String {
    format_comments_with(comments, UNKNOWN_AUTHOR)
}

/// Same as [`format_comments_display`] with a custom fallback author label
pub fn format_comments_with(comments: &[Comment], unknown_author: &str) -> String {
    comments
        .iter()
        .map(|comment| {
            let name = comment.author_name().unwrap_or(unknown_author);
            let body = atlassian_to_markdown(comment.body.as_deref().unwrap_or(""));
            format!("### {}\n\n{}\n", name, body)
        })
        .collect::<Vec<_>>()
        .join("\n---\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_comments() {
        assert_eq!(format_comments_display(&[]), "");
    }

    #[test]
    fn test_single_comment() {
        let comments = vec![Comment::new(Some("Wu, Eric"), "h3. Update\r\nLooks +*good*+")];

        assert_eq!(
            format_comments_display(&comments),
            "### Wu, Eric\n\n### Update\nLooks **good**\n"
        );
    }

    #[test]
    fn test_comments_joined_in_order() {
        let comments = vec![
            Comment::new(Some("First"), "one"),
            Comment::new(Some("Second"), "two"),
        ];

        assert_eq!(
            format_comments_display(&comments),
            "### First\n\none\n\n---\n### Second\n\ntwo\n"
        );
    }

    #[test]
    fn test_missing_author_uses_fallback() {
        let comments: Vec<Comment> = serde_json::from_value(json!([
            { "body": "no author" },
            { "author": {}, "body": "no display name" },
            { "author": null, "body": "null author" },
        ]))
        .unwrap();

        let rendered = format_comments_display(&comments);

        assert_eq!(rendered.matches("### Unknown Author").count(), 3);
    }

    #[test]
    fn test_custom_fallback_label() {
        let comments = vec![Comment::new(None, "hi")];
        assert_eq!(format_comments_with(&comments, "Someone"), "### Someone\n\nhi\n");
    }

    #[test]
    fn test_missing_body_renders_empty() {
        let comments: Vec<Comment> =
            serde_json::from_value(json!([{ "author": { "displayName": "Ann" } }])).unwrap();

        assert_eq!(format_comments_display(&comments), "### Ann\n\n\n");
    }

    #[test]
    fn test_deserialize_jira_comment() {
        let comment: Comment = serde_json::from_value(json!({
            "author": {
                "accountId": "619622c7c75da8007242597b",
                "displayName": "Thakur, Navraj",
                "active": true
            },
            "body": "!https://x/content/1|height=369,width=800!",
            "created": "2025-02-25T06:48:40.693-0800",
            "id": "1043117"
        }))
        .unwrap();

        assert_eq!(comment.author_name(), Some("Thakur, Navraj"));
        assert_eq!(
            format_comments_display(&[comment]),
            "### Thakur, Navraj\n\n![](https://x/content/1)\n"
        );
    }
}
