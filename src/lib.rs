//! # jira-md
//!
//! Converts Atlassian wiki markup to Markdown and renders Jira issues as
//! readable ticket summaries.

pub mod app;
pub mod cli;
pub mod comments;
pub mod config;
pub mod error;
pub mod markup;
pub mod template;
pub mod ticket;
pub mod ui;

// Re-export commonly used types
pub use comments::{format_comments_display, Comment};
pub use config::Config;
pub use error::{Error, Result};
pub use markup::atlassian_to_markdown;
pub use ticket::{Ticket, TicketOutput};
