use std::path::PathBuf;

use clap::Parser;

/// Render a Jira issue payload as a Markdown ticket summary
#[derive(Parser, Debug, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Jira response JSON file; reads stdin when omitted or `-`
    #[clap(value_parser)]
    pub input: Option<PathBuf>,

    /// Path to the YAML config file [default: ~/.config/jira-md/config.yaml]
    #[clap(short, long, value_parser, env = "JIRA_MD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Custom field holding the root cause, overrides the config file
    #[clap(short, long, value_parser)]
    pub root_cause_field: Option<String>,

    /// Print the `{"result": ...}` mapping instead of raw Markdown
    #[clap(short, long, value_parser, default_value_t = false)]
    pub json: bool,

    /// Write the output to a file instead of stdout
    #[clap(short, long, value_parser)]
    pub output: Option<PathBuf>,

    /// Suppress status lines
    #[clap(short, long, value_parser, default_value_t = false)]
    pub quiet: bool,
}

impl Args {
    /// The input path, or `None` when the payload comes from stdin
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }
}
