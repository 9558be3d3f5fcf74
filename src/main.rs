use std::process;

use clap::Parser;

use jira_md::cli::Args;
use jira_md::{app, ui};

fn main() {
    let args = Args::parse();

    if let Err(err) = app::run(args) {
        ui::error(&err.to_string());
        process::exit(1);
    }
}
