use std::io::{Read, Write};
use std::path::Path;

use serde_json::Value;

use crate::cli::Args;
use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::template;
use crate::ticket::{self, TicketOutput};
use crate::ui;

/// Main application entry point
pub fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let response = read_response(&args)?;

    let ticket = ticket::extract(&response, &config)?;
    if !args.quiet {
        ui::status("Jira ticket", &ticket.key);
        ui::status("Root cause field", &config.jira.root_cause_field);
        ui::status("Comments", &ticket.comment_count.to_string());
        if ticket.root_cause.is_empty() {
            ui::warn("Root cause is empty");
        }
    }

    let output = TicketOutput {
        result: template::render_ticket(&config.template.body, &ticket),
    };
    let rendered = if args.json {
        serde_json::to_string_pretty(&output)?
    } else {
        output.result
    };

    write_output(args.output.as_deref(), &rendered)?;

    if let (Some(path), false) = (&args.output, args.quiet) {
        ui::status("Written to", &path.display().to_string());
    }

    Ok(())
}

/// Load the config file given on the command line, or the default one
fn load_config(args: &Args) -> Result<Config> {
    let mut config = match (&args.config, config::get_config_path()) {
        (Some(path), _) => {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            Config::load(path)?
        }
        (None, Some(default_path)) => Config::load(default_path)?,
        (None, None) => Config::default(),
    };

    if let Some(field) = &args.root_cause_field {
        config.jira.root_cause_field = field.clone();
    }

    Ok(config)
}

fn read_response(args: &Args) -> Result<Value> {
    let contents = match args.input_path() {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    Ok(serde_json::from_str(&contents)?)
}

fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, rendered)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
