//! Configuration management for jira-md
//!
//! Settings live in an optional YAML file. Every key has a default, so a
//! missing file simply yields [`Config::default`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::comments::UNKNOWN_AUTHOR;
use crate::error::{Error, Result};
use crate::template::DEFAULT_TEMPLATE;

/// The name of the package, used for config directory naming
const PKG_NAME: &str = "jira-md";

/// Jira custom field that holds the root cause text
pub const DEFAULT_ROOT_CAUSE_FIELD: &str = "customfield_10205";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub jira: JiraConfig,
    pub comments: CommentsConfig,
    pub template: TemplateConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct JiraConfig {
    /// Key under `issue.fields` read as the root cause section
    pub root_cause_field: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CommentsConfig {
    pub unknown_author: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    /// Ticket layout with `{{placeholder}}` markers
    pub body: String,
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self {
            root_cause_field: DEFAULT_ROOT_CAUSE_FIELD.to_string(),
        }
    }
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            unknown_author: UNKNOWN_AUTHOR.to_string(),
        }
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            body: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// Returns the defaults when the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.jira.root_cause_field.trim().is_empty() {
            return Err(Error::Config("jira.root_cause_field must not be empty".into()));
        }
        Ok(())
    }
}

/// Get the configuration directory path
///
/// Returns `~/.config/jira-md/`, or `None` when HOME is not set.
pub fn get_config_dir() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".config").join(PKG_NAME))
}

/// Get the default path of the config file
///
/// Returns `~/.config/jira-md/config.yaml`.
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_get_config_path_ends_with_config_yaml() {
        if let Some(path) = get_config_path() {
            assert!(path.ends_with("config.yaml"));
            assert!(path.to_string_lossy().contains(PKG_NAME));
        }
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.jira.root_cause_field, "customfield_10205");
        assert_eq!(config.comments.unknown_author, "Unknown Author");
    }

    #[test]
    fn test_load_partial_file_keeps_other_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "jira:\n  root_cause_field: customfield_42").unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.jira.root_cause_field, "customfield_42");
        assert_eq!(config.template.body, DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_empty_file_returns_defaults() {
        let file = NamedTempFile::new().unwrap();
        assert_eq!(Config::load(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result = Config::from_yaml("jira:\n  url: https://example.atlassian.net\n");
        assert!(matches!(result, Err(Error::Yaml(_))));
    }

    #[test]
    fn test_empty_root_cause_field_rejected() {
        let result = Config::from_yaml("jira:\n  root_cause_field: \"\"\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
