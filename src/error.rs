use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing field in Jira response: {0}")]
    MissingField(String),

    #[error("Invalid field {path}: expected {expected}")]
    InvalidField { path: String, expected: &'static str },

    #[error("Jira response contains no issue")]
    EmptyResponse,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
