//! Configuration error types
//!
//! The rendered message strings are part of the crate's observable contract:
//! the CLI layer presents them to the user verbatim, so their wording is
//! covered by tests and must stay stable.

use thiserror::Error;

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error reading configuration file
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    /// YAML parsing error, passed through verbatim
    #[error(transparent)]
    ParseError(#[from] serde_yaml::Error),

    /// JSON parsing error, passed through verbatim
    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),

    /// A required key is absent from its mapping
    #[error("Missing entry for key {key}.")]
    MissingEntry { key: String },

    /// A key holds a value of the wrong shape
    #[error("Wrong type for key {key}: expected {expected}, got {actual}.")]
    WrongType {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// An output names a template both by name and by path
    #[error(
        "You need to choose EITHER a named template OR a template path. \
         Found name '{name}' and path '{path}'"
    )]
    BothTemplateNameAndPath { name: String, path: String },

    /// An output names no template at all
    #[error(
        "You must specify a template name (-t) or path (-p).\n\n\
         To list all the available named templates, use the template-listing command."
    )]
    MissingTemplateNameAndPath,

    /// Post-load invariant violation
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}
