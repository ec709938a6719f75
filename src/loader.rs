//! Configuration loading and environment variable handling

use std::path::Path;

use serde_yaml::Value;

use crate::config::Config;
use crate::error::ConfigResult;
use crate::validation::Validatable;

/// Configuration loader with environment variable support
pub struct ConfigLoader {
    /// Environment variable prefix
    prefix: String,
}

impl ConfigLoader {
    /// Create a new config loader with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "STENCIL".to_string(),
        }
    }

    /// Create a new config loader with custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Load configuration from a file, dispatching on its extension: `.json`
    /// goes through the JSON parser, everything else through YAML.
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<Config> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => self.from_json_str(&content),
            _ => self.from_yaml_str(&content),
        }
    }

    /// Load configuration from a YAML document
    pub fn from_yaml_str(&self, content: &str) -> ConfigResult<Config> {
        let document: Value = serde_yaml::from_str(content)?;
        self.from_value(&document)
    }

    /// Load configuration from a JSON document, with key order preserved so
    /// command order matches the file
    pub fn from_json_str(&self, content: &str) -> ConfigResult<Config> {
        let document: serde_json::Value = serde_json::from_str(content)?;
        let document = serde_yaml::to_value(&document)?;
        self.from_value(&document)
    }

    /// Validate a parsed document into a [`Config`], applying environment
    /// overrides for the global directories
    pub fn from_value(&self, document: &Value) -> ConfigResult<Config> {
        let mut config = Config::from_value(document)?;
        self.apply_env_overrides(&mut config);
        config.validate()?;
        log::debug!("loaded configuration with {} command(s)", config.commands.len());
        Ok(config)
    }

    /// Apply environment variable overrides to the global directories
    fn apply_env_overrides(&self, config: &mut Config) {
        if let Ok(input_dir) = self.get_env_var("INPUT_DIR") {
            log::debug!("overriding inputDir from environment: {input_dir}");
            config.input_dir = Some(input_dir);
        }

        if let Ok(output_dir) = self.get_env_var("OUTPUT_DIR") {
            log::debug!("overriding outputDir from environment: {output_dir}");
            config.output_dir = Some(output_dir);
        }
    }

    /// Get environment variable with prefix
    fn get_env_var(&self, name: &str) -> Result<String, std::env::VarError> {
        std::env::var(format!("{}_{}", self.prefix, name))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_front_door() {
        let json = r#"{
            "outputDir": "Generated/",
            "strings": {
                "paths": "Sources/",
                "outputs": {"templateName": "structured-swift5", "output": "strings.swift"}
            }
        }"#;

        let config = ConfigLoader::new().from_json_str(json).unwrap();
        assert_eq!(config.output_dir.as_deref(), Some("Generated/"));
        assert_eq!(config.commands["strings"][0].paths, ["Sources/"]);
    }

    #[test]
    fn test_yaml_parse_errors_pass_through() {
        let err = ConfigLoader::new().from_yaml_str("strings: [unclosed").unwrap_err();
        // Whatever the parser said is reported verbatim, not rewrapped.
        assert!(!err.to_string().starts_with("Failed to parse"));
    }
}
