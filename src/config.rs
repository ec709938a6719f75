//! Top-level configuration assembly

use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::Value;

use crate::entry::EntrySpec;
use crate::error::{ConfigError, ConfigResult};
use crate::validation::{validate_required_string, Validatable};
use crate::value;

/// Top-level key for the global input directory
pub const INPUT_DIR_KEY: &str = "inputDir";
/// Top-level key for the global output directory
pub const OUTPUT_DIR_KEY: &str = "outputDir";

/// The validated configuration for one run of the pipeline.
///
/// Built once from the parsed document, then owned by the generation engine
/// for the rest of the run; nothing mutates it after construction.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Config {
    /// Directory input paths are resolved against
    #[serde(rename = "inputDir", skip_serializing_if = "Option::is_none")]
    pub input_dir: Option<String>,
    /// Directory output paths are resolved against
    #[serde(rename = "outputDir", skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
    /// Entries per command, in first-seen declaration order
    #[serde(flatten)]
    pub commands: IndexMap<String, Vec<EntrySpec>>,
}

impl Config {
    /// Build a configuration from a parsed document.
    ///
    /// The walk is fail-fast and single-pass: the global directory keys are
    /// read first, then every remaining top-level key is treated as a command
    /// name in declaration order. The first structural problem aborts the
    /// whole load.
    pub fn from_value(document: &Value) -> ConfigResult<Self> {
        let map = match document {
            Value::Mapping(map) => map,
            other => {
                return Err(ConfigError::WrongType {
                    key: "config".to_string(),
                    expected: "Dictionary",
                    actual: value::type_name(other),
                })
            }
        };

        let input_dir = value::optional_string(map, INPUT_DIR_KEY, INPUT_DIR_KEY)?;
        let output_dir = value::optional_string(map, OUTPUT_DIR_KEY, OUTPUT_DIR_KEY)?;

        let mut commands = IndexMap::new();
        for (key, entries) in map {
            let command = match key {
                Value::String(name) => name.as_str(),
                other => {
                    return Err(ConfigError::WrongType {
                        key: "config".to_string(),
                        expected: "String",
                        actual: value::type_name(other),
                    })
                }
            };
            if command == INPUT_DIR_KEY || command == OUTPUT_DIR_KEY {
                continue;
            }

            // A command key with no content parses as null.
            if matches!(entries, Value::Null) {
                return Err(ConfigError::MissingEntry {
                    key: command.to_string(),
                });
            }

            let entries =
                value::one_or_many(entries, command, "Dictionary or array of Dictionaries")?
                    .into_iter()
                    .map(|entry| EntrySpec::from_value(entry, command))
                    .collect::<ConfigResult<Vec<_>>>()?;
            commands.insert(command.to_string(), entries);
        }

        Ok(Self {
            input_dir,
            output_dir,
            commands,
        })
    }

    /// Render the normalized configuration back to YAML, shorthand forms
    /// expanded.
    pub fn to_yaml(&self) -> String {
        serde_yaml::to_string(self).unwrap_or_else(|_| "# failed to render configuration".to_string())
    }
}

impl Validatable for Config {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(input_dir) = &self.input_dir {
            validate_required_string(input_dir, INPUT_DIR_KEY)?;
        }
        if let Some(output_dir) = &self.output_dir {
            validate_required_string(output_dir, OUTPUT_DIR_KEY)?;
        }
        for (command, entries) in &self.commands {
            if entries.is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "command {command} has no entries"
                )));
            }
            for entry in entries {
                entry.validate()?;
            }
        }
        Ok(())
    }
}
