//! Per-command configuration entries

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::error::{ConfigError, ConfigResult};
use crate::template::OutputSpec;
use crate::validation::Validatable;
use crate::value;

/// One unit of generation work for a command: the inputs to scan, free-form
/// template parameters, and the outputs to render from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntrySpec {
    /// Input paths, relative to the global input directory when one is set
    pub paths: Vec<String>,
    /// Free-form parameters handed through to the template engine untouched;
    /// scalars, lists and mappings may nest arbitrarily
    #[serde(skip_serializing_if = "Mapping::is_empty")]
    pub parameters: Mapping,
    /// Outputs to render, in declaration order
    pub outputs: Vec<OutputSpec>,
}

impl EntrySpec {
    /// Build one entry from its mapping. Fields are checked in declaration
    /// order: `paths`, then `parameters`, then `outputs`.
    pub(crate) fn from_value(entry: &Value, command: &str) -> ConfigResult<Self> {
        let map = match entry {
            Value::Mapping(map) => map,
            other => {
                return Err(ConfigError::WrongType {
                    key: command.to_string(),
                    expected: "Dictionary or array of Dictionaries",
                    actual: value::type_name(other),
                })
            }
        };

        let paths_key = format!("{command}.paths");
        let paths = value::string_list(
            value::require(map, "paths", &paths_key)?,
            &paths_key,
            "Path or array of Paths",
        )?;

        let parameters = match map.get("parameters") {
            Some(Value::Null) | None => Mapping::new(),
            Some(Value::Mapping(parameters)) => parameters.clone(),
            Some(other) => {
                return Err(ConfigError::WrongType {
                    key: format!("{command}.parameters"),
                    expected: "Dictionary",
                    actual: value::type_name(other),
                })
            }
        };

        let outputs_key = format!("{command}.outputs");
        let outputs = value::one_or_many(
            value::require(map, "outputs", &outputs_key)?,
            &outputs_key,
            "Dictionary or array of Dictionaries",
        )?
        .into_iter()
        .map(|output| OutputSpec::from_value(output, command))
        .collect::<ConfigResult<Vec<_>>>()?;

        Ok(Self {
            paths,
            parameters,
            outputs,
        })
    }
}

impl Validatable for EntrySpec {
    fn validate(&self) -> ConfigResult<()> {
        if self.paths.is_empty() {
            return Err(ConfigError::ValidationError(
                "entry has no input paths".to_string(),
            ));
        }
        if self.outputs.is_empty() {
            return Err(ConfigError::ValidationError(
                "entry has no outputs".to_string(),
            ));
        }
        for output in &self.outputs {
            output.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateRef;

    fn entry(yaml: &str) -> ConfigResult<EntrySpec> {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        EntrySpec::from_value(&value, "strings")
    }

    #[test]
    fn test_paths_shorthand_is_normalized() {
        let scalar = entry("{paths: Sources/, outputs: {templateName: t, output: o.swift}}")
            .unwrap();
        let list = entry("{paths: [Sources/], outputs: {templateName: t, output: o.swift}}")
            .unwrap();
        assert_eq!(scalar, list);
        assert_eq!(scalar.paths, vec!["Sources/".to_string()]);
    }

    #[test]
    fn test_parameters_default_to_empty() {
        let spec = entry("{paths: Sources/, outputs: {templateName: t, output: o.swift}}")
            .unwrap();
        assert!(spec.parameters.is_empty());
    }

    #[test]
    fn test_parameters_must_be_a_mapping() {
        let err = entry(
            "{paths: Sources/, parameters: [a, b], outputs: {templateName: t, output: o.swift}}",
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Wrong type for key strings.parameters: expected Dictionary, got Array<Any>."
        );
    }

    #[test]
    fn test_outputs_shorthand_is_normalized() {
        let spec = entry("{paths: Sources/, outputs: {templateName: t, output: o.swift}}")
            .unwrap();
        assert_eq!(spec.outputs.len(), 1);
        assert_eq!(spec.outputs[0].template, TemplateRef::Name("t".into()));
    }

    #[test]
    fn test_missing_paths() {
        let err = entry("{outputs: {templateName: t, output: o.swift}}").unwrap_err();
        assert_eq!(err.to_string(), "Missing entry for key strings.paths.");
    }

    #[test]
    fn test_missing_outputs() {
        let err = entry("{paths: Sources/}").unwrap_err();
        assert_eq!(err.to_string(), "Missing entry for key strings.outputs.");
    }

    #[test]
    fn test_paths_checked_before_outputs() {
        // Both keys are missing; the walk reports paths first.
        let err = entry("{parameters: {foo: 1}}").unwrap_err();
        assert_eq!(err.to_string(), "Missing entry for key strings.paths.");
    }
}
