//! Template references and output destinations

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_yaml::{Mapping, Value};

use crate::error::{ConfigError, ConfigResult};
use crate::validation::{validate_required_string, Validatable};
use crate::value;

/// A reference to the template rendering one output: either one of the named
/// templates shipped with the tool, or a custom template file on disk.
///
/// Every output carries exactly one of the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateRef {
    /// Named template, resolved by the rendering engine
    Name(String),
    /// Filesystem path to a custom template
    Path(String),
}

impl TemplateRef {
    /// Resolve the template choice from an output mapping.
    ///
    /// Empty strings count as absent, so `templateName: ""` next to a real
    /// `templatePath` is not an exclusivity violation.
    fn from_mapping(map: &Mapping, command: &str) -> ConfigResult<Self> {
        let name = value::optional_string(
            map,
            "templateName",
            &format!("{command}.templateName"),
        )?
        .filter(|name| !name.is_empty());
        let path = value::optional_string(
            map,
            "templatePath",
            &format!("{command}.templatePath"),
        )?
        .filter(|path| !path.is_empty());

        match (name, path) {
            (Some(name), Some(path)) => Err(ConfigError::BothTemplateNameAndPath { name, path }),
            (Some(name), None) => Ok(TemplateRef::Name(name)),
            (None, Some(path)) => Ok(TemplateRef::Path(path)),
            (None, None) => Err(ConfigError::MissingTemplateNameAndPath),
        }
    }
}

/// One rendered artifact: which template to use and where to write it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    /// Template to render
    pub template: TemplateRef,
    /// Destination path, relative to the global output directory when set
    pub output: String,
}

impl OutputSpec {
    pub(crate) fn from_value(output: &Value, command: &str) -> ConfigResult<Self> {
        let map = match output {
            Value::Mapping(map) => map,
            other => {
                return Err(ConfigError::WrongType {
                    key: format!("{command}.outputs"),
                    expected: "Dictionary or array of Dictionaries",
                    actual: value::type_name(other),
                })
            }
        };

        let template = TemplateRef::from_mapping(map, command)?;
        let output_path = format!("{command}.output");
        let output = value::as_string(
            value::require(map, "output", &output_path)?,
            &output_path,
            "String",
        )?;

        Ok(Self { template, output })
    }
}

// Serialized with the same keys the loader reads, so a rendered
// configuration loads back unchanged.
impl Serialize for OutputSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match &self.template {
            TemplateRef::Name(name) => map.serialize_entry("templateName", name)?,
            TemplateRef::Path(path) => map.serialize_entry("templatePath", path)?,
        }
        map.serialize_entry("output", &self.output)?;
        map.end()
    }
}

impl Validatable for OutputSpec {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(&self.output, "output")?;
        match &self.template {
            TemplateRef::Name(name) => validate_required_string(name, "templateName"),
            TemplateRef::Path(path) => validate_required_string(path, "templatePath"),
        }
    }
}
