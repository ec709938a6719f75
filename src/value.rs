//! Typed access over the untyped configuration tree
//!
//! The parser hands the loader a generic [`serde_yaml::Value`]; every read
//! out of that tree goes through the helpers here, so the expected-vs-actual
//! wording of type errors lives in exactly one place.

use serde_yaml::{Mapping, Value};

use crate::error::{ConfigError, ConfigResult};

/// Human-readable name of the runtime variant of a value.
///
/// These names appear verbatim in `WrongType` messages and are part of the
/// crate's contract.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "Optional<Any>",
        Value::Bool(_) => "Bool",
        Value::Number(number) if number.is_f64() => "Double",
        Value::Number(_) => "Int",
        Value::String(_) => "String",
        Value::Sequence(_) => "Array<Any>",
        Value::Mapping(_) => "Dictionary<String, Any>",
        Value::Tagged(tagged) => type_name(&tagged.value),
    }
}

/// Look up a required key on a mapping.
///
/// An explicit null counts as absent; `key_path` is the dotted path reported
/// on failure.
pub fn require<'a>(map: &'a Mapping, key: &str, key_path: &str) -> ConfigResult<&'a Value> {
    match map.get(key) {
        Some(Value::Null) | None => Err(ConfigError::MissingEntry {
            key: key_path.to_string(),
        }),
        Some(value) => Ok(value),
    }
}

/// Look up an optional scalar string key on a mapping.
pub fn optional_string(map: &Mapping, key: &str, key_path: &str) -> ConfigResult<Option<String>> {
    match map.get(key) {
        Some(Value::Null) | None => Ok(None),
        Some(value) => Ok(Some(as_string(value, key_path, "String")?)),
    }
}

/// Coerce a value to a string. No implicit stringification: numbers and
/// booleans are rejected in string position.
pub fn as_string(value: &Value, key_path: &str, expected: &'static str) -> ConfigResult<String> {
    match value {
        Value::String(string) => Ok(string.clone()),
        other => Err(ConfigError::WrongType {
            key: key_path.to_string(),
            expected,
            actual: type_name(other),
        }),
    }
}

/// Coerce a value to an integer. No truthy coercion: strings and floats are
/// rejected in integer position.
pub fn as_integer(value: &Value, key_path: &str) -> ConfigResult<i64> {
    if let Value::Number(number) = value {
        if let Some(integer) = number.as_i64() {
            return Ok(integer);
        }
    }
    Err(ConfigError::WrongType {
        key: key_path.to_string(),
        expected: "Int",
        actual: type_name(value),
    })
}

/// Normalize a string-or-list-of-strings field into a non-empty list.
///
/// The shorthand scalar form becomes a one-element list; downstream code
/// never sees the shorthand.
pub fn string_list(
    value: &Value,
    key_path: &str,
    expected: &'static str,
) -> ConfigResult<Vec<String>> {
    match value {
        Value::String(string) => Ok(vec![string.clone()]),
        Value::Sequence(items) => {
            let mut strings = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(string) => strings.push(string.clone()),
                    // One bad element disqualifies the whole list; the list
                    // itself is the offending value.
                    _ => {
                        return Err(ConfigError::WrongType {
                            key: key_path.to_string(),
                            expected,
                            actual: type_name(value),
                        })
                    }
                }
            }
            if strings.is_empty() {
                return Err(ConfigError::MissingEntry {
                    key: key_path.to_string(),
                });
            }
            Ok(strings)
        }
        other => Err(ConfigError::WrongType {
            key: key_path.to_string(),
            expected,
            actual: type_name(other),
        }),
    }
}

/// Normalize a one-or-many field into a non-empty list of values.
///
/// A single mapping stands for a one-element list.
pub fn one_or_many<'a>(
    value: &'a Value,
    key_path: &str,
    expected: &'static str,
) -> ConfigResult<Vec<&'a Value>> {
    match value {
        Value::Mapping(_) => Ok(vec![value]),
        Value::Sequence(items) => {
            if items.is_empty() {
                return Err(ConfigError::MissingEntry {
                    key: key_path.to_string(),
                });
            }
            Ok(items.iter().collect())
        }
        other => Err(ConfigError::WrongType {
            key: key_path.to_string(),
            expected,
            actual: type_name(other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_type_names() {
        assert_eq!(type_name(&Value::Null), "Optional<Any>");
        assert_eq!(type_name(&Value::from(true)), "Bool");
        assert_eq!(type_name(&Value::from(42)), "Int");
        assert_eq!(type_name(&Value::from(1.5)), "Double");
        assert_eq!(type_name(&Value::from("hello")), "String");
        assert_eq!(type_name(&Value::Sequence(vec![])), "Array<Any>");
        assert_eq!(
            type_name(&Value::Mapping(Mapping::new())),
            "Dictionary<String, Any>"
        );
    }

    #[test]
    fn test_require_treats_null_as_missing() {
        let map = mapping("paths: ~");
        let err = require(&map, "paths", "strings.paths").unwrap_err();
        assert_eq!(err.to_string(), "Missing entry for key strings.paths.");

        let err = require(&map, "outputs", "strings.outputs").unwrap_err();
        assert_eq!(err.to_string(), "Missing entry for key strings.outputs.");
    }

    #[test]
    fn test_as_integer_rejects_other_scalars() {
        assert_eq!(as_integer(&Value::from(5), "k").unwrap(), 5);

        let err = as_integer(&Value::from("5"), "strings.parameters.foo").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Wrong type for key strings.parameters.foo: expected Int, got String."
        );

        let err = as_integer(&Value::from(1.5), "k").unwrap_err();
        assert_eq!(err.to_string(), "Wrong type for key k: expected Int, got Double.");
    }

    #[test]
    fn test_string_list_accepts_both_forms() {
        let scalar = Value::from("Sources/");
        let list: Value = serde_yaml::from_str("[Sources/]").unwrap();
        let expected = vec!["Sources/".to_string()];

        assert_eq!(string_list(&scalar, "k", "Path or array of Paths").unwrap(), expected);
        assert_eq!(string_list(&list, "k", "Path or array of Paths").unwrap(), expected);
    }

    #[test]
    fn test_string_list_reports_the_list_type_on_bad_elements() {
        let nested: Value = serde_yaml::from_str("[[Sources/]]").unwrap();
        let err = string_list(&nested, "strings.paths", "Path or array of Paths").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Wrong type for key strings.paths: expected Path or array of Paths, got Array<Any>."
        );
    }

    #[test]
    fn test_string_list_rejects_empty_list() {
        let empty: Value = serde_yaml::from_str("[]").unwrap();
        let err = string_list(&empty, "strings.paths", "Path or array of Paths").unwrap_err();
        assert_eq!(err.to_string(), "Missing entry for key strings.paths.");
    }

    #[test]
    fn test_one_or_many_wraps_single_mapping() {
        let single: Value = serde_yaml::from_str("{output: out.swift}").unwrap();
        assert_eq!(one_or_many(&single, "k", "Dictionary").unwrap().len(), 1);

        let many: Value = serde_yaml::from_str("[{a: 1}, {b: 2}]").unwrap();
        assert_eq!(one_or_many(&many, "k", "Dictionary").unwrap().len(), 2);

        let scalar = Value::from("oops");
        let err = one_or_many(&scalar, "strings.outputs", "Dictionary or array of Dictionaries")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Wrong type for key strings.outputs: expected Dictionary or array of Dictionaries, got String."
        );
    }
}
