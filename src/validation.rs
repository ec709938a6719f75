//! Configuration validation traits and utilities

use crate::error::{ConfigError, ConfigResult};

/// Trait for validatable configuration
pub trait Validatable {
    /// Validate the configuration
    fn validate(&self) -> ConfigResult<()>;
}

/// Validate a required string field
pub fn validate_required_string(value: &str, field_name: &str) -> ConfigResult<()> {
    if value.is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "{field_name} cannot be empty"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert!(validate_required_string("Generated/", "outputDir").is_ok());

        let err = validate_required_string("", "outputDir").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: outputDir cannot be empty"
        );
    }
}
