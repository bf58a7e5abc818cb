//! Error types for component contracts and library configuration.
//!
//! # Design
//! - Constant messages with structured fields, so callers can log or match without parsing.
//! - Contract violations are reported, never raised as panics; rendering continues.

use thiserror::Error;

/// Result type for component contract checks.
pub type PropsResult<T> = Result<T, PropsError>;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Violations of a component's construction-time contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropsError {
    /// A required prop was absent or empty.
    #[error("required prop missing")]
    MissingProp {
        /// Component that declared the prop.
        component: &'static str,
        /// Name of the missing prop.
        prop: &'static str,
    },
    /// The component received the wrong number of children.
    #[error("unexpected child count")]
    ChildCount {
        /// Component that received the children.
        component: &'static str,
        /// Number of children the component accepts.
        expected: usize,
        /// Number of children actually supplied.
        found: usize,
    },
    /// A string value did not name a known variant.
    #[error("unknown prop value")]
    UnknownValue {
        /// Component that declared the prop.
        component: &'static str,
        /// Name of the prop being parsed.
        prop: &'static str,
        /// Offending value.
        value: String,
    },
}

impl PropsError {
    /// Human-readable description including the structured context.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::MissingProp { component, prop } => {
                format!("the prop `{prop}` is marked as required in `{component}`")
            }
            Self::ChildCount {
                component,
                expected,
                found,
            } => format!("`{component}` expects {expected} child element(s) but received {found}"),
            Self::UnknownValue {
                component,
                prop,
                value,
            } => format!("`{value}` is not a valid value for `{prop}` in `{component}`"),
        }
    }
}

/// Errors raised while loading or validating [`crate::core::config::UiConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Field contained an invalid value.
    #[error("invalid value for '{field}' in '{section}': {message}")]
    InvalidField {
        /// Section that failed validation.
        section: &'static str,
        /// Field that failed validation.
        field: &'static str,
        /// Human-readable error description.
        message: String,
    },
    /// The configuration document could not be parsed.
    #[error("configuration document is not valid JSON")]
    Parse {
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_prop_description_names_component_and_prop() {
        let err = PropsError::MissingProp {
            component: "AvatarCard",
            prop: "name",
        };
        assert_eq!(
            err.describe(),
            "the prop `name` is marked as required in `AvatarCard`"
        );
        assert_eq!(err.to_string(), "required prop missing");
    }

    #[test]
    fn config_error_message_includes_field() {
        let err = ConfigError::InvalidField {
            section: "tooltip",
            field: "offset",
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for 'offset' in 'tooltip': must not be negative"
        );
    }
}
