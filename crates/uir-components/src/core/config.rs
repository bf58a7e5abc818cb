//! Library-wide component defaults.
//!
//! Hosts provide a [`UiConfig`] through Yew context to change defaults for every widget
//! at once. Documents are partial: any field left out keeps its built-in default.

use serde::{Deserialize, Serialize};

use crate::core::button::{CONFIRMED_RESET_MS, DEFAULT_CONFIRM_TEXT, DEFAULT_CONFIRMED_TEXT};
use crate::core::error::{ConfigError, ConfigResult};
use crate::core::field::{DEFAULT_INPUT_TYPE, DEFAULT_TOOLTIP_REQUIRED};
use crate::core::tooltip::{
    DEFAULT_TOOLTIP_OFFSET, DEFAULT_TOOLTIP_TAB_INDEX, TooltipConfig, TooltipPosition,
};

/// Component defaults shared by every widget in a tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tooltip defaults.
    pub tooltip: TooltipDefaults,
    /// Button defaults.
    pub button: ButtonDefaults,
    /// Text field and text area defaults.
    pub field: FieldDefaults,
}

/// Tooltip defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipDefaults {
    /// Placement used when a tooltip does not request one.
    pub position: TooltipPosition,
    /// Gap between anchor and overlay in pixels.
    pub offset: i32,
    /// Tab index of the tooltip root.
    pub tab_index: i32,
}

impl Default for TooltipDefaults {
    fn default() -> Self {
        Self {
            position: TooltipPosition::default(),
            offset: DEFAULT_TOOLTIP_OFFSET,
            tab_index: DEFAULT_TOOLTIP_TAB_INDEX,
        }
    }
}

impl TooltipDefaults {
    /// Tooltip configuration with per-instance overrides applied.
    #[must_use]
    pub fn resolve(
        &self,
        position: Option<TooltipPosition>,
        offset: Option<i32>,
        tab_index: Option<i32>,
        show_tooltip: Option<bool>,
    ) -> TooltipConfig {
        TooltipConfig {
            position: position.unwrap_or(self.position),
            show_tooltip,
            offset: offset.unwrap_or(self.offset),
            tab_index: tab_index.unwrap_or(self.tab_index),
        }
    }
}

/// Button defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonDefaults {
    /// Prompt shown while waiting for the confirming click.
    pub confirm_text: String,
    /// Text shown after confirmation.
    pub confirmed_text: String,
    /// Milliseconds before the confirmed look resets.
    pub confirmed_reset_ms: u32,
}

impl Default for ButtonDefaults {
    fn default() -> Self {
        Self {
            confirm_text: DEFAULT_CONFIRM_TEXT.to_string(),
            confirmed_text: DEFAULT_CONFIRMED_TEXT.to_string(),
            confirmed_reset_ms: CONFIRMED_RESET_MS,
        }
    }
}

/// Text field and text area defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDefaults {
    /// Tooltip text of the required marker.
    pub tooltip_required: String,
    /// `type` attribute of text field inputs.
    pub input_type: String,
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            tooltip_required: DEFAULT_TOOLTIP_REQUIRED.to_string(),
            input_type: DEFAULT_INPUT_TYPE.to_string(),
        }
    }
}

impl UiConfig {
    /// Parse and validate a (possibly partial) JSON document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON and [`ConfigError::InvalidField`]
    /// when a value is out of range.
    pub fn from_json(document: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(document).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidField`] naming the first offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.tooltip.offset < 0 {
            return Err(invalid("tooltip", "offset", "must not be negative"));
        }
        if self.button.confirmed_reset_ms == 0 {
            return Err(invalid("button", "confirmed_reset_ms", "must be greater than zero"));
        }
        require_text("button", "confirm_text", &self.button.confirm_text)?;
        require_text("button", "confirmed_text", &self.button.confirmed_text)?;
        require_text("field", "tooltip_required", &self.field.tooltip_required)?;
        require_text("field", "input_type", &self.field.input_type)
    }
}

fn require_text(section: &'static str, field: &'static str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(invalid(section, field, "must not be empty"));
    }
    Ok(())
}

fn invalid(section: &'static str, field: &'static str, message: &str) -> ConfigError {
    ConfigError::InvalidField {
        section,
        field,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = UiConfig::default();
        assert_eq!(config.tooltip.position, TooltipPosition::TopCenter);
        assert_eq!(config.tooltip.offset, 10);
        assert_eq!(config.tooltip.tab_index, -1);
        assert_eq!(config.button.confirm_text, "Confirm?");
        assert_eq!(config.button.confirmed_text, "Cool!");
        assert_eq!(config.button.confirmed_reset_ms, 1_000);
        assert_eq!(config.field.tooltip_required, "required");
        assert_eq!(config.field.input_type, "text");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_documents_keep_defaults() {
        let config = UiConfig::from_json(r#"{"tooltip": {"position": "auto"}}"#)
            .expect("partial config should parse");
        assert_eq!(config.tooltip.position, TooltipPosition::Auto);
        assert_eq!(config.tooltip.offset, DEFAULT_TOOLTIP_OFFSET);
        assert_eq!(config.button, ButtonDefaults::default());
    }

    #[test]
    fn negative_offset_is_rejected() {
        let err = UiConfig::from_json(r#"{"tooltip": {"offset": -4}}"#)
            .expect_err("negative offset must fail");
        assert_eq!(
            err.to_string(),
            "invalid value for 'offset' in 'tooltip': must not be negative"
        );
    }

    #[test]
    fn empty_texts_and_zero_delay_are_rejected() {
        assert!(UiConfig::from_json(r#"{"button": {"confirmed_reset_ms": 0}}"#).is_err());
        assert!(UiConfig::from_json(r#"{"field": {"tooltip_required": " "}}"#).is_err());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = UiConfig::from_json("{").expect_err("truncated document must fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn instance_overrides_win() {
        let defaults = TooltipDefaults::default();
        let config = defaults.resolve(Some(TooltipPosition::Left), None, Some(0), Some(true));
        assert_eq!(config.position, TooltipPosition::Left);
        assert_eq!(config.offset, 10);
        assert_eq!(config.tab_index, 0);
        assert_eq!(config.show_tooltip, Some(true));
        assert_eq!(defaults.resolve(None, None, None, None), TooltipConfig::default());
    }
}
