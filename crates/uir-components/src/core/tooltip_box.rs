//! Status-styled container used as the default tooltip body.

use serde::{Deserialize, Serialize};
use yew::{Classes, classes};

use crate::core::classes::modifier;

/// Base class of the tooltip box.
pub const TOOLTIP_BOX_CLASS: &str = "uir-tooltip-box";

/// Visual status of a tooltip box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TooltipBoxStatus {
    /// Neutral hint styling.
    #[default]
    Default,
    /// Positive confirmation styling.
    Success,
    /// Validation error styling.
    Error,
}

impl TooltipBoxStatus {
    /// Returns the class suffix for the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Classes for a tooltip box with the given status.
#[must_use]
pub fn tooltip_box_classes(status: TooltipBoxStatus) -> Classes {
    classes!(TOOLTIP_BOX_CLASS, modifier(TOOLTIP_BOX_CLASS, status.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_modifier_is_applied() {
        assert_eq!(
            tooltip_box_classes(TooltipBoxStatus::default()).to_string(),
            "uir-tooltip-box uir-tooltip-box--default"
        );
        assert!(
            tooltip_box_classes(TooltipBoxStatus::Error).contains("uir-tooltip-box--error")
        );
    }
}
