//! Button variants and the two-step confirmation state machine.

use serde::{Deserialize, Serialize};

use yew::{Classes, classes};

use crate::core::classes::{element, merge_classes, modifier};

/// Base class of the button.
pub const BUTTON_CLASS: &str = "uir-button";
/// Delay before a confirmed button returns to its idle look.
pub const CONFIRMED_RESET_MS: u32 = 1_000;
/// Default prompt shown while waiting for the confirming click.
pub const DEFAULT_CONFIRM_TEXT: &str = "Confirm?";
/// Default text shown once the action was confirmed.
pub const DEFAULT_CONFIRMED_TEXT: &str = "Cool!";

/// Visual variant of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonVariant {
    /// Borderless button without background.
    Clear,
    /// Standard button.
    #[default]
    Default,
    /// Emphasised call to action.
    Primary,
    /// Circular button, usually icon only.
    Round,
}

/// HTML `type` attribute of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonType {
    /// Plain button.
    #[default]
    Button,
    /// Form reset.
    Reset,
    /// Form submit.
    Submit,
}

impl ButtonType {
    /// Attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Reset => "reset",
            Self::Submit => "submit",
        }
    }
}

/// Side of the label an icon is drawn on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconPosition {
    /// Before the label.
    #[default]
    Left,
    /// After the label.
    Right,
}

impl IconPosition {
    /// Class suffix for the side.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Flags that drive the button's class list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonLook {
    /// Visual variant.
    pub variant: ButtonVariant,
    /// Icon side, when an icon is rendered.
    pub icon: Option<IconPosition>,
    /// Pressed/selected styling.
    pub is_active: bool,
    /// Disabled styling.
    pub is_disabled: bool,
    /// Stretch to the container width.
    pub is_full_width: bool,
}

/// Classes of the `<button>` element followed by the caller's.
#[must_use]
pub fn button_classes(look: ButtonLook, extra: &Classes) -> Classes {
    let flag = |enabled: bool, name: &str| enabled.then(|| modifier(BUTTON_CLASS, name));
    let own = classes!(
        BUTTON_CLASS,
        look.icon
            .map(|side| modifier(BUTTON_CLASS, &format!("icon-{}", side.as_str()))),
        flag(look.is_active, "active"),
        flag(look.variant == ButtonVariant::Clear, "clear"),
        flag(look.is_disabled, "disabled"),
        flag(look.is_full_width, "full-width"),
        flag(look.variant == ButtonVariant::Primary, "primary"),
        flag(look.variant == ButtonVariant::Round, "round")
    );
    merge_classes(own, extra)
}

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Disabled button: the browser default must be prevented.
    Prevented,
    /// First click of a confirm flow; waiting for the second one.
    AwaitingConfirmation,
    /// The caller's handler should run.
    Fire,
    /// The caller's handler should run and a reset of the confirmed look must be scheduled.
    FireAndScheduleReset,
}

impl ClickOutcome {
    /// Returns `true` when the caller's click handler runs.
    #[must_use]
    pub const fn fires(self) -> bool {
        matches!(self, Self::Fire | Self::FireAndScheduleReset)
    }
}

/// Confirmation state of one button instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonState {
    confirming: bool,
    confirmed: bool,
}

impl ButtonState {
    /// Idle state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            confirming: false,
            confirmed: false,
        }
    }

    /// Waiting for the confirming click.
    #[must_use]
    pub const fn is_confirming(&self) -> bool {
        self.confirming
    }

    /// Showing the confirmed text.
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Apply a click.
    pub const fn click(&mut self, is_disabled: bool, has_confirm: bool) -> ClickOutcome {
        if is_disabled {
            return ClickOutcome::Prevented;
        }
        if !has_confirm {
            return ClickOutcome::Fire;
        }
        if self.confirming {
            self.confirming = false;
            self.confirmed = true;
            ClickOutcome::FireAndScheduleReset
        } else {
            self.confirming = true;
            self.confirmed = false;
            ClickOutcome::AwaitingConfirmation
        }
    }

    /// Losing focus abandons a pending confirmation. Returns `true` when state changed.
    pub const fn blur(&mut self) -> bool {
        let changed = self.confirming;
        self.confirming = false;
        changed
    }

    /// Timer callback: drop the confirmed look.
    pub const fn reset_confirmed(&mut self) {
        self.confirmed = false;
    }

    /// Classes of the confirmation span.
    #[must_use]
    pub fn confirmation_classes(&self) -> Classes {
        let base = element(BUTTON_CLASS, "confirmation");
        let confirming = self.confirming.then(|| modifier(&base, "confirming"));
        let confirmed = self.confirmed.then(|| modifier(&base, "confirmed"));
        classes!(BUTTON_CLASS, base, confirming, confirmed)
    }

    /// Whether assistive technology should ignore the confirmation span.
    #[must_use]
    pub const fn confirmation_hidden(&self) -> bool {
        !self.confirming && !self.confirmed
    }

    /// Text of the confirmation span.
    #[must_use]
    pub fn confirmation_text(&self, confirm_text: &str, confirmed_text: &str) -> String {
        let mut text = String::new();
        if self.confirmed {
            text.push_str(confirmed_text);
        }
        if self.confirming {
            text.push_str(confirm_text);
        }
        text
    }
}
