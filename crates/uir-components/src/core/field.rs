//! Focus, value and decoration rules shared by text fields and text areas.
//!
//! # Design
//! - [`FieldState`] owns everything that changes after mount; [`FieldRules`] is a borrowed
//!   snapshot of the props that drive rendering decisions.
//! - The value prop seeds the local value and replaces it only when it differs.
//! - Error tooltips win over hints; an inline validation message replaces the error tooltip.

use serde::{Deserialize, Serialize};
use yew::{Classes, classes};

use crate::core::classes::{element, merge_classes, modifier};
use crate::core::ids;
use crate::core::tooltip_box::TooltipBoxStatus;

/// Animation fired by the stylesheet when the browser autofills an input.
pub const AUTOFILL_START_ANIMATION: &str = "uirOnAutoFillStart";
/// Animation fired by the stylesheet when browser autofill is removed.
pub const AUTOFILL_CANCEL_ANIMATION: &str = "uirOnAutoFillCancel";
/// Key name that triggers the enter-key handler.
pub const ENTER_KEY: &str = "Enter";
/// Default tooltip text of the required marker.
pub const DEFAULT_TOOLTIP_REQUIRED: &str = "required";
/// Default `type` attribute of a text field input.
pub const DEFAULT_INPUT_TYPE: &str = "text";

/// Which widget the engine is driving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Single-line `<input>`.
    TextField,
    /// Multi-line `<textarea>`.
    TextArea,
}

impl FieldKind {
    /// Base class, also used as the id prefix.
    #[must_use]
    pub const fn base_class(self) -> &'static str {
        match self {
            Self::TextField => "uir-text-field",
            Self::TextArea => "uir-text-area",
        }
    }

    /// Class of a named child element, e.g. `uir-text-field-label`.
    #[must_use]
    pub fn part(self, name: &str) -> String {
        element(self.base_class(), name)
    }

    /// Allocate a unique id for label/input association.
    #[must_use]
    pub fn next_id(self) -> String {
        ids::next_id(self.base_class())
    }
}

/// Where validation errors are shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorMessageType {
    /// In a tooltip next to the input.
    #[default]
    Tooltip,
    /// As an inline message below the input.
    Message,
}

/// Prop snapshot that drives rendering decisions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldRules<'a> {
    /// Floating label text.
    pub label: Option<&'a str>,
    /// Hide the label while the field holds a value and is idle.
    pub auto_hide_label: bool,
    /// Validation state; `None` means not validated.
    pub is_valid: Option<bool>,
    /// Stretch to the container width.
    pub is_full_width: bool,
    /// Where validation errors go.
    pub error_message_type: ErrorMessageType,
    /// Error shown when invalid.
    pub tooltip_error: Option<&'a str>,
    /// Hint shown on focus.
    pub tooltip_hint: Option<&'a str>,
    /// Inline message shown when invalid.
    pub validation_message: Option<&'a str>,
    /// Leading text such as a currency symbol.
    pub prefix: Option<&'a str>,
    /// Whether a leading icon was supplied.
    pub has_icon: bool,
    /// Offer a clear button while the field holds a value.
    pub is_clearable: bool,
    /// Show the required marker.
    pub is_required: bool,
    /// Text areas only: fixed (`Some(true)`) or growing (`Some(false)`) height.
    pub fixed_height: Option<bool>,
}

impl<'a> FieldRules<'a> {
    const fn is_invalid(&self) -> bool {
        matches!(self.is_valid, Some(false))
    }

    fn error_text(&self) -> Option<&'a str> {
        self.tooltip_error.filter(|text| !text.is_empty())
    }
}

/// Tooltip wrapped around the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldTooltip<'a> {
    /// Box status.
    pub status: TooltipBoxStatus,
    /// Tooltip text.
    pub text: &'a str,
}

/// Leading decoration in front of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Adornment<'a> {
    /// Clickable prefix text.
    Prefix(&'a str),
    /// Caller-supplied icon.
    Icon,
}

/// Trailing control after the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailingControl {
    /// Button that clears the value.
    Clear,
    /// Required marker with its tooltip.
    Required,
}

/// Outcome of an input event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputChange {
    /// The local value was replaced and the field must redraw.
    pub updated: bool,
    /// Payload for the change handler; `None` when the DOM value could not be read.
    pub value: Option<String>,
}

/// Mutable state of one field instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    has_focus: bool,
    has_mouse_over: bool,
    show_tooltip: bool,
    value: Option<String>,
    autofilled: bool,
}

impl FieldState {
    /// Seed the state from the initial value prop.
    #[must_use]
    pub fn new(value: Option<&str>) -> Self {
        Self {
            value: value.map(str::to_string),
            ..Self::default()
        }
    }

    /// Current local value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether the input has focus.
    #[must_use]
    pub const fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Whether the pointer is over the field.
    #[must_use]
    pub const fn has_mouse_over(&self) -> bool {
        self.has_mouse_over
    }

    /// Controlled visibility of the wrapping tooltip.
    #[must_use]
    pub const fn show_tooltip(&self) -> bool {
        self.show_tooltip
    }

    /// Non-empty value, or a browser autofill is showing.
    #[must_use]
    pub fn has_value(&self) -> bool {
        self.autofilled || self.value.as_deref().is_some_and(|value| !value.is_empty())
    }

    /// Apply a changed value prop. Returns `true` only when the local value changed.
    pub fn sync_value(&mut self, value: Option<&str>) -> bool {
        if self.value.as_deref() == value {
            return false;
        }
        self.value = value.map(str::to_string);
        true
    }

    /// Apply an input event. A missing value leaves the state untouched.
    pub fn change(&mut self, value: Option<String>) -> bool {
        match value {
            Some(value) => {
                self.value = Some(value);
                true
            }
            None => false,
        }
    }

    /// Apply an input event. The change handler receives the payload even when the value
    /// could not be read and the state was left alone.
    pub fn input(&mut self, value: Option<String>) -> InputChange {
        InputChange {
            updated: self.change(value.clone()),
            value,
        }
    }

    /// Input gained focus.
    pub const fn focus(&mut self) {
        self.has_focus = true;
        self.show_tooltip = true;
    }

    /// Input lost focus.
    pub const fn blur(&mut self) {
        self.has_focus = false;
        self.show_tooltip = false;
    }

    /// Pointer entered the field.
    pub const fn mouse_enter(&mut self) {
        self.has_mouse_over = true;
    }

    /// Pointer left the field.
    pub const fn mouse_leave(&mut self) {
        self.has_mouse_over = false;
    }

    /// Clear button pressed.
    pub fn clear(&mut self) {
        self.value = Some(String::new());
    }

    /// Handle an `animationstart` event. Returns `true` when autofill state changed.
    pub fn animation_start(&mut self, animation_name: &str) -> bool {
        let autofilled = match animation_name {
            AUTOFILL_START_ANIMATION => true,
            AUTOFILL_CANCEL_ANIMATION => false,
            _ => return false,
        };
        let changed = self.autofilled != autofilled;
        self.autofilled = autofilled;
        changed
    }

    /// Whether the floating label is rendered.
    #[must_use]
    pub fn show_label(&self, rules: &FieldRules<'_>) -> bool {
        rules.label.is_some()
            && (!rules.auto_hide_label || self.has_focus || self.has_mouse_over || !self.has_value())
    }

    /// Whether the placeholder attribute is set.
    #[must_use]
    pub const fn show_placeholder(&self, rules: &FieldRules<'_>) -> bool {
        rules.label.is_none() || self.has_focus
    }

    /// Leading decoration, if any. A visible prefix replaces the icon.
    #[must_use]
    pub fn adornment<'a>(&self, rules: &FieldRules<'a>) -> Option<Adornment<'a>> {
        let has_text = self.value.as_deref().is_some_and(|value| !value.is_empty());
        match rules.prefix {
            Some(prefix) if has_text || self.has_focus => Some(Adornment::Prefix(prefix)),
            _ if rules.has_icon => Some(Adornment::Icon),
            _ => None,
        }
    }

    /// Trailing control, if any. The clear button wins over the required marker.
    #[must_use]
    pub fn trailing(&self, rules: &FieldRules<'_>) -> Option<TrailingControl> {
        let has_text = self.value.as_deref().is_some_and(|value| !value.is_empty());
        if rules.is_clearable && has_text {
            Some(TrailingControl::Clear)
        } else if rules.is_required {
            Some(TrailingControl::Required)
        } else {
            None
        }
    }

    /// Classes of the field root.
    #[must_use]
    pub fn classes(
        &self,
        kind: FieldKind,
        rules: &FieldRules<'_>,
        extra: &Classes,
    ) -> Classes {
        let base = kind.base_class();
        let flag = |enabled: bool, name: &str| enabled.then(|| modifier(base, name));
        let height = rules
            .fixed_height
            .map(|fixed| modifier(base, if fixed { "fixed-height" } else { "auto-height" }));
        let own = classes!(
            base,
            flag(self.has_focus, "focus"),
            flag(rules.is_full_width, "full-width"),
            flag(rules.is_invalid(), "invalid"),
            flag(rules.is_valid == Some(true), "valid"),
            flag(self.has_value(), "has-value"),
            height
        );
        merge_classes(own, extra)
    }
}

/// Classes of the wrapper around label and input.
#[must_use]
pub fn inner_classes(kind: FieldKind, rules: &FieldRules<'_>) -> Classes {
    let inner = kind.part("inner");
    let invalid = rules.is_invalid().then(|| modifier(&inner, "invalid"));
    classes!(inner, invalid)
}

/// Tooltip wrapped around the input, if any.
#[must_use]
pub fn field_tooltip<'a>(rules: &FieldRules<'a>) -> Option<FieldTooltip<'a>> {
    let error = rules
        .error_text()
        .filter(|_| rules.is_invalid() && rules.error_message_type == ErrorMessageType::Tooltip);
    if let Some(text) = error {
        return Some(FieldTooltip {
            status: TooltipBoxStatus::Error,
            text,
        });
    }
    rules
        .tooltip_hint
        .filter(|text| !text.is_empty())
        .map(|text| FieldTooltip {
            status: TooltipBoxStatus::Default,
            text,
        })
}

/// Inline validation message, if any.
#[must_use]
pub fn validation_message<'a>(rules: &FieldRules<'a>) -> Option<&'a str> {
    if rules.error_message_type != ErrorMessageType::Message || !rules.is_invalid() {
        return None;
    }
    rules
        .validation_message
        .filter(|text| !text.is_empty())
        .or_else(|| rules.error_text())
}

/// The input must be re-focused when tooltip wrapping toggled while it had focus.
#[must_use]
pub const fn needs_focus_fix(was_wrapped: bool, is_wrapped: bool, has_focus: bool) -> bool {
    has_focus && was_wrapped != is_wrapped
}

/// Caret index at the end of `value`, in UTF-16 code units as the DOM counts them.
#[must_use]
pub fn caret_end(value: &str) -> u32 {
    u32::try_from(value.encode_utf16().count()).unwrap_or(u32::MAX)
}

/// Whether a key event should also fire the enter-key handler.
#[must_use]
pub fn is_enter(key: &str) -> bool {
    key == ENTER_KEY
}

/// Tab index of the clear button: its own, else the input's.
#[must_use]
pub const fn clear_button_tab_index(own: Option<i32>, input: Option<i32>) -> Option<i32> {
    match own {
        Some(index) => Some(index),
        None => input,
    }
}
