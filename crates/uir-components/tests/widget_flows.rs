use std::cell::RefCell;
use std::rc::Rc;

use uir_components::core::button::{ButtonState, ClickOutcome};
use uir_components::core::data_attrs::data_attributes;
use uir_components::core::field::{
    AUTOFILL_START_ANIMATION, ErrorMessageType, FieldKind, FieldRules, FieldState,
    TrailingControl, field_tooltip, needs_focus_fix, validation_message,
};
use uir_components::core::tooltip::{
    AnchorPoint, Measurement, Offset, OverlayBody, Size, TooltipConfig, TooltipContent,
    TooltipPosition, TooltipState, Viewport,
};
use uir_components::core::tooltip_box::TooltipBoxStatus;
use uir_components::{ConfigError, UiConfig};
use yew::{AttrValue, Callback, Classes};

#[test]
fn auto_tooltip_measures_resolves_and_hides() {
    let config = TooltipConfig {
        position: TooltipPosition::Auto,
        ..TooltipConfig::default()
    };
    let viewport = Viewport {
        width: 100.0,
        height: 100.0,
    };
    let mut state = TooltipState::new();

    assert_eq!(state.measure(None, Some(Size::new(40, 30))), Measurement::Skipped);
    assert_eq!(
        state.measure(Some(Size::new(100, 20)), Some(Size::new(40, 30))),
        Measurement::Measured
    );
    assert!(!state.overlay_style(&config).is_shown());

    state.enter(config.position, Some((AnchorPoint { x: 10.0, y: 10.0 }, viewport)));
    assert_eq!(
        state.effective_position(config.position),
        Some(TooltipPosition::BottomRight)
    );
    assert_eq!(state.offset(&config), Offset { left: 110, top: 20 });
    assert!(state.overlay_style(&config).is_shown());

    state.leave();
    let hidden = state.overlay_style(&config);
    assert_eq!((hidden.opacity, hidden.z_index), (0, -1));
    assert_eq!((hidden.left, hidden.top), (110, 20));
}

#[test]
fn forced_tooltip_ignores_hover() {
    let shown = TooltipConfig {
        show_tooltip: Some(true),
        ..TooltipConfig::default()
    };
    let mut state = TooltipState::new();
    state.leave();
    assert!(state.overlay_style(&shown).is_shown());

    let hidden = TooltipConfig {
        show_tooltip: Some(false),
        ..shown
    };
    state.enter(hidden.position, None);
    assert!(!state.overlay_style(&hidden).is_shown());
}

#[test]
fn tooltip_text_is_boxed() {
    let content: TooltipContent<String> = "required".into();
    assert!(matches!(
        content.into_overlay(),
        OverlayBody::Boxed {
            status: TooltipBoxStatus::Default,
            ..
        }
    ));
}

#[test]
fn invalid_field_swaps_hint_for_error_and_refocuses() {
    let hint_only = FieldRules {
        tooltip_hint: Some("hint"),
        tooltip_error: Some("error"),
        is_valid: Some(true),
        ..FieldRules::default()
    };
    let invalid = FieldRules {
        is_valid: Some(false),
        ..hint_only
    };
    let mut state = FieldState::new(Some("abc"));
    state.focus();

    let before = field_tooltip(&hint_only);
    let after = field_tooltip(&invalid);
    assert_eq!(before.map(|tip| tip.status), Some(TooltipBoxStatus::Default));
    assert_eq!(after.map(|tip| tip.text), Some("error"));
    assert!(!needs_focus_fix(
        before.is_some(),
        after.is_some(),
        state.has_focus()
    ));

    let inline = FieldRules {
        error_message_type: ErrorMessageType::Message,
        tooltip_hint: None,
        ..invalid
    };
    assert_eq!(field_tooltip(&inline), None);
    assert!(needs_focus_fix(
        after.is_some(),
        field_tooltip(&inline).is_some(),
        state.has_focus()
    ));
    assert_eq!(validation_message(&inline), Some("error"));
}

#[test]
fn clearable_field_lifecycle() {
    let rules = FieldRules {
        label: Some("Amount"),
        auto_hide_label: true,
        is_clearable: true,
        is_required: true,
        ..FieldRules::default()
    };
    let mut state = FieldState::new(None);
    assert!(state.show_label(&rules));
    assert_eq!(state.trailing(&rules), Some(TrailingControl::Required));

    assert!(state.change(Some("42".to_string())));
    assert!(!state.show_label(&rules));
    assert_eq!(state.trailing(&rules), Some(TrailingControl::Clear));
    assert!(
        state
            .classes(FieldKind::TextField, &rules, &Classes::new())
            .contains("uir-text-field--has-value")
    );

    state.clear();
    assert!(state.show_label(&rules));
    state.animation_start(AUTOFILL_START_ANIMATION);
    assert!(
        state
            .classes(FieldKind::TextField, &rules, &Classes::new())
            .contains("uir-text-field--has-value")
    );
}

#[test]
fn every_input_event_notifies_the_change_handler() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let on_change = {
        let seen = Rc::clone(&seen);
        Callback::from(move |value: Option<String>| seen.borrow_mut().push(value))
    };
    let mut state = FieldState::new(Some("draft"));

    for value in [None, Some("final".to_string())] {
        let change = state.input(value);
        on_change.emit(change.value);
    }

    assert_eq!(*seen.borrow(), vec![None, Some("final".to_string())]);
    assert_eq!(state.value(), Some("final"));
}

#[test]
fn only_data_attributes_reach_the_root() {
    let data: Vec<(AttrValue, AttrValue)> = vec![
        ("data-testid".into(), "tooltip".into()),
        ("onclick".into(), "alert(1)".into()),
    ];
    let kept: Vec<_> = data_attributes(&data).collect();
    assert_eq!(kept, vec![("data-testid", "tooltip")]);
}

#[test]
fn confirm_button_fires_once_per_pair() {
    let mut state = ButtonState::new();
    let fired = (0..4)
        .map(|_| state.click(false, true))
        .filter(|outcome| outcome.fires())
        .count();
    assert_eq!(fired, 2);
    assert_eq!(state.click(true, true), ClickOutcome::Prevented);
}

#[test]
fn config_document_overrides_defaults() {
    let document = serde_json::json!({
        "tooltip": { "position": "bottom-left", "offset": 4 },
        "button": { "confirm_text": "Sure?" }
    })
    .to_string();
    let config = UiConfig::from_json(&document).expect("valid document");
    assert_eq!(config.tooltip.position, TooltipPosition::BottomLeft);
    assert_eq!(config.tooltip.offset, 4);
    assert_eq!(config.button.confirm_text, "Sure?");
    assert_eq!(config.button.confirmed_text, "Cool!");

    let err = UiConfig::from_json(r#"{"button": {"confirm_text": ""}}"#)
        .expect_err("empty text must fail");
    assert!(matches!(
        err,
        ConfigError::InvalidField {
            section: "button",
            field: "confirm_text",
            ..
        }
    ));
}
