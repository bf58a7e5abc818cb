//! Button with optional icon and two-step confirmation.
//!
//! # Design
//! - The first click of a confirm button only arms it; the second one fires.
//! - The confirmed look resets after a configurable delay. A pending reset is dropped
//!   on unmount or replaced by the next confirmation.

use gloo::timers::callback::Timeout;
use yew::prelude::*;

use super::use_ui_config;
use crate::core::button::{
    ButtonLook, ButtonState, ButtonType, ButtonVariant, ClickOutcome, IconPosition, button_classes,
};

/// Props for [`Button`].
#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    /// Label contents.
    #[prop_or_default]
    pub children: Children,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// Prompt shown while armed; falls back to the configured default.
    #[prop_or_default]
    pub confirm_text: Option<AttrValue>,
    /// Text shown after confirmation; falls back to the configured default.
    #[prop_or_default]
    pub confirmed_text: Option<AttrValue>,
    /// Require a second click before firing.
    #[prop_or_default]
    pub has_confirm: bool,
    /// Icon drawn next to the label.
    #[prop_or_default]
    pub icon: Option<Html>,
    /// Side of the label the icon sits on.
    #[prop_or_default]
    pub icon_position: IconPosition,
    /// Element id.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Pressed styling.
    #[prop_or_default]
    pub is_active: bool,
    /// Disable the button.
    #[prop_or_default]
    pub is_disabled: bool,
    /// Stretch to the container width.
    #[prop_or_default]
    pub is_full_width: bool,
    /// Click handler.
    pub onclick: Callback<MouseEvent>,
    /// Inline style.
    #[prop_or_default]
    pub style: Option<AttrValue>,
    /// Tab index.
    #[prop_or_default]
    pub tab_index: Option<i32>,
    /// HTML `type` attribute.
    #[prop_or_default]
    pub button_type: ButtonType,
    /// Visual variant.
    #[prop_or_default]
    pub variant: ButtonVariant,
    /// `aria-expanded` for disclosure buttons.
    #[prop_or_default]
    pub aria_expanded: Option<bool>,
    /// Node ref forwarded to the `<button>` element.
    #[prop_or_default]
    pub node_ref: NodeRef,
}

/// Clickable button.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let ui = use_ui_config();
    let state = use_mut_ref(ButtonState::new);
    let redraw = use_force_update();
    let reset = use_mut_ref(|| None as Option<Timeout>);

    {
        let reset = reset.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    reset.borrow_mut().take();
                }
            },
            (),
        );
    }

    let onclick = {
        let state = state.clone();
        let redraw = redraw.clone();
        let handler = props.onclick.clone();
        let is_disabled = props.is_disabled;
        let has_confirm = props.has_confirm;
        let delay = ui.button.confirmed_reset_ms;
        Callback::from(move |event: MouseEvent| {
            let outcome = state.borrow_mut().click(is_disabled, has_confirm);
            match outcome {
                ClickOutcome::Prevented => {
                    event.prevent_default();
                    return;
                }
                ClickOutcome::AwaitingConfirmation => {}
                ClickOutcome::Fire => handler.emit(event),
                ClickOutcome::FireAndScheduleReset => {
                    let state = state.clone();
                    let redraw = redraw.clone();
                    *reset.borrow_mut() = Some(Timeout::new(delay, move || {
                        state.borrow_mut().reset_confirmed();
                        redraw.force_update();
                    }));
                    handler.emit(event);
                }
            }
            redraw.force_update();
        })
    };

    let onblur = {
        let state = state.clone();
        Callback::from(move |_: FocusEvent| {
            if state.borrow_mut().blur() {
                redraw.force_update();
            }
        })
    };

    let look = ButtonLook {
        variant: props.variant,
        icon: props.icon.as_ref().map(|_| props.icon_position),
        is_active: props.is_active,
        is_disabled: props.is_disabled,
        is_full_width: props.is_full_width,
    };
    let classes = button_classes(look, &props.class);
    let icon_at = |side: IconPosition| {
        props
            .icon
            .clone()
            .filter(|_| props.icon_position == side)
            .unwrap_or_default()
    };

    let state = *state.borrow();
    let confirmation = if props.has_confirm {
        let confirm_text = props
            .confirm_text
            .as_ref()
            .map_or(ui.button.confirm_text.as_str(), AsRef::as_ref);
        let confirmed_text = props
            .confirmed_text
            .as_ref()
            .map_or(ui.button.confirmed_text.as_str(), AsRef::as_ref);
        html! {
            <span
                aria-hidden={state.confirmation_hidden().to_string()}
                class={state.confirmation_classes()}
            >
                { state.confirmation_text(confirm_text, confirmed_text) }
            </span>
        }
    } else {
        Html::default()
    };

    html! {
        <button
            id={props.id.clone()}
            r#type={props.button_type.as_str()}
            style={props.style.clone()}
            class={classes}
            aria-expanded={props.aria_expanded.map(|expanded| expanded.to_string())}
            disabled={props.is_disabled}
            onblur={onblur}
            onclick={onclick}
            ref={props.node_ref.clone()}
            tabindex={props.tab_index.map(|index| index.to_string())}
        >
            { icon_at(IconPosition::Left) }
            <span class="uir-button-content">
                { for props.children.iter() }
            </span>
            { icon_at(IconPosition::Right) }
            { confirmation }
        </button>
    }
}
