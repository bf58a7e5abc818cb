//! Shared rendering for [`super::TextField`] and [`super::TextArea`].

use gloo::console;
use web_sys::{HtmlElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::button::Button;
use super::icons::{IconClear, IconRequired};
use super::tooltip::Tooltip;
use super::tooltip_box::TooltipBox;
use super::use_ui_config;
use crate::core::button::ButtonVariant;
use crate::core::field::{
    Adornment, ErrorMessageType, FieldKind, FieldRules, FieldState, TrailingControl, caret_end,
    clear_button_tab_index, field_tooltip, inner_classes, is_enter, needs_focus_fix,
    validation_message,
};

/// Props shared by text fields and text areas.
#[derive(Properties, PartialEq, Clone)]
pub struct FieldProps {
    /// Extra classes on the root.
    #[prop_or_default]
    pub class: Classes,
    /// Inline style of the root.
    #[prop_or_default]
    pub style: Option<AttrValue>,
    /// Initial value; later changes replace the local value.
    #[prop_or_default]
    pub value: Option<AttrValue>,
    /// Floating label.
    #[prop_or_default]
    pub label: Option<AttrValue>,
    /// Placeholder, shown when there is no label or the input has focus.
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    /// Hide the label while the field holds a value and is idle.
    #[prop_or_default]
    pub auto_hide_label: bool,
    /// Validation state.
    #[prop_or_default]
    pub is_valid: Option<bool>,
    /// Stretch to the container width.
    #[prop_or_default]
    pub is_full_width: bool,
    /// Disable the input.
    #[prop_or_default]
    pub is_disabled: bool,
    /// Make the input read only.
    #[prop_or_default]
    pub is_read_only: bool,
    /// Mark the input as required and show the required marker.
    #[prop_or_default]
    pub is_required: bool,
    /// Offer a clear button while the field holds a value.
    #[prop_or_default]
    pub is_clearable: bool,
    /// Where validation errors are shown.
    #[prop_or_default]
    pub error_message_type: ErrorMessageType,
    /// Error text shown while invalid.
    #[prop_or_default]
    pub tooltip_error: Option<AttrValue>,
    /// Hint shown on focus.
    #[prop_or_default]
    pub tooltip_hint: Option<AttrValue>,
    /// Tooltip of the required marker.
    #[prop_or_default]
    pub tooltip_required: Option<AttrValue>,
    /// Inline message shown while invalid.
    #[prop_or_default]
    pub validation_message: Option<AttrValue>,
    /// Text fields only: leading text such as a currency symbol.
    #[prop_or_default]
    pub prefix: Option<AttrValue>,
    /// Text fields only: leading icon.
    #[prop_or_default]
    pub icon: Option<Html>,
    /// Text fields only: input `type`.
    #[prop_or_default]
    pub input_type: Option<AttrValue>,
    /// Form field name.
    #[prop_or_default]
    pub name: Option<AttrValue>,
    /// Text fields only: `min` attribute.
    #[prop_or_default]
    pub min: Option<AttrValue>,
    /// Text fields only: `max` attribute.
    #[prop_or_default]
    pub max: Option<AttrValue>,
    /// Text fields only: `step` attribute.
    #[prop_or_default]
    pub step: Option<AttrValue>,
    /// Minimum input length.
    #[prop_or_default]
    pub min_length: Option<u32>,
    /// Maximum input length.
    #[prop_or_default]
    pub max_length: Option<u32>,
    /// Browser autocomplete hint.
    #[prop_or_default]
    pub auto_complete: Option<AttrValue>,
    /// Tab index of the input.
    #[prop_or_default]
    pub tab_index: Option<i32>,
    /// Tab index of the clear button; falls back to `tab_index`.
    #[prop_or_default]
    pub clear_button_tab_index: Option<i32>,
    /// Ref forwarded to the clear button.
    #[prop_or_default]
    pub clear_button_ref: NodeRef,
    /// Text areas only: visible rows.
    #[prop_or_default]
    pub rows: Option<u32>,
    /// Text areas only: keep a fixed height instead of growing.
    #[prop_or_default]
    pub has_fixed_height: bool,
    /// Ref forwarded to the input element.
    #[prop_or_default]
    pub input_ref: NodeRef,
    /// Fires on every input event with the new value, or `None` when it could not be read.
    #[prop_or_default]
    pub on_change: Callback<Option<String>>,
    /// Input gained focus.
    #[prop_or_default]
    pub on_focus: Callback<FocusEvent>,
    /// Input lost focus.
    #[prop_or_default]
    pub on_blur: Callback<FocusEvent>,
    /// Key name on key down.
    #[prop_or_default]
    pub on_key_down: Callback<String>,
    /// Key name on key press.
    #[prop_or_default]
    pub on_key_press: Callback<String>,
    /// Key name on key up.
    #[prop_or_default]
    pub on_key_up: Callback<String>,
    /// Enter was pressed.
    #[prop_or_default]
    pub on_enter_key: Callback<KeyboardEvent>,
}

#[derive(Properties, PartialEq)]
pub(super) struct FieldFrameProps {
    pub(super) kind: FieldKind,
    pub(super) field: FieldProps,
}

fn read_value(node: &NodeRef) -> Option<String> {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .or_else(|| node.cast::<HtmlTextAreaElement>().map(|area| area.value()))
}

fn focus_input(node: &NodeRef) {
    if let Some(element) = node.cast::<HtmlElement>() {
        if let Err(err) = element.focus() {
            console::error!("field focus failed", err);
        }
    }
}

fn move_caret_to_end(node: &NodeRef) {
    let result = if let Some(input) = node.cast::<HtmlInputElement>() {
        let end = caret_end(&input.value());
        input.set_selection_range(end, end)
    } else if let Some(area) = node.cast::<HtmlTextAreaElement>() {
        let end = caret_end(&area.value());
        area.set_selection_range(end, end)
    } else {
        Ok(())
    };
    // `type="number"` and friends reject selection ranges.
    if let Err(err) = result {
        console::debug!("field caret not moved", err);
    }
}

fn field_rules(kind: FieldKind, props: &FieldProps) -> FieldRules<'_> {
    FieldRules {
        label: props.label.as_deref(),
        auto_hide_label: props.auto_hide_label,
        is_valid: props.is_valid,
        is_full_width: props.is_full_width,
        error_message_type: props.error_message_type,
        tooltip_error: props.tooltip_error.as_deref(),
        tooltip_hint: props.tooltip_hint.as_deref(),
        validation_message: props.validation_message.as_deref(),
        prefix: props.prefix.as_deref(),
        has_icon: props.icon.is_some(),
        is_clearable: props.is_clearable,
        is_required: props.is_required,
        fixed_height: (kind == FieldKind::TextArea).then_some(props.has_fixed_height),
    }
}

#[function_component(FieldFrame)]
pub(super) fn field_frame(frame: &FieldFrameProps) -> Html {
    let kind = frame.kind;
    let props = &frame.field;
    let ui = use_ui_config();
    let state = use_mut_ref(|| FieldState::new(props.value.as_deref()));
    let redraw = use_force_update();
    let id = use_state(|| kind.next_id());
    let input_ref = props.input_ref.clone();

    let rules = field_rules(kind, props);
    let tooltip = field_tooltip(&rules);
    let wrapped = tooltip.is_some();
    let was_wrapped = use_mut_ref(|| wrapped);

    {
        let state = state.clone();
        let redraw = redraw.clone();
        use_effect_with_deps(
            move |value| {
                if state.borrow_mut().sync_value(value.as_deref()) {
                    redraw.force_update();
                }
                || ()
            },
            props.value.clone(),
        );
    }

    {
        let state = state.clone();
        let input_ref = input_ref.clone();
        use_effect_with_deps(
            move |wrapped| {
                let previous = was_wrapped.replace(*wrapped);
                if needs_focus_fix(previous, *wrapped, state.borrow().has_focus()) {
                    focus_input(&input_ref);
                    move_caret_to_end(&input_ref);
                }
                || ()
            },
            wrapped,
        );
    }

    let update = |apply: fn(&mut FieldState)| {
        let state = state.clone();
        let redraw = redraw.clone();
        move || {
            apply(&mut state.borrow_mut());
            redraw.force_update();
        }
    };

    let onmouseenter = {
        let enter = update(FieldState::mouse_enter);
        Callback::from(move |_: MouseEvent| enter())
    };
    let onmouseleave = {
        let leave = update(FieldState::mouse_leave);
        Callback::from(move |_: MouseEvent| leave())
    };
    let onfocus = {
        let focus = update(FieldState::focus);
        let on_focus = props.on_focus.clone();
        Callback::from(move |event: FocusEvent| {
            focus();
            on_focus.emit(event);
        })
    };
    let onblur = {
        let blur = update(FieldState::blur);
        let on_blur = props.on_blur.clone();
        Callback::from(move |event: FocusEvent| {
            blur();
            on_blur.emit(event);
        })
    };
    let oninput = {
        let state = state.clone();
        let redraw = redraw.clone();
        let input_ref = input_ref.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: InputEvent| {
            let change = state.borrow_mut().input(read_value(&input_ref));
            if change.updated {
                redraw.force_update();
            }
            on_change.emit(change.value);
        })
    };
    let onanimationstart = {
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: AnimationEvent| {
            if state.borrow_mut().animation_start(&event.animation_name()) {
                redraw.force_update();
            }
        })
    };
    let onkeydown = {
        let on_key_down = props.on_key_down.clone();
        let on_enter_key = props.on_enter_key.clone();
        Callback::from(move |event: KeyboardEvent| {
            let key = event.key();
            let enter = is_enter(&key);
            on_key_down.emit(key);
            if enter {
                on_enter_key.emit(event);
            }
        })
    };
    let onkeypress = props.on_key_press.reform(|event: KeyboardEvent| event.key());
    let onkeyup = props.on_key_up.reform(|event: KeyboardEvent| event.key());
    let focus_on_click = {
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| focus_input(&input_ref))
    };
    let clear = {
        let clear = update(FieldState::clear);
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            clear();
            focus_input(&input_ref);
        })
    };

    let current = state.borrow().clone();
    let value = current.value().unwrap_or_default().to_string();
    let placeholder = props
        .placeholder
        .clone()
        .filter(|_| current.show_placeholder(&rules));
    let label = props
        .label
        .clone()
        .filter(|_| current.show_label(&rules))
        .map(|text| html! { <label for={(*id).clone()} class={kind.part("label")}>{ text }</label> })
        .unwrap_or_default();
    let tab_index = props.tab_index.map(|index| index.to_string());

    let input = match kind {
        FieldKind::TextField => html! {
            <input
                class={kind.part("input")}
                id={(*id).clone()}
                ref={input_ref.clone()}
                r#type={props.input_type.clone().unwrap_or_else(|| ui.field.input_type.clone().into())}
                name={props.name.clone()}
                min={props.min.clone()}
                max={props.max.clone()}
                step={props.step.clone()}
                minlength={props.min_length.map(|len| len.to_string())}
                maxlength={props.max_length.map(|len| len.to_string())}
                autocomplete={props.auto_complete.clone()}
                placeholder={placeholder}
                disabled={props.is_disabled}
                readonly={props.is_read_only}
                required={props.is_required}
                tabindex={tab_index.clone()}
                value={value}
                onfocus={onfocus}
                onblur={onblur}
                oninput={oninput}
                onkeydown={onkeydown}
                onkeypress={onkeypress}
                onkeyup={onkeyup}
                onanimationstart={onanimationstart}
            />
        },
        FieldKind::TextArea => html! {
            <textarea
                class={kind.part("input")}
                id={(*id).clone()}
                ref={input_ref.clone()}
                name={props.name.clone()}
                rows={props.rows.map(|rows| rows.to_string())}
                minlength={props.min_length.map(|len| len.to_string())}
                maxlength={props.max_length.map(|len| len.to_string())}
                autocomplete={props.auto_complete.clone()}
                placeholder={placeholder}
                disabled={props.is_disabled}
                readonly={props.is_read_only}
                required={props.is_required}
                tabindex={tab_index.clone()}
                value={value}
                onfocus={onfocus}
                onblur={onblur}
                oninput={oninput}
                onkeydown={onkeydown}
                onkeypress={onkeypress}
                onkeyup={onkeyup}
                onanimationstart={onanimationstart}
            />
        },
    };

    let input = match tooltip {
        Some(tip) => html! {
            <Tooltip
                tooltip={html! {
                    <TooltipBox status={tip.status}>{ tip.text.to_string() }</TooltipBox>
                }}
                show_tooltip={Some(current.show_tooltip())}
            >
                { input }
            </Tooltip>
        },
        None => input,
    };

    let leading = match current.adornment(&rules) {
        Some(Adornment::Prefix(prefix)) => html! {
            <Button
                class={kind.part("prefix")}
                variant={ButtonVariant::Clear}
                tab_index={Some(-1)}
                onclick={focus_on_click}
            >
                { prefix.to_string() }
            </Button>
        },
        Some(Adornment::Icon) => html! {
            <Button
                class={kind.part("icon")}
                variant={ButtonVariant::Clear}
                tab_index={Some(-1)}
                onclick={focus_on_click}
            >
                { props.icon.clone().unwrap_or_default() }
            </Button>
        },
        None => Html::default(),
    };

    let trailing = match current.trailing(&rules) {
        Some(TrailingControl::Clear) => html! {
            <Button
                class={kind.part("clear")}
                variant={ButtonVariant::Clear}
                tab_index={clear_button_tab_index(props.clear_button_tab_index, props.tab_index)}
                node_ref={props.clear_button_ref.clone()}
                onclick={clear}
            >
                <IconClear />
            </Button>
        },
        Some(TrailingControl::Required) => {
            let text = props
                .tooltip_required
                .as_ref()
                .map_or_else(|| ui.field.tooltip_required.clone(), ToString::to_string);
            html! {
                <Tooltip tooltip={text}>
                    <IconRequired />
                </Tooltip>
            }
        }
        None => Html::default(),
    };

    let message = validation_message(&rules)
        .map(|text| {
            html! { <div class={kind.part("validation-message")}>{ text.to_string() }</div> }
        })
        .unwrap_or_default();

    html! {
        <div
            class={current.classes(kind, &rules, &props.class)}
            style={props.style.clone()}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            { leading }
            <div class={inner_classes(kind, &rules)}>
                <div class={kind.part("label-wrapper")}>
                    { label }
                </div>
                { input }
                { message }
            </div>
            { trailing }
        </div>
    }
}
