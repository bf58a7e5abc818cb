//! Tooltip wrapper: positions overlay content around a single anchor child.

use gloo::timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use super::tooltip_box::TooltipBox;
use super::{DataAttributes, report, use_ui_config, with_data_attributes};
use crate::core::tooltip::{
    AnchorPoint, Measurement, OverlayBody, Size, TOOLTIP_CONTENTS_CLASS, TOOLTIP_INNER_CLASS,
    TooltipContent, TooltipPosition, TooltipState, Viewport, tooltip_classes, validate_props,
};

/// Tooltip body: plain text or rich markup.
pub type TooltipBody = TooltipContent<Html>;

/// Props for [`Tooltip`].
#[derive(Properties, PartialEq)]
pub struct TooltipProps {
    /// Overlay contents. Text is wrapped in a default [`TooltipBox`].
    pub tooltip: TooltipBody,
    /// The anchor; exactly one element.
    #[prop_or_default]
    pub children: Children,
    /// Placement; falls back to the configured default.
    #[prop_or_default]
    pub position: Option<TooltipPosition>,
    /// Controlled visibility. Hover and focus are ignored while set.
    #[prop_or_default]
    pub show_tooltip: Option<bool>,
    /// Gap between anchor and overlay in pixels.
    #[prop_or_default]
    pub tooltip_offset: Option<i32>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// Inline style of the root.
    #[prop_or_default]
    pub style: Option<AttrValue>,
    /// Tab index of the root.
    #[prop_or_default]
    pub tab_index: Option<i32>,
    /// `data-*` attributes copied onto the root.
    #[prop_or_default]
    pub data: DataAttributes,
}

fn client_size(node: &NodeRef) -> Option<Size> {
    node.cast::<Element>()
        .map(|element| Size::new(element.client_width(), element.client_height()))
}

fn viewport_probe(node: &NodeRef) -> Option<(AnchorPoint, Viewport)> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((
        AnchorPoint {
            x: rect.x(),
            y: rect.y(),
        },
        Viewport { width, height },
    ))
}

/// Overlay positioned relative to its anchor child, shown on hover/focus or when forced.
#[function_component(Tooltip)]
pub fn tooltip(props: &TooltipProps) -> Html {
    let ui = use_ui_config();
    let config = ui.tooltip.resolve(
        props.position,
        props.tooltip_offset,
        props.tab_index,
        props.show_tooltip,
    );
    let state = use_mut_ref(TooltipState::new);
    let redraw = use_force_update();
    let anchor_ref = use_node_ref();
    let overlay_ref = use_node_ref();

    {
        let tooltip = props.tooltip.clone();
        let children = props.children.len();
        use_effect_with_deps(
            move |(tooltip, children)| {
                report(validate_props(tooltip, *children));
                || ()
            },
            (tooltip, children),
        );
    }

    {
        let state = state.clone();
        let redraw = redraw.clone();
        let anchor_ref = anchor_ref.clone();
        let overlay_ref = overlay_ref.clone();
        use_effect_with_deps(
            move |_| {
                let pending = Timeout::new(0, move || {
                    let outcome = state
                        .borrow_mut()
                        .measure(client_size(&anchor_ref), client_size(&overlay_ref));
                    if outcome == Measurement::Measured {
                        redraw.force_update();
                    }
                });
                move || drop(pending)
            },
            (),
        );
    }

    let on_enter = {
        let state = state.clone();
        let redraw = redraw.clone();
        let anchor_ref = anchor_ref.clone();
        let requested = config.position;
        Callback::from(move |_: ()| {
            let probe = if requested.is_auto() {
                viewport_probe(&anchor_ref)
            } else {
                None
            };
            state.borrow_mut().enter(requested, probe);
            redraw.force_update();
        })
    };
    let on_leave = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            state.borrow_mut().leave();
            redraw.force_update();
        })
    };

    let overlay_style = state.borrow().overlay_style(&config);
    let body = match props.tooltip.clone().into_overlay() {
        OverlayBody::Boxed { status, text } => html! {
            <TooltipBox status={status}>{ text }</TooltipBox>
        },
        OverlayBody::Raw(content) => content,
    };

    let root = html! {
        <div
            class={tooltip_classes(&props.class)}
            role="tooltip"
            tabindex={config.tab_index.to_string()}
            style={props.style.clone()}
        >
            <div
                class={TOOLTIP_CONTENTS_CLASS}
                ref={overlay_ref}
                style={overlay_style.to_css()}
            >
                { body }
            </div>
            <div
                class={TOOLTIP_INNER_CLASS}
                ref={anchor_ref}
                onmouseenter={on_enter.reform(|_: MouseEvent| ())}
                onmouseleave={on_leave.reform(|_: MouseEvent| ())}
                onfocusin={on_enter.reform(|_: FocusEvent| ())}
                onfocusout={on_leave.reform(|_: FocusEvent| ())}
            >
                { for props.children.iter() }
            </div>
        </div>
    };
    with_data_attributes(root, &props.data)
}
