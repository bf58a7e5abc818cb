//! Inline SVG icons. Each instance labels itself through a `<title>` with a unique id.

use yew::prelude::*;

use crate::core::classes::{element, merge_classes};
use crate::core::ids::next_id;

const ICON_CLASS: &str = "uir-icon";

/// Props shared by every icon.
#[derive(Properties, PartialEq)]
pub struct IconProps {
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// Inline style.
    #[prop_or_default]
    pub style: Option<AttrValue>,
}

#[hook]
fn use_title_id(name: &'static str) -> AttrValue {
    let id = use_state(|| next_id(&format!("icon-{name}-title")));
    AttrValue::from((*id).clone())
}

fn icon_svg(props: &IconProps, name: &str, title_id: AttrValue, title: &str, body: Html) -> Html {
    let own = classes!(ICON_CLASS, element(ICON_CLASS, name));
    html! {
        <svg
            class={merge_classes(own, &props.class)}
            style={props.style.clone()}
            viewBox="0 0 24 24"
            aria-labelledby={title_id.clone()}
        >
            <title id={title_id}>{ title.to_string() }</title>
            { body }
        </svg>
    }
}

/// Long arrow pointing right.
#[function_component(IconArrowLongRight)]
pub fn icon_arrow_long_right(props: &IconProps) -> Html {
    let title_id = use_title_id("arrow-long-right");
    icon_svg(
        props,
        "arrow-long-right",
        title_id,
        "Right Arrow Icon",
        html! {
            <g fill="none" fill-rule="evenodd">
                <path class="uir-icon-fill-charcoal" d="M3 12h18v1H3z" />
                <path class="uir-icon-stroke-charcoal" d="M14.071 5.5l7.071 7.071-7.07 7.071" />
            </g>
        },
    )
}

/// Cross used by clearable fields.
#[function_component(IconClear)]
pub fn icon_clear(props: &IconProps) -> Html {
    let title_id = use_title_id("clear");
    icon_svg(
        props,
        "clear",
        title_id,
        "Clear Icon",
        html! {
            <g fill="none" fill-rule="evenodd">
                <path class="uir-icon-stroke-charcoal" d="M6 6l12 12M18 6L6 18" />
            </g>
        },
    )
}

/// Asterisk marking a required field.
#[function_component(IconRequired)]
pub fn icon_required(props: &IconProps) -> Html {
    let title_id = use_title_id("required");
    icon_svg(
        props,
        "required",
        title_id,
        "Required Icon",
        html! {
            <g fill="none" fill-rule="evenodd">
                <path class="uir-icon-stroke-charcoal" d="M12 5v14M5.938 8.5l12.124 7M5.938 15.5l12.124-7" />
            </g>
        },
    )
}

/// Magnifying glass.
#[function_component(IconSearch)]
pub fn icon_search(props: &IconProps) -> Html {
    let title_id = use_title_id("search");
    icon_svg(
        props,
        "search",
        title_id,
        "Search Icon",
        html! {
            <g fill="none" fill-rule="evenodd">
                <circle class="uir-icon-stroke-charcoal" cx="10.5" cy="10.5" r="6.5" />
                <path class="uir-icon-stroke-charcoal" d="M15.5 15.5L21 21" />
            </g>
        },
    )
}
