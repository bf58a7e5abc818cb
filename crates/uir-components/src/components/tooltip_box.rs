//! Status-styled tooltip body.

use yew::prelude::*;

use crate::core::classes::merge_classes;
use crate::core::tooltip_box::{TooltipBoxStatus, tooltip_box_classes};

/// Props for [`TooltipBox`].
#[derive(Properties, PartialEq)]
pub struct TooltipBoxProps {
    /// Box contents.
    #[prop_or_default]
    pub children: Children,
    /// Visual status.
    #[prop_or_default]
    pub status: TooltipBoxStatus,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// Inline style.
    #[prop_or_default]
    pub style: Option<AttrValue>,
}

/// Container that colours tooltip contents by status.
#[function_component(TooltipBox)]
pub fn tooltip_box(props: &TooltipBoxProps) -> Html {
    let classes = merge_classes(tooltip_box_classes(props.status), &props.class);
    html! {
        <div class={classes} style={props.style.clone()}>
            { for props.children.iter() }
        </div>
    }
}
