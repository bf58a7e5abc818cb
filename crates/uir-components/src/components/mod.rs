//! Yew components rendering the [`crate::core`] rules in the browser.

use gloo::console;
use yew::prelude::*;
use yew::virtual_dom::{ApplyAttributeAs, VNode};

use crate::core::config::UiConfig;
use crate::core::data_attrs::data_attributes;
use crate::core::error::PropsResult;
use crate::core::validate;

pub mod avatar;
pub mod avatar_card;
pub mod button;
pub mod icons;
pub mod text_area;
pub mod text_field;
pub mod tooltip;
pub mod tooltip_box;

mod field;

pub use field::FieldProps;

pub use avatar::Avatar;
pub use avatar_card::AvatarCard;
pub use button::Button;
pub use text_area::TextArea;
pub use text_field::TextField;
pub use tooltip::Tooltip;
pub use tooltip_box::TooltipBox;

/// Caller `data-*` attributes forwarded to a widget's root element.
pub type DataAttributes = Vec<(AttrValue, AttrValue)>;

/// Copy the caller's `data-*` attributes onto the root element of `node`.
fn with_data_attributes(mut node: Html, data: &[(AttrValue, AttrValue)]) -> Html {
    if let VNode::VTag(tag) = &mut node {
        let attributes = tag.attributes.get_mut_index_map();
        for (name, value) in data_attributes(data) {
            attributes.insert(
                AttrValue::from(name.to_string()),
                (AttrValue::from(value.to_string()), ApplyAttributeAs::Attribute),
            );
        }
    }
    node
}

/// Mirror a failed contract check to the browser console.
fn report(result: PropsResult<()>) {
    if let Err(err) = validate::check(result) {
        console::warn!(format!("Warning: Failed prop type: {}", err.describe()));
    }
}

/// Library defaults from context, or the built-in ones.
#[hook]
fn use_ui_config() -> UiConfig {
    use_context::<UiConfig>().unwrap_or_default()
}
