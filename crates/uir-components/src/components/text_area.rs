//! Multi-line text input sharing the text field behaviour.

use yew::prelude::*;

use super::field::{FieldFrame, FieldProps};
use crate::core::field::FieldKind;

/// Props for [`TextArea`]. Prefix, icon and input type are ignored.
pub type TextAreaProps = FieldProps;

/// Labelled `<textarea>` with fixed or growing height.
#[function_component(TextArea)]
pub fn text_area(props: &TextAreaProps) -> Html {
    html! { <FieldFrame kind={FieldKind::TextArea} field={props.clone()} /> }
}
