//! Single-line text input with label, tooltips and adornments.

use yew::prelude::*;

use super::field::{FieldFrame, FieldProps};
use crate::core::field::FieldKind;

/// Props for [`TextField`].
pub type TextFieldProps = FieldProps;

/// Labelled `<input>` with validation tooltips, prefix, icon and clear button.
#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    html! { <FieldFrame kind={FieldKind::TextField} field={props.clone()} /> }
}
