//! User avatar: initials or photo with an optional status or notification badge.

use yew::prelude::*;

use super::report;
use crate::core::avatar::{
    AVATAR_CLASS, AvatarSize, AvatarTheme, avatar_badge, avatar_classes, display_initials,
    validate_avatar_name,
};
use crate::core::classes::element;

/// Props for [`Avatar`].
#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    /// Person's name, used for alt text and derived initials.
    pub name: AttrValue,
    /// Explicit initials.
    #[prop_or_default]
    pub initials: Option<AttrValue>,
    /// Photo URL; hides the initials.
    #[prop_or_default]
    pub src: Option<AttrValue>,
    /// Rendered size.
    #[prop_or_default]
    pub size: AvatarSize,
    /// Emoji status badge.
    #[prop_or_default]
    pub status: Option<AttrValue>,
    /// Badge background.
    #[prop_or_default]
    pub theme: AvatarTheme,
    /// Notification badge; replaces the status.
    #[prop_or_default]
    pub notification: Option<AttrValue>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// Inline style.
    #[prop_or_default]
    pub style: Option<AttrValue>,
}

/// Round avatar.
#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    {
        let name = props.name.clone();
        use_effect_with_deps(
            move |name| {
                report(validate_avatar_name(name));
                || ()
            },
            name,
        );
    }

    let has_image = props.src.is_some();
    let classes = avatar_classes(props.size, props.theme, has_image, &props.class);
    let face = props.src.clone().map_or_else(
        || {
            let initials = display_initials(&props.name, props.initials.as_deref());
            html! { <span class={element(AVATAR_CLASS, "initials")}>{ initials }</span> }
        },
        |src| {
            html! {
                <img class={element(AVATAR_CLASS, "image")} src={src} alt={props.name.clone()} />
            }
        },
    );
    let badge = avatar_badge(props.status.as_deref(), props.notification.as_deref())
        .map(|badge| html! { <span class={badge.class()}>{ badge.text().to_string() }</span> })
        .unwrap_or_default();

    html! {
        <div class={classes} style={props.style.clone()} title={props.name.clone()}>
            { face }
            { badge }
        </div>
    }
}
