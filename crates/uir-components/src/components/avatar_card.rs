//! Avatar with name, job role and team.

use yew::prelude::*;

use super::{DataAttributes, report, with_data_attributes};
use crate::core::avatar::{AVATAR_CARD_CLASS, avatar_card_classes, validate_card_name};
use crate::core::classes::element;

/// Props for [`AvatarCard`].
#[derive(Properties, PartialEq)]
pub struct AvatarCardProps {
    /// Person's name.
    pub name: AttrValue,
    /// Job title.
    #[prop_or_default]
    pub job_role: Option<AttrValue>,
    /// Team name.
    #[prop_or_default]
    pub team: Option<AttrValue>,
    /// Avatar element shown beside the text.
    #[prop_or_default]
    pub avatar: Option<Html>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// Inline style.
    #[prop_or_default]
    pub style: Option<AttrValue>,
    /// `data-*` attributes copied onto the root.
    #[prop_or_default]
    pub data: DataAttributes,
}

fn line(name: &str, value: Option<&AttrValue>) -> Html {
    value
        .filter(|text| !text.is_empty())
        .map(|text| html! { <div class={element(AVATAR_CARD_CLASS, name)}>{ text.clone() }</div> })
        .unwrap_or_default()
}

/// Card introducing a person.
#[function_component(AvatarCard)]
pub fn avatar_card(props: &AvatarCardProps) -> Html {
    {
        let name = props.name.clone();
        use_effect_with_deps(
            move |name| {
                report(validate_card_name(name));
                || ()
            },
            name,
        );
    }

    let has_role = props.job_role.as_ref().is_some_and(|role| !role.is_empty());
    let has_team = props.team.as_ref().is_some_and(|team| !team.is_empty());
    let classes = avatar_card_classes(has_role, has_team, &props.class);
    let profile = props
        .avatar
        .clone()
        .map(|avatar| html! { <div class={element(AVATAR_CARD_CLASS, "profile")}>{ avatar }</div> })
        .unwrap_or_default();

    let card = html! {
        <div class={classes} style={props.style.clone()}>
            { profile }
            <div>
                <div class={element(AVATAR_CARD_CLASS, "name")}>{ props.name.clone() }</div>
                { line("job-role", props.job_role.as_ref()) }
                { line("team", props.team.as_ref()) }
            </div>
        </div>
    };
    with_data_attributes(card, &props.data)
}
