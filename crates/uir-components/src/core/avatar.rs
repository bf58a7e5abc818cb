//! Avatar and avatar-card presentation rules.

use serde::{Deserialize, Serialize};
use yew::{Classes, classes};

use crate::core::classes::{element, merge_classes, modifier};
use crate::core::error::PropsResult;
use crate::core::validate;

/// Base class of the avatar.
pub const AVATAR_CLASS: &str = "uir-avatar";
/// Base class of the avatar card.
pub const AVATAR_CARD_CLASS: &str = "uir-avatar-card";

/// Rendered size of an avatar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvatarSize {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Medium.
    #[default]
    Md,
    /// Large.
    Lg,
}

impl AvatarSize {
    /// Class suffix for the size.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

/// Background the status and notification badges are drawn against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvatarTheme {
    /// Light surroundings.
    #[default]
    Light,
    /// Dark surroundings.
    Dark,
}

impl AvatarTheme {
    /// Class suffix for the theme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Up to two uppercase initials taken from the first and last words of `name`.
#[must_use]
pub fn derive_initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next().and_then(|word| word.chars().next());
    let last = words.next_back().and_then(|word| word.chars().next());
    first
        .into_iter()
        .chain(last)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Initials to display: explicit ones win, otherwise derived from the name.
#[must_use]
pub fn display_initials(name: &str, initials: Option<&str>) -> String {
    match initials.map(str::trim) {
        Some(initials) if !initials.is_empty() => initials.to_string(),
        _ => derive_initials(name),
    }
}

/// Badge shown in the avatar's corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AvatarBadge<'a> {
    /// Emoji status.
    Status(&'a str),
    /// Notification marker; replaces any status.
    Notification(&'a str),
}

impl<'a> AvatarBadge<'a> {
    /// Badge contents.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        match self {
            Self::Status(text) | Self::Notification(text) => text,
        }
    }

    /// Class of the badge element.
    #[must_use]
    pub fn class(&self) -> String {
        match self {
            Self::Status(_) => element(AVATAR_CLASS, "status"),
            Self::Notification(_) => element(AVATAR_CLASS, "notification"),
        }
    }
}

/// Pick the badge to render. A notification overrides a status.
#[must_use]
pub fn avatar_badge<'a>(
    status: Option<&'a str>,
    notification: Option<&'a str>,
) -> Option<AvatarBadge<'a>> {
    let present = |value: &&str| !value.is_empty();
    notification
        .filter(present)
        .map(AvatarBadge::Notification)
        .or_else(|| status.filter(present).map(AvatarBadge::Status))
}

/// Classes of the avatar root.
#[must_use]
pub fn avatar_classes(
    size: AvatarSize,
    theme: AvatarTheme,
    has_image: bool,
    extra: &Classes,
) -> Classes {
    let own = classes!(
        AVATAR_CLASS,
        modifier(AVATAR_CLASS, size.as_str()),
        modifier(AVATAR_CLASS, theme.as_str()),
        has_image.then(|| modifier(AVATAR_CLASS, "has-image"))
    );
    merge_classes(own, extra)
}

/// Classes of the avatar-card root.
#[must_use]
pub fn avatar_card_classes(has_role: bool, has_team: bool, extra: &Classes) -> Classes {
    let own = classes!(
        AVATAR_CARD_CLASS,
        has_role.then(|| modifier(AVATAR_CARD_CLASS, "has-role")),
        has_team.then(|| modifier(AVATAR_CARD_CLASS, "has-team"))
    );
    merge_classes(own, extra)
}

/// Check that an avatar card has a name.
///
/// # Errors
/// Returns [`crate::core::error::PropsError::MissingProp`] for an empty name.
pub fn validate_card_name(name: &str) -> PropsResult<()> {
    validate::require_text("AvatarCard", "name", name)
}

/// Check that an avatar has a name.
///
/// # Errors
/// Returns [`crate::core::error::PropsError::MissingProp`] for an empty name.
pub fn validate_avatar_name(name: &str) -> PropsResult<()> {
    validate::require_text("Avatar", "name", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_come_from_first_and_last_word() {
        assert_eq!(derive_initials("David Smith"), "DS");
        assert_eq!(derive_initials("jane"), "J");
        assert_eq!(derive_initials("Mary Ann van Dyke"), "MD");
        assert_eq!(derive_initials("   "), "");
    }

    #[test]
    fn explicit_initials_win() {
        assert_eq!(display_initials("Jane Doe", Some("JX")), "JX");
        assert_eq!(display_initials("Jane Doe", Some(" ")), "JD");
        assert_eq!(display_initials("Jane Doe", None), "JD");
    }

    #[test]
    fn notification_overrides_status() {
        assert_eq!(
            avatar_badge(Some("🦄"), Some("3")),
            Some(AvatarBadge::Notification("3"))
        );
        assert_eq!(avatar_badge(Some("🦄"), None), Some(AvatarBadge::Status("🦄")));
        assert_eq!(avatar_badge(Some(""), Some("")), None);
        assert_eq!(AvatarBadge::Status("🦄").class(), "uir-avatar-status");
        assert_eq!(AvatarBadge::Notification("3").text(), "3");
    }

    #[test]
    fn avatar_classes_include_size_and_theme() {
        assert_eq!(
            avatar_classes(AvatarSize::Lg, AvatarTheme::Dark, true, &classes!("me")).to_string(),
            "uir-avatar uir-avatar--lg uir-avatar--dark uir-avatar--has-image me"
        );
        assert_eq!(
            avatar_classes(
                AvatarSize::default(),
                AvatarTheme::default(),
                false,
                &Classes::new()
            )
            .to_string(),
            "uir-avatar uir-avatar--md uir-avatar--light"
        );
    }

    #[test]
    fn card_classes_track_optional_fields() {
        assert_eq!(
            avatar_card_classes(true, false, &Classes::new()).to_string(),
            "uir-avatar-card uir-avatar-card--has-role"
        );
        assert!(validate_card_name("").is_err());
        assert!(validate_avatar_name("Jane").is_ok());
    }
}
