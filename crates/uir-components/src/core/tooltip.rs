//! Tooltip positioning and visibility engine.
//!
//! # Design
//! - Overlay offsets are a pure function of the placement and the two measured sizes.
//! - `auto` is resolved from the anchor's viewport quadrant on every enter/focus and cached
//!   until the next one.
//! - A controlled visibility flag only changes what is read for rendering; local transitions
//!   keep running underneath it.
//! - The overlay is never unmounted, so hidden and shown differ only in opacity and stacking.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use yew::html::IntoPropValue;
use yew::{AttrValue, Classes, Html};

use crate::core::classes::merge_classes;
use crate::core::error::{PropsError, PropsResult};
use crate::core::tooltip_box::TooltipBoxStatus;
use crate::core::validate;

/// Base class of the tooltip root.
pub const TOOLTIP_CLASS: &str = "uir-tooltip";
/// Class of the positioned overlay node.
pub const TOOLTIP_CONTENTS_CLASS: &str = "uir-tooltip-contents";
/// Class of the anchor wrapper that receives hover and focus events.
pub const TOOLTIP_INNER_CLASS: &str = "uir-tooltip-inner";

/// Default gap in pixels between anchor and overlay.
pub const DEFAULT_TOOLTIP_OFFSET: i32 = 10;
/// Default tab index of the tooltip root.
pub const DEFAULT_TOOLTIP_TAB_INDEX: i32 = -1;
/// Stacking order of a shown overlay.
pub const VISIBLE_Z_INDEX: i32 = 1000;
/// Stacking order of a hidden overlay.
pub const HIDDEN_Z_INDEX: i32 = -1;

const COMPONENT: &str = "Tooltip";

/// Requested placement of the overlay relative to its anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TooltipPosition {
    /// Above the anchor, horizontally centred.
    #[default]
    TopCenter,
    /// Above the anchor, hugging its left edge.
    TopLeft,
    /// Above the anchor, hugging its right edge.
    TopRight,
    /// Below the anchor, horizontally centred.
    BottomCenter,
    /// Below the anchor, to its left.
    BottomLeft,
    /// Below the anchor, to its right.
    BottomRight,
    /// Left of the anchor, vertically centred.
    Left,
    /// Right of the anchor, vertically centred.
    Right,
    /// Corner chosen at runtime from the anchor's viewport quadrant.
    Auto,
}

impl TooltipPosition {
    /// Every placement, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::TopCenter,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomCenter,
        Self::BottomLeft,
        Self::BottomRight,
        Self::Left,
        Self::Right,
        Self::Auto,
    ];

    /// Returns the kebab-case name of the placement.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopCenter => "top-center",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomCenter => "bottom-center",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::Left => "left",
            Self::Right => "right",
            Self::Auto => "auto",
        }
    }

    /// Returns `true` for the runtime-resolved placement.
    #[must_use]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl fmt::Display for TooltipPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TooltipPosition {
    type Err = PropsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|position| position.as_str() == value)
            .ok_or_else(|| PropsError::UnknownValue {
                component: COMPONENT,
                prop: "position",
                value: value.to_string(),
            })
    }
}

/// Client size of a rendered node in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Size {
    /// Construct a size from width and height.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Origin of the anchor's bounding box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorPoint {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

/// Inner dimensions of the browser viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,
}

/// Overlay offset from the anchor wrapper's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Offset {
    /// Horizontal offset in pixels.
    pub left: i32,
    /// Vertical offset in pixels.
    pub top: i32,
}

/// Horizontal overlay offset for a placement.
///
/// An unset or still-unresolved `auto` placement uses the `bottom-right` formula.
#[must_use]
pub fn left_position(
    position: Option<TooltipPosition>,
    anchor: Size,
    overlay: Size,
    offset: i32,
) -> i32 {
    match position.unwrap_or(TooltipPosition::BottomRight) {
        TooltipPosition::TopCenter | TooltipPosition::BottomCenter => {
            (anchor.width - overlay.width).div_euclid(2)
        }
        TooltipPosition::Left | TooltipPosition::TopLeft | TooltipPosition::BottomLeft => {
            -(overlay.width + offset)
        }
        TooltipPosition::Right
        | TooltipPosition::TopRight
        | TooltipPosition::BottomRight
        | TooltipPosition::Auto => anchor.width + offset,
    }
}

/// Vertical overlay offset for a placement.
///
/// An unset or still-unresolved `auto` placement uses the `top-left` formula. Corner
/// placements above the anchor do not add the offset.
#[must_use]
pub fn top_position(
    position: Option<TooltipPosition>,
    anchor: Size,
    overlay: Size,
    offset: i32,
) -> i32 {
    match position.unwrap_or(TooltipPosition::TopLeft) {
        TooltipPosition::TopCenter => -(overlay.height + offset),
        TooltipPosition::Left | TooltipPosition::Right => {
            (anchor.height - overlay.height).div_euclid(2)
        }
        TooltipPosition::BottomLeft | TooltipPosition::BottomRight => anchor.height,
        TooltipPosition::BottomCenter => anchor.height + offset,
        TooltipPosition::TopLeft | TooltipPosition::TopRight | TooltipPosition::Auto => {
            -overlay.height
        }
    }
}

/// Pick a corner placement from the anchor's position within the viewport.
///
/// Anchors in the upper half open downwards, anchors in the left half open to the right.
#[must_use]
pub fn resolve_auto(anchor: AnchorPoint, viewport: Viewport) -> TooltipPosition {
    let above_centre = anchor.y < viewport.height / 2.0;
    let left_of_centre = anchor.x < viewport.width / 2.0;
    match (above_centre, left_of_centre) {
        (true, true) => TooltipPosition::BottomRight,
        (true, false) => TooltipPosition::BottomLeft,
        (false, true) => TooltipPosition::TopRight,
        (false, false) => TooltipPosition::TopLeft,
    }
}

/// Construction-time tooltip configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TooltipConfig {
    /// Requested placement.
    pub position: TooltipPosition,
    /// Controlled visibility; `None` defers to hover/focus state.
    pub show_tooltip: Option<bool>,
    /// Gap between anchor and overlay in pixels.
    pub offset: i32,
    /// Tab index of the tooltip root.
    pub tab_index: i32,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            position: TooltipPosition::default(),
            show_tooltip: None,
            offset: DEFAULT_TOOLTIP_OFFSET,
            tab_index: DEFAULT_TOOLTIP_TAB_INDEX,
        }
    }
}

/// Outcome of a measurement attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Measurement {
    /// Both nodes were mounted and their sizes were stored.
    Measured,
    /// A node was missing; previously stored sizes were kept.
    Skipped,
}

/// Inline style of the overlay node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayStyle {
    /// Vertical offset in pixels.
    pub top: i32,
    /// Horizontal offset in pixels.
    pub left: i32,
    /// `1` when shown, `0` when hidden.
    pub opacity: u8,
    /// Stacking order.
    pub z_index: i32,
}

impl OverlayStyle {
    /// Returns `true` when the overlay is shown.
    #[must_use]
    pub const fn is_shown(&self) -> bool {
        self.opacity > 0
    }

    /// Render as an inline CSS declaration list.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "top: {}px; left: {}px; opacity: {}; z-index: {};",
            self.top, self.left, self.opacity, self.z_index
        )
    }
}

/// Per-instance tooltip state: local visibility, measured sizes and cached auto placement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TooltipState {
    visible: bool,
    anchor: Size,
    overlay: Size,
    auto_position: Option<TooltipPosition>,
}

impl TooltipState {
    /// Fresh hidden state with zero sizes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the anchor wrapper and overlay sizes once both nodes are mounted.
    pub fn measure(&mut self, anchor: Option<Size>, overlay: Option<Size>) -> Measurement {
        match (anchor, overlay) {
            (Some(anchor), Some(overlay)) => {
                self.anchor = anchor;
                self.overlay = overlay;
                Measurement::Measured
            }
            _ => {
                debug!(
                    anchor_mounted = anchor.is_some(),
                    overlay_mounted = overlay.is_some(),
                    "tooltip measurement skipped"
                );
                Measurement::Skipped
            }
        }
    }

    /// Hover-enter or focus on the anchor wrapper.
    ///
    /// For `auto` placements the probe (anchor origin and viewport) re-resolves the corner;
    /// without a probe the previous resolution is kept.
    pub fn enter(&mut self, requested: TooltipPosition, probe: Option<(AnchorPoint, Viewport)>) {
        self.visible = true;
        if !requested.is_auto() {
            return;
        }
        if let Some((anchor, viewport)) = probe {
            let resolved = resolve_auto(anchor, viewport);
            debug!(position = resolved.as_str(), "tooltip auto position resolved");
            self.auto_position = Some(resolved);
        }
    }

    /// Hover-leave or blur on the anchor wrapper.
    pub fn leave(&mut self) {
        self.visible = false;
    }

    /// Visibility derived from hover/focus alone.
    #[must_use]
    pub const fn is_locally_visible(&self) -> bool {
        self.visible
    }

    /// Visibility used for rendering; a controlled flag always wins.
    #[must_use]
    pub fn is_visible(&self, controlled: Option<bool>) -> bool {
        controlled.unwrap_or(self.visible)
    }

    /// Last measured anchor wrapper size.
    #[must_use]
    pub const fn anchor_size(&self) -> Size {
        self.anchor
    }

    /// Last measured overlay size.
    #[must_use]
    pub const fn overlay_size(&self) -> Size {
        self.overlay
    }

    /// Cached `auto` resolution, if any focus event has happened yet.
    #[must_use]
    pub const fn auto_position(&self) -> Option<TooltipPosition> {
        self.auto_position
    }

    /// Placement used for offsets: the request itself, or the cached `auto` resolution.
    #[must_use]
    pub const fn effective_position(&self, requested: TooltipPosition) -> Option<TooltipPosition> {
        if requested.is_auto() {
            self.auto_position
        } else {
            Some(requested)
        }
    }

    /// Overlay offset for the given configuration.
    #[must_use]
    pub fn offset(&self, config: &TooltipConfig) -> Offset {
        let position = self.effective_position(config.position);
        Offset {
            left: left_position(position, self.anchor, self.overlay, config.offset),
            top: top_position(position, self.anchor, self.overlay, config.offset),
        }
    }

    /// Inline style of the overlay node for the given configuration.
    #[must_use]
    pub fn overlay_style(&self, config: &TooltipConfig) -> OverlayStyle {
        let Offset { left, top } = self.offset(config);
        let shown = self.is_visible(config.show_tooltip);
        OverlayStyle {
            top,
            left,
            opacity: u8::from(shown),
            z_index: if shown {
                VISIBLE_Z_INDEX
            } else {
                HIDDEN_Z_INDEX
            },
        }
    }
}

/// Tooltip body as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TooltipContent<E> {
    /// Plain text, rendered inside a default-status tooltip box.
    Text(String),
    /// Rich content rendered as-is.
    Element(E),
}

impl<E> TooltipContent<E> {
    /// Returns `true` for blank text content.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }

    /// Decide how the body is rendered inside the overlay.
    #[must_use]
    pub fn into_overlay(self) -> OverlayBody<E> {
        match self {
            Self::Text(text) => OverlayBody::Boxed {
                status: TooltipBoxStatus::Default,
                text,
            },
            Self::Element(element) => OverlayBody::Raw(element),
        }
    }
}

impl<E> From<&str> for TooltipContent<E> {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl<E> From<String> for TooltipContent<E> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<E> IntoPropValue<TooltipContent<E>> for &'static str {
    fn into_prop_value(self) -> TooltipContent<E> {
        self.into()
    }
}

impl<E> IntoPropValue<TooltipContent<E>> for String {
    fn into_prop_value(self) -> TooltipContent<E> {
        self.into()
    }
}

impl<E> IntoPropValue<TooltipContent<E>> for AttrValue {
    fn into_prop_value(self) -> TooltipContent<E> {
        TooltipContent::Text(self.to_string())
    }
}

impl IntoPropValue<TooltipContent<Self>> for Html {
    fn into_prop_value(self) -> TooltipContent<Self> {
        TooltipContent::Element(self)
    }
}

/// Render plan for the overlay body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayBody<E> {
    /// Text wrapped in a tooltip box.
    Boxed {
        /// Status of the wrapping box.
        status: TooltipBoxStatus,
        /// Text content.
        text: String,
    },
    /// Caller-supplied content without a wrapper.
    Raw(E),
}

/// Classes of the tooltip root followed by the caller's.
#[must_use]
pub fn tooltip_classes(extra: &Classes) -> Classes {
    merge_classes(Classes::from(TOOLTIP_CLASS), extra)
}

/// Check the tooltip contract: non-blank content and exactly one anchor child.
///
/// # Errors
/// Returns [`PropsError::MissingProp`] for blank text content and
/// [`PropsError::ChildCount`] when the anchor is not a single element.
pub fn validate_props<E>(tooltip: &TooltipContent<E>, children: usize) -> PropsResult<()> {
    if tooltip.is_blank() {
        return Err(PropsError::MissingProp {
            component: COMPONENT,
            prop: "tooltip",
        });
    }
    validate::require_single_child(COMPONENT, children)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR: Size = Size::new(100, 20);
    const OVERLAY: Size = Size::new(40, 30);
    const GAP: i32 = 10;

    fn offsets(position: TooltipPosition) -> (i32, i32) {
        (
            left_position(Some(position), ANCHOR, OVERLAY, GAP),
            top_position(Some(position), ANCHOR, OVERLAY, GAP),
        )
    }

    #[test]
    fn explicit_positions_follow_offset_formulas() {
        assert_eq!(offsets(TooltipPosition::TopCenter), (30, -40));
        assert_eq!(offsets(TooltipPosition::TopLeft), (-50, -30));
        assert_eq!(offsets(TooltipPosition::TopRight), (110, -30));
        assert_eq!(offsets(TooltipPosition::BottomCenter), (30, 30));
        assert_eq!(offsets(TooltipPosition::BottomLeft), (-50, 20));
        assert_eq!(offsets(TooltipPosition::BottomRight), (110, 20));
        assert_eq!(offsets(TooltipPosition::Left), (-50, -5));
        assert_eq!(offsets(TooltipPosition::Right), (110, -5));
    }

    #[test]
    fn centring_floors_towards_negative_infinity() {
        let anchor = Size::new(11, 11);
        let overlay = Size::new(20, 20);
        assert_eq!(
            left_position(Some(TooltipPosition::TopCenter), anchor, overlay, GAP),
            -5
        );
        assert_eq!(
            top_position(Some(TooltipPosition::Right), anchor, overlay, GAP),
            -5
        );
    }

    #[test]
    fn unset_position_uses_fallback_keys() {
        assert_eq!(
            left_position(None, ANCHOR, OVERLAY, GAP),
            left_position(Some(TooltipPosition::BottomRight), ANCHOR, OVERLAY, GAP)
        );
        assert_eq!(
            top_position(None, ANCHOR, OVERLAY, GAP),
            top_position(Some(TooltipPosition::TopLeft), ANCHOR, OVERLAY, GAP)
        );
        assert_eq!(offsets(TooltipPosition::Auto), (110, -30));
    }

    #[test]
    fn auto_resolves_from_viewport_quadrant() {
        let viewport = Viewport {
            width: 100.0,
            height: 100.0,
        };
        let at = |x, y| resolve_auto(AnchorPoint { x, y }, viewport);
        assert_eq!(at(10.0, 10.0), TooltipPosition::BottomRight);
        assert_eq!(at(90.0, 10.0), TooltipPosition::BottomLeft);
        assert_eq!(at(10.0, 90.0), TooltipPosition::TopRight);
        assert_eq!(at(50.0, 50.0), TooltipPosition::TopLeft);
    }

    #[test]
    fn auto_resolution_is_cached_until_next_focus() {
        let viewport = Viewport {
            width: 100.0,
            height: 100.0,
        };
        let mut state = TooltipState::new();
        assert_eq!(state.effective_position(TooltipPosition::Auto), None);

        state.enter(
            TooltipPosition::Auto,
            Some((AnchorPoint { x: 10.0, y: 10.0 }, viewport)),
        );
        state.leave();
        assert_eq!(
            state.effective_position(TooltipPosition::Auto),
            Some(TooltipPosition::BottomRight)
        );

        state.enter(
            TooltipPosition::Auto,
            Some((AnchorPoint { x: 80.0, y: 80.0 }, viewport)),
        );
        assert_eq!(state.auto_position(), Some(TooltipPosition::TopLeft));
    }

    #[test]
    fn explicit_position_ignores_probe() {
        let mut state = TooltipState::new();
        state.enter(
            TooltipPosition::Left,
            Some((AnchorPoint::default(), Viewport::default())),
        );
        assert_eq!(state.auto_position(), None);
        assert_eq!(
            state.effective_position(TooltipPosition::Left),
            Some(TooltipPosition::Left)
        );
    }

    #[test]
    fn uncontrolled_visibility_follows_enter_and_leave() {
        let mut state = TooltipState::new();
        assert!(!state.is_visible(None));
        state.enter(TooltipPosition::TopCenter, None);
        assert!(state.is_visible(None));
        state.leave();
        assert!(!state.is_visible(None));
    }

    #[test]
    fn controlled_visibility_wins_over_local_state() {
        let mut state = TooltipState::new();
        state.enter(TooltipPosition::TopCenter, None);
        assert!(!state.is_visible(Some(false)));
        assert!(state.is_locally_visible());
        state.leave();
        assert!(state.is_visible(Some(true)));
        assert!(!state.is_locally_visible());
    }

    #[test]
    fn measurement_skips_without_both_nodes() {
        let mut state = TooltipState::new();
        assert_eq!(state.measure(Some(ANCHOR), None), Measurement::Skipped);
        assert_eq!(state.anchor_size(), Size::default());

        let config = TooltipConfig::default();
        assert_eq!(state.offset(&config), Offset { left: 0, top: -10 });
    }

    #[test]
    fn measurement_is_idempotent() {
        let config = TooltipConfig::default();
        let mut state = TooltipState::new();
        assert_eq!(
            state.measure(Some(ANCHOR), Some(OVERLAY)),
            Measurement::Measured
        );
        let first = state.offset(&config);
        state.measure(Some(ANCHOR), Some(OVERLAY));
        assert_eq!(state.offset(&config), first);
        assert_eq!(first, Offset { left: 30, top: -40 });
    }

    #[test]
    fn overlay_style_only_changes_opacity_and_stacking() {
        let config = TooltipConfig::default();
        let mut state = TooltipState::new();
        state.measure(Some(ANCHOR), Some(OVERLAY));

        let hidden = state.overlay_style(&config);
        state.enter(config.position, None);
        let shown = state.overlay_style(&config);

        assert_eq!((hidden.top, hidden.left), (shown.top, shown.left));
        assert_eq!((hidden.opacity, hidden.z_index), (0, HIDDEN_Z_INDEX));
        assert_eq!((shown.opacity, shown.z_index), (1, VISIBLE_Z_INDEX));
        assert!(shown.is_shown());
        assert_eq!(
            shown.to_css(),
            "top: -40px; left: 30px; opacity: 1; z-index: 1000;"
        );
    }

    #[test]
    fn text_content_is_boxed_and_elements_are_raw() {
        let text: TooltipContent<u8> = "required".into();
        assert_eq!(
            text.into_overlay(),
            OverlayBody::Boxed {
                status: TooltipBoxStatus::Default,
                text: "required".to_string(),
            }
        );
        assert_eq!(
            TooltipContent::Element(7_u8).into_overlay(),
            OverlayBody::Raw(7)
        );
    }

    #[test]
    fn positions_round_trip_through_strings() {
        for position in TooltipPosition::ALL {
            assert_eq!(position.as_str().parse::<TooltipPosition>(), Ok(position));
        }
        assert!("middle".parse::<TooltipPosition>().is_err());
    }

    #[test]
    fn props_require_content_and_single_child() {
        let content: TooltipContent<()> = "hint".into();
        assert!(validate_props(&content, 1).is_ok());
        assert!(validate_props(&TooltipContent::<()>::Text(String::new()), 1).is_err());
        assert!(validate_props(&content, 0).is_err());
        assert_eq!(tooltip_classes(&Classes::new()).to_string(), "uir-tooltip");
    }

    #[test]
    fn prop_values_pick_the_content_kind() {
        let text: TooltipContent<Html> = "required".into_prop_value();
        assert_eq!(text, TooltipContent::Text("required".to_string()));
        let attr: TooltipContent<Html> = AttrValue::from("hint").into_prop_value();
        assert_eq!(attr, TooltipContent::Text("hint".to_string()));
        let rich: TooltipContent<Html> = Html::default().into_prop_value();
        assert!(matches!(rich, TooltipContent::Element(_)));
    }
}
