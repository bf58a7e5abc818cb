#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Presentational Yew widgets: avatar, avatar card, button, text field, text area,
//! tooltip and icons.
//!
//! Positioning math, state machines and class composition live in [`core`] and run on
//! every target. The Yew components that render them are compiled for `wasm32` only.

pub mod core;

#[cfg(target_arch = "wasm32")]
pub mod components;

pub use crate::core::config::UiConfig;
pub use crate::core::error::{ConfigError, PropsError};
pub use crate::core::tooltip::TooltipPosition;

#[cfg(test)]
mod tests {
    use crate::core::tooltip::{Size, left_position, top_position};
    use crate::{TooltipPosition, UiConfig};

    #[test]
    fn default_config_places_tooltips_above_centre() {
        let config = UiConfig::default();
        let anchor = Size::new(100, 20);
        let overlay = Size::new(40, 30);
        let position = Some(config.tooltip.position);
        assert_eq!(position, Some(TooltipPosition::TopCenter));
        assert_eq!(left_position(position, anchor, overlay, config.tooltip.offset), 30);
        assert_eq!(top_position(position, anchor, overlay, config.tooltip.offset), -40);
    }
}
