//! CSS class naming shared by every widget.
//!
//! Widgets compose `yew::Classes` from their props and local state; caller classes are
//! merged last.

use yew::Classes;

/// BEM-style modifier class, e.g. `uir-button--active`.
#[must_use]
pub fn modifier(base: &str, name: &str) -> String {
    format!("{base}--{name}")
}

/// BEM-style element class, e.g. `uir-text-field-label`.
#[must_use]
pub fn element(base: &str, name: &str) -> String {
    format!("{base}-{name}")
}

/// Append any consumer-provided classes to a widget's own classes.
#[must_use]
pub fn merge_classes(mut classes: Classes, extra: &Classes) -> Classes {
    if !extra.is_empty() {
        classes.push(extra.clone());
    }
    classes
}
