//! Core, DOM-free primitives shared by every widget.
pub mod avatar;
pub mod button;
pub mod classes;
pub mod config;
pub mod data_attrs;
pub mod error;
pub mod field;
pub mod ids;
pub mod tooltip;
pub mod tooltip_box;
pub mod validate;
