//! Unique DOM identifiers for label/input and title/SVG association.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Allocate a process-wide unique id such as `uir-text-field-7`.
#[must_use]
pub fn next_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}
