//! Development-time contract checks for component props.
//!
//! Checks never abort rendering. Callers pass the outcome through [`check`], which
//! logs a warning and hands the result back so the component can mirror it to the
//! browser console.

use tracing::warn;

use crate::core::error::{PropsError, PropsResult};

/// Require a non-blank string prop.
///
/// # Errors
/// Returns [`PropsError::MissingProp`] when `value` is empty or whitespace only.
pub fn require_text(component: &'static str, prop: &'static str, value: &str) -> PropsResult<()> {
    if value.trim().is_empty() {
        return Err(PropsError::MissingProp { component, prop });
    }
    Ok(())
}

/// Require exactly one child element.
///
/// # Errors
/// Returns [`PropsError::ChildCount`] when `found` is not one.
pub const fn require_single_child(component: &'static str, found: usize) -> PropsResult<()> {
    if found == 1 {
        Ok(())
    } else {
        Err(PropsError::ChildCount {
            component,
            expected: 1,
            found,
        })
    }
}

/// Log a failed contract check and return it unchanged.
///
/// # Errors
/// Propagates the error contained in `result`.
pub fn check(result: PropsResult<()>) -> PropsResult<()> {
    if let Err(err) = &result {
        warn!(error = %err, detail = %err.describe(), "component contract violated");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_missing() {
        assert_eq!(
            require_text("AvatarCard", "name", "  "),
            Err(PropsError::MissingProp {
                component: "AvatarCard",
                prop: "name",
            })
        );
        assert!(require_text("AvatarCard", "name", "David Smith").is_ok());
    }

    #[test]
    fn child_count_must_be_one() {
        assert!(require_single_child("Tooltip", 1).is_ok());
        assert_eq!(
            require_single_child("Tooltip", 2),
            Err(PropsError::ChildCount {
                component: "Tooltip",
                expected: 1,
                found: 2,
            })
        );
    }

    #[test]
    fn check_passes_results_through() {
        assert!(check(Ok(())).is_ok());
        assert!(check(require_single_child("Tooltip", 0)).is_err());
    }
}
