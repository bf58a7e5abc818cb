//! Passthrough of caller `data-*` attributes onto a widget's root element.

use tracing::debug;

/// Prefix every forwarded attribute must carry.
pub const DATA_PREFIX: &str = "data-";

/// Returns `true` for a well-formed `data-*` attribute name.
#[must_use]
pub fn is_data_attribute(name: &str) -> bool {
    name.strip_prefix(DATA_PREFIX)
        .is_some_and(|rest| !rest.is_empty() && !rest.contains(char::is_whitespace))
}

/// Keep the `data-*` pairs, in order. Other names are dropped.
pub fn data_attributes<'a, K, V>(pairs: &'a [(K, V)]) -> impl Iterator<Item = (&'a str, &'a str)>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs.iter().filter_map(|(name, value)| {
        let name = name.as_ref();
        if is_data_attribute(name) {
            Some((name, value.as_ref()))
        } else {
            debug!(attribute = name, "ignoring non data attribute");
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_data_attributes_pass() {
        let pairs = [
            ("data-testid", "card"),
            ("id", "nope"),
            ("data-", "empty"),
            ("data-row id", "spaced"),
            ("data-row", "3"),
        ];
        let kept: Vec<_> = data_attributes(&pairs).collect();
        assert_eq!(kept, vec![("data-testid", "card"), ("data-row", "3")]);
    }

    #[test]
    fn owned_pairs_are_accepted() {
        let pairs = vec![("data-qa".to_string(), String::new())];
        assert_eq!(data_attributes(&pairs).count(), 1);
        assert!(!is_data_attribute("aria-label"));
    }
}
