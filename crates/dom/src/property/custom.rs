//! Free-form custom attribute classification.

use std::sync::LazyLock;

use regex::Regex;

static CUSTOM_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(data|aria)-[a-z_][a-z\d_.\-]*$").expect("custom attribute pattern compiles")
});

/// True for free-form `data-`/`aria-` attribute names.
///
/// Matches are always attribute-stored with no coercion, whether or not the
/// registry knows the name; the resolver checks this before reporting a
/// name as unknown.
pub fn is_custom_attribute(name: &str) -> bool {
	CUSTOM_ATTRIBUTE.is_match(name)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_reserved_prefixes() {
		assert!(is_custom_attribute("data-foo"));
		assert!(is_custom_attribute("aria-label"));
		assert!(is_custom_attribute("data-_x"));
		assert!(is_custom_attribute("data-a1.b-c_d"));
	}

	#[test]
	fn rejects_everything_else() {
		assert!(!is_custom_attribute("dataFoo"));
		assert!(!is_custom_attribute("Data-x"));
		assert!(!is_custom_attribute("data-"));
		assert!(!is_custom_attribute("data-1x"));
		assert!(!is_custom_attribute("aria-Label"));
		assert!(!is_custom_attribute("database"));
		assert!(!is_custom_attribute("className"));
	}
}
