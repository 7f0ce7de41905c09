use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use rustc_hash::FxHashMap as HashMap;

use crate::error::{InjectError, PropertyError};
use crate::property::custom::is_custom_attribute;
use crate::property::rule::{BindingRule, StorageMode};

type RuleTable = HashMap<Box<str>, Arc<BindingRule>>;

/// Rule handed out for names matching the custom-attribute pattern: plain
/// attribute storage, no coercion. Shared so repeated resolves are free.
static CUSTOM_ATTRIBUTE_RULE: LazyLock<Arc<BindingRule>> =
	LazyLock::new(|| Arc::new(BindingRule::attribute()));

/// Mapping from logical property name to its effective [`BindingRule`].
///
/// Seeded with the generic-markup vocabulary; collaborator modules merge
/// further rule sets with [`PropertyRegistry::inject`] during setup. The
/// table is held behind an [`ArcSwap`], so injection builds a fresh table
/// and swaps it in whole: readers see either the old or the new rule set,
/// never a partial merge.
pub struct PropertyRegistry {
	table: ArcSwap<RuleTable>,
}

impl PropertyRegistry {
	/// Registry seeded with the built-in generic-markup rule set.
	pub fn new() -> Self {
		let registry = Self::empty();
		registry
			.inject(super::builtins::rule_set())
			.expect("built-in rule set is well-formed");
		registry
	}

	/// Registry with no rules at all. Custom attributes still resolve.
	pub fn empty() -> Self {
		Self {
			table: ArcSwap::from_pointee(RuleTable::default()),
		}
	}

	/// The effective rule for `name`.
	///
	/// Unregistered names matching the custom-attribute pattern resolve to
	/// a shared plain-attribute rule; anything else is
	/// [`PropertyError::Unknown`]. Callers typically treat that as a
	/// warn-and-skip, not a hard failure.
	pub fn resolve(&self, name: &str) -> Result<Arc<BindingRule>, PropertyError> {
		if let Some(rule) = self.table.load().get(name) {
			return Ok(rule.clone());
		}
		if is_custom_attribute(name) {
			return Ok(CUSTOM_ATTRIBUTE_RULE.clone());
		}
		Err(PropertyError::Unknown(name.to_owned()))
	}

	/// Merges a rule set into the live registry.
	///
	/// A name present in `rules` fully replaces any prior rule for that
	/// name; fields are never merged across old and new rules. Later calls
	/// win over earlier ones, nothing is ever deleted, and calling twice
	/// with the same fragment is a no-op the second time.
	///
	/// Every fragment is validated before any of them is merged, so a
	/// malformed rule set leaves the registry untouched.
	pub fn inject<I, N>(&self, rules: I) -> Result<(), InjectError>
	where
		I: IntoIterator<Item = (N, BindingRule)>,
		N: Into<Box<str>>,
	{
		let mut incoming: Vec<(Box<str>, Arc<BindingRule>)> = Vec::new();
		for (name, rule) in rules {
			let name = name.into();
			validate(&name, &rule)?;
			incoming.push((name, Arc::new(rule)));
		}
		if incoming.is_empty() {
			return Ok(());
		}

		loop {
			let cur = self.table.load_full();
			let mut next = (*cur).clone();
			for (name, rule) in &incoming {
				next.insert(name.clone(), rule.clone());
			}
			let prev = self.table.compare_and_swap(&cur, Arc::new(next));
			if Arc::ptr_eq(&prev, &cur) {
				return Ok(());
			}
		}
	}

	#[inline]
	pub fn contains(&self, name: &str) -> bool {
		self.table.load().contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.table.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.table.load().is_empty()
	}
}

impl Default for PropertyRegistry {
	fn default() -> Self {
		Self::new()
	}
}

fn validate(name: &str, rule: &BindingRule) -> Result<(), InjectError> {
	if rule.storage() == StorageMode::NamespacedAttribute && rule.namespace_uri().is_none() {
		return Err(InjectError::MissingNamespace(name.to_owned()));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::property::rule::ValueShape;

	#[test]
	fn resolve_is_stable_without_inject() {
		let registry = PropertyRegistry::new();
		let first = registry.resolve("checked").unwrap();
		let second = registry.resolve("checked").unwrap();
		assert_eq!(first, second);
		assert_eq!(first.storage(), StorageMode::Property);
		assert_eq!(first.shape(), ValueShape::Boolean);
	}

	#[test]
	fn inject_replaces_whole_rules() {
		let registry = PropertyRegistry::empty();
		registry
			.inject([("className", BindingRule::property())])
			.unwrap();
		registry
			.inject([("className", BindingRule::attribute().alias("class"))])
			.unwrap();

		let rule = registry.resolve("className").unwrap();
		assert_eq!(rule.storage(), StorageMode::Attribute);
		assert_eq!(rule.wire_name("className"), "class");
		// No bleed from the replaced rule.
		assert_eq!(rule.shape(), ValueShape::Plain);
		assert!(rule.custom_mutator().is_none());
	}

	#[test]
	fn inject_is_idempotent() {
		let registry = PropertyRegistry::new();
		let fragment = || [("seamless", BindingRule::attribute().boolean())];
		registry.inject(fragment()).unwrap();
		let once = registry.resolve("seamless").unwrap();
		let len = registry.len();
		registry.inject(fragment()).unwrap();
		assert_eq!(registry.resolve("seamless").unwrap(), once);
		assert_eq!(registry.len(), len);
	}

	#[test]
	fn custom_attributes_never_unknown() {
		let registry = PropertyRegistry::empty();
		let rule = registry.resolve("data-foo").unwrap();
		assert_eq!(rule.storage(), StorageMode::Attribute);
		assert_eq!(rule.shape(), ValueShape::Plain);
		assert!(registry.resolve("aria-label").is_ok());
	}

	#[test]
	fn unknown_names_fail_resolution() {
		let registry = PropertyRegistry::new();
		assert_eq!(
			registry.resolve("frobnicate"),
			Err(PropertyError::Unknown("frobnicate".into()))
		);
	}

	#[test]
	fn malformed_fragment_rejected_before_merge() {
		let registry = PropertyRegistry::empty();
		let err = registry
			.inject([
				("accept", BindingRule::property()),
				("xlinkHref", BindingRule::namespaced().alias("href")),
			])
			.unwrap_err();
		assert_eq!(err, InjectError::MissingNamespace("xlinkHref".into()));
		// Nothing from the malformed set was merged.
		assert!(!registry.contains("accept"));
	}
}
