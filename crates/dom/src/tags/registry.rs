use std::sync::Arc;

use arc_swap::ArcSwap;
use rustc_hash::FxHashMap as HashMap;

use crate::tags::factory::TagFactory;

type FactoryTable = HashMap<Box<str>, TagFactory>;

/// Mapping from tag name to its cached [`TagFactory`].
///
/// Seeded with the full built-in vocabulary; collaborator modules merge
/// framework-specific factories (wrapped form controls and the like) with
/// [`TagRegistry::inject`]. Same copy-on-write discipline as the property
/// registry: append/override only, atomic table swap, no deletion for the
/// process lifetime.
pub struct TagRegistry {
	table: ArcSwap<FactoryTable>,
}

impl TagRegistry {
	/// Registry seeded with every built-in tag.
	pub fn new() -> Self {
		let registry = Self::empty();
		registry.inject(
			super::builtins::tag_set()
				.iter()
				.map(|&(tag, omit)| (tag, TagFactory::new(tag, omit))),
		);
		registry
	}

	pub fn empty() -> Self {
		Self {
			table: ArcSwap::from_pointee(FactoryTable::default()),
		}
	}

	/// The factory for `tag`, or `None` when the tag is unsupported.
	///
	/// Absence is not an error: unknown custom elements are a legitimate
	/// extension point and callers decide whether to pass them through.
	#[inline]
	pub fn get(&self, tag: &str) -> Option<TagFactory> {
		self.table.load().get(tag).cloned()
	}

	/// Merges factories into the live registry, last-write-wins.
	pub fn inject<I, N>(&self, factories: I)
	where
		I: IntoIterator<Item = (N, TagFactory)>,
		N: Into<Box<str>>,
	{
		let incoming: Vec<(Box<str>, TagFactory)> = factories
			.into_iter()
			.map(|(tag, factory)| (tag.into(), factory))
			.collect();
		if incoming.is_empty() {
			return;
		}

		loop {
			let cur = self.table.load_full();
			let mut next = (*cur).clone();
			for (tag, factory) in &incoming {
				next.insert(tag.clone(), factory.clone());
			}
			let prev = self.table.compare_and_swap(&cur, Arc::new(next));
			if Arc::ptr_eq(&prev, &cur) {
				return;
			}
		}
	}

	#[inline]
	pub fn contains(&self, tag: &str) -> bool {
		self.table.load().contains_key(tag)
	}

	pub fn len(&self) -> usize {
		self.table.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.table.load().is_empty()
	}
}

impl Default for TagRegistry {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn void_flags_from_the_builtin_vocabulary() {
		let registry = TagRegistry::new();
		assert!(registry.get("area").unwrap().omit_closing_tag());
		assert!(!registry.get("div").unwrap().omit_closing_tag());
	}

	#[test]
	fn absent_tags_are_not_an_error() {
		let registry = TagRegistry::new();
		assert_eq!(registry.get("my-widget"), None);
	}

	#[test]
	fn inject_overrides_and_extends() {
		let registry = TagRegistry::new();
		let before = registry.len();

		// A collaborator swaps in a wrapped form control and adds a
		// virtual tag.
		registry.inject([
			("form", TagFactory::new("form", false)),
			("x-upload", TagFactory::new("x-upload", false)),
		]);

		assert_eq!(registry.len(), before + 1);
		assert_eq!(registry.get("x-upload").unwrap().tag(), "x-upload");
		// Earlier entries are never deleted.
		assert!(registry.contains("form"));
		assert!(registry.contains("div"));
	}

	#[test]
	fn tag_case_is_preserved() {
		let registry = TagRegistry::new();
		assert!(registry.contains("altGlyph"));
		assert!(registry.contains("color-profile"));
		assert!(!registry.contains("altglyph"));
	}
}
