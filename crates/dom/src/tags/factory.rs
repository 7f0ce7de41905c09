use std::sync::Arc;

use crate::element::{ElementDescriptor, Props};

/// Reusable factory for one host tag.
///
/// Produced once per tag, cached in the [`crate::TagRegistry`], immutable
/// after creation, and cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFactory {
	tag: Arc<str>,
	omit_closing_tag: bool,
}

impl TagFactory {
	pub fn new(tag: impl Into<Arc<str>>, omit_closing_tag: bool) -> Self {
		Self {
			tag: tag.into(),
			omit_closing_tag,
		}
	}

	/// Tag name, case preserved as authored.
	#[inline]
	pub fn tag(&self) -> &str {
		&self.tag
	}

	/// True for void elements (`br`, `img`, ...) that render without a
	/// closing tag.
	#[inline]
	pub fn omit_closing_tag(&self) -> bool {
		self.omit_closing_tag
	}

	/// Builds a descriptor for the tree-construction engine from a property
	/// bag. Pure; shares the cached tag name.
	pub fn create(&self, props: Props) -> ElementDescriptor {
		ElementDescriptor {
			tag: self.tag.clone(),
			props,
		}
	}
}

/// Convenience constructor mirroring [`TagFactory::new`]; shared state is
/// never touched.
pub fn create_factory(tag: impl Into<Arc<str>>, omit_closing_tag: bool) -> TagFactory {
	TagFactory::new(tag, omit_closing_tag)
}
