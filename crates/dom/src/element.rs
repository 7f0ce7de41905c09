//! The seam between write planning and the host's mutation machinery.

use std::sync::Arc;

use rustc_hash::FxHashMap as HashMap;

use crate::value::Value;

/// Named property values handed to a tag factory.
pub type Props = HashMap<Box<str>, Value>;

/// Minimal mutation surface of a host markup element.
///
/// The crate never performs platform calls itself; executing a planned
/// write goes through this trait so hosts (real DOM bindings, servers
/// rendering to text, test doubles) supply the machinery.
pub trait HostElement {
	fn set_property(&mut self, name: &str, value: &Value);
	/// Reset a property slot to its falsy default.
	fn clear_property(&mut self, name: &str);
	fn set_attribute(&mut self, name: &str, text: &str);
	fn set_attribute_ns(&mut self, namespace: &str, name: &str, text: &str);
	fn remove_attribute(&mut self, name: &str);
}

/// What a [`crate::tags::TagFactory`] produces: the tag plus its property
/// bag, consumed by the tree-construction engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDescriptor {
	pub tag: Arc<str>,
	pub props: Props,
}
