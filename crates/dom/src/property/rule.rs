use std::sync::Arc;

use crate::element::HostElement;
use crate::value::Value;

/// Custom write behavior for one property, bypassing storage mode and
/// coercion entirely when present.
pub type Mutator = fn(&mut dyn HostElement, &Value);

/// Whether a value reaches the host through its property slot or an
/// attribute-set call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
	Property,
	Attribute,
	NamespacedAttribute,
}

/// Coercion and write-skip behavior of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueShape {
	#[default]
	Plain,
	/// Falsy omits; truthy writes the empty-string/true form.
	Boolean,
	/// Exactly `false` omits, exactly `true` writes a bare marker, anything
	/// else writes itself literally.
	OverloadedBoolean,
	Numeric,
	/// Like [`ValueShape::Numeric`] but non-positive results are omitted.
	PositiveNumeric,
}

/// Metadata describing how one logical property name is written to a host
/// element.
///
/// Built with the constructor methods plus chained setters:
///
/// ```
/// use veneer_dom::BindingRule;
///
/// let rule = BindingRule::attribute().boolean().alias("allowfullscreen");
/// assert_eq!(rule.wire_name("allowFullScreen"), "allowfullscreen");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BindingRule {
	storage: StorageMode,
	shape: ValueShape,
	has_side_effects: bool,
	attribute_alias: Option<Arc<str>>,
	property_alias: Option<Arc<str>>,
	namespace: Option<Arc<str>>,
	mutator: Option<Mutator>,
}

impl BindingRule {
	fn with_storage(storage: StorageMode) -> Self {
		Self {
			storage,
			shape: ValueShape::default(),
			has_side_effects: false,
			attribute_alias: None,
			property_alias: None,
			namespace: None,
			mutator: None,
		}
	}

	/// Value is written through the element's property slot.
	pub fn property() -> Self {
		Self::with_storage(StorageMode::Property)
	}

	/// Value is written with an attribute-set call.
	pub fn attribute() -> Self {
		Self::with_storage(StorageMode::Attribute)
	}

	/// Value is written with a namespaced attribute-set call. The namespace
	/// URI is set separately with [`BindingRule::namespace`]; a namespaced
	/// rule without one is rejected at injection time.
	pub fn namespaced() -> Self {
		Self::with_storage(StorageMode::NamespacedAttribute)
	}

	pub fn boolean(mut self) -> Self {
		self.shape = ValueShape::Boolean;
		self
	}

	pub fn overloaded_boolean(mut self) -> Self {
		self.shape = ValueShape::OverloadedBoolean;
		self
	}

	pub fn numeric(mut self) -> Self {
		self.shape = ValueShape::Numeric;
		self
	}

	pub fn positive_numeric(mut self) -> Self {
		self.shape = ValueShape::PositiveNumeric;
		self
	}

	/// Write unconditionally, even when the new value equals the element's
	/// current value. For properties whose platform write has effects
	/// beyond value storage (`value` on form controls).
	pub fn side_effects(mut self) -> Self {
		self.has_side_effects = true;
		self
	}

	/// Wire attribute name when it differs from the logical name
	/// (`className` -> `class`).
	pub fn alias(mut self, wire: impl Into<Arc<str>>) -> Self {
		self.attribute_alias = Some(wire.into());
		self
	}

	/// Host property-slot name when it differs from the logical name
	/// (`autoComplete` -> `autocomplete`).
	pub fn property_alias(mut self, name: impl Into<Arc<str>>) -> Self {
		self.property_alias = Some(name.into());
		self
	}

	pub fn namespace(mut self, uri: impl Into<Arc<str>>) -> Self {
		self.namespace = Some(uri.into());
		self
	}

	pub fn mutator(mut self, f: Mutator) -> Self {
		self.mutator = Some(f);
		self
	}

	#[inline]
	pub fn storage(&self) -> StorageMode {
		self.storage
	}

	#[inline]
	pub fn shape(&self) -> ValueShape {
		self.shape
	}

	#[inline]
	pub fn has_side_effects(&self) -> bool {
		self.has_side_effects
	}

	#[inline]
	pub fn namespace_uri(&self) -> Option<&str> {
		self.namespace.as_deref()
	}

	#[inline]
	pub fn custom_mutator(&self) -> Option<Mutator> {
		self.mutator
	}

	/// The wire attribute name: the alias if present, else the logical name
	/// unchanged. Independent of storage mode.
	#[inline]
	pub fn wire_name<'a>(&'a self, logical: &'a str) -> &'a str {
		self.attribute_alias.as_deref().unwrap_or(logical)
	}

	/// The host property-slot name, analogous to [`BindingRule::wire_name`].
	#[inline]
	pub fn property_name<'a>(&'a self, logical: &'a str) -> &'a str {
		self.property_alias.as_deref().unwrap_or(logical)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wire_name_falls_back_to_logical() {
		let rule = BindingRule::attribute();
		assert_eq!(rule.wire_name("role"), "role");
		let aliased = BindingRule::attribute().alias("http-equiv");
		assert_eq!(aliased.wire_name("httpEquiv"), "http-equiv");
	}

	#[test]
	fn builder_composes_orthogonal_flags() {
		let rule = BindingRule::attribute().positive_numeric();
		assert_eq!(rule.storage(), StorageMode::Attribute);
		assert_eq!(rule.shape(), ValueShape::PositiveNumeric);
		assert!(!rule.has_side_effects());

		let value = BindingRule::property().side_effects();
		assert_eq!(value.storage(), StorageMode::Property);
		assert_eq!(value.shape(), ValueShape::Plain);
		assert!(value.has_side_effects());
	}
}
