//! Turning a rule plus a value into a concrete write decision.

use std::sync::Arc;

use crate::element::HostElement;
use crate::error::PropertyError;
use crate::property::registry::PropertyRegistry;
use crate::property::rule::{BindingRule, Mutator, StorageMode, ValueShape};
use crate::value::Value;

/// The resolved decision of how a value must reach the host element.
///
/// `force` on a property write defeats any "skip redundant write"
/// optimization downstream; the write must happen even when the new value
/// equals the element's current one.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOp {
	RemoveAttribute {
		name: Box<str>,
	},
	ClearProperty {
		name: Box<str>,
	},
	SetProperty {
		name: Box<str>,
		value: Value,
		force: bool,
	},
	SetAttribute {
		name: Box<str>,
		text: String,
	},
	SetAttributeNs {
		namespace: Arc<str>,
		name: Box<str>,
		text: String,
	},
	/// Custom mutator registered for the property; invoke it instead of a
	/// generic property/attribute write.
	Custom(Mutator),
}

/// Plans the write of `value` to the property `name` under `rule`.
///
/// Pure: no host mutation happens here. Only the numeric shapes can fail,
/// with [`PropertyError::InvalidCoercion`].
pub fn plan_write(
	name: &str,
	rule: &BindingRule,
	value: &Value,
) -> Result<WriteOp, PropertyError> {
	if let Some(mutator) = rule.custom_mutator() {
		return Ok(WriteOp::Custom(mutator));
	}

	let op = match rule.shape() {
		ValueShape::Plain => match value {
			Value::Null => omit(name, rule),
			_ => write(name, rule, value.clone()),
		},
		ValueShape::Boolean => {
			if value.is_falsy() {
				omit(name, rule)
			} else {
				write_marker(name, rule)
			}
		}
		ValueShape::OverloadedBoolean => match value {
			Value::Bool(false) => omit(name, rule),
			Value::Bool(true) => write_marker(name, rule),
			_ => write(name, rule, value.clone()),
		},
		ValueShape::Numeric | ValueShape::PositiveNumeric => {
			let n = value.as_number().ok_or_else(|| PropertyError::InvalidCoercion {
				name: name.to_owned(),
				got: value.type_name(),
			})?;
			if rule.shape() == ValueShape::PositiveNumeric && n <= 0.0 {
				omit(name, rule)
			} else {
				write(name, rule, Value::Float(n))
			}
		}
	};
	Ok(op)
}

/// The "absent" form for the rule's storage mode.
fn omit(name: &str, rule: &BindingRule) -> WriteOp {
	match rule.storage() {
		StorageMode::Property => WriteOp::ClearProperty {
			name: rule.property_name(name).into(),
		},
		StorageMode::Attribute | StorageMode::NamespacedAttribute => WriteOp::RemoveAttribute {
			name: rule.wire_name(name).into(),
		},
	}
}

/// The "present with no payload" form: `true` through a property slot, the
/// empty string through an attribute.
fn write_marker(name: &str, rule: &BindingRule) -> WriteOp {
	match rule.storage() {
		StorageMode::Property => WriteOp::SetProperty {
			name: rule.property_name(name).into(),
			value: Value::Bool(true),
			force: rule.has_side_effects(),
		},
		StorageMode::Attribute | StorageMode::NamespacedAttribute => {
			write(name, rule, Value::Str(String::new()))
		}
	}
}

fn write(name: &str, rule: &BindingRule, value: Value) -> WriteOp {
	match rule.storage() {
		StorageMode::Property => WriteOp::SetProperty {
			name: rule.property_name(name).into(),
			value,
			force: rule.has_side_effects(),
		},
		StorageMode::Attribute => WriteOp::SetAttribute {
			name: rule.wire_name(name).into(),
			text: value.to_attribute_string(),
		},
		StorageMode::NamespacedAttribute => {
			// Namespaced rules without a URI are rejected at injection time.
			let namespace: Arc<str> = rule
				.namespace_uri()
				.unwrap_or_default()
				.into();
			WriteOp::SetAttributeNs {
				namespace,
				name: rule.wire_name(name).into(),
				text: value.to_attribute_string(),
			}
		}
	}
}

/// Executes a planned write against a host element.
///
/// `force` is not interpreted here: this always writes. It exists for the
/// surrounding engine's redundant-write elision, which runs before a plan
/// is executed.
pub fn execute_write(element: &mut dyn HostElement, value: &Value, op: &WriteOp) {
	match op {
		WriteOp::RemoveAttribute { name } => element.remove_attribute(name),
		WriteOp::ClearProperty { name } => element.clear_property(name),
		WriteOp::SetProperty { name, value, .. } => element.set_property(name, value),
		WriteOp::SetAttribute { name, text } => element.set_attribute(name, text),
		WriteOp::SetAttributeNs {
			namespace,
			name,
			text,
		} => element.set_attribute_ns(namespace, name, text),
		WriteOp::Custom(mutator) => mutator(element, value),
	}
}

/// Resolves, plans, and executes one property write.
///
/// Unknown names and failed coercions degrade to a warning and a skipped
/// write rather than failing the surrounding render.
pub fn apply_property(
	element: &mut dyn HostElement,
	registry: &PropertyRegistry,
	name: &str,
	value: &Value,
) {
	let rule = match registry.resolve(name) {
		Ok(rule) => rule,
		Err(err) => {
			tracing::warn!(property = name, %err, "skipping write for unresolvable property");
			return;
		}
	};
	match plan_write(name, &rule, value) {
		Ok(op) => execute_write(element, value, &op),
		Err(err) => {
			tracing::warn!(property = name, %err, "skipping write after failed coercion");
		}
	}
}
