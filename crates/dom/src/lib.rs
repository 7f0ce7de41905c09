//! Binding layer between logical property names and host markup elements.
//!
//! Two registries make up the crate:
//!
//! - [`PropertyRegistry`] maps logical property names (`className`,
//!   `xlinkHref`, ...) to [`BindingRule`]s describing how a value is written
//!   through to the host element: property slot vs. attribute, coercion
//!   shape, wire-name aliasing, namespacing, custom mutators.
//! - [`TagRegistry`] maps tag names to [`TagFactory`] values that produce
//!   [`ElementDescriptor`]s for the surrounding tree-construction engine.
//!
//! Both registries are seeded with the full built-in vocabulary and extended
//! at setup time through `inject`, which merges last-write-wins and swaps
//! the underlying table atomically. Subtree reconciliation, event handling,
//! and the actual host mutation calls live elsewhere; this crate only
//! decides *how* a write must happen.

pub mod element;
pub mod error;
pub mod property;
pub mod tags;
pub mod value;

#[cfg(test)]
mod tests;

pub use element::{ElementDescriptor, HostElement, Props};
pub use error::{InjectError, PropertyError};
pub use property::{
	BindingRule, Mutator, PropertyRegistry, StorageMode, ValueShape, WriteOp, apply_property,
	execute_write, is_custom_attribute, plan_write,
};
pub use tags::{TagFactory, TagRegistry, create_factory};
pub use value::Value;
