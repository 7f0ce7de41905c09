//! Property binding registry

pub mod builtins;
pub mod custom;
pub mod registry;
pub mod rule;
pub mod svg;
pub mod write;

pub use custom::is_custom_attribute;
pub use registry::PropertyRegistry;
pub use rule::{BindingRule, Mutator, StorageMode, ValueShape};
pub use write::{WriteOp, apply_property, execute_write, plan_write};
