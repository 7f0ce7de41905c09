//! Tag component factory registry

pub mod builtins;
pub mod factory;
pub mod registry;

pub use factory::{TagFactory, create_factory};
pub use registry::TagRegistry;
