use thiserror::Error;

/// Recoverable errors from resolving or planning a property write.
///
/// Callers typically log these and skip the write rather than abort the
/// surrounding render; [`crate::property::apply_property`] does exactly that.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
	/// Name is neither registered nor a custom (`data-`/`aria-`) attribute.
	#[error("unknown property: {0}")]
	Unknown(String),
	/// Value could not be coerced to the shape the rule requires.
	#[error("property '{name}' expects a numeric value, got {got}")]
	InvalidCoercion { name: String, got: &'static str },
}

/// Fatal registry misconfiguration, surfaced from `inject` at setup time.
///
/// These never occur at resolve time: malformed fragments are rejected
/// before any of them is merged into the live table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InjectError {
	/// A namespaced-attribute rule carries no namespace URI.
	#[error("namespaced rule for '{0}' is missing a namespace URI")]
	MissingNamespace(String),
}
