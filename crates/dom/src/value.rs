//! Dynamic property values.

/// A value a caller binds to a named property.
///
/// Property bags arrive untyped from the descriptor layer, so the binding
/// rules operate on this small dynamic type rather than on generics.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	Str(String),
}

impl Value {
	/// True for the values the boolean coercion treats as "absent":
	/// null, `false`, numeric zero (or NaN), and the empty string.
	pub fn is_falsy(&self) -> bool {
		match self {
			Value::Null => true,
			Value::Bool(b) => !b,
			Value::Int(n) => *n == 0,
			Value::Float(n) => *n == 0.0 || n.is_nan(),
			Value::Str(s) => s.is_empty(),
		}
	}

	/// Numeric coercion for `Numeric`/`PositiveNumeric` shapes.
	///
	/// Numbers pass through, strings parse as `f64`; booleans and null do
	/// not coerce. NaN counts as a failed coercion.
	pub fn as_number(&self) -> Option<f64> {
		let n = match self {
			Value::Int(n) => *n as f64,
			Value::Float(n) => *n,
			Value::Str(s) => s.trim().parse::<f64>().ok()?,
			Value::Null | Value::Bool(_) => return None,
		};
		(!n.is_nan()).then_some(n)
	}

	/// Canonical wire text for attribute writes.
	pub fn to_attribute_string(&self) -> String {
		match self {
			Value::Null => String::new(),
			Value::Bool(b) => b.to_string(),
			Value::Int(n) => n.to_string(),
			Value::Float(n) => format_number(*n),
			Value::Str(s) => s.clone(),
		}
	}

	pub fn type_name(&self) -> &'static str {
		match self {
			Value::Null => "null",
			Value::Bool(_) => "bool",
			Value::Int(_) => "int",
			Value::Float(_) => "float",
			Value::Str(_) => "string",
		}
	}
}

/// Integral floats print without a trailing `.0` so `cols: 20.0` and
/// `cols: 20` produce the same attribute text.
pub(crate) fn format_number(n: f64) -> String {
	if n.fract() == 0.0 && n.is_finite() && n.abs() < i64::MAX as f64 {
		(n as i64).to_string()
	} else {
		n.to_string()
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Value::Bool(b)
	}
}

impl From<i64> for Value {
	fn from(n: i64) -> Self {
		Value::Int(n)
	}
}

impl From<f64> for Value {
	fn from(n: f64) -> Self {
		Value::Float(n)
	}
}

impl From<&str> for Value {
	fn from(s: &str) -> Self {
		Value::Str(s.to_owned())
	}
}

impl From<String> for Value {
	fn from(s: String) -> Self {
		Value::Str(s)
	}
}
