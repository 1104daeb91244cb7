use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Boxed error returned by self-decoding hooks.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced while matching a value tree against typed targets.
#[derive(Debug, Error)]
pub enum DecodeError {
	/// Required member key was absent from the source object.
	#[error("cannot find field '{path}' in result")]
	MissingRequiredField {
		/// Fully-qualified dotted path of the member.
		path: String,
	},
	/// Source node kind cannot populate the target kind.
	#[error("field '{path}' is not {expected} in result (got {got})")]
	TypeMismatch {
		/// Fully-qualified dotted path of the slot.
		path: String,
		/// Description of what the target accepts.
		expected: &'static str,
		/// Kind name of the offending source node.
		got: &'static str,
	},
	/// Numeric value lies outside the target width.
	#[error("field '{path}' value exceeds the range of {width}")]
	RangeExceeded {
		/// Fully-qualified dotted path of the slot.
		path: String,
		/// Target width name, e.g. `int8`.
		width: &'static str,
	},
	/// Number-as-string source failed the target's numeric grammar.
	#[error("field '{path}' value {lexeme:?} is not a valid {target}")]
	InvalidNumericLexeme {
		/// Fully-qualified dotted path of the slot.
		path: String,
		/// Target kind name, e.g. `uint16`.
		target: &'static str,
		/// Offending lexeme text.
		lexeme: String,
	},
	/// Target declares a shape the decoder cannot populate.
	#[error("field '{path}' uses unsupported type '{shape}'")]
	UnsupportedTargetShape {
		/// Fully-qualified dotted path of the slot (empty for the root).
		path: String,
		/// Description of the offending shape.
		shape: String,
	},
	/// Target storage cannot be written.
	#[error("field '{path}' cannot be decoded, make sure the output value is able to be set")]
	NotSettable {
		/// Fully-qualified dotted path of the slot.
		path: String,
	},
	/// Fixed-length target is shorter than the source array.
	#[error("cannot copy all field '{path}' values: expected len is {capacity}, actual len is {actual}")]
	ArrayLengthExceeded {
		/// Fully-qualified dotted path of the slot.
		path: String,
		/// Target capacity.
		capacity: usize,
		/// Source array length.
		actual: usize,
	},
	/// Ad-hoc field lookup resolved to nothing.
	#[error("field '{path}' doesn't exist in result")]
	FieldNotFound {
		/// Dotted path that was requested.
		path: String,
	},
	/// Self-decoding hook rejected its canonical text.
	#[error("field '{path}' failed to decode itself: {source}")]
	SelfDecode {
		/// Fully-qualified dotted path of the slot.
		path: String,
		/// Hook-provided failure.
		#[source]
		source: HookError,
	},
	/// Nesting exceeded the configured ceiling.
	#[error("decode depth exceeded at '{path}' (max={max_depth})")]
	DepthExceeded {
		/// Path at which the ceiling was hit.
		path: String,
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Flat record had no entries.
	#[error("record is empty")]
	EmptyRecord,
}

impl DecodeError {
	/// Dotted path the error refers to, if any.
	pub fn path(&self) -> Option<&str> {
		match self {
			Self::MissingRequiredField { path }
			| Self::TypeMismatch { path, .. }
			| Self::RangeExceeded { path, .. }
			| Self::InvalidNumericLexeme { path, .. }
			| Self::UnsupportedTargetShape { path, .. }
			| Self::NotSettable { path }
			| Self::ArrayLengthExceeded { path, .. }
			| Self::FieldNotFound { path }
			| Self::SelfDecode { path, .. }
			| Self::DepthExceeded { path, .. } => Some(path),
			Self::EmptyRecord => None,
		}
	}
}
