use std::fmt;

use crate::decode::{DecodeError, Number, Result, Value};

/// Integer width of a scalar target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
	/// 8 bits.
	W8,
	/// 16 bits.
	W16,
	/// 32 bits.
	W32,
	/// 64 bits.
	W64,
	/// Pointer width of the running platform.
	Platform,
}

impl IntWidth {
	/// Bit count, with [`IntWidth::Platform`] resolved for this target.
	pub fn bits(self) -> u32 {
		match self {
			Self::W8 => 8,
			Self::W16 => 16,
			Self::W32 => 32,
			Self::W64 => 64,
			Self::Platform => usize::BITS,
		}
	}

	fn signed_bounds(self) -> (i128, i128) {
		match self {
			Self::W8 => (i8::MIN.into(), i8::MAX.into()),
			Self::W16 => (i16::MIN.into(), i16::MAX.into()),
			Self::W32 => (i32::MIN.into(), i32::MAX.into()),
			Self::W64 => (i64::MIN.into(), i64::MAX.into()),
			Self::Platform => (isize::MIN as i128, isize::MAX as i128),
		}
	}

	fn unsigned_max(self) -> i128 {
		match self {
			Self::W8 => u8::MAX.into(),
			Self::W16 => u16::MAX.into(),
			Self::W32 => u32::MAX.into(),
			Self::W64 => u64::MAX.into(),
			Self::Platform => usize::MAX as i128,
		}
	}

	fn signed_name(self) -> &'static str {
		match self {
			Self::W8 => "int8",
			Self::W16 => "int16",
			Self::W32 => "int32",
			Self::W64 => "int64",
			Self::Platform => "int",
		}
	}

	fn unsigned_name(self) -> &'static str {
		match self {
			Self::W8 => "uint8",
			Self::W16 => "uint16",
			Self::W32 => "uint32",
			Self::W64 => "uint64",
			Self::Platform => "uint",
		}
	}
}

/// Scalar kinds the coercion engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
	/// `bool`.
	Bool,
	/// Signed integer of the given width.
	Int(IntWidth),
	/// Unsigned integer of the given width.
	Uint(IntWidth),
	/// `f32`.
	F32,
	/// `f64`.
	F64,
	/// Owned text.
	String,
}

impl ScalarKind {
	/// Kind name as used in error messages.
	pub fn name(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::Int(width) => width.signed_name(),
			Self::Uint(width) => width.unsigned_name(),
			Self::F32 => "float32",
			Self::F64 => "float64",
			Self::String => "string",
		}
	}

	/// Inverse of [`ScalarKind::name`].
	pub fn from_name(name: &str) -> Option<Self> {
		const WIDTHS: [IntWidth; 5] = [IntWidth::W8, IntWidth::W16, IntWidth::W32, IntWidth::W64, IntWidth::Platform];
		let kind = match name {
			"bool" => Self::Bool,
			"float32" => Self::F32,
			"float64" => Self::F64,
			"string" => Self::String,
			_ => {
				let signed = WIDTHS.into_iter().find(|width| width.signed_name() == name).map(Self::Int);
				return signed.or_else(|| WIDTHS.into_iter().find(|width| width.unsigned_name() == name).map(Self::Uint));
			}
		};
		Some(kind)
	}
}

impl fmt::Display for ScalarKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Coerced scalar, already validated for the requested kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
	/// Boolean result.
	Bool(bool),
	/// Signed result within the requested width.
	Int(i64),
	/// Unsigned result within the requested width.
	Uint(u64),
	/// Float result; `f32` targets are already rounded.
	Float(f64),
	/// Text result.
	String(String),
}

impl fmt::Display for Scalar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool(value) => write!(f, "{value}"),
			Self::Int(value) => write!(f, "{value}"),
			Self::Uint(value) => write!(f, "{value}"),
			Self::Float(value) => write!(f, "{value}"),
			Self::String(value) => f.write_str(value),
		}
	}
}

/// Convert `source` into `kind`, reporting failures against `path`.
pub fn coerce(source: &Value, kind: ScalarKind, path: &str) -> Result<Scalar> {
	Ok(match kind {
		ScalarKind::Bool => Scalar::Bool(coerce_bool(source, path)?),
		ScalarKind::Int(width) => Scalar::Int(coerce_int(source, width, path)?),
		ScalarKind::Uint(width) => Scalar::Uint(coerce_uint(source, width, path)?),
		ScalarKind::F32 => Scalar::Float(f64::from(coerce_float(source, path)? as f32)),
		ScalarKind::F64 => Scalar::Float(coerce_float(source, path)?),
		ScalarKind::String => Scalar::String(coerce_string(source, path)?),
	})
}

/// Only boolean sources are accepted.
pub fn coerce_bool(source: &Value, path: &str) -> Result<bool> {
	source.as_bool().ok_or_else(|| mismatch(path, "a bool", source))
}

/// Signed integer within `width`.
pub fn coerce_int(source: &Value, width: IntWidth, path: &str) -> Result<i64> {
	let (min, max) = width.signed_bounds();
	match source {
		Value::Number(number) => {
			let value = integer_in_range(number, min, max).ok_or_else(|| range(path, width.signed_name()))?;
			Ok(value as i64)
		}
		Value::Lexeme(number) => parse_signed_lexeme(number.as_str(), width).ok_or_else(|| DecodeError::InvalidNumericLexeme {
			path: path.to_owned(),
			target: lexeme_name(width, true),
			lexeme: number.as_str().to_owned(),
		}),
		Value::String(_) => Err(mismatch(path, "a number", source)),
		_ => Err(mismatch(path, "an integer", source)),
	}
}

/// Unsigned integer within `width`.
pub fn coerce_uint(source: &Value, width: IntWidth, path: &str) -> Result<u64> {
	match source {
		Value::Number(number) => {
			let value = integer_in_range(number, 0, width.unsigned_max()).ok_or_else(|| range(path, width.unsigned_name()))?;
			Ok(value as u64)
		}
		Value::Lexeme(number) => parse_unsigned_lexeme(number.as_str(), width).ok_or_else(|| DecodeError::InvalidNumericLexeme {
			path: path.to_owned(),
			target: lexeme_name(width, false),
			lexeme: number.as_str().to_owned(),
		}),
		Value::String(_) => Err(mismatch(path, "a number", source)),
		_ => Err(mismatch(path, "an integer", source)),
	}
}

/// Nearest `f64`; only magnitudes beyond `f64::MAX` are rejected.
pub fn coerce_float(source: &Value, path: &str) -> Result<f64> {
	match source {
		Value::Number(number) => Some(number.to_f64()).filter(|value| value.is_finite()).ok_or_else(|| range(path, "float64")),
		Value::Lexeme(number) => number
			.as_str()
			.parse::<f64>()
			.ok()
			.filter(|value| value.is_finite())
			.ok_or_else(|| DecodeError::InvalidNumericLexeme {
				path: path.to_owned(),
				target: "float64",
				lexeme: number.as_str().to_owned(),
			}),
		Value::String(_) => Err(mismatch(path, "a number", source)),
		_ => Err(mismatch(path, "a float", source)),
	}
}

/// String and lexeme sources are accepted verbatim.
pub fn coerce_string(source: &Value, path: &str) -> Result<String> {
	match source {
		Value::String(text) => Ok(text.to_string()),
		Value::Lexeme(number) => Ok(number.as_str().to_owned()),
		_ => Err(mismatch(path, "a string", source)),
	}
}

/// Integral lexemes are checked exactly. Fractional values are checked
/// before truncation, then truncated toward zero.
///
/// Lower bounds are `0` or `-2^(bits-1)`, both exact in `f64`. An upper bound
/// that rounds up to `2^k` in `f64` becomes exclusive.
fn integer_in_range(number: &Number, min: i128, max: i128) -> Option<i128> {
	if let Some(value) = number.as_i128() {
		return (min..=max).contains(&value).then_some(value);
	}

	let value = number.to_f64();
	let upper = max as f64;
	let below_max = if upper as i128 == max { value <= upper } else { value < upper };
	if !(value >= min as f64 && below_max) {
		return None;
	}
	Some(value as i128)
}

fn parse_signed_lexeme(text: &str, width: IntWidth) -> Option<i64> {
	match width {
		IntWidth::W8 => text.parse::<i8>().ok().map(i64::from),
		IntWidth::W16 => text.parse::<i16>().ok().map(i64::from),
		IntWidth::W32 => text.parse::<i32>().ok().map(i64::from),
		IntWidth::W64 => text.parse::<i64>().ok(),
		IntWidth::Platform => text.parse::<isize>().ok().map(|value| value as i64),
	}
}

fn parse_unsigned_lexeme(text: &str, width: IntWidth) -> Option<u64> {
	match width {
		IntWidth::W8 => text.parse::<u8>().ok().map(u64::from),
		IntWidth::W16 => text.parse::<u16>().ok().map(u64::from),
		IntWidth::W32 => text.parse::<u32>().ok().map(u64::from),
		IntWidth::W64 => text.parse::<u64>().ok(),
		IntWidth::Platform => text.parse::<usize>().ok().map(|value| value as u64),
	}
}

/// Platform widths report their resolved size in lexeme errors.
fn lexeme_name(width: IntWidth, signed: bool) -> &'static str {
	let resolved = match width {
		IntWidth::Platform if usize::BITS == 32 => IntWidth::W32,
		IntWidth::Platform => IntWidth::W64,
		other => other,
	};
	if signed { resolved.signed_name() } else { resolved.unsigned_name() }
}

fn mismatch(path: &str, expected: &'static str, source: &Value) -> DecodeError {
	DecodeError::TypeMismatch {
		path: path.to_owned(),
		expected,
		got: source.kind_name(),
	}
}

fn range(path: &str, width: &'static str) -> DecodeError {
	DecodeError::RangeExceeded {
		path: path.to_owned(),
		width,
	}
}
