use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Object node storage: unique string keys, iterated in sorted order.
pub type Object = BTreeMap<String, Value>;

/// Dynamically-typed node of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
	/// Explicit `null`.
	#[default]
	Null,
	/// Boolean literal.
	Bool(bool),
	/// Number literal kept as its decimal lexeme.
	Number(Number),
	/// Ordinary text.
	String(Box<str>),
	/// String-kind node tagged as carrying a numeric lexeme.
	Lexeme(Number),
	/// Ordered sequence.
	Array(Vec<Value>),
	/// String-keyed mapping.
	Object(Object),
}

/// How numbers are represented when converting a parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberMode {
	/// Numbers become [`Value::Number`].
	#[default]
	Numeric,
	/// Numbers become [`Value::Lexeme`].
	Lexeme,
}

/// Validated decimal number lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number(Box<str>);

impl Number {
	/// Accept `text` if it follows the JSON number grammar.
	pub fn parse(text: &str) -> Option<Self> {
		is_number_lexeme(text).then(|| Self(text.into()))
	}

	/// Build from a finite float.
	pub fn from_f64(value: f64) -> Option<Self> {
		if !value.is_finite() {
			return None;
		}
		Self::parse(&format!("{value:?}"))
	}

	/// Original lexeme text.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Whether the lexeme has neither fraction nor exponent.
	pub fn is_integral(&self) -> bool {
		!self.0.contains(['.', 'e', 'E'])
	}

	/// Exact integer value for integral lexemes that fit in 128 bits.
	pub fn as_i128(&self) -> Option<i128> {
		if !self.is_integral() {
			return None;
		}
		self.0.parse().ok()
	}

	/// Nearest `f64`; magnitudes beyond `f64::MAX` become infinite.
	pub fn to_f64(&self) -> f64 {
		self.0.parse().unwrap_or(f64::NAN)
	}
}

impl fmt::Display for Number {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<i64> for Number {
	fn from(value: i64) -> Self {
		Self(value.to_string().into_boxed_str())
	}
}

impl From<u64> for Number {
	fn from(value: u64) -> Self {
		Self(value.to_string().into_boxed_str())
	}
}

/// Source text as parsed; `arbitrary_precision` keeps it verbatim.
impl From<&serde_json::Number> for Number {
	fn from(value: &serde_json::Number) -> Self {
		Self(value.to_string().into_boxed_str())
	}
}

/// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`
fn is_number_lexeme(text: &str) -> bool {
	let bytes = text.as_bytes();
	let mut idx = 0_usize;

	if bytes.get(idx) == Some(&b'-') {
		idx += 1;
	}

	match bytes.get(idx) {
		Some(b'0') => idx += 1,
		Some(b'1'..=b'9') => idx += count_digits(&bytes[idx..]),
		_ => return false,
	}

	if bytes.get(idx) == Some(&b'.') {
		idx += 1;
		let digits = count_digits(&bytes[idx..]);
		if digits == 0 {
			return false;
		}
		idx += digits;
	}

	if matches!(bytes.get(idx), Some(b'e' | b'E')) {
		idx += 1;
		if matches!(bytes.get(idx), Some(b'+' | b'-')) {
			idx += 1;
		}
		let digits = count_digits(&bytes[idx..]);
		if digits == 0 {
			return false;
		}
		idx += digits;
	}

	idx == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
	bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

impl Value {
	/// Convert a parsed document, choosing how numbers are represented.
	pub fn from_json(json: serde_json::Value, mode: NumberMode) -> Self {
		match json {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(value) => Self::Bool(value),
			serde_json::Value::Number(number) => match mode {
				NumberMode::Numeric => Self::Number(Number::from(&number)),
				NumberMode::Lexeme => Self::Lexeme(Number::from(&number)),
			},
			serde_json::Value::String(text) => Self::String(text.into_boxed_str()),
			serde_json::Value::Array(items) => Self::Array(items.into_iter().map(|item| Self::from_json(item, mode)).collect()),
			serde_json::Value::Object(map) => Self::Object(map.into_iter().map(|(key, item)| (key, Self::from_json(item, mode))).collect()),
		}
	}

	/// Kind name used in mismatch errors; lexemes report as strings.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Number(_) => "number",
			Self::String(_) | Self::Lexeme(_) => "string",
			Self::Array(_) => "array",
			Self::Object(_) => "object",
		}
	}

	/// Whether this node is `null`.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Boolean payload.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// Text payload of a string or lexeme node.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(text) => Some(text),
			Self::Lexeme(number) => Some(number.as_str()),
			_ => None,
		}
	}

	/// Number payload of a number or lexeme node.
	pub fn as_number(&self) -> Option<&Number> {
		match self {
			Self::Number(number) | Self::Lexeme(number) => Some(number),
			_ => None,
		}
	}

	/// Array payload.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Object payload.
	pub fn as_object(&self) -> Option<&Object> {
		match self {
			Self::Object(map) => Some(map),
			_ => None,
		}
	}
}

impl From<serde_json::Value> for Value {
	fn from(json: serde_json::Value) -> Self {
		Self::from_json(json, NumberMode::Numeric)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Number(Number::from(value))
	}
}

impl From<u64> for Value {
	fn from(value: u64) -> Self {
		Self::Number(Number::from(value))
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.into())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value.into_boxed_str())
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Self::Array(items)
	}
}

impl From<Object> for Value {
	fn from(map: Object) -> Self {
		Self::Object(map)
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Null => serializer.serialize_unit(),
			Self::Bool(value) => serializer.serialize_bool(*value),
			Self::Number(number) | Self::Lexeme(number) => serialize_number(number, serializer),
			Self::String(text) => serializer.serialize_str(text),
			Self::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Self::Object(map) => {
				let mut out = serializer.serialize_map(Some(map.len()))?;
				for (key, item) in map {
					out.serialize_entry(key, item)?;
				}
				out.end()
			}
		}
	}
}

/// Lexemes outside the 64-bit integer range serialize as `f64`.
fn serialize_number<S: Serializer>(number: &Number, serializer: S) -> Result<S::Ok, S::Error> {
	if number.is_integral() {
		if let Ok(value) = number.as_str().parse::<i64>() {
			return serializer.serialize_i64(value);
		}
		if let Ok(value) = number.as_str().parse::<u64>() {
			return serializer.serialize_u64(value);
		}
	}
	serializer.serialize_f64(number.to_f64())
}

#[cfg(test)]
mod tests {
	use super::{Number, NumberMode, Value};

	#[test]
	fn number_grammar_rejects_non_json_forms() {
		for ok in ["0", "-0", "12", "-3.25", "1e9", "6.02E+23", "1.5e-7"] {
			assert!(Number::parse(ok).is_some(), "{ok} should parse");
		}
		for bad in ["", "-", "01", "+1", "1.", ".5", "1e", "inf", "NaN", "0x10", " 1"] {
			assert!(Number::parse(bad).is_none(), "{bad:?} should be rejected");
		}
	}

	#[test]
	fn integral_lexemes_are_exact() {
		let big = Number::parse("9223372036854775808").expect("valid lexeme");
		assert_eq!(big.as_i128(), Some(9_223_372_036_854_775_808));
		assert_eq!(Number::parse("2.0").expect("valid").as_i128(), None);
	}

	#[test]
	fn from_f64_rejects_non_finite() {
		assert!(Number::from_f64(f64::NAN).is_none());
		assert!(Number::from_f64(f64::INFINITY).is_none());
		assert_eq!(Number::from_f64(2.5).expect("finite").as_str(), "2.5");
	}

	#[test]
	fn parsed_numbers_keep_their_source_text() {
		let json: serde_json::Value = serde_json::from_str(r#"[18446744073709551616, 1.50, 1e400]"#).expect("valid json");
		let value = Value::from(json);
		let texts: Vec<&str> = value.as_array().expect("array").iter().filter_map(Value::as_number).map(Number::as_str).collect();
		assert_eq!(texts, ["18446744073709551616", "1.50", "1e400"]);
	}

	#[test]
	fn lexeme_mode_tags_numbers() {
		let json = serde_json::json!({"n": 7, "s": "7"});
		let value = Value::from_json(json, NumberMode::Lexeme);
		let map = value.as_object().expect("object");
		assert!(matches!(map["n"], Value::Lexeme(_)));
		assert!(matches!(map["s"], Value::String(_)));
		assert_eq!(map["n"].kind_name(), "string");
	}

	#[test]
	fn serializes_back_to_matching_json() {
		let json = serde_json::json!({"a": [1, -2, 3.5, null, true], "b": {"c": "d"}, "u": 18446744073709551615_u64});
		let value = Value::from(json.clone());
		assert_eq!(serde_json::to_value(&value).expect("serializes"), json);
	}
}
