use std::fmt::{self, Write};

use crate::decode::Value;

/// Compact JSON text with sorted keys and numbers written as their lexeme.
impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Null => f.write_str("null"),
			Value::Bool(value) => write!(f, "{value}"),
			Value::Number(number) | Value::Lexeme(number) => f.write_str(number.as_str()),
			Value::String(text) => write_escaped(f, text),
			Value::Array(items) => {
				f.write_char('[')?;
				for (idx, item) in items.iter().enumerate() {
					if idx > 0 {
						f.write_char(',')?;
					}
					write!(f, "{item}")?;
				}
				f.write_char(']')
			}
			Value::Object(map) => {
				f.write_char('{')?;
				for (idx, (key, item)) in map.iter().enumerate() {
					if idx > 0 {
						f.write_char(',')?;
					}
					write_escaped(f, key)?;
					write!(f, ":{item}")?;
				}
				f.write_char('}')
			}
		}
	}
}

fn write_escaped(f: &mut fmt::Formatter<'_>, input: &str) -> fmt::Result {
	f.write_char('"')?;
	for ch in input.chars() {
		match ch {
			'"' => f.write_str("\\\"")?,
			'\\' => f.write_str("\\\\")?,
			'\n' => f.write_str("\\n")?,
			'\r' => f.write_str("\\r")?,
			'\t' => f.write_str("\\t")?,
			'\u{08}' => f.write_str("\\b")?,
			'\u{0c}' => f.write_str("\\f")?,
			c if u32::from(c) < 0x20 => write!(f, "\\u{:04x}", u32::from(c))?,
			c => f.write_char(c)?,
		}
	}
	f.write_char('"')
}

#[cfg(test)]
mod tests {
	use crate::decode::{Number, Value};

	#[test]
	fn matches_serde_json_compact_output() {
		let json = serde_json::json!({
			"z": [1, 2.5, -3, null],
			"a": {"nested": true, "text": "line\nbreak \"quoted\" \u{01}"},
		});
		let value = Value::from(json.clone());
		assert_eq!(value.to_string(), serde_json::to_string(&json).expect("serializes"));
	}

	#[test]
	fn lexemes_print_exactly() {
		let huge = "123456789012345678901234567890";
		let value = Value::Array(vec![
			Value::Number(Number::parse(huge).expect("valid")),
			Value::Lexeme(Number::parse("1.000").expect("valid")),
		]);
		assert_eq!(value.to_string(), format!("[{huge},1.000]"));
	}
}
