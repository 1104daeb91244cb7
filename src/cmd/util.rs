use std::io::Read;
use std::path::Path;

use jsondec::decode::{NumberMode, Value};
use tracing::debug;

use crate::cmd::CliError;

/// Read a JSON document from `input`, or stdin for `-`.
pub(crate) fn read_document(input: &Path, lexeme_numbers: bool) -> Result<Value, CliError> {
	let label = input.display().to_string();
	let text = if input == Path::new("-") {
		let mut text = String::new();
		std::io::stdin()
			.read_to_string(&mut text)
			.map_err(|source| CliError::Io { path: label.clone(), source })?;
		text
	} else {
		std::fs::read_to_string(input).map_err(|source| CliError::Io { path: label.clone(), source })?
	};

	let json: serde_json::Value = serde_json::from_str(&text).map_err(|source| CliError::Json { path: label.clone(), source })?;
	debug!(input = %label, bytes = text.len(), lexeme_numbers, "parsed document");

	let mode = if lexeme_numbers { NumberMode::Lexeme } else { NumberMode::Numeric };
	Ok(Value::from_json(json, mode))
}
