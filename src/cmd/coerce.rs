use std::path::PathBuf;

use jsondec::decode::{DecodeError, Scalar, ScalarKind, coerce, get};
use tracing::info;

use crate::cmd::CliError;
use crate::cmd::util::read_document;

#[derive(clap::Args)]
pub struct Args {
	/// JSON document, or `-` for stdin.
	pub input: PathBuf,
	/// Dotted path of the field to convert.
	pub path: String,
	/// Target kind: bool, int8..int64, int, uint8..uint64, uint, float32, float64, string.
	#[arg(long, value_parser = parse_kind)]
	pub kind: ScalarKind,
	/// Keep numbers as string-kind lexemes.
	#[arg(long)]
	pub lexeme_numbers: bool,
	/// Print a JSON envelope instead of the bare scalar.
	#[arg(long)]
	pub json: bool,
}

/// Convert one field into a scalar kind and print it.
pub fn run(args: Args) -> Result<(), CliError> {
	let tree = read_document(&args.input, args.lexeme_numbers)?;
	let value = get(&tree, &args.path).ok_or_else(|| DecodeError::FieldNotFound { path: args.path.clone() })?;
	let scalar = coerce(value, args.kind, &args.path)?;
	info!(path = %args.path, kind = %args.kind, "coerced field");

	if args.json {
		let envelope = serde_json::json!({
			"path": args.path,
			"kind": args.kind.name(),
			"value": scalar_json(&scalar),
		});
		println!("{envelope}");
	} else {
		println!("{scalar}");
	}
	Ok(())
}

fn parse_kind(name: &str) -> Result<ScalarKind, String> {
	ScalarKind::from_name(name).ok_or_else(|| format!("unknown scalar kind '{name}'"))
}

fn scalar_json(scalar: &Scalar) -> serde_json::Value {
	match scalar {
		Scalar::Bool(value) => serde_json::Value::Bool(*value),
		Scalar::Int(value) => serde_json::Value::from(*value),
		Scalar::Uint(value) => serde_json::Value::from(*value),
		Scalar::Float(value) => serde_json::Number::from_f64(*value).map_or_else(|| serde_json::Value::String(value.to_string()), serde_json::Value::Number),
		Scalar::String(value) => serde_json::Value::String(value.clone()),
	}
}
