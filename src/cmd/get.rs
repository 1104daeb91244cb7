use std::path::PathBuf;

use jsondec::decode::{FieldPath, Value, get, get_field};
use tracing::info;

use crate::cmd::CliError;
use crate::cmd::util::read_document;

#[derive(clap::Args)]
pub struct Args {
	/// JSON document, or `-` for stdin.
	pub input: PathBuf,
	/// Dotted path; omitted or empty addresses the root.
	#[arg(conflicts_with = "segments")]
	pub path: Option<String>,
	/// Explicit path segment, repeatable; segments may contain dots.
	#[arg(long = "segment")]
	pub segments: Vec<String>,
	/// Keep numbers as string-kind lexemes.
	#[arg(long)]
	pub lexeme_numbers: bool,
	/// Print a JSON envelope instead of the bare node.
	#[arg(long)]
	pub json: bool,
}

/// Resolve a path and print the node's canonical text.
pub fn run(args: Args) -> Result<(), CliError> {
	let tree = read_document(&args.input, args.lexeme_numbers)?;

	let (label, found) = if args.segments.is_empty() {
		let dotted = args.path.unwrap_or_default();
		let found = get(&tree, &dotted);
		(dotted, found)
	} else {
		let found = get_field(&tree, &args.segments);
		(FieldPath::from_segments(args.segments).to_string(), found)
	};
	info!(path = %label, found = found.is_some(), "resolved path");

	if args.json {
		println!("{}", envelope(&label, found));
	}

	let Some(value) = found else {
		return Err(CliError::PathNotFound { path: label });
	};
	if !args.json {
		println!("{value}");
	}
	Ok(())
}

fn envelope(path: &str, found: Option<&Value>) -> serde_json::Value {
	match found {
		Some(value) => serde_json::json!({
			"path": path,
			"found": true,
			"kind": value.kind_name(),
			"value": value,
		}),
		None => serde_json::json!({
			"path": path,
			"found": false,
			"kind": null,
			"value": null,
		}),
	}
}
