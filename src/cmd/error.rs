use jsondec::decode::DecodeError;
use thiserror::Error;

/// Failure of one CLI command.
#[derive(Debug, Error)]
pub enum CliError {
	#[error(transparent)]
	Decode(#[from] DecodeError),
	#[error("failed to read {path}: {source}")]
	Io {
		path: String,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid JSON in {path}: {source}")]
	Json {
		path: String,
		#[source]
		source: serde_json::Error,
	},
	#[error("path '{path}' not found")]
	PathNotFound { path: String },
}
