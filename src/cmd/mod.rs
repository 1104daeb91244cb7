/// Scalar coercion command.
pub mod coerce;
/// Path lookup command.
pub mod get;
/// Member key derivation command.
pub mod key;

mod error;
mod util;

pub use error::CliError;
