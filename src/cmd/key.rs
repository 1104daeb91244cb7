use jsondec::decode::derive_key;
use tracing::debug;

use crate::cmd::CliError;

#[derive(clap::Args)]
pub struct Args {
	/// Member identifiers such as `UserID` or `HTTPServer`.
	#[arg(required = true)]
	pub idents: Vec<String>,
}

/// Print one derived key per identifier.
pub fn run(args: Args) -> Result<(), CliError> {
	for ident in &args.idents {
		let key = derive_key(ident);
		debug!(ident = %ident, key = %key, "derived key");
		println!("{key}");
	}
	Ok(())
}
