#![allow(missing_docs)]

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "jsondec", about = "Inspect and decode JSON value trees")]
struct Cli {
	/// Raise log verbosity (`-v` info, `-vv` debug). `RUST_LOG` takes precedence.
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Resolve a dotted path or explicit segments and print the node.
	Get(cmd::get::Args),
	/// Print the derived source key for each identifier.
	Key(cmd::key::Args),
	/// Decode one field into a scalar kind.
	Coerce(cmd::coerce::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> Result<(), cmd::CliError> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match cli.command {
		Commands::Get(args) => cmd::get::run(args),
		Commands::Key(args) => cmd::key::run(args),
		Commands::Coerce(args) => cmd::coerce::run(args),
	}
}

fn init_tracing(verbose: u8) {
	let default_level = match verbose {
		0 => "warn",
		1 => "info",
		_ => "debug",
	};
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}
