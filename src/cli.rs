//! Command-line front end: argument parsing, logging setup, and exit-code mapping.
//!
//! The binary accepts exactly two positional arguments. Any other shape prints [`USAGE`] and
//! exits with [`BAD_USAGE_EXIT_CODE`] before the environment is even read. Every later failure
//! prints its `<context>: with error: <detail>` line on stderr and exits with
//! [`INTERNAL_ERROR_EXIT_CODE`].

// std
use std::process::ExitCode;
// crates.io
use clap::Parser;
// self
use crate::{
	_prelude::*,
	auth::{Credentials, TokenProvider},
	config::ApiDescriptor,
	error::ConfigError,
	http::HttpClient,
	query::QueryClient,
};

/// Exit status for a wrong argument count.
pub const BAD_USAGE_EXIT_CODE: u8 = 1;
/// Exit status for configuration, authentication, and query failures.
pub const INTERNAL_ERROR_EXIT_CODE: u8 = 2;
/// One-line usage printed on bad invocations.
pub const USAGE: &str = "Usage: gamers-console \"<endpoint>\" \"<query>\"";
/// Log filter applied when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Positional arguments accepted by the binary.
///
/// Flags are switched off: any two strings form a valid invocation, including ones that start
/// with `-`, and every other argument count is bad usage.
#[derive(Clone, Debug, Parser)]
#[command(
	name = "gamers-console",
	about = "Forward one raw query to the IGDB API.",
	disable_help_flag = true,
	disable_version_flag = true
)]
pub struct Args {
	/// API endpoint to query, e.g. `games`.
	#[arg(allow_hyphen_values = true)]
	pub endpoint: String,
	/// Query in the API's own language, e.g. `fields name; limit 5;`.
	#[arg(allow_hyphen_values = true)]
	pub query: String,
}

/// Parses the process arguments, runs the workflow, and maps the outcome to an exit status.
pub fn main() -> ExitCode {
	let args = match Args::try_parse() {
		Ok(args) => args,
		Err(_) => {
			eprintln!("{USAGE}");

			return ExitCode::from(BAD_USAGE_EXIT_CODE);
		},
	};

	init_tracing();

	match run(&args) {
		Ok(result) => {
			println!("Query result: \n{result}");

			ExitCode::SUCCESS
		},
		Err(e) => {
			eprintln!("{e}");

			ExitCode::from(INTERNAL_ERROR_EXIT_CODE)
		},
	}
}

/// Loads credentials and endpoint overrides from the environment, then runs [`execute`] on a
/// current-thread runtime.
pub fn run(args: &Args) -> Result<String> {
	let credentials = Credentials::from_env().map_err(Error::Credentials)?;
	let descriptor = ApiDescriptor::from_env()?;
	let runtime = tokio::runtime::Builder::new_current_thread()
		.enable_all()
		.build()
		.map_err(ConfigError::from)?;

	runtime.block_on(execute(&descriptor, &credentials, &args.endpoint, &args.query))
}

/// Fetches a token, then forwards `query` to `endpoint` with it.
pub async fn execute(
	descriptor: &ApiDescriptor,
	credentials: &Credentials,
	endpoint: &str,
	query: &str,
) -> Result<String> {
	let http_client = HttpClient::from_descriptor(descriptor)?;
	let access_token =
		TokenProvider::new(http_client.clone(), descriptor).fetch_token(credentials).await?;
	let client =
		QueryClient::new(http_client, descriptor, credentials.client_id.clone(), access_token);

	Ok(client.query(endpoint, query).await?)
}

#[cfg(feature = "tracing")]
fn init_tracing() {
	// std
	use std::io::IsTerminal;
	// crates.io
	use tracing_subscriber::{EnvFilter, fmt};

	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
	let _ = fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(std::io::stderr().is_terminal())
		.with_target(false)
		.try_init();
}
#[cfg(not(feature = "tracing"))]
fn init_tracing() {}
