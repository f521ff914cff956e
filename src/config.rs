//! Upstream endpoint descriptor and the environment lookups that feed it.
//!
//! [`ApiDescriptor`] names the two URLs the console talks to (the OAuth2 token endpoint and the
//! database API base) plus an optional request timeout. Production defaults point at Twitch and
//! IGDB; `GAMERS_CONSOLE_*` variables override them so the binary can be aimed at stub servers.
//! Lookups are injected as closures so callers and tests never have to mutate the process
//! environment.

/// Builder API for assembling descriptors.
pub mod builder;

pub use builder::*;

// self
use crate::{_prelude::*, error::ConfigError};

/// Twitch token endpoint used for the client-credentials exchange.
pub const DEFAULT_TOKEN_URL: &str = "https://id.twitch.tv/oauth2/token";
/// IGDB API base URL; endpoints are appended as a single path segment.
pub const DEFAULT_API_BASE_URL: &str = "https://api.igdb.com/v4";

/// Overrides the token endpoint.
pub const AUTH_URL_ENV: &str = "GAMERS_CONSOLE_AUTH_URL";
/// Overrides the API base URL.
pub const API_URL_ENV: &str = "GAMERS_CONSOLE_API_URL";
/// Request timeout in whole seconds; unset means the transport default.
pub const TIMEOUT_ENV: &str = "GAMERS_CONSOLE_TIMEOUT_SECS";

/// Endpoint set the console talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiEndpoints {
	/// OAuth2 token endpoint used for the client-credentials grant.
	pub token: Url,
	/// Database API base URL.
	pub api_base: Url,
}

/// Immutable descriptor consumed by the token provider and the query client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiDescriptor {
	/// Endpoint definitions.
	pub endpoints: ApiEndpoints,
	/// Per-request timeout applied by the shared HTTP client.
	pub timeout: Option<Duration>,
}
impl ApiDescriptor {
	/// Creates a new builder seeded with the production endpoints.
	pub fn builder() -> ApiDescriptorBuilder {
		ApiDescriptorBuilder::new()
	}

	/// Reads overrides from the process environment.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(env_lookup)
	}

	/// Reads overrides through `lookup`, falling back to the production defaults.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut builder = Self::builder();

		if let Some(raw) = read_var(&lookup, AUTH_URL_ENV) {
			builder = builder.token_endpoint(parse_url(AUTH_URL_ENV, &raw)?);
		}
		if let Some(raw) = read_var(&lookup, API_URL_ENV) {
			builder = builder.api_base(parse_url(API_URL_ENV, &raw)?);
		}
		if let Some(raw) = read_var(&lookup, TIMEOUT_ENV) {
			builder = builder.timeout(parse_timeout(&raw)?);
		}

		builder.build()
	}

	/// Returns `{api_base}/{endpoint}` with exactly one separating slash.
	///
	/// The endpoint is appended verbatim; callers parse the result so malformed input surfaces
	/// as a construction error instead of being silently normalized.
	pub fn endpoint_url(&self, endpoint: &str) -> String {
		format!("{}/{endpoint}", self.endpoints.api_base.as_str().trim_end_matches('/'))
	}
}

/// Reads a variable from the process environment.
pub fn env_lookup(name: &str) -> Option<String> {
	std::env::var(name).ok()
}

/// Reads `name` through `lookup`, treating empty values as unset.
pub(crate) fn read_var<F>(lookup: &F, name: &str) -> Option<String>
where
	F: Fn(&str) -> Option<String>,
{
	lookup(name).filter(|value| !value.is_empty())
}

fn parse_url(name: &'static str, raw: &str) -> Result<Url, ConfigError> {
	Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl { name, source })
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
	match raw.trim().parse::<u64>() {
		Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
		_ => Err(ConfigError::InvalidTimeout { name: TIMEOUT_ENV, value: raw.to_owned() }),
	}
}
