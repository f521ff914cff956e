//! Client credentials sourced from the environment once per process.

// self
use crate::{
	_prelude::*,
	config::{self, env_lookup},
	error::ConfigError,
};

/// Environment variable carrying the OAuth2 client identifier.
pub const CLIENT_ID_ENV: &str = "CLIENT_ID";
/// Environment variable carrying the OAuth2 client secret.
pub const CLIENT_SECRET_ENV: &str = "CLIENT_SECRET";

/// OAuth2 client identifier and secret; the secret is redacted from `Debug` output.
#[derive(Clone, Debug)]
pub struct Credentials {
	/// Client identifier, also sent as the `Client-ID` header on queries.
	pub client_id: ClientId,
	/// Client secret, only ever sent to the token endpoint.
	pub client_secret: ClientSecret,
}
impl Credentials {
	/// Wraps an identifier/secret pair.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self {
			client_id: ClientId::new(client_id.into()),
			client_secret: ClientSecret::new(client_secret.into()),
		}
	}

	/// Reads [`CLIENT_ID_ENV`] and [`CLIENT_SECRET_ENV`] from the process environment.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(env_lookup)
	}

	/// Reads both variables through `lookup`; empty values count as missing.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let client_id = config::read_var(&lookup, CLIENT_ID_ENV)
			.ok_or(ConfigError::MissingEnv { name: CLIENT_ID_ENV })?;
		let client_secret = config::read_var(&lookup, CLIENT_SECRET_ENV)
			.ok_or(ConfigError::MissingEnv { name: CLIENT_SECRET_ENV })?;

		Ok(Self::new(client_id, client_secret))
	}
}
