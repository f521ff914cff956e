// self
use crate::{
	_prelude::*,
	config::{ApiDescriptor, ApiEndpoints, DEFAULT_API_BASE_URL, DEFAULT_TOKEN_URL},
	error::ConfigError,
};

/// Builder for [`ApiDescriptor`] values.
#[derive(Debug, Default)]
pub struct ApiDescriptorBuilder {
	/// Token endpoint; defaults to [`DEFAULT_TOKEN_URL`].
	pub token_endpoint: Option<Url>,
	/// API base URL; defaults to [`DEFAULT_API_BASE_URL`].
	pub api_base: Option<Url>,
	/// Optional per-request timeout.
	pub timeout: Option<Duration>,
}
impl ApiDescriptorBuilder {
	/// Creates an empty builder; unset endpoints fall back to the production URLs.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the token endpoint.
	pub fn token_endpoint(mut self, url: Url) -> Self {
		self.token_endpoint = Some(url);

		self
	}

	/// Sets the API base URL.
	pub fn api_base(mut self, url: Url) -> Self {
		self.api_base = Some(url);

		self
	}

	/// Sets the per-request timeout.
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<ApiDescriptor, ConfigError> {
		let token = match self.token_endpoint {
			Some(url) => url,
			None => default_url("token endpoint", DEFAULT_TOKEN_URL)?,
		};
		let api_base = match self.api_base {
			Some(url) => url,
			None => default_url("API base URL", DEFAULT_API_BASE_URL)?,
		};
		let descriptor =
			ApiDescriptor { endpoints: ApiEndpoints { token, api_base }, timeout: self.timeout };

		descriptor.validate()?;

		Ok(descriptor)
	}
}

impl ApiDescriptor {
	fn validate(&self) -> Result<(), ConfigError> {
		validate_endpoint("token endpoint", &self.endpoints.token)?;
		validate_endpoint("API base URL", &self.endpoints.api_base)?;

		Ok(())
	}
}

fn default_url(name: &'static str, raw: &str) -> Result<Url, ConfigError> {
	Url::parse(raw).map_err(|source| ConfigError::InvalidUrl { name, source })
}

fn validate_endpoint(name: &'static str, url: &Url) -> Result<(), ConfigError> {
	match url.scheme() {
		"http" | "https" => Ok(()),
		_ => Err(ConfigError::UnsupportedScheme { name, url: url.to_string() }),
	}
}
