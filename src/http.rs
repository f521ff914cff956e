//! Shared HTTP transport for the token exchange and the database query.
//!
//! Both steps run against one [`HttpClient`] so connection pooling, TLS setup, and the optional
//! timeout live in one place. Neither step inspects the status code before reading the body;
//! `observe_status` only reports it to the observability layer.

// std
use std::ops::Deref;
// self
use crate::{
	_prelude::*,
	config::ApiDescriptor,
	error::ConfigError,
	obs::{self, StepKind},
};

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[derive(Clone, Debug, Default)]
pub struct HttpClient(pub ReqwestClient);
impl HttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client honoring the descriptor's timeout.
	pub fn from_descriptor(descriptor: &ApiDescriptor) -> Result<Self, ConfigError> {
		let mut builder = ReqwestClient::builder().user_agent(USER_AGENT);

		if let Some(timeout) = descriptor.timeout {
			builder = builder.timeout(timeout);
		}

		Ok(Self(builder.build()?))
	}
}
impl AsRef<ReqwestClient> for HttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for HttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// Reports the status of a response whose body is about to be consumed regardless of it.
pub(crate) fn observe_status(kind: StepKind, response: &reqwest::Response) -> StatusCode {
	let status = response.status();

	obs::record_status(kind, status.as_u16());

	status
}
