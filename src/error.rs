//! Console-level error types shared by configuration, the token exchange, and the query client.
//!
//! Every top-level variant renders as `<context>: with error: <detail>`, which is exactly the
//! line the binary prints before exiting with the internal-error status.

// self
use crate::_prelude::*;

/// Console-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by the end-to-end workflow, one variant per step.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Client credentials could not be read from the environment.
	#[error("failed to retrieve client ID and secret: with error: {0}")]
	Credentials(#[source] ConfigError),
	/// Endpoint overrides, the HTTP client, or the runtime could not be set up.
	#[error("failed to load configuration: with error: {0}")]
	Config(#[from] ConfigError),
	/// The client-credentials exchange failed.
	#[error("failed to get auth token: with error: {0}")]
	Auth(#[from] AuthError),
	/// The database query failed.
	#[error("failed to query the internet games database: with error: {0}")]
	Query(#[from] QueryError),
}

/// Local configuration problems detected before any network call.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// A required environment variable is absent or empty.
	#[error("{name} must be initialized")]
	MissingEnv {
		/// Name of the missing variable.
		name: &'static str,
	},
	/// A configured URL does not parse.
	#[error("{name} is not a valid URL: {source}")]
	InvalidUrl {
		/// Setting that carried the URL.
		name: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// A configured URL uses a scheme other than `http` or `https`.
	#[error("{name} must use http or https: {url}")]
	UnsupportedScheme {
		/// Setting that carried the URL.
		name: &'static str,
		/// Offending URL.
		url: String,
	},
	/// The request timeout is not a positive number of seconds.
	#[error("{name} must be a positive number of seconds, got `{value}`")]
	InvalidTimeout {
		/// Setting that carried the timeout.
		name: &'static str,
		/// Raw value as supplied.
		value: String,
	},
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed: {source}")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// The async runtime driving the requests could not start.
	#[error("async runtime could not be started: {0}")]
	Runtime(#[from] std::io::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Failures raised while exchanging client credentials for an access token.
#[derive(Debug, ThisError)]
pub enum AuthError {
	/// The token request could not be assembled.
	#[error("failed to build the token request: {source}")]
	Request {
		/// Serialization or request-builder failure.
		#[source]
		source: BoxError,
	},
	/// Network failure (connection refused, timeout, DNS) or an unreadable reply.
	#[error("failed to reach the token endpoint: {source}")]
	Transport {
		/// Transport-specific network error.
		#[source]
		source: ReqwestError,
	},
	/// Token endpoint replied with a body that is not a token response.
	#[error("token endpoint returned malformed JSON: {source}")]
	MalformedResponse {
		/// Structured parsing failure, including the offending JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the reply.
		status: Option<u16>,
	},
}
impl AuthError {
	/// Wraps a request-assembly failure.
	pub fn request(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Request { source: Box::new(src) }
	}
}
impl From<ReqwestError> for AuthError {
	fn from(e: ReqwestError) -> Self {
		if e.is_builder() { Self::request(e) } else { Self::Transport { source: e } }
	}
}

/// Failures raised while forwarding a query to the database API.
#[derive(Debug, ThisError)]
pub enum QueryError {
	/// The request (URL, headers) could not be assembled.
	#[error("failed to create request: {source}")]
	Construction {
		/// URL parsing or request-builder failure.
		#[source]
		source: BoxError,
	},
	/// Network failure while sending the query.
	#[error("failed to do request: {source}")]
	Transport {
		/// Transport-specific network error.
		#[source]
		source: ReqwestError,
	},
	/// The response body could not be read.
	#[error("failed to parse response: {source}")]
	Body {
		/// Transport-specific read error.
		#[source]
		source: ReqwestError,
	},
}
impl QueryError {
	/// Wraps a request-assembly failure.
	pub fn construction(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Construction { source: Box::new(src) }
	}
}
impl From<ReqwestError> for QueryError {
	fn from(e: ReqwestError) -> Self {
		if e.is_builder() { Self::construction(e) } else { Self::Transport { source: e } }
	}
}
