//! Client-credentials token exchange.
//!
//! [`TokenProvider::fetch_token`] POSTs the JSON-encoded [`TokenRequest`] to the configured token
//! endpoint and returns the access token from the reply. The HTTP status is not checked: any
//! JSON body is accepted (one without `access_token` yields an empty token), and only bodies
//! that are not JSON, or carry a non-string token, are reported as
//! [`AuthError::MalformedResponse`].

// crates.io
use reqwest::header::CONTENT_TYPE;
// self
use crate::{
	_prelude::*,
	auth::{Credentials, TokenRequest, TokenResponse},
	config::ApiDescriptor,
	error::AuthError,
	http::{self, HttpClient},
	obs::{self, StepKind},
};

/// Exchanges client credentials for a short-lived bearer token.
#[derive(Clone, Debug)]
pub struct TokenProvider {
	http_client: HttpClient,
	token_endpoint: Url,
}
impl TokenProvider {
	/// Creates a provider targeting the descriptor's token endpoint.
	pub fn new(http_client: HttpClient, descriptor: &ApiDescriptor) -> Self {
		Self { http_client, token_endpoint: descriptor.endpoints.token.clone() }
	}

	/// Token endpoint this provider posts to.
	pub fn token_endpoint(&self) -> &Url {
		&self.token_endpoint
	}

	/// Performs the `client_credentials` grant and returns the access token.
	pub async fn fetch_token(&self, credentials: &Credentials) -> Result<AccessToken, AuthError> {
		obs::observe_step(StepKind::Authenticate, "fetch_token", self.exchange(credentials)).await
	}

	async fn exchange(&self, credentials: &Credentials) -> Result<AccessToken, AuthError> {
		let body = serde_json::to_vec(&TokenRequest::client_credentials(credentials))
			.map_err(AuthError::request)?;
		let response = self
			.http_client
			.post(self.token_endpoint.clone())
			.header(CONTENT_TYPE, "application/json")
			.body(body)
			.send()
			.await?;
		let status = http::observe_status(StepKind::Authenticate, &response);
		let bytes = response.bytes().await.map_err(|source| AuthError::Transport { source })?;
		let reply = TokenResponse::from_slice(&bytes).map_err(|source| {
			AuthError::MalformedResponse { source, status: Some(status.as_u16()) }
		})?;

		Ok(reply.into_access_token())
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use httpmock::prelude::*;
	// self
	use super::*;

	fn provider_for(server: &MockServer) -> TokenProvider {
		let descriptor = ApiDescriptor::builder()
			.token_endpoint(
				Url::parse(&server.url("/oauth2/token")).expect("Mock token URL should parse."),
			)
			.build()
			.expect("Descriptor should build.");

		TokenProvider::new(HttpClient::default(), &descriptor)
	}

	#[tokio::test]
	async fn ignores_inert_reply_fields() {
		let server = MockServer::start_async().await;
		let mock = server
			.mock_async(|when, then| {
				when.method(POST).path("/oauth2/token");
				then.status(200)
					.header("content-type", "application/json")
					.body("{\"access_token\":\"only-token\",\"scope\":[]}");
			})
			.await;
		let token = provider_for(&server)
			.fetch_token(&Credentials::new("abc", "s3cret"))
			.await
			.expect("Reply without lifetime should still yield a token.");

		assert_eq!(token.secret(), "only-token");

		mock.assert_async().await;
	}

	#[tokio::test]
	async fn malformed_reply_reports_status() {
		let server = MockServer::start_async().await;
		let _mock = server
			.mock_async(|when, then| {
				when.method(POST).path("/oauth2/token");
				then.status(502).body("Bad Gateway");
			})
			.await;
		let err = provider_for(&server)
			.fetch_token(&Credentials::new("abc", "s3cret"))
			.await
			.expect_err("Non-JSON reply should be rejected.");

		match err {
			AuthError::MalformedResponse { status, .. } => assert_eq!(status, Some(502)),
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}
}
