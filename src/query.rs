//! Authenticated pass-through queries against the database API.
//!
//! A [`QueryClient`] holds the client identifier and one access token. [`QueryClient::query`]
//! consumes the client, so each token backs exactly one request. The query body is forwarded
//! byte for byte and the reply body comes back as text without any status or schema checks;
//! an error page from the API is returned as data, just like a successful result.

// self
use crate::{
	_prelude::*,
	config::ApiDescriptor,
	error::QueryError,
	http::{self, HttpClient},
	obs::{self, StepKind},
};

/// Header carrying the raw client identifier.
pub const CLIENT_ID_HEADER: &str = "Client-ID";

/// One-shot client for the database API.
#[derive(Clone, Debug)]
pub struct QueryClient {
	http_client: HttpClient,
	descriptor: ApiDescriptor,
	client_id: ClientId,
	access_token: AccessToken,
}
impl QueryClient {
	/// Creates a client bound to an identifier and the token issued for it.
	pub fn new(
		http_client: HttpClient,
		descriptor: &ApiDescriptor,
		client_id: ClientId,
		access_token: AccessToken,
	) -> Self {
		Self { http_client, descriptor: descriptor.clone(), client_id, access_token }
	}

	/// Client identifier sent with the query.
	pub fn client_id(&self) -> &ClientId {
		&self.client_id
	}

	/// Sends `body` to `{api_base}/{endpoint}` and returns the reply body verbatim.
	pub async fn query(self, endpoint: &str, body: &str) -> Result<String, QueryError> {
		obs::observe_step(StepKind::Query, "query", self.send(endpoint, body)).await
	}

	async fn send(&self, endpoint: &str, body: &str) -> Result<String, QueryError> {
		let url = Url::parse(&self.descriptor.endpoint_url(endpoint))
			.map_err(QueryError::construction)?;
		let request = self
			.http_client
			.post(url)
			.header(CLIENT_ID_HEADER, self.client_id.as_str())
			.bearer_auth(self.access_token.secret())
			.body(body.to_owned())
			.build()?;
		let response = self.http_client.execute(request).await?;

		http::observe_status(StepKind::Query, &response);

		response.text().await.map_err(|source| QueryError::Body { source })
	}
}
