//! JSON bodies exchanged with the token endpoint.

// self
use crate::{
	_prelude::*,
	auth::{Credentials, GrantType},
};

/// Body of the client-credentials exchange.
#[derive(Clone, Serialize)]
pub struct TokenRequest<'a> {
	/// OAuth2 client identifier.
	pub client_id: &'a str,
	/// OAuth2 client secret.
	pub client_secret: &'a str,
	/// Always [`GrantType::ClientCredentials`].
	pub grant_type: GrantType,
}
impl<'a> TokenRequest<'a> {
	/// Borrows the credentials into a client-credentials request.
	pub fn client_credentials(credentials: &'a Credentials) -> Self {
		Self {
			client_id: credentials.client_id.as_str(),
			client_secret: credentials.client_secret.secret().as_str(),
			grant_type: GrantType::ClientCredentials,
		}
	}
}
impl Debug for TokenRequest<'_> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenRequest")
			.field("client_id", &self.client_id)
			.field("client_secret", &"<redacted>")
			.field("grant_type", &self.grant_type)
			.finish()
	}
}

/// Token endpoint reply.
///
/// Any JSON object is accepted: a missing or `null` `access_token` yields an empty token and the
/// query still goes out with it. `expires_in` and `token_type` are kept for wire compatibility
/// and stay inert, so values of an unexpected type are dropped rather than rejected.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TokenResponse {
	/// Bearer token used for exactly one query.
	#[serde(default)]
	access_token: Option<String>,
	/// Lifetime in seconds as reported by the provider.
	#[serde(default, deserialize_with = "inert")]
	pub expires_in: Option<u64>,
	/// Token type as reported by the provider (usually `bearer`).
	#[serde(default, deserialize_with = "inert")]
	pub token_type: Option<String>,
}
impl TokenResponse {
	/// Parses a reply body, reporting the JSON path of any mismatch.
	pub fn from_slice(body: &[u8]) -> Result<Self, serde_path_to_error::Error<serde_json::Error>> {
		let mut de = serde_json::Deserializer::from_slice(body);

		serde_path_to_error::deserialize(&mut de)
	}

	/// Raw token text; empty when the provider sent none.
	pub fn access_token_str(&self) -> &str {
		self.access_token.as_deref().unwrap_or_default()
	}

	/// Consumes the reply into the bearer token for the query.
	pub fn into_access_token(self) -> AccessToken {
		AccessToken::new(self.access_token.unwrap_or_default())
	}
}

fn inert<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
	D: serde::Deserializer<'de>,
	T: serde::de::DeserializeOwned,
{
	let value = serde_json::Value::deserialize(deserializer)?;

	Ok(serde_json::from_value(value).ok())
}
