// std
use std::net::TcpListener;
// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use gamers_console::{
	auth::{Credentials, TokenProvider},
	config::ApiDescriptor,
	error::AuthError,
	http::HttpClient,
	url::Url,
};

const CLIENT_ID: &str = "client-credentials";
const CLIENT_SECRET: &str = "secret-credentials";

fn build_provider(token_url: &str) -> TokenProvider {
	let descriptor = ApiDescriptor::builder()
		.token_endpoint(Url::parse(token_url).expect("Token endpoint should parse successfully."))
		.build()
		.expect("API descriptor should build successfully.");
	let http_client =
		HttpClient::from_descriptor(&descriptor).expect("HTTP client should build successfully.");

	TokenProvider::new(http_client, &descriptor)
}

fn closed_port_url(path: &str) -> String {
	let listener =
		TcpListener::bind("127.0.0.1:0").expect("Ephemeral port should be available for binding.");
	let port = listener.local_addr().expect("Bound listener should report its address.").port();

	drop(listener);

	format!("http://127.0.0.1:{port}{path}")
}

#[tokio::test]
async fn fetch_token_returns_access_token() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth2/token")
				.header("content-type", "application/json")
				.json_body(json!({
					"client_id": CLIENT_ID,
					"client_secret": CLIENT_SECRET,
					"grant_type": "client_credentials",
				}));
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"T\",\"expires_in\":3600,\"token_type\":\"bearer\"}",
			);
		})
		.await;
	let token = build_provider(&server.url("/oauth2/token"))
		.fetch_token(&Credentials::new(CLIENT_ID, CLIENT_SECRET))
		.await
		.expect("Token exchange should succeed.");

	assert_eq!(token.secret(), "T");

	mock.assert_async().await;
}

#[tokio::test]
async fn fetch_token_rejects_non_json_reply() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth2/token");
			then.status(200).header("content-type", "text/html").body("<html>maintenance</html>");
		})
		.await;
	let err = build_provider(&server.url("/oauth2/token"))
		.fetch_token(&Credentials::new(CLIENT_ID, CLIENT_SECRET))
		.await
		.expect_err("Non-JSON replies should surface to the caller.");

	assert!(matches!(err, AuthError::MalformedResponse { status: Some(200), .. }));

	mock.assert_async().await;
}

#[tokio::test]
async fn fetch_token_accepts_error_status_with_token_body() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth2/token");
			then.status(500)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"odd-but-valid\",\"expires_in\":60,\"token_type\":\"bearer\"}");
		})
		.await;
	let token = build_provider(&server.url("/oauth2/token"))
		.fetch_token(&Credentials::new(CLIENT_ID, CLIENT_SECRET))
		.await
		.expect("Status codes are not inspected before parsing.");

	assert_eq!(token.secret(), "odd-but-valid");

	mock.assert_async().await;
}

#[tokio::test]
async fn fetch_token_maps_connection_refused_to_transport() {
	let err = build_provider(&closed_port_url("/oauth2/token"))
		.fetch_token(&Credentials::new(CLIENT_ID, CLIENT_SECRET))
		.await
		.expect_err("Closed ports should fail the exchange.");

	assert!(matches!(err, AuthError::Transport { .. }));
}

#[tokio::test]
async fn fetch_token_honors_configured_timeout() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth2/token");
			then.status(200)
				.delay(std::time::Duration::from_secs(2))
				.body("{\"access_token\":\"late\"}");
		})
		.await;
	let descriptor = ApiDescriptor::builder()
		.token_endpoint(
			Url::parse(&server.url("/oauth2/token"))
				.expect("Token endpoint should parse successfully."),
		)
		.timeout(std::time::Duration::from_millis(200))
		.build()
		.expect("API descriptor should build successfully.");
	let http_client =
		HttpClient::from_descriptor(&descriptor).expect("HTTP client should build successfully.");
	let err = TokenProvider::new(http_client, &descriptor)
		.fetch_token(&Credentials::new(CLIENT_ID, CLIENT_SECRET))
		.await
		.expect_err("Slow token endpoints should time out.");

	match err {
		AuthError::Transport { source } => assert!(source.is_timeout()),
		other => panic!("Unexpected error variant: {other:?}."),
	}
}

#[tokio::test]
async fn fetch_token_accepts_json_without_token() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth2/token");
			then.status(400)
				.header("content-type", "application/json")
				.body("{\"status\":400,\"message\":\"invalid client\"}");
		})
		.await;
	let provider = build_provider(&server.url("/oauth2/token"));

	assert_eq!(provider.token_endpoint().path(), "/oauth2/token");

	let token = provider
		.fetch_token(&Credentials::new(CLIENT_ID, CLIENT_SECRET))
		.await
		.expect("Any JSON reply should be accepted.");

	assert!(token.secret().is_empty());

	mock.assert_async().await;
}

#[tokio::test]
async fn fetch_token_follows_redirects() {
	let server = MockServer::start_async().await;
	let moved = server.url("/oauth2/moved");
	let redirect_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth2/token");
			then.status(302).header("location", moved.as_str());
		})
		.await;
	let target_mock = server
		.mock_async(|when, then| {
			when.path("/oauth2/moved");
			then.status(200).body("{\"access_token\":\"relocated\"}");
		})
		.await;
	let token = build_provider(&server.url("/oauth2/token"))
		.fetch_token(&Credentials::new(CLIENT_ID, CLIENT_SECRET))
		.await
		.expect("Redirected token exchange should succeed.");

	assert_eq!(token.secret(), "relocated");

	redirect_mock.assert_async().await;
	target_mock.assert_async().await;
}
