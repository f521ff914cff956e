//! Query the IGDB games database from the terminal: trade Twitch client credentials for a
//! bearer token, forward one raw query to an API endpoint, and hand back the body untouched.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod obs;
pub mod query;

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		time::Duration,
	};

	pub use oauth2::{AccessToken, ClientId, ClientSecret};
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError, StatusCode};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use oauth2;
pub use reqwest;
pub use url;
#[cfg(test)] use color_eyre as _;
