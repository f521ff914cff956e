//! OAuth 2.0 grant identifiers.

// self
use crate::_prelude::*;

/// OAuth 2.0 grant types the console can request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// Client Credentials grant for app-only tokens.
	#[default]
	ClientCredentials,
}
impl GrantType {
	/// Returns the RFC 6749 identifier for the grant type.
	pub fn as_str(self) -> &'static str {
		match self {
			GrantType::ClientCredentials => "client_credentials",
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn wire_name_matches_label() {
		let encoded = serde_json::to_string(&GrantType::ClientCredentials)
			.expect("Grant type should serialize.");

		assert_eq!(encoded, "\"client_credentials\"");
		assert_eq!(GrantType::default().to_string(), "client_credentials");
	}
}
