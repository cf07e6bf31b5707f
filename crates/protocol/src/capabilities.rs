//! New-session capability negotiation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /session`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSessionRequest {
	pub capabilities: CapabilitiesRequest,
}

/// Capability matching block. Only `alwaysMatch` is used by this crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitiesRequest {
	pub always_match: Capabilities,
}

/// Requested browser capabilities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub browser_name: Option<String>,
	#[serde(rename = "goog:chromeOptions", skip_serializing_if = "Option::is_none")]
	pub chrome_options: Option<ChromeOptions>,
}

/// Chrome vendor extension capability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChromeOptions {
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub args: Vec<String>,
}

impl NewSessionRequest {
	/// Builds a request for a Chrome session launched with `args`.
	pub fn chrome(args: Vec<String>) -> Self {
		Self {
			capabilities: CapabilitiesRequest {
				always_match: Capabilities {
					browser_name: Some("chrome".to_string()),
					chrome_options: Some(ChromeOptions { args }),
				},
			},
		}
	}
}

/// `value` payload of a successful `POST /session`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSessionResponse {
	pub session_id: String,
	#[serde(default)]
	pub capabilities: Value,
}
