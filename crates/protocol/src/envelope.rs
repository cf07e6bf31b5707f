//! Response envelope and error payloads.
//!
//! Every WebDriver response body is `{"value": ...}`. On failure the value is
//! an error object carrying a stable error code string.

use serde::{Deserialize, Serialize};

/// Error code for a locator that matched nothing.
pub const NO_SUCH_ELEMENT: &str = "no such element";
/// Error code for an element reference that no longer exists in the DOM.
pub const STALE_ELEMENT_REFERENCE: &str = "stale element reference";
/// Error code for an element that cannot receive the interaction.
pub const ELEMENT_NOT_INTERACTABLE: &str = "element not interactable";

/// `{"value": T}` wrapper used by every response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
	pub value: T,
}

/// Error object returned in `value` for failed commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorValue {
	pub error: String,
	#[serde(default)]
	pub message: String,
	#[serde(default)]
	pub stacktrace: String,
}

/// `value` payload of `GET /status`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusValue {
	pub ready: bool,
	#[serde(default)]
	pub message: String,
}
