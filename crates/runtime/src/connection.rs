//! HTTP transport for the WebDriver protocol.
//!
//! Every command is a single HTTP request against the driver's base URL.
//! Responses are unwrapped from the `{"value": ...}` envelope; non-2xx
//! responses are decoded into [`RuntimeError::WebDriver`] with the server's
//! error code preserved so callers can match on it.

use std::time::Duration;

use notedraft_protocol::{Envelope, ErrorValue, StatusValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::trace;
use url::Url;

use crate::error::{Result, RuntimeError};

/// Per-request timeout. Navigation commands block until the page loads.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection to a WebDriver server.
#[derive(Debug, Clone)]
pub struct Connection {
	http: reqwest::Client,
	base: Url,
}

impl Connection {
	/// Creates a connection to the server at `base_url`.
	///
	/// A trailing slash is appended when missing so that grid-style base
	/// paths (`http://host:4444/wd/hub`) keep their last segment when
	/// command paths are joined.
	pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
		let normalized = if base_url.ends_with('/') {
			base_url.to_string()
		} else {
			format!("{base_url}/")
		};
		let base = Url::parse(&normalized).map_err(|source| RuntimeError::InvalidUrl {
			url: base_url.to_string(),
			source,
		})?;
		let http = reqwest::Client::builder().timeout(timeout).build().map_err(RuntimeError::Client)?;

		Ok(Self { http, base })
	}

	pub fn base_url(&self) -> &Url {
		&self.base
	}

	/// Queries `GET /status`.
	pub async fn status(&self) -> Result<StatusValue> {
		self.get("status").await
	}

	pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
		self.execute(Method::GET, path, None).await
	}

	pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
		let body = serde_json::to_value(body).map_err(|source| RuntimeError::Decode {
			command: format!("POST /{path}"),
			status: 0,
			source,
		})?;
		self.execute(Method::POST, path, Some(body)).await
	}

	pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
		self.execute(Method::DELETE, path, None).await
	}

	async fn execute<T: DeserializeOwned>(&self, method: Method, path: &str, body: Option<Value>) -> Result<T> {
		let command = format!("{method} /{path}");
		let url = self.base.join(path).map_err(|source| RuntimeError::InvalidUrl {
			url: format!("{}{}", self.base, path),
			source,
		})?;

		trace!(target = "notedraft.webdriver", %command, "sending");

		let mut request = self.http.request(method, url);
		if let Some(body) = body {
			request = request.json(&body);
		}

		let response = request.send().await.map_err(|source| RuntimeError::Http {
			command: command.clone(),
			source,
		})?;
		let status = response.status();
		let bytes = response.bytes().await.map_err(|source| RuntimeError::Http {
			command: command.clone(),
			source,
		})?;

		trace!(target = "notedraft.webdriver", %command, status = status.as_u16(), len = bytes.len(), "received");

		decode_response(&command, status, &bytes)
	}
}

fn decode_response<T: DeserializeOwned>(command: &str, status: StatusCode, bytes: &[u8]) -> Result<T> {
	if !status.is_success() {
		let envelope: Envelope<ErrorValue> = serde_json::from_slice(bytes).map_err(|source| RuntimeError::Decode {
			command: command.to_string(),
			status: status.as_u16(),
			source,
		})?;
		return Err(RuntimeError::WebDriver {
			command: command.to_string(),
			error: envelope.value.error,
			message: envelope.value.message,
		});
	}

	let envelope: Envelope<T> = serde_json::from_slice(bytes).map_err(|source| RuntimeError::Decode {
		command: command.to_string(),
		status: status.as_u16(),
		source,
	})?;
	Ok(envelope.value)
}
