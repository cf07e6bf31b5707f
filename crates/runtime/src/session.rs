//! Typed commands against one remote browser session.

use notedraft_protocol::{ElementReference, Locator, NO_SUCH_ELEMENT, NavigateRequest, NewSessionRequest, NewSessionResponse, SendKeysRequest};
use serde_json::{Value, json};
use tracing::debug;

use crate::connection::Connection;
use crate::error::{Result, RuntimeError};

/// A live WebDriver session.
///
/// Dropping this value does not end the remote session; call
/// [`RemoteSession::delete`].
#[derive(Debug)]
pub struct RemoteSession {
	connection: Connection,
	session_id: String,
}

impl RemoteSession {
	/// Opens a new browser session with the requested capabilities.
	pub async fn start(connection: Connection, request: &NewSessionRequest) -> Result<Self> {
		let response: NewSessionResponse = connection.post("session", request).await?;
		let browser = response.capabilities.get("browserName").and_then(Value::as_str).unwrap_or("unknown");
		debug!(target = "notedraft.webdriver", session = %response.session_id, %browser, "session created");
		Ok(Self {
			connection,
			session_id: response.session_id,
		})
	}

	pub fn id(&self) -> &str {
		&self.session_id
	}

	fn path(&self, suffix: &str) -> String {
		format!("session/{}/{}", self.session_id, suffix)
	}

	pub async fn navigate(&self, url: &str) -> Result<()> {
		let request = NavigateRequest { url: url.to_string() };
		self.connection.post(&self.path("url"), &request).await
	}

	/// Finds the first element matching `locator`.
	///
	/// Returns `Ok(None)` when the server reports `no such element`; every
	/// other failure is an error.
	pub async fn find_element(&self, locator: &Locator) -> Result<Option<ElementReference>> {
		match self.connection.post::<_, ElementReference>(&self.path("element"), locator).await {
			Ok(element) => Ok(Some(element)),
			Err(RuntimeError::WebDriver { error, .. }) if error == NO_SUCH_ELEMENT => Ok(None),
			Err(err) => Err(err),
		}
	}

	pub async fn clear(&self, element: &ElementReference) -> Result<()> {
		self.connection.post(&self.path(&format!("element/{}/clear", element.id)), &json!({})).await
	}

	pub async fn send_keys(&self, element: &ElementReference, text: &str) -> Result<()> {
		let request = SendKeysRequest { text: text.to_string() };
		self.connection.post(&self.path(&format!("element/{}/value", element.id)), &request).await
	}

	pub async fn click(&self, element: &ElementReference) -> Result<()> {
		self.connection.post(&self.path(&format!("element/{}/click", element.id)), &json!({})).await
	}

	pub async fn title(&self) -> Result<String> {
		self.connection.get(&self.path("title")).await
	}

	/// Ends the session; the driver closes every window it owns.
	pub async fn delete(&self) -> Result<()> {
		self.connection.delete(&format!("session/{}", self.session_id)).await
	}
}
