use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
	#[error("invalid WebDriver URL '{url}': {source}")]
	InvalidUrl { url: String, source: url::ParseError },

	#[error("HTTP client setup failed: {0}")]
	Client(#[source] reqwest::Error),

	#[error("{command} request failed: {source}")]
	Http {
		command: String,
		#[source]
		source: reqwest::Error,
	},

	#[error("{command} returned unreadable body (HTTP {status}): {source}")]
	Decode {
		command: String,
		status: u16,
		#[source]
		source: serde_json::Error,
	},

	#[error("{command} failed: {error}: {message}")]
	WebDriver { command: String, error: String, message: String },

	#[error("driver executable '{0}' not found on PATH")]
	DriverNotFound(String),

	#[error("failed to spawn driver at {}: {source}", path.display())]
	DriverSpawn {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("driver at {url} did not become ready: {last_error}")]
	DriverNotReady { url: String, last_error: String },
}

impl RuntimeError {
	/// Returns the W3C error code when the server rejected a command.
	pub fn webdriver_code(&self) -> Option<&str> {
		match self {
			RuntimeError::WebDriver { error, .. } => Some(error.as_str()),
			_ => None,
		}
	}
}
