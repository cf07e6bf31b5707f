//! Run configuration.
//!
//! Everything a run needs is carried in [`DraftConfig`]; nothing in the
//! library reads the environment. The CLI fills it from flags and
//! environment variables.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{DraftError, Result};
use crate::site::SiteProfile;

pub const DEFAULT_INPUT_PATH: &str = "projects.yaml";
pub const DEFAULT_CACHE_PATH: &str = "yaml_note_cache.txt";

/// Login credential pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	email: String,
	password: String,
}

impl Credentials {
	pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
		Self {
			email: email.into(),
			password: password.into(),
		}
	}

	pub fn email(&self) -> &str {
		&self.email
	}

	pub fn password(&self) -> &str {
		&self.password
	}
}

impl fmt::Debug for Credentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Credentials").field("email", &self.email).field("password", &"<redacted>").finish()
	}
}

/// Readiness timeouts for the drafting session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing {
	/// How long to poll for each element before giving up.
	pub element_timeout: Duration,
	/// Delay between readiness checks.
	pub poll_interval: Duration,
	/// How long the page title may keep showing the login page after submit.
	pub login_timeout: Duration,
	/// Fixed pause after "save draft"; saving has no observable completion signal.
	pub save_settle: Duration,
}

impl Timing {
	/// No waiting at all: every readiness check runs exactly once.
	pub fn immediate() -> Self {
		Self {
			element_timeout: Duration::ZERO,
			poll_interval: Duration::ZERO,
			login_timeout: Duration::ZERO,
			save_settle: Duration::ZERO,
		}
	}
}

impl Default for Timing {
	fn default() -> Self {
		Self {
			element_timeout: Duration::from_secs(10),
			poll_interval: Duration::from_millis(250),
			login_timeout: Duration::from_secs(10),
			save_settle: Duration::from_secs(3),
		}
	}
}

/// How to reach a WebDriver server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverConfig {
	/// Existing WebDriver endpoint. When unset a local driver is spawned.
	pub webdriver_url: Option<String>,
	/// Driver binary to spawn; `chromedriver` on `PATH` when unset.
	pub executable: Option<PathBuf>,
	pub headless: bool,
}

impl DriverConfig {
	/// Chrome command-line switches for the session.
	pub fn chrome_args(&self) -> Vec<String> {
		let mut args = vec!["--disable-gpu".to_string()];
		if self.headless {
			args.push("--headless=new".to_string());
		}
		args
	}
}

#[derive(Debug, Clone)]
pub struct DraftConfig {
	pub credentials: Option<Credentials>,
	pub input_path: PathBuf,
	pub cache_path: PathBuf,
	pub site: SiteProfile,
	pub timing: Timing,
	pub driver: DriverConfig,
}

impl DraftConfig {
	pub fn require_credentials(&self) -> Result<&Credentials> {
		let credentials = self
			.credentials
			.as_ref()
			.ok_or_else(|| DraftError::Config("credentials are required (set NOTE_EMAIL and NOTE_PASSWORD)".to_string()))?;
		if credentials.email().is_empty() || credentials.password().is_empty() {
			return Err(DraftError::Config("email and password must not be empty".to_string()));
		}
		Ok(credentials)
	}
}

impl Default for DraftConfig {
	fn default() -> Self {
		Self {
			credentials: None,
			input_path: PathBuf::from(DEFAULT_INPUT_PATH),
			cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
			site: SiteProfile::default(),
			timing: Timing::default(),
			driver: DriverConfig::default(),
		}
	}
}
