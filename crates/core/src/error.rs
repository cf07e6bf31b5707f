use std::path::PathBuf;
use std::time::Duration;

use notedraft_runtime::RuntimeError;
use thiserror::Error;

use crate::state::DraftState;

pub type Result<T> = std::result::Result<T, DraftError>;

/// Fatal conditions of a drafting run.
///
/// A cached title is not an error; see [`crate::RunOutcome::AlreadyDrafted`].
#[derive(Debug, Error)]
pub enum DraftError {
	#[error("input file not found: {}", path.display())]
	InputNotFound { path: PathBuf },

	#[error("input file {} is malformed: {reason}", path.display())]
	InputMalformed { path: PathBuf, reason: String },

	#[error("step '{step}' failed: element not found: {locator} (waited {waited:?})")]
	ElementNotFound { step: DraftState, locator: String, waited: Duration },

	#[error("login failed: page title is still '{title}'; check the email and password")]
	AuthenticationFailed { title: String },

	#[error("browser error: {0}")]
	Browser(#[from] RuntimeError),

	#[error("draft cache {} is not usable: {source}", path.display())]
	CacheIo {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("configuration error: {0}")]
	Config(String),
}

impl DraftError {
	/// Process exit code for this failure.
	pub fn exit_code(&self) -> i32 {
		match self {
			DraftError::InputNotFound { .. } => 2,
			DraftError::InputMalformed { .. } => 3,
			DraftError::ElementNotFound { .. } => 4,
			DraftError::AuthenticationFailed { .. } => 5,
			DraftError::Browser(_) => 6,
			DraftError::CacheIo { .. } => 7,
			DraftError::Config(_) => 8,
		}
	}

	/// Returns true for failures raised before any browser work started.
	pub fn is_input_error(&self) -> bool {
		matches!(self, DraftError::InputNotFound { .. } | DraftError::InputMalformed { .. })
	}
}
