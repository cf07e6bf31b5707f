//! Browser-session seam.
//!
//! The drafting workflow only needs a handful of page operations. They are
//! expressed as the [`BrowserSession`] trait so the controller can run
//! against a real WebDriver browser or the scripted [`fake`] one.

pub mod fake;
mod webdriver;

use async_trait::async_trait;
use notedraft_protocol::Locator;

use crate::error::Result;

pub use webdriver::{WebDriverLauncher, WebDriverSession};

/// Opaque handle to an element located on the current page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementId(pub String);

/// Page operations used by the drafting workflow.
///
/// Methods take `&self` so lookups can be retried from polling closures;
/// implementations use interior mutability where they keep state.
#[async_trait]
pub trait BrowserSession: Send + Sync {
	async fn navigate(&self, url: &str) -> Result<()>;

	/// Finds the first element matching `locator`; `Ok(None)` when nothing matches.
	async fn find_element(&self, locator: &Locator) -> Result<Option<ElementId>>;

	async fn clear(&self, element: &ElementId) -> Result<()>;

	async fn send_keys(&self, element: &ElementId, text: &str) -> Result<()>;

	async fn click(&self, element: &ElementId) -> Result<()>;

	/// Current document title.
	async fn read_title(&self) -> Result<String>;

	/// Ends the session and closes the browser.
	async fn close(&self) -> Result<()>;
}

/// Acquires a fresh [`BrowserSession`] for one run.
#[async_trait]
pub trait SessionLauncher: Send + Sync {
	async fn launch(&self) -> Result<Box<dyn BrowserSession>>;
}
