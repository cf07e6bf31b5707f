//! [`BrowserSession`] over W3C WebDriver.

use async_trait::async_trait;
use notedraft_protocol::{ElementReference, Locator, NewSessionRequest};
use notedraft_runtime::connection::DEFAULT_REQUEST_TIMEOUT;
use notedraft_runtime::{Connection, DriverProcess, RemoteSession, free_port, resolve_driver_executable};
use tracing::{debug, info};

use super::{BrowserSession, ElementId, SessionLauncher};
use crate::config::DriverConfig;
use crate::error::{DraftError, Result};

/// Launches Chrome sessions through a WebDriver server.
///
/// With [`DriverConfig::webdriver_url`] set, sessions are opened on that
/// server; otherwise a local driver is spawned per session and stopped
/// when the session is dropped.
#[derive(Debug, Clone)]
pub struct WebDriverLauncher {
	config: DriverConfig,
}

impl WebDriverLauncher {
	pub fn new(config: DriverConfig) -> Self {
		Self { config }
	}
}

#[async_trait]
impl SessionLauncher for WebDriverLauncher {
	async fn launch(&self) -> Result<Box<dyn BrowserSession>> {
		let (url, driver) = match &self.config.webdriver_url {
			Some(url) => (url.clone(), None),
			None => {
				let executable = resolve_driver_executable(self.config.executable.as_deref())?;
				let port = free_port().map_err(|e| DraftError::Config(format!("no free port for the driver: {e}")))?;
				let driver = DriverProcess::spawn(&executable, port).await?;
				(driver.url(), Some(driver))
			}
		};

		let connection = Connection::new(&url, DEFAULT_REQUEST_TIMEOUT)?;
		let remote = RemoteSession::start(connection, &NewSessionRequest::chrome(self.config.chrome_args())).await?;
		info!(target = "notedraft", %url, session = %remote.id(), headless = self.config.headless, "browser started");

		Ok(Box::new(WebDriverSession { remote, _driver: driver }))
	}
}

/// A Chrome session, plus the driver process when this crate spawned it.
#[derive(Debug)]
pub struct WebDriverSession {
	remote: RemoteSession,
	_driver: Option<DriverProcess>,
}

fn reference(element: &ElementId) -> ElementReference {
	ElementReference { id: element.0.clone() }
}

#[async_trait]
impl BrowserSession for WebDriverSession {
	async fn navigate(&self, url: &str) -> Result<()> {
		debug!(target = "notedraft.webdriver", %url, "navigate");
		Ok(self.remote.navigate(url).await?)
	}

	async fn find_element(&self, locator: &Locator) -> Result<Option<ElementId>> {
		let found = self.remote.find_element(locator).await?;
		Ok(found.map(|element| ElementId(element.id)))
	}

	async fn clear(&self, element: &ElementId) -> Result<()> {
		Ok(self.remote.clear(&reference(element)).await?)
	}

	async fn send_keys(&self, element: &ElementId, text: &str) -> Result<()> {
		Ok(self.remote.send_keys(&reference(element), text).await?)
	}

	async fn click(&self, element: &ElementId) -> Result<()> {
		Ok(self.remote.click(&reference(element)).await?)
	}

	async fn read_title(&self) -> Result<String> {
		Ok(self.remote.title().await?)
	}

	async fn close(&self) -> Result<()> {
		Ok(self.remote.delete().await?)
	}
}
