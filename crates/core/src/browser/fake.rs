//! Scripted in-memory browser for exercising the drafting workflow.
//!
//! A [`FakeSite`] describes which elements exist on the page, what clicking
//! them does to the page title, and which operations fail. Every session
//! launched from it shares one call log, so tests can assert on the exact
//! sequence of UI operations, how many sessions were launched, and how many
//! times they were closed.
//!
//! # Example
//!
//! ```ignore
//! let site = SiteProfile::note();
//! let fake = FakeSite::ready(&site);
//! let launcher = fake.launcher();
//! // ... run the controller with `launcher` ...
//! assert_eq!(fake.close_count(), 1);
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use notedraft_protocol::{ELEMENT_NOT_INTERACTABLE, Locator};
use notedraft_runtime::RuntimeError;
use parking_lot::Mutex;

use super::{BrowserSession, ElementId, SessionLauncher};
use crate::error::{DraftError, Result};
use crate::site::SiteProfile;

/// Title shown by the fake login page.
pub const LOGIN_PAGE_TITLE: &str = "ログイン｜note（ノート）";
/// Title shown once the fake login succeeds.
pub const HOME_PAGE_TITLE: &str = "note ――つくる、つながる、とどける。";

/// One operation observed by the fake browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeCall {
	Launch,
	Navigate(String),
	Find(String),
	Clear(String),
	SendKeys(String, String),
	Click(String),
	ReadTitle,
	Close,
}

#[derive(Debug, Default)]
struct FakePage {
	present: HashSet<String>,
	click_titles: HashMap<String, String>,
	failing_clicks: HashSet<String>,
	fail_launch: bool,
	title: String,
	calls: Vec<FakeCall>,
}

/// Shared script and call log for fake sessions.
#[derive(Debug, Clone, Default)]
pub struct FakeSite {
	page: Arc<Mutex<FakePage>>,
}

impl FakeSite {
	/// An empty page: no elements, blank title.
	pub fn new() -> Self {
		Self::default()
	}

	/// A page where every locator of `site` resolves and the login button
	/// leads away from the login page.
	pub fn ready(site: &SiteProfile) -> Self {
		Self::new()
			.with_title(LOGIN_PAGE_TITLE)
			.with_element(&site.email_field)
			.with_element(&site.password_field)
			.with_element(&site.login_button)
			.with_element(&site.post_menu)
			.with_element(&site.new_article_link)
			.with_element(&site.title_field)
			.with_element(&site.editor)
			.with_element(&site.save_draft_button)
			.on_click_title(&site.login_button, HOME_PAGE_TITLE)
	}

	pub fn with_title(self, title: &str) -> Self {
		self.page.lock().title = title.to_string();
		self
	}

	pub fn with_element(self, locator: &Locator) -> Self {
		self.page.lock().present.insert(key(locator));
		self
	}

	pub fn without_element(self, locator: &Locator) -> Self {
		self.page.lock().present.remove(&key(locator));
		self
	}

	/// Clicking `locator` replaces the page title with `title`.
	pub fn on_click_title(self, locator: &Locator, title: &str) -> Self {
		self.page.lock().click_titles.insert(key(locator), title.to_string());
		self
	}

	/// Clicking `locator` leaves the page title unchanged.
	pub fn without_click_effect(self, locator: &Locator) -> Self {
		self.page.lock().click_titles.remove(&key(locator));
		self
	}

	/// Clicking `locator` fails with a WebDriver `element not interactable` error.
	pub fn with_failing_click(self, locator: &Locator) -> Self {
		self.page.lock().failing_clicks.insert(key(locator));
		self
	}

	/// Launching a session fails as if the driver were missing.
	pub fn with_failing_launch(self) -> Self {
		self.page.lock().fail_launch = true;
		self
	}

	pub fn launcher(&self) -> FakeLauncher {
		FakeLauncher { site: self.clone() }
	}

	pub fn calls(&self) -> Vec<FakeCall> {
		self.page.lock().calls.clone()
	}

	pub fn launch_count(&self) -> usize {
		self.count(|call| matches!(call, FakeCall::Launch))
	}

	pub fn close_count(&self) -> usize {
		self.count(|call| matches!(call, FakeCall::Close))
	}

	/// Every text typed into the element matched by `locator`, concatenated.
	pub fn typed_into(&self, locator: &Locator) -> Option<String> {
		let target = key(locator);
		let page = self.page.lock();
		let typed: Vec<&str> = page
			.calls
			.iter()
			.filter_map(|call| match call {
				FakeCall::SendKeys(element, text) if *element == target => Some(text.as_str()),
				_ => None,
			})
			.collect();
		(!typed.is_empty()).then(|| typed.concat())
	}

	fn count(&self, predicate: impl Fn(&FakeCall) -> bool) -> usize {
		self.page.lock().calls.iter().filter(|call| predicate(call)).count()
	}

	fn record(&self, call: FakeCall) {
		self.page.lock().calls.push(call);
	}
}

fn key(locator: &Locator) -> String {
	locator.to_string()
}

/// [`SessionLauncher`] producing [`FakeBrowser`] sessions.
#[derive(Debug, Clone)]
pub struct FakeLauncher {
	site: FakeSite,
}

#[async_trait]
impl SessionLauncher for FakeLauncher {
	async fn launch(&self) -> Result<Box<dyn BrowserSession>> {
		if self.site.page.lock().fail_launch {
			return Err(DraftError::Browser(RuntimeError::DriverNotFound("chromedriver".to_string())));
		}
		self.site.record(FakeCall::Launch);
		Ok(Box::new(FakeBrowser { site: self.site.clone() }))
	}
}

#[derive(Debug)]
pub struct FakeBrowser {
	site: FakeSite,
}

#[async_trait]
impl BrowserSession for FakeBrowser {
	async fn navigate(&self, url: &str) -> Result<()> {
		self.site.record(FakeCall::Navigate(url.to_string()));
		Ok(())
	}

	async fn find_element(&self, locator: &Locator) -> Result<Option<ElementId>> {
		let element = key(locator);
		self.site.record(FakeCall::Find(element.clone()));
		let present = self.site.page.lock().present.contains(&element);
		Ok(present.then_some(ElementId(element)))
	}

	async fn clear(&self, element: &ElementId) -> Result<()> {
		self.site.record(FakeCall::Clear(element.0.clone()));
		Ok(())
	}

	async fn send_keys(&self, element: &ElementId, text: &str) -> Result<()> {
		self.site.record(FakeCall::SendKeys(element.0.clone(), text.to_string()));
		Ok(())
	}

	async fn click(&self, element: &ElementId) -> Result<()> {
		self.site.record(FakeCall::Click(element.0.clone()));
		let mut page = self.site.page.lock();
		if page.failing_clicks.contains(&element.0) {
			return Err(DraftError::Browser(RuntimeError::WebDriver {
				command: format!("POST /session/fake/element/{}/click", element.0),
				error: ELEMENT_NOT_INTERACTABLE.to_string(),
				message: "element is obscured".to_string(),
			}));
		}
		if let Some(title) = page.click_titles.get(&element.0).cloned() {
			page.title = title;
		}
		Ok(())
	}

	async fn read_title(&self) -> Result<String> {
		self.site.record(FakeCall::ReadTitle);
		Ok(self.site.page.lock().title.clone())
	}

	async fn close(&self) -> Result<()> {
		self.site.record(FakeCall::Close);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn click_effect_changes_title() {
		let site = SiteProfile::note();
		let fake = FakeSite::ready(&site);
		let session = fake.launcher().launch().await.unwrap();

		assert_eq!(session.read_title().await.unwrap(), LOGIN_PAGE_TITLE);
		let button = session.find_element(&site.login_button).await.unwrap().unwrap();
		session.click(&button).await.unwrap();
		assert_eq!(session.read_title().await.unwrap(), HOME_PAGE_TITLE);
	}

	#[tokio::test]
	async fn missing_element_is_none() {
		let site = SiteProfile::note();
		let fake = FakeSite::ready(&site).without_element(&site.editor);
		let session = fake.launcher().launch().await.unwrap();
		assert!(session.find_element(&site.editor).await.unwrap().is_none());
	}

	#[tokio::test]
	async fn counts_launches_and_closes() {
		let fake = FakeSite::new();
		let launcher = fake.launcher();
		let first = launcher.launch().await.unwrap();
		first.close().await.unwrap();
		let _second = launcher.launch().await.unwrap();
		assert_eq!(fake.launch_count(), 2);
		assert_eq!(fake.close_count(), 1);
	}
}
