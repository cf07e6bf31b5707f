//! Session controller: the login -> compose -> save state machine.
//!
//! A run walks [`DraftState`] strictly forward, one UI step per transition.
//! The first failing step aborts the run. Whatever happened, the browser
//! session is released exactly once before [`SessionController::run`]
//! returns, and the caller only learns of success when `Saved` was reached.

use notedraft_protocol::Locator;
use tracing::{debug, info, warn};

use crate::browser::{BrowserSession, ElementId, SessionLauncher};
use crate::config::{Credentials, Timing};
use crate::draft::DraftDocument;
use crate::error::{DraftError, Result};
use crate::site::SiteProfile;
use crate::state::DraftState;
use crate::wait::poll_until;

/// Drives one browser session through the drafting workflow.
#[derive(Debug, Clone, Copy)]
pub struct SessionController<'a> {
	site: &'a SiteProfile,
	credentials: &'a Credentials,
	timing: &'a Timing,
}

impl<'a> SessionController<'a> {
	pub fn new(site: &'a SiteProfile, credentials: &'a Credentials, timing: &'a Timing) -> Self {
		Self { site, credentials, timing }
	}

	/// Launches a session, submits `draft` as an unpublished article, and
	/// closes the session.
	///
	/// Returns `Ok(())` only when the "save draft" step completed.
	pub async fn run(&self, launcher: &dyn SessionLauncher, draft: &DraftDocument) -> Result<()> {
		let mut flow = DraftFlow {
			scope: SessionScope::new(launcher.launch().await?),
			site: self.site,
			credentials: self.credentials,
			timing: self.timing,
			state: DraftState::Start,
		};
		let result = flow.drive(draft).await;
		let reached = flow.state;
		let closed = flow.close().await;

		match &result {
			Ok(()) => info!(target = "notedraft", title = %draft.title, state = %closed, "draft saved"),
			Err(err) => warn!(target = "notedraft", reached = %reached, state = %closed, error = %err, "drafting aborted"),
		}
		result
	}
}

/// Owns the session for the duration of a run.
///
/// [`SessionScope::release`] consumes the scope, so the session is closed at
/// most once; dropping an unreleased scope is reported because the remote
/// browser would only go away with its driver process.
struct SessionScope {
	session: Box<dyn BrowserSession>,
	released: bool,
}

impl SessionScope {
	fn new(session: Box<dyn BrowserSession>) -> Self {
		Self { session, released: false }
	}

	fn session(&self) -> &dyn BrowserSession {
		self.session.as_ref()
	}

	async fn release(mut self) {
		self.released = true;
		match self.session.close().await {
			Ok(()) => debug!(target = "notedraft", "browser closed"),
			Err(err) => warn!(target = "notedraft", error = %err, "failed to close browser session"),
		}
	}
}

impl Drop for SessionScope {
	fn drop(&mut self) {
		if !self.released {
			warn!(target = "notedraft", "browser session dropped without being closed");
		}
	}
}

struct DraftFlow<'s> {
	scope: SessionScope,
	site: &'s SiteProfile,
	credentials: &'s Credentials,
	timing: &'s Timing,
	state: DraftState,
}

impl DraftFlow<'_> {
	fn session(&self) -> &dyn BrowserSession {
		self.scope.session()
	}

	async fn drive(&mut self, draft: &DraftDocument) -> Result<()> {
		let site = self.site;

		self.session().navigate(&site.login_url()).await?;
		self.advance(DraftState::LoggedOut);

		self.fill(&site.email_field, self.credentials.email()).await?;
		self.fill(&site.password_field, self.credentials.password()).await?;
		self.advance(DraftState::LoggingIn);

		self.click(&site.login_button).await?;
		self.confirm_logged_in().await?;
		self.advance(DraftState::LoggedIn);

		self.click(&site.post_menu).await?;
		self.advance(DraftState::MenuOpen);

		self.click(&site.new_article_link).await?;
		self.advance(DraftState::ComposerOpen);

		self.fill(&site.title_field, &draft.title).await?;
		self.advance(DraftState::TitleSet);

		let editor = self.locate(&site.editor).await?;
		self.session().click(&editor).await?;
		self.session().send_keys(&editor, &draft.body).await?;
		self.advance(DraftState::BodySet);

		self.click(&site.save_draft_button).await?;
		tokio::time::sleep(self.timing.save_settle).await;
		self.advance(DraftState::Saved);

		Ok(())
	}

	/// Releases the session and enters `Closed`, whatever state was reached.
	async fn close(mut self) -> DraftState {
		let from = self.state;
		self.state = DraftState::Closed;
		self.scope.release().await;
		debug!(target = "notedraft", from = %from, step = %self.state, "step complete");
		self.state
	}

	fn advance(&mut self, next: DraftState) {
		debug_assert_eq!(self.state.next(), Some(next), "draft states advance one step at a time");
		self.state = next;
		info!(target = "notedraft", step = %next, "step complete");
	}

	/// Step being attempted: the successor of the current state.
	fn pending_step(&self) -> DraftState {
		self.state.next().unwrap_or(DraftState::Closed)
	}

	async fn locate(&self, locator: &Locator) -> Result<ElementId> {
		let session = self.session();
		let found = poll_until(self.timing.element_timeout, self.timing.poll_interval, move || session.find_element(locator)).await?;

		match found {
			Some(element) => {
				debug!(target = "notedraft", %locator, "element found");
				Ok(element)
			}
			None => Err(DraftError::ElementNotFound {
				step: self.pending_step(),
				locator: locator.to_string(),
				waited: self.timing.element_timeout,
			}),
		}
	}

	async fn fill(&self, locator: &Locator, text: &str) -> Result<()> {
		let element = self.locate(locator).await?;
		self.session().clear(&element).await?;
		self.session().send_keys(&element, text).await
	}

	async fn click(&self, locator: &Locator) -> Result<()> {
		let element = self.locate(locator).await?;
		self.session().click(&element).await
	}

	/// Waits for the page title to leave the login page.
	async fn confirm_logged_in(&self) -> Result<()> {
		let session = self.session();
		let site = self.site;

		let left_login = poll_until(self.timing.login_timeout, self.timing.poll_interval, move || async move {
			let title = session.read_title().await?;
			Ok((!site.is_login_page(&title)).then_some(()))
		})
		.await?;

		if left_login.is_some() {
			return Ok(());
		}

		let title = session.read_title().await?;
		Err(DraftError::AuthenticationFailed { title })
	}
}
