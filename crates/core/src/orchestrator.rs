//! Run orchestration: inventory -> Markdown -> cache gate -> browser -> ledger.

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::browser::SessionLauncher;
use crate::cache::DraftCache;
use crate::config::DraftConfig;
use crate::controller::SessionController;
use crate::draft::{DraftDocument, draft_title};
use crate::error::Result;
use crate::inventory::ProjectInventory;
use crate::render::render;

/// How a run ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
	/// The draft was saved on the site and its title recorded.
	Drafted { title: String },
	/// The title was already in the ledger; no browser was started.
	AlreadyDrafted { title: String },
}

impl RunOutcome {
	pub fn title(&self) -> &str {
		match self {
			RunOutcome::Drafted { title } | RunOutcome::AlreadyDrafted { title } => title,
		}
	}
}

/// Everything a run computes before touching the browser.
#[derive(Debug, Clone)]
pub struct PreparedDraft {
	pub draft: DraftDocument,
	pub projects: usize,
	pub already_drafted: bool,
}

pub struct Orchestrator<L> {
	config: DraftConfig,
	cache: DraftCache,
	launcher: L,
}

impl<L: SessionLauncher> Orchestrator<L> {
	pub fn new(config: DraftConfig, launcher: L) -> Self {
		let cache = DraftCache::new(config.cache_path.clone());
		Self { config, cache, launcher }
	}

	pub fn cache(&self) -> &DraftCache {
		&self.cache
	}

	/// Loads the inventory, renders the draft for `date`, and checks the ledger.
	pub fn prepare(&self, date: NaiveDate) -> Result<PreparedDraft> {
		let inventory = ProjectInventory::load(&self.config.input_path)?;
		let body = render(&inventory, date);
		let title = draft_title(date);
		let already_drafted = self.cache.exists(&title)?;

		info!(
			target = "notedraft",
			%title,
			projects = inventory.project_count(),
			bytes = body.len(),
			"draft rendered"
		);

		Ok(PreparedDraft {
			draft: DraftDocument { title, body },
			projects: inventory.project_count(),
			already_drafted,
		})
	}

	/// Drafts today's article unless today's title is already recorded.
	pub async fn run_today(&self) -> Result<RunOutcome> {
		self.run(Local::now().date_naive()).await
	}

	/// Drafts the article for `date`.
	///
	/// The title is recorded only after the controller reports the draft
	/// saved; any failure leaves the ledger untouched.
	pub async fn run(&self, date: NaiveDate) -> Result<RunOutcome> {
		let prepared = self.prepare(date)?;
		let DraftDocument { title, .. } = &prepared.draft;

		if prepared.already_drafted {
			info!(target = "notedraft", %title, "already drafted; skipping");
			return Ok(RunOutcome::AlreadyDrafted { title: title.clone() });
		}

		let credentials = self.config.require_credentials()?;
		let controller = SessionController::new(&self.config.site, credentials, &self.config.timing);
		controller.run(&self.launcher, &prepared.draft).await?;

		self.cache.record(title)?;
		Ok(RunOutcome::Drafted { title: title.clone() })
	}
}
