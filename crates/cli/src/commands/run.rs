use anyhow::Result;
use notedraft::{Orchestrator, RunOutcome, WebDriverLauncher};
use tracing::debug;

use crate::cli::{RunArgs, Settings};
use crate::context::{draft_config, today};
use crate::output::{OutputFormat, Report, Status, print_report};

pub async fn execute(settings: &Settings, args: RunArgs, format: OutputFormat) -> Result<()> {
	let config = draft_config(settings);
	debug!(target = "notedraft", ?config, "run configuration");

	let launcher = WebDriverLauncher::new(config.driver.clone());
	let orchestrator = Orchestrator::new(config, launcher);

	if args.dry_run {
		let prepared = orchestrator.prepare(args.date.unwrap_or_else(today))?;
		let status = if prepared.already_drafted { Status::AlreadyDrafted } else { Status::WouldDraft };
		return print_report(format, &Report::new(status, prepared.draft.title).with_projects(prepared.projects));
	}

	let outcome = match args.date {
		Some(date) => orchestrator.run(date).await?,
		None => orchestrator.run_today().await?,
	};
	let status = match outcome {
		RunOutcome::Drafted { .. } => Status::Drafted,
		RunOutcome::AlreadyDrafted { .. } => Status::AlreadyDrafted,
	};
	print_report(format, &Report::new(status, outcome.title()))
}
