use anyhow::Result;
use notedraft::{DraftCache, draft_title};

use crate::cli::{CacheAction, Settings};
use crate::context::today;
use crate::output::{OutputFormat, Report, Status, print_report, print_titles};

pub fn execute(settings: &Settings, action: CacheAction, format: OutputFormat) -> Result<()> {
	let cache = DraftCache::new(settings.cache.clone());

	match action {
		CacheAction::List => print_titles(format, &cache.titles()?),
		CacheAction::Check { date } => {
			let title = draft_title(date.unwrap_or_else(today));
			let status = if cache.exists(&title)? { Status::Recorded } else { Status::NotRecorded };
			print_report(format, &Report::new(status, title))
		}
	}
}
