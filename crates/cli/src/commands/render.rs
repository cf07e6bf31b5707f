use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use notedraft::{ProjectInventory, render};
use tracing::info;

use crate::cli::Settings;
use crate::context::today;

pub fn execute(settings: &Settings, date: Option<NaiveDate>, output: Option<&Path>) -> Result<()> {
	let inventory = ProjectInventory::load(&settings.input)?;
	let markdown = render(&inventory, date.unwrap_or_else(today));

	match output {
		Some(path) => {
			fs::write(path, &markdown).with_context(|| format!("failed to write {}", path.display()))?;
			info!(target = "notedraft", path = %path.display(), bytes = markdown.len(), "markdown written");
		}
		None => println!("{markdown}"),
	}
	Ok(())
}
