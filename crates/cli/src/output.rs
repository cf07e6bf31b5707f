//! Printing command results on stdout and failures on stderr.

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

/// Output format for command results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text
	#[default]
	Text,
	/// One JSON document per result
	Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
	Drafted,
	AlreadyDrafted,
	WouldDraft,
	Recorded,
	NotRecorded,
}

/// Result of a command that concerns one draft title.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
	pub status: Status,
	pub title: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub projects: Option<usize>,
}

impl Report {
	pub fn new(status: Status, title: impl Into<String>) -> Self {
		Self {
			status,
			title: title.into(),
			projects: None,
		}
	}

	pub fn with_projects(mut self, projects: usize) -> Self {
		self.projects = Some(projects);
		self
	}
}

pub fn print_report(format: OutputFormat, report: &Report) -> anyhow::Result<()> {
	match format {
		OutputFormat::Json => println!("{}", serde_json::to_string(report)?),
		OutputFormat::Text => println!("{}", report_line(report)),
	}
	Ok(())
}

pub fn print_titles(format: OutputFormat, titles: &[String]) -> anyhow::Result<()> {
	match format {
		OutputFormat::Json => println!("{}", serde_json::to_string(titles)?),
		OutputFormat::Text => {
			for title in titles {
				println!("{title}");
			}
		}
	}
	Ok(())
}

pub fn print_warning(message: &str) {
	eprintln!("{} {message}", "warning:".yellow().bold());
}

/// Prints a failure with its cause chain.
pub fn print_error(err: &anyhow::Error) {
	eprintln!("{} {err:#}", "error:".red().bold());
}

fn report_line(report: &Report) -> String {
	let title = report.title.bold();
	let projects = report.projects.map(|n| format!(" ({n} projects)")).unwrap_or_default();
	match report.status {
		Status::Drafted => format!("{} {title}{projects}", "drafted".green().bold()),
		Status::AlreadyDrafted => format!("{} {title}{projects}: already drafted", "skipped".yellow().bold()),
		Status::WouldDraft => format!("{} {title}{projects}", "would draft".cyan().bold()),
		Status::Recorded => format!("{} {title}", "recorded".green()),
		Status::NotRecorded => format!("{} {title}", "not recorded".dimmed()),
	}
}
