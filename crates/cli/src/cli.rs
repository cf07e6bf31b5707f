use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use notedraft::config::{DEFAULT_CACHE_PATH, DEFAULT_INPUT_PATH};
use notedraft::site::NOTE_BASE_URL;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "notedraft")]
#[command(about = "Draft a project status article on note.com from a YAML inventory")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v debug, -vv trace)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Output format for results printed on stdout
	#[arg(short = 'f', long, global = true, value_enum, default_value_t = OutputFormat::Text)]
	pub format: OutputFormat,

	#[command(flatten)]
	pub settings: Settings,

	/// Defaults to `run` when omitted
	#[command(subcommand)]
	pub command: Option<Commands>,
}

/// Options shared by every command, each with an environment fallback.
#[derive(Args, Debug, Clone)]
pub struct Settings {
	/// Account email used to log in
	#[arg(long, global = true, env = "NOTE_EMAIL", value_name = "EMAIL")]
	pub email: Option<String>,

	/// Account password used to log in
	#[arg(long, global = true, env = "NOTE_PASSWORD", hide_env_values = true, value_name = "PASSWORD")]
	pub password: Option<String>,

	/// Project inventory to render
	#[arg(long, global = true, env = "PROJECTS_YAML_PATH", default_value = DEFAULT_INPUT_PATH, value_name = "FILE")]
	pub input: PathBuf,

	/// Ledger of titles already drafted
	#[arg(long, global = true, env = "CACHE_FILE", default_value = DEFAULT_CACHE_PATH, value_name = "FILE")]
	pub cache: PathBuf,

	/// Base URL of the publishing site
	#[arg(long, global = true, env = "NOTE_SITE_URL", default_value = NOTE_BASE_URL, value_name = "URL")]
	pub site_url: String,

	/// Existing WebDriver server (chromedriver is spawned when unset)
	#[arg(long, global = true, env = "WEBDRIVER_URL", value_name = "URL")]
	pub webdriver_url: Option<String>,

	/// chromedriver executable to spawn
	#[arg(long, global = true, env = "CHROMEDRIVER", value_name = "PATH")]
	pub chromedriver: Option<PathBuf>,

	/// Run Chrome without a window (NOTE_HEADLESS accepts 1/0, yes/no, on/off, true/false)
	#[arg(long, global = true, env = "NOTE_HEADLESS", value_parser = clap::builder::BoolishValueParser::new())]
	pub headless: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Render the inventory and save it as a draft article
	Run(RunArgs),

	/// Print the rendered Markdown without touching the browser
	Render {
		/// Date stamped into the document (YYYY-MM-DD, defaults to today)
		#[arg(long, value_name = "DATE")]
		date: Option<NaiveDate>,

		/// Write to this file instead of stdout
		#[arg(short, long, value_name = "FILE")]
		output: Option<PathBuf>,
	},

	/// Inspect the drafted-title ledger
	Cache {
		#[command(subcommand)]
		action: CacheAction,
	},
}

#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
	/// Draft for this date instead of today (YYYY-MM-DD)
	#[arg(long, value_name = "DATE")]
	pub date: Option<NaiveDate>,

	/// Render and check the ledger, but do not open the browser
	#[arg(long)]
	pub dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub enum CacheAction {
	/// List every recorded title
	#[command(alias = "ls")]
	List,

	/// Report whether the draft for a date was already recorded
	Check {
		/// Date to check (YYYY-MM-DD, defaults to today)
		#[arg(long, value_name = "DATE")]
		date: Option<NaiveDate>,
	},
}
