//! Integration tests for the `notedraft` binary.
//!
//! Every test works in its own temp directory and strips the environment
//! fallbacks so the host's NOTE_* settings cannot leak in. None of these
//! paths reach the browser.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

const INVENTORY: &str = "\
projects:
  - category: Infra
    items:
      - id: 1
        title: Proxy
        status: active
        next_steps:
          - write tests
          - ship
  - items:
      - id: 2
        title: Idle
";

const TITLE: &str = "2025-06-02 Project List (Draft)";

fn notedraft_binary() -> PathBuf {
	let mut path = std::env::current_exe().expect("current_exe should resolve");
	path.pop();
	path.pop();
	path.push("notedraft");
	path
}

struct Outcome {
	code: Option<i32>,
	stdout: String,
	stderr: String,
}

fn run_in(dir: &Path, args: &[&str]) -> Outcome {
	run_with_env(dir, args, &[])
}

fn run_with_env(dir: &Path, args: &[&str], vars: &[(&str, &str)]) -> Outcome {
	let mut command = Command::new(notedraft_binary());
	command
		.current_dir(dir)
		.args(args)
		.env_remove("NOTE_EMAIL")
		.env_remove("NOTE_PASSWORD")
		.env_remove("PROJECTS_YAML_PATH")
		.env_remove("CACHE_FILE")
		.env_remove("NOTE_SITE_URL")
		.env_remove("WEBDRIVER_URL")
		.env_remove("CHROMEDRIVER")
		.env_remove("NOTE_HEADLESS")
		.env_remove("RUST_LOG")
		.env("NO_COLOR", "1");
	for (key, value) in vars {
		command.env(key, value);
	}
	let output = command.output().expect("Failed to execute notedraft");

	Outcome {
		code: output.status.code(),
		stdout: String::from_utf8_lossy(&output.stdout).to_string(),
		stderr: String::from_utf8_lossy(&output.stderr).to_string(),
	}
}

fn workspace() -> TempDir {
	let tmp = TempDir::new().expect("temp dir should be created");
	fs::write(tmp.path().join("projects.yaml"), INVENTORY).expect("inventory should be written");
	tmp
}

fn parse_json(outcome: &Outcome) -> Value {
	serde_json::from_str(outcome.stdout.trim())
		.unwrap_or_else(|err| panic!("Expected JSON stdout: {err}\nstdout:\n{}\nstderr:\n{}", outcome.stdout, outcome.stderr))
}

#[test]
fn render_prints_markdown_document() {
	let tmp = workspace();

	let out = run_in(tmp.path(), &["render", "--date", "2025-06-02"]);

	assert_eq!(out.code, Some(0), "render failed: {}", out.stderr);
	assert!(out.stdout.starts_with("# Project List\n\n_Updated: 2025-06-02_\n\n"));
	assert!(out.stdout.contains("## Infra\n\n| ID | Title | Status | Next Steps |\n|----|-------|--------|------------|\n"));
	assert!(out.stdout.contains("| 1 | Proxy | active | - write tests<br>- ship |"));
	assert!(out.stdout.contains("## Unnamed Category"));
	assert!(out.stdout.contains("| 2 | Idle |  |  |"));
}

#[test]
fn numeric_headless_env_is_accepted_by_every_command() {
	let tmp = workspace();

	for value in ["1", "yes", "0", "off"] {
		let render = run_with_env(tmp.path(), &["render", "--date", "2025-06-02"], &[("NOTE_HEADLESS", value)]);
		assert_eq!(render.code, Some(0), "NOTE_HEADLESS={value} broke render: {}", render.stderr);

		let list = run_with_env(tmp.path(), &["cache", "list"], &[("NOTE_HEADLESS", value)]);
		assert_eq!(list.code, Some(0), "NOTE_HEADLESS={value} broke cache list: {}", list.stderr);
	}
}

#[test]
fn render_writes_output_file() {
	let tmp = workspace();
	let target = tmp.path().join("out.md");

	let out = run_in(tmp.path(), &["render", "--date", "2025-06-02", "--output", target.to_str().unwrap()]);

	assert_eq!(out.code, Some(0), "render failed: {}", out.stderr);
	assert!(out.stdout.is_empty());
	assert!(fs::read_to_string(&target).unwrap().contains("## Infra"));
}

#[test]
fn dry_run_needs_no_credentials_and_records_nothing() {
	let tmp = workspace();

	let out = run_in(tmp.path(), &["run", "--dry-run", "--date", "2025-06-02", "-f", "json"]);

	assert_eq!(out.code, Some(0), "dry run failed: {}", out.stderr);
	let json = parse_json(&out);
	assert_eq!(json["status"], "would_draft");
	assert_eq!(json["title"], TITLE);
	assert_eq!(json["projects"], 2);
	assert!(!tmp.path().join("yaml_note_cache.txt").exists());
}

#[test]
fn cached_title_skips_with_success() {
	let tmp = workspace();
	fs::write(tmp.path().join("yaml_note_cache.txt"), format!("{TITLE}\n")).unwrap();

	let out = run_in(tmp.path(), &["run", "--date", "2025-06-02"]);

	assert_eq!(out.code, Some(0), "skip should succeed: {}", out.stderr);
	assert!(out.stdout.contains("skipped"));
	assert!(out.stdout.contains(TITLE));
	assert_eq!(fs::read_to_string(tmp.path().join("yaml_note_cache.txt")).unwrap(), format!("{TITLE}\n"));
}

#[test]
fn missing_input_exits_with_code_2() {
	let tmp = TempDir::new().unwrap();

	let out = run_in(tmp.path(), &["run", "--date", "2025-06-02"]);

	assert_eq!(out.code, Some(2));
	assert!(out.stderr.contains("input file not found"), "stderr: {}", out.stderr);
}

#[test]
fn malformed_input_exits_with_code_3() {
	let tmp = TempDir::new().unwrap();
	fs::write(tmp.path().join("projects.yaml"), "projects: [unterminated\n").unwrap();

	let out = run_in(tmp.path(), &["render", "--date", "2025-06-02"]);

	assert_eq!(out.code, Some(3));
}

#[test]
fn missing_credentials_exit_with_code_8() {
	let tmp = workspace();

	let out = run_in(tmp.path(), &["run", "--date", "2025-06-02"]);

	assert_eq!(out.code, Some(8), "stderr: {}", out.stderr);
	assert!(out.stderr.contains("NOTE_EMAIL"));
}

#[test]
fn input_and_cache_paths_come_from_flags() {
	let tmp = TempDir::new().unwrap();
	let input = tmp.path().join("inventory.yml");
	let cache = tmp.path().join("ledger").join("titles.txt");
	fs::write(&input, INVENTORY).unwrap();
	fs::create_dir_all(cache.parent().unwrap()).unwrap();
	fs::write(&cache, format!("{TITLE}\n")).unwrap();

	let out = run_in(
		tmp.path(),
		&[
			"--input",
			input.to_str().unwrap(),
			"--cache",
			cache.to_str().unwrap(),
			"run",
			"--dry-run",
			"--date",
			"2025-06-02",
			"-f",
			"json",
		],
	);

	assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
	assert_eq!(parse_json(&out)["status"], "already_drafted");
}

#[test]
fn cache_list_and_check() {
	let tmp = workspace();
	fs::write(tmp.path().join("yaml_note_cache.txt"), format!("2025-06-01 Project List (Draft)\n{TITLE}\n")).unwrap();

	let list = run_in(tmp.path(), &["cache", "list", "-f", "json"]);
	assert_eq!(list.code, Some(0), "stderr: {}", list.stderr);
	assert_eq!(parse_json(&list), serde_json::json!(["2025-06-01 Project List (Draft)", TITLE]));

	let hit = run_in(tmp.path(), &["cache", "check", "--date", "2025-06-02", "-f", "json"]);
	assert_eq!(parse_json(&hit)["status"], "recorded");

	let miss = run_in(tmp.path(), &["cache", "check", "--date", "2025-06-03", "-f", "json"]);
	assert_eq!(parse_json(&miss)["status"], "not_recorded");
}

#[test]
fn empty_cache_lists_nothing() {
	let tmp = TempDir::new().unwrap();

	let out = run_in(tmp.path(), &["cache", "list"]);

	assert_eq!(out.code, Some(0));
	assert!(out.stdout.is_empty());
}
