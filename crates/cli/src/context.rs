//! Turns parsed command-line settings into the library's run configuration.

use chrono::{Local, NaiveDate};
use notedraft::{Credentials, DraftConfig, DriverConfig, SiteProfile, Timing};

use crate::cli::Settings;

pub fn draft_config(settings: &Settings) -> DraftConfig {
	let credentials = match (&settings.email, &settings.password) {
		(None, None) => None,
		(email, password) => Some(Credentials::new(
			email.clone().unwrap_or_default(),
			password.clone().unwrap_or_default(),
		)),
	};

	DraftConfig {
		credentials,
		input_path: settings.input.clone(),
		cache_path: settings.cache.clone(),
		site: SiteProfile::note().with_base_url(settings.site_url.clone()),
		timing: Timing::default(),
		driver: DriverConfig {
			webdriver_url: settings.webdriver_url.clone(),
			executable: settings.chromedriver.clone(),
			headless: settings.headless,
		},
	}
}

pub fn today() -> NaiveDate {
	Local::now().date_naive()
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use notedraft::DraftError;

	use super::*;

	fn settings() -> Settings {
		Settings {
			email: None,
			password: None,
			input: PathBuf::from("projects.yaml"),
			cache: PathBuf::from("yaml_note_cache.txt"),
			site_url: "https://note.com".to_string(),
			webdriver_url: None,
			chromedriver: None,
			headless: false,
		}
	}

	#[test]
	fn no_credentials_without_email_or_password() {
		let config = draft_config(&settings());
		assert!(config.credentials.is_none());
		assert!(matches!(config.require_credentials(), Err(DraftError::Config(_))));
	}

	#[test]
	fn half_credentials_are_rejected_when_required() {
		let config = draft_config(&Settings {
			email: Some("writer@example.test".to_string()),
			..settings()
		});
		assert!(config.credentials.is_some());
		assert!(matches!(config.require_credentials(), Err(DraftError::Config(_))));
	}

	#[test]
	fn carries_paths_site_and_driver_options() {
		let config = draft_config(&Settings {
			email: Some("writer@example.test".to_string()),
			password: Some("s3cret".to_string()),
			input: PathBuf::from("/data/p.yaml"),
			site_url: "http://127.0.0.1:9000".to_string(),
			webdriver_url: Some("http://127.0.0.1:4444".to_string()),
			headless: true,
			..settings()
		});

		assert_eq!(config.require_credentials().unwrap().email(), "writer@example.test");
		assert_eq!(config.input_path, PathBuf::from("/data/p.yaml"));
		assert_eq!(config.site.login_url(), "http://127.0.0.1:9000/login");
		assert_eq!(config.driver.webdriver_url.as_deref(), Some("http://127.0.0.1:4444"));
		assert!(config.driver.chrome_args().contains(&"--headless=new".to_string()));
	}
}
