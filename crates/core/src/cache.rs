//! Append-only ledger of submitted draft titles.
//!
//! One title per line, UTF-8. A title is appended only after the site
//! confirmed the draft was saved, so membership means "already drafted".
//! There is no removal or expiry, and no locking: one run at a time.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DraftError, Result};

#[derive(Debug, Clone)]
pub struct DraftCache {
	path: PathBuf,
}

impl DraftCache {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Returns true when `title` was recorded by an earlier run.
	///
	/// A missing store is an empty ledger, not an error.
	pub fn exists(&self, title: &str) -> Result<bool> {
		Ok(self.read()?.is_some_and(|content| content.lines().any(|line| line.trim() == title)))
	}

	/// Every recorded title, oldest first.
	pub fn titles(&self) -> Result<Vec<String>> {
		Ok(self
			.read()?
			.map(|content| {
				content
					.lines()
					.map(str::trim)
					.filter(|line| !line.is_empty())
					.map(str::to_string)
					.collect()
			})
			.unwrap_or_default())
	}

	/// Appends `title`, creating the store and its directory if needed.
	pub fn record(&self, title: &str) -> Result<()> {
		if title.contains(['\n', '\r']) {
			return Err(self.io_error(io::Error::new(io::ErrorKind::InvalidInput, "title contains a line break")));
		}

		if let Some(parent) = self.path.parent() {
			if !parent.as_os_str().is_empty() && !parent.exists() {
				fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
			}
		}

		let mut file = OpenOptions::new().create(true).append(true).open(&self.path).map_err(|e| self.io_error(e))?;
		writeln!(file, "{title}").map_err(|e| self.io_error(e))?;

		debug!(target = "notedraft", path = %self.path.display(), %title, "title recorded");
		Ok(())
	}

	fn read(&self) -> Result<Option<String>> {
		match fs::read_to_string(&self.path) {
			Ok(content) => Ok(Some(content)),
			Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
			Err(err) => Err(self.io_error(err)),
		}
	}

	fn io_error(&self, source: io::Error) -> DraftError {
		DraftError::CacheIo {
			path: self.path.clone(),
			source,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const TITLE: &str = "2025-06-02 Project List (Draft)";

	#[test]
	fn missing_store_contains_nothing() {
		let dir = tempfile::tempdir().unwrap();
		let cache = DraftCache::new(dir.path().join("cache.txt"));
		assert!(!cache.exists(TITLE).unwrap());
		assert!(cache.titles().unwrap().is_empty());
	}

	#[test]
	fn record_then_exists() {
		let dir = tempfile::tempdir().unwrap();
		let cache = DraftCache::new(dir.path().join("cache.txt"));
		cache.record(TITLE).unwrap();
		assert!(cache.exists(TITLE).unwrap());
		assert!(!cache.exists("2025-06-03 Project List (Draft)").unwrap());
	}

	#[test]
	fn fresh_instance_sees_recorded_title() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("cache.txt");
		DraftCache::new(&path).record(TITLE).unwrap();
		assert!(DraftCache::new(&path).exists(TITLE).unwrap());
	}

	#[test]
	fn record_appends_lines() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("cache.txt");
		let cache = DraftCache::new(&path);
		cache.record("a").unwrap();
		cache.record("b").unwrap();
		assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");
		assert_eq!(cache.titles().unwrap(), ["a", "b"]);
	}

	#[test]
	fn match_is_exact_after_trimming_line_endings() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("cache.txt");
		fs::write(&path, format!("{TITLE}\r\n")).unwrap();
		let cache = DraftCache::new(&path);
		assert!(cache.exists(TITLE).unwrap());
		assert!(!cache.exists("2025-06-02 Project List").unwrap());
	}

	#[test]
	fn record_creates_parent_directory() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("state").join("cache.txt");
		DraftCache::new(&path).record(TITLE).unwrap();
		assert!(path.exists());
	}

	#[test]
	fn rejects_multiline_title() {
		let dir = tempfile::tempdir().unwrap();
		let cache = DraftCache::new(dir.path().join("cache.txt"));
		let err = cache.record("a\nb").unwrap_err();
		assert!(matches!(err, DraftError::CacheIo { .. }));
		assert!(!cache.path().exists());
	}
}
