//! Project inventory model and YAML loading.
//!
//! The inventory file looks like:
//!
//! ```yaml
//! projects:
//!   - category: Infra
//!     items:
//!       - id: 1
//!         title: Proxy
//!         status: active
//!         next_steps:
//!           - write tests
//! ```
//!
//! Every field is optional. Scalars of any YAML type are accepted where
//! text is expected and carried as their string rendering.

use std::fs;
use std::path::Path;

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_yaml::Value;
use tracing::debug;

use crate::error::{DraftError, Result};

/// Ordered list of project categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectInventory {
	#[serde(default, deserialize_with = "null_as_default")]
	pub projects: Vec<Category>,
}

/// A named group of projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Category {
	#[serde(default, rename = "category", deserialize_with = "optional_scalar")]
	pub name: Option<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub items: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Project {
	#[serde(default, deserialize_with = "scalar")]
	pub id: String,
	#[serde(default, deserialize_with = "scalar")]
	pub title: String,
	#[serde(default, deserialize_with = "scalar")]
	pub status: String,
	#[serde(default, deserialize_with = "scalar_list")]
	pub next_steps: Vec<String>,
}

impl ProjectInventory {
	/// Reads and parses the inventory at `path`.
	pub fn load(path: &Path) -> Result<Self> {
		let content = match fs::read_to_string(path) {
			Ok(content) => content,
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
				return Err(DraftError::InputNotFound { path: path.to_path_buf() });
			}
			Err(err) => {
				return Err(DraftError::InputMalformed {
					path: path.to_path_buf(),
					reason: err.to_string(),
				});
			}
		};

		let inventory = Self::from_yaml(&content).map_err(|err| DraftError::InputMalformed {
			path: path.to_path_buf(),
			reason: err.to_string(),
		})?;

		debug!(
			target = "notedraft",
			path = %path.display(),
			categories = inventory.projects.len(),
			projects = inventory.project_count(),
			"inventory loaded"
		);
		Ok(inventory)
	}

	/// Parses inventory YAML. An empty document is an empty inventory.
	pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
		let blank = content.lines().map(str::trim).all(|line| line.is_empty() || line.starts_with('#') || line == "---");
		if blank {
			return Ok(Self::default());
		}
		Ok(serde_yaml::from_str::<Option<Self>>(content)?.unwrap_or_default())
	}

	pub fn project_count(&self) -> usize {
		self.projects.iter().map(|c| c.items.len()).sum()
	}
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn scalar<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
	Ok(optional_scalar(deserializer)?.unwrap_or_default())
}

fn optional_scalar<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<String>, D::Error> {
	let value = Value::deserialize(deserializer)?;
	scalar_text(&value).map_err(de::Error::custom)
}

fn scalar_list<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<String>, D::Error> {
	let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
	values
		.iter()
		.map(|value| scalar_text(value).map(Option::unwrap_or_default))
		.collect::<std::result::Result<_, _>>()
		.map_err(de::Error::custom)
}

fn scalar_text(value: &Value) -> std::result::Result<Option<String>, String> {
	match value {
		Value::Null => Ok(None),
		Value::Bool(b) => Ok(Some(b.to_string())),
		Value::Number(n) => Ok(Some(n.to_string())),
		Value::String(s) => Ok(Some(s.clone())),
		Value::Tagged(tagged) => scalar_text(&tagged.value),
		Value::Sequence(_) | Value::Mapping(_) => Err("expected a scalar value, found a sequence or mapping".to_string()),
	}
}
