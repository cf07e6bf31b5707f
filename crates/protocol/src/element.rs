//! Element location and interaction payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Key under which WebDriver servers return a web element reference.
pub const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Element location strategy (`using` field of `POST /element`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocatorStrategy {
	#[serde(rename = "css selector")]
	Css,
	#[serde(rename = "link text")]
	LinkText,
	#[serde(rename = "partial link text")]
	PartialLinkText,
	#[serde(rename = "tag name")]
	TagName,
	#[serde(rename = "xpath")]
	XPath,
}

impl fmt::Display for LocatorStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			LocatorStrategy::Css => "css",
			LocatorStrategy::LinkText => "link text",
			LocatorStrategy::PartialLinkText => "partial link text",
			LocatorStrategy::TagName => "tag name",
			LocatorStrategy::XPath => "xpath",
		};
		f.write_str(name)
	}
}

/// A query used to find one element on the live page.
///
/// Serializes directly as the body of `POST /session/{id}/element`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locator {
	pub using: LocatorStrategy,
	pub value: String,
}

impl Locator {
	pub fn xpath(value: impl Into<String>) -> Self {
		Self {
			using: LocatorStrategy::XPath,
			value: value.into(),
		}
	}

	pub fn css(value: impl Into<String>) -> Self {
		Self {
			using: LocatorStrategy::Css,
			value: value.into(),
		}
	}
}

impl fmt::Display for Locator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}={}", self.using, self.value)
	}
}

/// Web element reference returned by find commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementReference {
	#[serde(rename = "element-6066-11e4-a52e-4f735466cecf")]
	pub id: String,
}

/// Body of `POST /session/{id}/url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateRequest {
	pub url: String,
}

/// Body of `POST /session/{id}/element/{element}/value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendKeysRequest {
	pub text: String,
}
