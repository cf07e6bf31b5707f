//! Page locators and URLs of the publishing site.
//!
//! note.com has no stable automation hooks; these XPath locators match its
//! current markup in both the Japanese and English UI. When the site markup
//! changes, the run fails with `ElementNotFound` naming the locator here.

use notedraft_protocol::Locator;

pub const NOTE_BASE_URL: &str = "https://note.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteProfile {
	pub base_url: String,
	pub login_path: String,
	pub email_field: Locator,
	pub password_field: Locator,
	pub login_button: Locator,
	pub post_menu: Locator,
	pub new_article_link: Locator,
	/// Title textarea; the placeholder differs between UI languages.
	pub title_field: Locator,
	/// ProseMirror rich-text editor region.
	pub editor: Locator,
	pub save_draft_button: Locator,
	/// Page-title fragments that mean "still on the login page".
	pub login_indicators: Vec<String>,
}

impl SiteProfile {
	pub fn note() -> Self {
		Self {
			base_url: NOTE_BASE_URL.to_string(),
			login_path: "/login".to_string(),
			email_field: Locator::xpath("//input[@id='email']"),
			password_field: Locator::xpath("//input[@id='password']"),
			login_button: Locator::xpath(
				"//div[contains(@class,'a-button__inner') and (contains(text(),'ログイン') or contains(text(),'Log in'))]",
			),
			post_menu: Locator::xpath("//button[@aria-label='投稿']"),
			new_article_link: Locator::xpath("//a[@href='/notes/new' and .//div[contains(text(),'新しく記事を書く')]]"),
			title_field: Locator::xpath("//textarea[@placeholder='記事タイトル' or @placeholder='Enter title']"),
			editor: Locator::xpath("//div[contains(@class,'ProseMirror')]"),
			save_draft_button: Locator::xpath("//button[.//span[contains(text(),'下書き保存')]]"),
			login_indicators: vec!["ログイン".to_string(), "Log in".to_string()],
		}
	}

	/// Points the profile at another host (staging, local mirror).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub fn login_url(&self) -> String {
		format!("{}{}", self.base_url.trim_end_matches('/'), self.login_path)
	}

	/// True when `page_title` still carries a login indicator.
	///
	/// This is a locale-dependent heuristic: a login page in a language not
	/// listed in `login_indicators` reads as logged in.
	pub fn is_login_page(&self, page_title: &str) -> bool {
		self.login_indicators.iter().any(|indicator| page_title.contains(indicator.as_str()))
	}
}

impl Default for SiteProfile {
	fn default() -> Self {
		Self::note()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn login_url_joins_without_double_slash() {
		assert_eq!(SiteProfile::note().login_url(), "https://note.com/login");
		let staging = SiteProfile::note().with_base_url("http://127.0.0.1:8080/");
		assert_eq!(staging.login_url(), "http://127.0.0.1:8080/login");
	}

	#[test]
	fn detects_login_page_in_both_languages() {
		let site = SiteProfile::note();
		assert!(site.is_login_page("ログイン｜note（ノート）"));
		assert!(site.is_login_page("Log in | note"));
		assert!(!site.is_login_page("note ――つくる、つながる、とどける。"));
	}

	#[test]
	fn title_field_accepts_both_placeholders() {
		let value = &SiteProfile::note().title_field.value;
		assert!(value.contains("記事タイトル"));
		assert!(value.contains("Enter title"));
	}
}
