use chrono::NaiveDate;

/// Fixed label appended to the draft date to form the article title.
pub const DRAFT_LABEL: &str = "Project List (Draft)";

/// A rendered article ready to be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftDocument {
	pub title: String,
	pub body: String,
}

/// Title for the draft of `date`: `"{YYYY-MM-DD} Project List (Draft)"`.
///
/// Titles are date-scoped, so at most one draft per calendar day passes the
/// cache gate.
pub fn draft_title(date: NaiveDate) -> String {
	format!("{} {}", date.format("%Y-%m-%d"), DRAFT_LABEL)
}
