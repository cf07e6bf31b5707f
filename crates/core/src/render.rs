//! Inventory-to-Markdown rendering.

use chrono::NaiveDate;

use crate::inventory::{Category, Project, ProjectInventory};

pub const DOCUMENT_HEADING: &str = "# Project List";
pub const UNNAMED_CATEGORY: &str = "Unnamed Category";

const TABLE_HEADER: &str = "| ID | Title | Status | Next Steps |";
const TABLE_RULE: &str = "|----|-------|--------|------------|";
const STEP_SEPARATOR: &str = "<br>";

/// Renders `inventory` as a Markdown document stamped with `updated_on`.
///
/// Pure: the same inventory and date always produce the same bytes.
/// Categories and items keep their input order.
pub fn render(inventory: &ProjectInventory, updated_on: NaiveDate) -> String {
	let mut lines = vec![
		format!("{DOCUMENT_HEADING}\n"),
		format!("_Updated: {}_\n", updated_on.format("%Y-%m-%d")),
	];

	for category in &inventory.projects {
		lines.push(format!("## {}\n", category_name(category)));
		lines.push(TABLE_HEADER.to_string());
		lines.push(TABLE_RULE.to_string());
		lines.extend(category.items.iter().map(project_row));
		lines.push(String::new());
	}

	lines.join("\n")
}

fn category_name(category: &Category) -> &str {
	category.name.as_deref().unwrap_or(UNNAMED_CATEGORY)
}

fn project_row(project: &Project) -> String {
	format!(
		"| {} | {} | {} | {} |",
		project.id,
		project.title,
		project.status,
		next_steps_cell(&project.next_steps)
	)
}

fn next_steps_cell(steps: &[String]) -> String {
	steps.iter().map(|step| format!("- {step}")).collect::<Vec<_>>().join(STEP_SEPARATOR)
}
