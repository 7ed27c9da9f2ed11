//! Button column type implementation

use crate::html::{attr, html_escape};
use crate::tables::column::{Column as ColumnTrait, fill_pattern};
use serde_json::Value;

/// Column with an action button
///
/// Renders `<button type="button">` carrying the resolved action URL in
/// `data-action`. What the button does is up to the page's own scripts;
/// row navigation leaves button clicks alone.
pub struct ButtonColumn {
	name: String,
	label: String,
	text: String,
	action_pattern: String,
	visible: bool,
}

impl ButtonColumn {
	/// Creates a new button column
	///
	/// # Arguments
	///
	/// * `name` - Column identifier (also used as the button's `name`)
	/// * `label` - The header label
	/// * `text` - The button caption
	/// * `action_pattern` - URL pattern with placeholders (e.g., "/item/{id}/delete/")
	pub fn new(
		name: impl Into<String>,
		label: impl Into<String>,
		text: impl Into<String>,
		action_pattern: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			label: label.into(),
			text: text.into(),
			action_pattern: action_pattern.into(),
			visible: true,
		}
	}

	/// Sets whether this column is visible
	pub fn visible(mut self, visible: bool) -> Self {
		self.visible = visible;
		self
	}
}

impl ColumnTrait for ButtonColumn {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> &str {
		&self.label
	}

	fn render(&self, row: &Value) -> String {
		let mut button = format!("<button type=\"button\"{}", attr("name", &self.name));
		match fill_pattern(&self.action_pattern, row) {
			Some(action) => button.push_str(&attr("data-action", &action)),
			None => button.push_str(" disabled"),
		}
		format!("<td>{}>{}</button></td>", button, html_escape(&self.text))
	}

	fn is_visible(&self) -> bool {
		self.visible
	}
}
