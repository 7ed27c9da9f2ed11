//! Text column type implementation

use crate::html::html_escape;
use crate::tables::column::{Column as ColumnTrait, field_text};
use serde_json::Value;

/// Column rendering a field as escaped text
///
/// Missing or non-scalar values render the placeholder (`""` by default).
pub struct TextColumn {
	name: String,
	label: String,
	placeholder: String,
	visible: bool,
}

impl TextColumn {
	/// Creates a new text column
	///
	/// # Arguments
	///
	/// * `name` - The row field to display
	/// * `label` - The header label
	pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: label.into(),
			placeholder: String::new(),
			visible: true,
		}
	}

	/// Sets the text shown when the field has no value
	pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	/// Sets whether this column is visible
	pub fn visible(mut self, visible: bool) -> Self {
		self.visible = visible;
		self
	}
}

impl ColumnTrait for TextColumn {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> &str {
		&self.label
	}

	fn render(&self, row: &Value) -> String {
		let text = field_text(row, &self.name).unwrap_or_else(|| self.placeholder.clone());
		format!("<td>{}</td>", html_escape(&text))
	}

	fn is_visible(&self) -> bool {
		self.visible
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_text_column_escapes() {
		let column = TextColumn::new("name", "Name");
		assert_eq!(
			column.render(&json!({"name": "R&S <RTB2004>"})),
			"<td>R&amp;S &lt;RTB2004&gt;</td>"
		);
	}

	#[rstest]
	fn test_text_column_placeholder() {
		let column = TextColumn::new("serial", "Serial").placeholder("-");
		assert_eq!(column.render(&json!({"serial": null})), "<td>-</td>");
	}
}
