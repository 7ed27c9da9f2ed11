//! CheckBox column type implementation

use crate::html::attr;
use crate::tables::column::{Column as ColumnTrait, field_text};
use serde_json::Value;

/// Column with checkbox
///
/// Renders a checkbox per row, e.g. for bulk selection. The checkbox value
/// is the row's `value_field` (defaults to `id`); it is checked when the
/// column's own field is `true`.
pub struct CheckBoxColumn {
	name: String,
	label: String,
	value_field: String,
	visible: bool,
}

impl CheckBoxColumn {
	/// Creates a new checkbox column
	pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: label.into(),
			value_field: "id".to_string(),
			visible: true,
		}
	}

	/// Sets the row field used as the checkbox value
	pub fn value_field(mut self, field: impl Into<String>) -> Self {
		self.value_field = field.into();
		self
	}

	/// Sets whether this column is visible
	pub fn visible(mut self, visible: bool) -> Self {
		self.visible = visible;
		self
	}
}

impl ColumnTrait for CheckBoxColumn {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> &str {
		&self.label
	}

	fn render(&self, row: &Value) -> String {
		let mut input = format!("<input type=\"checkbox\"{}", attr("name", &self.name));
		if let Some(value) = field_text(row, &self.value_field) {
			input.push_str(&attr("value", &value));
		}
		if row.get(&self.name).and_then(Value::as_bool) == Some(true) {
			input.push_str(" checked");
		}
		format!("<td>{}></td>", input)
	}

	fn is_visible(&self) -> bool {
		self.visible
	}
}
