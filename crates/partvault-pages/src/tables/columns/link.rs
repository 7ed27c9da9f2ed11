//! Link column type implementation

use crate::html::{attr, html_escape};
use crate::tables::column::{Column as ColumnTrait, field_text, fill_pattern};
use serde_json::Value;

/// Column that renders values as hyperlinks
///
/// The URL pattern can include placeholders like `{id}` that are replaced
/// with row fields. If the pattern cannot be resolved the cell falls back to
/// plain text.
///
/// # Example
///
/// ```
/// use partvault_pages::tables::column::Column;
/// use partvault_pages::tables::columns::LinkColumn;
/// use serde_json::json;
///
/// let column = LinkColumn::with_text("collection", "Collection", "/collection/{collection_id}/", "Open");
/// let cell = column.render(&json!({"collection": "Lab", "collection_id": 3}));
/// assert_eq!(cell, "<td><a href=\"/collection/3/\">Open</a></td>");
/// ```
pub struct LinkColumn {
	name: String,
	label: String,
	url_pattern: String,
	text_override: Option<String>,
	visible: bool,
}

impl LinkColumn {
	/// Creates a new link column
	///
	/// # Arguments
	///
	/// * `name` - The row field used as link text
	/// * `label` - The display label
	/// * `url_pattern` - URL pattern with placeholders (e.g., "/item/{id}/")
	pub fn new(
		name: impl Into<String>,
		label: impl Into<String>,
		url_pattern: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			label: label.into(),
			url_pattern: url_pattern.into(),
			text_override: None,
			visible: true,
		}
	}

	/// Creates a new link column with fixed link text
	pub fn with_text(
		name: impl Into<String>,
		label: impl Into<String>,
		url_pattern: impl Into<String>,
		text: impl Into<String>,
	) -> Self {
		Self {
			text_override: Some(text.into()),
			..Self::new(name, label, url_pattern)
		}
	}

	/// Sets whether this column is visible
	pub fn visible(mut self, visible: bool) -> Self {
		self.visible = visible;
		self
	}
}

impl ColumnTrait for LinkColumn {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> &str {
		&self.label
	}

	fn render(&self, row: &Value) -> String {
		let value = field_text(row, &self.name).unwrap_or_default();
		let text = self.text_override.as_deref().unwrap_or(&value);

		match fill_pattern(&self.url_pattern, row) {
			Some(url) => format!("<td><a{}>{}</a></td>", attr("href", &url), html_escape(text)),
			None => format!("<td>{}</td>", html_escape(text)),
		}
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
	fn test_link_column_uses_value_as_text() {
		let column = LinkColumn::new("name", "Name", "/item/{id}/edit/");
		assert_eq!(
			column.render(&json!({"id": 42, "name": "Bench PSU"})),
			"<td><a href=\"/item/42/edit/\">Bench PSU</a></td>"
		);
	}

	#[rstest]
	fn test_link_column_unresolved_pattern_renders_text() {
		let column = LinkColumn::new("name", "Name", "/item/{id}/");
		assert_eq!(column.render(&json!({"name": "Orphan"})), "<td>Orphan</td>");
	}
}
