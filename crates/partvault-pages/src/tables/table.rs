//! Tables whose rows are clickable

use crate::html::{attr, html_escape};
use crate::rows::{ConfigError, RowNavigatorConfig};
use crate::tables::column::{Column, fill_pattern};
use crate::urls::{self, UrlError};
use serde_json::Value;

/// A table rendering one clickable row per JSON object.
///
/// Each row whose `href_pattern` resolves is rendered as
/// `<tr class="clickable-row" data-href="...">`; rows that do not resolve
/// are rendered as plain `<tr>` and take no part in row navigation. The
/// marker class and attribute come from the same [`RowNavigatorConfig`]
/// the client uses.
///
/// # Example
///
/// ```
/// use partvault_pages::tables::{ClickableTable, columns::TextColumn};
/// use serde_json::json;
///
/// let table = ClickableTable::new("/item/{id}/").column(TextColumn::new("name", "Name"));
/// let html = table.render_row(&json!({"id": 42, "name": "Multimeter"}));
/// assert_eq!(
/// 	html,
/// 	"<tr class=\"clickable-row\" data-href=\"/item/42/\"><td>Multimeter</td></tr>"
/// );
/// ```
pub struct ClickableTable {
	columns: Vec<Box<dyn Column>>,
	href_pattern: String,
	config: RowNavigatorConfig,
	class: Option<String>,
	empty_text: Option<String>,
}

impl ClickableTable {
	/// Creates a table whose rows navigate to `href_pattern`.
	pub fn new(href_pattern: impl Into<String>) -> Self {
		Self {
			columns: Vec::new(),
			href_pattern: href_pattern.into(),
			config: RowNavigatorConfig::default(),
			class: None,
			empty_text: None,
		}
	}

	/// Creates a table whose rows navigate to the named route.
	///
	/// `fields` maps each route parameter to the row field holding it, so
	/// row targets always follow [`urls::ROUTES`].
	///
	/// ```
	/// use partvault_pages::tables::{ClickableTable, columns::TextColumn};
	/// use serde_json::json;
	///
	/// let table = ClickableTable::for_route("item", &[("item_id", "id")])
	/// 	.unwrap()
	/// 	.column(TextColumn::new("name", "Name"));
	/// assert!(table.render_row(&json!({"id": 3, "name": "Probe"})).contains("data-href=\"/item/3/\""));
	/// ```
	pub fn for_route(name: &str, fields: &[(&str, &str)]) -> Result<Self, UrlError> {
		Ok(Self::new(urls::href_pattern(name, fields)?))
	}

	/// Appends a column.
	pub fn column(mut self, column: impl Column + 'static) -> Self {
		self.columns.push(Box::new(column));
		self
	}

	/// Uses the marker class and attribute name from `config`.
	///
	/// The configuration is validated first, so rendered rows always match
	/// the client's row selector.
	pub fn config(mut self, config: RowNavigatorConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		self.config = config;
		Ok(self)
	}

	/// Sets the `<table>` class attribute.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// Sets the text of the single row rendered when there are no rows.
	pub fn empty_text(mut self, text: impl Into<String>) -> Self {
		self.empty_text = Some(text.into());
		self
	}

	fn visible_columns(&self) -> impl Iterator<Item = &Box<dyn Column>> {
		self.columns.iter().filter(|c| c.is_visible())
	}

	/// Renders the `<thead>` section.
	pub fn render_header(&self) -> String {
		let cells: String = self
			.visible_columns()
			.map(|c| format!("<th>{}</th>", html_escape(c.label())))
			.collect();
		format!("<thead><tr>{}</tr></thead>", cells)
	}

	/// Renders one `<tr>`.
	pub fn render_row(&self, row: &Value) -> String {
		let cells: String = self.visible_columns().map(|c| c.render(row)).collect();
		match fill_pattern(&self.href_pattern, row) {
			Some(href) => format!(
				"<tr{}{}>{}</tr>",
				attr("class", &self.config.marker_class),
				attr(&self.config.target_attribute, &href),
				cells
			),
			None => format!("<tr>{}</tr>", cells),
		}
	}

	/// Renders the complete `<table>`.
	pub fn render(&self, rows: &[Value]) -> String {
		let mut html = String::from("<table");
		if let Some(class) = &self.class {
			html.push_str(&attr("class", class));
		}
		html.push('>');
		html.push_str(&self.render_header());
		html.push_str("<tbody>");

		if rows.is_empty() {
			if let Some(text) = &self.empty_text {
				let span = self.visible_columns().count().max(1);
				html.push_str(&format!(
					"<tr><td colspan=\"{}\">{}</td></tr>",
					span,
					html_escape(text)
				));
			}
		}
		for row in rows {
			html.push_str(&self.render_row(row));
		}

		html.push_str("</tbody></table>");
		html
	}
}
