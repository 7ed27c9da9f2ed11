//! Column trait and row value helpers

use serde_json::Value;

/// A table column rendering one `<td>` cell per row.
///
/// Rows are JSON objects; columns read the fields they need by name.
pub trait Column {
	/// Returns the field this column reads.
	fn name(&self) -> &str;

	/// Returns the header label.
	fn label(&self) -> &str;

	/// Renders the complete `<td>` cell for `row`.
	fn render(&self, row: &Value) -> String;

	/// Returns true if this column is rendered.
	fn is_visible(&self) -> bool {
		true
	}
}

/// Returns a scalar field of `row` as text.
///
/// Strings are returned as-is, numbers and booleans are formatted. Missing
/// fields, `null`, arrays and objects yield `None`.
pub fn field_text(row: &Value, field: &str) -> Option<String> {
	match row.get(field)? {
		Value::String(s) => Some(s.clone()),
		Value::Number(n) => Some(n.to_string()),
		Value::Bool(b) => Some(b.to_string()),
		_ => None,
	}
}

/// Replaces `{field}` placeholders in `pattern` with percent-encoded row
/// fields.
///
/// Returns `None` if any placeholder has no scalar value in `row`. An
/// unmatched `{` is kept literally.
pub fn fill_pattern(pattern: &str, row: &Value) -> Option<String> {
	let mut out = String::with_capacity(pattern.len());
	let mut rest = pattern;

	while let Some(start) = rest.find('{') {
		let Some(len) = rest[start..].find('}') else {
			break;
		};
		out.push_str(&rest[..start]);
		let field = &rest[start + 1..start + len];
		let value = field_text(row, field)?;
		out.push_str(&urlencoding::encode(&value));
		rest = &rest[start + len + 1..];
	}

	out.push_str(rest);
	Some(out)
}
