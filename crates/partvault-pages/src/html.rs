//! HTML text helpers for server-rendered markup.

use std::borrow::Cow;

/// Escapes `&`, `<`, `>`, `"` and `'` for use in text and attribute values.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn html_escape(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(s);
	}

	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

/// Formats ` name="value"` with the value escaped.
pub(crate) fn attr(name: &str, value: &str) -> String {
	format!(" {}=\"{}\"", name, html_escape(value))
}
