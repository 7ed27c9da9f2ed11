//! Part Vault URL reversal
//!
//! Named routes of the inventory application, reversed into the paths that
//! list pages put in each row's target attribute.
//!
//! | Name | Pattern |
//! |------|---------|
//! | `index` | `/` |
//! | `items` | `/items/` |
//! | `collections` | `/collections/` |
//! | `item` | `/item/{item_id}/` |
//! | `collection` | `/collection/{collection_id}/` |

use std::collections::HashMap;

/// Error type for URL reversal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
	/// No route has this name.
	#[error("Invalid route name: {0}")]
	UnknownRoute(String),
	/// A placeholder had no value.
	#[error("Missing parameter: {0}")]
	MissingParameter(String),
	/// A value does not fit its placeholder.
	#[error("Invalid value '{value}' for parameter '{name}'")]
	InvalidParameter {
		/// The placeholder name.
		name: String,
		/// The rejected value.
		value: String,
	},
}

/// A single named route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
	/// Route name used for reversal.
	pub name: &'static str,
	/// Path pattern with `{param}` placeholders.
	pub pattern: &'static str,
}

const ITEM: Route = Route {
	name: "item",
	pattern: "/item/{item_id}/",
};

const COLLECTION: Route = Route {
	name: "collection",
	pattern: "/collection/{collection_id}/",
};

/// All Part Vault routes.
pub const ROUTES: [Route; 5] = [
	Route {
		name: "index",
		pattern: "/",
	},
	Route {
		name: "items",
		pattern: "/items/",
	},
	Route {
		name: "collections",
		pattern: "/collections/",
	},
	ITEM,
	COLLECTION,
];

/// Looks up a route by name.
pub fn route(name: &str) -> Option<&'static Route> {
	ROUTES.iter().find(|r| r.name == name)
}

/// Rebuilds `pattern`, replacing each `{param}` segment with `fill(param)`.
fn expand<F>(pattern: &str, mut fill: F) -> Result<String, UrlError>
where
	F: FnMut(&str) -> Result<String, UrlError>,
{
	let mut path = String::with_capacity(pattern.len());
	for segment in pattern.split_inclusive('/') {
		let Some(param) = segment
			.strip_prefix('{')
			.and_then(|s| s.strip_suffix("}/"))
		else {
			path.push_str(segment);
			continue;
		};
		path.push_str(&fill(param)?);
		path.push('/');
	}
	Ok(path)
}

/// Generates a path by route name with parameters.
///
/// Every placeholder must be given; all Part Vault parameters are
/// non-negative integer primary keys. Extra parameters are ignored.
pub fn reverse(name: &str, params: &[(&str, &str)]) -> Result<String, UrlError> {
	let route = route(name).ok_or_else(|| UrlError::UnknownRoute(name.to_string()))?;
	let params: HashMap<&str, &str> = params.iter().copied().collect();

	expand(route.pattern, |param| {
		let value = params
			.get(param)
			.ok_or_else(|| UrlError::MissingParameter(param.to_string()))?;
		if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
			return Err(UrlError::InvalidParameter {
				name: param.to_string(),
				value: value.to_string(),
			});
		}
		Ok(value.to_string())
	})
}

/// Turns a route into a row href pattern for [`ClickableTable`].
///
/// `fields` maps each route parameter to the row field holding its value:
///
/// ```
/// use partvault_pages::urls::href_pattern;
///
/// assert_eq!(href_pattern("item", &[("item_id", "id")]).unwrap(), "/item/{id}/");
/// ```
///
/// [`ClickableTable`]: crate::tables::ClickableTable
pub fn href_pattern(name: &str, fields: &[(&str, &str)]) -> Result<String, UrlError> {
	let route = route(name).ok_or_else(|| UrlError::UnknownRoute(name.to_string()))?;
	let fields: HashMap<&str, &str> = fields.iter().copied().collect();

	expand(route.pattern, |param| match fields.get(param) {
		Some(field) if is_field_name(field) => Ok(format!("{{{}}}", field)),
		Some(field) => Err(UrlError::InvalidParameter {
			name: param.to_string(),
			value: field.to_string(),
		}),
		None => Err(UrlError::MissingParameter(param.to_string())),
	})
}

fn is_field_name(field: &str) -> bool {
	!field.is_empty() && !field.contains(['{', '}', '/'])
}

fn fill_key(route: &Route, key: u64) -> String {
	let key = key.to_string();
	// Both helper routes have exactly one placeholder.
	expand(route.pattern, |_| Ok(key.clone())).unwrap_or_default()
}

/// Path of an item's detail page.
pub fn item_url(item_id: u64) -> String {
	fill_key(&ITEM, item_id)
}

/// Path of a collection's detail page.
pub fn collection_url(collection_id: u64) -> String {
	fill_key(&COLLECTION, collection_id)
}
