//! Row navigator configuration
//!
//! The server-side table renderer and the client-side navigator read the
//! same [`RowNavigatorConfig`], so both agree on the marker class and the
//! target attribute name.

use super::exclusion::ExclusionSet;
use serde::{Deserialize, Serialize};

/// Default marker class for clickable rows.
pub const DEFAULT_MARKER_CLASS: &str = "clickable-row";

/// Default attribute holding a row's target location.
pub const DEFAULT_TARGET_ATTRIBUTE: &str = "data-href";

/// Name of the optional window global read by [`RowNavigatorConfig::from_window`].
pub const WINDOW_CONFIG_KEY: &str = "__PARTVAULT_ROW_NAVIGATOR__";

/// Errors raised while loading a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
	/// The configuration could not be parsed.
	#[error("Failed to parse row navigator config: {0}")]
	Parse(String),
	/// A field holds an unusable value.
	#[error("Invalid row navigator config field '{field}': {reason}")]
	Invalid {
		/// The offending field.
		field: &'static str,
		/// Why the value was rejected.
		reason: String,
	},
}

/// Selection and exclusion settings for clickable rows.
///
/// Every field is optional when deserializing:
///
/// ```
/// use partvault_pages::rows::RowNavigatorConfig;
///
/// let config = RowNavigatorConfig::from_json(r#"{"target_attribute": "data-url"}"#).unwrap();
/// assert_eq!(config.marker_class, "clickable-row");
/// assert_eq!(config.target_attribute, "data-url");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowNavigatorConfig {
	/// Class a row must carry to be clickable.
	pub marker_class: String,
	/// Attribute holding the row's target location.
	pub target_attribute: String,
	/// Element kinds whose clicks are left to the element itself.
	pub excluded: ExclusionSet,
}

impl Default for RowNavigatorConfig {
	fn default() -> Self {
		Self {
			marker_class: DEFAULT_MARKER_CLASS.to_string(),
			target_attribute: DEFAULT_TARGET_ATTRIBUTE.to_string(),
			excluded: ExclusionSet::default(),
		}
	}
}

impl RowNavigatorConfig {
	/// Creates the default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the marker class.
	pub fn marker_class(mut self, class: impl Into<String>) -> Self {
		self.marker_class = class.into();
		self
	}

	/// Sets the target attribute name.
	pub fn target_attribute(mut self, attribute: impl Into<String>) -> Self {
		self.target_attribute = attribute.into();
		self
	}

	/// Replaces the exclusion set.
	pub fn excluded(mut self, excluded: ExclusionSet) -> Self {
		self.excluded = excluded;
		self
	}

	/// Parses and validates a JSON configuration.
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		let config: Self =
			serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
		config.validate()?;
		Ok(config)
	}

	/// Checks that the marker class and attribute name are usable.
	pub fn validate(&self) -> Result<(), ConfigError> {
		check_token("marker_class", &self.marker_class)?;
		check_token("target_attribute", &self.target_attribute)?;
		Ok(())
	}

	/// CSS selector matching qualifying rows, e.g. `.clickable-row[data-href]`.
	pub fn row_selector(&self) -> String {
		format!(".{}[{}]", self.marker_class, self.target_attribute)
	}

	/// Reads the optional `window.__PARTVAULT_ROW_NAVIGATOR__` object.
	///
	/// Returns the default configuration when the global is absent.
	#[cfg(target_arch = "wasm32")]
	pub fn from_window() -> Result<Self, ConfigError> {
		let window = web_sys::window()
			.ok_or_else(|| ConfigError::Parse("Window not available".to_string()))?;

		let global = js_sys::Reflect::get(&window, &WINDOW_CONFIG_KEY.into())
			.map_err(|_| ConfigError::Parse("Failed to read config global".to_string()))?;

		if global.is_undefined() || global.is_null() {
			return Ok(Self::default());
		}

		let json = js_sys::JSON::stringify(&global)
			.map_err(|_| ConfigError::Parse("Failed to stringify config".to_string()))?
			.as_string()
			.ok_or_else(|| ConfigError::Parse("Config is not serializable".to_string()))?;

		Self::from_json(&json)
	}
}

/// Accepts CSS identifiers: `[A-Za-z_-][A-Za-z0-9_-]*`, not starting with
/// `-` followed by a digit. Both names end up unescaped in
/// [`RowNavigatorConfig::row_selector`].
fn check_token(field: &'static str, value: &str) -> Result<(), ConfigError> {
	let invalid = |reason: String| ConfigError::Invalid { field, reason };

	let mut chars = value.chars();
	let Some(first) = chars.next() else {
		return Err(invalid("must not be empty".to_string()));
	};
	if let Some(c) = value
		.chars()
		.find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
	{
		return Err(invalid(format!("'{}' contains '{}'", value, c)));
	}
	let starts_with_digit = match first {
		'-' => chars.next().is_none_or(|c| c.is_ascii_digit()),
		c => c.is_ascii_digit(),
	};
	if starts_with_digit {
		return Err(invalid(format!("'{}' is not a CSS identifier", value)));
	}
	Ok(())
}
