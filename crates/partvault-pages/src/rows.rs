//! Clickable table rows
//!
//! Rows marked with the `clickable-row` class and a `data-href` attribute
//! act as one large link to their target location. Clicks that start on a
//! nested link, button, input, label, select or textarea are left to that
//! element.
//!
//! ## Example
//!
//! ```
//! use partvault_pages::rows::{ClickOutcome, RowNavigator, RowNavigatorConfig};
//! use partvault_pages::testing::{MemoryDocument, RecordingNavigator};
//!
//! let doc = MemoryDocument::new();
//! let row = doc.create_element("tr");
//! doc.add_class(&row, "clickable-row");
//! doc.set_attribute(&row, "data-href", "/item/42/");
//! let cell = doc.create_element("td");
//! doc.append_child(&doc.body(), &row);
//! doc.append_child(&row, &cell);
//!
//! let recorder = RecordingNavigator::new();
//! let config = RowNavigatorConfig::default();
//! let bound = RowNavigator::new(config.clone(), recorder.clone()).bind(doc.select_rows(&config));
//!
//! assert_eq!(
//! 	bound.dispatch_click(&cell),
//! 	vec![ClickOutcome::Navigated("/item/42/".to_string())]
//! );
//! assert_eq!(recorder.visits(), vec!["/item/42/".to_string()]);
//! ```
//!
//! In the browser, call `startRowNavigator()` from the page bootstrap.

mod config;
mod exclusion;
mod navigator;

#[cfg(target_arch = "wasm32")]
mod browser;

pub use config::{
	ConfigError, DEFAULT_MARKER_CLASS, DEFAULT_TARGET_ATTRIBUTE, RowNavigatorConfig,
	WINDOW_CONFIG_KEY,
};
pub use exclusion::{ExclusionSet, InteractiveKind, find_excluded_ancestor};
pub use navigator::{BindError, BoundRows, ClickOutcome, RowNavigator};

#[cfg(target_arch = "wasm32")]
pub use browser::{
	ClickListener, DocumentBinding, bind_document, install, install_on_content_loaded, is_installed,
	rebind_installed, start, uninstall, window_config,
};
