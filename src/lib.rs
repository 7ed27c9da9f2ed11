//! # Part Vault
//!
//! A self-hosted, multi-user inventory manager for parts, tools and
//! equipment, organised into collections.
//!
//! This crate is the facade over the workspace members. Its list pages
//! render items and collections as tables whose rows link to the detail
//! pages; the row navigator makes the whole row clickable while nested
//! links, buttons and form controls keep their own behavior.
//!
//! ## Feature Flags
//!
//! - `pages` (default) - Clickable list tables ([`pages`])
//! - `debug-hooks` - Enables `debug_log!` output in debug builds
//! - `console_error_panic_hook` - Readable panics in the browser console
//!
//! ## Quick Start
//!
//! ```rust
//! use partvault::prelude::*;
//! use partvault::pages::testing::{MemoryDocument, RecordingNavigator};
//!
//! let doc = MemoryDocument::new();
//! let row = doc.append_element(&doc.body(), "tr");
//! doc.add_class(&row, "clickable-row");
//! doc.set_attribute(&row, "data-href", &partvault::pages::urls::item_url(42));
//!
//! let recorder = RecordingNavigator::new();
//! let config = RowNavigatorConfig::default();
//! let bound = RowNavigator::new(config.clone(), recorder.clone()).bind(doc.select_rows(&config));
//! bound.dispatch_click(&row);
//!
//! assert_eq!(recorder.last().as_deref(), Some("/item/42/"));
//! ```

#[cfg(feature = "pages")]
pub mod pages;

/// Commonly used types
pub mod prelude {
	#[cfg(feature = "pages")]
	pub use crate::pages::{
		ClickOutcome, ClickableTable, DomNode, ExclusionSet, InteractiveKind, Navigate,
		NavigationError, RowNavigator, RowNavigatorConfig,
	};

	#[cfg(feature = "pages")]
	pub use crate::pages::tables::Column;
}
