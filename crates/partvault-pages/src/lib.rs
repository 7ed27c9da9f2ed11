//! Part Vault Pages - clickable list tables
//!
//! Part Vault renders its item and collection lists as HTML tables on the
//! server. This crate covers both halves of making those rows clickable:
//!
//! - [`tables`]: server-side rendering of rows carrying the
//!   `clickable-row` class and a `data-href` target
//! - [`rows`]: the client-side [`RowNavigator`] that turns a click anywhere
//!   on such a row into a full navigation, except when the click lands on a
//!   nested link, button, input, label, select or textarea
//!
//! ## Architecture
//!
//! - [`dom`]: DOM abstraction ([`DomNode`]) over `web_sys::Element` and the
//!   in-memory test document
//! - [`navigate`]: navigation effect boundary ([`Navigate`])
//! - [`rows`]: row binding, exclusion walk, configuration, browser bootstrap
//! - [`tables`]: columns and [`ClickableTable`]
//! - [`urls`]: Part Vault route reversal
//! - [`testing`]: [`MemoryDocument`](testing::MemoryDocument) and
//!   [`RecordingNavigator`](testing::RecordingNavigator)
//! - [`logging`]: console / tracing logging macros
//!
//! ## Browser usage
//!
//! ```js
//! import init, { startRowNavigator } from "./partvault_pages.js";
//!
//! await init();
//! startRowNavigator();
//! ```
//!
//! Rows are bound once, when the document structure is available. Rows
//! inserted later are only bound by an explicit `rebindRowNavigator()`.

#![warn(missing_docs)]

pub mod dom;
pub mod html;
pub mod logging;
pub mod navigate;
pub mod rows;
pub mod tables;
pub mod testing;
pub mod urls;

pub use dom::DomNode;
pub use navigate::{Navigate, NavigationError};
pub use rows::{
	BoundRows, ClickOutcome, ExclusionSet, InteractiveKind, RowNavigator, RowNavigatorConfig,
};
pub use tables::ClickableTable;

#[cfg(target_arch = "wasm32")]
pub use navigate::LocationNavigator;
