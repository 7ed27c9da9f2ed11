//! Clickable list tables
//!
//! This module provides access to partvault-pages: server-side rendering of
//! the item and collection tables, and the WASM row navigator that makes
//! their rows clickable.
//!
//! ## Example
//!
//! ```rust
//! use partvault::pages::tables::ClickableTable;
//! use partvault::pages::tables::columns::{LinkColumn, TextColumn};
//! use serde_json::json;
//!
//! let table = ClickableTable::new("/item/{id}/")
//!     .column(TextColumn::new("name", "Name"))
//!     .column(LinkColumn::with_text("name", "", "/item/{id}/edit/", "Edit"));
//!
//! let html = table.render(&[json!({"id": 42, "name": "Logic analyzer"})]);
//! assert!(html.contains("data-href=\"/item/42/\""));
//! ```

pub use partvault_pages::*;
