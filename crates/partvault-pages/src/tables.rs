//! Table rendering for list pages
//!
//! Server-side HTML for the item and collection lists. Rows carry the
//! clickable-row marker and target attribute consumed by
//! [`crate::rows::RowNavigator`]; cells may embed links, checkboxes and
//! buttons, which keep their own click behavior.

pub mod column;
pub mod columns;
pub mod table;

pub use column::Column;
pub use table::ClickableTable;
