//! Column type implementations
//!
//! - `TextColumn`: Escaped text
//! - `LinkColumn`: Column with hyperlink
//! - `CheckBoxColumn`: Column with checkbox
//! - `ButtonColumn`: Column with an action button
//!
//! Link, checkbox and button cells are interactive controls, so clicks on
//! them never trigger row navigation.

pub mod button;
pub mod checkbox;
pub mod link;
pub mod text;

// Re-exports
pub use button::ButtonColumn;
pub use checkbox::CheckBoxColumn;
pub use link::LinkColumn;
pub use text::TextColumn;
