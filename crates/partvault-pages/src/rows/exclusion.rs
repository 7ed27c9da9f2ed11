//! Interactive-exclusion check
//!
//! Clicks that start on (or inside) a nested control such as a link or a
//! button belong to that control. This module decides whether a click
//! origin falls inside such a control before the row boundary is reached.

use crate::dom::{DomNode, ancestors};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Element categories that keep their native click behavior inside a
/// clickable row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractiveKind {
	/// `<a>`
	Link,
	/// `<button>`
	Button,
	/// `<input>`
	Input,
	/// `<label>`
	Label,
	/// `<select>`
	Select,
	/// `<textarea>`
	#[serde(alias = "text-area", alias = "text_area")]
	TextArea,
}

impl InteractiveKind {
	/// All kinds, in declaration order.
	pub const ALL: [InteractiveKind; 6] = [
		Self::Link,
		Self::Button,
		Self::Input,
		Self::Label,
		Self::Select,
		Self::TextArea,
	];

	/// Maps an HTML tag name to its kind. Comparison ignores ASCII case.
	pub fn from_tag(tag: &str) -> Option<Self> {
		match tag.to_ascii_lowercase().as_str() {
			"a" => Some(Self::Link),
			"button" => Some(Self::Button),
			"input" => Some(Self::Input),
			"label" => Some(Self::Label),
			"select" => Some(Self::Select),
			"textarea" => Some(Self::TextArea),
			_ => None,
		}
	}

	/// Returns the HTML tag name for this kind.
	pub fn tag(&self) -> &'static str {
		match self {
			Self::Link => "a",
			Self::Button => "button",
			Self::Input => "input",
			Self::Label => "label",
			Self::Select => "select",
			Self::TextArea => "textarea",
		}
	}
}

impl fmt::Display for InteractiveKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.tag())
	}
}

/// Set of element kinds whose clicks never trigger row navigation.
///
/// The default set contains every [`InteractiveKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionSet {
	kinds: BTreeSet<InteractiveKind>,
}

impl Default for ExclusionSet {
	fn default() -> Self {
		Self::all()
	}
}

impl ExclusionSet {
	/// The full set: link, button, input, label, select, text-area.
	pub fn all() -> Self {
		Self {
			kinds: InteractiveKind::ALL.into_iter().collect(),
		}
	}

	/// An empty set. Every click inside a row navigates.
	pub fn empty() -> Self {
		Self {
			kinds: BTreeSet::new(),
		}
	}

	/// Returns the set with `kind` added.
	pub fn with(mut self, kind: InteractiveKind) -> Self {
		self.kinds.insert(kind);
		self
	}

	/// Returns the set with `kind` removed.
	pub fn without(mut self, kind: InteractiveKind) -> Self {
		self.kinds.remove(&kind);
		self
	}

	/// Returns true if `kind` is excluded.
	pub fn contains(&self, kind: InteractiveKind) -> bool {
		self.kinds.contains(&kind)
	}

	/// Returns the kind of `tag` if that tag is excluded.
	pub fn match_tag(&self, tag: &str) -> Option<InteractiveKind> {
		InteractiveKind::from_tag(tag).filter(|kind| self.contains(*kind))
	}

	/// Iterates over the excluded kinds.
	pub fn iter(&self) -> impl Iterator<Item = InteractiveKind> + '_ {
		self.kinds.iter().copied()
	}

	/// Returns the number of excluded kinds.
	pub fn len(&self) -> usize {
		self.kinds.len()
	}

	/// Returns true if nothing is excluded.
	pub fn is_empty(&self) -> bool {
		self.kinds.is_empty()
	}
}

impl FromIterator<InteractiveKind> for ExclusionSet {
	fn from_iter<I: IntoIterator<Item = InteractiveKind>>(iter: I) -> Self {
		Self {
			kinds: iter.into_iter().collect(),
		}
	}
}

/// Finds the first excluded element between `origin` and `row`, both
/// inclusive.
///
/// The walk stops at `row`; interactive ancestors of the row itself (for
/// example a table wrapped in a `<label>`) are not considered. If `origin`
/// is not inside `row` the walk runs to the document root.
pub fn find_excluded_ancestor<N: DomNode>(
	origin: &N,
	row: &N,
	excluded: &ExclusionSet,
) -> Option<(InteractiveKind, N)> {
	if excluded.is_empty() {
		return None;
	}

	for node in ancestors(origin) {
		if let Some(kind) = excluded.match_tag(&node.tag_name()) {
			return Some((kind, node));
		}
		if node.same_node(row) {
			break;
		}
	}
	None
}
