//! DOM abstraction layer
//!
//! Row navigation only needs to look at an element's tag, classes,
//! attributes and parent. [`DomNode`] captures exactly that, so the
//! exclusion walk and click handling run unchanged against the browser
//! DOM (`web_sys::Element`) and against the in-memory document in
//! [`crate::testing`].

/// Read-only view of an element in a document tree.
pub trait DomNode: Clone {
	/// Returns the element's tag name in lowercase (`"tr"`, `"button"`, ...).
	fn tag_name(&self) -> String;

	/// Returns the parent element, or `None` at the document root.
	fn parent(&self) -> Option<Self>;

	/// Returns true if `other` refers to the same element.
	fn same_node(&self, other: &Self) -> bool;

	/// Returns the value of an attribute, if present.
	fn attribute(&self, name: &str) -> Option<String>;

	/// Returns true if the element's class list contains `class`.
	fn has_class(&self, class: &str) -> bool;

	/// Returns true if the element carries the attribute (even if empty).
	fn has_attribute(&self, name: &str) -> bool {
		self.attribute(name).is_some()
	}
}

/// Iterator over an element and its ancestors, innermost first.
pub struct Ancestors<N: DomNode> {
	next: Option<N>,
}

impl<N: DomNode> Iterator for Ancestors<N> {
	type Item = N;

	fn next(&mut self) -> Option<N> {
		let current = self.next.take()?;
		self.next = current.parent();
		Some(current)
	}
}

/// Walks from `node` up to the document root, `node` included.
pub fn ancestors<N: DomNode>(node: &N) -> Ancestors<N> {
	Ancestors {
		next: Some(node.clone()),
	}
}

#[cfg(target_arch = "wasm32")]
mod browser {
	use super::DomNode;
	use wasm_bindgen::JsCast;

	impl DomNode for web_sys::Element {
		fn tag_name(&self) -> String {
			web_sys::Element::tag_name(self).to_ascii_lowercase()
		}

		fn parent(&self) -> Option<Self> {
			self.parent_element()
		}

		fn same_node(&self, other: &Self) -> bool {
			self.is_same_node(Some(other.unchecked_ref::<web_sys::Node>()))
		}

		fn attribute(&self, name: &str) -> Option<String> {
			self.get_attribute(name)
		}

		fn has_class(&self, class: &str) -> bool {
			self.class_list().contains(class)
		}

		fn has_attribute(&self, name: &str) -> bool {
			web_sys::Element::has_attribute(self, name)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::MemoryDocument;
	use rstest::rstest;

	#[rstest]
	fn test_ancestors_innermost_first() {
		let doc = MemoryDocument::new();
		let table = doc.create_element("table");
		let row = doc.create_element("tr");
		let cell = doc.create_element("td");
		doc.append_child(&table, &row);
		doc.append_child(&row, &cell);

		let tags: Vec<String> = ancestors(&cell).map(|n| n.tag_name()).collect();
		assert_eq!(tags, vec!["td", "tr", "table"]);
	}

	#[rstest]
	fn test_has_attribute_default_uses_attribute() {
		let doc = MemoryDocument::new();
		let row = doc.create_element("tr");
		assert!(!row.has_attribute("data-href"));
		doc.set_attribute(&row, "data-href", "");
		assert!(row.has_attribute("data-href"));
	}
}
