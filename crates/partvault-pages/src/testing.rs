//! Testing utilities
//!
//! [`MemoryDocument`] is a small element tree implementing [`DomNode`], and
//! [`RecordingNavigator`] records navigations instead of performing them.
//! Together they let row navigation run natively, without a browser.

use crate::dom::DomNode;
use crate::navigate::{Navigate, NavigationError};
use crate::rows::RowNavigatorConfig;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

#[derive(Debug)]
struct NodeData {
	tag: String,
	attributes: BTreeMap<String, String>,
	classes: Vec<String>,
	parent: Option<usize>,
	children: Vec<usize>,
}

#[derive(Debug)]
struct Tree {
	nodes: Vec<NodeData>,
}

impl Tree {
	fn push(&mut self, tag: &str) -> usize {
		self.nodes.push(NodeData {
			tag: tag.to_ascii_lowercase(),
			attributes: BTreeMap::new(),
			classes: Vec::new(),
			parent: None,
			children: Vec::new(),
		});
		self.nodes.len() - 1
	}
}

/// An in-memory document with a `<body>` root.
#[derive(Clone)]
pub struct MemoryDocument {
	tree: Rc<RefCell<Tree>>,
}

impl fmt::Debug for MemoryDocument {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemoryDocument")
			.field("nodes", &self.tree.borrow().nodes.len())
			.finish()
	}
}

impl Default for MemoryDocument {
	fn default() -> Self {
		Self::new()
	}
}

const BODY: usize = 0;

impl MemoryDocument {
	/// Creates a document containing only `<body>`.
	pub fn new() -> Self {
		let mut tree = Tree { nodes: Vec::new() };
		tree.push("body");
		Self {
			tree: Rc::new(RefCell::new(tree)),
		}
	}

	fn node(&self, id: usize) -> MemoryNode {
		MemoryNode {
			tree: Rc::clone(&self.tree),
			id,
		}
	}

	/// Returns the `<body>` element.
	pub fn body(&self) -> MemoryNode {
		self.node(BODY)
	}

	/// Creates a detached element.
	pub fn create_element(&self, tag: &str) -> MemoryNode {
		let id = self.tree.borrow_mut().push(tag);
		self.node(id)
	}

	/// Sets (or replaces) an attribute.
	pub fn set_attribute(&self, node: &MemoryNode, name: &str, value: &str) {
		self.tree.borrow_mut().nodes[node.id]
			.attributes
			.insert(name.to_string(), value.to_string());
	}

	/// Removes an attribute.
	pub fn remove_attribute(&self, node: &MemoryNode, name: &str) {
		self.tree.borrow_mut().nodes[node.id].attributes.remove(name);
	}

	/// Adds a class to the element's class list.
	pub fn add_class(&self, node: &MemoryNode, class: &str) {
		let mut tree = self.tree.borrow_mut();
		let classes = &mut tree.nodes[node.id].classes;
		if !classes.iter().any(|c| c == class) {
			classes.push(class.to_string());
		}
	}

	/// Appends `child` to `parent`, detaching it from any previous parent.
	pub fn append_child(&self, parent: &MemoryNode, child: &MemoryNode) {
		let mut tree = self.tree.borrow_mut();
		if let Some(old) = tree.nodes[child.id].parent.take() {
			tree.nodes[old].children.retain(|&c| c != child.id);
		}
		tree.nodes[child.id].parent = Some(parent.id);
		tree.nodes[parent.id].children.push(child.id);
	}

	/// Creates an element and appends it to `parent`.
	pub fn append_element(&self, parent: &MemoryNode, tag: &str) -> MemoryNode {
		let child = self.create_element(tag);
		self.append_child(parent, &child);
		child
	}

	/// Returns elements under `<body>` that carry the configured marker
	/// class and target attribute, in document order.
	pub fn select_rows(&self, config: &RowNavigatorConfig) -> Vec<MemoryNode> {
		let mut rows = Vec::new();
		let mut stack = vec![BODY];
		let tree = self.tree.borrow();
		while let Some(id) = stack.pop() {
			let data = &tree.nodes[id];
			if data.classes.iter().any(|c| *c == config.marker_class)
				&& data.attributes.contains_key(&config.target_attribute)
			{
				rows.push(id);
			}
			stack.extend(data.children.iter().rev());
		}
		drop(tree);
		rows.into_iter().map(|id| self.node(id)).collect()
	}
}

/// Handle to an element of a [`MemoryDocument`].
#[derive(Clone)]
pub struct MemoryNode {
	tree: Rc<RefCell<Tree>>,
	id: usize,
}

impl MemoryNode {
	/// Returns the child elements in order.
	pub fn children(&self) -> Vec<MemoryNode> {
		self.tree.borrow().nodes[self.id]
			.children
			.iter()
			.map(|&id| MemoryNode {
				tree: Rc::clone(&self.tree),
				id,
			})
			.collect()
	}
}

impl PartialEq for MemoryNode {
	fn eq(&self, other: &Self) -> bool {
		self.same_node(other)
	}
}

impl Eq for MemoryNode {}

impl fmt::Debug for MemoryNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let tree = self.tree.borrow();
		let data = &tree.nodes[self.id];
		f.debug_struct("MemoryNode")
			.field("id", &self.id)
			.field("tag", &data.tag)
			.field("classes", &data.classes)
			.field("attributes", &data.attributes)
			.finish()
	}
}

impl DomNode for MemoryNode {
	fn tag_name(&self) -> String {
		self.tree.borrow().nodes[self.id].tag.clone()
	}

	fn parent(&self) -> Option<Self> {
		let parent = self.tree.borrow().nodes[self.id].parent?;
		Some(MemoryNode {
			tree: Rc::clone(&self.tree),
			id: parent,
		})
	}

	fn same_node(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.tree, &other.tree) && self.id == other.id
	}

	fn attribute(&self, name: &str) -> Option<String> {
		self.tree.borrow().nodes[self.id].attributes.get(name).cloned()
	}

	fn has_class(&self, class: &str) -> bool {
		self.tree.borrow().nodes[self.id]
			.classes
			.iter()
			.any(|c| c == class)
	}
}

/// A [`Navigate`] implementation that records locations.
///
/// Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
	visits: Rc<RefCell<Vec<String>>>,
	failure: Option<String>,
}

impl RecordingNavigator {
	/// Creates a recorder whose navigations succeed.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a recorder whose navigations are recorded and then rejected.
	pub fn failing(reason: impl Into<String>) -> Self {
		Self {
			visits: Rc::default(),
			failure: Some(reason.into()),
		}
	}

	/// Returns every requested location in order.
	pub fn visits(&self) -> Vec<String> {
		self.visits.borrow().clone()
	}

	/// Returns the number of requested navigations.
	pub fn count(&self) -> usize {
		self.visits.borrow().len()
	}

	/// Returns the most recent location.
	pub fn last(&self) -> Option<String> {
		self.visits.borrow().last().cloned()
	}

	/// Forgets recorded navigations.
	pub fn clear(&self) {
		self.visits.borrow_mut().clear();
	}
}

impl Navigate for RecordingNavigator {
	fn navigate(&self, location: &str) -> Result<(), NavigationError> {
		self.visits.borrow_mut().push(location.to_string());
		match &self.failure {
			Some(reason) => Err(NavigationError::Rejected(reason.clone())),
			None => Ok(()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_append_child_reparents() {
		let doc = MemoryDocument::new();
		let first = doc.append_element(&doc.body(), "div");
		let second = doc.append_element(&doc.body(), "div");
		let span = doc.append_element(&first, "span");

		doc.append_child(&second, &span);

		assert!(first.children().is_empty());
		assert_eq!(second.children(), vec![span.clone()]);
		assert_eq!(span.parent(), Some(second));
	}

	#[rstest]
	fn test_select_rows_document_order() {
		let doc = MemoryDocument::new();
		let config = RowNavigatorConfig::default();
		let table = doc.append_element(&doc.body(), "table");
		let mut expected = Vec::new();
		for id in 1..=3 {
			let row = doc.append_element(&table, "tr");
			doc.add_class(&row, "clickable-row");
			doc.set_attribute(&row, "data-href", &format!("/item/{}/", id));
			expected.push(row);
		}
		let detached = doc.create_element("tr");
		doc.add_class(&detached, "clickable-row");
		doc.set_attribute(&detached, "data-href", "/item/4/");

		assert_eq!(doc.select_rows(&config), expected);
	}

	#[rstest]
	fn test_nodes_from_different_documents_differ() {
		let a = MemoryDocument::new();
		let b = MemoryDocument::new();
		assert_ne!(a.body(), b.body());
	}

	#[rstest]
	fn test_recording_navigator_last_and_clear() {
		let recorder = RecordingNavigator::new();
		recorder.navigate("/items/").unwrap();
		recorder.navigate("/item/1/").unwrap();
		assert_eq!(recorder.last().as_deref(), Some("/item/1/"));

		recorder.clear();
		assert_eq!(recorder.count(), 0);
	}
}
