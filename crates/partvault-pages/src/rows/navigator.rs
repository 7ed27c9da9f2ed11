//! Whole-row click navigation
//!
//! A [`RowNavigator`] binds qualifying rows once and turns a click on a
//! bound row into a full navigation to the row's target location, unless
//! the click started on a nested interactive element.

use super::config::RowNavigatorConfig;
use super::exclusion::{InteractiveKind, find_excluded_ancestor};
use crate::dom::{DomNode, ancestors};
use crate::navigate::{Navigate, NavigationError};
use crate::{debug_log, warn_log};
use std::fmt;
use std::rc::Rc;

/// Result of handling one click on a bound row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
	/// Navigation to the location was issued.
	Navigated(String),
	/// The click started inside an excluded element; nothing happened.
	Excluded(InteractiveKind),
	/// The row has no target location, or it is empty; nothing happened.
	MissingTarget,
	/// Navigation was issued and the effect reported an error.
	Failed(NavigationError),
}

impl ClickOutcome {
	/// Returns true if navigation was issued (whether or not it succeeded).
	pub fn is_navigation(&self) -> bool {
		matches!(self, Self::Navigated(_) | Self::Failed(_))
	}
}

/// Errors raised while binding rows in a browser document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
	/// No `document` is reachable.
	#[error("Document not available")]
	DocumentUnavailable,
	/// The row query failed.
	#[error("Row query failed: {0}")]
	Query(String),
	/// A listener could not be attached.
	#[error("Failed to attach click listener: {0}")]
	Listener(String),
}

/// Binds clickable rows and handles their clicks.
///
/// Cloning is cheap; clones share the configuration and the navigation
/// effect.
#[derive(Clone)]
pub struct RowNavigator {
	config: Rc<RowNavigatorConfig>,
	navigator: Rc<dyn Navigate>,
}

impl fmt::Debug for RowNavigator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RowNavigator")
			.field("config", &self.config)
			.finish_non_exhaustive()
	}
}

impl RowNavigator {
	/// Creates a navigator from a configuration and a navigation effect.
	pub fn new(config: RowNavigatorConfig, navigator: impl Navigate + 'static) -> Self {
		Self {
			config: Rc::new(config),
			navigator: Rc::new(navigator),
		}
	}

	/// Returns the configuration.
	pub fn config(&self) -> &RowNavigatorConfig {
		&self.config
	}

	/// Returns true if `row` carries both the marker class and the target
	/// attribute.
	pub fn qualifies<N: DomNode>(&self, row: &N) -> bool {
		row.has_class(&self.config.marker_class) && row.has_attribute(&self.config.target_attribute)
	}

	/// Binds every qualifying row among `candidates`.
	///
	/// Non-qualifying candidates and duplicates are skipped. Rows that
	/// appear later are not observed; see [`RowNavigator::bind_more`].
	pub fn bind<N, I>(&self, candidates: I) -> BoundRows<N>
	where
		N: DomNode,
		I: IntoIterator<Item = N>,
	{
		let mut bound = BoundRows {
			navigator: self.clone(),
			rows: Vec::new(),
		};
		self.bind_more(&mut bound, candidates);
		bound
	}

	/// Returns the qualifying rows among `candidates` that `bound` does not
	/// hold yet, without binding them.
	pub fn unbound<N, I>(&self, bound: &BoundRows<N>, candidates: I) -> Vec<N>
	where
		N: DomNode,
		I: IntoIterator<Item = N>,
	{
		let mut fresh: Vec<N> = Vec::new();
		for row in candidates {
			if self.qualifies(&row)
				&& !bound.contains(&row)
				&& !fresh.iter().any(|seen| seen.same_node(&row))
			{
				fresh.push(row);
			}
		}
		fresh
	}

	/// Adds qualifying rows that are not bound yet and returns them.
	pub fn bind_more<N, I>(&self, bound: &mut BoundRows<N>, candidates: I) -> Vec<N>
	where
		N: DomNode,
		I: IntoIterator<Item = N>,
	{
		let added = self.unbound(bound, candidates);
		bound.rows.extend(added.iter().cloned());
		added
	}

	/// Handles a click on `row` that originated at `origin`.
	///
	/// Runs the exclusion walk from `origin` up to `row`, reads the target
	/// location and issues at most one navigation. Never panics and never
	/// returns an error; failures are logged and reported in the outcome.
	pub fn handle_click<N: DomNode>(&self, row: &N, origin: &N) -> ClickOutcome {
		if let Some((kind, _)) = find_excluded_ancestor(origin, row, &self.config.excluded) {
			debug_log!("Row click inside <{}> left to the element", kind);
			return ClickOutcome::Excluded(kind);
		}

		let target = match row.attribute(&self.config.target_attribute) {
			Some(target) if !target.is_empty() => target,
			_ => {
				debug_log!("Row click ignored: no {}", self.config.target_attribute);
				return ClickOutcome::MissingTarget;
			}
		};

		match self.navigator.navigate(&target) {
			Ok(()) => ClickOutcome::Navigated(target),
			Err(err) => {
				warn_log!("Navigation to '{}' failed: {}", target, err);
				ClickOutcome::Failed(err)
			}
		}
	}
}

/// Rows bound by a [`RowNavigator`].
#[derive(Debug)]
pub struct BoundRows<N: DomNode> {
	navigator: RowNavigator,
	rows: Vec<N>,
}

impl<N: DomNode> BoundRows<N> {
	/// Returns the bound rows in binding order.
	pub fn rows(&self) -> &[N] {
		&self.rows
	}

	/// Returns the number of bound rows.
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	/// Returns true if no row is bound.
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Returns true if `row` is bound.
	pub fn contains(&self, row: &N) -> bool {
		self.rows.iter().any(|bound| bound.same_node(row))
	}

	/// Returns the navigator the rows are bound to.
	pub fn navigator(&self) -> &RowNavigator {
		&self.navigator
	}

	/// Delivers a click at `origin` the way the browser bubbles it.
	///
	/// Every bound row that is `origin` or one of its ancestors receives
	/// the click, innermost first. Returns one outcome per receiving row;
	/// an empty vector means no bound row saw the click.
	pub fn dispatch_click(&self, origin: &N) -> Vec<ClickOutcome> {
		let mut outcomes = Vec::new();
		for node in ancestors(origin) {
			if self.contains(&node) {
				outcomes.push(self.navigator.handle_click(&node, origin));
			}
		}
		outcomes
	}
}
