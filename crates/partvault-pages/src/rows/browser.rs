//! Browser bootstrap for clickable rows
//!
//! Binds `web_sys::Element` rows once the document's structure is parsed
//! and keeps the click listeners alive for the lifetime of the page.

use super::config::RowNavigatorConfig;
use super::navigator::{BindError, BoundRows, RowNavigator};
use crate::navigate::LocationNavigator;
use crate::{error_log, info_log, warn_log};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

thread_local! {
	static INSTALLED: RefCell<Option<DocumentBinding>> = const { RefCell::new(None) };
}

/// A click listener attached to one row. Dropping it detaches the listener.
pub struct ClickListener {
	element: Element,
	closure: Closure<dyn FnMut(Event)>,
}

impl ClickListener {
	/// Attaches a click listener that forwards to `navigator`.
	pub fn attach(navigator: &RowNavigator, row: &Element) -> Result<Self, BindError> {
		let handler_navigator = navigator.clone();
		let handler_row = row.clone();
		let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
			// Text nodes cannot be event targets, so a non-element target
			// only happens for synthetic events; treat those as row clicks.
			let origin = event
				.target()
				.and_then(|target| target.dyn_into::<Element>().ok())
				.unwrap_or_else(|| handler_row.clone());
			handler_navigator.handle_click(&handler_row, &origin);
		});

		row.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
			.map_err(|err| BindError::Listener(format!("{:?}", err)))?;

		Ok(Self {
			element: row.clone(),
			closure,
		})
	}
}

impl Drop for ClickListener {
	fn drop(&mut self) {
		let _ = self
			.element
			.remove_event_listener_with_callback("click", self.closure.as_ref().unchecked_ref());
	}
}

/// Rows of a document bound to live click listeners.
pub struct DocumentBinding {
	rows: BoundRows<Element>,
	listeners: Vec<ClickListener>,
}

impl DocumentBinding {
	/// Returns the bound rows.
	pub fn rows(&self) -> &BoundRows<Element> {
		&self.rows
	}

	/// Returns the number of attached listeners.
	pub fn listener_count(&self) -> usize {
		self.listeners.len()
	}

	/// Binds qualifying rows that appeared since the last scan.
	///
	/// Nothing calls this automatically; pages that inject rows after load
	/// call it (or [`rebind_installed`]) once the new rows are in place.
	/// Rows are recorded as bound only once every new listener is attached;
	/// on error the binding is left as it was and a later rebind retries.
	pub fn rebind(&mut self, document: &Document) -> Result<usize, BindError> {
		let candidates = query_rows(self.rows.navigator().config(), document)?;
		let navigator = self.rows.navigator().clone();
		let fresh = navigator.unbound(&self.rows, candidates);

		let listeners = fresh
			.iter()
			.map(|row| ClickListener::attach(&navigator, row))
			.collect::<Result<Vec<_>, _>>()?;

		let added = navigator.bind_more(&mut self.rows, fresh);
		self.listeners.extend(listeners);
		Ok(added.len())
	}
}

fn query_rows(config: &RowNavigatorConfig, document: &Document) -> Result<Vec<Element>, BindError> {
	let nodes = document
		.query_selector_all(&config.row_selector())
		.map_err(|err| BindError::Query(format!("{:?}", err)))?;

	let mut rows = Vec::with_capacity(nodes.length() as usize);
	for index in 0..nodes.length() {
		if let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
			rows.push(element);
		}
	}
	Ok(rows)
}

/// Binds every qualifying row currently in `document`.
pub fn bind_document(navigator: &RowNavigator, document: &Document) -> Result<DocumentBinding, BindError> {
	let rows = navigator.bind(query_rows(navigator.config(), document)?);
	let listeners = rows
		.rows()
		.iter()
		.map(|row| ClickListener::attach(navigator, row))
		.collect::<Result<Vec<_>, _>>()?;

	info_log!("Bound {} clickable rows", rows.len());
	Ok(DocumentBinding { rows, listeners })
}

/// Binds rows once the document structure is available.
///
/// If the document is still loading, binding is deferred to
/// `DOMContentLoaded`; otherwise it happens immediately. The resulting
/// binding replaces any previously installed one.
pub fn install(navigator: RowNavigator) -> Result<(), BindError> {
	let document = web_sys::window()
		.and_then(|window| window.document())
		.ok_or(BindError::DocumentUnavailable)?;

	if document.ready_state() == "loading" {
		return install_on_content_loaded(navigator, &document);
	}

	let binding = bind_document(&navigator, &document)?;
	INSTALLED.with(|slot| *slot.borrow_mut() = Some(binding));
	Ok(())
}

/// Installs a binding for `document` when it fires `DOMContentLoaded`.
///
/// The listener runs at most once.
pub fn install_on_content_loaded(navigator: RowNavigator, document: &Document) -> Result<(), BindError> {
	let deferred_document = document.clone();
	let on_ready = Closure::once(move || match bind_document(&navigator, &deferred_document) {
		Ok(binding) => INSTALLED.with(|slot| *slot.borrow_mut() = Some(binding)),
		Err(err) => error_log!("Failed to bind clickable rows: {}", err),
	});

	let options = web_sys::AddEventListenerOptions::new();
	options.set_once(true);
	document
		.add_event_listener_with_callback_and_add_event_listener_options(
			"DOMContentLoaded",
			on_ready.as_ref().unchecked_ref(),
			&options,
		)
		.map_err(|err| BindError::Listener(format!("{:?}", err)))?;
	on_ready.forget();
	Ok(())
}

/// Drops the installed binding, detaching its listeners.
///
/// Returns the number of rows that were bound.
pub fn uninstall() -> usize {
	INSTALLED
		.with(|slot| slot.borrow_mut().take())
		.map_or(0, |binding| binding.rows().len())
}

/// Returns true if a binding is installed.
pub fn is_installed() -> bool {
	INSTALLED.with(|slot| slot.borrow().is_some())
}

/// Re-scans the document for rows added after the installed binding.
///
/// Returns the number of newly bound rows, or 0 if nothing is installed.
#[wasm_bindgen(js_name = rebindRowNavigator)]
pub fn rebind_installed() -> Result<usize, JsValue> {
	let document = web_sys::window()
		.and_then(|window| window.document())
		.ok_or_else(|| JsValue::from_str(&BindError::DocumentUnavailable.to_string()))?;

	INSTALLED.with(|slot| match slot.borrow_mut().as_mut() {
		Some(binding) => binding
			.rebind(&document)
			.map_err(|err| JsValue::from_str(&err.to_string())),
		None => Ok(0),
	})
}

/// Reads the window configuration, falling back to the defaults when it
/// is malformed.
pub fn window_config() -> RowNavigatorConfig {
	RowNavigatorConfig::from_window().unwrap_or_else(|err| {
		warn_log!("{}; using default row navigator config", err);
		RowNavigatorConfig::default()
	})
}

/// Page bootstrap entry point.
///
/// Reads the optional window configuration, then installs a navigator
/// backed by `window.location`.
#[wasm_bindgen(js_name = startRowNavigator)]
pub fn start() {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	if let Err(err) = install(RowNavigator::new(window_config(), LocationNavigator)) {
		error_log!("Failed to install row navigator: {}", err);
	}
}
