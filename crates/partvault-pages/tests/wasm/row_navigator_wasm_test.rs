//! Browser tests for row navigation
//!
//! Binds real DOM rows and fires native clicks. Navigation goes to a
//! `RecordingNavigator` so the test page never leaves.
//!
//! Run with: `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use partvault_pages::rows::{
	ConfigError, InteractiveKind, RowNavigator, RowNavigatorConfig, WINDOW_CONFIG_KEY, bind_document,
	install, install_on_content_loaded, is_installed, rebind_installed, uninstall, window_config,
};
use partvault_pages::testing::RecordingNavigator;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

fn mount(html: &str) -> Element {
	let doc = document();
	let container = doc.create_element("div").unwrap();
	container.set_inner_html(html);
	doc.body().unwrap().append_child(&container).unwrap();
	container
}

fn click(container: &Element, selector: &str) {
	container
		.query_selector(selector)
		.unwrap()
		.unwrap()
		.dyn_into::<HtmlElement>()
		.unwrap()
		.click();
}

fn set_window_config(json: Option<&str>) {
	let value = match json {
		Some(json) => js_sys::JSON::parse(json).unwrap(),
		None => JsValue::UNDEFINED,
	};
	let window = web_sys::window().unwrap();
	js_sys::Reflect::set(&window, &WINDOW_CONFIG_KEY.into(), &value).unwrap();
}

fn navigator(recorder: &RecordingNavigator) -> RowNavigator {
	RowNavigator::new(RowNavigatorConfig::default(), recorder.clone())
}

#[wasm_bindgen_test]
fn test_click_on_cell_navigates() {
	let container = mount(
		r#"<table><tbody>
			<tr class="clickable-row" data-href="/item/42/"><td id="cell-a">Scope</td></tr>
		</tbody></table>"#,
	);
	let recorder = RecordingNavigator::new();
	let binding = bind_document(&navigator(&recorder), &document()).unwrap();

	click(&container, "#cell-a");

	assert_eq!(recorder.visits(), vec!["/item/42/".to_string()]);
	drop(binding);
	container.remove();
}

#[wasm_bindgen_test]
fn test_click_on_nested_button_is_excluded() {
	let container = mount(
		r#"<table><tbody>
			<tr class="clickable-row" data-href="/item/42/">
				<td><button type="button" id="delete-b"><span>Delete</span></button></td>
			</tr>
		</tbody></table>"#,
	);
	let recorder = RecordingNavigator::new();
	let binding = bind_document(&navigator(&recorder), &document()).unwrap();

	click(&container, "#delete-b span");

	assert!(recorder.visits().is_empty());
	drop(binding);
	container.remove();
}

#[wasm_bindgen_test]
fn test_row_without_target_is_not_bound() {
	let container = mount(
		r#"<table><tbody>
			<tr class="clickable-row"><td id="cell-d">No target</td></tr>
		</tbody></table>"#,
	);
	let recorder = RecordingNavigator::new();
	let binding = bind_document(&navigator(&recorder), &document()).unwrap();

	assert_eq!(binding.listener_count(), 0);
	click(&container, "#cell-d");
	assert!(recorder.visits().is_empty());
	container.remove();
}

#[wasm_bindgen_test]
fn test_late_rows_need_rebind() {
	let container = mount("<table><tbody id=\"late-body\"></tbody></table>");
	let recorder = RecordingNavigator::new();
	let mut binding = bind_document(&navigator(&recorder), &document()).unwrap();

	container
		.query_selector("#late-body")
		.unwrap()
		.unwrap()
		.set_inner_html(r#"<tr class="clickable-row" data-href="/item/7/"><td id="cell-e">Late</td></tr>"#);

	click(&container, "#cell-e");
	assert!(recorder.visits().is_empty());

	assert_eq!(binding.rebind(&document()).unwrap(), 1);
	click(&container, "#cell-e");
	assert_eq!(recorder.visits(), vec!["/item/7/".to_string()]);
	container.remove();
}

#[wasm_bindgen_test]
fn test_dropping_binding_detaches_listeners() {
	let container = mount(
		r#"<table><tbody>
			<tr class="clickable-row" data-href="/item/3/"><td id="cell-f">Gone</td></tr>
		</tbody></table>"#,
	);
	let recorder = RecordingNavigator::new();
	let binding = bind_document(&navigator(&recorder), &document()).unwrap();
	drop(binding);

	click(&container, "#cell-f");

	assert!(recorder.visits().is_empty());
	container.remove();
}

#[wasm_bindgen_test]
fn test_install_binds_parsed_document_immediately() {
	let container = mount(
		r#"<table><tbody>
			<tr class="clickable-row" data-href="/item/11/"><td id="cell-g">Installed</td></tr>
		</tbody></table>"#,
	);
	let recorder = RecordingNavigator::new();

	assert_ne!(document().ready_state(), "loading");
	install(navigator(&recorder)).unwrap();
	assert!(is_installed());

	click(&container, "#cell-g");
	assert_eq!(recorder.visits(), vec!["/item/11/".to_string()]);

	assert_eq!(uninstall(), 1);
	click(&container, "#cell-g");
	assert_eq!(recorder.count(), 1);
	container.remove();
}

#[wasm_bindgen_test]
fn test_rebind_installed_picks_up_late_rows() {
	let container = mount("<table><tbody id=\"installed-body\"></tbody></table>");
	let recorder = RecordingNavigator::new();
	install(navigator(&recorder)).unwrap();

	container
		.query_selector("#installed-body")
		.unwrap()
		.unwrap()
		.set_inner_html(r#"<tr class="clickable-row" data-href="/item/12/"><td id="cell-h">Late</td></tr>"#);

	assert_eq!(rebind_installed().unwrap(), 1);
	assert_eq!(rebind_installed().unwrap(), 0);
	click(&container, "#cell-h");
	assert_eq!(recorder.visits(), vec!["/item/12/".to_string()]);

	uninstall();
	assert_eq!(rebind_installed().unwrap(), 0);
	container.remove();
}

#[wasm_bindgen_test]
fn test_install_deferred_until_content_loaded() {
	let container = mount(
		r#"<table><tbody>
			<tr class="clickable-row" data-href="/item/13/"><td id="cell-i">Deferred</td></tr>
		</tbody></table>"#,
	);
	let recorder = RecordingNavigator::new();
	uninstall();

	install_on_content_loaded(navigator(&recorder), &document()).unwrap();
	assert!(!is_installed());
	click(&container, "#cell-i");
	assert!(recorder.visits().is_empty());

	let loaded = Event::new("DOMContentLoaded").unwrap();
	document().dispatch_event(&loaded).unwrap();
	assert!(is_installed());
	click(&container, "#cell-i");
	assert_eq!(recorder.visits(), vec!["/item/13/".to_string()]);

	uninstall();
	container.remove();
}

#[wasm_bindgen_test]
fn test_window_config_is_read() {
	set_window_config(Some(r#"{"marker_class": "vault-row", "excluded": ["button"]}"#));

	let config = RowNavigatorConfig::from_window().unwrap();
	assert_eq!(config.marker_class, "vault-row");
	assert_eq!(config.target_attribute, "data-href");
	assert!(config.excluded.contains(InteractiveKind::Button));
	assert!(!config.excluded.contains(InteractiveKind::Link));
	assert_eq!(window_config(), config);

	set_window_config(None);
	assert_eq!(RowNavigatorConfig::from_window().unwrap(), RowNavigatorConfig::default());
}

#[wasm_bindgen_test]
fn test_malformed_window_config_falls_back_to_defaults() {
	set_window_config(Some(r#"{"excluded": ["div"]}"#));

	assert!(matches!(
		RowNavigatorConfig::from_window(),
		Err(ConfigError::Parse(_))
	));
	assert_eq!(window_config(), RowNavigatorConfig::default());

	set_window_config(Some(r#"{"marker_class": "item.row"}"#));
	assert!(matches!(
		RowNavigatorConfig::from_window(),
		Err(ConfigError::Invalid { .. })
	));
	assert_eq!(window_config(), RowNavigatorConfig::default());

	set_window_config(None);
}
