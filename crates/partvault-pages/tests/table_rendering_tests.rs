//! Integration tests for clickable table rendering
//!
//! These tests verify the list tables Part Vault renders server-side:
//! 1. Rows carry the marker class and target attribute the navigator reads
//! 2. Interactive cells use tags from the exclusion set
//! 3. Text and attribute values are escaped

use partvault_pages::rows::{ExclusionSet, RowNavigatorConfig};
use partvault_pages::tables::ClickableTable;
use partvault_pages::tables::columns::{ButtonColumn, CheckBoxColumn, LinkColumn, TextColumn};
use partvault_pages::urls;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn items_table() -> ClickableTable {
	ClickableTable::for_route("item", &[("item_id", "id")])
		.unwrap()
		.class("table table-hover")
		.column(CheckBoxColumn::new("selected", ""))
		.column(TextColumn::new("name", "Name"))
		.column(TextColumn::new("serial", "Serial").placeholder("-"))
		.column(LinkColumn::with_text("name", "", "/item/{id}/edit/", "Edit"))
		.column(ButtonColumn::new("delete", "", "Delete", "/item/{id}/delete/"))
}

#[fixture]
fn items() -> Vec<Value> {
	vec![
		json!({"id": 1, "name": "Oscilloscope", "serial": "RTB-001"}),
		json!({"id": 2, "name": "Bench PSU", "serial": null}),
	]
}

#[rstest]
fn test_items_table_rows(items_table: ClickableTable, items: Vec<Value>) {
	let html = items_table.render(&items);

	assert!(html.starts_with("<table class=\"table table-hover\"><thead>"));
	assert!(html.contains("<tr class=\"clickable-row\" data-href=\"/item/1/\">"));
	assert!(html.contains("<tr class=\"clickable-row\" data-href=\"/item/2/\">"));
	assert_eq!(html.matches("clickable-row").count(), 2);
	assert!(html.ends_with("</tbody></table>"));
}

#[rstest]
fn test_row_targets_match_url_reversal(items_table: ClickableTable, items: Vec<Value>) {
	let html = items_table.render(&items);

	for id in ["1", "2"] {
		let href = urls::reverse("item", &[("item_id", id)]).unwrap();
		assert!(html.contains(&format!("data-href=\"{}\"", href)));
	}
}

#[rstest]
fn test_interactive_cells_use_excluded_tags(items_table: ClickableTable) {
	let html = items_table.render_row(&json!({"id": 7, "name": "Probe"}));
	let excluded = ExclusionSet::all();

	for tag in ["a", "input", "button"] {
		assert!(html.contains(&format!("<{} ", tag)), "missing <{}> in {}", tag, html);
		assert!(excluded.match_tag(tag).is_some());
	}
}

#[rstest]
fn test_row_expected_markup(items_table: ClickableTable) {
	let html = items_table.render_row(&json!({"id": 2, "name": "Bench PSU", "serial": null}));

	assert_eq!(
		html,
		"<tr class=\"clickable-row\" data-href=\"/item/2/\">\
		 <td><input type=\"checkbox\" name=\"selected\" value=\"2\"></td>\
		 <td>Bench PSU</td>\
		 <td>-</td>\
		 <td><a href=\"/item/2/edit/\">Edit</a></td>\
		 <td><button type=\"button\" name=\"delete\" data-action=\"/item/2/delete/\">Delete</button></td>\
		 </tr>"
	);
}

#[rstest]
fn test_values_are_escaped() {
	let table = ClickableTable::new("/search/?q={name}").column(TextColumn::new("name", "Name"));

	let html = table.render_row(&json!({"name": "<script>\"x\" & y</script>"}));

	assert!(!html.contains("<script>"));
	assert!(html.contains("<td>&lt;script&gt;&quot;x&quot; &amp; y&lt;/script&gt;</td>"));
	assert!(html.contains("data-href=\"/search/?q=%3Cscript%3E%22x%22%20%26%20y%3C%2Fscript%3E\""));
}

#[rstest]
fn test_rows_without_key_do_not_participate(items_table: ClickableTable) {
	let html = items_table.render(&[
		json!({"id": 1, "name": "Saved"}),
		json!({"name": "Draft"}),
	]);

	assert_eq!(html.matches("data-href").count(), 1);
	assert!(html.contains("<tr><td><input"));
}

#[rstest]
fn test_collections_table_with_shared_config() {
	let config = RowNavigatorConfig::from_json(r#"{"marker_class": "collection-row"}"#).unwrap();
	let table = ClickableTable::for_route("collection", &[("collection_id", "id")])
		.unwrap()
		.config(config)
		.unwrap()
		.column(TextColumn::new("name", "Name"))
		.column(TextColumn::new("asset_tag_prefix", "Prefix"));

	let html = table.render(&[json!({"id": 3, "name": "Lab", "asset_tag_prefix": "LB"})]);

	assert!(html.contains("<tr class=\"collection-row\" data-href=\"/collection/3/\"><td>Lab</td><td>LB</td></tr>"));
	assert!(html.contains("<th>Name</th><th>Prefix</th>"));
}
