//! Browser tests for the sidebar list. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use obstacle_map_wasm::bootstrap::decode_config;
use obstacle_map_wasm::dom::{self, DomList};
use obstacle_map_wasm::error::MapError;
use obstacle_map_wasm::map::ListSurface;
use obstacle_map_wasm::source::{load_or_log, GeoJsonSource, StaticSource};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_container(id: &str) -> Element {
    let document = dom::document().unwrap();
    let container = document.create_element("ul").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container
}

#[wasm_bindgen_test]
fn entries_carry_label_and_severity_class() {
    let container = fresh_container("list-classes");
    let mut list = DomList::new(dom::document().unwrap(), container.clone());

    list.append_entry("Weir", Some("red"), Box::new(|| {})).unwrap();
    list.append_entry("Inlet", None, Box::new(|| {})).unwrap();

    let items = container.children();
    assert_eq!(items.length(), 2);

    let first = items.item(0).unwrap();
    assert_eq!(first.text_content().as_deref(), Some("Weir"));
    assert!(first.class_list().contains("list-item"));
    assert!(first.class_list().contains("red"));

    let second = items.item(1).unwrap();
    assert_eq!(second.class_name(), "list-item");
}

#[wasm_bindgen_test]
fn click_runs_the_handler() {
    let container = fresh_container("list-click");
    let mut list = DomList::new(dom::document().unwrap(), container.clone());
    let clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&clicks);

    list.append_entry("Weir", Some("yellow"), Box::new(move || counter.set(counter.get() + 1)))
        .unwrap();

    let item: HtmlElement = container.first_element_child().unwrap().dyn_into().unwrap();
    item.click();
    item.click();
    assert_eq!(clicks.get(), 2);
}

#[wasm_bindgen_test]
fn clear_only_removes_own_entries() {
    let container = fresh_container("list-clear");
    container.set_inner_html("<li class=\"static\">header</li>");
    let mut list = DomList::new(dom::document().unwrap(), container.clone());

    list.append_entry("A", Some("orange"), Box::new(|| {})).unwrap();
    list.append_entry("B", Some("red"), Box::new(|| {})).unwrap();
    assert_eq!(container.children().length(), 3);

    list.clear();
    assert!(list.is_empty());
    assert_eq!(container.children().length(), 1);
    assert_eq!(container.first_element_child().unwrap().class_name(), "static");
}

#[wasm_bindgen_test]
fn gradient_is_written_on_the_container() {
    let container = fresh_container("list-gradient");
    dom::apply_background(&container, "linear-gradient(red, blue)").unwrap();
    let style: HtmlElement = container.dyn_into().unwrap();
    assert!(!style.style().get_property_value("background").unwrap().is_empty());
}

#[wasm_bindgen_test]
fn missing_container_is_reported() {
    let document = dom::document().unwrap();
    let err = dom::element_by_id(&document, "no-such-list").unwrap_err();
    assert_eq!(err.to_string(), "Missing page element: #no-such-list");
}

#[wasm_bindgen_test]
fn malformed_markers_render_nothing() {
    let source = GeoJsonSource::new(r#"{ "features": [ { "geometry": { "coordinates": [1.0] } } ] }"#);
    assert!(load_or_log(&source).is_empty());

    let source = GeoJsonSource::new("not json");
    assert!(load_or_log(&source).is_empty());
}

#[wasm_bindgen_test]
fn mock_markers_load_through_the_logging_path() {
    assert_eq!(load_or_log(&StaticSource).len(), 3);
}

#[wasm_bindgen_test]
fn page_config_without_api_key_is_rejected() {
    let value = js_sys::JSON::parse(r#"{ "map": { "zoom": 12 } }"#).unwrap();
    let config = decode_config(value).unwrap();
    assert_eq!(config.map.zoom, 12.0);
    assert!(matches!(config.validate(), Err(MapError::Config(ref msg)) if msg.contains("apiKey")));
}

#[wasm_bindgen_test]
fn page_config_reads_camel_case_keys() {
    let value = js_sys::JSON::parse(
        r#"{ "loader": { "apiKey": "k", "libraries": ["places"] }, "dom": { "listContainer": "side" } }"#,
    )
    .unwrap();
    let config = decode_config(value).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.loader.libraries, vec!["places".to_string()]);
    assert_eq!(config.dom.list_container, "side");
    assert_eq!(config.dom.map_container, "map");
}

#[wasm_bindgen_test]
fn page_config_with_wrong_types_fails_to_decode() {
    let value = js_sys::JSON::parse(r#"{ "map": { "zoom": "near" } }"#).unwrap();
    assert!(matches!(decode_config(value), Err(MapError::Config(_))));
}
