//! Browser tests for mounting an entity page into `#page-root`.
//!
//! Run with: wasm-pack test --headless --chrome

use business_admin_frontend::constants::{APP_ROOT_ID, PAGE_ROOT_ID};
use business_admin_frontend::messages::{Message, RenderScope};
use business_admin_frontend::models::{EntityKind, Shipper};
use business_admin_frontend::pages::{list::render_page, Page};
use business_admin_frontend::reducers::ListPage;
use business_admin_frontend::ui::setup::create_base_ui;
use serde_json::json;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Fresh, empty `#page-root` attached to the body.
fn fresh_root(document: &Document) -> Element {
    if let Some(old) = document.get_element_by_id(PAGE_ROOT_ID) {
        old.remove();
    }
    let root = document.create_element("main").unwrap();
    root.set_id(PAGE_ROOT_ID);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn loaded_shippers(count: u32) -> ListPage<Shipper> {
    let records: Vec<_> = (1..=count)
        .map(|id| json!({ "ShipperID": id, "ShipperName": format!("Shipper {}", id), "Phone": "(503) 555-9831" }))
        .collect();
    let mut page = ListPage::<Shipper>::new();
    page.update(Message::RecordsLoaded {
        kind: EntityKind::Shippers,
        records: json!(records),
    });
    page
}

fn count(root: &Element, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

#[wasm_bindgen_test]
fn renders_first_page_with_pager() {
    let document = document();
    let root = fresh_root(&document);
    let page = loaded_shippers(12);

    render_page(&document, &page.view(), RenderScope::Page).unwrap();

    assert_eq!(root.query_selector("h1").unwrap().unwrap().text_content().unwrap(), "Shippers");
    assert_eq!(count(&root, "tbody tr.record-row"), 10);
    let label = root.query_selector(".page-label").unwrap().unwrap();
    assert_eq!(label.text_content().unwrap(), "Page 1 of 2");
    let previous = root.query_selector("[data-action='previous-page']").unwrap().unwrap();
    assert!(previous.has_attribute("disabled"));
    let next = root.query_selector("[data-action='next-page']").unwrap().unwrap();
    assert!(!next.has_attribute("disabled"));
    let add = root.query_selector("[data-action='create']").unwrap().unwrap();
    assert_eq!(add.text_content().unwrap(), "Add New Shipper");

    root.remove();
}

#[wasm_bindgen_test]
fn sorted_header_shows_indicator() {
    let document = document();
    let root = fresh_root(&document);
    let mut page = loaded_shippers(3);
    page.update(Message::SortBy("ShipperID".into()));
    page.update(Message::SortBy("ShipperID".into()));

    render_page(&document, &page.view(), RenderScope::Page).unwrap();

    let header = root.query_selector("th[data-field='ShipperID']").unwrap().unwrap();
    assert_eq!(header.text_content().unwrap(), "Shipper ID ↓");
    let first = root.query_selector("tbody tr.record-row").unwrap().unwrap();
    assert_eq!(first.get_attribute("data-id").as_deref(), Some("3"));

    root.remove();
}

#[wasm_bindgen_test]
fn row_render_keeps_filter_inputs() {
    let document = document();
    let root = fresh_root(&document);
    let mut page = loaded_shippers(12);
    render_page(&document, &page.view(), RenderScope::Page).unwrap();

    let input: HtmlInputElement = root
        .query_selector("input[data-action='filter']")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    input.set_value("Shipper 1");
    page.update(Message::SetFilter {
        key: "ShipperName".into(),
        value: "Shipper 1".into(),
    });
    render_page(&document, &page.view(), RenderScope::Rows).unwrap();

    let same: HtmlInputElement = root
        .query_selector("input[data-action='filter']")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    assert!(same.is_same_node(Some(&input)));
    // "Shipper 1", "Shipper 10", "Shipper 11", "Shipper 12"
    assert_eq!(count(&root, "tbody tr.record-row"), 4);
    assert_eq!(root.query_selector(".page-label").unwrap().unwrap().text_content().unwrap(), "Page 1 of 1");

    root.remove();
}

#[wasm_bindgen_test]
fn editing_row_renders_inputs() {
    let document = document();
    let root = fresh_root(&document);
    let mut page = loaded_shippers(2);
    page.update(Message::BeginEdit(2));

    render_page(&document, &page.view(), RenderScope::Page).unwrap();

    let row = root.query_selector("tr.editing").unwrap().unwrap();
    assert_eq!(row.get_attribute("data-id").as_deref(), Some("2"));
    assert_eq!(count(&row, "input[data-action='draft']"), 2);
    assert_eq!(count(&row, "[data-action='save']"), 1);
    assert_eq!(count(&row, "[data-action='cancel']"), 1);

    root.remove();
}

#[wasm_bindgen_test]
fn base_ui_has_navigation_and_page_root() {
    let document = document();
    if let Some(old) = document.get_element_by_id(PAGE_ROOT_ID) {
        old.remove();
    }

    create_base_ui(&document).unwrap();

    let app = document.get_element_by_id(APP_ROOT_ID).unwrap();
    assert_eq!(count(&app, "#main-nav a[data-route]"), 6);
    let first = app.query_selector("#main-nav a[data-route]").unwrap().unwrap();
    assert_eq!(first.get_attribute("href").as_deref(), Some("#/products"));
    assert!(app.query_selector("main#page-root").unwrap().is_some());

    app.remove();
}
