// src/pages/list.rs
//
// Mounts the active entity page into `#page-root`. The layout is fixed:
// heading, filters, toolbar, new-record form, table, pager. A `Rows` render
// only replaces the table and the pager so a focused filter input keeps its
// caret while the user types.
//
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::{filter_bar, pager, record_form, record_table};
use crate::constants::PAGE_ROOT_ID;
use crate::dom_utils;
use crate::messages::RenderScope;
use crate::views::PageView;

const FILTERS_ID: &str = "page-filters";
const FORM_ID: &str = "page-form";
const TABLE_ID: &str = "page-table";
const PAGER_ID: &str = "page-pager";

pub fn render_page(document: &Document, view: &PageView, scope: RenderScope) -> Result<(), JsValue> {
    let root = document
        .get_element_by_id(PAGE_ROOT_ID)
        .ok_or_else(|| JsValue::from_str("Could not find page-root"))?;

    let rows_only = scope == RenderScope::Rows && document.get_element_by_id(TABLE_ID).is_some();
    if !rows_only {
        mount_layout(document, &root, view)?;
    }

    let table = section(document, TABLE_ID)?;
    record_table::render_table(document, &table, &view.headers, &view.rows, view.loaded)?;
    let pager_el = section(document, PAGER_ID)?;
    pager::render_pager(document, &pager_el, &view.pager)?;

    crate::debug_log!("Rendered {} ({} rows)", view.title, view.rows.len());
    Ok(())
}

/// Rebuild everything above the table, keeping placeholders for the table
/// and the pager.
fn mount_layout(document: &Document, root: &Element, view: &PageView) -> Result<(), JsValue> {
    dom_utils::clear(root);
    root.set_attribute("data-page", view.kind.path())?;

    let heading = dom_utils::create_text(document, "h1", "page-title", view.title)?;
    root.append_child(&heading)?;

    let filters = dom_utils::create(document, "div", "filter-bar")?;
    filters.set_id(FILTERS_ID);
    root.append_child(&filters)?;
    filter_bar::render_filters(document, &filters, &view.filters)?;

    let toolbar = dom_utils::create(document, "div", "page-toolbar")?;
    let add = dom_utils::action_button(document, &view.add_label(), "btn btn-primary", "create")?;
    let export = dom_utils::action_button(document, "Export to CSV", "btn btn-secondary", "export")?;
    toolbar.append_child(&add)?;
    toolbar.append_child(&export)?;
    root.append_child(&toolbar)?;

    let form = dom_utils::create(document, "div", "form-container")?;
    form.set_id(FORM_ID);
    root.append_child(&form)?;
    record_form::render_form(document, &form, view.form.as_ref())?;

    for (id, class) in [(TABLE_ID, "table-container"), (PAGER_ID, "pagination")] {
        let el = dom_utils::create(document, "div", class)?;
        el.set_id(id);
        root.append_child(&el)?;
    }
    Ok(())
}

fn section(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Could not find {}", id)))
}
