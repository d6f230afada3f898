//! Data table for the mounted page: sortable headers, one row per record on
//! the current page, inline editor for the row being edited.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::record_form;
use crate::constants::SORT_ASC_INDICATOR;
use crate::dom_utils;
use crate::views::{CellView, HeaderView, RowView};

pub fn render_table(
    document: &Document,
    container: &Element,
    headers: &[HeaderView],
    rows: &[RowView],
    loaded: bool,
) -> Result<(), JsValue> {
    dom_utils::clear(container);

    let table = dom_utils::create(document, "table", "record-table")?;
    let thead = dom_utils::create(document, "thead", "")?;
    let header_row = dom_utils::create(document, "tr", "")?;
    for header in headers {
        let th = dom_utils::create_text(document, "th", "sortable", &header.text())?;
        th.set_attribute("data-action", "sort")?;
        th.set_attribute("data-field", header.key)?;
        if let Some(arrow) = header.indicator {
            let sort = if arrow == SORT_ASC_INDICATOR { "ascending" } else { "descending" };
            th.set_attribute("aria-sort", sort)?;
        }
        header_row.append_child(&th)?;
    }
    let actions_th = dom_utils::create_text(document, "th", "", "Actions")?;
    header_row.append_child(&actions_th)?;
    thead.append_child(&header_row)?;
    table.append_child(&thead)?;

    let tbody = dom_utils::create(document, "tbody", "")?;
    if rows.is_empty() {
        let tr = dom_utils::create(document, "tr", "empty-row")?;
        let text = if loaded { "No records found" } else { "Loading..." };
        let td = dom_utils::create_text(document, "td", "", text)?;
        td.set_attribute("colspan", &(headers.len() + 1).to_string())?;
        tr.append_child(&td)?;
        tbody.append_child(&tr)?;
    }
    for row in rows {
        let row_el = render_row(document, row)?;
        tbody.append_child(&row_el)?;
    }
    table.append_child(&tbody)?;

    container.append_child(&table)?;
    Ok(())
}

fn render_row(document: &Document, row: &RowView) -> Result<Element, JsValue> {
    let tr = dom_utils::create(document, "tr", if row.editing { "record-row editing" } else { "record-row" })?;
    tr.set_attribute("data-id", &row.id.to_string())?;

    for cell in &row.cells {
        let td = match cell {
            CellView::Text(text) => dom_utils::create_text(document, "td", "", text)?,
            CellView::Input(input) => {
                let td = dom_utils::create(document, "td", "")?;
                let control = record_form::input_control(document, input, "cell-input")?;
                td.append_child(&control)?;
                td
            }
        };
        tr.append_child(&td)?;
    }

    let actions = dom_utils::create(document, "td", "row-actions")?;
    let buttons = if row.editing {
        [("Save", "btn btn-save", "save"), ("Cancel", "btn btn-cancel", "cancel")]
    } else {
        [("Edit", "btn btn-edit", "edit"), ("Delete", "btn btn-delete", "delete")]
    };
    for (label, class, action) in buttons {
        let btn = dom_utils::action_button(document, label, class, action)?;
        btn.set_attribute("data-id", &row.id.to_string())?;
        actions.append_child(&btn)?;
    }
    tr.append_child(&actions)?;
    Ok(tr)
}
