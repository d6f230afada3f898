//! Filter inputs above the table plus the "Reset Filters" button.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::record_form;
use crate::dom_utils;
use crate::views::{FilterControl, FilterView};

pub fn render_filters(document: &Document, container: &Element, filters: &[FilterView]) -> Result<(), JsValue> {
    dom_utils::clear(container);
    if filters.is_empty() {
        return Ok(());
    }

    for filter in filters {
        let control = match &filter.control {
            FilterControl::Text { value } => {
                let input = dom_utils::create(document, "input", "filter-input")?;
                input.set_attribute("type", "text")?;
                input.set_attribute("placeholder", &format!("Filter by {}", filter.label))?;
                dom_utils::set_control_value(&input, value);
                input
            }
            FilterControl::Select { options, selected } => {
                let placeholder = format!("Filter by {}", filter.label);
                record_form::select(document, "filter-select", Some(&placeholder), options, selected)?
            }
        };
        control.set_attribute("data-action", "filter")?;
        control.set_attribute("data-field", filter.key)?;
        control.set_attribute("aria-label", &format!("Filter by {}", filter.label))?;
        container.append_child(&control)?;
    }

    let reset_row = dom_utils::create(document, "div", "filter-actions")?;
    let reset = dom_utils::action_button(document, "Reset Filters", "btn btn-secondary", "reset-filters")?;
    reset_row.append_child(&reset)?;
    container.append_child(&reset_row)?;
    Ok(())
}
