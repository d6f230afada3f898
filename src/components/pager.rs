//! Previous / Next controls with the "Page X of Y" label.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils;
use crate::views::PagerView;

pub fn render_pager(document: &Document, container: &Element, pager: &PagerView) -> Result<(), JsValue> {
    dom_utils::clear(container);

    let previous = dom_utils::action_button(document, "Previous", "btn btn-page", "previous-page")?;
    if !pager.has_previous {
        previous.set_attribute("disabled", "")?;
    }
    let label = dom_utils::create_text(document, "span", "page-label", &pager.label())?;
    let next = dom_utils::action_button(document, "Next", "btn btn-page", "next-page")?;
    if !pager.has_next {
        next.set_attribute("disabled", "")?;
    }

    container.append_child(&previous)?;
    container.append_child(&label)?;
    container.append_child(&next)?;
    Ok(())
}
