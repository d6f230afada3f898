//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Small wrappers for element creation and the show / hide / activate
//! patterns so components don't sprinkle `set_attribute` calls everywhere.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

/// Create `<tag class="…">`.
pub fn create(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

/// Create `<tag class="…">text</tag>`. Text is never parsed as HTML.
pub fn create_text(document: &Document, tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    let el = create(document, tag, class)?;
    el.set_text_content(Some(text));
    Ok(el)
}

/// `<button data-action="…">` understood by the delegated page handlers.
pub fn action_button(document: &Document, label: &str, class: &str, action: &str) -> Result<Element, JsValue> {
    let btn = create_text(document, "button", class, label)?;
    btn.set_attribute("type", "button")?;
    btn.set_attribute("data-action", action)?;
    Ok(btn)
}

/// Reuse the element with `id` under `parent` (emptied) or append a new one.
pub fn ensure_child(document: &Document, parent: &Element, tag: &str, id: &str) -> Result<Element, JsValue> {
    if let Some(el) = document.get_element_by_id(id) {
        clear(&el);
        return Ok(el);
    }
    let el = document.create_element(tag)?;
    el.set_id(id);
    parent.append_child(&el)?;
    Ok(el)
}

/// Remove every child node.
pub fn clear(el: &Element) {
    el.set_text_content(None);
}

/// Remove the `hidden` class so the element becomes visible.
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1("hidden");
    let _ = el.class_list().add_1("visible");
}

/// Hide the element by toggling CSS classes.
pub fn hide(el: &Element) {
    let _ = el.class_list().remove_1("visible");
    let _ = el.class_list().add_1("hidden");
}

/// Mark a navigation link as the active one.
pub fn set_active(el: &Element) {
    let _ = el.class_list().add_1("active");
}

/// Remove the `active` modifier from a navigation link.
pub fn set_inactive(el: &Element) {
    let _ = el.class_list().remove_1("active");
}

/// Current value of an `<input>` or `<select>`; `None` for anything else.
pub fn control_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<HtmlSelectElement>().map(|select| select.value())
}

/// Set the value of an `<input>` or `<select>` after its options exist.
pub fn set_control_value(el: &Element, value: &str) {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    }
}
