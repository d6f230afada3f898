//! Editor controls: the "new record" form and the inputs of an inline row
//! editor share the same control builder.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils;
use crate::models::LookupOption;
use crate::views::{FormView, InputControl, InputView};

/// `<select>` with an optional empty first option.
pub fn select(
    document: &Document,
    class: &str,
    placeholder: Option<&str>,
    options: &[LookupOption],
    selected: &str,
) -> Result<Element, JsValue> {
    let select = dom_utils::create(document, "select", class)?;
    if let Some(text) = placeholder {
        let option = dom_utils::create_text(document, "option", "", text)?;
        option.set_attribute("value", "")?;
        select.append_child(&option)?;
    }
    for opt in options {
        let option = dom_utils::create_text(document, "option", "", &opt.label)?;
        option.set_attribute("value", &opt.id.to_string())?;
        select.append_child(&option)?;
    }
    dom_utils::set_control_value(&select, selected);
    Ok(select)
}

/// Build the control for one draft field. Its `data-action="draft"` and
/// `data-field` attributes route typing back into the open draft.
pub fn input_control(document: &Document, input: &InputView, class: &str) -> Result<Element, JsValue> {
    let el = match &input.control {
        InputControl::Select { placeholder, options } => {
            select(document, class, placeholder.as_deref(), options, &input.value)?
        }
        other => {
            let el = dom_utils::create(document, "input", class)?;
            let input_type = match other {
                InputControl::Date => "date",
                InputControl::Number => "number",
                _ => "text",
            };
            el.set_attribute("type", input_type)?;
            if input_type == "number" {
                el.set_attribute("step", "any")?;
            }
            el.set_attribute("placeholder", input.label)?;
            dom_utils::set_control_value(&el, &input.value);
            el
        }
    };
    el.set_attribute("data-action", "draft")?;
    el.set_attribute("data-field", input.key)?;
    el.set_attribute("aria-label", input.label)?;
    Ok(el)
}

/// Render the "new record" form into `container`, or leave it empty.
pub fn render_form(document: &Document, container: &Element, form: Option<&FormView>) -> Result<(), JsValue> {
    dom_utils::clear(container);
    let Some(form) = form else {
        dom_utils::hide(container);
        return Ok(());
    };
    dom_utils::show(container);

    let panel = dom_utils::create(document, "div", "record-form")?;
    for field in &form.fields {
        let control = input_control(document, field, "form-input")?;
        panel.append_child(&control)?;
    }

    let actions = dom_utils::create(document, "div", "form-actions")?;
    let save = dom_utils::action_button(document, "Save", "btn btn-save", "save")?;
    let cancel = dom_utils::action_button(document, "Cancel", "btn btn-cancel", "cancel")?;
    actions.append_child(&save)?;
    actions.append_child(&cancel)?;
    panel.append_child(&actions)?;

    container.append_child(&panel)?;
    Ok(())
}
