//! Global UI event handlers.
//!
//! Page content is rebuilt on every render, so instead of wiring listeners to
//! individual buttons we delegate from `#page-root`: each interactive element
//! carries `data-action` (plus `data-field` / `data-id` where needed) and
//! [`action_message`] maps those attributes onto a [`Message`].

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::constants::PAGE_ROOT_ID;
use crate::dom_utils;
use crate::{messages::Message, routing, state::dispatch_global_message};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Entry point – call once after the base UI was rendered.
pub fn setup_ui_event_handlers(document: &Document) -> Result<(), JsValue> {
    setup_hash_change_handler()?;
    setup_page_click_handler(document)?;
    setup_page_input_handler(document)?;
    Ok(())
}

/// Translate a delegated DOM event into a message. `value` is `Some` for
/// `input` events and `None` for clicks.
pub fn action_message(action: &str, field: Option<&str>, id: Option<&str>, value: Option<&str>) -> Option<Message> {
    let record_id = || id.and_then(|raw| raw.parse::<u32>().ok());
    match action {
        "sort" => field.map(|key| Message::SortBy(key.to_string())),
        "filter" => Some(Message::SetFilter {
            key: field?.to_string(),
            value: value?.to_string(),
        }),
        "reset-filters" => Some(Message::ResetFilters),
        "previous-page" => Some(Message::PreviousPage),
        "next-page" => Some(Message::NextPage),
        "create" => Some(Message::BeginCreate),
        "export" => Some(Message::ExportCsv),
        "edit" => record_id().map(Message::BeginEdit),
        "delete" => record_id().map(Message::RequestDelete),
        "draft" => Some(Message::EditField {
            key: field?.to_string(),
            value: value?.to_string(),
        }),
        "save" => Some(Message::SaveDraft),
        "cancel" => Some(Message::CancelEdit),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Individual handlers
// ---------------------------------------------------------------------------

/// Back/forward and nav links both land here.
fn setup_hash_change_handler() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: Event| {
        dispatch_global_message(Message::Navigate(routing::current_route()));
    }));
    window.add_event_listener_with_callback("hashchange", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Buttons and sortable headers.
fn setup_page_click_handler(document: &Document) -> Result<(), JsValue> {
    let root = page_root(document)?;
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: Event| {
        let Some(el) = action_target(&e) else {
            return;
        };
        let msg = action_message(
            &el.get_attribute("data-action").unwrap_or_default(),
            el.get_attribute("data-field").as_deref(),
            el.get_attribute("data-id").as_deref(),
            None,
        );
        if let Some(msg) = msg {
            dispatch_global_message(msg);
        }
    }));
    root.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Filter inputs and draft fields. Selects fire `input` too.
fn setup_page_input_handler(document: &Document) -> Result<(), JsValue> {
    let root = page_root(document)?;
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: Event| {
        let Some(el) = action_target(&e) else {
            return;
        };
        let Some(value) = dom_utils::control_value(&el) else {
            return;
        };
        let msg = action_message(
            &el.get_attribute("data-action").unwrap_or_default(),
            el.get_attribute("data-field").as_deref(),
            el.get_attribute("data-id").as_deref(),
            Some(&value),
        );
        if let Some(msg) = msg {
            dispatch_global_message(msg);
        }
    }));
    root.add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn page_root(document: &Document) -> Result<Element, JsValue> {
    document
        .get_element_by_id(PAGE_ROOT_ID)
        .ok_or_else(|| JsValue::from_str("Could not find page-root"))
}

/// Nearest ancestor (or self) of the event target carrying `data-action`.
fn action_target(e: &Event) -> Option<Element> {
    let target = e.target()?.dyn_into::<Element>().ok()?;
    target.closest("[data-action]").ok().flatten()
}
