use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::components::navigation;
use crate::constants::{APP_ROOT_ID, PAGE_ROOT_ID};
use crate::dom_utils;

/// Static shell: header with the navigation bar and an empty `#page-root`
/// that every entity page renders into.
pub fn create_base_ui(document: &Document) -> Result<(), JsValue> {
    let body = document.body().ok_or(JsValue::from_str("No body found"))?;

    let app = dom_utils::ensure_child(document, &body, "div", APP_ROOT_ID)?;
    app.set_class_name("app-root");

    let header = dom_utils::create(document, "header", "header")?;
    let nav = navigation::create_navigation(document)?;
    header.append_child(&nav)?;
    app.append_child(&header)?;

    let main = dom_utils::create(document, "main", "page")?;
    main.set_id(PAGE_ROOT_ID);
    app.append_child(&main)?;

    Ok(())
}
