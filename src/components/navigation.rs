//! Shared navigation bar linking every entity page.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use crate::constants::NAV_ID;
use crate::dom_utils;
use crate::models::EntityKind;
use crate::routing::hash_for;

/// Build `<nav id="main-nav">` with one link per entity, in menu order.
pub fn create_navigation(document: &Document) -> Result<Element, JsValue> {
    let nav = dom_utils::create(document, "nav", "main-nav")?;
    nav.set_id(NAV_ID);

    let brand = dom_utils::create_text(document, "span", "nav-brand", "Admin Console")?;
    nav.append_child(&brand)?;

    let list = dom_utils::create(document, "ul", "nav-links")?;
    for kind in EntityKind::ALL {
        let item = dom_utils::create(document, "li", "nav-item")?;
        let link = dom_utils::create_text(document, "a", "nav-link", kind.title())?;
        link.set_attribute("href", &hash_for(kind))?;
        link.set_attribute("data-route", kind.path())?;
        item.append_child(&link)?;
        list.append_child(&item)?;
    }
    nav.append_child(&list)?;
    Ok(nav)
}

/// Highlight the link of the mounted page.
pub fn highlight(document: &Document, active: EntityKind) -> Result<(), JsValue> {
    let links = document.query_selector_all(&format!("#{} a[data-route]", NAV_ID))?;
    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if link.get_attribute("data-route").as_deref() == Some(active.path()) {
            dom_utils::set_active(&link);
        } else {
            dom_utils::set_inactive(&link);
        }
    }
    Ok(())
}
