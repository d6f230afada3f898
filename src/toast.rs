//! Tiny toast / notification helper.
//! Creates a `#toast-root` container once per page and appends toast divs that
//! fade-out after a few seconds. Failures that must be acknowledged go through
//! the blocking [`alert`] instead.

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::constants::TOAST_DURATION_MS;

/// Green confirmation toast that removes itself after a few seconds.
pub fn success(msg: &str) {
    show(msg, "toast toast-success");
}

/// Blocking `window.alert`. Falls back to the console when no window exists.
pub fn alert(msg: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(msg).is_err() {
                web_sys::console::error_1(&msg.into());
            }
        }
        None => web_sys::console::error_1(&msg.into()),
    }
}

fn show(message: &str, class: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(root) = ensure_root(&document) else {
        return;
    };
    let Ok(toast) = document.create_element("div") else {
        return;
    };
    toast.set_class_name(class);
    toast.set_text_content(Some(message));

    // Prepend so newest appears on top.
    let _ = root.prepend_with_node_1(&toast);

    Timeout::new(TOAST_DURATION_MS, move || toast.remove()).forget();

    ensure_styles(&document);
}

fn ensure_root(document: &Document) -> Option<Element> {
    if let Some(el) = document.get_element_by_id("toast-root") {
        return Some(el);
    }
    let root = document.create_element("div").ok()?;
    root.set_id("toast-root");
    root.set_class_name("toast-root");
    document.body()?.append_child(&root).ok()?;
    Some(root)
}

fn ensure_styles(document: &Document) {
    if document.get_element_by_id("toast-styles").is_some() {
        return;
    }

    let css = "
.toast-root{position:fixed;top:16px;right:16px;display:flex;flex-direction:column;gap:8px;z-index:9999;font-family:Arial,Helvetica,sans-serif}
.toast{padding:10px 16px;border-radius:4px;color:#fff;box-shadow:0 2px 4px rgba(0,0,0,.1);opacity:0;animation:toast-in .2s forwards}
.toast-success{background:#16a34a}
@keyframes toast-in{to{opacity:1}}
";

    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id("toast-styles");
    style.set_text_content(Some(css));
    let target = document.head().map(Element::from).or_else(|| document.body().map(Element::from));
    if let Some(target) = target {
        let _ = target.append_child(&style);
    }
}
