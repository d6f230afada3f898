//! CSV export of a page's full (unfiltered) list.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::models::Record;

fn escape(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Header row of JSON field names followed by one row per record.
pub fn to_csv<T: Record>(records: &[T]) -> String {
    let columns = T::columns();
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(columns.iter().map(|c| escape(c.key)).collect::<Vec<_>>().join(","));
    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|c| escape(&record.field(c.key).as_text()))
            .collect();
        lines.push(row.join(","));
    }
    lines.join("\n")
}

/// Offer `content` to the browser as a file download.
pub fn download(filename: &str, content: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("No body found"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(&url);
    link.set_download(filename);
    link.set_attribute("style", "visibility: hidden;")?;
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Url::revoke_object_url(&url)?;
    Ok(())
}
