//! Browser file-save plumbing: bytes -> object URL -> anchor click.

use wasm_bindgen::{JsCast, JsValue};

fn document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))
}

/// Saves `bytes` as a local file named `filename` by synthesizing an
/// anchor with a `download` attribute and clicking it. The object URL is
/// revoked once the click has been dispatched.
pub fn save_file(bytes: &[u8], content_type: Option<&str>, filename: &str) -> Result<(), JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let options = web_sys::BlobPropertyBag::new();
    if let Some(mime) = content_type {
        options.set_type(mime);
    }
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = document()?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("body unavailable"))?;
    body.append_child(&anchor)?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}

/// Native confirmation dialog; deletes go through this first.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
