//! Client-side file download
//!
//! Wraps the text in a Blob, materializes an object URL and clicks a
//! detached anchor. No server round-trip.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub fn download_text(filename: &str, mime: &str, text: &str) {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(text));

    let opts = BlobPropertyBag::new();
    opts.set_type(mime);
    let Ok(blob) = Blob::new_with_str_sequence_and_options(&parts, &opts) else {
        return;
    };
    let Ok(url) = Url::create_object_url_with_blob(&blob) else {
        return;
    };

    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("no document");
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .expect("anchor creation failed")
        .dyn_into()
        .expect("anchor cast failed");
    anchor.set_href(&url);
    anchor.set_download(filename);
    let _ = anchor.style().set_property("display", "none");

    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
        anchor.click();
        anchor.remove();
    }
    let _ = Url::revoke_object_url(&url);
}
