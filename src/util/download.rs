//! Offering binary payloads to the user as file downloads.
//!
//! Invoices and receipts arrive from the API as raw PDF bytes; browsers
//! only expose "save this" through an object URL attached to a
//! synthetic anchor click, so that dance lives here.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// File name for a downloaded billing document.
#[must_use]
pub fn document_filename(prefix: &str, invoice_id: i64) -> String {
    format!("{prefix}-{invoice_id}.pdf")
}

/// Offer `bytes` as a PDF download named `filename`.
///
/// Best-effort: blob and anchor construction failures are swallowed.
pub fn save_pdf(filename: &str, bytes: &[u8]) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("application/pdf");
        let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };
        let anchor = document
            .create_element("a")
            .ok()
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok());
        if let Some(anchor) = anchor {
            anchor.set_href(&url);
            anchor.set_download(filename);
            if let Some(body) = document.body() {
                let _ = body.append_child(&anchor);
                anchor.click();
                anchor.remove();
            }
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, bytes);
    }
}
