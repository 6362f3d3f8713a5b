//! CSV download through a temporary object URL.

use invoice_extractor::CsvDownload;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Offer the artifact to the user as a file download.
pub fn offer_download(download: &CsvDownload) -> Result<(), String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(&download.content));
    let options = BlobPropertyBag::new();
    options.set_type(download.mime);

    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| format!("Failed to create Blob: {:?}", e))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document available")?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("Failed to create link: {:?}", e))?
        .dyn_into()
        .map_err(|_| "Created element is not a link".to_string())?;

    anchor.set_href(&url);
    anchor.set_download(download.file_name);
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    log::info!("⬇️ Offered {} for download", download.file_name);
    Ok(())
}
