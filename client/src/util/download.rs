//! Client-side file download for the CSV export.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// `code_reviews_<YYYY-MM-DD>.csv` for an ISO-8601 timestamp.
#[must_use]
pub fn export_filename(iso_timestamp: &str) -> String {
    let date = iso_timestamp.split('T').next().unwrap_or(iso_timestamp);
    format!("code_reviews_{date}.csv")
}

/// Today's export filename, from the browser clock.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn todays_export_filename() -> String {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    export_filename(&iso)
}

/// Offer `bytes` to the user as a CSV file named `filename`.
///
/// # Errors
///
/// Returns a description of the first DOM call that failed.
#[cfg(feature = "hydrate")]
pub fn save_csv(bytes: &[u8], filename: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast as _;

    let js_err = |e: wasm_bindgen::JsValue| format!("{e:?}");
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_owned())?;
    let body = document.body().ok_or_else(|| "no body".to_owned())?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes).into());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let link = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "anchor cast failed".to_owned())?;
    link.set_href(&url);
    link.set_download(filename);
    body.append_child(&link).map_err(js_err)?;
    link.click();
    link.remove();
    web_sys::Url::revoke_object_url(&url).map_err(js_err)
}
