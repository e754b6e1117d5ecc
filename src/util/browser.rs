//! Browser glue: clock, file downloads and full-page navigation.
//!
//! TRADE-OFFS
//! ==========
//! Everything here needs a `window`. Host builds get inert fallbacks so the
//! callers compile and unit tests stay deterministic.

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// Save `bytes` as a file named `filename` through a temporary object URL.
///
/// # Errors
///
/// Returns a description of the DOM failure when the download cannot start.
pub fn download_bytes(bytes: &[u8], filename: &str, mime_type: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let js_err = |e: wasm_bindgen::JsValue| format!("{e:?}");
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document".to_owned())?;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let link = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "anchor cast failed".to_owned())?;
        link.set_href(&url);
        link.set_download(filename);
        link.click();
        web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (bytes, filename, mime_type);
        Err("downloads need a browser".to_owned())
    }
}

/// Leave the app for an external URL (OAuth provider).
pub fn set_location(href: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(href) {
                leptos::logging::error!("navigation to {href} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = href;
    }
}
