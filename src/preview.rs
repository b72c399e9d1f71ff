//! Preview Transport
//!
//! Blob-backed object URL for rendering stored HTML in a sandboxed
//! iframe. The URL is revoked on drop, so holding at most one
//! `ObjectUrl` guarantees release on every exit path.

use wasm_bindgen::JsValue;

/// An `URL.createObjectURL` handle, revoked when dropped
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    /// Wrap an HTML document string in a `text/html` blob URL
    pub fn for_html(content: &str) -> Result<Self, JsValue> {
        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str(content));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/html");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;
        Ok(Self { url })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = web_sys::Url::revoke_object_url(&self.url);
    }
}
