//! Error type shared by every DOM-facing module.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use wasm_bindgen::JsValue;

/// Failures raised while binding behaviors to the document.
///
/// Missing *optional* elements are not errors; behaviors report those as
/// `Ok(None)` from their `mount` functions.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("DOM call failed: {0}")]
    Js(String),

    #[error("invalid site config: {0}")]
    Config(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<SiteError> for JsValue {
    fn from(err: SiteError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
