//! Crate error type.
//!
//! Core selection and recording operations are infallible by contract; only
//! configuration parsing, collaborator payload parsing and browser wiring can
//! fail. Browser callbacks log these errors instead of propagating them into
//! the event loop.

/// Errors raised while configuring or wiring the picker.
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// A required element is absent from the document.
    #[error("missing element: #{id}")]
    MissingElement { id: String },

    /// An element exists but has an unexpected type.
    #[error("element #{id} is not a {expected}")]
    WrongElement { id: String, expected: &'static str },

    /// A browser API call threw or returned an unusable value.
    #[error("browser API failed: {0}")]
    Js(String),

    /// A push event payload was not valid for its event name.
    #[error("push payload parse failed: {0}")]
    PushPayload(String),

    /// A push event name is not part of the collaborator contract.
    #[error("unknown push event: {0}")]
    UnknownPushEvent(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for PickerError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "hydrate")]
impl From<PickerError> for wasm_bindgen::JsValue {
    fn from(err: PickerError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
