//! Typed element lookups shared by the host modules.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::PickerError;

pub fn window() -> Result<Window, PickerError> {
    web_sys::window().ok_or_else(|| PickerError::Js("no window".to_owned()))
}

pub fn document() -> Result<Document, PickerError> {
    window()?.document().ok_or_else(|| PickerError::Js("no document".to_owned()))
}

pub fn body() -> Result<HtmlElement, PickerError> {
    document()?.body().ok_or_else(|| PickerError::MissingElement { id: "body".to_owned() })
}

/// Look up `#id` and cast it to `T`.
///
/// # Errors
///
/// Fails when the element is absent or of another type.
pub fn element_by_id<T: JsCast>(doc: &Document, id: &str) -> Result<T, PickerError> {
    optional_element_by_id(doc, id)?.ok_or_else(|| PickerError::MissingElement { id: id.to_owned() })
}

/// Like [`element_by_id`], but an absent element is `Ok(None)`.
pub fn optional_element_by_id<T: JsCast>(doc: &Document, id: &str) -> Result<Option<T>, PickerError> {
    let Some(el) = doc.get_element_by_id(id) else {
        return Ok(None);
    };
    cast(el, id).map(Some)
}

fn cast<T: JsCast>(el: Element, id: &str) -> Result<T, PickerError> {
    el.dyn_into::<T>()
        .map_err(|_| PickerError::WrongElement { id: id.to_owned(), expected: std::any::type_name::<T>() })
}

/// Log a failed browser call instead of dropping it.
pub fn log_js_err<T>(context: &str, result: Result<T, wasm_bindgen::JsValue>) {
    if let Err(e) = result {
        log::warn!("{context}: {}", PickerError::from(e));
    }
}
