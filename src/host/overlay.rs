//! Busy overlay, alerts and navigation.
//!
//! The overlay markup (`#l2-overlay` containing `#l2-msg`) is owned by the
//! page template. When it is missing the calls are no-ops.

use crate::consts::{OVERLAY_ID, OVERLAY_MESSAGE_ID};
use crate::host::dom::{document, log_js_err, optional_element_by_id, window};

pub fn show_busy(message: &str) {
    let Ok(doc) = document() else { return };
    if let Ok(Some(msg)) = optional_element_by_id::<web_sys::HtmlElement>(&doc, OVERLAY_MESSAGE_ID) {
        msg.set_text_content(Some(message));
    }
    if let Ok(Some(overlay)) = optional_element_by_id::<web_sys::HtmlElement>(&doc, OVERLAY_ID) {
        overlay.set_hidden(false);
        log_js_err("show overlay", overlay.style().set_property("display", "flex"));
    }
}

pub fn hide_busy() {
    let Ok(doc) = document() else { return };
    if let Ok(Some(overlay)) = optional_element_by_id::<web_sys::HtmlElement>(&doc, OVERLAY_ID) {
        overlay.set_hidden(true);
        log_js_err("hide overlay", overlay.style().set_property("display", "none"));
    }
}

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    match window() {
        Ok(win) => log_js_err("alert", win.alert_with_message(message)),
        Err(e) => log::error!("alert '{message}' not shown: {e}"),
    }
}

pub fn navigate(url: &str) {
    log::info!("navigating to {url}");
    match window() {
        Ok(win) => log_js_err("navigate", win.location().set_href(url)),
        Err(e) => log::error!("navigate to {url} failed: {e}"),
    }
}
