//! Document-level interception of `data-ajax` form submits.

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlFormElement};

use crate::consts::SUBMIT_FAILED_MESSAGE;
use crate::error::PickerError;
use crate::host::{overlay, socket_id};
use crate::net::submit::{SubmitOutcome, busy_message, post_form};

const AJAX_ATTR: &str = "data-ajax";
const MESSAGE_ATTR: &str = "data-msg";

/// Listen for submits of any `data-ajax` form on the page.
///
/// Native `form.submit()` calls (auto-submit) do not fire this event and
/// keep their regular navigation.
pub fn listen(doc: &Document) -> EventListener {
    EventListener::new_with_options(doc, "submit", EventListenerOptions::enable_prevent_default(), |event| {
        let Some(form) = event.target().and_then(|target| target.dyn_ref::<HtmlFormElement>().cloned()) else {
            return;
        };
        if !form.has_attribute(AJAX_ATTR) {
            return;
        }
        event.prevent_default();
        overlay::show_busy(&busy_message(form.get_attribute(MESSAGE_ATTR).as_deref()));
        spawn_local(async move {
            let sid = socket_id();
            if sid.is_none() {
                log::warn!("ajax submit without a socket id; progress events cannot reach this page");
            }
            let result = post_form(&form, sid.as_deref()).await;
            finish(result);
        });
    })
}

fn finish(result: Result<SubmitOutcome, PickerError>) {
    match result {
        Ok(SubmitOutcome::Redirect(url)) => overlay::navigate(&url),
        Ok(SubmitOutcome::Started) => log::info!("job accepted; waiting for progress events"),
        Ok(SubmitOutcome::Malformed) => fail("response carried neither a redirect nor started"),
        Err(e) => fail(&e.to_string()),
    }
}

fn fail(reason: &str) {
    log::error!("ajax submit failed: {reason}");
    overlay::hide_busy();
    overlay::alert(SUBMIT_FAILED_MESSAGE);
}
