//! Browser entry points.
//!
//! `start` runs when the wasm module loads: it installs the panic hook,
//! reads config from `<body data-picker-*>`, installs the console logger and
//! mounts the picker, recorder and AJAX submit handler once the DOM is
//! ready. Mounted hosts live in a thread-local for the page lifetime, next to
//! the socket id the page's socket client reports through `set_socket_id`.

pub mod capture;
pub mod dom;
pub mod overlay;
pub mod picker;
pub mod submit;

use std::cell::RefCell;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::DocumentReadyState;

use crate::config::{DEFAULT_LOG_LEVEL, PickerConfig};
use crate::consts::CONFIG_ATTR_PREFIX;
use crate::error::PickerError;
use crate::net::push::PushEvent;

use self::capture::CaptureHost;
use self::picker::PickerHost;

struct Mounted {
    _picker: Option<PickerHost>,
    _capture: Option<CaptureHost>,
    _ajax: EventListener,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
    static SOCKET_ID: RefCell<Option<String>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = read_config();
    let level = config.as_ref().map_or(DEFAULT_LOG_LEVEL, |c| c.log_level);
    if let Err(e) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {e}");
    }
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            log::error!("picker disabled: {e}");
            return;
        }
    };
    if let Err(e) = when_ready(config) {
        log::error!("picker startup failed: {e}");
    }
}

/// Forward a socket event to the page.
///
/// # Errors
///
/// Rejects unknown event names and malformed payloads.
#[wasm_bindgen]
pub fn dispatch_push_event(name: &str, payload: &str) -> Result<(), JsValue> {
    match PushEvent::parse(name, payload)? {
        PushEvent::Progress { message } => overlay::show_busy(&message),
        PushEvent::Done { next } => {
            overlay::hide_busy();
            overlay::navigate(&next);
        }
    }
    Ok(())
}

/// Record the page's socket id so AJAX submits route progress events back
/// here. A blank id clears it.
#[wasm_bindgen]
pub fn set_socket_id(sid: &str) {
    let sid = sid.trim();
    log::debug!("socket id {}", if sid.is_empty() { "cleared" } else { "set" });
    SOCKET_ID.with(|slot| *slot.borrow_mut() = (!sid.is_empty()).then(|| sid.to_owned()));
}

/// The socket id last passed to [`set_socket_id`].
pub fn socket_id() -> Option<String> {
    SOCKET_ID.with(|slot| slot.borrow().clone())
}

fn read_config() -> Result<PickerConfig, PickerError> {
    let body = dom::body()?;
    PickerConfig::from_lookup(|key| body.get_attribute(&format!("{CONFIG_ATTR_PREFIX}{key}")))
}

fn when_ready(config: PickerConfig) -> Result<(), PickerError> {
    let doc = dom::document()?;
    if doc.ready_state() != DocumentReadyState::Loading {
        mount_logged(&config);
        return Ok(());
    }
    EventListener::once(&doc, "DOMContentLoaded", move |_| mount_logged(&config)).forget();
    Ok(())
}

fn mount_logged(config: &PickerConfig) {
    match mount(config) {
        Ok(mounted) => MOUNTED.with(|slot| *slot.borrow_mut() = Some(mounted)),
        Err(e) => log::error!("picker mount failed: {e}"),
    }
}

fn mount(config: &PickerConfig) -> Result<Mounted, PickerError> {
    let doc = dom::document()?;
    // Parts mount independently.
    let picker = PickerHost::mount(config).unwrap_or_else(|e| {
        log::error!("image picker not mounted: {e}");
        None
    });
    let capture = CaptureHost::mount(config).unwrap_or_else(|e| {
        log::error!("recorder not mounted: {e}");
        None
    });
    let ajax = submit::listen(&doc);
    Ok(Mounted { _picker: picker, _capture: capture, _ajax: ajax })
}
