//! Browser host for the record button.
//!
//! Drives a [`RecordingSession`] with `getUserMedia`, a `MediaRecorder` and
//! `gloo-file`'s data-URI reader. Both suspension points (permission and
//! encoding) re-enter through a `Weak` handle, so a host dropped mid-flight
//! simply ignores the late result.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    Blob, BlobEvent, BlobPropertyBag, HtmlElement, HtmlInputElement, MediaRecorder, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

use crate::config::PickerConfig;
use crate::consts::{AUDIO_MIME, SUCCESS_CLASS};
use crate::error::PickerError;
use crate::host::dom::{document, element_by_id, log_js_err, optional_element_by_id, window};
use crate::host::overlay;
use crate::recorder::{CaptureAction, RecordingSession};

struct Capture {
    session: RecordingSession<Blob>,
    button: HtmlElement,
    field: HtmlInputElement,
    stream: Option<MediaStream>,
    recorder: Option<MediaRecorder>,
    // Replaced only when a new recorder starts, never from its own callbacks.
    recorder_listeners: Vec<EventListener>,
}

/// Mounted record button.
pub struct CaptureHost {
    _inner: Rc<RefCell<Capture>>,
    _listener: EventListener,
}

impl CaptureHost {
    /// Bind the record button. Returns `Ok(None)` when the page has none.
    ///
    /// # Errors
    ///
    /// Fails when the button exists but the hidden audio field does not.
    pub fn mount(config: &PickerConfig) -> Result<Option<Self>, PickerError> {
        let doc = document()?;
        let Some(button) = optional_element_by_id::<HtmlElement>(&doc, &config.ids.record_button)? else {
            log::debug!("no #{} on this page; recording disabled", config.ids.record_button);
            return Ok(None);
        };
        let field: HtmlInputElement = element_by_id(&doc, &config.ids.audio_field)?;

        let inner = Rc::new(RefCell::new(Capture {
            session: RecordingSession::new(),
            button: button.clone(),
            field,
            stream: None,
            recorder: None,
            recorder_listeners: Vec::new(),
        }));

        let weak = Rc::downgrade(&inner);
        let listener =
            EventListener::new_with_options(&button, "click", EventListenerOptions::enable_prevent_default(), move |event| {
                event.prevent_default();
                dispatch(&weak, RecordingSession::press);
            });

        Ok(Some(Self { _inner: inner, _listener: listener }))
    }
}

fn dispatch<F>(weak: &Weak<RefCell<Capture>>, step: F)
where
    F: FnOnce(&mut RecordingSession<Blob>) -> Vec<CaptureAction<Blob>>,
{
    let Some(inner) = weak.upgrade() else { return };
    let actions = step(&mut inner.borrow_mut().session);
    run(&inner, actions);
}

fn run(inner: &Rc<RefCell<Capture>>, actions: Vec<CaptureAction<Blob>>) {
    for action in actions {
        match action {
            CaptureAction::RequestMicrophone => spawn_local(request_microphone(Rc::downgrade(inner))),
            CaptureAction::StartRecorder => {
                if let Err(e) = start_recorder(inner) {
                    log::error!("recorder failed to start: {e}");
                    let recovery = inner.borrow_mut().session.recorder_failed();
                    run(inner, recovery);
                }
            }
            CaptureAction::StopRecorder => {
                let recorder = inner.borrow().recorder.clone();
                match recorder {
                    Some(recorder) => log_js_err("stop recorder", recorder.stop()),
                    None => log::warn!("stop requested without a recorder"),
                }
            }
            CaptureAction::ReleaseStream => {
                let stream = inner.borrow_mut().stream.take();
                if let Some(stream) = stream {
                    release(&stream);
                }
            }
            CaptureAction::Encode(chunks) => spawn_local(encode(Rc::downgrade(inner), chunks)),
            CaptureAction::WriteField(data_uri) => inner.borrow().field.set_value(&data_uri),
            CaptureAction::SetLabel(label) => inner.borrow().button.set_text_content(Some(label)),
            CaptureAction::SetSuccess(success) => log_js_err(
                "toggle success class",
                inner.borrow().button.class_list().toggle_with_force(SUCCESS_CLASS, success),
            ),
            CaptureAction::Alert(message) => overlay::alert(message),
        }
    }
}

// =============================================================
// Microphone
// =============================================================

async fn request_microphone(weak: Weak<RefCell<Capture>>) {
    let result = open_microphone().await;
    let Some(inner) = weak.upgrade() else {
        if let Ok(stream) = result {
            release(&stream);
        }
        return;
    };
    let actions = match result {
        Ok(stream) => {
            inner.borrow_mut().stream = Some(stream);
            inner.borrow_mut().session.permission_granted()
        }
        Err(e) => {
            log::error!("microphone unavailable: {e}");
            inner.borrow_mut().session.permission_denied()
        }
    };
    run(&inner, actions);
}

async fn open_microphone() -> Result<MediaStream, PickerError> {
    let devices = window()?.navigator().media_devices()?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::TRUE);
    let promise = devices.get_user_media_with_constraints(&constraints)?;
    JsFuture::from(promise)
        .await?
        .dyn_into::<MediaStream>()
        .map_err(|_| PickerError::Js("getUserMedia did not return a MediaStream".to_owned()))
}

fn release(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

fn start_recorder(inner: &Rc<RefCell<Capture>>) -> Result<(), PickerError> {
    let stream = inner.borrow().stream.clone().ok_or_else(|| PickerError::Js("no microphone stream".to_owned()))?;
    let recorder = MediaRecorder::new_with_media_stream(&stream)?;

    let weak = Rc::downgrade(inner);
    let on_data = EventListener::new(&recorder, "dataavailable", move |event| {
        let Some(inner) = weak.upgrade() else { return };
        let Some(blob) = event.dyn_ref::<BlobEvent>().and_then(BlobEvent::data) else {
            return;
        };
        if blob.size() > 0.0 {
            inner.borrow_mut().session.chunk(blob);
        }
    });
    let weak = Rc::downgrade(inner);
    let on_stop = EventListener::new(&recorder, "stop", move |_| {
        dispatch(&weak, RecordingSession::stopped);
    });

    recorder.start()?;
    let mut state = inner.borrow_mut();
    state.recorder = Some(recorder);
    state.recorder_listeners.clear();
    state.recorder_listeners.extend([on_data, on_stop]);
    Ok(())
}

// =============================================================
// Encoding
// =============================================================

async fn encode(weak: Weak<RefCell<Capture>>, chunks: Vec<Blob>) {
    let result = encode_chunks(chunks).await;
    let Some(inner) = weak.upgrade() else { return };
    let actions = match result {
        Ok(data_uri) => inner.borrow_mut().session.encoded(data_uri),
        Err(e) => {
            log::error!("encoding capture failed: {e}");
            inner.borrow_mut().session.encode_failed()
        }
    };
    run(&inner, actions);
}

async fn encode_chunks(chunks: Vec<Blob>) -> Result<String, PickerError> {
    let parts: js_sys::Array = chunks.into_iter().collect();
    let options = BlobPropertyBag::new();
    options.set_type(AUDIO_MIME);
    let blob = Blob::new_with_blob_sequence_and_options(&parts, &options)?;
    gloo_file::futures::read_as_data_url(&gloo_file::Blob::from(blob))
        .await
        .map_err(|e| PickerError::Js(e.to_string()))
}
