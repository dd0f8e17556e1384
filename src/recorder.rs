//! Audio capture session: the record button's state machine.
//!
//! ```text
//! idle  ──press──▶ recording ──press──▶ encoding ──encoded──▶ ready
//! ready ──press──▶ recording
//! recording ──denied / no audio──▶ idle
//! encoding  ──failed──▶ idle
//! ```
//!
//! The session never touches the browser. It consumes host notifications
//! (permission outcome, data chunks, recorder stopped, encoding finished) and
//! returns [`CaptureAction`]s. The chunk type is generic so tests can use
//! plain values in place of `web_sys::Blob`.

#[cfg(test)]
#[path = "recorder_test.rs"]
mod recorder_test;

use crate::consts::{MIC_DENIED_MESSAGE, RECORD_LABEL, RERECORD_LABEL, STOP_LABEL};

/// Observable phase of the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecorderPhase {
    /// Nothing in progress; the button offers to record.
    #[default]
    Idle,
    /// Microphone requested or capture running.
    Recording,
    /// Capture finished; chunks are being converted to a data URI.
    Encoding,
    /// A capture is stored in the hidden field.
    Ready,
}

/// Browser-side effects requested by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureAction<C> {
    /// Ask the user for microphone access.
    RequestMicrophone,
    /// Start a recorder on the granted stream.
    StartRecorder,
    /// Ask the running recorder to finalize.
    StopRecorder,
    /// Stop the microphone stream's tracks.
    ReleaseStream,
    /// Combine these chunks into one blob and read it as a data URI.
    Encode(Vec<C>),
    /// Overwrite the hidden audio field.
    WriteField(String),
    /// Replace the button's text.
    SetLabel(&'static str),
    /// Add or remove the success mark on the button.
    SetSuccess(bool),
    /// Show a blocking message to the user.
    Alert(&'static str),
}

#[derive(Debug, Clone)]
pub struct RecordingSession<C> {
    phase: RecorderPhase,
    awaiting_permission: bool,
    stop_requested: bool,
    chunks: Vec<C>,
}

impl<C> Default for RecordingSession<C> {
    fn default() -> Self {
        Self { phase: RecorderPhase::Idle, awaiting_permission: false, stop_requested: false, chunks: Vec::new() }
    }
}

impl<C> RecordingSession<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> RecorderPhase {
        self.phase
    }

    /// Number of chunks captured so far in the current recording.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// The record button was pressed.
    pub fn press(&mut self) -> Vec<CaptureAction<C>> {
        match self.phase {
            RecorderPhase::Idle | RecorderPhase::Ready => {
                self.phase = RecorderPhase::Recording;
                self.awaiting_permission = true;
                self.stop_requested = false;
                self.chunks.clear();
                vec![CaptureAction::RequestMicrophone]
            }
            RecorderPhase::Recording if self.awaiting_permission => {
                log::debug!("record press ignored: microphone permission pending");
                Vec::new()
            }
            RecorderPhase::Recording if self.stop_requested => Vec::new(),
            RecorderPhase::Recording => {
                self.stop_requested = true;
                vec![CaptureAction::StopRecorder]
            }
            RecorderPhase::Encoding => {
                log::debug!("record press ignored: encoding in progress");
                Vec::new()
            }
        }
    }

    /// Microphone access was granted.
    pub fn permission_granted(&mut self) -> Vec<CaptureAction<C>> {
        if self.phase != RecorderPhase::Recording || !self.awaiting_permission {
            log::warn!("unexpected microphone grant in phase {:?}", self.phase);
            return vec![CaptureAction::ReleaseStream];
        }
        self.awaiting_permission = false;
        log::info!("recording started");
        vec![CaptureAction::StartRecorder, CaptureAction::SetLabel(STOP_LABEL), CaptureAction::SetSuccess(false)]
    }

    /// Microphone access was refused or failed. The button label is left as is.
    pub fn permission_denied(&mut self) -> Vec<CaptureAction<C>> {
        if self.phase != RecorderPhase::Recording || !self.awaiting_permission {
            return Vec::new();
        }
        self.awaiting_permission = false;
        self.phase = RecorderPhase::Idle;
        vec![CaptureAction::Alert(MIC_DENIED_MESSAGE)]
    }

    /// The recorder could not be created or started on a granted stream.
    pub fn recorder_failed(&mut self) -> Vec<CaptureAction<C>> {
        if self.phase != RecorderPhase::Recording {
            return Vec::new();
        }
        self.phase = RecorderPhase::Idle;
        self.awaiting_permission = false;
        self.chunks.clear();
        vec![
            CaptureAction::ReleaseStream,
            CaptureAction::SetLabel(RECORD_LABEL),
            CaptureAction::Alert(MIC_DENIED_MESSAGE),
        ]
    }

    /// The recorder delivered a data chunk.
    pub fn chunk(&mut self, chunk: C) {
        if self.phase == RecorderPhase::Recording && !self.awaiting_permission {
            self.chunks.push(chunk);
        }
    }

    /// The recorder finished; decide between discarding and encoding.
    pub fn stopped(&mut self) -> Vec<CaptureAction<C>> {
        if self.phase != RecorderPhase::Recording || self.awaiting_permission {
            return Vec::new();
        }
        if self.chunks.is_empty() {
            log::info!("recording stopped with no audio; discarded");
            self.phase = RecorderPhase::Idle;
            return vec![CaptureAction::ReleaseStream, CaptureAction::SetLabel(RECORD_LABEL)];
        }
        log::info!("recording stopped with {} chunk(s); encoding", self.chunks.len());
        self.phase = RecorderPhase::Encoding;
        vec![CaptureAction::ReleaseStream, CaptureAction::Encode(std::mem::take(&mut self.chunks))]
    }

    /// Encoding produced `data_uri`.
    ///
    /// Anything that is not a non-empty `data:` URI is treated as a failure.
    pub fn encoded(&mut self, data_uri: String) -> Vec<CaptureAction<C>> {
        if self.phase != RecorderPhase::Encoding {
            return Vec::new();
        }
        if !is_data_uri(&data_uri) {
            log::error!("encoded capture is not a data URI");
            return self.encode_failed();
        }
        self.phase = RecorderPhase::Ready;
        vec![
            CaptureAction::WriteField(data_uri),
            CaptureAction::SetLabel(RERECORD_LABEL),
            CaptureAction::SetSuccess(true),
        ]
    }

    /// Encoding failed. The hidden field keeps whatever it held before.
    pub fn encode_failed(&mut self) -> Vec<CaptureAction<C>> {
        if self.phase != RecorderPhase::Encoding {
            return Vec::new();
        }
        self.phase = RecorderPhase::Idle;
        vec![CaptureAction::SetLabel(RECORD_LABEL)]
    }
}

/// Whether `value` is a base64 data URI with a payload.
#[must_use]
pub fn is_data_uri(value: &str) -> bool {
    value
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .is_some_and(|(_, payload)| !payload.is_empty())
}
