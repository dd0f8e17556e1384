use super::*;

// =============================================================
// Helpers
// =============================================================

/// Minimal stand-in for the record button and hidden field.
#[derive(Default)]
struct FakeControl {
    field: String,
    label: &'static str,
    success: bool,
    alerts: Vec<&'static str>,
    encoded: Vec<Vec<u8>>,
}

impl FakeControl {
    fn new() -> Self {
        Self { label: RECORD_LABEL, ..Self::default() }
    }

    fn apply(&mut self, actions: Vec<CaptureAction<u8>>) {
        for action in actions {
            match action {
                CaptureAction::WriteField(value) => self.field = value,
                CaptureAction::SetLabel(label) => self.label = label,
                CaptureAction::SetSuccess(success) => self.success = success,
                CaptureAction::Alert(message) => self.alerts.push(message),
                CaptureAction::Encode(chunks) => self.encoded.push(chunks),
                CaptureAction::RequestMicrophone
                | CaptureAction::StartRecorder
                | CaptureAction::StopRecorder
                | CaptureAction::ReleaseStream => {}
            }
        }
    }
}

fn recording_session() -> (RecordingSession<u8>, FakeControl) {
    let mut session = RecordingSession::new();
    let mut control = FakeControl::new();
    control.apply(session.press());
    control.apply(session.permission_granted());
    (session, control)
}

const CAPTURE: &str = "data:audio/webm;base64,GkXfo59ChoEBQveBAULygQRC84EIQoKE";

// =============================================================
// Press / permission
// =============================================================

#[test]
fn new_session_is_idle() {
    let session: RecordingSession<u8> = RecordingSession::new();
    assert_eq!(session.phase(), RecorderPhase::Idle);
}

#[test]
fn press_from_idle_requests_microphone() {
    let mut session: RecordingSession<u8> = RecordingSession::new();
    assert_eq!(session.press(), vec![CaptureAction::RequestMicrophone]);
    assert_eq!(session.phase(), RecorderPhase::Recording);
}

#[test]
fn press_while_permission_pending_is_ignored() {
    let mut session: RecordingSession<u8> = RecordingSession::new();
    session.press();
    assert!(session.press().is_empty());
}

#[test]
fn grant_starts_recorder_and_shows_stop_label() {
    let mut session: RecordingSession<u8> = RecordingSession::new();
    session.press();
    assert_eq!(
        session.permission_granted(),
        vec![CaptureAction::StartRecorder, CaptureAction::SetLabel(STOP_LABEL), CaptureAction::SetSuccess(false)]
    );
}

#[test]
fn late_grant_releases_stream() {
    let mut session: RecordingSession<u8> = RecordingSession::new();
    assert_eq!(session.permission_granted(), vec![CaptureAction::ReleaseStream]);
    assert_eq!(session.phase(), RecorderPhase::Idle);
}

#[test]
fn denial_alerts_and_returns_to_idle_without_relabel() {
    let mut session: RecordingSession<u8> = RecordingSession::new();
    let mut control = FakeControl::new();
    control.apply(session.press());
    control.apply(session.permission_denied());
    assert_eq!(session.phase(), RecorderPhase::Idle);
    assert_eq!(control.alerts, vec![MIC_DENIED_MESSAGE]);
    assert_eq!(control.label, RECORD_LABEL);
}

#[test]
fn denial_after_ready_keeps_rerecord_label_and_field() {
    let (mut session, mut control) = recording_session();
    session.chunk(1);
    control.apply(session.press());
    control.apply(session.stopped());
    control.apply(session.encoded(CAPTURE.to_owned()));

    control.apply(session.press());
    control.apply(session.permission_denied());
    assert_eq!(session.phase(), RecorderPhase::Idle);
    assert_eq!(control.label, RERECORD_LABEL);
    assert_eq!(control.field, CAPTURE);
}

#[test]
fn recorder_failure_releases_stream_and_resets() {
    let (mut session, mut control) = recording_session();
    session.chunk(1);
    let actions = session.recorder_failed();
    assert_eq!(actions.first(), Some(&CaptureAction::ReleaseStream));
    control.apply(actions);
    assert_eq!(session.phase(), RecorderPhase::Idle);
    assert_eq!(session.chunk_count(), 0);
    assert_eq!(control.label, RECORD_LABEL);
    assert_eq!(control.alerts, vec![MIC_DENIED_MESSAGE]);
}

// =============================================================
// Stop / encode
// =============================================================

#[test]
fn press_while_recording_requests_stop_once() {
    let (mut session, _) = recording_session();
    assert_eq!(session.press(), vec![CaptureAction::StopRecorder]);
    assert!(session.press().is_empty());
}

#[test]
fn chunks_before_grant_are_ignored() {
    let mut session: RecordingSession<u8> = RecordingSession::new();
    session.press();
    session.chunk(9);
    assert_eq!(session.chunk_count(), 0);
}

#[test]
fn recording_with_chunks_writes_data_uri_to_field() {
    let (mut session, mut control) = recording_session();
    session.chunk(1);
    session.chunk(2);
    control.apply(session.press());
    control.apply(session.stopped());
    assert_eq!(session.phase(), RecorderPhase::Encoding);
    assert_eq!(control.encoded, vec![vec![1, 2]]);

    control.apply(session.encoded(CAPTURE.to_owned()));
    assert_eq!(session.phase(), RecorderPhase::Ready);
    assert_eq!(control.field, CAPTURE);
    assert!(!control.field.is_empty());
    assert_eq!(control.label, RERECORD_LABEL);
    assert!(control.success);
}

#[test]
fn empty_recording_keeps_field_and_restores_label() {
    let (mut session, mut control) = recording_session();
    assert_eq!(control.label, STOP_LABEL);
    control.apply(session.press());
    control.apply(session.stopped());
    assert_eq!(session.phase(), RecorderPhase::Idle);
    assert_eq!(control.field, "");
    assert_eq!(control.label, RECORD_LABEL);
    assert!(control.encoded.is_empty());
}

#[test]
fn stopped_releases_stream_before_encoding() {
    let (mut session, _) = recording_session();
    session.chunk(7);
    session.press();
    assert_eq!(session.stopped(), vec![CaptureAction::ReleaseStream, CaptureAction::Encode(vec![7])]);
}

#[test]
fn press_while_encoding_is_ignored() {
    let (mut session, _) = recording_session();
    session.chunk(1);
    session.press();
    session.stopped();
    assert!(session.press().is_empty());
    assert_eq!(session.phase(), RecorderPhase::Encoding);
}

#[test]
fn rerecording_overwrites_previous_capture() {
    let (mut session, mut control) = recording_session();
    session.chunk(1);
    control.apply(session.press());
    control.apply(session.stopped());
    control.apply(session.encoded(CAPTURE.to_owned()));

    control.apply(session.press());
    control.apply(session.permission_granted());
    assert_eq!(session.chunk_count(), 0);
    session.chunk(3);
    control.apply(session.press());
    control.apply(session.stopped());
    control.apply(session.encoded("data:audio/webm;base64,AAAA".to_owned()));
    assert_eq!(control.field, "data:audio/webm;base64,AAAA");
    assert_eq!(control.encoded, vec![vec![1], vec![3]]);
}

#[test]
fn empty_rerecording_keeps_previous_capture() {
    let (mut session, mut control) = recording_session();
    session.chunk(1);
    control.apply(session.press());
    control.apply(session.stopped());
    control.apply(session.encoded(CAPTURE.to_owned()));

    control.apply(session.press());
    control.apply(session.permission_granted());
    control.apply(session.press());
    control.apply(session.stopped());
    assert_eq!(control.field, CAPTURE);
    assert_eq!(control.label, RECORD_LABEL);
}

#[test]
fn malformed_encoding_result_reverts_to_idle() {
    let (mut session, mut control) = recording_session();
    session.chunk(1);
    control.apply(session.press());
    control.apply(session.stopped());
    control.apply(session.encoded("not a uri".to_owned()));
    assert_eq!(session.phase(), RecorderPhase::Idle);
    assert_eq!(control.field, "");
    assert_eq!(control.label, RECORD_LABEL);
}

#[test]
fn encode_failure_outside_encoding_is_ignored() {
    let mut session: RecordingSession<u8> = RecordingSession::new();
    assert!(session.encode_failed().is_empty());
    assert!(session.encoded(CAPTURE.to_owned()).is_empty());
}

// =============================================================
// is_data_uri
// =============================================================

#[test]
fn is_data_uri_requires_base64_payload() {
    assert!(is_data_uri(CAPTURE));
    assert!(!is_data_uri("data:audio/webm;base64,"));
    assert!(!is_data_uri("data:,hello"));
    assert!(!is_data_uri("blob:https://example.test/1"));
    assert!(!is_data_uri(""));
}
