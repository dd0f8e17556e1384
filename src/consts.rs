//! Shared constants for the picker crate.

// ── Capacity ────────────────────────────────────────────────────

/// Default number of assets a user may select for one card.
pub const DEFAULT_CAPACITY: usize = 3;

// ── DOM contract ────────────────────────────────────────────────

/// Default element ids, matching the server-rendered picker template.
pub const DEFAULT_GRID_ID: &str = "grid";
pub const DEFAULT_SUBMIT_ID: &str = "btn";
pub const DEFAULT_FILE_INPUT_ID: &str = "file";
pub const DEFAULT_DROP_ZONE_ID: &str = "dz";
pub const DEFAULT_RECORD_BUTTON_ID: &str = "recBtn";
pub const DEFAULT_AUDIO_FIELD_ID: &str = "audio_b64";

/// Name of the checkbox carrying a remote thumbnail identifier.
pub const REMOTE_FIELD_NAME: &str = "url";

/// Prefix of the `<body>` attributes read by [`crate::config::PickerConfig`].
pub const CONFIG_ATTR_PREFIX: &str = "data-picker-";

// ── Visual state ────────────────────────────────────────────────

/// Class toggled on a thumbnail image while its asset is checked.
pub const SELECTED_CLASS: &str = "sel";

/// Class added to the record button once a capture is stored.
pub const SUCCESS_CLASS: &str = "success";

/// Drop-zone border color while a drag hovers over it.
pub const DROP_ZONE_ACTIVE_BORDER: &str = "#2196f3";

/// Drop-zone border color at rest.
pub const DROP_ZONE_IDLE_BORDER: &str = "#888";

// ── Recording ───────────────────────────────────────────────────

pub const RECORD_LABEL: &str = "🎤 Record";
pub const STOP_LABEL: &str = "⏹️ Stop";
pub const RERECORD_LABEL: &str = "🎤 Re-record";

/// Container type of the encoded capture.
pub const AUDIO_MIME: &str = "audio/webm";

/// Alert shown when the user (or browser) refuses microphone access.
pub const MIC_DENIED_MESSAGE: &str = "Could not access microphone.";

// ── AJAX submit ─────────────────────────────────────────────────

/// Busy message used when an AJAX form does not carry `data-msg`.
pub const DEFAULT_BUSY_MESSAGE: &str = "Working…";

/// Alert shown when an AJAX submit does not yield a usable response.
pub const SUBMIT_FAILED_MESSAGE: &str = "Request failed – check console.";

/// Ids of the busy overlay elements provided by the page layout.
pub const OVERLAY_ID: &str = "l2-overlay";
pub const OVERLAY_MESSAGE_ID: &str = "l2-msg";
