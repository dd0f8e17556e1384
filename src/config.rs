//! Picker configuration parsed from `data-picker-*` attributes.
//!
//! The page template may override capacity, element ids and log level by
//! placing attributes on `<body>`. Every key is optional.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{
    DEFAULT_AUDIO_FIELD_ID, DEFAULT_CAPACITY, DEFAULT_DROP_ZONE_ID, DEFAULT_FILE_INPUT_ID, DEFAULT_GRID_ID,
    DEFAULT_RECORD_BUTTON_ID, DEFAULT_SUBMIT_ID,
};
use crate::error::PickerError;

pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Ids of the DOM elements the picker binds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub grid: String,
    pub submit: String,
    pub file_input: String,
    pub drop_zone: String,
    pub record_button: String,
    pub audio_field: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            grid: DEFAULT_GRID_ID.to_owned(),
            submit: DEFAULT_SUBMIT_ID.to_owned(),
            file_input: DEFAULT_FILE_INPUT_ID.to_owned(),
            drop_zone: DEFAULT_DROP_ZONE_ID.to_owned(),
            record_button: DEFAULT_RECORD_BUTTON_ID.to_owned(),
            audio_field: DEFAULT_AUDIO_FIELD_ID.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    /// Maximum number of checked assets (MAX).
    pub capacity: usize,
    pub ids: ElementIds,
    pub log_level: log::Level,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self { capacity: DEFAULT_CAPACITY, ids: ElementIds::default(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl PickerConfig {
    /// Build typed picker config from a key lookup.
    ///
    /// `lookup` receives the key without the `data-picker-` prefix.
    ///
    /// Optional:
    /// - `max`: capacity, default 3, must be at least 1
    /// - `grid`, `submit`, `file`, `drop-zone`, `record`, `audio-field`: element ids
    /// - `log-level`: `error`, `warn`, `info` (default), `debug` or `trace`
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::Config`] when `max` or `log-level` cannot be parsed,
    /// or when an id override is blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PickerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ElementIds::default();
        let capacity = parse_capacity(lookup("max").as_deref())?;
        let ids = ElementIds {
            grid: id_or_default(&lookup, "grid", defaults.grid)?,
            submit: id_or_default(&lookup, "submit", defaults.submit)?,
            file_input: id_or_default(&lookup, "file", defaults.file_input)?,
            drop_zone: id_or_default(&lookup, "drop-zone", defaults.drop_zone)?,
            record_button: id_or_default(&lookup, "record", defaults.record_button)?,
            audio_field: id_or_default(&lookup, "audio-field", defaults.audio_field)?,
        };
        let log_level = parse_log_level(lookup("log-level").as_deref())?;

        Ok(Self { capacity, ids, log_level })
    }
}

fn parse_capacity(raw: Option<&str>) -> Result<usize, PickerError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_CAPACITY);
    };
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(PickerError::Config("max must be at least 1".to_owned())),
        Ok(n) => Ok(n),
        Err(_) => Err(PickerError::Config(format!("invalid max '{raw}'"))),
    }
}

fn parse_log_level(raw: Option<&str>) -> Result<log::Level, PickerError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_LOG_LEVEL);
    };
    raw.trim().parse::<log::Level>().map_err(|_| {
        PickerError::Config(format!(
            "unsupported log-level '{raw}' (expected error, warn, info, debug or trace)"
        ))
    })
}

fn id_or_default<F>(lookup: &F, key: &str, default: String) -> Result<String, PickerError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Err(PickerError::Config(format!("empty element id for '{key}'"))),
        Some(raw) => Ok(raw.trim().to_owned()),
    }
}
