//! Push events forwarded by the page's socket client.
//!
//! Only two events matter to this layer: `progress` shows the busy indicator
//! with a message, and `done` navigates to the next step. The socket
//! transport itself is owned by the page.

#[cfg(test)]
#[path = "push_test.rs"]
mod push_test;

use serde::Deserialize;

use crate::error::PickerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushEvent {
    /// Show the busy indicator with `message`.
    Progress { message: String },
    /// Work finished; navigate to `next`.
    Done { next: String },
}

#[derive(Deserialize)]
struct DonePayload {
    next: String,
}

impl PushEvent {
    /// Parse an event by name from its JSON payload.
    ///
    /// A `progress` payload may be a JSON string or bare text.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::UnknownPushEvent`] for names outside the contract
    /// and [`PickerError::PushPayload`] when a `done` payload lacks a target.
    pub fn parse(name: &str, payload: &str) -> Result<Self, PickerError> {
        match name {
            "progress" => {
                let message =
                    serde_json::from_str::<String>(payload).unwrap_or_else(|_| payload.trim().to_owned());
                Ok(Self::Progress { message })
            }
            "done" => {
                let done: DonePayload =
                    serde_json::from_str(payload).map_err(|e| PickerError::PushPayload(e.to_string()))?;
                if done.next.trim().is_empty() {
                    return Err(PickerError::PushPayload("done event without next url".to_owned()));
                }
                Ok(Self::Done { next: done.next })
            }
            other => Err(PickerError::UnknownPushEvent(other.to_owned())),
        }
    }
}
