//! Opt-in AJAX form submission.
//!
//! Forms marked `data-ajax` are posted in the background instead of
//! navigating. The server answers with JSON carrying either a redirect
//! target (`next_url`, or `next`) or `started: true` when a background job was
//! accepted and progress will arrive as push events.
//!
//! The page's socket id, when known, rides along as the `sid` query
//! parameter so the server can route progress events back to this page.
//!
//! ERROR HANDLING
//! ==============
//! Any other answer, including an unparseable body, is `Malformed`. The host
//! reports it to the console and the user and hides the busy indicator so
//! the page is not left stuck loading.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use serde::Deserialize;

use crate::consts::DEFAULT_BUSY_MESSAGE;
#[cfg(feature = "hydrate")]
use crate::error::PickerError;

/// JSON body returned by an AJAX form endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub next_url: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub started: Option<bool>,
}

/// What the page should do after an AJAX submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Navigate to this URL.
    Redirect(String),
    /// A job was accepted; keep the busy indicator up and wait for push events.
    Started,
    /// The response carried nothing usable.
    Malformed,
}

impl SubmitResponse {
    /// Classify the response. A redirect target wins over `started`.
    #[must_use]
    pub fn outcome(&self) -> SubmitOutcome {
        let target = [&self.next_url, &self.next]
            .into_iter()
            .flatten()
            .map(|url| url.trim())
            .find(|url| !url.is_empty());
        if let Some(url) = target {
            return SubmitOutcome::Redirect(url.to_owned());
        }
        if self.started == Some(true) {
            return SubmitOutcome::Started;
        }
        SubmitOutcome::Malformed
    }
}

/// Parse and classify a raw response body.
#[must_use]
pub fn parse_submit_response(body: &str) -> SubmitOutcome {
    match serde_json::from_str::<SubmitResponse>(body) {
        Ok(resp) => resp.outcome(),
        Err(e) => {
            log::warn!("submit response is not the expected JSON: {e}");
            SubmitOutcome::Malformed
        }
    }
}

/// Query parameter carrying the page's socket id.
pub const SID_PARAM: &str = "sid";

/// Request URL for a form `action`, with `sid` set when a socket id is known.
///
/// An existing `sid` pair is replaced; other query pairs and the fragment
/// are kept.
#[must_use]
pub fn action_url(action: &str, sid: Option<&str>) -> String {
    let Some(sid) = sid.map(str::trim).filter(|sid| !sid.is_empty()) else {
        return action.to_owned();
    };
    let (base, fragment) = match action.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (action, None),
    };
    let (path, query) = base.split_once('?').unwrap_or((base, ""));
    let mut pairs: Vec<String> = query
        .split('&')
        .filter(|pair| !pair.is_empty() && pair.split('=').next() != Some(SID_PARAM))
        .map(str::to_owned)
        .collect();
    pairs.push(format!("{SID_PARAM}={}", urlencoding::encode(sid)));

    let mut url = format!("{path}?{}", pairs.join("&"));
    if let Some(fragment) = fragment {
        url.push('#');
        url.push_str(fragment);
    }
    url
}

/// Busy message for a form, from its `data-msg` attribute.
#[must_use]
pub fn busy_message(data_msg: Option<&str>) -> String {
    data_msg
        .map(str::trim)
        .filter(|msg| !msg.is_empty())
        .unwrap_or(DEFAULT_BUSY_MESSAGE)
        .to_owned()
}

/// POST `form` as multipart data to its `action` (tagged with `sid`) and
/// classify the answer.
///
/// # Errors
///
/// Returns an error if the form data cannot be built or the request fails
/// before a body is received.
#[cfg(feature = "hydrate")]
pub async fn post_form(form: &web_sys::HtmlFormElement, sid: Option<&str>) -> Result<SubmitOutcome, PickerError> {
    let body = web_sys::FormData::new_with_form(form)?;
    let url = action_url(&form.action(), sid);
    let resp = gloo_net::http::Request::post(&url)
        .body(body)
        .map_err(|e| PickerError::Js(e.to_string()))?
        .send()
        .await
        .map_err(|e| PickerError::Js(e.to_string()))?;
    let status = resp.status();
    if !(200..300).contains(&status) {
        log::warn!("submit returned status {status}");
    }
    let text = resp.text().await.map_err(|e| PickerError::Js(e.to_string()))?;
    Ok(parse_submit_response(&text))
}
