//! Response envelope validation
//!
//! Every Slack Web API response passes through here: the transport status
//! is checked first, then the service-level `ok` flag inside the JSON body.
//! A failed check is fatal to the current run; there is no retry at this
//! layer.

use reqwest::header::HeaderMap;
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct EnvelopeProbe {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Consume a response and return its validated decoded body.
pub async fn validate<T: DeserializeOwned>(response: Response, title: &str) -> Result<T> {
    let status = response.status();
    let detail = render_headers(response.headers());
    debug!(%title, status = status.as_u16(), headers = %detail, "Response");

    if !status.is_success() {
        return Err(Error::Transport {
            status: status.as_u16(),
            detail,
        });
    }

    let body = response.text().await?;
    decode(&body)
}

/// Decode an already-received body against the envelope and the target
/// type. Split out from [`validate`] so a body can be re-checked without
/// another network round trip.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    let probe: EnvelopeProbe = serde_json::from_str(body)?;
    if !probe.ok {
        return Err(Error::Protocol(
            probe.error.unwrap_or_else(|| "unknown".to_string()),
        ));
    }

    serde_json::from_str(body).map_err(Error::from)
}

fn render_headers(headers: &HeaderMap) -> String {
    let mut parts: Vec<String> = headers
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value.to_str().unwrap_or("<binary>")))
        .collect();
    parts.sort();
    parts.join(", ")
}
