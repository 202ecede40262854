//! Typed records decoded at the API boundary

use std::collections::HashMap;
use std::fmt;

use chrono::DateTime;
use serde::Deserialize;

use crate::error::{Error, Result};

/// One history entry as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMessage {
    pub ts: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Missing or null for some integration-posted messages
    /// (e.g. IFTTT Twitter forwards carry no text).
    #[serde(default)]
    pub text: Option<String>,
}

/// Immutable record of one historical event.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    ts: String,
    kind: String,
    text: String,
}

impl Message {
    /// Raw fractional-seconds timestamp, kept verbatim as the cursor value.
    pub fn ts(&self) -> &str {
        &self.ts
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display timestamp derived from the integral seconds of `ts`.
    pub fn formatted_ts(&self) -> String {
        self.ts
            .parse::<f64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs as i64, 0))
            .map(|dt| dt.format("%Y/%m/%d %H:%M:%S").to_string())
            .unwrap_or_else(|| self.ts.clone())
    }
}

impl From<RawMessage> for Message {
    fn from(raw: RawMessage) -> Self {
        Self {
            ts: raw.ts,
            kind: raw.kind,
            text: raw.text.unwrap_or_default(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.formatted_ts())?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)?;
        writeln!(f, "ts:{}, type:{}", self.ts, self.kind)
    }
}

/// A conversation as returned by `conversations.list`.
#[derive(Debug, Clone, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
    /// Absent on many channels; absence is not an error.
    #[serde(default, deserialize_with = "purpose_value")]
    pub purpose: Option<String>,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}): {}",
            self.name,
            self.id,
            self.purpose.as_deref().unwrap_or("")
        )
    }
}

/// The wire shape is a nested object: `{"purpose": {"value": "..."}}`.
fn purpose_value<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Purpose {
        #[serde(default)]
        value: Option<String>,
    }

    let purpose: Option<Purpose> = Option::deserialize(deserializer)?;
    Ok(purpose.and_then(|p| p.value).filter(|v| !v.is_empty()))
}

/// Full channel listing keyed by id, built once per export run.
#[derive(Debug, Default)]
pub struct ChannelDirectory {
    channels: HashMap<String, Channel>,
}

impl ChannelDirectory {
    pub fn new(channels: Vec<Channel>) -> Self {
        Self {
            channels: channels.into_iter().map(|ch| (ch.id.clone(), ch)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Channel> {
        self.channels.get(id)
    }

    /// Display name of a channel, needed for the count-estimation query
    /// and the log file name.
    pub fn name_of(&self, id: &str) -> Result<&str> {
        self.channels
            .get(id)
            .map(|ch| ch.name.as_str())
            .ok_or_else(|| Error::ChannelNotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
