//! Bulk history export: pagination engine and log writer
//!
//! The engine walks `channels.history` backwards in fixed-size pages,
//! carrying the oldest timestamp of the previous page as the `latest`
//! bound of the next request. A page shorter than the page size is the
//! sole termination signal; the advisory total from `search.messages`
//! only sizes the progress output. The run is all-or-nothing: no file is
//! written unless every page was fetched.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::api::{SlackClient, PAGE_SIZE};
use crate::error::{Error, Result};
use crate::model::Message;

pub struct Exporter {
    client: SlackClient,
    page_size: usize,
}

impl Exporter {
    pub fn new(client: SlackClient) -> Self {
        Self {
            client,
            page_size: PAGE_SIZE,
        }
    }

    /// Engine with a custom page size, used by tests to exercise the loop
    /// without thousand-message fixtures.
    pub fn with_page_size(client: SlackClient, page_size: usize) -> Self {
        Self {
            client,
            page_size: page_size.max(1),
        }
    }

    /// Fetch every message in `channel_id` strictly older than `start_ts`
    /// and not older than `end_ts`, newest first across all pages.
    pub async fn collect_history(
        &self,
        channel_id: &str,
        channel_name: &str,
        start_ts: Option<&str>,
        end_ts: Option<&str>,
    ) -> Result<Vec<Message>> {
        let total = self.client.message_count(channel_name).await?;
        info!("Message total {} items", total);

        let expected_attempts = expected_attempts(total, self.page_size);

        let mut messages: Vec<Message> = Vec::new();
        let mut cursor: Option<String> = start_ts.map(str::to_string);
        let mut attempt: u64 = 1;

        loop {
            info!(
                "Getting {}/{} from {} to next {}.",
                attempt,
                expected_attempts,
                cursor.as_deref().unwrap_or("Latest"),
                self.page_size
            );

            let page = self
                .client
                .history_page(channel_id, self.page_size, cursor.as_deref(), end_ts)
                .await?;

            let page_len = page.len();
            // Pages come newest-first; the tail is the oldest entry and
            // the continuation point for the next request.
            let tail_ts = page.last().map(|raw| raw.ts.clone());

            messages.extend(page.into_iter().map(Message::from));

            // A short page means the earliest available message was
            // reached.
            if page_len < self.page_size {
                break;
            }

            let next_cursor = match tail_ts {
                Some(ts) => ts,
                None => break,
            };

            // A full page whose tail equals the current cursor would
            // refetch the same page forever.
            if cursor.as_deref() == Some(next_cursor.as_str()) {
                return Err(Error::NoProgress(next_cursor));
            }

            cursor = Some(next_cursor);
            attempt += 1;
        }

        Ok(messages)
    }

    /// Run a full export: resolve the channel name from the listing, pull
    /// the complete history and write one log file.
    pub async fn export_channel(
        &self,
        channel_id: &str,
        start_ts: Option<&str>,
        end_ts: Option<&str>,
        dst_dir: &Path,
    ) -> Result<PathBuf> {
        let directory = self.client.channel_directory().await?;
        let channel_name = directory.name_of(channel_id)?.to_string();

        let messages = self
            .collect_history(channel_id, &channel_name, start_ts, end_ts)
            .await?;

        write_log(&messages, &channel_name, dst_dir)
    }
}

fn expected_attempts(total: u64, page_size: usize) -> u64 {
    total.div_ceil(page_size as u64).max(1)
}

/// Render the accumulated messages in fetch order and write
/// `log_<channelname>.md` under `dst_dir`.
pub fn write_log(messages: &[Message], channel_name: &str, dst_dir: &Path) -> Result<PathBuf> {
    let mut out = String::new();
    for message in messages {
        out.push_str(&message.to_string());
        out.push('\n');
    }

    let path = dst_dir.join(format!("log_{}.md", channel_name));
    fs::write(&path, out)?;

    info!("Wrote {} messages to {}", messages.len(), path.display());
    Ok(path)
}
