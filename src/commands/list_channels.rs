//! Dump the full channel list to channels.json

use std::fs;

use tracing::info;

use crate::api::SlackClient;
use crate::config::Config;
use crate::error::Result;

pub async fn run() -> Result<()> {
    let config = Config::from_env()?;
    let data_dir = config.data_dir.clone();
    let client = SlackClient::new(config)?;

    let channels = client.channels_list().await?;

    fs::create_dir_all(&data_dir)?;
    let path = data_dir.join("channels.json");
    fs::write(&path, serde_json::to_string(&channels)?)?;

    info!("Wrote {} channels to {}", channels.len(), path.display());
    Ok(())
}
