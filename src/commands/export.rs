//! Channel history export command

use std::fs;
use std::path::Path;

use crate::api::SlackClient;
use crate::config::Config;
use crate::error::Result;
use crate::export::Exporter;

pub async fn run(
    channel_id: &str,
    start_ts: Option<&str>,
    end_ts: Option<&str>,
    output_dir: Option<&Path>,
) -> Result<()> {
    let config = Config::from_env()?;
    let data_dir = config.data_dir.clone();
    let client = SlackClient::new(config)?;
    let exporter = Exporter::new(client);

    let dst_dir = output_dir.unwrap_or(&data_dir);
    fs::create_dir_all(dst_dir)?;

    let path = exporter
        .export_channel(channel_id, start_ts, end_ts, dst_dir)
        .await?;
    println!("Export finished: {}", path.display());

    Ok(())
}
