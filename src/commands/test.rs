//! Connectivity test command

use crate::api::SlackClient;
use crate::config::Config;
use crate::error::Result;

pub async fn run() -> Result<()> {
    let config = Config::from_env()?;
    let client = SlackClient::new(config)?;

    let ok = client.test().await?;
    println!("{}", ok);

    Ok(())
}
