//! Slack exporter CLI - main entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use slack_exporter::commands;

#[derive(Parser)]
#[command(name = "slack_exporter")]
#[command(about = "Export Slack channel history to a log file", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API connectivity and credentials
    Test,

    /// Dump all users in the team to users.json
    ListUsers,

    /// Dump all channels in the team to channels.json
    ListChannels,

    /// Export the full message history of a channel
    Export {
        /// Channel id to export (e.g. C0123456789)
        #[arg(short, long)]
        channel_id: String,

        /// Timestamp. End of time range of messages to include (exclusive)
        #[arg(long)]
        start: Option<String>,

        /// Timestamp. Start of time range of messages to include (inclusive)
        #[arg(long)]
        end: Option<String>,

        /// Directory to write the log file into (defaults to the data dir)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for local development
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("slack_exporter=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Test => commands::test::run().await?,
        Commands::ListUsers => commands::list_users::run().await?,
        Commands::ListChannels => commands::list_channels::run().await?,
        Commands::Export {
            channel_id,
            start,
            end,
            output_dir,
        } => {
            commands::export::run(
                &channel_id,
                start.as_deref(),
                end.as_deref(),
                output_dir.as_deref(),
            )
            .await?;
        }
    }

    Ok(())
}
