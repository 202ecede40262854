//! Slack Channel History Exporter Library
//!
//! This library provides tools to:
//! - Export the complete message history of a Slack channel to a log file,
//!   paginating through the size-limited history API
//! - Dump the full user and channel lists to JSON files
//! - Test API connectivity and credentials

pub mod api;
pub mod commands;
pub mod config;
pub mod envelope;
pub mod error;
pub mod export;
pub mod model;

// Re-export common types
pub use api::{SlackClient, PAGE_SIZE};
pub use config::Config;
pub use error::{Error, Result};
pub use export::Exporter;
pub use model::{Channel, ChannelDirectory, Message};
