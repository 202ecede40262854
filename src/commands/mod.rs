//! Command implementations
//!
//! Each module corresponds to a subcommand in the CLI.

pub mod export;
pub mod list_channels;
pub mod list_users;
pub mod test;
