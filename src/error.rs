//! Error types for the Slack exporter

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport error: Response={status}, Detail={detail}")]
    Transport { status: u16, detail: String },

    #[error("Not ok from slack, detail: {0}")]
    Protocol(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cursor did not advance past ts {0}, aborting export")]
    NoProgress(String),

    #[error("Channel not found in listing: {0}")]
    ChannelNotFound(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_transport() {
        let err = Error::Transport {
            status: 503,
            detail: "retry-after: 30".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("retry-after: 30"));
    }

    #[test]
    fn test_error_display_protocol() {
        let err = Error::Protocol("rate_limited".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Not ok from slack"));
        assert!(msg.contains("rate_limited"));
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("SLACKAPI_TOKEN is not set".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("SLACKAPI_TOKEN"));
    }

    #[test]
    fn test_error_display_no_progress() {
        let err = Error::NoProgress("1612345678.000200".to_string());
        let msg = err.to_string();
        assert!(msg.contains("did not advance"));
        assert!(msg.contains("1612345678.000200"));
    }

    #[test]
    fn test_error_display_channel_not_found() {
        let err = Error::ChannelNotFound("C0123456789".to_string());
        assert!(err.to_string().contains("Channel not found"));
        assert!(err.to_string().contains("C0123456789"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(err.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_error_debug_impl() {
        let err = Error::NoProgress("1.0".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("NoProgress"));
    }

    #[test]
    fn test_error_from_io_various_kinds() {
        let kinds = [
            std::io::ErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied,
            std::io::ErrorKind::ConnectionRefused,
            std::io::ErrorKind::TimedOut,
        ];

        for kind in kinds {
            let io_err = std::io::Error::new(kind, "test");
            let err: Error = io_err.into();
            assert!(matches!(err, Error::Io(_)));
        }
    }

    #[test]
    fn test_result_type_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<i32> = Err(Error::Protocol("test".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_error_all_variants_display_nonempty() {
        let variants: Vec<Error> = vec![
            Error::Transport {
                status: 500,
                detail: "server error".to_string(),
            },
            Error::Protocol("invalid_auth".to_string()),
            Error::Config("missing token".to_string()),
            Error::NoProgress("2.0".to_string()),
            Error::ChannelNotFound("C1".to_string()),
            Error::Io(std::io::Error::other("io")),
            Error::Serialization(serde_json::from_str::<i32>("x").unwrap_err()),
        ];

        for err in variants {
            assert!(!err.to_string().is_empty());
        }
    }
}
