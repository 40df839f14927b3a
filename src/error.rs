use std::io;
use thiserror::Error;

pub type RelayResult<T> = Result<T, RelayError>;

/// Notification relay errors
#[derive(Error, Debug)]
pub enum RelayError {
    /// IO error (config file access, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Payload could not be decoded from the wire
    #[error("Payload decode error: {0}")]
    PayloadDecode(#[from] serde_json::Error),

    /// Platform notification display failed
    #[error("Display error: {0}")]
    Display(String),

    /// The push subscription was closed by the transport side
    #[error("Push subscription closed")]
    SubscriptionClosed,
}
