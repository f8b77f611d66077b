use std::fmt;

// === ApiError ===

/// Errors from a request/response round trip with the bookmark service.
///
/// All variants are one "request failed" kind to the user: transport
/// failures, non-success statuses, and undecodable bodies are distinguished
/// here for logging but handled identically at the notification point.
#[derive(Debug)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS, timeout).
    Transport(String),
    /// The server answered with a non-success HTTP status.
    Status(u16),
    /// The response body could not be decoded as the expected JSON shape.
    InvalidBody(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Request failed: {}", msg),
            ApiError::Status(code) => write!(f, "Request failed with status {}", code),
            ApiError::InvalidBody(msg) => write!(f, "Invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

// === SettingsError ===

/// Errors related to client settings loading and saving.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing the settings file.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
