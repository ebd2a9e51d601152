//! Error handling for Courtside
//!
//! Provides error types for every layer of the designer:
//! - Design errors (element lookups, invalid values, save validation)
//! - API errors (save and AI endpoint calls)
//! - Configuration errors (settings files)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Design error type
///
/// Represents errors raised by the state store and the payload builders.
/// Gesture misses are not errors; the pointer controller reports them as
/// no-ops instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    /// No element with this id exists in the session
    #[error("Element {id} not found")]
    ElementNotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// The element is locked against the requested change
    #[error("Element {id} is locked")]
    ElementLocked {
        /// The locked element's id.
        id: u64,
    },

    /// A numeric value is not usable (NaN or infinite)
    #[error("Invalid value for {field}: {value}")]
    InvalidValue {
        /// The field that received the value.
        field: String,
        /// The rejected value.
        value: f64,
    },

    /// An operation needs a product but none is selected
    #[error("No product selected")]
    ProductNotSet,

    /// The design cannot be submitted as it stands
    #[error("{reason}")]
    Validation {
        /// A user-facing explanation.
        reason: String,
    },
}

/// API error type
///
/// Represents failures talking to the save and AI endpoints.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// A save request is already running for this session
    #[error("A save is already in progress")]
    SaveInFlight,

    /// The request could not be sent or the connection failed
    #[error("Request failed: {reason}")]
    Transport {
        /// The reason reported by the HTTP client.
        reason: String,
    },

    /// The server answered with a non-success status
    #[error("Server returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },

    /// The request timed out
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// The response body could not be decoded
    #[error("Failed to decode response: {reason}")]
    Decode {
        /// The decoder's message.
        reason: String,
    },

    /// The configured base URL is not usable
    #[error("Invalid API URL: {url}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
    },
}

/// Configuration error type
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    /// A setting holds a value outside its allowed range
    #[error("Invalid setting {setting}: {reason}")]
    InvalidSetting {
        /// The setting key.
        setting: String,
        /// Why the value is rejected.
        reason: String,
    },

    /// The file extension is neither .toml nor .json
    #[error("Config file must be .json or .toml: {path}")]
    UnsupportedFormat {
        /// The path that was given.
        path: String,
    },

    /// The file could not be parsed or serialized
    #[error("Config parse error: {reason}")]
    Parse {
        /// The parser's message.
        reason: String,
    },
}

/// Main error type for Courtside
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Design error
    #[error(transparent)]
    Design(#[from] DesignError),

    /// API error
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Api(ApiError::Timeout { .. }))
    }

    /// Check if this is an API error
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api(_))
    }

    /// Check if this is a design error
    pub fn is_design_error(&self) -> bool {
        matches!(self, Error::Design(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
