//! Error types for the Overload core library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::PlanId;

/// Comprehensive error type for all plan operations.
#[derive(Error, Debug)]
pub enum OverloadError {
    /// Network or server failure. `status` is absent when the request never
    /// produced an HTTP response (refused connection, timeout, DNS).
    #[error("{}", transport_message(.status, .message))]
    Transport {
        status: Option<u16>,
        message: String,
    },
    /// Plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    NotFound { id: PlanId },
    /// Client-side draft validation failure
    #[error("Validation failed: {reason}")]
    Validation { reason: String },
    /// The server answered with a body that is not a usable plan
    #[error("Invalid response from plan store: {message}")]
    InvalidResponse { message: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

fn transport_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(status) => format!("Transport error (HTTP {status}): {message}"),
        None => format!("Transport error: {message}"),
    }
}

/// Builder for creating transport errors with an optional status.
pub struct TransportErrorBuilder {
    status: Option<u16>,
}

impl TransportErrorBuilder {
    /// Create a new transport error builder.
    pub fn new(status: Option<u16>) -> Self {
        Self { status }
    }

    /// Build the error with the given message.
    pub fn with_message(self, message: impl Into<String>) -> OverloadError {
        OverloadError::Transport {
            status: self.status,
            message: message.into(),
        }
    }
}

impl OverloadError {
    /// Creates a builder for transport errors.
    pub fn transport(status: Option<u16>) -> TransportErrorBuilder {
        TransportErrorBuilder::new(status)
    }

    /// Creates a validation error naming the first unmet condition.
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// Creates an invalid-response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Whether this error came from the transport rather than the client.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// HTTP status carried by a transport error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            Self::NotFound { .. } => Some(404),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OverloadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::invalid_response(err.to_string());
        }
        Self::transport(err.status().map(|s| s.as_u16())).with_message(err.to_string())
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to OverloadError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| OverloadError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for plan operations
pub type Result<T> = std::result::Result<T, OverloadError>;
