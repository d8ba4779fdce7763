//! Error types for catalog fetches.

use std::fmt;

use thiserror::Error;

/// Which endpoint a fetch targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Products,
    Categories,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Products => f.write_str("products"),
            Resource::Categories => f.write_str("categories"),
        }
    }
}

/// Errors that can occur while fetching from the catalog API.
///
/// `Display` yields the message shown to the user: the transport or decode
/// message verbatim, or a fixed per-resource message for HTTP failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Server answered with a non-success status.
    #[error("Failed to fetch {resource}")]
    Status { resource: Resource, status: u16 },

    /// Request never produced a response (DNS, connect, timeout, ...).
    #[error("{message}")]
    Transport { message: String },

    /// Response body was not the expected JSON shape.
    #[error("{message}")]
    Decode { message: String },

    /// Client could not be constructed from configuration.
    #[error("Failed to build HTTP client: {message}")]
    Client { message: String },
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        FetchError::Transport {
            message: message.into(),
        }
    }

    /// Technical details for logs.
    pub fn details(&self) -> String {
        match self {
            FetchError::Status { resource, status } => {
                format!("GET {} returned HTTP {}", resource, status)
            }
            FetchError::Transport { message } => format!("transport error: {}", message),
            FetchError::Decode { message } => format!("invalid response body: {}", message),
            FetchError::Client { message } => format!("client error: {}", message),
        }
    }
}
