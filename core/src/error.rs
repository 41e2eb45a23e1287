//! Error types for the posts API client.
//!
//! # Design
//! Operations never wrap failures: whatever the transport raised reaches
//! the caller as-is. `TransportError` is what the default reqwest transport
//! raises. Configuration problems are caught before a client exists and get
//! their own type.

use thiserror::Error;

/// Failures raised by `ReqwestTransport`.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection, timeout, redirect or body encoding failure.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

impl TransportError {
    /// Status code of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Request(err) => err.status().map(|s| s.as_u16()),
            TransportError::Status { status, .. } => Some(*status),
        }
    }
}

/// Errors raised while assembling a `ClientConfig`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing base URL: set {0}")]
    MissingBaseUrl(&'static str),
}

/// Errors raised while converting a float into a `Rating`.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RatingError {
    #[error("rating must be a finite number, got {0}")]
    NonFinite(f64),
}
