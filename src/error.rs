//! Client error types.
//!
//! [`ClientError`] is the central error type for the client. Each variant
//! carries a short [`ClientError::kind`] label used as a structured log
//! field wherever the session loop reports a failed dispatch.

use tokio_tungstenite::tungstenite;

/// Client-side error enum.
///
/// # Sources
///
/// | Variant            | Raised by                                    |
/// |--------------------|----------------------------------------------|
/// | `MalformedPayload` | inbound frame is not JSON or has wrong shape |
/// | `MissingField`     | inbound frame lacks a required field         |
/// | `ConnectionClosed` | send after the writer task has ended         |
/// | `WebSocket`        | connect or read failure                      |
/// | `Http`             | one-shot call transport or body decode       |
/// | `Task`             | spawned submission panicked or was aborted   |
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Inbound payload could not be decoded into the expected structure.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// Inbound payload lacks a required field (or carries `null` for it).
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// The persistent connection is no longer accepting frames.
    #[error("connection closed")]
    ConnectionClosed,

    /// Error propagated from the WebSocket transport.
    #[error("websocket error: {0}")]
    WebSocket(Box<tungstenite::Error>),

    /// Error propagated from the HTTP client.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A spawned submission task did not run to completion.
    #[error("submission task failed: {0}")]
    Task(String),
}

impl ClientError {
    /// Returns a short, stable label for this variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MalformedPayload(_) => "malformed_payload",
            Self::MissingField(_) => "missing_field",
            Self::ConnectionClosed => "connection_closed",
            Self::WebSocket(_) => "websocket",
            Self::Http(_) => "http",
            Self::Task(_) => "task",
        }
    }

    /// Returns `true` for errors caused by the content of an inbound frame.
    ///
    /// Payload errors never end a session; the frame is skipped.
    #[must_use]
    pub const fn is_payload_error(&self) -> bool {
        matches!(self, Self::MalformedPayload(_) | Self::MissingField(_))
    }
}

impl From<tungstenite::Error> for ClientError {
    fn from(err: tungstenite::Error) -> Self {
        Self::WebSocket(Box::new(err))
    }
}

impl From<tokio::task::JoinError> for ClientError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Task(err.to_string())
    }
}
