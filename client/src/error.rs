//! Error type for the todo API client.
//!
//! # Design
//! Unexpected statuses keep the raw code and body for debugging. Transport
//! failures (connect, DNS, I/O) are separated from parse failures so callers
//! can tell "the server is unreachable" apart from "the server answered
//! something we did not understand."

use thiserror::Error;

/// Errors returned by [`TodoApi`](crate::TodoApi) and
/// [`TodoService`](crate::TodoService) implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status other than the one the operation
    /// expects.
    #[error("HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialize(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialize(String),

    /// The HTTP round-trip itself failed before a response was read.
    #[error("transport failed: {0}")]
    Transport(String),
}
