//! Error types for the data-access layer.
//!
//! # Design
//! `NotFound` gets a dedicated variant because toggle-state reads (like,
//! follow) encode "unset" as a 404 and callers must distinguish that from
//! "the server returned an unexpected status." All other non-2xx responses
//! land in `HttpError` with the raw status code and body intact.
//!
//! Transport-level failures (connectivity, timeouts) have no variant here:
//! the executing host owns the socket and surfaces them unchanged. The layer
//! recovers nothing locally — every error reaches the caller verbatim.

use thiserror::Error;

/// Errors returned by the `parse_*` and body-carrying `build_*` methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the requested resource does not exist, or
    /// a toggle state is unset.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// Usage errors raised by the shared UI context accessors.
///
/// These are programming-error guards, not recoverable runtime conditions;
/// they surface synchronously at accessor or mount time, never as a silent
/// default state. Callers that want fail-stop semantics `.expect()` at the
/// UI boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    /// A context accessor was invoked while no provider is mounted.
    #[error("context '{context}' accessed outside the lifetime of its provider")]
    Unmounted { context: &'static str },

    /// `mount` was called on a slot whose provider is still alive.
    #[error("context '{context}' already has a mounted provider")]
    AlreadyMounted { context: &'static str },
}
