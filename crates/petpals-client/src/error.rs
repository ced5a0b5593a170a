//! Error types for the PetPals client.

use thiserror::Error;

/// Errors that can occur when using the PetPals client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Failed to establish connection to the server.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// HTTP request failed in transit (network, timeout, TLS).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an invalid or unparseable response.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Server returned 404 for the referenced resource.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Server rejected the request as unauthenticated (401).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Any other non-2xx response, with the server's message field.
    #[error("Server error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from server.
        message: String,
    },

    /// An authenticated endpoint was called before login.
    #[error("Not logged in")]
    NotAuthenticated,

    /// A toggle for this pet is already in flight; retry after it settles.
    #[error("Toggle already in flight for pet {0}")]
    ToggleInFlight(String),

    /// The synchronizer session was closed (logout).
    #[error("Session closed")]
    SessionClosed,
}

impl ClientError {
    /// True for failures of the transport itself, as opposed to a response
    /// the server actually produced.
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Request(_))
    }
}
