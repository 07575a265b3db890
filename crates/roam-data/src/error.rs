//! Store client error types.

use thiserror::Error;

/// Errors that can occur talking to the hosted backend.
///
/// The client never retries on its own; callers surface these as a
/// static error state with a manual retry action.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The request could not be sent.
    #[error("Request failed: {0}")]
    Request(String),

    /// The store answered with a non-success status.
    #[error("Store returned status {code}: {body}")]
    Status { code: u16, body: String },

    /// The response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// An image upload failed.
    #[error("Upload failed: {0}")]
    Upload(String),
}
