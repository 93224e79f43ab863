use thiserror::Error;

use crate::http::HttpError;

/// Shown when the endpoint answers with a non-success status.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users";
/// Shown when a failure carries no message of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{}", FETCH_FAILED_MESSAGE)]
    Status(u16),
    #[error("{0}")]
    Request(#[from] HttpError),
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
    #[error("duplicate user id {0} in response")]
    DuplicateId(u64),
}

impl FetchError {
    /// The text placed into the view state for this failure.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_owned()
        } else {
            message
        }
    }
}
