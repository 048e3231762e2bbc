use thiserror::Error;

/// Failure to load the user list from a source
///
/// Every variant is a load failure; the message is what the directory shows
/// in place of the card list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Failed to fetch users (HTTP {status}): {message}")]
    Status { status: u16, message: String },

    #[error("Failed to fetch users: {0}")]
    Transport(String),

    #[error("Failed to parse users: {0}")]
    Parse(String),
}

impl DirectoryError {
    /// HTTP status code, when the failure came from a non-success response
    pub fn status(&self) -> Option<u16> {
        match self {
            DirectoryError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
