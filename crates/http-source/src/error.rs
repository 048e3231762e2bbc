use directory_core::DirectoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpSourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Expected a JSON array of users, got {0}")]
    NotAnArray(&'static str),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, HttpSourceError>;

impl From<HttpSourceError> for DirectoryError {
    fn from(err: HttpSourceError) -> Self {
        match err {
            HttpSourceError::Http(e) => DirectoryError::Transport(e.to_string()),
            HttpSourceError::Parse(e) => DirectoryError::Parse(e.to_string()),
            HttpSourceError::NotAnArray(kind) => {
                DirectoryError::Parse(format!("expected a JSON array, got {}", kind))
            }
            HttpSourceError::Api { status, message } => DirectoryError::Status { status, message },
        }
    }
}
