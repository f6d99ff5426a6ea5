// Error types for the API client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors returned by [`crate::HttpClient`] and the services
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure or undecodable body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status the service has no special handling for
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Not found")]
    NotFound,

    /// Status the service translates into a user-facing message
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Input refused before any request was sent
    #[error("{0}")]
    InvalidInput(String),

    /// Success envelope without the `data` the operation returns
    #[error("Response carried no data")]
    MissingData,
}

impl ClientError {
    /// HTTP status behind this error, if the backend answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } | ClientError::Rejected { status, .. } => {
                Some(*status)
            }
            ClientError::NotFound => Some(404),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            ClientError::InvalidInput(_) | ClientError::MissingData => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Replace the error with `message` when the backend answered with `status`
    pub fn translate(self, status: u16, message: &str) -> Self {
        if self.status() == Some(status) {
            ClientError::Rejected {
                status,
                message: message.to_string(),
            }
        } else {
            self
        }
    }
}
