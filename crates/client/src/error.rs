//! Client error types.

use bizdocs_shared::AppError;
use thiserror::Error;

/// Errors from talking to the backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or timed out.
    #[error("HTTP error on {endpoint}: {source}")]
    Http {
        /// Method and path of the failed call.
        endpoint: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("{endpoint} returned {status}: {body}")]
    Api {
        /// Method and path of the failed call.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        /// Method and path of the failed call.
        endpoint: String,
        /// Underlying decode error.
        #[source]
        source: reqwest::Error,
    },

    /// The client could not be built from configuration.
    #[error("Client configuration error: {0}")]
    Config(String),
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Api { status, body, .. } => Self::from_status(status, body),
            ClientError::Config(msg) => Self::Config(msg),
            other @ (ClientError::Http { .. } | ClientError::Decode { .. }) => {
                Self::ExternalService(other.to_string())
            }
        }
    }
}
