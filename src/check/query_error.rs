use serde::Deserialize;
use thiserror::Error;

/// Shown when the service gives us nothing better to say
pub const GENERIC_NETWORK_ERROR: &str = "Network error. Please try again.";

const MALFORMED_RESPONSE_MESSAGE: &str = "Unexpected response from the flower safety service.";

/// Errors that can occur while checking a flower
#[derive(Debug, Error)]
pub enum QueryError {
    /// Input was empty after trimming, no request was made
    #[error("Flower name is empty")]
    EmptyInput,

    /// Transport failure or timeout
    #[error("Network error: {message}")]
    Network { message: String },

    /// Service answered with a non-2xx status
    #[error("API error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Service answered 2xx but the body was not a verdict
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },
}

impl QueryError {
    /// Text suitable for the inline error area.
    ///
    /// Prefers the server-supplied `error` string, falling back to a generic
    /// network error for transport failures.
    pub fn user_message(&self) -> String {
        match self {
            QueryError::EmptyInput => "Flower name is empty".to_string(),
            QueryError::Network { .. } => GENERIC_NETWORK_ERROR.to_string(),
            QueryError::Server { message, .. } => message.clone(),
            QueryError::MalformedResponse { .. } => MALFORMED_RESPONSE_MESSAGE.to_string(),
        }
    }

    pub(crate) fn from_error_body(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            error: Option<String>,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_NETWORK_ERROR.to_string());

        QueryError::Server { status, message }
    }
}

impl From<reqwest::Error> for QueryError {
    fn from(e: reqwest::Error) -> Self {
        QueryError::Network {
            message: e.to_string(),
        }
    }
}
