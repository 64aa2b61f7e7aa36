use std::error::Error as StdError;
use thiserror::Error;

/// Failure to complete an HTTP exchange at all. Status codes are not errors here.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Request(String),

    #[error("failed to serialize request body: {0}")]
    Serialization(String),

    #[error("invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        // Webhook URLs carry credentials; reqwest's message omits the cause, so append the chain.
        let error = error.without_url();
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::Request(message)
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}
