use std::collections::HashMap;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use crate::enums::transport_error::TransportError;
use crate::structs::transport_response::TransportResponse;

/// One JSON-body HTTP exchange.
///
/// Implementations send exactly one request and hand back whatever the server
/// answered, whatever the status code. Only failures to get an answer at all
/// are errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: &Value,
        headers: &HashMap<String, String>,
    ) -> Result<TransportResponse, TransportError>;
}
