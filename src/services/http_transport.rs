use std::collections::HashMap;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;
use crate::enums::transport_error::TransportError;
use crate::structs::transport_response::TransportResponse;
use crate::traits::transport::Transport;

/// `Transport` over a shared `reqwest::Client`. Cloning shares the connection pool.
#[derive(Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Caller headers replace same-named defaults, including `Content-Type`.
    fn build_headers(extra: &HashMap<String, String>) -> Result<HeaderMap, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in extra {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                TransportError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                TransportError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: &Value,
        headers: &HashMap<String, String>,
    ) -> Result<TransportResponse, TransportError> {
        let payload = serde_json::to_vec(body)?;
        let headers = Self::build_headers(headers)?;

        // reqwest derives Content-Length from the byte body.
        let response = self
            .client
            .request(method, url)
            .headers(headers)
            .body(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}
