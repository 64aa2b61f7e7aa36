use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Method;
use serde_json::{Map, Value};
use crate::config::constants::{DEFAULT_METHOD, WEBHOOK_TARGET};
use crate::enums::dispatch_result::DispatchResult;
use crate::helpers::outcome::classify;
use crate::helpers::template;
use crate::structs::notification_request::{non_empty, NotificationRequest};
use crate::structs::run_context::RunContext;
use crate::structs::webhook_payload::WebhookPayload;
use crate::traits::dispatcher::Dispatcher;
use crate::traits::transport::Transport;

/// Generic JSON webhook.
///
/// Sends either the default `{message, title, repository, run_url}` body or a
/// user template with `{{placeholder}}` tokens substituted before parsing.
pub struct WebhookDispatcher {
    transport: Arc<dyn Transport>,
}

impl WebhookDispatcher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn build_payload(request: &NotificationRequest, context: &RunContext) -> Result<Value, String> {
        if let Some(body_template) = non_empty(request.body_template.as_ref()) {
            return Self::render_template(body_template, request, context);
        }

        let payload = WebhookPayload {
            message: request.message.clone(),
            title: request.title.clone(),
            repository: context.repository.clone(),
            run_url: context.run_url(),
        };

        serde_json::to_value(payload).map_err(|e| format!("Failed to build webhook payload: {}", e))
    }

    fn render_template(body_template: &str, request: &NotificationRequest, context: &RunContext) -> Result<Value, String> {
        let mut values = vec![
            ("title", request.title.clone()),
            ("message", request.message.clone()),
        ];
        values.extend(context.placeholders());
        values.push(("timestamp", Utc::now().to_rfc3339()));

        let rendered = template::render(body_template, &values);
        serde_json::from_str(&rendered).map_err(|e| format!("Invalid body template: {}", e))
    }

    /// Malformed header JSON is dropped rather than failing the delivery.
    /// Scalar values are stringified; nested values and nulls are skipped per entry.
    pub fn parse_headers(headers_json: Option<&String>) -> HashMap<String, String> {
        let Some(raw) = non_empty(headers_json) else {
            return HashMap::new();
        };

        let entries = match serde_json::from_str::<Map<String, Value>>(raw) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("⚠️ Ignoring malformed webhook headers: {}", e);
                return HashMap::new();
            }
        };

        entries
            .into_iter()
            .filter_map(|(name, value)| match value {
                Value::String(text) => Some((name, text)),
                Value::Number(number) => Some((name, number.to_string())),
                Value::Bool(flag) => Some((name, flag.to_string())),
                _ => {
                    log::warn!("⚠️ Ignoring webhook header {} with non-scalar value", name);
                    None
                }
            })
            .collect()
    }

    pub fn parse_method(method: Option<&String>) -> Result<Method, String> {
        let method = non_empty(method).unwrap_or(DEFAULT_METHOD).to_uppercase();
        Method::from_bytes(method.as_bytes()).map_err(|_| format!("Invalid HTTP method: {}", method))
    }
}

#[async_trait]
impl Dispatcher for WebhookDispatcher {
    fn target(&self) -> &'static str {
        WEBHOOK_TARGET
    }

    async fn send(&self, request: &NotificationRequest, context: &RunContext) -> DispatchResult {
        let Some(url) = request.target() else {
            log::debug!("⏭️  No webhook URL configured, skipping");
            return DispatchResult::Skipped;
        };

        let payload = match Self::build_payload(request, context) {
            Ok(payload) => payload,
            Err(e) => {
                log::debug!("Webhook payload not built: {}", e);
                return DispatchResult::failed(e);
            }
        };

        let method = match Self::parse_method(request.method.as_ref()) {
            Ok(method) => method,
            Err(e) => return DispatchResult::failed(e),
        };

        let headers = Self::parse_headers(request.headers_json.as_ref());

        // The URL may embed a secret; keep it out of the logs.
        log::info!("📤 Sending webhook notification ({} with {} extra headers)", method, headers.len());
        let outcome = self.transport.send(method, url, &payload, &headers).await;

        classify("Webhook", outcome)
    }
}
