use serde::{Deserialize, Serialize};

/// Body sent to a generic webhook when no template is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub message: String,
    pub title: String,
    pub repository: String,
    pub run_url: String,
}
