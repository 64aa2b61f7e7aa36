use serde::{Deserialize, Serialize};
use crate::structs::config::behavior_config::BehaviorConfig;
use crate::structs::config::notification_config::NotificationConfig;
use crate::structs::config::slack_config::SlackConfig;
use crate::structs::config::webhook_config::WebhookConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub notification: NotificationConfig,

    #[serde(default)]
    pub webhook: Option<WebhookConfig>,

    #[serde(default)]
    pub slack: Option<SlackConfig>,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}
