use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SlackConfig {
    #[serde(default)]
    pub webhook_url: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub icon_emoji: Option<String>,

    #[serde(default)]
    pub channel: Option<String>,
}
