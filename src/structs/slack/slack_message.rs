use serde::{Deserialize, Serialize};
use crate::structs::slack::slack_block::SlackBlock;

/// Incoming-webhook body. Slack reads the mere presence of `username`,
/// `icon_emoji` or `channel` as an override, so unset ones are not serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackMessage {
    pub text: String,
    pub blocks: Vec<SlackBlock>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

impl SlackMessage {
    pub fn new(text: String, blocks: Vec<SlackBlock>) -> Self {
        Self {
            text,
            blocks,
            username: None,
            icon_emoji: None,
            channel: None,
        }
    }

    pub fn username(mut self, username: Option<&str>) -> Self {
        self.username = truthy(username);
        self
    }

    pub fn icon_emoji(mut self, icon_emoji: Option<&str>) -> Self {
        self.icon_emoji = truthy(icon_emoji);
        self
    }

    pub fn channel(mut self, channel: Option<&str>) -> Self {
        self.channel = truthy(channel);
        self
    }
}

fn truthy(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
