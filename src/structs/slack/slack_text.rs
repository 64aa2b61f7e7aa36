use serde::{Deserialize, Serialize};

/// Block Kit text object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlackText {
    PlainText { text: String },
    Mrkdwn { text: String },
}

impl SlackText {
    pub fn plain(text: &str) -> Self {
        Self::PlainText { text: text.to_string() }
    }

    pub fn markdown(text: &str) -> Self {
        Self::Mrkdwn { text: text.to_string() }
    }
}
