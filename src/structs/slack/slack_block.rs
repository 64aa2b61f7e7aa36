use serde::{Deserialize, Serialize};
use crate::structs::slack::slack_text::SlackText;

/// The subset of Block Kit layout blocks a run notification uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlackBlock {
    Header { text: SlackText },
    Section { text: SlackText },
    Context { elements: Vec<SlackText> },
}

impl SlackBlock {
    pub fn header(title: &str) -> Self {
        Self::Header { text: SlackText::plain(title) }
    }

    pub fn section(markdown: &str) -> Self {
        Self::Section { text: SlackText::markdown(markdown) }
    }

    pub fn context(markdown: &str) -> Self {
        Self::Context { elements: vec![SlackText::markdown(markdown)] }
    }
}
