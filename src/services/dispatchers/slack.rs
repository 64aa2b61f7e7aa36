use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use reqwest::Method;
use crate::config::constants::SLACK_TARGET;
use crate::enums::dispatch_result::DispatchResult;
use crate::helpers::outcome::classify;
use crate::structs::notification_request::NotificationRequest;
use crate::structs::run_context::RunContext;
use crate::structs::slack::slack_block::SlackBlock;
use crate::structs::slack::slack_message::SlackMessage;
use crate::traits::dispatcher::Dispatcher;
use crate::traits::transport::Transport;

/// Slack incoming webhook.
///
/// The message is rendered as Block Kit: a header with the title, a section
/// with the message passed through untouched, and a context line linking the
/// repository and the run. Webhook URL format:
/// `https://hooks.slack.com/services/T.../B.../xxx`
pub struct SlackDispatcher {
    transport: Arc<dyn Transport>,
}

impl SlackDispatcher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn build_message(request: &NotificationRequest, context: &RunContext) -> SlackMessage {
        let context_line = format!(
            "<{}|{}> | <{}|Run #{}>",
            context.repository_url(),
            context.repository,
            context.run_url(),
            context.run_number
        );

        let blocks = vec![
            SlackBlock::header(&request.title),
            SlackBlock::section(&request.message),
            SlackBlock::context(&context_line),
        ];

        SlackMessage::new(format!("{}: {}", request.title, request.message), blocks)
            .username(request.username.as_deref())
            .icon_emoji(request.icon_emoji.as_deref())
            .channel(request.channel.as_deref())
    }
}

#[async_trait]
impl Dispatcher for SlackDispatcher {
    fn target(&self) -> &'static str {
        SLACK_TARGET
    }

    async fn send(&self, request: &NotificationRequest, context: &RunContext) -> DispatchResult {
        let Some(url) = request.target() else {
            log::debug!("⏭️  No Slack webhook URL configured, skipping");
            return DispatchResult::Skipped;
        };

        let message = Self::build_message(request, context);
        let payload = match serde_json::to_value(&message) {
            Ok(payload) => payload,
            Err(e) => return DispatchResult::failed(format!("Failed to build Slack payload: {}", e)),
        };

        log::info!("📤 Sending Slack notification");
        let outcome = self.transport.send(Method::POST, url, &payload, &HashMap::new()).await;

        classify("Slack", outcome)
    }
}
