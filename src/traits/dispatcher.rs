use async_trait::async_trait;
use crate::enums::dispatch_result::DispatchResult;
use crate::structs::notification_request::NotificationRequest;
use crate::structs::run_context::RunContext;

/// A notification target. `send` never fails: every problem ends up in the result.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Short target name used in logs and GitHub outputs.
    fn target(&self) -> &'static str;

    async fn send(&self, request: &NotificationRequest, context: &RunContext) -> DispatchResult;
}
