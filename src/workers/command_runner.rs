use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use futures::future::join_all;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::timeout_duration;
use crate::enums::commands::Commands;
use crate::enums::dispatch_result::DispatchResult;
use crate::errors::{NotifyError, NotifyResult};
use crate::helpers::request_factory::RequestFactory;
use crate::logger::dispatch_logger::DispatchLogger;
use crate::services::dispatchers::slack::SlackDispatcher;
use crate::services::dispatchers::webhook::WebhookDispatcher;
use crate::services::github_output::GithubOutput;
use crate::services::http_transport::HttpTransport;
use crate::structs::notification_request::NotificationRequest;
use crate::structs::run_context::RunContext;
use crate::structs::send_args::SendArgs;
use crate::traits::dispatcher::Dispatcher;
use crate::traits::transport::Transport;

pub const EXIT_OK: i32 = 0;
pub const EXIT_DELIVERY_FAILED: i32 = 1;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    /// Runs a command and returns the process exit code it calls for.
    pub async fn run_command(&mut self, command: Commands) -> NotifyResult<i32> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Send { args } => self.send_command(&args).await,
            Commands::Init { path } => self.init_command(path.as_deref()),
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::debug!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn send_command(&self, args: &SendArgs) -> NotifyResult<i32> {
        let config = ConfigManager::load(self.config_path.as_deref())?;
        let factory = RequestFactory::new(&config, args);

        let transport: Arc<dyn Transport> = match factory.timeout_secs() {
            Some(secs) => Arc::new(
                HttpTransport::with_timeout(timeout_duration(secs))
                    .map_err(|e| NotifyError::system_error("building HTTP client", &e.to_string()))?,
            ),
            None => Arc::new(HttpTransport::new()),
        };

        let context = RunContext::from_env();
        log::info!("📣 Notifying for {} run #{}", context.repository, context.run_number);

        let dispatches: Vec<(Box<dyn Dispatcher>, NotificationRequest)> = vec![
            (Box::new(WebhookDispatcher::new(Arc::clone(&transport))), factory.webhook_request()),
            (Box::new(SlackDispatcher::new(transport)), factory.slack_request()),
        ];

        let results = Self::dispatch_all(&dispatches, &context).await;
        for (target, result) in &results {
            DispatchLogger::log_result(target, result);
        }
        DispatchLogger::log_summary(&results);

        if let Some(output) = GithubOutput::from_env() {
            if let Err(e) = output.write(&Self::step_outputs(&results)) {
                log::warn!("⚠️ Could not write step outputs: {}", e);
            }
        }

        Ok(Self::exit_code(&results, factory.fail_on_error()))
    }

    /// Sends every request concurrently. Dispatchers share nothing but the context.
    pub async fn dispatch_all(
        dispatches: &[(Box<dyn Dispatcher>, NotificationRequest)],
        context: &RunContext,
    ) -> Vec<(&'static str, DispatchResult)> {
        let sends = dispatches
            .iter()
            .map(|(dispatcher, request)| async move {
                (dispatcher.target(), dispatcher.send(request, context).await)
            });

        join_all(sends).await
    }

    pub fn step_outputs(results: &[(&str, DispatchResult)]) -> Vec<(String, String)> {
        results
            .iter()
            .map(|(target, result)| (format!("{}_status", target), result.status().to_string()))
            .collect()
    }

    pub fn exit_code(results: &[(&str, DispatchResult)], fail_on_error: bool) -> i32 {
        if fail_on_error && results.iter().any(|(_, r)| r.is_failed()) {
            EXIT_DELIVERY_FAILED
        } else {
            EXIT_OK
        }
    }

    fn init_command(&self, path: Option<&Path>) -> NotifyResult<i32> {
        log::info!("🚀 Initializing ci-notify configuration...");

        let written = ConfigManager::create_sample_config(path)?;
        log::info!("✅ Configuration file created at {}", written.display());
        log::info!("🔧 Run 'ci-notify validate --config {}' to check it.", written.display());

        Ok(EXIT_OK)
    }

    fn validate_command(&self) -> NotifyResult<i32> {
        log::info!("🔍 Validating configuration...");

        let config = ConfigManager::load(self.config_path.as_deref())?;
        ConfigManager::validate_config(&config)?;

        let webhook = config.webhook.as_ref().and_then(|w| w.url.as_ref()).is_some_and(|u| !u.is_empty());
        let slack = config.slack.as_ref().and_then(|s| s.webhook_url.as_ref()).is_some_and(|u| !u.is_empty());

        log::info!("✅ Configuration is valid");
        log::info!("   webhook: {}", if webhook { "configured" } else { "not configured" });
        log::info!("   slack:   {}", if slack { "configured" } else { "not configured" });

        Ok(EXIT_OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_policy() {
        let ok = [("webhook", DispatchResult::Sent), ("slack", DispatchResult::Skipped)];
        let failed = [("webhook", DispatchResult::failed("HTTP 500")), ("slack", DispatchResult::Sent)];

        assert_eq!(CommandRunner::exit_code(&ok, true), EXIT_OK);
        assert_eq!(CommandRunner::exit_code(&failed, true), EXIT_DELIVERY_FAILED);
        assert_eq!(CommandRunner::exit_code(&failed, false), EXIT_OK);
    }

    #[test]
    fn test_step_outputs() {
        let results = [("webhook", DispatchResult::Sent), ("slack", DispatchResult::failed("x"))];
        assert_eq!(
            CommandRunner::step_outputs(&results),
            vec![
                ("webhook_status".to_string(), "sent".to_string()),
                ("slack_status".to_string(), "failed".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_dispatch_all_skips_unconfigured_targets() {
        let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new());
        let dispatches: Vec<(Box<dyn Dispatcher>, NotificationRequest)> = vec![
            (Box::new(WebhookDispatcher::new(Arc::clone(&transport))), NotificationRequest::new(None, "t", "m")),
            (Box::new(SlackDispatcher::new(transport)), NotificationRequest::new(Some(String::new()), "t", "m")),
        ];

        let results = CommandRunner::dispatch_all(&dispatches, &RunContext::default()).await;

        assert_eq!(results, vec![("webhook", DispatchResult::Skipped), ("slack", DispatchResult::Skipped)]);
    }
}
