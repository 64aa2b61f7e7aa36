use crate::enums::dispatch_result::DispatchResult;

pub struct DispatchLogger;

impl DispatchLogger {
    pub fn log_result(target: &str, result: &DispatchResult) {
        match result {
            DispatchResult::Skipped => log::info!("⏭️  {}: skipped (no target configured)", target),
            DispatchResult::Sent => log::info!("✅ {}: sent", target),
            DispatchResult::Failed { error } => log::error!("❌ {}: failed: {}", target, error),
        }
    }

    pub fn log_summary(results: &[(&str, DispatchResult)]) {
        let sent = results.iter().filter(|(_, r)| *r == DispatchResult::Sent).count();
        let failed = results.iter().filter(|(_, r)| r.is_failed()).count();
        let skipped = results.len() - sent - failed;

        if failed > 0 {
            log::warn!("⚠️ {} sent, {} failed, {} skipped", sent, failed, skipped);
        } else {
            log::info!("📊 {} sent, {} skipped", sent, skipped);
        }
    }
}
