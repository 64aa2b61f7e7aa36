use crate::enums::dispatch_result::DispatchResult;
use crate::enums::transport_error::TransportError;
use crate::structs::transport_response::TransportResponse;

/// Maps a transport outcome onto the dispatch result both targets report.
pub fn classify(label: &str, outcome: Result<TransportResponse, TransportError>) -> DispatchResult {
    match outcome {
        Ok(response) if response.is_success() => DispatchResult::Sent,
        Ok(response) => DispatchResult::failed(format!(
            "{} returned HTTP {}: {}",
            label, response.status, response.body
        )),
        Err(e) => DispatchResult::failed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert_eq!(classify("Webhook", Ok(TransportResponse::new(200, ""))), DispatchResult::Sent);
        assert_eq!(classify("Webhook", Ok(TransportResponse::new(204, ""))), DispatchResult::Sent);
        assert!(classify("Webhook", Ok(TransportResponse::new(300, ""))).is_failed());
        assert!(classify("Webhook", Ok(TransportResponse::new(199, ""))).is_failed());
    }

    #[test]
    fn test_rejection_carries_status_and_body() {
        let result = classify("Slack", Ok(TransportResponse::new(400, "invalid_payload")));
        assert_eq!(result.error(), Some("Slack returned HTTP 400: invalid_payload"));
    }

    #[test]
    fn test_transport_error_message_is_kept() {
        let result = classify("Webhook", Err(TransportError::Request("connection refused".to_string())));
        assert_eq!(result.error(), Some("connection refused"));
    }
}
