//! A single bounded request/response cycle.
//!
//! Sends one [`OutboundRequest`] through a [`ChatBackend`] and turns the
//! outcome into the `Action` that resolves the pending phase. The wait is
//! capped by `timeout`; expiry resolves as a failure like any other.

use std::time::Duration;

use log::{info, warn};

use crate::api::client::{ChatBackend, RequestError};
use crate::core::action::{Action, OutboundRequest};

pub async fn run_exchange(
    backend: &dyn ChatBackend,
    request: OutboundRequest,
    timeout: Duration,
) -> Action {
    let OutboundRequest {
        request_id,
        message,
    } = request;
    let started = std::time::Instant::now();

    let outcome = match tokio::time::timeout(timeout, backend.send(&message)).await {
        Ok(result) => result,
        Err(_) => Err(RequestError::Timeout(timeout)),
    };

    let elapsed_ms = started.elapsed().as_millis();
    match outcome {
        Ok(reply) => {
            info!("Request {request_id} answered in {elapsed_ms}ms");
            Action::ResponseReceived { request_id, reply }
        }
        Err(e) => {
            warn!("Request {request_id} to {} failed after {elapsed_ms}ms: {e}", backend.endpoint());
            Action::ResponseFailed {
                request_id,
                error: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedBackend;

    fn request(id: u64, text: &str) -> OutboundRequest {
        OutboundRequest {
            request_id: id,
            message: text.to_string(),
        }
    }

    #[tokio::test]
    async fn success_becomes_response_received() {
        let backend = ScriptedBackend::replying("Take **rest**");
        let action = run_exchange(&backend, request(3, "tired"), Duration::from_secs(1)).await;
        assert_eq!(
            action,
            Action::ResponseReceived {
                request_id: 3,
                reply: "Take **rest**".into()
            }
        );
        assert_eq!(backend.received(), vec!["tired".to_string()]);
    }

    #[tokio::test]
    async fn error_becomes_response_failed() {
        let backend = ScriptedBackend::failing(RequestError::Status {
            status: 500,
            body: "boom".into(),
        });
        let action = run_exchange(&backend, request(4, "hi"), Duration::from_secs(1)).await;
        match action {
            Action::ResponseFailed { request_id, error } => {
                assert_eq!(request_id, 4);
                assert!(error.contains("500"));
            }
            other => panic!("expected ResponseFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_backend_times_out() {
        let backend = ScriptedBackend::replying("too late").with_delay(Duration::from_secs(10));
        let action = run_exchange(&backend, request(5, "hi"), Duration::from_millis(50)).await;
        assert_eq!(
            action,
            Action::ResponseFailed {
                request_id: 5,
                error: "no reply after 50ms".into()
            }
        );
    }
}
