//! HTTP client for the chat endpoint.
//!
//! One request, one JSON reply. Every failure mode maps to a
//! [`RequestError`] variant; callers treat them all the same and only log
//! the detail.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::{ChatRequest, ChatResponse};

#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// Connection, DNS, TLS, or body read failure.
    Network(String),
    /// Endpoint replied with a non-2xx status.
    Status { status: u16, body: String },
    /// 2xx reply whose body isn't `{ "response": string }`.
    Parse(String),
    /// No reply within the configured bound.
    Timeout(Duration),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Network(msg) => write!(f, "network error: {msg}"),
            RequestError::Status { status, body } => {
                write!(f, "endpoint returned HTTP {status}: {body}")
            }
            RequestError::Parse(msg) => write!(f, "malformed reply: {msg}"),
            RequestError::Timeout(after) => write!(f, "no reply after {after:?}"),
        }
    }
}

impl std::error::Error for RequestError {}

#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Where requests are sent, for display and logs.
    fn endpoint(&self) -> &str;

    /// Send one message and return the reply text.
    async fn send(&self, message: &str) -> Result<String, RequestError>;
}

/// `ChatBackend` over plain HTTP JSON.
pub struct HttpChatBackend {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpChatBackend {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, message: &str) -> Result<String, RequestError> {
        let body = ChatRequest {
            message: message.to_string(),
        };

        info!("POST {} ({} bytes)", self.endpoint, message.len());

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Chat endpoint status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Chat endpoint error: {} - {}", status, body);
            return Err(RequestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response
            .text()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;
        let parsed: ChatResponse =
            serde_json::from_str(&raw).map_err(|e| RequestError::Parse(e.to_string()))?;

        debug!("Reply received ({} bytes)", parsed.response.len());
        Ok(parsed.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_status_code() {
        let err = RequestError::Status {
            status: 503,
            body: "busy".into(),
        };
        assert_eq!(err.to_string(), "endpoint returned HTTP 503: busy");
    }

    #[test]
    fn display_timeout() {
        assert_eq!(
            RequestError::Timeout(Duration::from_secs(30)).to_string(),
            "no reply after 30s"
        );
    }

    #[test]
    fn unreachable_endpoint_is_network_error() {
        // Port 9 (discard) on localhost is reliably closed in test environments.
        let backend = HttpChatBackend::new("http://127.0.0.1:9/chat".to_string());
        let result = tokio_test::block_on(backend.send("hello"));
        assert!(matches!(result, Err(RequestError::Network(_))));
    }
}
