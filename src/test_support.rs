//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::api::{ChatBackend, RequestError};

/// A backend that returns a canned outcome and records what it was sent.
pub struct ScriptedBackend {
    outcome: Result<String, RequestError>,
    delay: Option<Duration>,
    received: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn replying(reply: &str) -> Self {
        Self {
            outcome: Ok(reply.to_string()),
            delay: None,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: RequestError) -> Self {
        Self {
            outcome: Err(error),
            delay: None,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    fn endpoint(&self) -> &str {
        "scripted"
    }

    async fn send(&self, message: &str) -> Result<String, RequestError> {
        self.received.lock().unwrap().push(message.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }
}

/// Creates a test App pointed at a non-routable endpoint.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new("http://test.invalid/chat".to_string())
}
