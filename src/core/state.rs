//! # Application State
//!
//! Core business state for HealthChat. Domain logic only, no TUI types.
//! Presentation state (draft buffer, scroll position) lives in `tui`.
//!
//! ```text
//! App
//! ├── conversation: Conversation   // append-only message history
//! ├── phase: ChatPhase             // Idle | Pending { request_id }
//! ├── nav: NavState                // header toggle
//! ├── endpoint: String             // where requests go (display only)
//! └── next_request_id: u64         // monotonically increasing
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::conversation::Conversation;
use crate::core::nav::NavState;

/// Identifies one outbound request so late or stale replies can be dropped.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatPhase {
    #[default]
    Idle,
    Pending {
        request_id: RequestId,
    },
}

pub struct App {
    pub conversation: Conversation,
    pub phase: ChatPhase,
    pub nav: NavState,
    pub endpoint: String,
    pub next_request_id: RequestId,
}

impl App {
    pub fn new(endpoint: String) -> Self {
        Self {
            conversation: Conversation::new(),
            phase: ChatPhase::Idle,
            nav: NavState::default(),
            endpoint,
            next_request_id: 1,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.endpoint.clone())
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, ChatPhase::Pending { .. })
    }

    /// The id of the in-flight request, if any.
    pub fn pending_request(&self) -> Option<RequestId> {
        match self.phase {
            ChatPhase::Pending { request_id } => Some(request_id),
            ChatPhase::Idle => None,
        }
    }
}
