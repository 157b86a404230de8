//! # Actions
//!
//! Everything that can happen in HealthChat becomes an `Action`.
//! User presses Enter? That's `Action::Submit(text)`.
//! Endpoint replies? That's `Action::ResponseReceived { .. }`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` describing any I/O the
//! caller should perform. No side effects happen here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! The chat phase is a three-edge automaton:
//!
//! ```text
//!   Idle ──Submit──▶ Pending ──ResponseReceived──▶ Idle
//!                       └──────ResponseFailed─────▶ Idle
//! ```
//!
//! All guards (empty text, already pending, stale reply) live here.

use log::{debug, info, warn};

use crate::core::conversation::{Message, sanitize};
use crate::core::state::{App, ChatPhase, RequestId};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// User submitted the draft.
    Submit(String),
    /// The endpoint answered with a reply body.
    ResponseReceived { request_id: RequestId, reply: String },
    /// The request failed (transport, status, body, or timeout).
    ResponseFailed { request_id: RequestId, error: String },
    /// Open or close the navigation dropdown.
    ToggleNav,
    Quit,
}

/// A request the caller must send on the state's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub request_id: RequestId,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnRequest(OutboundRequest),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => submit(app, &text),
        Action::ResponseReceived { request_id, reply } => {
            if !resolve(app, request_id) {
                return Effect::None;
            }
            debug!("Reply for request {request_id} ({} bytes)", reply.len());
            app.conversation.push(Message::assistant(&reply));
            Effect::None
        }
        Action::ResponseFailed { request_id, error } => {
            if !resolve(app, request_id) {
                return Effect::None;
            }
            warn!("Request {request_id} failed: {error}");
            app.conversation.push(Message::fallback());
            Effect::None
        }
        Action::ToggleNav => {
            app.nav = app.nav.toggled();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn submit(app: &mut App, text: &str) -> Effect {
    let sanitized = sanitize(text);
    let message = sanitized.trim();
    if message.is_empty() {
        debug!("Ignoring empty submission");
        return Effect::None;
    }
    if let ChatPhase::Pending { request_id } = app.phase {
        debug!("Ignoring submission while request {request_id} is pending");
        return Effect::None;
    }

    let request_id = app.next_request_id;
    app.next_request_id += 1;

    app.conversation.push(Message::user(message));
    app.phase = ChatPhase::Pending { request_id };
    info!("Submitting request {request_id} ({} bytes)", message.len());

    Effect::SpawnRequest(OutboundRequest {
        request_id,
        message: message.to_string(),
    })
}

/// Leave the pending phase if `request_id` is the one in flight.
/// Returns false for stale or unexpected resolutions.
fn resolve(app: &mut App, request_id: RequestId) -> bool {
    match app.phase {
        ChatPhase::Pending { request_id: pending } if pending == request_id => {
            app.phase = ChatPhase::Idle;
            true
        }
        _ => {
            warn!("Discarding resolution for request {request_id}: not in flight");
            false
        }
    }
}
