//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard/mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Request Lifecycle
//!
//! `update()` returns `Effect::SpawnRequest` on a valid submit. The loop
//! spawns a tokio task running `api::run_exchange`, which always resolves
//! to exactly one `ResponseReceived` or `ResponseFailed` action sent back
//! over an mpsc channel. On quit the task is aborted; a resolution that
//! races the abort finds the receiver gone and is dropped.
//!
//! ## Redraw Strategy
//!
//! - **Pending**: draws every ~80ms so the typing indicator animates.
//! - **Idle**: sleeps up to 500ms, redrawing only on events.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::api::{ChatBackend, HttpChatBackend, run_exchange};
use crate::core::action::{Action, Effect, OutboundRequest, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::nav_bar::NavBar;
use crate::tui::components::{InputBox, InputEvent, MessageListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_TICK: Duration = Duration::from_millis(80);
const IDLE_TICK: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub message_list: MessageListState,
    pub input_box: InputBox,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock, // Non-blinking: continuous redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// The in-flight request task, if any.
#[derive(Default)]
struct InFlight {
    handle: Option<tokio::task::AbortHandle>,
}

impl InFlight {
    fn set(&mut self, handle: tokio::task::AbortHandle) {
        self.handle = Some(handle);
    }

    fn clear(&mut self) {
        self.handle = None;
    }

    fn abort(&mut self) {
        if let Some(handle) = self.handle.take() {
            info!("Aborting in-flight request on shutdown");
            handle.abort();
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend: Arc<dyn ChatBackend> = Arc::new(HttpChatBackend::new(config.endpoint.clone()));
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let result = event_loop(&mut terminal, &mut app, &mut tui, backend, config.request_timeout);

    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    backend: Arc<dyn ChatBackend>,
    timeout: Duration,
) -> std::io::Result<()> {
    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut in_flight = InFlight::default();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        tui.input_box.disabled = app.is_pending();
        let animating = app.is_pending();

        if animating || needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 4.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;
        }

        let tick = if animating { ANIMATION_TICK } else { IDLE_TICK };
        let mut pending_event = poll_event_timeout(tick)?;

        // Process the first event and drain everything queued before the next draw
        while let Some(event) = pending_event.take() {
            needs_redraw = true;

            match dispatch_event(&event, terminal.get_frame().area(), app, tui) {
                Effect::Quit => break 'main,
                Effect::SpawnRequest(request) => {
                    in_flight.set(spawn_request(request, backend.clone(), timeout, tx.clone()));
                }
                Effect::None => {}
            }

            pending_event = poll_event_immediate()?;
        }

        // Resolutions from the request task
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            in_flight.clear();
            if update(app, action) == Effect::Quit {
                break 'main;
            }
            tui.input_box.disabled = app.is_pending();
        }
    }

    in_flight.abort();
    Ok(())
}

/// Apply one terminal event to the app. The input box is re-synced with the
/// chat phase afterwards, so the rest of a queued batch sees a submit that
/// just went pending.
fn dispatch_event(
    event: &TuiEvent,
    frame_area: ratatui::layout::Rect,
    app: &mut App,
    tui: &mut TuiState,
) -> Effect {
    let effect = match translate_event(event, frame_area, app, tui) {
        Some(action) => update(app, action),
        None => Effect::None,
    };
    tui.input_box.disabled = app.is_pending();
    effect
}

/// Route a terminal event to the component that owns it, returning an
/// `Action` when the event means something to the core.
fn translate_event(
    event: &TuiEvent,
    frame_area: ratatui::layout::Rect,
    app: &App,
    tui: &mut TuiState,
) -> Option<Action> {
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::ToggleNav => Some(Action::ToggleNav),
        TuiEvent::Resize => None,
        TuiEvent::MouseClick(col, row) => {
            let areas = ui::screen_areas(frame_area, app, tui);
            NavBar::hits_toggle(app.nav, areas.nav, *col, *row).then_some(Action::ToggleNav)
        }
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown
        | TuiEvent::ScrollToBottom => {
            tui.message_list.handle_event(event);
            None
        }
        _ => match tui.input_box.handle_event(event)? {
            InputEvent::Submit(text) => Some(Action::Submit(text)),
            InputEvent::ContentChanged => None,
        },
    }
}

fn spawn_request(
    request: OutboundRequest,
    backend: Arc<dyn ChatBackend>,
    timeout: Duration,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Spawning request {}", request.request_id);
    let handle = tokio::spawn(async move {
        let action = run_exchange(backend.as_ref(), request, timeout).await;
        if tx.send(action).is_err() {
            warn!("Dropping request resolution: receiver dropped");
        }
    });
    handle.abort_handle()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::conversation::FALLBACK_REPLY;
    use crate::core::nav::NavState;
    use crate::test_support::{ScriptedBackend, test_app};
    use ratatui::layout::Rect;

    fn type_text(app: &App, tui: &mut TuiState, text: &str) {
        let area = Rect::new(0, 0, 80, 24);
        for c in text.chars() {
            assert_eq!(translate_event(&TuiEvent::InputChar(c), area, app, tui), None);
        }
    }

    #[test]
    fn enter_becomes_submit_action() {
        let app = test_app();
        let mut tui = TuiState::new();
        type_text(&app, &mut tui, "hi");
        let action = translate_event(&TuiEvent::Submit, Rect::new(0, 0, 80, 24), &app, &mut tui);
        assert_eq!(action, Some(Action::Submit("hi".into())));
        assert!(tui.input_box.buffer.is_empty());
    }

    #[test]
    fn batched_events_after_submit_are_blocked() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let area = Rect::new(0, 0, 80, 24);
        let batch = [
            TuiEvent::InputChar('h'),
            TuiEvent::InputChar('i'),
            TuiEvent::Submit,
            TuiEvent::InputChar('x'),
            TuiEvent::Submit,
        ];

        let spawned: Vec<OutboundRequest> = batch
            .iter()
            .filter_map(|event| match dispatch_event(event, area, &mut app, &mut tui) {
                Effect::SpawnRequest(request) => Some(request),
                _ => None,
            })
            .collect();

        assert_eq!(spawned.len(), 1);
        assert_eq!(spawned[0].message, "hi");
        assert_eq!(app.conversation.len(), 1);
        assert!(app.is_pending());
        assert!(tui.input_box.disabled);
        assert!(tui.input_box.buffer.is_empty());
    }

    #[test]
    fn input_reenabled_after_resolution() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let area = Rect::new(0, 0, 80, 24);
        type_text(&app, &mut tui, "hi");
        let Effect::SpawnRequest(request) = dispatch_event(&TuiEvent::Submit, area, &mut app, &mut tui)
        else {
            panic!("expected SpawnRequest");
        };
        assert!(tui.input_box.disabled);

        update(
            &mut app,
            Action::ResponseReceived {
                request_id: request.request_id,
                reply: "ok".into(),
            },
        );
        dispatch_event(&TuiEvent::Resize, area, &mut app, &mut tui);
        assert!(!tui.input_box.disabled);

        dispatch_event(&TuiEvent::InputChar('x'), area, &mut app, &mut tui);
        assert_eq!(tui.input_box.buffer, "x");
    }

    #[test]
    fn click_on_narrow_toggle_toggles_nav() {
        let app = test_app();
        let mut tui = TuiState::new();
        let narrow = Rect::new(0, 0, 40, 20);
        assert_eq!(
            translate_event(&TuiEvent::MouseClick(39, 0), narrow, &app, &mut tui),
            Some(Action::ToggleNav)
        );
        assert_eq!(translate_event(&TuiEvent::MouseClick(5, 10), narrow, &app, &mut tui), None);
        assert_eq!(app.nav, NavState::Collapsed);
    }

    #[tokio::test]
    async fn spawned_request_resolves_through_channel() {
        let mut app = test_app();
        let Effect::SpawnRequest(request) = update(&mut app, Action::Submit("tired".into())) else {
            panic!("expected SpawnRequest");
        };

        let (tx, rx) = mpsc::channel();
        let backend: Arc<dyn ChatBackend> = Arc::new(ScriptedBackend::replying("Take **rest**"));
        let handle = spawn_request(request, backend, Duration::from_secs(1), tx);

        // Wait for the task to finish, then drain the channel like the event loop does
        while !handle.is_finished() {
            tokio::task::yield_now().await;
        }
        let action = rx.try_recv().unwrap();
        update(&mut app, action);

        assert!(!app.is_pending());
        assert_eq!(app.conversation.last().unwrap().text(), "Take rest");
    }

    #[tokio::test]
    async fn failed_request_yields_fallback() {
        let mut app = test_app();
        let Effect::SpawnRequest(request) = update(&mut app, Action::Submit("hi".into())) else {
            panic!("expected SpawnRequest");
        };

        let (tx, rx) = mpsc::channel();
        let backend: Arc<dyn ChatBackend> = Arc::new(ScriptedBackend::failing(
            crate::api::RequestError::Network("refused".into()),
        ));
        let handle = spawn_request(request, backend, Duration::from_secs(1), tx);
        while !handle.is_finished() {
            tokio::task::yield_now().await;
        }
        update(&mut app, rx.try_recv().unwrap());

        assert_eq!(app.conversation.len(), 2);
        assert_eq!(app.conversation.last().unwrap().text(), FALLBACK_REPLY);
        assert!(!app.is_pending());
    }

    #[tokio::test]
    async fn aborted_request_never_resolves() {
        let (tx, rx) = mpsc::channel();
        let backend: Arc<dyn ChatBackend> =
            Arc::new(ScriptedBackend::replying("late").with_delay(Duration::from_secs(10)));
        let request = OutboundRequest {
            request_id: 1,
            message: "hi".into(),
        };
        let mut in_flight = InFlight::default();
        in_flight.set(spawn_request(request, backend, Duration::from_secs(30), tx));
        in_flight.abort();

        // The task's sender is dropped on abort, so the channel disconnects empty
        let outcome = tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_secs(2)))
            .await
            .unwrap();
        assert_eq!(outcome, Err(mpsc::RecvTimeoutError::Disconnected));
    }
}
