//! # MessageList Component
//!
//! Scrollable view of the conversation history.
//!
//! ## Responsibilities
//!
//! - Display messages in append order
//! - Keep the view pinned to the newest message until the user scrolls up
//! - Show a typing indicator while a request is pending
//! - Cache per-message heights so only new messages are measured
//!
//! ## Architecture
//!
//! `MessageList` is a transient component (created each frame) that wraps
//! `&'a mut MessageListState` (persistent state) and the message slice
//! (props). `Component::render` takes `&mut self`, so the layout cache and
//! scroll state are updated during the render pass.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::conversation::Message;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::MessageView;
use crate::tui::event::TuiEvent;

const TYPING_FRAMES: [&str; 4] = ["   ", ".  ", ".. ", "..."];
/// Rows reserved under the last message for the typing indicator.
const TYPING_ROWS: u16 = 1;

/// Layout and scroll state for the message list.
/// Must be persisted in the parent TuiState.
pub struct MessageListState {
    pub scroll_state: ScrollViewState,
    pub layout: LayoutCache,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Rows below the last message (typing indicator), as of the last render
    pub trailing_rows: u16,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::default(),
            stick_to_bottom: true,
            viewport_height: 0,
            trailing_rows: 0,
        }
    }

    fn max_offset(&self) -> u16 {
        self.layout
            .total_height()
            .saturating_add(self.trailing_rows)
            .saturating_sub(self.viewport_height)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }

    /// Re-engage auto-scroll once the user has scrolled back to the end.
    pub fn repin_if_at_bottom(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }
}

/// Scrollable conversation view component.
/// Created fresh each frame with references to state and data.
pub struct MessageList<'a> {
    pub state: &'a mut MessageListState,
    pub messages: &'a [Message],
    pub is_pending: bool,
    pub spinner_frame: usize,
}

impl<'a> MessageList<'a> {
    pub fn new(
        state: &'a mut MessageListState,
        messages: &'a [Message],
        is_pending: bool,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            messages,
            is_pending,
            spinner_frame,
        }
    }
}

impl Component for MessageList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar

        // 1. Measure any messages not yet in the cache
        self.state.layout.sync(self.messages, content_width);
        let messages_height = self.state.layout.total_height();
        let typing_rows = if self.is_pending { TYPING_ROWS } else { 0 };
        let canvas_height = messages_height + typing_rows;

        // 2. Clamp scroll offset (auto-scroll handles its own bound)
        self.state.viewport_height = area.height;
        self.state.trailing_rows = typing_rows;
        if !self.state.stick_to_bottom {
            self.state.clamp_scroll();
        }

        let scroll_offset = self.state.scroll_state.offset().y;
        let visible = self.state.layout.visible_range(scroll_offset, area.height);

        // 3. Render visible messages into the ScrollView canvas
        let mut scroll_view = ScrollView::new(Size::new(content_width, canvas_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for i in visible {
            let top = self.state.layout.top_of(i);
            let height = self.state.layout.heights[i];
            let rect = Rect::new(0, top, content_width, height);
            scroll_view.render_widget(MessageView::new(&self.messages[i]), rect);
        }

        if self.is_pending {
            let dots = TYPING_FRAMES[self.spinner_frame % TYPING_FRAMES.len()];
            let indicator = Span::styled(
                format!(" HealthAI is typing{dots}"),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            );
            scroll_view.render_widget(indicator, Rect::new(0, messages_height, content_width, TYPING_ROWS));
        }

        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// Event handling lives on the persistent state, since `MessageList`
/// itself is rebuilt every frame.
impl EventHandler for MessageListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollToBottom => {
                self.stick_to_bottom = true;
            }
            _ => {}
        }
        None
    }
}

/// Cached per-message heights.
///
/// History is append-only, so heights stay valid until the width changes;
/// a width change invalidates everything.
#[derive(Default)]
pub struct LayoutCache {
    pub heights: Vec<u16>,
    /// `prefix_heights[i]` = sum of `heights[..=i]`.
    pub prefix_heights: Vec<u16>,
    content_width: u16,
}

impl LayoutCache {
    pub fn sync(&mut self, messages: &[Message], content_width: u16) {
        if content_width != self.content_width || messages.len() < self.heights.len() {
            self.heights.clear();
            self.prefix_heights.clear();
            self.content_width = content_width;
        }

        for message in &messages[self.heights.len()..] {
            let height = MessageView::calculate_height(message, content_width);
            let prev = self.prefix_heights.last().copied().unwrap_or(0);
            self.heights.push(height);
            self.prefix_heights.push(prev.saturating_add(height));
        }
    }

    pub fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    /// Canvas y coordinate where message `i` starts.
    pub fn top_of(&self, i: usize) -> u16 {
        if i == 0 { 0 } else { self.prefix_heights[i - 1] }
    }

    /// Indices of messages intersecting `[offset, offset + viewport)`.
    pub fn visible_range(&self, offset: u16, viewport: u16) -> std::ops::Range<usize> {
        let end_y = offset.saturating_add(viewport);
        let start = self.prefix_heights.partition_point(|&bottom| bottom <= offset);
        let end = self.prefix_heights.partition_point(|&bottom| bottom < end_y);
        start..(end + 1).min(self.heights.len())
    }
}
