//! Cursor position tracking for the InputBox.
//!
//! `CursorState` owns the cursor byte offset and the internal scroll offset.
//! Methods take `buffer: &str` explicitly; the text is owned by `InputBox`.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use super::text_wrap::{
    CONTENT_OFFSET_X, CONTENT_OFFSET_Y, MAX_VISIBLE_LINES, inner_width, wrap_line_count,
    wrap_options,
};

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First visible wrapped line (0 when content fits)
    pub scroll_offset: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
        }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// (wrapped line, display column) of the cursor.
    fn line_and_column(&self, buffer: &str, width: u16) -> (u16, u16) {
        let before = &buffer[..self.pos];
        let logical_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let preceding_lines = if logical_start == 0 {
            0
        } else {
            wrap_line_count(&buffer[..logical_start], width).saturating_sub(1)
        };

        // Wrap only the current logical line up to the cursor. textwrap trims
        // trailing spaces, so add them back to the last segment's width.
        let current = &before[logical_start..];
        let wrapped = textwrap::wrap(current, wrap_options(width));
        let rows = wrapped.len().max(1) as u16;
        let trailing_spaces = current.len() - current.trim_end_matches(' ').len();
        let last_width = wrapped.last().map(|seg| seg.width()).unwrap_or(0);
        let column = ((last_width + trailing_spaces) as u16).min(width);

        (preceding_lines + rows - 1, column)
    }

    /// Keep the cursor line inside the visible window.
    pub fn update_scroll_offset(&mut self, buffer: &str, area_width: u16) {
        let width = inner_width(area_width);
        if width == 0 || wrap_line_count(buffer, width) <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }

        let (line, _) = self.line_and_column(buffer, width);
        if line < self.scroll_offset {
            self.scroll_offset = line;
        } else if line >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = line + 1 - MAX_VISIBLE_LINES;
        }
    }

    /// Screen (column, row) for the terminal cursor.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + CONTENT_OFFSET_X.min(area.width), area.y + CONTENT_OFFSET_Y);
        }
        let (line, column) = self.line_and_column(buffer, width);
        let visible_line = line.saturating_sub(self.scroll_offset);
        (
            area.x + CONTENT_OFFSET_X + column,
            area.y + CONTENT_OFFSET_Y + visible_line,
        )
    }
}
