use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{LandingPage, MessageList, NavBar};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub nav: Rect,
    pub chat: Rect,
    pub input: Rect,
}

/// Split the frame into nav / chat / input for the current state.
/// Shared by drawing and mouse hit testing so both agree.
pub fn screen_areas(frame_area: Rect, app: &App, tui: &TuiState) -> ScreenAreas {
    use Constraint::{Length, Min};
    let nav_height = NavBar::height(app.nav, frame_area.width);
    let input_height = tui.input_box.calculate_height(frame_area.width);
    let [nav, chat, input] =
        Layout::vertical([Length(nav_height), Min(0), Length(input_height)]).areas(frame_area);
    ScreenAreas { nav, chat, input }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let areas = screen_areas(frame.area(), app, tui);

    NavBar::new(app.nav).render(frame, areas.nav);

    let messages = app.conversation.messages();
    if messages.is_empty() && !app.is_pending() {
        LandingPage::new(&app.endpoint).render(frame, areas.chat);
    } else {
        MessageList::new(&mut tui.message_list, messages, app.is_pending(), spinner_frame)
            .render(frame, areas.chat);
    }

    tui.input_box.render(frame, areas.input);
}
