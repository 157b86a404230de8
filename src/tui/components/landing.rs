//! # Landing Page Component
//!
//! Shown in the chat area while the conversation is empty.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::nav::BRAND;
use crate::tui::component::Component;

pub struct LandingPage<'a> {
    /// Where requests go, shown as a hint.
    pub endpoint: &'a str,
}

impl<'a> LandingPage<'a> {
    pub fn new(endpoint: &'a str) -> Self {
        Self { endpoint }
    }
}

impl Component for LandingPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                format!("Welcome to {BRAND}"),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Describe how you feel and get quick health guidance.",
                Style::default().fg(Color::Gray),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!("endpoint: {}", self.endpoint),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let [text_area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn shows_greeting_and_endpoint() {
        let backend = TestBackend::new(70, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| LandingPage::new("http://localhost:8000/chat").render(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Welcome to HealthAI"));
        assert!(text.contains("http://localhost:8000/chat"));
    }
}
