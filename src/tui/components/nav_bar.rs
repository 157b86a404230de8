//! # NavBar Component
//!
//! Fixed header with the brand title and the link list.
//!
//! ## Layout
//!
//! The presentation is decided by [`NavPresentation::for_width`]:
//!
//! 1. **Inline** (wide): `HealthAI            Home  About  Services  Contact`
//! 2. **Collapsed** (narrow): `HealthAI                                   ☰`
//! 3. **Dropdown** (narrow, toggled open): header with `✕`, then one link per row
//!
//! ## Stateless
//!
//! NavBar receives the toggle state as a prop and owns nothing. Toggling
//! happens in `core::action::update`, so the header can't drift from the
//! app state.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::nav::{BRAND, LINKS, NavPresentation, NavState};
use crate::tui::component::Component;

const TOGGLE_COLLAPSED: &str = "☰";
const TOGGLE_EXPANDED: &str = "✕";
/// Columns at the right edge of the header that count as the toggle button.
const TOGGLE_HIT_WIDTH: u16 = 3;
const LINK_GAP: &str = "  ";

pub struct NavBar {
    pub state: NavState,
}

impl NavBar {
    pub fn new(state: NavState) -> Self {
        Self { state }
    }

    /// Rows this nav bar needs at the given width.
    pub fn height(state: NavState, width: u16) -> u16 {
        NavPresentation::for_width(width, state).height()
    }

    /// Whether a click at (`col`, `row`) lands on the toggle control.
    /// `area` is the full nav bar area; the toggle only exists when narrow.
    pub fn hits_toggle(state: NavState, area: Rect, col: u16, row: u16) -> bool {
        let presentation = NavPresentation::for_width(area.width, state);
        presentation.shows_toggle()
            && row == area.y
            && col >= area.right().saturating_sub(TOGGLE_HIT_WIDTH)
            && col < area.right()
    }

    fn brand() -> Span<'static> {
        Span::styled(
            BRAND,
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )
    }

    fn inline_links() -> Line<'static> {
        let mut spans = Vec::with_capacity(LINKS.len() * 2);
        for (i, link) in LINKS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(LINK_GAP));
            }
            spans.push(Span::styled(*link, Style::default().fg(Color::Gray)));
        }
        Line::from(spans)
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let presentation = NavPresentation::for_width(area.width, self.state);
        let header = Rect { height: 1, ..area };

        let right: Line = match presentation {
            NavPresentation::Inline => Self::inline_links(),
            NavPresentation::Collapsed => Line::from(TOGGLE_COLLAPSED),
            NavPresentation::Dropdown => Line::from(TOGGLE_EXPANDED),
        };
        let right_width = right.width() as u16;

        let [brand_area, right_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(header);
        frame.render_widget(Paragraph::new(Line::from(Self::brand())), brand_area);
        frame.render_widget(Paragraph::new(right), right_area);

        if presentation == NavPresentation::Dropdown {
            let list_area = Rect {
                y: area.y + 1,
                height: area.height.saturating_sub(1),
                ..area
            };
            let lines: Vec<Line> = LINKS
                .iter()
                .map(|link| Line::from(Span::styled(format!("  {link}"), Style::default().fg(Color::Gray))))
                .collect();
            frame.render_widget(Paragraph::new(lines), list_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_rows(state: NavState, width: u16) -> Vec<String> {
        let height = NavBar::height(state, width);
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut nav = NavBar::new(state);
        terminal.draw(|f| nav.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn wide_shows_inline_links() {
        let rows = render_to_rows(NavState::Collapsed, 80);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].starts_with("HealthAI"));
        for link in LINKS {
            assert!(rows[0].contains(link), "missing {link}");
        }
        assert!(!rows[0].contains(TOGGLE_COLLAPSED));
    }

    #[test]
    fn narrow_collapsed_hides_links() {
        let rows = render_to_rows(NavState::Collapsed, 40);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].contains("HealthAI"));
        assert!(rows[0].contains(TOGGLE_COLLAPSED));
        assert!(!rows[0].contains("Services"));
    }

    #[test]
    fn narrow_expanded_lists_links_below() {
        let rows = render_to_rows(NavState::Expanded, 40);
        assert_eq!(rows.len(), 1 + LINKS.len());
        assert!(rows[0].contains(TOGGLE_EXPANDED));
        for (row, link) in rows[1..].iter().zip(LINKS) {
            assert!(row.contains(link));
        }
    }

    #[test]
    fn toggle_hit_only_on_narrow_header_edge() {
        let narrow = Rect::new(0, 0, 40, 1);
        assert!(NavBar::hits_toggle(NavState::Collapsed, narrow, 39, 0));
        assert!(NavBar::hits_toggle(NavState::Collapsed, narrow, 37, 0));
        assert!(!NavBar::hits_toggle(NavState::Collapsed, narrow, 10, 0));
        assert!(!NavBar::hits_toggle(NavState::Collapsed, narrow, 39, 1));

        let wide = Rect::new(0, 0, 100, 1);
        assert!(!NavBar::hits_toggle(NavState::Collapsed, wide, 99, 0));
    }
}
