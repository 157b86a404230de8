use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::core::conversation::{Message, Role};
use crate::core::emphasis::Segment;
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless component that renders one chat message in a bordered box.
///
/// Assistant replies are drawn from their segment list: strong runs get
/// `BOLD`, everything else inherits the role color. Text is never parsed
/// again at render time.
///
/// [`calculate_height`](Self::calculate_height) predicts the rendered height
/// with `textwrap` so the parent list can lay out a scroll view without
/// rendering first.
#[derive(Clone, Copy)]
pub struct MessageView<'a> {
    pub message: &'a Message,
}

impl<'a> MessageView<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self { message }
    }

    /// Height in rows for the given outer width, borders included.
    pub fn calculate_height(message: &Message, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Too narrow for borders + padding; still occupy a row.
            return 1;
        }

        let text = message.text();
        let content = text.trim();
        if content.is_empty() {
            return VERTICAL_OVERHEAD;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(content, options);
        (lines.len() as u16).max(1) + VERTICAL_OVERHEAD
    }
}

pub fn role_style(role: Role) -> Style {
    match role {
        Role::User => Style::default().fg(Color::Green),
        Role::Assistant => Style::default().fg(Color::Blue),
    }
}

/// Build styled text from segments, splitting runs at newlines.
pub fn segments_to_text(segments: &[Segment], base: Style) -> Text<'static> {
    let strong = base.add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line<'static>> = vec![Line::default()];

    for segment in segments {
        let style = if segment.is_strong() { strong } else { base };
        let mut parts = segment.text().split('\n');
        if let Some(first) = parts.next()
            && !first.is_empty()
            && let Some(line) = lines.last_mut()
        {
            line.push_span(Span::styled(first.to_string(), style));
        }
        for part in parts {
            let mut line = Line::default();
            if !part.is_empty() {
                line.push_span(Span::styled(part.to_string(), style));
            }
            lines.push(line);
        }
    }

    trim_blank_edges(&mut lines);
    Text::from(lines)
}

/// Drop empty lines at the start and end, matching the trimmed height estimate.
fn trim_blank_edges(lines: &mut Vec<Line<'static>>) {
    let is_blank = |line: &Line| line.spans.iter().all(|s| s.content.trim().is_empty());
    while lines.last().is_some_and(is_blank) {
        lines.pop();
    }
    let leading = lines.iter().take_while(|l| is_blank(l)).count();
    lines.drain(..leading);
}

impl Widget for MessageView<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let style = role_style(self.message.role);
        let border_style = style.add_modifier(Modifier::DIM);

        let block = Block::bordered()
            .title(self.message.role.label())
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        Paragraph::new(segments_to_text(&self.message.content, style))
            .wrap(Wrap { trim: true })
            .render(inner_area, buf);
    }
}

impl Component for MessageView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
