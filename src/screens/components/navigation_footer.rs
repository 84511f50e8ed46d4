use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

const SEPARATOR: &str = " = ";
const GAP: &str = "   ";

#[derive(Debug, Clone, Default)]
pub struct NavigationFooter {}

impl NavigationFooter {
    pub fn new() -> Self {
        Self {}
    }

    /// Lays `key = action` pairs out left to right, starting a new line when
    /// the next pair would not fit.
    pub fn render(&self, f: &mut Frame, area: Rect, entries: &[(&str, &str)]) {
        let max_width = area.width.saturating_sub(1) as usize;
        let mut lines: Vec<Line> = Vec::new();
        let mut spans: Vec<Span> = Vec::new();
        let mut width = 0;
        for (key, action) in entries {
            let entry_width =
                key.chars().count() + SEPARATOR.len() + action.chars().count() + GAP.len();
            if width + entry_width > max_width && !spans.is_empty() {
                lines.push(Line::from(std::mem::take(&mut spans)));
                width = 0;
            }
            spans.push(Span::styled(key.to_string(), Style::default().fg(Color::Cyan)));
            spans.push(Span::raw(SEPARATOR));
            spans.push(Span::styled(
                action.to_string(),
                Style::default().fg(Color::White),
            ));
            spans.push(Span::raw(GAP));
            width += entry_width;
        }
        if !spans.is_empty() {
            lines.push(Line::from(spans));
        }
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::NONE)
                .padding(Padding::new(1, 0, 0, 0)),
        );
        f.render_widget(paragraph, area);
    }
}
