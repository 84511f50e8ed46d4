use crate::{localization::current_labels, shapes::enums::FriendlyName};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Two-state field switching between `off` and `on`, e.g. balanced and
/// random draws. Space, left and right flip it while it has focus.
#[derive(Debug)]
pub struct CheckBox<T: FriendlyName + Copy> {
    off: T,
    on: T,
    checked: bool,
    pub writing_mode: bool,
    label: String,
}

impl<T: FriendlyName + Copy> CheckBox<T> {
    pub fn new(label: String, writing_mode: bool, off: T, on: T, checked: bool) -> Self {
        Self {
            off,
            on,
            checked,
            writing_mode,
            label,
        }
    }

    pub fn get_selected_value(&self) -> T {
        if self.checked {
            self.on
        } else {
            self.off
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let labels = current_labels();
        let option = |value: T, active: bool| {
            let text = format!(
                "{} {}",
                if active { "(•)" } else { "( )" },
                value.friendly_name(labels)
            );
            if active {
                Span::styled(text, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            } else {
                Span::raw(text)
            }
        };
        let line = Line::from(vec![
            option(self.off, !self.checked),
            Span::raw("   "),
            option(self.on, self.checked),
        ]);
        let widget = Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL).title(self.label.clone()))
            .style(if self.writing_mode {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            });
        f.render_widget(widget, area);
    }

    pub fn toggle(&mut self) {
        if self.writing_mode {
            self.checked = !self.checked;
        }
    }

    pub fn handle_char(&mut self, c: char) {
        if c == ' ' {
            self.toggle();
        }
    }
}
