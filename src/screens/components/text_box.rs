use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::fmt::Debug;
use std::fmt::Formatter;

pub struct TextBox {
    value: String,
    pub writing_mode: bool,
    label: String,
    pub validator: Box<dyn Fn(&str, char) -> bool + Send>,
}

impl Debug for TextBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBox")
            .field("value", &self.value)
            .field("writing_mode", &self.writing_mode)
            .field("label", &self.label)
            .finish()
    }
}

impl TextBox {
    pub fn new(label: String, writing_mode: bool, value: Option<&str>) -> Self {
        Self {
            value: value.unwrap_or_default().to_string(),
            writing_mode,
            label,
            validator: Box::new(|_, _| true),
        }
    }

    pub fn with_validator<F>(label: String, writing_mode: bool, value: Option<&str>, validator: F) -> Self
    where
        F: Fn(&str, char) -> bool + Send + 'static,
    {
        Self {
            value: value.unwrap_or_default().to_string(),
            writing_mode,
            label,
            validator: Box::new(validator),
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let widget = Paragraph::new(self.value.clone())
            .block(Block::default().borders(Borders::ALL).title(self.label.clone()))
            .style(if self.writing_mode {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            });
        f.render_widget(widget, area);
    }

    pub fn handle_char(&mut self, c: char) {
        if self.writing_mode && self.validator.as_ref()(&self.value, c) {
            self.value.push(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        if self.writing_mode {
            self.value.pop();
        }
    }

    /// `None` when nothing but whitespace has been typed.
    pub fn get_selected_value(&self) -> Option<String> {
        if self.value.trim().is_empty() {
            None
        } else {
            Some(self.value.clone())
        }
    }

    pub fn raw_value(&self) -> &str {
        &self.value
    }
}
