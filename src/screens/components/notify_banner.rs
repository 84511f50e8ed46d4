use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{errors::AppError, localization::current_labels, logging::logger::log_error};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyMessage {
    Error(String),
    Warning(String),
    Info(String),
}

impl NotifyMessage {
    /// A failed operation shown as `context: error`. Failures the user can
    /// clear by retrying, such as a roster held open in a spreadsheet, are
    /// warnings.
    pub fn from_error(context: &str, e: &AppError) -> Self {
        let text = format!("{}: {}", context, e);
        if e.is_retryable() {
            NotifyMessage::Warning(text)
        } else {
            NotifyMessage::Error(text)
        }
    }

    pub fn text(&self) -> &str {
        match self {
            NotifyMessage::Error(m) | NotifyMessage::Warning(m) | NotifyMessage::Info(m) => m,
        }
    }

    fn color(&self) -> Color {
        match self {
            NotifyMessage::Error(_) => Color::Red,
            NotifyMessage::Warning(_) => Color::Yellow,
            NotifyMessage::Info(_) => Color::Blue,
        }
    }

    fn title(&self) -> &'static str {
        let labels = current_labels();
        match self {
            NotifyMessage::Error(_) => labels.error,
            NotifyMessage::Warning(_) => labels.warning,
            NotifyMessage::Info(_) => labels.info,
        }
    }
}

#[derive(Debug, Default)]
pub struct NotifyBanner {
    pub message: Option<NotifyMessage>,
}

impl NotifyBanner {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn set_error(&mut self, msg: String) {
        self.message = Some(NotifyMessage::Error(msg));
    }

    pub fn set_info(&mut self, msg: String) {
        self.message = Some(NotifyMessage::Info(msg));
    }

    pub fn set_warning(&mut self, msg: String) {
        self.message = Some(NotifyMessage::Warning(msg));
    }

    /// Logs the failure and shows it under `context`.
    pub fn report(&mut self, context: &str, e: &AppError) {
        let message = NotifyMessage::from_error(context, e);
        log_error(message.text());
        self.message = Some(message);
    }

    pub fn reset(&mut self) {
        self.message = None;
    }

    pub fn has_value(&self) -> bool {
        self.message.is_some()
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let Some(message) = &self.message else {
            return;
        };
        let widget = Paragraph::new(message.text().to_owned())
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(message.color())
                    .add_modifier(Modifier::BOLD),
            )
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(message.title()));
        f.render_widget(widget, area);
    }
}
