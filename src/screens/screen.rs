use async_trait::async_trait;
use ratatui::{crossterm::event::KeyEvent, layout::Rect, Frame};

pub enum AppAction {
    None,
    SwitchScreen(Box<dyn ScreenAsync>),
    /// pops `screens` screens, `refresh` reloads the one that resurfaces
    Back { refresh: bool, screens: usize },
    Quit(std::io::Result<()>),
}

pub trait Renderable {
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect);
}

#[async_trait]
pub trait ScreenAsync: Renderable + Send {
    async fn handle_key(&mut self, key: KeyEvent) -> AppAction;
    async fn refresh_data(&mut self);
}
