use std::sync::Arc;

use crate::{
    errors::AppError,
    localization::current_labels,
    logging::logger::log_warning,
    providers::roster_writer::{PlayerInput, RosterWriter},
    screens::{
        components::{
            navigation_footer::NavigationFooter, notify_banner::NotifyBanner, select::Select,
            text_box::TextBox,
        },
        screen::{AppAction, Renderable, ScreenAsync},
    },
    shapes::{enums::PositionEnum, player::PlayerEntry},
    validation::InputPolicy,
};
use async_trait::async_trait;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
    Frame,
};

fn validate_age_char(current: &str, c: char) -> bool {
    c.is_ascii_digit() && current.len() < 3
}

const FIELDS: usize = 3;

pub struct EditPlayerScreen<RW: RosterWriter + Send + Sync> {
    roster: Vec<PlayerEntry>,
    name: TextBox,
    age: TextBox,
    position: Select<PositionEnum>,
    field: usize,
    notify_message: NotifyBanner,
    existing_player: Option<PlayerEntry>,
    back: bool,
    policy: InputPolicy,
    footer: NavigationFooter,
    footer_entries: Vec<(&'static str, &'static str)>,
    roster_writer: Arc<RW>,
}

impl<RW: RosterWriter + Send + Sync> Renderable for EditPlayerScreen<RW> {
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect) {
        let area = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),                     // name
                Constraint::Length(3),                     // age
                Constraint::Length(self.position.height()), // position
                Constraint::Min(0),
            ])
            .split(body);
        self.render_header(f, body);
        self.name.render(f, area[0]);
        self.age.render(f, area[1]);
        self.position.render(f, area[2]);
        self.notify_message.render(f, footer_right);
        self.footer.render(f, footer_left, &self.footer_entries);
    }
}

#[async_trait]
impl<RW: RosterWriter + Send + Sync + 'static> ScreenAsync for EditPlayerScreen<RW> {
    async fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match (key.code, &self.notify_message.has_value()) {
            (_, true) => self.handle_notify_reset(),
            (KeyCode::Char(c), _) => self.handle_char(c),
            (KeyCode::Backspace, _) => self.handle_backspace(),
            (KeyCode::Up, _) => self.handle_up(),
            (KeyCode::Down, _) => self.handle_down(),
            (KeyCode::Tab, _) => self.handle_tab(),
            (KeyCode::BackTab, _) => self.handle_backtab(),
            (KeyCode::Esc, _) => AppAction::Back {
                refresh: true,
                screens: 1,
            },
            (KeyCode::Enter, _) => self.handle_enter().await,
            _ => AppAction::None,
        }
    }

    async fn refresh_data(&mut self) {}
}

impl<RW: RosterWriter + Send + Sync> EditPlayerScreen<RW> {
    pub fn new(roster: Vec<PlayerEntry>, policy: InputPolicy, roster_writer: Arc<RW>) -> Self {
        Self::build(roster, None, policy, roster_writer)
    }

    pub fn edit(
        roster: Vec<PlayerEntry>,
        player: PlayerEntry,
        policy: InputPolicy,
        roster_writer: Arc<RW>,
    ) -> Self {
        Self::build(roster, Some(player), policy, roster_writer)
    }

    fn build(
        roster: Vec<PlayerEntry>,
        existing_player: Option<PlayerEntry>,
        policy: InputPolicy,
        roster_writer: Arc<RW>,
    ) -> Self {
        let name = TextBox::new(
            current_labels().name.to_owned(),
            true,
            existing_player.as_ref().map(|p| p.name.as_str()),
        );
        let age = TextBox::with_validator(
            current_labels().age.to_owned(),
            false,
            existing_player
                .as_ref()
                .map(|p| p.age.to_string())
                .as_deref(),
            validate_age_char,
        );
        let position = Select::new(
            current_labels().position.to_owned(),
            PositionEnum::ALL.to_vec(),
            existing_player.as_ref().map(|p| p.position),
            false,
        );
        EditPlayerScreen {
            roster,
            name,
            age,
            position,
            field: 0,
            notify_message: NotifyBanner::new(),
            existing_player,
            back: false,
            policy,
            footer: NavigationFooter::new(),
            footer_entries: vec![
                ("Tab / Shift+Tab", current_labels().navigate),
                ("↑↓", current_labels().position),
                (current_labels().enter, current_labels().confirm),
                ("Esc", current_labels().back),
            ],
            roster_writer,
        }
    }

    fn handle_notify_reset(&mut self) -> AppAction {
        self.notify_message.reset();
        if self.back {
            AppAction::Back {
                refresh: true,
                screens: 1,
            }
        } else {
            AppAction::None
        }
    }

    fn handle_char(&mut self, c: char) -> AppAction {
        self.name.handle_char(c);
        self.age.handle_char(c);
        AppAction::None
    }

    fn player_input(&self) -> Result<(PlayerInput, Option<String>), AppError> {
        let name = self.policy.name(self.name.raw_value())?;
        let age = self.policy.age(self.age.raw_value())?;
        let position = self.policy.position(
            &self
                .position
                .get_selected_value()
                .map(|p| p.to_string())
                .unwrap_or_default(),
        )?;
        let warning = age.warning.or(position.warning);
        let input = match &self.existing_player {
            Some(player) => PlayerInput::Existing(PlayerEntry {
                name,
                age: age.value,
                position: position.value,
                ..player.clone()
            }),
            None => PlayerInput::New {
                name,
                age: age.value,
                position: position.value,
            },
        };
        Ok((input, warning))
    }

    async fn handle_enter(&mut self) -> AppAction {
        let (input, warning) = match self.player_input() {
            Ok(v) => v,
            Err(e) => {
                self.notify_message.set_error(e.to_string());
                return AppAction::None;
            }
        };
        match self.roster_writer.save(input, &mut self.roster).await {
            Ok(player) => {
                self.back = true;
                match warning {
                    Some(w) => {
                        log_warning(&format!("player {}: {}", player, w));
                        self.notify_message.set_warning(w);
                    }
                    None => self
                        .notify_message
                        .set_info(current_labels().operation_successful.to_string()),
                }
            }
            Err(e) => self
                .notify_message
                .report(current_labels().could_not_save_player, &e),
        }
        AppAction::None
    }

    fn handle_tab(&mut self) -> AppAction {
        self.field = (self.field + 1) % FIELDS;
        self.update_writing_modes();
        AppAction::None
    }

    fn handle_backtab(&mut self) -> AppAction {
        self.field = (self.field + FIELDS - 1) % FIELDS;
        self.update_writing_modes();
        AppAction::None
    }

    fn update_writing_modes(&mut self) {
        self.name.writing_mode = self.field == 0;
        self.age.writing_mode = self.field == 1;
        self.position.writing_mode = self.field == 2;
    }

    fn handle_up(&mut self) -> AppAction {
        self.position.handle_up();
        AppAction::None
    }

    fn handle_down(&mut self) -> AppAction {
        self.position.handle_down();
        AppAction::None
    }

    fn handle_backspace(&mut self) -> AppAction {
        self.name.handle_backspace();
        self.age.handle_backspace();
        AppAction::None
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(match self.existing_player {
                Some(_) => current_labels().edit_player,
                None => current_labels().new_player,
            });
        f.render_widget(block, area);
    }
}
