use std::sync::Arc;

use crate::{
    draw::draw_teams,
    errors::{AppError, ConfigurationError},
    localization::current_labels,
    logging::logger::log_error,
    providers::settings_writer::SettingsWriter,
    screens::{
        components::{
            checkbox::CheckBox, navigation_footer::NavigationFooter, notify_banner::NotifyBanner,
            text_box::TextBox,
        },
        draw_result_screen::DrawResultScreen,
        screen::{AppAction, Renderable, ScreenAsync},
    },
    shapes::{
        draw::DrawConfig, enums::BalanceModeEnum, player::PlayerEntry, settings::Settings,
    },
    util::split_labels,
};
use async_trait::async_trait;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
    Frame,
};

fn validate_digit(current: &str, c: char) -> bool {
    c.is_ascii_digit() && current.len() < 20
}

const FIELDS: usize = 4;

pub struct DrawSetupScreen<SW: SettingsWriter + Send + Sync> {
    roster: Vec<PlayerEntry>,
    settings: Settings,
    team_count: TextBox,
    team_labels: TextBox,
    balance_mode: CheckBox<BalanceModeEnum>,
    seed: TextBox,
    field: usize,
    notify_message: NotifyBanner,
    footer: NavigationFooter,
    settings_writer: Arc<SW>,
}

impl<SW: SettingsWriter + Send + Sync> Renderable for DrawSetupScreen<SW> {
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect) {
        let area = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // team count
                Constraint::Length(3), // labels
                Constraint::Length(3), // mode
                Constraint::Length(3), // seed
                Constraint::Min(0),
            ])
            .split(body);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(
                "{} ({} {})",
                current_labels().draw_setup,
                self.roster.len(),
                current_labels().players_count
            ));
        f.render_widget(block, body);
        self.team_count.render(f, area[0]);
        self.team_labels.render(f, area[1]);
        self.balance_mode.render(f, area[2]);
        self.seed.render(f, area[3]);
        self.notify_message.render(f, footer_right);
        self.footer.render(
            f,
            footer_left,
            &[
                ("Tab / Shift+Tab", current_labels().navigate),
                ("Space", current_labels().toggle),
                (current_labels().enter, current_labels().draw_teams),
                ("Esc", current_labels().back),
            ],
        );
    }
}

#[async_trait]
impl<SW: SettingsWriter + Send + Sync + 'static> ScreenAsync for DrawSetupScreen<SW> {
    async fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match (key.code, &self.notify_message.has_value()) {
            (_, true) => {
                self.notify_message.reset();
                AppAction::None
            }
            (KeyCode::Char(c), _) => {
                self.team_count.handle_char(c);
                self.team_labels.handle_char(c);
                self.balance_mode.handle_char(c);
                self.seed.handle_char(c);
                AppAction::None
            }
            (KeyCode::Backspace, _) => {
                self.team_count.handle_backspace();
                self.team_labels.handle_backspace();
                self.seed.handle_backspace();
                AppAction::None
            }
            (KeyCode::Left, _) | (KeyCode::Right, _) => {
                self.balance_mode.toggle();
                AppAction::None
            }
            (KeyCode::Tab, _) => {
                self.field = (self.field + 1) % FIELDS;
                self.update_writing_modes();
                AppAction::None
            }
            (KeyCode::BackTab, _) => {
                self.field = (self.field + FIELDS - 1) % FIELDS;
                self.update_writing_modes();
                AppAction::None
            }
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

impl<SW: SettingsWriter + Send + Sync> DrawSetupScreen<SW> {
    pub fn new(roster: Vec<PlayerEntry>, settings: Settings, settings_writer: Arc<SW>) -> Self {
        let team_count = TextBox::with_validator(
            current_labels().team_count.to_owned(),
            true,
            Some(&settings.team_count.to_string()),
            validate_digit,
        );
        let team_labels = TextBox::new(
            current_labels().team_labels.to_owned(),
            false,
            Some(&settings.team_labels.join(", ")),
        );
        let balance_mode = CheckBox::new(
            current_labels().draw_mode.to_owned(),
            false,
            BalanceModeEnum::Balanced,
            BalanceModeEnum::Random,
            settings.balance_mode == BalanceModeEnum::Random,
        );
        let seed = TextBox::with_validator(
            current_labels().seed.to_owned(),
            false,
            None,
            validate_digit,
        );
        DrawSetupScreen {
            roster,
            settings,
            team_count,
            team_labels,
            balance_mode,
            seed,
            field: 0,
            notify_message: NotifyBanner::new(),
            footer: NavigationFooter::new(),
            settings_writer,
        }
    }

    fn update_writing_modes(&mut self) {
        self.team_count.writing_mode = self.field == 0;
        self.team_labels.writing_mode = self.field == 1;
        self.balance_mode.writing_mode = self.field == 2;
        self.seed.writing_mode = self.field == 3;
    }

    fn draw_config(&self) -> Result<DrawConfig, AppError> {
        let raw_count = self.team_count.raw_value().trim();
        let team_count = raw_count
            .parse::<usize>()
            .map_err(|_| ConfigurationError::InvalidArgument(raw_count.to_string()))?;
        let seed = match self.seed.get_selected_value() {
            Some(s) => Some(
                s.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigurationError::InvalidSeed(s.clone()))?,
            ),
            None => None,
        };
        let config = DrawConfig {
            strict: self.settings.strict_team_count,
            ..DrawConfig::new(team_count, self.balance_mode.get_selected_value())
                .with_labels(split_labels(self.team_labels.raw_value()).as_slice())
        };
        Ok(match seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        })
    }

    async fn handle_enter(&mut self) -> AppAction {
        let config = match self.draw_config() {
            Ok(c) => c,
            Err(e) => {
                self.notify_message.set_error(e.to_string());
                return AppAction::None;
            }
        };
        match draw_teams(&self.roster, &config) {
            Ok(outcome) => {
                let settings = self.settings.with_last_draw(&config);
                match self.settings_writer.save(settings).await {
                    Ok(saved) => self.settings = saved,
                    Err(e) => log_error(&format!(
                        "{}: {}",
                        current_labels().could_not_save_settings,
                        e
                    )),
                }
                AppAction::SwitchScreen(Box::new(DrawResultScreen::new(
                    self.roster.clone(),
                    config,
                    outcome,
                )))
            }
            Err(e) => {
                self.notify_message
                    .report(current_labels().could_not_draw_teams, &e);
                AppAction::None
            }
        }
    }
}
