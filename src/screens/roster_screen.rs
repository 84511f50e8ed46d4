use std::{path::PathBuf, sync::Arc};

use crate::{
    localization::current_labels,
    logging::logger::log_error,
    providers::{
        roster_reader::RosterReader, roster_writer::RosterWriter,
        settings_reader::SettingsReader, settings_writer::SettingsWriter,
    },
    screens::{
        components::{navigation_footer::NavigationFooter, notify_banner::NotifyBanner},
        draw_setup_screen::DrawSetupScreen,
        edit_player_screen::EditPlayerScreen,
        screen::{AppAction, Renderable, ScreenAsync},
    },
    shapes::{enums::FriendlyName, player::PlayerEntry, settings::Settings},
    util::open_in_default_app,
    validation::InputPolicy,
};
use async_trait::async_trait;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, ListState, Paragraph, Row, Table},
    Frame,
};

/// Root screen: the registered players and the entry points to every other
/// screen.
pub struct RosterScreen<
    RR: RosterReader + Send + Sync,
    RW: RosterWriter + Send + Sync,
    SR: SettingsReader + Send + Sync,
    SW: SettingsWriter + Send + Sync,
> {
    list_state: ListState,
    roster: Vec<PlayerEntry>,
    settings: Settings,
    roster_path: PathBuf,
    notify_message: NotifyBanner,
    pending_removal: Option<PlayerEntry>,
    footer: NavigationFooter,
    roster_reader: Arc<RR>,
    roster_writer: Arc<RW>,
    settings_reader: Arc<SR>,
    settings_writer: Arc<SW>,
}

#[async_trait]
impl<
        RR: RosterReader + Send + Sync + 'static,
        RW: RosterWriter + Send + Sync + 'static,
        SR: SettingsReader + Send + Sync + 'static,
        SW: SettingsWriter + Send + Sync + 'static,
    > ScreenAsync for RosterScreen<RR, RW, SR, SW>
{
    async fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match (key.code, &self.notify_message.has_value()) {
            (KeyCode::Enter, true) if self.pending_removal.is_some() => {
                self.notify_message.reset();
                self.remove_pending().await;
                AppAction::None
            }
            (_, true) => {
                self.notify_message.reset();
                self.pending_removal = None;
                AppAction::None
            }
            (KeyCode::Down, _) => {
                self.next_player();
                AppAction::None
            }
            (KeyCode::Up, _) => {
                self.previous_player();
                AppAction::None
            }
            (KeyCode::Char('n'), _) => AppAction::SwitchScreen(Box::new(EditPlayerScreen::new(
                self.roster.clone(),
                self.input_policy(),
                self.roster_writer.clone(),
            ))),
            (KeyCode::Enter, _) => match self.selected_player() {
                Some(p) => AppAction::SwitchScreen(Box::new(EditPlayerScreen::edit(
                    self.roster.clone(),
                    p,
                    self.input_policy(),
                    self.roster_writer.clone(),
                ))),
                None => AppAction::None,
            },
            (KeyCode::Char('d'), _) | (KeyCode::Delete, _) => {
                if let Some(p) = self.selected_player() {
                    self.notify_message.set_warning(format!(
                        "{} '{}': {}",
                        current_labels().remove_player,
                        p.name,
                        current_labels().confirm_remove_player
                    ));
                    self.pending_removal = Some(p);
                }
                AppAction::None
            }
            (KeyCode::Char('o'), _) => {
                if let Err(e) = open_in_default_app(&self.roster_path) {
                    log_error(&format!("could not open {}: {}", self.roster_path.display(), e));
                    self.notify_message.set_error(format!(
                        "{}: {}",
                        current_labels().could_not_open_roster_file,
                        e
                    ));
                }
                AppAction::None
            }
            (KeyCode::Char('s'), _) => AppAction::SwitchScreen(Box::new(DrawSetupScreen::new(
                self.roster.clone(),
                self.settings.clone(),
                self.settings_writer.clone(),
            ))),
            (KeyCode::Char('q'), _) => AppAction::Quit(Ok(())),
            _ => AppAction::None,
        }
    }

    async fn refresh_data(&mut self) {
        if let Ok(s) = self.settings_reader.read().await {
            self.settings = s;
        }
        match self.roster_reader.read_all().await {
            Ok(roster) => {
                self.roster = roster;
                self.clamp_selection();
            }
            Err(e) => self
                .notify_message
                .report(current_labels().could_not_load_players, &e),
        }
    }
}

impl<
        RR: RosterReader + Send + Sync,
        RW: RosterWriter + Send + Sync,
        SR: SettingsReader + Send + Sync,
        SW: SettingsWriter + Send + Sync,
    > Renderable for RosterScreen<RR, RW, SR, SW>
{
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect) {
        self.notify_message.render(f, footer_right);
        let container = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(body);
        let header = Paragraph::new(format!(
            "{}: {}",
            current_labels().total_registered_players,
            self.roster.len()
        ))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(current_labels().roster));
        f.render_widget(header, container[0]);
        if self.roster.is_empty() {
            self.render_no_players_yet(f, container[1]);
        } else {
            let widths = [
                Constraint::Length(30),
                Constraint::Length(7),
                Constraint::Length(20),
            ];
            let table = Table::new(self.get_rows(), widths)
                .header(
                    Row::new(vec![
                        current_labels().name,
                        current_labels().age,
                        current_labels().position,
                    ])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                )
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(current_labels().players),
                );
            f.render_widget(table, container[1]);
        }
        self.footer
            .render(f, footer_left, &self.get_footer_entries());
    }
}

impl<
        RR: RosterReader + Send + Sync,
        RW: RosterWriter + Send + Sync,
        SR: SettingsReader + Send + Sync,
        SW: SettingsWriter + Send + Sync,
    > RosterScreen<RR, RW, SR, SW>
{
    pub fn new(
        settings: Settings,
        roster: Vec<PlayerEntry>,
        roster_path: PathBuf,
        roster_reader: Arc<RR>,
        roster_writer: Arc<RW>,
        settings_reader: Arc<SR>,
        settings_writer: Arc<SW>,
    ) -> Self {
        let mut screen = RosterScreen {
            list_state: ListState::default(),
            roster,
            settings,
            roster_path,
            notify_message: NotifyBanner::new(),
            pending_removal: None,
            footer: NavigationFooter::new(),
            roster_reader,
            roster_writer,
            settings_reader,
            settings_writer,
        };
        screen.clamp_selection();
        screen
    }

    fn input_policy(&self) -> InputPolicy {
        InputPolicy::new(self.settings.validation_policy, self.settings.default_age)
    }

    fn selected_player(&self) -> Option<PlayerEntry> {
        self.list_state
            .selected()
            .and_then(|i| self.roster.get(i))
            .cloned()
    }

    fn clamp_selection(&mut self) {
        if self.roster.is_empty() {
            self.list_state.select(None);
        } else {
            let selected = self.list_state.selected().unwrap_or(0);
            self.list_state
                .select(Some(selected.min(self.roster.len() - 1)));
        }
    }

    async fn remove_pending(&mut self) {
        let Some(player) = self.pending_removal.take() else {
            return;
        };
        match self
            .roster_writer
            .remove(&player.id, &mut self.roster)
            .await
        {
            Ok(_) => {
                self.clamp_selection();
                self.notify_message
                    .set_info(current_labels().player_removed.to_string());
            }
            Err(e) => self
                .notify_message
                .report(current_labels().could_not_remove_player, &e),
        }
    }

    fn next_player(&mut self) {
        if let Some(selected) = self.list_state.selected() {
            let new_selected = (selected + 1).min(self.roster.len().saturating_sub(1));
            self.list_state.select(Some(new_selected));
        }
    }

    fn previous_player(&mut self) {
        if let Some(selected) = self.list_state.selected() {
            self.list_state.select(Some(selected.saturating_sub(1)));
        }
    }

    fn get_footer_entries(&self) -> Vec<(&'static str, &'static str)> {
        let labels = current_labels();
        let mut entries = vec![("N", labels.new_player)];
        if !self.roster.is_empty() {
            entries.insert(0, ("↑↓", labels.navigate));
            entries.push((labels.enter, labels.edit_player));
            entries.push(("D", labels.remove_player));
            entries.push(("S", labels.draw_setup));
        }
        entries.push(("O", labels.open_roster_file));
        entries.push(("Q", labels.quit));
        entries
    }

    fn render_no_players_yet(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Length(3),
                Constraint::Percentage(40),
            ])
            .split(area);
        let paragraph = Paragraph::new(current_labels().no_players_yet)
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, chunks[1]);
    }

    fn get_rows(&self) -> Vec<Row<'_>> {
        let selected = self.list_state.selected();
        self.roster
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let mut row = Row::new(vec![
                    p.name.clone(),
                    p.age.to_string(),
                    p.position.friendly_name(current_labels()).to_string(),
                ]);
                if Some(i) == selected {
                    row = row.style(
                        Style::default()
                            .add_modifier(Modifier::REVERSED)
                            .add_modifier(Modifier::BOLD),
                    );
                }
                row
            })
            .collect()
    }
}
