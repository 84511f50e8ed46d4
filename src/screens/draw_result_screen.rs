use crate::{
    draw::draw_teams,
    localization::current_labels,
    reporting::text::render_draw_report,
    screens::{
        components::{navigation_footer::NavigationFooter, notify_banner::NotifyBanner},
        screen::{AppAction, Renderable, ScreenAsync},
    },
    shapes::{
        draw::{DrawConfig, DrawOutcome},
        enums::FriendlyName,
        player::PlayerEntry,
    },
};
use async_trait::async_trait;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct DrawResultScreen {
    roster: Vec<PlayerEntry>,
    config: DrawConfig,
    outcome: DrawOutcome,
    report: String,
    scroll: u16,
    notify_message: NotifyBanner,
    footer: NavigationFooter,
}

impl Renderable for DrawResultScreen {
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect) {
        let title = format!(
            "{} ({}, seed {})",
            current_labels().draw_result,
            self.config.balance_mode.friendly_name(current_labels()),
            self.outcome.seed
        );
        let paragraph = Paragraph::new(self.report.clone())
            .block(Block::default().borders(Borders::ALL).title(title))
            .scroll((self.scroll, 0));
        f.render_widget(paragraph, body);
        self.notify_message.render(f, footer_right);
        self.footer.render(
            f,
            footer_left,
            &[
                ("↑↓", current_labels().scroll),
                ("R", current_labels().redraw),
                ("Esc", current_labels().back),
            ],
        );
    }
}

#[async_trait]
impl ScreenAsync for DrawResultScreen {
    async fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match (key.code, &self.notify_message.has_value()) {
            (_, true) => {
                self.notify_message.reset();
                AppAction::None
            }
            (KeyCode::Down, _) => {
                self.scroll = self.scroll.saturating_add(1).min(self.max_scroll());
                AppAction::None
            }
            (KeyCode::Up, _) => {
                self.scroll = self.scroll.saturating_sub(1);
                AppAction::None
            }
            (KeyCode::Char('r'), _) => {
                self.redraw();
                AppAction::None
            }
            (KeyCode::Esc, _) => AppAction::Back {
                refresh: false,
                screens: 1,
            },
            _ => AppAction::None,
        }
    }

    async fn refresh_data(&mut self) {}
}

impl DrawResultScreen {
    pub fn new(roster: Vec<PlayerEntry>, config: DrawConfig, outcome: DrawOutcome) -> Self {
        let report = render_draw_report(&outcome.teams, current_labels());
        Self {
            roster,
            config,
            outcome,
            report,
            scroll: 0,
            notify_message: NotifyBanner::new(),
            footer: NavigationFooter::new(),
        }
    }

    fn max_scroll(&self) -> u16 {
        self.report.lines().count().saturating_sub(1) as u16
    }

    /// Same parameters, fresh seed.
    fn redraw(&mut self) {
        let config = DrawConfig {
            seed: None,
            ..self.config.clone()
        };
        match draw_teams(&self.roster, &config) {
            Ok(outcome) => {
                self.report = render_draw_report(&outcome.teams, current_labels());
                self.outcome = outcome;
                self.scroll = 0;
            }
            Err(e) => self
                .notify_message
                .report(current_labels().could_not_draw_teams, &e),
        }
    }
}
