use std::{path::PathBuf, sync::Arc};

use crate::{
    providers::{
        roster_reader::RosterReader, roster_writer::RosterWriter,
        settings_reader::SettingsReader, settings_writer::SettingsWriter,
    },
    screens::{roster_screen::RosterScreen, screen::ScreenAsync},
    shapes::{player::PlayerEntry, settings::Settings},
};

pub struct App {
    screens: Vec<Box<dyn ScreenAsync>>,
}

impl App {
    pub fn new<
        RR: RosterReader + Send + Sync + 'static,
        RW: RosterWriter + Send + Sync + 'static,
        SR: SettingsReader + Send + Sync + 'static,
        SW: SettingsWriter + Send + Sync + 'static,
    >(
        settings: Settings,
        roster: Vec<PlayerEntry>,
        roster_path: PathBuf,
        roster_reader: Arc<RR>,
        roster_writer: Arc<RW>,
        settings_reader: Arc<SR>,
        settings_writer: Arc<SW>,
    ) -> Self {
        Self {
            screens: vec![Box::new(RosterScreen::new(
                settings,
                roster,
                roster_path,
                roster_reader,
                roster_writer,
                settings_reader,
                settings_writer,
            ))],
        }
    }

    pub fn current_screen(&mut self) -> Option<&mut Box<dyn ScreenAsync>> {
        self.screens.last_mut()
    }

    pub fn push_screen(&mut self, screen: Box<dyn ScreenAsync>) {
        self.screens.push(screen);
    }

    /// Pops `count` screens, never the root one.
    pub async fn pop_screen(&mut self, refresh: bool, count: usize) {
        let keep = self.screens.len().saturating_sub(count).max(1);
        if keep >= self.screens.len() {
            return;
        }
        self.screens.truncate(keep);
        if refresh {
            if let Some(prev) = self.screens.last_mut() {
                prev.refresh_data().await;
            }
        }
    }
}
