mod app;
mod cli;
mod constants;
mod draw;
mod errors;
mod localization;
mod logging;
mod providers;
mod reporting;
mod screens;
mod shapes;
mod util;
mod validation;

#[cfg(test)]
mod tests;

use crate::{
    app::App,
    cli::{Cli, Command, DrawArgs},
    draw::draw_teams,
    localization::{current_labels, set_language},
    logging::logger::{init_logger, log_error, log_info},
    providers::{
        fs::{
            path::{get_base_path, get_log_file_path, get_roster_file_path},
            roster_reader::FileSystemRosterReader,
            roster_writer::FileSystemRosterWriter,
            settings_reader::FileSystemSettingsReader,
            settings_writer::FileSystemSettingsWriter,
        },
        roster_reader::RosterReader,
        settings_reader::SettingsReader,
    },
    reporting::text::render_draw_report,
    screens::screen::AppAction,
    shapes::settings::Settings,
    validation::InputPolicy,
};
use clap::Parser;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::Paragraph,
    Terminal,
};
use std::{error::Error, sync::Arc};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let base_dir = get_base_path()?;

    // init logger
    init_logger(get_log_file_path(&base_dir));

    let settings_reader = FileSystemSettingsReader::new(&base_dir);
    // the reader has already logged why the file was unusable
    let settings = settings_reader.read().await.unwrap_or_default();
    set_language(settings.language);
    log_info(&format!(
        "starting {} (language {}, validation policy {})",
        env!("CARGO_PKG_VERSION"),
        settings.language,
        settings.validation_policy
    ));
    let roster_path = get_roster_file_path(&base_dir, &settings);
    let policy = InputPolicy::new(settings.validation_policy, settings.default_age);
    let roster_reader = FileSystemRosterReader::new(&roster_path, policy);

    if let Some(Command::Draw(draw_args)) = cli.command {
        return run_draw(&roster_reader, &settings, &draw_args).await;
    }

    let roster = match roster_reader.read_all().await {
        Ok(roster) => roster,
        Err(e) => {
            log_error(&format!("could not load players: {}", e));
            vec![]
        }
    };
    let roster_writer = FileSystemRosterWriter::new(&roster_path);
    let settings_writer = FileSystemSettingsWriter::new(&base_dir);
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let res = run_app(
        &mut terminal,
        App::new(
            settings,
            roster,
            roster_path,
            Arc::new(roster_reader),
            Arc::new(roster_writer),
            Arc::new(settings_reader),
            Arc::new(settings_writer),
        ),
    )
    .await;
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    if let Err(err) = res {
        log_error(&format!("terminal error: {}", err));
        println!("{:?}", err)
    }
    Ok(())
}

/// Headless draw: prints the report to stdout and the seed to stderr, so a
/// draw can be replayed with `--seed`.
async fn run_draw<RR: RosterReader>(
    roster_reader: &RR,
    settings: &Settings,
    draw_args: &DrawArgs,
) -> Result<(), Box<dyn Error>> {
    let roster = match roster_reader.read_all().await {
        Ok(roster) => roster,
        Err(e) => {
            log_error(&format!("could not load players: {}", e));
            eprintln!("{}: {}", current_labels().could_not_load_players, e);
            std::process::exit(1);
        }
    };
    let config = draw_args.apply(settings.draw_config());
    match draw_teams(&roster, &config) {
        Ok(outcome) => {
            print!("{}", render_draw_report(&outcome.teams, current_labels()));
            eprintln!("seed: {}", outcome.seed);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}: {}", current_labels().could_not_draw_teams, e);
            std::process::exit(1);
        }
    }
}

/// The main structure is the following one:
///
/// |----------------------------|
/// |          header            |
/// |----------------------------|
/// |                            |
/// |                            |
/// |           body             |
/// |                            |
/// |                            |
/// |----------------------------|
/// | footer_left | footer_right |
/// |----------------------------|
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();
            let container = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(3),
                ])
                .split(size);
            let footer = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(container[2]);
            let header = Paragraph::new(current_labels().app_title)
                .style(Style::default().add_modifier(Modifier::BOLD));
            f.render_widget(header, container[0]);
            if let Some(screen) = app.current_screen() {
                screen.render(f, container[1], footer[0], footer[1]);
            }
        })?;
        if event::poll(std::time::Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                match (key.kind, app.current_screen()) {
                    (KeyEventKind::Release, _) => continue,
                    (_, Some(screen)) => match screen.handle_key(key).await {
                        AppAction::None => {}
                        AppAction::SwitchScreen(new_screen) => app.push_screen(new_screen),
                        AppAction::Back { refresh, screens } => {
                            app.pop_screen(refresh, screens).await
                        }
                        AppAction::Quit(result) => return result,
                    },
                    _ => {}
                }
            }
        }
    }
}
