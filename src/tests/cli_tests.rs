#[cfg(test)]
mod tests {
    use crate::{
        cli::{Cli, Command, DrawArgs},
        logging::logger::{format_line, LogLevel},
        shapes::{draw::DrawConfig, enums::BalanceModeEnum},
        util::split_labels,
    };
    use clap::{error::ErrorKind, CommandFactory, Parser};

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_opens_the_ui() {
        let cli = Cli::try_parse_from(["pelada"]).expect("expected a parsed command line");
        assert_eq!(cli.command, None);
    }

    #[test]
    fn help_and_version_are_generated() {
        let version = Cli::try_parse_from(["pelada", "--version"])
            .expect_err("expected version output instead of a command");
        assert_eq!(version.kind(), ErrorKind::DisplayVersion);
        assert!(version.to_string().contains(env!("CARGO_PKG_VERSION")));
        let help = Cli::try_parse_from(["pelada", "draw", "--help"])
            .expect_err("expected help output instead of a command");
        assert_eq!(help.kind(), ErrorKind::DisplayHelp);
        assert!(help.to_string().contains("--seed"));
    }

    #[test]
    fn draw_options_are_parsed() {
        let cli = Cli::try_parse_from([
            "pelada", "draw", "--teams", "3", "--labels", "Red, ,Blue", "--random", "--seed", "42",
        ])
        .expect("expected a parsed command line");
        assert_eq!(
            cli.command,
            Some(Command::Draw(DrawArgs {
                teams: Some(3),
                labels: Some("Red, ,Blue".to_string()),
                random: true,
                seed: Some(42),
            }))
        );
    }

    #[test]
    fn malformed_arguments_are_reported() {
        let cases: [&[&str]; 4] = [
            &["pelada", "draw", "--seed", "soon"],
            &["pelada", "draw", "--teams"],
            &["pelada", "draw", "--teams", "two"],
            &["pelada", "shuffle"],
        ];
        for case in cases {
            assert!(
                Cli::try_parse_from(case.iter().copied()).is_err(),
                "expected {:?} to be rejected",
                case
            );
        }
        let bad_seed = Cli::try_parse_from(["pelada", "draw", "--seed", "soon"])
            .expect_err("expected a bad seed error");
        assert_eq!(bad_seed.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn draw_arguments_override_settings() {
        let base = DrawConfig::new(2, BalanceModeEnum::Balanced).with_labels(&["Yellow", "Blue"]);
        let unchanged = DrawArgs::default().apply(base.clone());
        assert_eq!(unchanged, base);
        let overridden = DrawArgs {
            teams: Some(4),
            labels: None,
            random: true,
            seed: Some(7),
        }
        .apply(base);
        assert_eq!(overridden.team_count, 4);
        assert_eq!(overridden.team_labels, vec!["Yellow", "Blue"]);
        assert_eq!(overridden.balance_mode, BalanceModeEnum::Random);
        assert_eq!(overridden.seed, Some(7));
        assert!(overridden.strict);
        let relabelled = DrawArgs {
            labels: Some("Red, ,Blue".to_string()),
            ..DrawArgs::default()
        }
        .apply(DrawConfig::new(3, BalanceModeEnum::Balanced));
        assert_eq!(relabelled.team_labels, vec!["Red", "", "Blue"]);
    }

    #[test]
    fn label_lists_keep_blank_slots() {
        assert!(split_labels("  ").is_empty());
        assert_eq!(split_labels("Red,Blue"), vec!["Red", "Blue"]);
        assert_eq!(split_labels(" Red ,, Blue"), vec!["Red", "", "Blue"]);
    }

    #[test]
    fn log_lines_carry_level_and_message() {
        let line = format_line(LogLevel::Warning, "roster row 3 skipped");
        assert!(line.starts_with('['));
        assert!(line.ends_with("] WARN - roster row 3 skipped\n"));
        assert!(format_line(LogLevel::Error, "x").contains("] ERROR - x"));
    }
}
