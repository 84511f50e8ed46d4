#[cfg(test)]
mod tests {
    use crate::{
        constants::{DEFAULT_AGE, DEFAULT_TEAM_COUNT},
        errors::AppError,
        providers::{
            fs::{
                path::{get_config_file_path, get_roster_file_path},
                settings_reader::FileSystemSettingsReader,
                settings_writer::FileSystemSettingsWriter,
            },
            settings_reader::SettingsReader,
            settings_writer::SettingsWriter,
        },
        shapes::{
            draw::DrawConfig,
            enums::{BalanceModeEnum, LanguageEnum, ValidationPolicyEnum},
            settings::Settings,
        },
    };
    use std::{fs, path::PathBuf};
    use tempfile::tempdir;

    #[tokio::test]
    async fn missing_settings_are_the_defaults() {
        let dir = tempdir().expect("expected a temp dir");
        let read = FileSystemSettingsReader::new(&dir.path().join("first-run"))
            .read()
            .await
            .expect("expected default settings");
        assert_eq!(read, Settings::default());
    }

    #[tokio::test]
    async fn unreadable_settings_are_a_store_error() {
        let dir = tempdir().expect("expected a temp dir");
        fs::create_dir(get_config_file_path(dir.path())).expect("expected a directory");
        let result = FileSystemSettingsReader::new(dir.path()).read().await;
        assert!(matches!(result, Err(AppError::Store(_))));
    }

    #[tokio::test]
    async fn out_of_range_settings_fall_back() {
        let dir = tempdir().expect("expected a temp dir");
        fs::write(
            get_config_file_path(dir.path()),
            r#"{ "team_count": 200000000, "default_age": 5, "language": "pt" }"#,
        )
        .expect("expected the file to be written");
        let read = FileSystemSettingsReader::new(dir.path())
            .read()
            .await
            .expect("expected the settings");
        assert_eq!(read.team_count, DEFAULT_TEAM_COUNT);
        assert_eq!(read.default_age, DEFAULT_AGE);
        assert_eq!(read.language, LanguageEnum::Pt);

        fs::write(get_config_file_path(dir.path()), r#"{ "team_count": 20 }"#)
            .expect("expected the file to be written");
        let read = FileSystemSettingsReader::new(dir.path())
            .read()
            .await
            .expect("expected the settings");
        assert_eq!(read.team_count, 20);
    }

    #[tokio::test]
    async fn settings_round_trip() {
        let dir = tempdir().expect("expected a temp dir");
        let base = dir.path().join("nested");
        let settings = Settings {
            language: LanguageEnum::Pt,
            team_count: 3,
            validation_policy: ValidationPolicyEnum::Reject,
            ..Settings::default()
        };
        FileSystemSettingsWriter::new(&base)
            .save(settings.clone())
            .await
            .expect("expected the settings to be saved");
        let read = FileSystemSettingsReader::new(&base)
            .read()
            .await
            .expect("expected the settings");
        assert_eq!(read, settings);
    }

    #[tokio::test]
    async fn partial_settings_use_defaults() {
        let dir = tempdir().expect("expected a temp dir");
        fs::write(
            get_config_file_path(dir.path()),
            r#"{ "language": "pt", "balance_mode": "random" }"#,
        )
        .expect("expected the file to be written");
        let read = FileSystemSettingsReader::new(dir.path())
            .read()
            .await
            .expect("expected the settings");
        assert_eq!(read.language, LanguageEnum::Pt);
        assert_eq!(read.balance_mode, BalanceModeEnum::Random);
        assert_eq!(read.team_count, 2);
        assert_eq!(read.default_age, 25);
        assert!(read.strict_team_count);
        assert_eq!(read.validation_policy, ValidationPolicyEnum::DefaultWithWarning);
        assert_eq!(read.team_labels[0], "Yellow");
    }

    #[tokio::test]
    async fn malformed_settings_are_a_store_error() {
        let dir = tempdir().expect("expected a temp dir");
        fs::write(get_config_file_path(dir.path()), "{ team_count: ")
            .expect("expected the file to be written");
        let result = FileSystemSettingsReader::new(dir.path()).read().await;
        assert!(matches!(result, Err(AppError::Store(_))));
    }

    #[test]
    fn last_draw_is_remembered() {
        let settings = Settings::default();
        let config = DrawConfig::new(4, BalanceModeEnum::Random)
            .with_labels(&["Red", "Green"])
            .with_seed(99);
        let updated = settings.with_last_draw(&config);
        assert_eq!(updated.team_count, 4);
        assert_eq!(updated.team_labels, vec!["Red", "Green"]);
        assert_eq!(updated.balance_mode, BalanceModeEnum::Random);
        assert_eq!(updated.language, settings.language);
        let next = updated.draw_config();
        assert_eq!(next.seed, None);
        assert_eq!(next.team_count, 4);
    }

    #[test]
    fn roster_path_can_be_overridden() {
        let base = PathBuf::from("/srv/pelada");
        let mut settings = Settings::default();
        assert_eq!(
            get_roster_file_path(&base, &settings),
            base.join("players.csv")
        );
        settings.roster_file = Some(PathBuf::from("sunday.csv"));
        assert_eq!(
            get_roster_file_path(&base, &settings),
            base.join("sunday.csv")
        );
        settings.roster_file = Some(PathBuf::from("/tmp/elsewhere.csv"));
        assert_eq!(
            get_roster_file_path(&base, &settings),
            PathBuf::from("/tmp/elsewhere.csv")
        );
    }
}
