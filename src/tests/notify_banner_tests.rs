#[cfg(test)]
mod tests {
    use crate::{
        errors::{AppError, ConfigurationError, StoreAccessError},
        screens::components::notify_banner::{NotifyBanner, NotifyMessage},
    };

    #[test]
    fn locked_roster_is_shown_as_a_warning() {
        let e = AppError::from(StoreAccessError::Locked("players.csv".to_string()));
        let message = NotifyMessage::from_error("could not save player", &e);
        assert!(matches!(message, NotifyMessage::Warning(_)));
        assert!(message.text().starts_with("could not save player: store error"));
        assert!(message.text().contains("close the file and try again"));
    }

    #[test]
    fn draw_refusals_are_shown_as_errors() {
        let e = AppError::from(ConfigurationError::InvalidTeamCount(21));
        let message = NotifyMessage::from_error("could not draw teams", &e);
        assert_eq!(
            message,
            NotifyMessage::Error(
                "could not draw teams: configuration error: invalid team count 21: must be between 2 and 20"
                    .to_string()
            )
        );
    }

    #[test]
    fn reported_errors_replace_the_current_message() {
        let mut banner = NotifyBanner::new();
        assert!(!banner.has_value());
        banner.set_info("player removed".to_string());
        banner.report(
            "could not load players",
            &AppError::from(StoreAccessError::Error("disk full".to_string())),
        );
        assert_eq!(
            banner.message,
            Some(NotifyMessage::Warning(
                "could not load players: store error: IO error: disk full".to_string()
            ))
        );
        banner.reset();
        assert!(!banner.has_value());
    }
}
