#[cfg(test)]
mod tests {
    use crate::{
        errors::{AppError, ConfigurationError, StoreAccessError, ValidationError},
        providers::{
            fs::roster_writer::FileSystemRosterWriter,
            roster_writer::{PlayerInput, RosterWriter},
        },
        shapes::{enums::PositionEnum, player::PlayerEntry},
    };
    use std::{
        fs,
        io::{Error, ErrorKind},
    };
    use tempfile::tempdir;
    use uuid::Uuid;

    #[test]
    fn held_files_map_to_locked() {
        for kind in [ErrorKind::PermissionDenied, ErrorKind::WouldBlock] {
            let e = StoreAccessError::from(Error::new(kind, "players.csv"));
            assert!(
                matches!(e, StoreAccessError::Locked(_)),
                "expected {:?} to map to Locked",
                kind
            );
            assert!(e.to_string().contains("close the file and try again"));
        }
        let e = StoreAccessError::from(Error::new(ErrorKind::NotFound, "players.csv"));
        assert!(matches!(e, StoreAccessError::Error(m) if m.contains("players.csv")));
    }

    #[test]
    fn csv_io_errors_keep_their_kind() {
        let locked = csv::Error::from(Error::new(ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(
            StoreAccessError::from(locked),
            StoreAccessError::Locked(m) if m.contains("denied")
        ));
        let other = csv::Error::from(Error::new(ErrorKind::UnexpectedEof, "truncated"));
        assert!(matches!(
            StoreAccessError::from(other),
            StoreAccessError::Error(m) if m.contains("truncated")
        ));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let e = serde_json::from_str::<serde_json::Value>("{ \"team_count\": ")
            .expect_err("expected a parse error");
        assert!(matches!(
            StoreAccessError::from(e),
            StoreAccessError::Serialization(_)
        ));
    }

    #[test]
    fn only_store_failures_are_retryable() {
        let locked = AppError::from(StoreAccessError::Locked("players.csv".to_string()));
        assert!(locked.is_retryable());
        assert!(AppError::from(StoreAccessError::Error("disk full".to_string())).is_retryable());
        assert!(!AppError::from(StoreAccessError::NotFound(Uuid::new_v4())).is_retryable());
        assert!(!AppError::from(ConfigurationError::EmptyRoster).is_retryable());
        assert!(!AppError::from(ConfigurationError::InvalidTeamCount(1)).is_retryable());
        assert!(!AppError::from(ValidationError::EmptyName).is_retryable());
    }

    #[test]
    fn errors_name_their_area() {
        let e = AppError::from(StoreAccessError::Locked("players.csv".to_string()));
        assert!(e.to_string().starts_with("store error: the roster file is locked"));
        let e = AppError::from(ConfigurationError::TooManyTeams {
            teams: 5,
            players: 4,
        });
        assert_eq!(
            e.to_string(),
            "configuration error: invalid team count 5: must be between 2 and 4"
        );
    }

    #[tokio::test]
    async fn failed_write_is_retryable_and_keeps_the_roster() {
        let dir = tempdir().expect("expected a temp dir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").expect("expected the file to be written");
        let writer = FileSystemRosterWriter::new(&blocker.join("players.csv"));
        let mut roster = vec![PlayerEntry::new("Ana", 27, PositionEnum::Pivot)];
        let before = roster.clone();
        let result = writer
            .save(
                PlayerInput::New {
                    name: "Zé".to_string(),
                    age: 33,
                    position: PositionEnum::Goalkeeper,
                },
                &mut roster,
            )
            .await;
        let e = result.expect_err("expected the write to fail");
        assert!(matches!(e, AppError::Store(StoreAccessError::Error(_))));
        assert!(e.is_retryable());
        assert_eq!(roster, before);
    }
}
