#[cfg(test)]
mod tests {
    use crate::{
        localization::labels_for,
        reporting::{summary::TeamSummary, text::render_draw_report},
        shapes::{
            enums::{LanguageEnum, PositionEnum},
            player::PlayerEntry,
            team::TeamEntry,
        },
    };

    fn team(label: &str, players: &[(&str, u8, PositionEnum)]) -> TeamEntry {
        TeamEntry {
            label: label.to_string(),
            players: players
                .iter()
                .map(|(name, age, position)| PlayerEntry::new(*name, *age, *position))
                .collect(),
        }
    }

    fn sample_teams() -> Vec<TeamEntry> {
        vec![
            team(
                "Yellow",
                &[
                    ("A", 30, PositionEnum::Goalkeeper),
                    ("D", 22, PositionEnum::Midfielder),
                ],
            ),
            team(
                "Blue",
                &[
                    ("B", 20, PositionEnum::Midfielder),
                    ("C", 25, PositionEnum::Forward),
                ],
            ),
        ]
    }

    #[test]
    fn renders_the_full_report() {
        let report = render_draw_report(&sample_teams(), labels_for(LanguageEnum::En));
        let team_rule = "-".repeat(50);
        let expected = format!(
            "DRAW COMPLETE! Total: 4 players\n{}\n\n\
             YELLOW (team 1) - 2 players\n\
             Mean age: 26 years\n\
             Positions: Goalkeeper: 1, Midfielder: 1\n\
             Players:\n\
             • A (Goalkeeper, 30 years)\n\
             • D (Midfielder, 22 years)\n\
             \n{}\n\n\
             BLUE (team 2) - 2 players\n\
             Mean age: 23 years\n\
             Positions: Midfielder: 1, Forward: 1\n\
             Players:\n\
             • B (Midfielder, 20 years)\n\
             • C (Forward, 25 years)\n\
             \n{}\n\n",
            "=".repeat(60),
            team_rule,
            team_rule
        );
        assert_eq!(report, expected);
    }

    #[test]
    fn rendering_twice_gives_the_same_text() {
        let teams = sample_teams();
        let labels = labels_for(LanguageEnum::En);
        assert_eq!(
            render_draw_report(&teams, labels),
            render_draw_report(&teams, labels)
        );
    }

    #[test]
    fn empty_teams_are_skipped() {
        let mut teams = sample_teams();
        teams.insert(1, TeamEntry::new("Green"));
        let report = render_draw_report(&teams, labels_for(LanguageEnum::En));
        assert!(!report.contains("GREEN"));
        assert!(report.contains("BLUE (team 3) - 2 players"));
        assert!(report.starts_with("DRAW COMPLETE! Total: 4 players"));
    }

    #[test]
    fn renders_in_portuguese() {
        let report = render_draw_report(&sample_teams(), labels_for(LanguageEnum::Pt));
        assert!(report.starts_with("SORTEIO REALIZADO! Total: 4 jogadores"));
        assert!(report.contains("YELLOW (time 1) - 2 jogadores"));
        assert!(report.contains("• A (Goleiro, 30 anos)"));
        assert!(report.contains("Posições: Goleiro: 1, Meia: 1"));
    }

    #[test]
    fn summary_rounds_mean_age_half_away_from_zero() {
        let summary = TeamSummary::from(&team(
            "Red",
            &[
                ("x", 20, PositionEnum::Fixo),
                ("y", 25, PositionEnum::Fixo),
            ],
        ));
        assert_eq!(summary.mean_age, Some(23));
        assert_eq!(summary.size, 2);
        assert_eq!(summary.positions, vec![(PositionEnum::Fixo, 2)]);
    }

    #[test]
    fn summary_keeps_first_appearance_order() {
        let summary = TeamSummary::from(&team(
            "White",
            &[
                ("x", 20, PositionEnum::Pivot),
                ("y", 21, PositionEnum::Winger),
                ("z", 22, PositionEnum::Pivot),
            ],
        ));
        assert_eq!(
            summary.positions,
            vec![(PositionEnum::Pivot, 2), (PositionEnum::Winger, 1)]
        );
        assert_eq!(TeamSummary::from(&TeamEntry::new("empty")).mean_age, None);
    }
}
