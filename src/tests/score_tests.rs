#[cfg(test)]
mod tests {
    use crate::{
        draw::score::Score,
        shapes::{enums::PositionEnum, player::PlayerEntry, team::TeamEntry},
    };

    #[test]
    fn empty_team_scores_zero() {
        let team = TeamEntry::new("Yellow");
        let score = Score::for_team(&team, PositionEnum::Forward);
        assert_eq!(score, Score::new(0, 0, 0));
        assert!(score < Score::new(0, 1, 1));
    }

    #[test]
    fn same_position_weighs_a_hundred() {
        let mut team = TeamEntry::new("Blue");
        team.players.push(PlayerEntry::new("a", 20, PositionEnum::Forward));
        team.players.push(PlayerEntry::new("b", 30, PositionEnum::Midfielder));
        assert_eq!(
            Score::for_team(&team, PositionEnum::Forward),
            Score::new(0, 125, 1)
        );
        assert_eq!(
            Score::for_team(&team, PositionEnum::Winger),
            Score::new(0, 25, 1)
        );
    }

    #[test]
    fn equal_fractions_compare_equal() {
        // 10/3 and 20/6
        assert_eq!(Score::new(0, 10, 3), Score::new(0, 20, 6));
        assert_eq!(Score::new(1, 50, 2), Score::new(0, 125, 1));
        assert!(Score::new(0, 10, 3) < Score::new(0, 7, 2));
        assert!(Score::new(1, 0, 1) > Score::new(0, 99, 1));
    }
}
