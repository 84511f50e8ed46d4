pub mod balanced;
pub mod random;
pub mod score;

use crate::{
    constants::{MAX_TEAM_COUNT, MIN_PLAYERS, MIN_TEAM_COUNT},
    errors::{AppError, ConfigurationError},
    localization::current_labels,
    logging::logger::log_info,
    shapes::{
        draw::{DrawConfig, DrawOutcome},
        enums::BalanceModeEnum,
        player::PlayerEntry,
        team::TeamEntry,
    },
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Checks the draw parameters against the roster size. Nothing is drawn when
/// this fails.
pub fn check_preconditions(players: usize, config: &DrawConfig) -> Result<(), ConfigurationError> {
    if players == 0 {
        return Err(ConfigurationError::EmptyRoster);
    }
    if players < MIN_PLAYERS {
        return Err(ConfigurationError::NotEnoughPlayers {
            required: MIN_PLAYERS,
            found: players,
        });
    }
    if !(MIN_TEAM_COUNT..=MAX_TEAM_COUNT).contains(&config.team_count) {
        return Err(ConfigurationError::InvalidTeamCount(config.team_count));
    }
    if config.strict && config.team_count > players {
        return Err(ConfigurationError::TooManyTeams {
            teams: config.team_count,
            players,
        });
    }
    Ok(())
}

/// Target size of each team: `total / n`, plus one for the first
/// `total % n` teams, so the capacities add up to `total`.
pub fn capacities(total: usize, team_count: usize) -> Vec<usize> {
    if team_count == 0 {
        return vec![];
    }
    let base = total / team_count;
    let extra = total % team_count;
    (0..team_count)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}

/// Partitions `roster` into `config.team_count` teams.
///
/// Every player ends up in exactly one team, team sizes differ by at most
/// one and so do goalkeeper counts, in both modes. The roster is never
/// modified. Within each team goalkeepers are listed first, then the others
/// by ascending age.
pub fn draw<R: Rng + ?Sized>(
    roster: &[PlayerEntry],
    config: &DrawConfig,
    rng: &mut R,
) -> Result<Vec<TeamEntry>, AppError> {
    check_preconditions(roster.len(), config)?;
    let mut teams: Vec<TeamEntry> = config
        .resolved_labels(current_labels().team)
        .into_iter()
        .map(TeamEntry::new)
        .collect();
    match config.balance_mode {
        BalanceModeEnum::Random => random::deal(roster, &mut teams, rng),
        BalanceModeEnum::Balanced => {
            let capacities = capacities(roster.len(), config.team_count);
            balanced::assign(roster, &mut teams, &capacities, rng)
        }
    }
    teams.iter_mut().for_each(TeamEntry::sort_for_display);
    Ok(teams)
}

/// Runs [`draw`] on a `ChaCha8Rng` seeded from `config.seed`, or from a fresh
/// random seed. The seed is returned so the same draw can be replayed.
pub fn draw_teams(roster: &[PlayerEntry], config: &DrawConfig) -> Result<DrawOutcome, AppError> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let teams = draw(roster, config, &mut rng)?;
    log_info(&format!(
        "drew {} teams from {} players ({} mode, seed {})",
        teams.len(),
        roster.len(),
        config.balance_mode,
        seed
    ));
    Ok(DrawOutcome { seed, teams })
}
