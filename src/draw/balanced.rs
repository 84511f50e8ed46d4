use crate::{
    draw::score::Score,
    shapes::{player::PlayerEntry, team::TeamEntry},
};
use rand::{seq::SliceRandom, Rng};
use std::cmp::Ordering;

/// Balanced assignment in two passes over the roster.
///
/// 1. Goalkeepers, oldest first: each one goes to an open team holding the
///    fewest goalkeepers. With no more goalkeepers than teams this means
///    at most one per team; otherwise counts differ by at most one.
/// 2. Outfield players, oldest first: each one goes to the open team with
///    the lowest [`Score`] for its position.
///
/// A team is open while it holds fewer players than its capacity. Ties in
/// either pass are broken uniformly among every tied team. Players of the
/// same age are shuffled before sorting so they do not keep roster order.
pub fn assign<R: Rng + ?Sized>(
    roster: &[PlayerEntry],
    teams: &mut [TeamEntry],
    capacities: &[usize],
    rng: &mut R,
) {
    let (mut goalkeepers, mut outfield): (Vec<&PlayerEntry>, Vec<&PlayerEntry>) =
        roster.iter().partition(|p| p.is_goalkeeper());
    oldest_first(&mut goalkeepers, rng);
    oldest_first(&mut outfield, rng);

    for goalkeeper in goalkeepers {
        let chosen = pick_lowest(open_teams(teams, capacities), |i| teams[i].goalkeeper_count(), rng);
        if let Some(i) = chosen {
            teams[i].players.push(goalkeeper.clone());
        }
    }

    for player in outfield {
        let chosen = pick_lowest(
            open_teams(teams, capacities),
            |i| Score::for_team(&teams[i], player.position),
            rng,
        );
        if let Some(i) = chosen {
            teams[i].players.push(player.clone());
        }
    }
}

fn oldest_first<R: Rng + ?Sized>(players: &mut [&PlayerEntry], rng: &mut R) {
    players.shuffle(rng);
    players.sort_by(|a, b| b.age.cmp(&a.age));
}

fn open_teams(teams: &[TeamEntry], capacities: &[usize]) -> Vec<usize> {
    teams
        .iter()
        .zip(capacities)
        .enumerate()
        .filter(|(_, (team, capacity))| team.len() < **capacity)
        .map(|(i, _)| i)
        .collect()
}

/// Index with the lowest key, chosen uniformly at random among all indexes
/// sharing that key.
pub(crate) fn pick_lowest<K, F, R>(candidates: Vec<usize>, key: F, rng: &mut R) -> Option<usize>
where
    K: Ord,
    F: Fn(usize) -> K,
    R: Rng + ?Sized,
{
    let mut best: Option<K> = None;
    let mut tied: Vec<usize> = Vec::new();
    for i in candidates {
        let k = key(i);
        match best.as_ref().map(|b| k.cmp(b)) {
            Some(Ordering::Greater) => {}
            Some(Ordering::Equal) => tied.push(i),
            _ => {
                best = Some(k);
                tied.clear();
                tied.push(i);
            }
        }
    }
    tied.choose(rng).copied()
}
