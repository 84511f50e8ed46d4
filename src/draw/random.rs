use crate::shapes::{player::PlayerEntry, team::TeamEntry};
use rand::{seq::SliceRandom, Rng};

/// Shuffles goalkeepers and outfield players separately and deals the
/// goalkeepers first, then everybody else, round-robin: the i-th dealt
/// player lands in team `i mod n`.
///
/// Sizes differ by at most one, and so do goalkeeper counts. Nothing else
/// is balanced.
pub fn deal<R: Rng + ?Sized>(roster: &[PlayerEntry], teams: &mut [TeamEntry], rng: &mut R) {
    if teams.is_empty() {
        return;
    }
    let (mut goalkeepers, mut outfield): (Vec<&PlayerEntry>, Vec<&PlayerEntry>) =
        roster.iter().partition(|p| p.is_goalkeeper());
    goalkeepers.shuffle(rng);
    outfield.shuffle(rng);
    let n = teams.len();
    for (i, player) in goalkeepers.into_iter().chain(outfield).enumerate() {
        teams[i % n].players.push(player.clone());
    }
}
