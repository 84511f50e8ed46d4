use crate::{
    localization::Labels,
    reporting::summary::TeamSummary,
    shapes::{enums::FriendlyName, team::TeamEntry},
};
use std::fmt::Write;

const HEADER_RULE_WIDTH: usize = 60;
const TEAM_RULE_WIDTH: usize = 50;

/// Plain-text report of a draw. Empty teams are left out; team numbers
/// still refer to the position in the draw.
pub fn render_draw_report(teams: &[TeamEntry], labels: &Labels) -> String {
    let total: usize = teams.iter().map(TeamEntry::len).sum();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}: {} {}",
        labels.draw_complete, labels.total, total, labels.players_count
    );
    let _ = writeln!(out, "{}", "=".repeat(HEADER_RULE_WIDTH));
    out.push('\n');
    for (i, team) in teams.iter().enumerate() {
        if team.is_empty() {
            continue;
        }
        render_team(&mut out, i + 1, &TeamSummary::from(team), labels);
    }
    out
}

fn render_team(out: &mut String, number: usize, summary: &TeamSummary, labels: &Labels) {
    let _ = writeln!(
        out,
        "{} ({} {}) - {} {}",
        summary.label.to_uppercase(),
        labels.team.to_lowercase(),
        number,
        summary.size,
        labels.players_count
    );
    if let Some(mean_age) = summary.mean_age {
        let _ = writeln!(out, "{}: {} {}", labels.mean_age, mean_age, labels.years);
    }
    let positions = summary
        .positions
        .iter()
        .map(|(p, count)| format!("{}: {}", p.friendly_name(labels), count))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "{}: {}", labels.positions, positions);
    let _ = writeln!(out, "{}:", labels.players);
    for p in &summary.players {
        let _ = writeln!(
            out,
            "• {} ({}, {} {})",
            p.name,
            p.position.friendly_name(labels),
            p.age,
            labels.years
        );
    }
    out.push('\n');
    let _ = writeln!(out, "{}", "-".repeat(TEAM_RULE_WIDTH));
    out.push('\n');
}
