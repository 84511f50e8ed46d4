use crate::{
    shapes::{draw::DrawConfig, enums::BalanceModeEnum},
    util::split_labels,
};
use clap::{Args, Parser, Subcommand};

/// Without a subcommand the roster and draw screens open.
#[derive(Debug, Parser)]
#[command(name = "pelada", version)]
#[command(about = "Register pickup soccer players and draw balanced teams", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Draw teams from the roster and print them
    Draw(DrawArgs),
}

/// Overrides on top of the configured draw parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct DrawArgs {
    /// Number of teams
    #[arg(long)]
    pub teams: Option<usize>,

    /// Comma separated bib colors, padded with generated labels
    #[arg(long)]
    pub labels: Option<String>,

    /// Plain shuffle, no age or position balancing
    #[arg(long)]
    pub random: bool,

    /// Replay a previous draw
    #[arg(long)]
    pub seed: Option<u64>,
}

impl DrawArgs {
    pub fn apply(&self, config: DrawConfig) -> DrawConfig {
        DrawConfig {
            team_count: self.teams.unwrap_or(config.team_count),
            team_labels: self
                .labels
                .as_deref()
                .map(split_labels)
                .unwrap_or(config.team_labels),
            balance_mode: if self.random {
                BalanceModeEnum::Random
            } else {
                config.balance_mode
            },
            seed: self.seed.or(config.seed),
            strict: config.strict,
        }
    }
}
