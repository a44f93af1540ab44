//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{LeagueId, PlayerId, ScoringFormat, Season, Week};

use crate::stats::simulation::SIMULATION_TRIALS;

/// Arguments shared by every league-level command
#[derive(Debug, Args)]
pub struct LeagueArgs {
    /// League ID (or set `SLEEPER_FFL_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Skip the on-disk lookup cache and hit the API directly.
    #[clap(long)]
    pub no_cache: bool,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// League settings, teams, weekly points and playoff brackets.
    LeagueData {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// Power rankings, median and all-play records, and simulated
    /// random-schedule wins.
    Standings {
        #[clap(flatten)]
        league: LeagueArgs,

        /// Simulated schedules per team.
        #[clap(long, default_value_t = SIMULATION_TRIALS)]
        trials: usize,
    },

    /// Per-player points, starts and games over a week range.
    ///
    /// The range is clamped to weeks the league has already scored.
    StatsData {
        #[clap(flatten)]
        league: LeagueArgs,

        /// First week (inclusive).
        #[clap(long, default_value_t = Week::new(1))]
        start_week: Week,

        /// Last week (inclusive).
        #[clap(long, default_value_t = Week::new(18))]
        end_week: Week,

        /// One row per (team, player) instead of one per player.
        #[clap(long)]
        by_roster: bool,

        /// Only print the top N rows.
        #[clap(long)]
        limit: Option<usize>,
    },

    /// Score every draft pick against its end-of-season finish.
    DraftValue {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// Rest-of-season projected points for players.
    Projections {
        /// Sleeper player id (repeatable): `-p 4046 -p 6794`.
        #[clap(short = 'p', long = "player", required = true)]
        player_ids: Vec<PlayerId>,

        /// Season year (e.g. 2025).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Count projections from this week on.
        #[clap(long, short, default_value_t = Week::default())]
        week: Week,

        /// Scoring: std, half_ppr, ppr, or points per reception (0, 0.5, 1).
        #[clap(long, default_value_t = ScoringFormat::default())]
        scoring: ScoringFormat,

        /// Skip the on-disk lookup cache and hit the API directly.
        #[clap(long)]
        no_cache: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum AwardsCmd {
    /// Print the season's awards (seeded with defaults on first read).
    Get {
        /// Season year (e.g. 2025).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Weekly bonuses instead of season awards.
        #[clap(long)]
        bonuses: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Replace the season's awards with the JSON array in a file.
    Put {
        /// Season year (e.g. 2025).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// JSON file holding the full replacement set.
        #[clap(long)]
        file: PathBuf,

        /// Weekly bonuses instead of season awards.
        #[clap(long)]
        bonuses: bool,

        /// Authorization header value, e.g. "Bearer <token>". Checked
        /// against `SLEEPER_FFL_ADMIN_TOKEN`.
        #[clap(long)]
        authorization: Option<String>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "sleeper-ffl", about = "Sleeper fantasy league stats CLI")]
pub struct Sleeper {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get league data and derived stats from Sleeper
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },

    /// Read or replace stored award records
    Awards {
        #[clap(subcommand)]
        cmd: AwardsCmd,
    },

    /// Delete cached lookups (player directory, draft picks, matchups)
    ClearCache,
}
