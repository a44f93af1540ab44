//! Sleeper Fantasy Football league stats
//!
//! Pulls a Sleeper league's settings, rosters, weekly matchups, draft and
//! player stats, and derives season metrics from them.
//!
//! ## Features
//!
//! - **League Data**: Settings, teams, weekly and playoff points, brackets
//! - **Standings**: Median and all-play records, power scores, efficiency
//! - **Schedule Simulation**: Expected wins under random schedules
//! - **Draft Value**: Every pick scored against its end-of-season finish
//! - **Projections**: Rest-of-season projected points per player
//! - **Awards**: Locally stored seasonal awards and weekly bonuses
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use sleeper_ffl::{sleeper::SleeperClient, stats::StatsService, LeagueId};
//!
//! # async fn example() -> sleeper_ffl::Result<()> {
//! let service = StatsService::new(Arc::new(SleeperClient::from_env()?));
//! let standings = service
//!     .load_standings(LeagueId::new(992195707941212160))
//!     .await?;
//!
//! for team in &standings.rankings {
//!     println!("{} {:.2}", team.roster_id, team.power_score);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your league ID to avoid passing it in every command:
//! ```bash
//! export SLEEPER_FFL_LEAGUE_ID=992195707941212160
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod sleeper;
pub mod stats;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, Position, RosterId, ScoringFormat, Season, Week};
pub use error::{Result, SleeperError};

/// Default league for league-level commands.
pub const LEAGUE_ID_ENV_VAR: &str = "SLEEPER_FFL_LEAGUE_ID";

/// Bearer token required by award writes.
pub const ADMIN_TOKEN_ENV_VAR: &str = "SLEEPER_FFL_ADMIN_TOKEN";

/// Overrides `https://api.sleeper.app/v1`.
pub const API_BASE_ENV_VAR: &str = "SLEEPER_API_BASE_URL";

/// Overrides `https://api.sleeper.com`.
pub const STATS_BASE_ENV_VAR: &str = "SLEEPER_STATS_BASE_URL";
