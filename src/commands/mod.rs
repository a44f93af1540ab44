//! Command implementations for the Sleeper league stats CLI

pub mod awards;
pub mod common;
pub mod draft_value;
pub mod league_data;
pub mod projections;
pub mod standings;
pub mod stats_data;

use crate::{
    core::{cache::FileDurableCache, DurableCache},
    LeagueId, Result, SleeperError, LEAGUE_ID_ENV_VAR,
};


/// Explicit league id, else `SLEEPER_FFL_LEAGUE_ID`.
pub(crate) fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    league_id
        .or_else(|| {
            std::env::var(LEAGUE_ID_ENV_VAR)
                .ok()
                .and_then(|s| s.parse::<LeagueId>().ok())
        })
        .ok_or_else(|| SleeperError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        })
}

/// Handle the clear-cache command
pub fn handle_clear_cache() -> Result<()> {
    FileDurableCache::in_user_cache_dir().clear();
    println!("✓ Lookup cache cleared");
    Ok(())
}
