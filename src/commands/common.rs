//! Common utilities and helper functions shared across commands.

use serde::Serialize;
use std::sync::Arc;

use crate::{
    core::cache::FileDurableCache,
    sleeper::{CachedProvider, LeagueDataProvider, SleeperClient},
    stats::StatsService,
    LeagueId, Result,
};

use super::resolve_league_id;

/// Sleeper client, behind the lookup cache unless `no_cache` is set.
pub fn live_provider(no_cache: bool) -> Result<Arc<dyn LeagueDataProvider>> {
    let client = SleeperClient::from_env()?;
    if no_cache {
        return Ok(Arc::new(client));
    }
    let durable = Arc::new(FileDurableCache::in_user_cache_dir());
    Ok(Arc::new(CachedProvider::with_durable(client, durable)))
}

/// Context containing common resources needed by league commands
pub struct CommandContext {
    pub league_id: LeagueId,
    pub service: StatsService,
}

impl CommandContext {
    /// Resolve the league and connect to the live API
    pub fn new(league_id: Option<LeagueId>, no_cache: bool) -> Result<Self> {
        let league_id = resolve_league_id(league_id)?;
        Ok(Self::with_provider(league_id, live_provider(no_cache)?))
    }

    pub fn with_provider(league_id: LeagueId, provider: Arc<dyn LeagueDataProvider>) -> Self {
        Self {
            league_id,
            service: StatsService::new(provider),
        }
    }
}

/// Pretty JSON for `--json` output
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// "W-L" or "W-L-T" when there are ties
pub fn format_record(wins: u32, losses: u32, ties: u32) -> String {
    if ties > 0 {
        format!("{}-{}-{}", wins, losses, ties)
    } else {
        format!("{}-{}", wins, losses)
    }
}

/// Truncate or pad to a fixed column width
pub fn column(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{:<width$}", truncated, width = width)
}
