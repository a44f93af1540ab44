//! The seam between the stats engine and wherever league data comes from.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use super::types::{
    BracketMatchup, Draft, DraftPick, League, Matchup, PlayerDirectory, ProjectionSet, Roster,
    StatLine, User,
};
use crate::{LeagueId, PlayerId, Result, Season, Week};

/// Remote league/player data, one call per resource.
///
/// The HTTP implementation is [`super::http::SleeperClient`]; tests use
/// [`super::mock::MockProvider`] and caching is layered on with
/// [`super::cached::CachedProvider`].
#[async_trait]
pub trait LeagueDataProvider: Send + Sync {
    async fn league(&self, league_id: LeagueId) -> Result<League>;

    async fn rosters(&self, league_id: LeagueId) -> Result<Vec<Roster>>;

    async fn users(&self, league_id: LeagueId) -> Result<Vec<User>>;

    /// Matchups for a single week. Unplayed weeks come back empty.
    async fn matchups(&self, league_id: LeagueId, week: Week) -> Result<Vec<Matchup>>;

    async fn winners_bracket(&self, league_id: LeagueId) -> Result<Vec<BracketMatchup>>;

    async fn losers_bracket(&self, league_id: LeagueId) -> Result<Vec<BracketMatchup>>;

    async fn draft(&self, draft_id: &str) -> Result<Draft>;

    async fn draft_picks(&self, draft_id: &str) -> Result<Vec<DraftPick>>;

    /// Full NFL player directory keyed by player id.
    async fn player_directory(&self) -> Result<Arc<PlayerDirectory>>;

    /// Regular-season stat totals for every player, keyed by player id.
    async fn season_stats(&self, season: Season) -> Result<Arc<HashMap<String, StatLine>>>;

    /// Week-by-week projections for one player plus their season position.
    async fn player_projections(&self, player_id: &PlayerId, season: Season)
        -> Result<ProjectionSet>;
}
