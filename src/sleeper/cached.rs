//! Caching decorator over any [`LeagueDataProvider`].
//!
//! Only the expensive, slow-changing lookups are cached: the player
//! directory, draft picks and per-week matchups. Everything else passes
//! straight through.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use super::provider::LeagueDataProvider;
use super::types::{
    BracketMatchup, Draft, DraftPick, League, Matchup, PlayerDirectory, ProjectionSet, Roster,
    StatLine, User,
};
use crate::core::cache::{
    DraftPicksKey, DurableCache, MatchupsKey, NoopDurableCache, PlayerDirectoryKey, TtlCache,
};
use crate::{LeagueId, PlayerId, Result, Season, Week};

const PLAYER_DIRECTORY_TTL: Duration = Duration::from_secs(24 * 60 * 60);
const DRAFT_PICKS_TTL: Duration = Duration::from_secs(6 * 60 * 60);
const MATCHUPS_TTL: Duration = Duration::from_secs(10 * 60);

pub struct CachedProvider<P: LeagueDataProvider> {
    inner: P,
    players: TtlCache<PlayerDirectoryKey, Arc<PlayerDirectory>>,
    draft_picks: TtlCache<DraftPicksKey, Vec<DraftPick>>,
    matchups: TtlCache<MatchupsKey, Vec<Matchup>>,
}

impl<P: LeagueDataProvider> CachedProvider<P> {
    /// Memory-only caching
    pub fn new(inner: P) -> Self {
        Self::with_durable(inner, Arc::new(NoopDurableCache))
    }

    pub fn with_durable(inner: P, durable: Arc<dyn DurableCache>) -> Self {
        Self {
            inner,
            players: TtlCache::with_durable(1, PLAYER_DIRECTORY_TTL, durable.clone()),
            draft_picks: TtlCache::with_durable(16, DRAFT_PICKS_TTL, durable.clone()),
            matchups: TtlCache::with_durable(256, MATCHUPS_TTL, durable),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Forget every cached lookup, including the durable copies.
    pub fn clear(&self) {
        self.players.clear();
        self.draft_picks.clear();
        self.matchups.clear();
    }

    pub fn memory_stats(&self) -> HashMap<String, (usize, usize)> {
        let mut stats = HashMap::new();
        stats.insert("players".to_string(), self.players.memory_stats());
        stats.insert("draft_picks".to_string(), self.draft_picks.memory_stats());
        stats.insert("matchups".to_string(), self.matchups.memory_stats());
        stats
    }
}

#[async_trait]
impl<P: LeagueDataProvider> LeagueDataProvider for CachedProvider<P> {
    async fn league(&self, league_id: LeagueId) -> Result<League> {
        self.inner.league(league_id).await
    }

    async fn rosters(&self, league_id: LeagueId) -> Result<Vec<Roster>> {
        self.inner.rosters(league_id).await
    }

    async fn users(&self, league_id: LeagueId) -> Result<Vec<User>> {
        self.inner.users(league_id).await
    }

    async fn matchups(&self, league_id: LeagueId, week: Week) -> Result<Vec<Matchup>> {
        let key = MatchupsKey { league_id, week };
        self.matchups
            .get_or_fetch(key, || self.inner.matchups(league_id, week))
            .await
    }

    async fn winners_bracket(&self, league_id: LeagueId) -> Result<Vec<BracketMatchup>> {
        self.inner.winners_bracket(league_id).await
    }

    async fn losers_bracket(&self, league_id: LeagueId) -> Result<Vec<BracketMatchup>> {
        self.inner.losers_bracket(league_id).await
    }

    async fn draft(&self, draft_id: &str) -> Result<Draft> {
        self.inner.draft(draft_id).await
    }

    async fn draft_picks(&self, draft_id: &str) -> Result<Vec<DraftPick>> {
        let key = DraftPicksKey {
            draft_id: draft_id.to_string(),
        };
        self.draft_picks
            .get_or_fetch(key, || self.inner.draft_picks(draft_id))
            .await
    }

    async fn player_directory(&self) -> Result<Arc<PlayerDirectory>> {
        self.players
            .get_or_fetch(PlayerDirectoryKey, || self.inner.player_directory())
            .await
    }

    async fn season_stats(&self, season: Season) -> Result<Arc<HashMap<String, StatLine>>> {
        self.inner.season_stats(season).await
    }

    async fn player_projections(
        &self,
        player_id: &PlayerId,
        season: Season,
    ) -> Result<ProjectionSet> {
        self.inner.player_projections(player_id, season).await
    }
}
