//! In-memory provider for tests and offline runs.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex};

use super::provider::LeagueDataProvider;
use super::types::{
    BracketMatchup, Draft, DraftPick, League, Matchup, PlayerDirectory, ProjectionSet, Roster,
    StatLine, User,
};
use crate::{LeagueId, PlayerId, Result, Season, SleeperError, Week};

/// Provider serving canned data. Every call is counted by method name so
/// tests can assert on fan-out and caching.
#[derive(Default)]
pub struct MockProvider {
    league: Option<League>,
    rosters: Vec<Roster>,
    users: Vec<User>,
    matchups: BTreeMap<Week, Vec<Matchup>>,
    failing_weeks: HashSet<Week>,
    winners_bracket: Vec<BracketMatchup>,
    losers_bracket: Vec<BracketMatchup>,
    draft: Option<Draft>,
    draft_picks: Vec<DraftPick>,
    directory: PlayerDirectory,
    season_stats: HashMap<String, StatLine>,
    projections: HashMap<PlayerId, ProjectionSet>,
    failing_players: HashSet<PlayerId>,
    calls: Mutex<HashMap<&'static str, usize>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_league(mut self, league: League) -> Self {
        self.league = Some(league);
        self
    }

    pub fn with_rosters(mut self, rosters: Vec<Roster>) -> Self {
        self.rosters = rosters;
        self
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    pub fn with_matchups(mut self, week: Week, matchups: Vec<Matchup>) -> Self {
        self.matchups.insert(week, matchups);
        self
    }

    /// Make the matchups call for `week` fail.
    pub fn with_failing_week(mut self, week: Week) -> Self {
        self.failing_weeks.insert(week);
        self
    }

    pub fn with_brackets(mut self, winners: Vec<BracketMatchup>, losers: Vec<BracketMatchup>) -> Self {
        self.winners_bracket = winners;
        self.losers_bracket = losers;
        self
    }

    pub fn with_draft(mut self, draft: Draft, picks: Vec<DraftPick>) -> Self {
        self.draft = Some(draft);
        self.draft_picks = picks;
        self
    }

    pub fn with_directory(mut self, directory: PlayerDirectory) -> Self {
        self.directory = directory;
        self
    }

    pub fn with_season_stats(mut self, stats: HashMap<String, StatLine>) -> Self {
        self.season_stats = stats;
        self
    }

    pub fn with_projections(mut self, player_id: PlayerId, projections: ProjectionSet) -> Self {
        self.projections.insert(player_id, projections);
        self
    }

    /// Make projection lookups for `player_id` fail.
    pub fn with_failing_player(mut self, player_id: PlayerId) -> Self {
        self.failing_players.insert(player_id);
        self
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .get(method)
            .copied()
            .unwrap_or(0)
    }

    fn record(&self, method: &'static str) {
        *self
            .calls
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .entry(method)
            .or_insert(0) += 1;
    }
}

#[async_trait]
impl LeagueDataProvider for MockProvider {
    async fn league(&self, league_id: LeagueId) -> Result<League> {
        self.record("league");
        self.league.clone().ok_or_else(|| SleeperError::NoData {
            resource: format!("league {}", league_id),
        })
    }

    async fn rosters(&self, _league_id: LeagueId) -> Result<Vec<Roster>> {
        self.record("rosters");
        Ok(self.rosters.clone())
    }

    async fn users(&self, _league_id: LeagueId) -> Result<Vec<User>> {
        self.record("users");
        Ok(self.users.clone())
    }

    async fn matchups(&self, _league_id: LeagueId, week: Week) -> Result<Vec<Matchup>> {
        self.record("matchups");
        // Yield so concurrent callers actually overlap.
        tokio::task::yield_now().await;
        if self.failing_weeks.contains(&week) {
            return Err(SleeperError::NoData {
                resource: format!("matchups week {}", week),
            });
        }
        Ok(self.matchups.get(&week).cloned().unwrap_or_default())
    }

    async fn winners_bracket(&self, _league_id: LeagueId) -> Result<Vec<BracketMatchup>> {
        self.record("winners_bracket");
        Ok(self.winners_bracket.clone())
    }

    async fn losers_bracket(&self, _league_id: LeagueId) -> Result<Vec<BracketMatchup>> {
        self.record("losers_bracket");
        Ok(self.losers_bracket.clone())
    }

    async fn draft(&self, draft_id: &str) -> Result<Draft> {
        self.record("draft");
        self.draft.clone().ok_or_else(|| SleeperError::NoData {
            resource: format!("draft {}", draft_id),
        })
    }

    async fn draft_picks(&self, _draft_id: &str) -> Result<Vec<DraftPick>> {
        self.record("draft_picks");
        Ok(self.draft_picks.clone())
    }

    async fn player_directory(&self) -> Result<Arc<PlayerDirectory>> {
        self.record("player_directory");
        Ok(Arc::new(self.directory.clone()))
    }

    async fn season_stats(&self, _season: Season) -> Result<Arc<HashMap<String, StatLine>>> {
        self.record("season_stats");
        Ok(Arc::new(self.season_stats.clone()))
    }

    async fn player_projections(
        &self,
        player_id: &PlayerId,
        _season: Season,
    ) -> Result<ProjectionSet> {
        self.record("player_projections");
        tokio::task::yield_now().await;
        if self.failing_players.contains(player_id) {
            return Err(SleeperError::NoData {
                resource: format!("projections for {}", player_id),
            });
        }
        Ok(self.projections.get(player_id).cloned().unwrap_or_default())
    }
}
