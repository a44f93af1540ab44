//! reqwest-backed [`LeagueDataProvider`] for the public Sleeper API.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;

use super::provider::LeagueDataProvider;
use super::types::{
    BracketMatchup, Draft, DraftPick, League, Matchup, PlayerDirectory, PlayerStatsRecord,
    ProjectionSet, Roster, StatLine, User,
};
use crate::core::http::default_header_map;
use crate::{
    LeagueId, PlayerId, Result, Season, SleeperError, Week, API_BASE_ENV_VAR, STATS_BASE_ENV_VAR,
};


/// Base path for the Sleeper v1 read API.
pub const SLEEPER_API_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Host serving per-player stats and projections.
pub const SLEEPER_STATS_BASE_URL: &str = "https://api.sleeper.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct SleeperClient {
    client: Client,
    api_base: String,
    stats_base: String,
}

impl SleeperClient {
    pub fn new() -> Result<Self> {
        Self::with_base_urls(SLEEPER_API_BASE_URL, SLEEPER_STATS_BASE_URL)
    }

    /// Point the client somewhere else (a mock server in tests).
    pub fn with_base_urls(api_base: &str, stats_base: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("sleeper-ffl/", env!("CARGO_PKG_VERSION")))
            .default_headers(default_header_map())
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            stats_base: stats_base.trim_end_matches('/').to_string(),
        })
    }

    /// Honour `SLEEPER_API_BASE_URL` / `SLEEPER_STATS_BASE_URL` when set.
    pub fn from_env() -> Result<Self> {
        let api = std::env::var(API_BASE_ENV_VAR).unwrap_or_else(|_| SLEEPER_API_BASE_URL.into());
        let stats =
            std::env::var(STATS_BASE_ENV_VAR).unwrap_or_else(|_| SLEEPER_STATS_BASE_URL.into());
        Self::with_base_urls(&api, &stats)
    }

    /// GET and decode. Sleeper answers `null` for unknown resources, which
    /// comes back as `Ok(None)`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>> {
        tracing::debug!(url, "GET");
        let body = self
            .client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(serde_json::from_str::<Option<T>>(&body)?)
    }

    async fn get_list<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
        Ok(self.get_json::<Vec<T>>(url, &[]).await?.unwrap_or_default())
    }

    fn league_url(&self, league_id: LeagueId, tail: &str) -> String {
        format!("{}/league/{}{}", self.api_base, league_id, tail)
    }
}

#[async_trait]
impl LeagueDataProvider for SleeperClient {
    async fn league(&self, league_id: LeagueId) -> Result<League> {
        self.get_json(&self.league_url(league_id, ""), &[])
            .await?
            .ok_or_else(|| SleeperError::NoData {
                resource: format!("league {}", league_id),
            })
    }

    async fn rosters(&self, league_id: LeagueId) -> Result<Vec<Roster>> {
        self.get_list(&self.league_url(league_id, "/rosters")).await
    }

    async fn users(&self, league_id: LeagueId) -> Result<Vec<User>> {
        self.get_list(&self.league_url(league_id, "/users")).await
    }

    async fn matchups(&self, league_id: LeagueId, week: Week) -> Result<Vec<Matchup>> {
        self.get_list(&self.league_url(league_id, &format!("/matchups/{}", week)))
            .await
    }

    async fn winners_bracket(&self, league_id: LeagueId) -> Result<Vec<BracketMatchup>> {
        self.get_list(&self.league_url(league_id, "/winners_bracket"))
            .await
    }

    async fn losers_bracket(&self, league_id: LeagueId) -> Result<Vec<BracketMatchup>> {
        self.get_list(&self.league_url(league_id, "/losers_bracket"))
            .await
    }

    async fn draft(&self, draft_id: &str) -> Result<Draft> {
        let url = format!("{}/draft/{}", self.api_base, draft_id);
        self.get_json(&url, &[])
            .await?
            .ok_or_else(|| SleeperError::NoData {
                resource: format!("draft {}", draft_id),
            })
    }

    async fn draft_picks(&self, draft_id: &str) -> Result<Vec<DraftPick>> {
        self.get_list(&format!("{}/draft/{}/picks", self.api_base, draft_id))
            .await
    }

    async fn player_directory(&self) -> Result<Arc<PlayerDirectory>> {
        let url = format!("{}/players/nfl", self.api_base);
        let directory: PlayerDirectory = self.get_json(&url, &[]).await?.unwrap_or_default();
        Ok(Arc::new(directory))
    }

    async fn season_stats(&self, season: Season) -> Result<Arc<HashMap<String, StatLine>>> {
        let url = format!("{}/stats/nfl/regular/{}", self.api_base, season);
        let stats: HashMap<String, StatLine> = self.get_json(&url, &[]).await?.unwrap_or_default();
        Ok(Arc::new(stats))
    }

    async fn player_projections(
        &self,
        player_id: &PlayerId,
        season: Season,
    ) -> Result<ProjectionSet> {
        let url = format!("{}/projections/nfl/player/{}", self.stats_base, player_id);
        let query = [
            ("season_type", "regular".to_string()),
            ("season", season.to_string()),
            ("grouping", "week".to_string()),
        ];
        let records: BTreeMap<String, Option<PlayerStatsRecord>> =
            self.get_json(&url, &query).await?.unwrap_or_default();
        let mut set = ProjectionSet::from_weekly_records(records);

        // Players with no weekly rows yet still have a season-level record.
        if set.position.is_none() {
            let url = format!("{}/stats/nfl/player/{}", self.stats_base, player_id);
            let query = [
                ("season_type", "regular".to_string()),
                ("season", season.to_string()),
                ("grouping", "season".to_string()),
            ];
            match self.get_json::<PlayerStatsRecord>(&url, &query).await {
                Ok(record) => {
                    set.position = record
                        .and_then(|r| r.player)
                        .and_then(|p| p.position)
                        .filter(|p| !p.is_empty());
                }
                Err(e) => {
                    tracing::warn!(
                        player_id = %player_id,
                        error = %e,
                        "season-level position lookup failed"
                    );
                }
            }
        }
        Ok(set)
    }
}
