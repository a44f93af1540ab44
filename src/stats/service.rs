//! Async entry points: fetch from a [`LeagueDataProvider`], run the engine,
//! return plain serializable records.

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, warn};

use super::aggregate::{
    build_roster_series, clamp_week_range, collapse_by_player, sort_by_total_points,
    ContributionAccumulator, ContributionContext, PlayerContribution, RosterSeries, WeekSnapshot,
};
use super::draft_value::{draft_awards, score_draft, DraftAwards, ScoredPick};
use super::projections::{self, PlayerProjection};
use super::ranking::{rank_rosters, weekly_medians, RankedRoster};
use super::simulation::{simulate_schedules_with, SimulationResult, SIMULATION_TRIALS};
use crate::cli::types::{LeagueId, PlayerId, RosterId, ScoringFormat, Season, Week};
use crate::sleeper::provider::LeagueDataProvider;
use crate::sleeper::types::{BracketMatchup, DraftPick, League, Roster, User};
use crate::{Result, SleeperError};


/// One roster with its owner's names and official totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub roster_id: RosterId,
    pub owner_id: Option<String>,
    pub display_name: Option<String>,
    pub team_name: Option<String>,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
    pub potential_points: f64,
    pub record: String,
}

impl TeamSummary {
    /// Team name, else owner display name, else "Team {roster_id}".
    pub fn label(&self) -> String {
        self.team_name
            .clone()
            .or_else(|| self.display_name.clone())
            .unwrap_or_else(|| format!("Team {}", self.roster_id))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueSummary {
    pub league_id: LeagueId,
    pub name: Option<String>,
    pub season: String,
    pub season_type: String,
    pub total_rosters: u32,
    pub regular_season_length: u16,
    pub last_scored_week: u16,
    pub draft_id: Option<String>,
    pub median_scoring: bool,
    pub scoring_format: ScoringFormat,
    pub roster_positions: Vec<String>,
    pub scoring_settings: BTreeMap<String, f64>,
    pub rosters: Vec<TeamSummary>,
    pub weekly_points: Vec<RosterSeries>,
    pub winners_bracket: Vec<BracketMatchup>,
    pub losers_bracket: Vec<BracketMatchup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsData {
    pub league_id: LeagueId,
    /// Clamped range; `None` when nothing in the request has been scored.
    pub weeks: Option<(Week, Week)>,
    /// One row per (roster, player).
    pub by_roster: Vec<PlayerContribution>,
    /// One row per player, owned by the last roster that had them.
    pub season: Vec<PlayerContribution>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Standings {
    pub league_id: LeagueId,
    pub median_scoring: bool,
    pub regular_season_length: u16,
    pub weekly_medians: Vec<f64>,
    /// Standings order.
    pub rankings: Vec<RankedRoster>,
    /// Same order as `rankings`.
    pub simulations: Vec<SimulationResult>,
    pub teams: Vec<TeamSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftReport {
    pub league_id: LeagueId,
    pub draft_id: String,
    pub draft_type: String,
    pub scoring_format: ScoringFormat,
    pub picks: Vec<ScoredPick>,
    pub awards: DraftAwards,
}

/// League data plus the roster series every season-level view starts from.
struct SeasonData {
    league: League,
    rosters: Vec<Roster>,
    teams: Vec<TeamSummary>,
    regular_season_length: u16,
    weeks: Vec<WeekSnapshot>,
}

/// The stats engine wired to a data provider.
#[derive(Clone)]
pub struct StatsService {
    provider: Arc<dyn LeagueDataProvider>,
    simulation_trials: usize,
}

impl StatsService {
    pub fn new(provider: Arc<dyn LeagueDataProvider>) -> Self {
        Self {
            provider,
            simulation_trials: SIMULATION_TRIALS,
        }
    }

    pub fn with_simulation_trials(mut self, trials: usize) -> Self {
        self.simulation_trials = trials;
        self
    }

    pub fn provider(&self) -> &Arc<dyn LeagueDataProvider> {
        &self.provider
    }

    /// League settings, teams, weekly and playoff points, and both brackets.
    pub async fn load_league_summary(&self, league_id: LeagueId) -> Result<LeagueSummary> {
        let (data, winners_bracket, losers_bracket) = futures::join!(
            self.load_season(league_id),
            self.provider.winners_bracket(league_id),
            self.provider.losers_bracket(league_id),
        );
        let data = data?;
        let winners_bracket = degrade(winners_bracket, "winners bracket");
        let losers_bracket = degrade(losers_bracket, "losers bracket");

        let weekly_points =
            build_roster_series(&data.rosters, &data.weeks, data.regular_season_length);
        let league = data.league;

        Ok(LeagueSummary {
            league_id,
            scoring_format: league.scoring_format(),
            median_scoring: league.median_scoring(),
            last_scored_week: league.last_scored_week(),
            regular_season_length: data.regular_season_length,
            name: league.name,
            season: league.season,
            season_type: league.season_type,
            total_rosters: league.total_rosters,
            draft_id: league.draft_id,
            roster_positions: league.roster_positions,
            scoring_settings: league.scoring_settings,
            rosters: data.teams,
            weekly_points,
            winners_bracket,
            losers_bracket,
        })
    }

    /// Player contributions over `[start_week, end_week]`, clamped to the
    /// weeks the league has scored.
    pub async fn load_stats_data(
        &self,
        league_id: LeagueId,
        start_week: Week,
        end_week: Week,
    ) -> Result<StatsData> {
        let league = self.provider.league(league_id).await?;
        let last_scored = Week::new(league.last_scored_week());
        let Some((start, end)) = clamp_week_range(start_week, end_week, last_scored) else {
            debug!(%league_id, %start_week, %end_week, %last_scored, "no scored weeks in range");
            return Ok(StatsData {
                league_id,
                weeks: None,
                by_roster: Vec::new(),
                season: Vec::new(),
            });
        };

        let (rosters, directory, picks, weeks) = futures::join!(
            self.provider.rosters(league_id),
            self.provider.player_directory(),
            self.draft_picks_for(&league),
            self.fetch_weeks(league_id, start, end),
        );
        let rosters = rosters?;
        let directory = degrade(directory, "player directory");

        let ctx = ContributionContext::new(&rosters, &directory, &picks);
        let mut acc = ContributionAccumulator::new();
        for snapshot in &weeks {
            acc.record_week(snapshot, &ctx);
        }

        let mut by_roster = acc.into_rows();
        let mut season = collapse_by_player(&by_roster);
        sort_by_total_points(&mut by_roster);
        sort_by_total_points(&mut season);

        Ok(StatsData {
            league_id,
            weeks: Some((start, end)),
            by_roster,
            season,
        })
    }

    /// Power rankings, median records, all-play records and simulated
    /// random-schedule wins.
    pub async fn load_standings(&self, league_id: LeagueId) -> Result<Standings> {
        let data = self.load_season(league_id).await?;
        Ok(self.standings(league_id, data, &mut rand::thread_rng()))
    }

    /// [`Self::load_standings`] with a caller-supplied random source.
    pub async fn load_standings_with<R: rand::Rng + ?Sized>(
        &self,
        league_id: LeagueId,
        rng: &mut R,
    ) -> Result<Standings> {
        let data = self.load_season(league_id).await?;
        Ok(self.standings(league_id, data, rng))
    }

    fn standings<R: rand::Rng + ?Sized>(
        &self,
        league_id: LeagueId,
        data: SeasonData,
        rng: &mut R,
    ) -> Standings {
        let median_scoring = data.league.median_scoring();
        let series = build_roster_series(&data.rosters, &data.weeks, data.regular_season_length);

        let rankings = rank_rosters(&series, median_scoring);
        let simulated =
            simulate_schedules_with(&series, median_scoring, self.simulation_trials, rng);
        let by_roster: HashMap<RosterId, SimulationResult> =
            simulated.into_iter().map(|s| (s.roster_id, s)).collect();
        let simulations = rankings
            .iter()
            .filter_map(|r| by_roster.get(&r.roster_id).copied())
            .collect();

        Standings {
            league_id,
            median_scoring,
            regular_season_length: data.regular_season_length,
            weekly_medians: weekly_medians(&series),
            rankings,
            simulations,
            teams: data.teams,
        }
    }

    /// Every pick scored against the season's stats, plus draft awards.
    pub async fn load_draft_values(&self, league_id: LeagueId) -> Result<DraftReport> {
        let league = self.provider.league(league_id).await?;
        let draft_id = league.draft_id.clone().ok_or_else(|| SleeperError::NoData {
            resource: format!("draft for league {}", league_id),
        })?;
        let season: Season = league.season.parse()?;
        let format = league.scoring_format();

        let (draft, picks, stats, directory) = futures::join!(
            self.provider.draft(&draft_id),
            self.provider.draft_picks(&draft_id),
            self.provider.season_stats(season),
            self.provider.player_directory(),
        );
        let draft = draft?;
        let picks = picks?;
        let stats = stats?;
        let directory = degrade(directory, "player directory");

        let scored = score_draft(&draft, &picks, &stats, &directory, format);
        let awards = draft_awards(&scored);

        Ok(DraftReport {
            league_id,
            draft_id,
            draft_type: draft.draft_type,
            scoring_format: format,
            picks: scored,
            awards,
        })
    }

    pub async fn fetch_projections(
        &self,
        player_ids: &[PlayerId],
        season: Season,
        target_week: Week,
        format: ScoringFormat,
    ) -> Vec<PlayerProjection> {
        projections::fetch_projections(
            self.provider.as_ref(),
            player_ids,
            season,
            target_week,
            format,
        )
        .await
    }

    async fn load_season(&self, league_id: LeagueId) -> Result<SeasonData> {
        let (league, rosters, users) = futures::try_join!(
            self.provider.league(league_id),
            self.provider.rosters(league_id),
            self.provider.users(league_id),
        )?;

        let regular_season_length = league.regular_season_length().unwrap_or_else(|| {
            rosters
                .iter()
                .map(|r| r.weeks_completed() as u16)
                .max()
                .unwrap_or(0)
        });
        let last_scored = Week::new(league.last_scored_week());
        let weeks = match clamp_week_range(Week::new(1), last_scored, last_scored) {
            Some((start, end)) => self.fetch_weeks(league_id, start, end).await,
            None => Vec::new(),
        };
        let teams = team_summaries(&rosters, &users);

        Ok(SeasonData {
            league,
            rosters,
            teams,
            regular_season_length,
            weeks,
        })
    }

    /// All weeks fetched together; a failed week becomes an empty snapshot.
    async fn fetch_weeks(&self, league_id: LeagueId, start: Week, end: Week) -> Vec<WeekSnapshot> {
        let weeks: Vec<Week> = (start.as_u16()..=end.as_u16()).map(Week::new).collect();
        let fetched = join_all(
            weeks
                .iter()
                .map(|week| self.provider.matchups(league_id, *week)),
        )
        .await;

        weeks
            .into_iter()
            .zip(fetched)
            .map(|(week, outcome)| match outcome {
                Ok(matchups) => WeekSnapshot::new(week, matchups),
                Err(e) => {
                    warn!(%league_id, %week, error = %e, "matchups unavailable, treating week as empty");
                    WeekSnapshot::empty(week)
                }
            })
            .collect()
    }

    async fn draft_picks_for(&self, league: &League) -> Vec<DraftPick> {
        let Some(draft_id) = league.draft_id.as_deref() else {
            return Vec::new();
        };
        degrade(self.provider.draft_picks(draft_id).await, "draft picks")
    }
}

fn team_summaries(rosters: &[Roster], users: &[User]) -> Vec<TeamSummary> {
    let by_id: HashMap<&str, &User> = users.iter().map(|u| (u.user_id.as_str(), u)).collect();
    rosters
        .iter()
        .map(|roster| {
            let user = roster
                .owner_id
                .as_deref()
                .and_then(|id| by_id.get(id).copied());
            TeamSummary {
                roster_id: roster.roster_id,
                owner_id: roster.owner_id.clone(),
                display_name: user.and_then(|u| u.display_name.clone()),
                team_name: user.and_then(|u| u.team_name()).map(str::to_string),
                wins: roster.settings.wins,
                losses: roster.settings.losses,
                ties: roster.settings.ties,
                points_for: roster.settings.points_for(),
                points_against: roster.settings.points_against(),
                potential_points: roster.settings.potential_points(),
                record: roster.record().to_string(),
            }
        })
        .collect()
}

fn degrade<T: Default>(outcome: Result<T>, what: &str) -> T {
    outcome.unwrap_or_else(|e| {
        warn!(error = %e, "{} unavailable, continuing without it", what);
        T::default()
    })
}
